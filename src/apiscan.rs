//! API scan names.
//!
//! For every type and member of a built store, the runtime names under which
//! the API can be observed in compiled code (accessor methods, delegate
//! plumbing, operator method names) together with the assemblies that ship
//! it. Generation is read-only and runs one namespace per `rayon` task.

use rayon::prelude::*;

use crate::base::constants::meta;
use crate::base::{ItemRef, NamespaceId};
use crate::model::{ItemData, ItemType, Metadata, MetadataValue, Model};
use crate::store::Store;

/// Topic type recorded on every scan record.
pub const TOPIC_TYPE_APIREF: &str = "apiref";
/// API type recorded on every scan record.
pub const API_TYPE_ASSEMBLY: &str = "Assembly";

const DELEGATE_SUFFIXES: [&str; 4] = ["..ctor", ".Invoke", ".BeginInvoke", ".EndInvoke"];

/// Scan names and locations of one type or member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiScanRecord {
    pub uid: String,
    pub item: ItemRef,
    pub api_names: Vec<String>,
    /// `<assembly>.dll` for each distinct assembly.
    pub api_locations: Vec<String>,
}

impl ApiScanRecord {
    /// Record as metadata entries (`api_name`, `api_location`, `topic_type`, `api_type`).
    pub fn to_metadata(&self) -> Metadata {
        let mut metadata = Metadata::new();
        metadata.insert(
            meta::API_NAME.to_string(),
            MetadataValue::from(self.api_names.clone()),
        );
        metadata.insert(
            meta::API_LOCATION.to_string(),
            MetadataValue::from(self.api_locations.clone()),
        );
        metadata.insert(
            meta::TOPIC_TYPE.to_string(),
            MetadataValue::from(vec![TOPIC_TYPE_APIREF.to_string()]),
        );
        metadata.insert(
            meta::API_TYPE.to_string(),
            MetadataValue::from(vec![API_TYPE_ASSEMBLY.to_string()]),
        );
        metadata
    }
}

/// Scan records for every type and member of the store, in namespace order.
///
/// Entities without scan names (namespaces, containers, overload
/// placeholders) produce no record.
pub fn scan(store: &Store) -> Vec<ApiScanRecord> {
    let namespaces: Vec<NamespaceId> = store.namespace_ids().collect();
    namespaces
        .par_iter()
        .map(|&ns| scan_namespace(store.model(), ns))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

fn scan_namespace(model: &Model, ns: NamespaceId) -> Vec<ApiScanRecord> {
    let mut records = Vec::new();
    for &ty in model.namespace(ns).types() {
        let type_def = model.type_def(ty);
        records.extend(record(ItemRef::Type(ty), &type_def.item, None));
        for &m in type_def.members() {
            let member = model.member(m);
            records.extend(record(ItemRef::Member(m), &member.item, type_def.uid()));
        }
    }
    records
}

fn record(item: ItemRef, data: &ItemData, parent_uid: Option<&str>) -> Option<ApiScanRecord> {
    let api_names = api_names(data, parent_uid);
    if api_names.is_empty() {
        return None;
    }
    let mut api_locations: Vec<String> = Vec::new();
    for name in data.assembly_info.iter().filter_map(|a| a.name.as_deref()) {
        let location = format!("{name}.dll");
        if !api_locations.contains(&location) {
            api_locations.push(location);
        }
    }
    Some(ApiScanRecord {
        uid: data.uid().unwrap_or_default().to_string(),
        item,
        api_names,
        api_locations,
    })
}

/// Scan names of one entity; `parent_uid` is the declaring type's uid for members.
pub fn api_names(data: &ItemData, parent_uid: Option<&str>) -> Vec<String> {
    let Some(uid) = data.uid() else {
        return Vec::new();
    };
    let name = data.name.as_ref();
    let member = |sep: &str| format!("{}{}{}", parent_uid.unwrap_or_default(), sep, name);

    match data.item_type {
        ItemType::Class | ItemType::Struct | ItemType::Interface | ItemType::Enum => {
            vec![uid.to_string()]
        }
        ItemType::Delegate => std::iter::once(uid.to_string())
            .chain(DELEGATE_SUFFIXES.iter().map(|s| format!("{uid}{s}")))
            .collect(),
        ItemType::Constructor | ItemType::Method | ItemType::Field => vec![member(".")],
        ItemType::Operator => {
            let mut names = vec![member(".")];
            // Loader names may already carry the metadata prefix; never emit `op_op_`.
            if !name.starts_with("op_") {
                names.push(member(".op_"));
            }
            names
        }
        ItemType::Property | ItemType::AttachedProperty => {
            let mut names = vec![member(".")];
            if data.has_modifier("get") {
                names.push(member(".get_"));
            }
            if data.has_modifier("set") {
                names.push(member(".set_"));
            }
            names
        }
        ItemType::Event | ItemType::AttachedEvent => {
            vec![member("."), member(".add_"), member(".remove_")]
        }
        ItemType::Namespace | ItemType::Container => Vec::new(),
    }
}
