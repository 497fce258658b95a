//! Framework / moniker merge.
//!
//! [`assign_monikers`] runs right after the identifier pass: overload
//! grouping and extension-method applicability both read monikers.
//! [`merge`] runs near the end and derives assembly and package metadata
//! from them.

use indexmap::IndexMap;
use tracing::debug;

use super::BuildContext;
use crate::base::constants::meta;
use crate::base::{ItemRef, MemberId, TypeId};
use crate::model::MetadataValue;

/// Copy monikers from the frameworks index: namespaces by uid, types and
/// members by doc id. A member doc id missing from the index is an error.
pub fn assign_monikers(ctx: &mut BuildContext<'_>) {
    let frameworks = &ctx.inputs.frameworks;
    if frameworks.is_empty() {
        return;
    }

    let mut assigned = 0usize;
    let namespaces: Vec<_> = ctx.model.namespace_ids().collect();
    for ns in namespaces {
        let item = &mut ctx.model.namespace_mut(ns).item;
        if let Some(monikers) = item.uid().and_then(|uid| frameworks.get(uid)) {
            item.metadata
                .insert(meta::MONIKERS.to_string(), MetadataValue::from(monikers.to_vec()));
            assigned += 1;
        }

        let types = ctx.model.namespace(ns).types().to_vec();
        for ty in types {
            let item = &mut ctx.model.type_def_mut(ty).item;
            let doc_id = item.doc_id.clone().filter(|d| !d.is_empty());
            if let Some(monikers) = doc_id.and_then(|d| frameworks.get(&d)) {
                item.metadata
                    .insert(meta::MONIKERS.to_string(), MetadataValue::from(monikers.to_vec()));
                assigned += 1;
            }

            let members = ctx.model.type_def(ty).members().to_vec();
            for m in members {
                let item = &mut ctx.model.member_mut(m).item;
                let Some(doc_id) = item.doc_id.clone().filter(|d| !d.is_empty()) else {
                    continue;
                };
                match frameworks.get(&doc_id) {
                    Some(monikers) => {
                        item.metadata.insert(
                            meta::MONIKERS.to_string(),
                            MetadataValue::from(monikers.to_vec()),
                        );
                        assigned += 1;
                    }
                    None => {
                        let source = item.source_path.clone();
                        ctx.diagnostics.missing_framework_info(&doc_id, source);
                    }
                }
            }
        }
    }
    debug!(assigned, "monikers assigned");
}

/// Derive assembly-moniker intersections and package names.
pub fn merge(ctx: &mut BuildContext<'_>) {
    if let Some(assembly_monikers) = ctx.inputs.assembly_monikers() {
        let types: Vec<TypeId> = ctx.model.type_ids().collect();
        for ty in types {
            map_assembly_monikers(ctx, ItemRef::Type(ty), &assembly_monikers);
            let members: Vec<MemberId> = ctx.model.type_def(ty).members().to_vec();
            for m in members {
                map_assembly_monikers(ctx, ItemRef::Member(m), &assembly_monikers);
            }
        }
    }

    if let Some(packages) = &ctx.inputs.moniker_packages {
        let mut items = Vec::new();
        for ns in ctx.model.namespace_ids() {
            items.push(ItemRef::Namespace(ns));
            for &ty in ctx.model.namespace(ns).types() {
                items.push(ItemRef::Type(ty));
                let type_def = ctx.model.type_def(ty);
                items.extend(type_def.members().iter().map(|&m| ItemRef::Member(m)));
                items.extend(type_def.overloads().iter().map(|&m| ItemRef::Member(m)));
            }
        }

        let mut with_packages = 0usize;
        for item in items {
            let data = ctx.model.item_mut(item);
            let Some(monikers) = data.monikers() else {
                continue;
            };
            let names: Vec<String> = monikers
                .iter()
                .filter_map(|moniker| packages.get(moniker).cloned())
                .collect();
            if !names.is_empty() {
                data.metadata
                    .insert(meta::PACKAGE_NAMES.to_string(), MetadataValue::from(names));
                with_packages += 1;
            }
        }
        debug!(with_packages, "package names merged");
    }
}

/// Assembly name -> (monikers of the assembly that the entity also has).
fn map_assembly_monikers(
    ctx: &mut BuildContext<'_>,
    item: ItemRef,
    assembly_monikers: &IndexMap<String, Vec<String>>,
) {
    let data = ctx.model.item(item);
    let Some(monikers) = data.monikers() else {
        return;
    };
    let mut assemblies: Vec<&str> = Vec::new();
    for name in data.assembly_info.iter().filter_map(|a| a.name.as_deref()) {
        if !assemblies.contains(&name) {
            assemblies.push(name);
        }
    }

    let mut mapping: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut unknown = Vec::new();
    for assembly in assemblies {
        match assembly_monikers.get(assembly) {
            Some(supported) => {
                let shared: Vec<String> = supported
                    .iter()
                    .filter(|m| monikers.contains(m))
                    .cloned()
                    .collect();
                if !shared.is_empty() {
                    mapping.insert(assembly.to_string(), shared);
                }
            }
            None => unknown.push(assembly.to_string()),
        }
    }

    let uid = data.uid().unwrap_or("").to_string();
    for assembly in unknown {
        ctx.diagnostics.unknown_assembly(&uid, &assembly);
    }
    if !mapping.is_empty() {
        ctx.model.item_mut(item).metadata.insert(
            meta::ASSEMBLY_MONIKER_MAPPING.to_string(),
            MetadataValue::from(mapping),
        );
    }
}
