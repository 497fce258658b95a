//! Type definitions.

use indexmap::IndexMap;
use std::sync::Arc;

use super::{AssemblyInfo, Attribute, Docs, ItemData, ItemType, Parameter};
use crate::base::{MemberId, NamespaceId};

/// Reference to a base type, by type string.
#[derive(Clone, Debug, PartialEq)]
pub struct BaseType {
    /// Type string as written, e.g. `System.Collections.ObjectModel.Collection<T>`.
    pub name: Arc<str>,
    uid: Option<Arc<str>>,
}

impl BaseType {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            uid: None,
        }
    }

    /// Uid of the base type; set by the identifier pass.
    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    pub(crate) fn set_uid(&mut self, uid: impl Into<Arc<str>>) {
        self.uid = Some(uid.into());
    }
}

/// A documented type: class, struct, interface, enum or delegate.
#[derive(Clone, Debug)]
pub struct TypeDef {
    pub item: ItemData,
    /// Namespace-qualified name with generic parameters, e.g. `System.Collections.Generic.List<T>`.
    pub full_name: Arc<str>,
    /// Id supplied by the loader; when present the identifier pass keeps it.
    pub raw_id: Option<Arc<str>>,
    pub base_type: Option<BaseType>,
    /// Implemented interface type strings.
    pub interfaces: Vec<Arc<str>>,
    /// Ancestor uids, root first, immediate base last.
    pub inheritance_uids: Vec<Arc<str>>,
    /// Local member id -> uid of the nearest ancestor declaring it.
    pub inherited_members: IndexMap<Arc<str>, Arc<str>>,
    /// Uids of applicable extension methods, sorted.
    pub extension_methods: Vec<Arc<str>>,
    pub(super) namespace: Option<NamespaceId>,
    pub(super) members: Vec<MemberId>,
    pub(super) overloads: Vec<MemberId>,
}

impl TypeDef {
    pub fn new(
        name: impl Into<Arc<str>>,
        full_name: impl Into<Arc<str>>,
        item_type: ItemType,
    ) -> Self {
        Self {
            item: ItemData::new(name, item_type),
            full_name: full_name.into(),
            raw_id: None,
            base_type: None,
            interfaces: Vec::new(),
            inheritance_uids: Vec::new(),
            inherited_members: IndexMap::new(),
            extension_methods: Vec::new(),
            namespace: None,
            members: Vec::new(),
            overloads: Vec::new(),
        }
    }

    pub fn with_doc_id(mut self, doc_id: impl Into<Arc<str>>) -> Self {
        self.item.doc_id = Some(doc_id.into());
        self
    }

    pub fn with_raw_id(mut self, id: impl Into<Arc<str>>) -> Self {
        self.raw_id = Some(id.into());
        self
    }

    pub fn with_base_type(mut self, name: impl Into<Arc<str>>) -> Self {
        self.base_type = Some(BaseType::new(name));
        self
    }

    pub fn with_interface(mut self, name: impl Into<Arc<str>>) -> Self {
        self.interfaces.push(name.into());
        self
    }

    pub fn with_type_parameters(mut self, names: &[&str]) -> Self {
        self.item.type_parameters = names.iter().map(|n| Parameter::type_param(n)).collect();
        self
    }

    pub fn with_modifiers(mut self, modifiers: &[&str]) -> Self {
        self.item.modifiers.insert(
            crate::base::constants::CSHARP_MODIFIERS.to_string(),
            modifiers.iter().map(|m| m.to_string()).collect(),
        );
        self
    }

    pub fn with_attribute(mut self, declaration: &str) -> Self {
        self.item.attributes.push(Attribute::new(declaration));
        self
    }

    pub fn with_docs(mut self, docs: Docs) -> Self {
        self.item.docs = Some(docs);
        self
    }

    pub fn with_assembly(mut self, assembly: AssemblyInfo) -> Self {
        self.item.assembly_info.push(assembly);
        self
    }

    pub fn with_source_path(mut self, path: impl Into<Arc<str>>) -> Self {
        self.item.source_path = Some(path.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.item.name
    }

    pub fn uid(&self) -> Option<&str> {
        self.item.uid()
    }

    /// Owning namespace, once added to a model.
    pub fn namespace(&self) -> Option<NamespaceId> {
        self.namespace
    }

    /// Declared members, in declaration order.
    pub fn members(&self) -> &[MemberId] {
        &self.members
    }

    /// Overload-group placeholders.
    pub fn overloads(&self) -> &[MemberId] {
        &self.overloads
    }

    /// Returns true for classes that are not marked static.
    pub fn is_concrete_class(&self) -> bool {
        self.item.item_type == ItemType::Class && self.item.is_static() != Some(true)
    }
}
