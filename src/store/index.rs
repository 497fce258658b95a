//! Lookup tables over the built model.
//!
//! Each table is filled by exactly one build pass, in pass order; nothing
//! else writes to them.

use indexmap::IndexMap;
use std::sync::Arc;

use super::ExtensionMethod;
use crate::base::{ItemRef, MemberId, NamespaceId, TypeId};

/// Entity lookups by name, uid and doc id.
#[derive(Clone, Debug, Default)]
pub struct StoreIndex {
    /// Namespace name -> namespace.
    pub(crate) namespaces_by_name: IndexMap<Arc<str>, NamespaceId>,
    /// Type full name -> type.
    pub(crate) types_by_full_name: IndexMap<Arc<str>, TypeId>,
    /// Type uid -> type.
    pub(crate) types_by_uid: IndexMap<Arc<str>, TypeId>,
    /// Member uid -> member. Overload placeholders are not included.
    pub(crate) members_by_uid: IndexMap<Arc<str>, MemberId>,
    /// Doc id -> type or member; on conflict the later entity wins.
    pub(crate) items_by_doc_id: IndexMap<Arc<str>, ItemRef>,
}

impl StoreIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn namespace_by_name(&self, name: &str) -> Option<NamespaceId> {
        self.namespaces_by_name.get(name).copied()
    }

    pub fn type_by_full_name(&self, full_name: &str) -> Option<TypeId> {
        self.types_by_full_name.get(full_name).copied()
    }

    pub fn type_by_uid(&self, uid: &str) -> Option<TypeId> {
        self.types_by_uid.get(uid).copied()
    }

    pub fn member_by_uid(&self, uid: &str) -> Option<MemberId> {
        self.members_by_uid.get(uid).copied()
    }

    pub fn item_by_doc_id(&self, doc_id: &str) -> Option<ItemRef> {
        self.items_by_doc_id.get(doc_id).copied()
    }

    /// Returns true when the uid names a type or a member.
    pub fn contains_uid(&self, uid: &str) -> bool {
        self.types_by_uid.contains_key(uid) || self.members_by_uid.contains_key(uid)
    }

    pub fn namespaces(&self) -> impl Iterator<Item = (&str, NamespaceId)> {
        self.namespaces_by_name.iter().map(|(k, v)| (k.as_ref(), *v))
    }

    pub fn types_by_uid(&self) -> impl Iterator<Item = (&str, TypeId)> {
        self.types_by_uid.iter().map(|(k, v)| (k.as_ref(), *v))
    }

    pub fn members_by_uid(&self) -> impl Iterator<Item = (&str, MemberId)> {
        self.members_by_uid.iter().map(|(k, v)| (k.as_ref(), *v))
    }

    pub fn type_count(&self) -> usize {
        self.types_by_uid.len()
    }

    pub fn member_count(&self) -> usize {
        self.members_by_uid.len()
    }
}

/// Extension-method declarations by member doc id, and by target uid.
#[derive(Clone, Debug, Default)]
pub struct ExtensionIndex {
    pub(crate) by_member_doc_id: IndexMap<Arc<str>, ExtensionMethod>,
    /// Target uid (doc id without `T:`) -> member doc ids.
    pub(crate) by_target: IndexMap<Arc<str>, Vec<Arc<str>>>,
}

impl ExtensionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, member_doc_id: &str) -> Option<&ExtensionMethod> {
        self.by_member_doc_id.get(member_doc_id)
    }

    /// Declarations targeting the given type uid.
    pub fn targeting<'a>(&'a self, target_uid: &str) -> impl Iterator<Item = &'a ExtensionMethod> + 'a {
        self.by_target
            .get(target_uid)
            .into_iter()
            .flatten()
            .filter_map(|doc_id| self.by_member_doc_id.get(doc_id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExtensionMethod> {
        self.by_member_doc_id.values()
    }

    pub fn len(&self) -> usize {
        self.by_member_doc_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_member_doc_id.is_empty()
    }
}
