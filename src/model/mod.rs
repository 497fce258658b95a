//! Entity model: the arena of namespaces, types and members.
//!
//! ```text
//! Model
//! ├── namespaces: Vec<Namespace>   (owns TypeId lists)
//! ├── types:      Vec<TypeDef>     (owns MemberId lists, overload placeholders)
//! └── members:    Vec<Member>      (parent: TypeId)
//! ```
//!
//! The loader builds the model once through the `add_*` methods. The build
//! passes then mutate ids and derived fields. Ids are written only through
//! [`Model::set_type_id`] and friends, which recompute the uid of the entity
//! and of everything whose uid is derived from it.

mod attribute;
mod docs;
mod item;
mod member;
mod metadata;
mod namespace;
mod parameter;
mod types;

pub use attribute::Attribute;
pub use docs::{AssemblyInfo, Docs, TypedContent};
pub use item::{ItemData, ItemType};
pub use member::Member;
pub use metadata::{Metadata, MetadataValue};
pub use namespace::Namespace;
pub use parameter::{Parameter, RefType};
pub use types::{BaseType, TypeDef};

use std::sync::Arc;

use crate::base::{ItemRef, MemberId, NamespaceId, TypeId};

/// Arena storage for the whole entity graph.
#[derive(Clone, Debug, Default)]
pub struct Model {
    namespaces: Vec<Namespace>,
    types: Vec<TypeDef>,
    members: Vec<Member>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    pub fn add_namespace(&mut self, namespace: Namespace) -> NamespaceId {
        let id = NamespaceId::from_index(self.namespaces.len());
        self.namespaces.push(namespace);
        id
    }

    /// Add a type owned by the given namespace.
    pub fn add_type(&mut self, namespace: NamespaceId, mut type_def: TypeDef) -> TypeId {
        let id = TypeId::from_index(self.types.len());
        type_def.namespace = Some(namespace);
        self.types.push(type_def);
        self.namespaces[namespace.index()].types.push(id);
        id
    }

    /// Add a member declared by the given type.
    pub fn add_member(&mut self, parent: TypeId, member: Member) -> MemberId {
        let id = self.push_member(parent, member);
        self.types[parent.index()].members.push(id);
        id
    }

    /// Add an overload-group placeholder to the given type.
    pub fn add_overload(&mut self, parent: TypeId, placeholder: Member) -> MemberId {
        let id = self.push_member(parent, placeholder);
        self.types[parent.index()].overloads.push(id);
        id
    }

    fn push_member(&mut self, parent: TypeId, mut member: Member) -> MemberId {
        let id = MemberId::from_index(self.members.len());
        member.parent = Some(parent);
        let parent_uid = self.types[parent.index()].item.uid().map(str::to_owned);
        member.item.refresh_uid(parent_uid.as_deref());
        self.members.push(member);
        id
    }

    // ========================================================================
    // ACCESS
    // ========================================================================

    pub fn namespace(&self, id: NamespaceId) -> &Namespace {
        &self.namespaces[id.index()]
    }

    pub fn namespace_mut(&mut self, id: NamespaceId) -> &mut Namespace {
        &mut self.namespaces[id.index()]
    }

    pub fn type_def(&self, id: TypeId) -> &TypeDef {
        &self.types[id.index()]
    }

    pub fn type_def_mut(&mut self, id: TypeId) -> &mut TypeDef {
        &mut self.types[id.index()]
    }

    pub fn member(&self, id: MemberId) -> &Member {
        &self.members[id.index()]
    }

    pub fn member_mut(&mut self, id: MemberId) -> &mut Member {
        &mut self.members[id.index()]
    }

    /// Shared fields of any entity.
    pub fn item(&self, item: ItemRef) -> &ItemData {
        match item {
            ItemRef::Namespace(id) => &self.namespace(id).item,
            ItemRef::Type(id) => &self.type_def(id).item,
            ItemRef::Member(id) => &self.member(id).item,
        }
    }

    pub fn item_mut(&mut self, item: ItemRef) -> &mut ItemData {
        match item {
            ItemRef::Namespace(id) => &mut self.namespace_mut(id).item,
            ItemRef::Type(id) => &mut self.type_def_mut(id).item,
            ItemRef::Member(id) => &mut self.member_mut(id).item,
        }
    }

    pub fn namespace_ids(&self) -> impl Iterator<Item = NamespaceId> + '_ {
        (0..self.namespaces.len()).map(NamespaceId::from_index)
    }

    /// Types reachable from a namespace, in namespace order.
    pub fn type_ids(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.namespaces.iter().flat_map(|ns| ns.types.iter().copied())
    }

    /// Declared members reachable from a namespace (placeholders excluded).
    pub fn member_ids(&self) -> impl Iterator<Item = MemberId> + '_ {
        self.type_ids()
            .flat_map(move |t| self.types[t.index()].members.iter().copied())
    }

    pub fn namespace_count(&self) -> usize {
        self.namespaces.len()
    }

    // ========================================================================
    // IDENTIFIERS
    // ========================================================================

    pub fn set_namespace_id(&mut self, id: NamespaceId, new_id: impl Into<Arc<str>>) {
        self.namespaces[id.index()]
            .item
            .assign_id(Some(new_id.into()), None);
    }

    /// Set a type's id; the uids of its members and placeholders follow.
    pub fn set_type_id(&mut self, id: TypeId, new_id: impl Into<Arc<str>>) {
        let type_def = &mut self.types[id.index()];
        type_def.item.assign_id(Some(new_id.into()), None);
        let parent_uid = type_def.item.uid().map(str::to_owned);
        let children: Vec<MemberId> = type_def
            .members
            .iter()
            .chain(type_def.overloads.iter())
            .copied()
            .collect();
        for child in children {
            self.members[child.index()]
                .item
                .refresh_uid(parent_uid.as_deref());
        }
    }

    /// Set a member's id; its uid is recomputed against the declaring type.
    pub fn set_member_id(&mut self, id: MemberId, new_id: impl Into<Arc<str>>) {
        let parent_uid = self.members[id.index()]
            .parent
            .and_then(|p| self.types[p.index()].item.uid())
            .map(str::to_owned);
        self.members[id.index()]
            .item
            .assign_id(Some(new_id.into()), parent_uid.as_deref());
    }

    // ========================================================================
    // STRUCTURE EDITS
    // ========================================================================

    pub(crate) fn set_namespace_types(&mut self, id: NamespaceId, types: Vec<TypeId>) {
        self.namespaces[id.index()].types = types;
    }

    pub(crate) fn set_type_members(&mut self, id: TypeId, members: Vec<MemberId>) {
        self.types[id.index()].members = members;
    }

    pub(crate) fn set_type_overloads(&mut self, id: TypeId, overloads: Vec<MemberId>) {
        self.types[id.index()].overloads = overloads;
    }
}
