use std::sync::Arc;

use super::{Docs, ItemData, ItemType};
use crate::base::TypeId;

/// A namespace and the types it owns.
#[derive(Clone, Debug)]
pub struct Namespace {
    pub item: ItemData,
    pub(super) types: Vec<TypeId>,
}

impl Namespace {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            item: ItemData::new(name, ItemType::Namespace),
            types: Vec::new(),
        }
    }

    pub fn with_docs(mut self, docs: Docs) -> Self {
        self.item.docs = Some(docs);
        self
    }

    pub fn name(&self) -> &str {
        &self.item.name
    }

    /// Owned types, in namespace order.
    pub fn types(&self) -> &[TypeId] {
        &self.types
    }
}
