//! Inheritance adjacency between type uids.

use indexmap::IndexMap;
use std::sync::Arc;
use tracing::trace;

/// Forward (child -> parents) and reverse (parent -> children) edges.
///
/// Edges come from base types and implemented interfaces. Either end may be
/// a type outside the documented set.
#[derive(Clone, Debug, Default)]
pub struct InheritanceGraph {
    parents: IndexMap<Arc<str>, Vec<Arc<str>>>,
    children: IndexMap<Arc<str>, Vec<Arc<str>>>,
}

impl InheritanceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_edge(&mut self, child: Arc<str>, parent: Arc<str>) {
        trace!(child = %child, parent = %parent, "inheritance edge");
        self.parents
            .entry(child.clone())
            .or_default()
            .push(parent.clone());
        self.children.entry(parent).or_default().push(child);
    }

    /// Direct parents (base type and interfaces) of a type.
    pub fn parents_of(&self, uid: &str) -> &[Arc<str>] {
        self.parents.get(uid).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Direct children (derived types and implementers) of a type.
    pub fn children_of(&self, uid: &str) -> &[Arc<str>] {
        self.children.get(uid).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn parents(&self) -> &IndexMap<Arc<str>, Vec<Arc<str>>> {
        &self.parents
    }

    pub fn children(&self) -> &IndexMap<Arc<str>, Vec<Arc<str>>> {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}
