//! The store: the built model plus its lookup tables.
//!
//! ```text
//! Model + BuildInputs ──build()──► Store
//!                                   ├── model (ids, uids, metadata filled in)
//!                                   ├── index (by name / uid / doc id)
//!                                   ├── graph (child <-> parent uids)
//!                                   ├── extensions (by member doc id / target)
//!                                   └── diagnostics
//! ```
//!
//! Downstream exporters read the finished store; they never re-enter the
//! build passes.

mod graph;
mod index;
mod inputs;

pub use graph::InheritanceGraph;
pub use index::{ExtensionIndex, StoreIndex};
pub use inputs::{BuildInputs, BuildOptions, ExtensionMethod, FrameworksIndex};

use indexmap::IndexMap;
use tracing::debug;

use crate::base::constants::meta;
use crate::base::{ItemRef, MemberId, NamespaceId, TypeId};
use crate::build::{self, BuildContext};
use crate::diagnostics::{Diagnostic, DiagnosticCollector};
use crate::model::{ItemData, Member, Metadata, MetadataValue, Model, Namespace, TypeDef};

/// A documentation set and everything resolved about it.
#[derive(Clone, Debug)]
pub struct Store {
    model: Model,
    inputs: BuildInputs,
    options: BuildOptions,
    index: StoreIndex,
    graph: InheritanceGraph,
    extensions: ExtensionIndex,
    diagnostics: DiagnosticCollector,
    built: bool,
}

impl Store {
    pub fn new(model: Model, inputs: BuildInputs) -> Self {
        Self {
            model,
            inputs,
            options: BuildOptions::default(),
            index: StoreIndex::new(),
            graph: InheritanceGraph::new(),
            extensions: ExtensionIndex::new(),
            diagnostics: DiagnosticCollector::new(),
            built: false,
        }
    }

    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    // ========================================================================
    // BUILD
    // ========================================================================

    /// Run every resolution pass, in order.
    ///
    /// Faults are recorded as diagnostics; the build itself cannot fail.
    /// Building twice is a no-op.
    pub fn build(&mut self) {
        if self.built {
            debug!("store already built");
            return;
        }
        let ctx = BuildContext::new(
            &mut self.model,
            &mut self.index,
            &mut self.graph,
            &mut self.extensions,
            &mut self.diagnostics,
            &self.inputs,
            &self.options,
        );
        build::run(ctx);
        self.built = true;
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Point entities loaded from under `source_root` at their location in
    /// the git repository at `git_base_url`.
    ///
    /// Sets `content_url`, `original_content_url` and `ref_skeleton_url`
    /// unless a `content_url` is already present. Paths use `\` separators.
    pub fn translate_source_locations(&mut self, source_root: &str, git_base_url: &str) {
        let mut root = source_root.to_string();
        if !root.ends_with('\\') {
            root.push('\\');
        }
        let mut base_url = git_base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let mut translated = 0usize;
        for item in all_items(&self.model) {
            let data = self.model.item_mut(item);
            if translate_item(data, &root, &base_url) {
                translated += 1;
            }
        }
        debug!(translated, "translated source locations");
    }

    /// Merge per-uid metadata overrides into entities. Later keys replace
    /// existing ones. Returns the number of entities touched.
    pub fn apply_metadata_overlay(&mut self, overlay: &IndexMap<String, Metadata>) -> usize {
        let mut applied = 0;
        for item in all_items(&self.model) {
            let data = self.model.item_mut(item);
            let Some(entries) = data.uid().and_then(|uid| overlay.get(uid)) else {
                continue;
            };
            for (key, value) in entries {
                data.metadata.insert(key.clone(), value.clone());
            }
            applied += 1;
        }
        debug!(applied, "applied metadata overlay");
        applied
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn index(&self) -> &StoreIndex {
        &self.index
    }

    pub fn graph(&self) -> &InheritanceGraph {
        &self.graph
    }

    pub fn extensions(&self) -> &ExtensionIndex {
        &self.extensions
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    pub fn inputs(&self) -> &BuildInputs {
        &self.inputs
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.diagnostics()
    }

    pub fn diagnostic_collector(&self) -> &DiagnosticCollector {
        &self.diagnostics
    }

    pub fn namespace(&self, name: &str) -> Option<&Namespace> {
        self.index
            .namespace_by_name(name)
            .map(|id| self.model.namespace(id))
    }

    pub fn type_by_full_name(&self, full_name: &str) -> Option<&TypeDef> {
        self.index
            .type_by_full_name(full_name)
            .map(|id| self.model.type_def(id))
    }

    pub fn type_by_uid(&self, uid: &str) -> Option<&TypeDef> {
        self.index.type_by_uid(uid).map(|id| self.model.type_def(id))
    }

    pub fn member_by_uid(&self, uid: &str) -> Option<&Member> {
        self.index
            .member_by_uid(uid)
            .map(|id| self.model.member(id))
    }

    pub fn item_by_doc_id(&self, doc_id: &str) -> Option<&ItemData> {
        self.index
            .item_by_doc_id(doc_id)
            .map(|item| self.model.item(item))
    }

    pub fn extension_method(&self, member_doc_id: &str) -> Option<&ExtensionMethod> {
        self.extensions.get(member_doc_id)
    }

    /// Moniker list recorded on an entity.
    pub fn monikers(&self, item: ItemRef) -> Option<&[String]> {
        self.model.item(item).monikers()
    }

    /// The namespaces in build order.
    pub fn namespace_ids(&self) -> impl Iterator<Item = NamespaceId> + '_ {
        self.model.namespace_ids()
    }

    pub fn type_ids(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.model.type_ids()
    }

    pub fn member_ids(&self) -> impl Iterator<Item = MemberId> + '_ {
        self.model.member_ids()
    }
}

/// Every reachable entity: namespaces, types, members and overload placeholders.
fn all_items(model: &Model) -> Vec<ItemRef> {
    let mut items = Vec::new();
    for ns in model.namespace_ids() {
        items.push(ItemRef::Namespace(ns));
        for &ty in model.namespace(ns).types() {
            items.push(ItemRef::Type(ty));
            let type_def = model.type_def(ty);
            items.extend(type_def.members().iter().map(|&m| ItemRef::Member(m)));
            items.extend(type_def.overloads().iter().map(|&m| ItemRef::Member(m)));
        }
    }
    items
}

fn translate_item(item: &mut ItemData, root: &str, base_url: &str) -> bool {
    if item.metadata.contains_key(meta::CONTENT_URL) {
        return false;
    }
    let Some(relative) = item
        .source_path
        .as_deref()
        .and_then(|path| path.strip_prefix(root))
    else {
        return false;
    };
    let url = format!("{base_url}{relative}").replace('\\', "/");
    item.metadata
        .insert(meta::CONTENT_URL.to_string(), MetadataValue::from(url.as_str()));
    item.metadata
        .insert(meta::ORIGINAL_CONTENT_URL.to_string(), MetadataValue::from(url.as_str()));
    item.metadata
        .insert(meta::REF_SKELETON_URL.to_string(), MetadataValue::from(url));
    true
}
