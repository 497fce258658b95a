//! Build passes: resolution of a loaded model into a store.
//!
//! Passes run strictly in this order; each reads what earlier ones wrote:
//!
//! 1. [`prune`] - drop APIs hidden by API filters (optional)
//! 2. registration - namespaces by name, types by full name
//! 3. [`ids`] - ids, uids, display names, unique members, doc-id index
//! 4. [`frameworks`] - monikers from the frameworks index
//! 5. [`inheritance`] - adjacency, ancestor chains, inherited members
//! 6. [`overloads`] - overload-group placeholders
//! 7. [`docs`] - parameter and return descriptions
//! 8. [`attributes`] - attribute types and visibility
//! 9. [`extensions`] - extension methods per type
//! 10. [`metadata`] - internal-only, notes, assembly and package metadata

pub mod attributes;
pub mod docs;
pub mod extensions;
pub mod frameworks;
pub mod ids;
pub mod inheritance;
pub mod metadata;
pub mod overloads;
pub mod prune;

use regex::Regex;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::diagnostics::DiagnosticCollector;
use crate::model::Model;
use crate::store::{BuildInputs, BuildOptions, ExtensionIndex, InheritanceGraph, StoreIndex};
use crate::typeref::TypeDescCache;

// ============================================================================
// CACHE
// ============================================================================

/// Memoized parsing state owned by one build and dropped with it.
#[derive(Debug, Default)]
pub struct BuildCache {
    pub types: TypeDescCache,
    generic_names: FxHashMap<Arc<str>, Option<Regex>>,
}

impl BuildCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whole-word matcher for a generic parameter name.
    pub fn generic_name_regex(&mut self, name: &str) -> Option<&Regex> {
        if !self.generic_names.contains_key(name) {
            let pattern = format!(r"\b{}\b", regex::escape(name));
            let compiled = match Regex::new(&pattern) {
                Ok(regex) => Some(regex),
                Err(err) => {
                    trace!(name, %err, "generic name pattern rejected");
                    None
                }
            };
            self.generic_names.insert(Arc::from(name), compiled);
        }
        self.generic_names.get(name).and_then(Option::as_ref)
    }
}

// ============================================================================
// CONTEXT
// ============================================================================

/// Everything a pass may read or write, borrowed from the store for the
/// duration of one build.
pub struct BuildContext<'a> {
    pub model: &'a mut Model,
    pub index: &'a mut StoreIndex,
    pub graph: &'a mut InheritanceGraph,
    pub extensions: &'a mut ExtensionIndex,
    pub diagnostics: &'a mut DiagnosticCollector,
    pub inputs: &'a BuildInputs,
    pub options: &'a BuildOptions,
    pub cache: BuildCache,
}

impl<'a> BuildContext<'a> {
    pub fn new(
        model: &'a mut Model,
        index: &'a mut StoreIndex,
        graph: &'a mut InheritanceGraph,
        extensions: &'a mut ExtensionIndex,
        diagnostics: &'a mut DiagnosticCollector,
        inputs: &'a BuildInputs,
        options: &'a BuildOptions,
    ) -> Self {
        Self {
            model,
            index,
            graph,
            extensions,
            diagnostics,
            inputs,
            options,
            cache: BuildCache::new(),
        }
    }
}

/// Run all passes over the context.
pub fn run(mut ctx: BuildContext<'_>) {
    debug!(
        namespaces = ctx.model.namespace_count(),
        strict = ctx.options.strict_mode,
        "build started"
    );

    if ctx.options.apply_api_filters {
        prune::run(&mut ctx);
    }
    register(&mut ctx);

    ids::run(&mut ctx);
    frameworks::assign_monikers(&mut ctx);
    inheritance::run(&mut ctx);
    overloads::run(&mut ctx);
    docs::run(&mut ctx);
    attributes::run(&mut ctx);
    extensions::run(&mut ctx);
    frameworks::merge(&mut ctx);
    metadata::run(&mut ctx);

    debug!(
        types = ctx.index.type_count(),
        members = ctx.index.member_count(),
        parsed_type_strings = ctx.cache.types.len(),
        diagnostics = ctx.diagnostics.diagnostics().len(),
        "build finished"
    );
}

/// Index namespaces by name and types by full name.
fn register(ctx: &mut BuildContext<'_>) {
    let namespace_ids: Vec<_> = ctx.model.namespace_ids().collect();
    for ns in namespace_ids {
        let namespace = ctx.model.namespace(ns);
        ctx.index
            .namespaces_by_name
            .insert(namespace.item.name.clone(), ns);
        for &ty in namespace.types() {
            let full_name = ctx.model.type_def(ty).full_name.clone();
            ctx.index.types_by_full_name.insert(full_name, ty);
        }
    }
    debug!(
        namespaces = ctx.index.namespaces_by_name.len(),
        types = ctx.index.types_by_full_name.len(),
        "registered names"
    );
}
