//! Extension-method resolution.
//!
//! Declarations are matched to documented members by doc id, then each type
//! collects the resolved declarations targeting it or any of its ancestors
//! (base types and interfaces), keeping those whose frameworks overlap.

use rustc_hash::FxHashSet;
use std::sync::Arc;
use tracing::{debug, trace};

use super::BuildContext;
use crate::base::{MemberId, TypeId};
use crate::model::Model;
use crate::store::ExtensionMethod;

pub fn run(ctx: &mut BuildContext<'_>) {
    if ctx.inputs.extension_methods.is_empty() {
        return;
    }
    build_index(ctx);
    attach_to_members(ctx);

    let unresolved: Vec<Arc<str>> = ctx
        .extensions
        .by_member_doc_id
        .iter()
        .filter(|(_, ex)| !ex.is_resolved())
        .map(|(doc_id, _)| doc_id.clone())
        .collect();
    for doc_id in &unresolved {
        ctx.diagnostics.unresolved_extension_method(doc_id);
    }

    let types: Vec<TypeId> = ctx.model.type_ids().collect();
    let mut extended = 0usize;
    for ty in types {
        let found = collect_for_type(ctx, ty);
        if !found.is_empty() {
            extended += 1;
            ctx.model.type_def_mut(ty).extension_methods = found;
        }
    }
    debug!(
        declarations = ctx.extensions.len(),
        unresolved = unresolved.len(),
        extended_types = extended,
        "extension methods resolved"
    );
}

fn build_index(ctx: &mut BuildContext<'_>) {
    for ex in &ctx.inputs.extension_methods {
        let key: Arc<str> = Arc::from(ex.member_doc_id.as_str());
        if ctx.extensions.by_member_doc_id.insert(key.clone(), ex.clone()).is_some() {
            ctx.diagnostics.duplicate_extension_method(&key);
        }
    }

    let mut by_target = indexmap::IndexMap::<Arc<str>, Vec<Arc<str>>>::new();
    for (doc_id, ex) in &ctx.extensions.by_member_doc_id {
        by_target
            .entry(Arc::from(ex.target_uid()))
            .or_default()
            .push(doc_id.clone());
    }
    ctx.extensions.by_target = by_target;
}

/// Flag documented members that are extension methods and record their
/// uid and declaring type on the declaration.
fn attach_to_members(ctx: &mut BuildContext<'_>) {
    let members: Vec<MemberId> = ctx.index.members_by_uid().map(|(_, m)| m).collect();
    for m in members {
        let member = ctx.model.member(m);
        let Some(doc_id) = member.item.doc_id.as_deref().filter(|d| !d.is_empty()) else {
            continue;
        };
        let Some(ex) = ctx.extensions.by_member_doc_id.get_mut(doc_id) else {
            continue;
        };
        ex.uid = member.item.uid_arc().cloned();
        ex.parent_type = member.parent();
        trace!(doc_id, uid = ?ex.uid, "extension method attached");
        ctx.model.member_mut(m).is_extension_method = true;
    }
}

/// Uids of the applicable extension methods for one type, sorted.
fn collect_for_type(ctx: &BuildContext<'_>, ty: TypeId) -> Vec<Arc<str>> {
    let Some(uid) = ctx.model.type_def(ty).item.uid_arc().cloned() else {
        return Vec::new();
    };
    let type_monikers = ctx.model.type_def(ty).item.monikers();

    let mut found: Vec<Arc<str>> = Vec::new();
    let mut visited: FxHashSet<Arc<str>> = FxHashSet::default();
    let mut stack = vec![uid];
    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        stack.extend(ctx.graph.parents_of(&current).iter().cloned());
        for ex in ctx.extensions.targeting(&current) {
            let Some(ex_uid) = ex.uid.as_ref() else {
                continue;
            };
            if is_applicable(type_monikers, declaring_monikers(ctx.model, ex)) {
                found.push(ex_uid.clone());
            }
        }
    }
    found.sort();
    found.dedup();
    found
}

fn declaring_monikers<'m>(model: &'m Model, ex: &ExtensionMethod) -> Option<&'m [String]> {
    ex.parent_type.and_then(|ty| model.type_def(ty).item.monikers())
}

/// An extension method applies when neither side lists frameworks, or both
/// do and they share at least one.
pub fn is_applicable(type_monikers: Option<&[String]>, method_monikers: Option<&[String]>) -> bool {
    let type_monikers = type_monikers.filter(|m| !m.is_empty());
    let method_monikers = method_monikers.filter(|m| !m.is_empty());
    match (type_monikers, method_monikers) {
        (None, None) => true,
        (Some(ours), Some(theirs)) => ours.iter().any(|m| theirs.contains(m)),
        _ => false,
    }
}
