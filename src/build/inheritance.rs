//! Inheritance pass.
//!
//! Records base-type and interface edges, linearizes each type's base chain
//! (root first, immediate base last) and computes the members a concrete
//! class inherits.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use std::sync::Arc;
use tracing::{debug, trace};

use super::BuildContext;
use crate::base::TypeId;
use crate::base::constants::FINALIZER_NAME;
use crate::model::{ItemType, Model};
use crate::store::StoreIndex;

pub fn run(ctx: &mut BuildContext<'_>) {
    let types: Vec<TypeId> = ctx.model.type_ids().collect();
    for &ty in &types {
        add_edges(ctx, ty);
        let chain = base_chain(ctx, ty);
        let inherited = if ctx.model.type_def(ty).is_concrete_class() {
            inherited_members(ctx.model, ctx.index, ty, &chain)
        } else {
            IndexMap::new()
        };

        let type_def = ctx.model.type_def_mut(ty);
        type_def.inheritance_uids = chain;
        type_def.inherited_members = inherited;
    }
    debug!(types = types.len(), edges = ctx.graph.parents().len(), "inheritance resolved");
}

fn add_edges(ctx: &mut BuildContext<'_>, ty: TypeId) {
    let type_def = ctx.model.type_def(ty);
    let Some(uid) = type_def.item.uid_arc().cloned() else {
        return;
    };
    for interface in &type_def.interfaces {
        let parent = ctx.cache.types.outer_uid(interface);
        ctx.graph.add_edge(uid.clone(), Arc::from(parent));
    }
    if let Some(base_uid) = type_def.base_type.as_ref().and_then(|b| b.uid()) {
        ctx.graph.add_edge(uid, Arc::from(base_uid));
    }
}

/// Base uids from the root down to the immediate base.
///
/// The walk stops after the first base outside the documented set (reported
/// in strict mode) and before any uid already seen (reported as a cycle).
fn base_chain(ctx: &mut BuildContext<'_>, ty: TypeId) -> Vec<Arc<str>> {
    let type_def = ctx.model.type_def(ty);
    let type_uid = type_def.uid().unwrap_or("");
    let source = type_def.item.source_path.clone();

    let mut chain: Vec<Arc<str>> = Vec::new();
    let mut seen: FxHashSet<Arc<str>> = FxHashSet::default();
    seen.insert(Arc::from(type_uid));

    let mut next: Option<Arc<str>> = type_def
        .base_type
        .as_ref()
        .and_then(|b| b.uid())
        .map(Arc::from);
    while let Some(uid) = next.take() {
        if !seen.insert(uid.clone()) {
            ctx.diagnostics
                .inheritance_cycle(type_uid, &uid, source.clone());
            break;
        }
        chain.push(uid.clone());
        match ctx.index.type_by_uid(&uid) {
            Some(base) => {
                next = ctx
                    .model
                    .type_def(base)
                    .base_type
                    .as_ref()
                    .and_then(|b| b.uid())
                    .map(Arc::from);
            }
            None => {
                if ctx.options.strict_mode {
                    ctx.diagnostics
                        .external_base_type(type_uid, &uid, source.clone());
                }
                trace!(type_uid, base = %uid, "base chain leaves documented set");
            }
        }
    }
    chain.reverse();
    chain
}

/// Member id -> uid of the nearest ancestor declaring it.
///
/// Finalizers, constructors and static members are never inherited; ids the
/// type declares itself are dropped.
fn inherited_members(
    model: &Model,
    index: &StoreIndex,
    ty: TypeId,
    chain: &[Arc<str>],
) -> IndexMap<Arc<str>, Arc<str>> {
    let mut inherited: IndexMap<Arc<str>, Arc<str>> = IndexMap::new();
    for ancestor_uid in chain {
        let Some(ancestor) = index.type_by_uid(ancestor_uid) else {
            continue;
        };
        for &m in model.type_def(ancestor).members() {
            let member = model.member(m);
            let inheritable = member.name() != FINALIZER_NAME
                && member.item.item_type != ItemType::Constructor
                && member.item.is_static() != Some(true);
            if let (true, Some(id)) = (inheritable, member.item.id()) {
                inherited.insert(Arc::from(id), ancestor_uid.clone());
            }
        }
    }
    for &m in model.type_def(ty).members() {
        if let Some(id) = model.member(m).id() {
            inherited.shift_remove(id);
        }
    }
    inherited
}
