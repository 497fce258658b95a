//! Overload grouping.
//!
//! Same-named overloadable members of a type share one placeholder member
//! whose id is the group id (`Name*`). Placeholders declared by the loader
//! are reused; missing ones are created.

use indexmap::IndexMap;
use tracing::{debug, trace};

use super::BuildContext;
use super::ids::{is_indexer, overload_id};
use crate::base::constants::meta;
use crate::base::{MemberId, TypeId};
use crate::model::{ItemType, Member, MetadataValue, TypeDef};

pub fn run(ctx: &mut BuildContext<'_>) {
    let types: Vec<TypeId> = ctx.model.type_ids().collect();
    let mut groups_total = 0usize;
    for ty in types {
        groups_total += group_type(ctx, ty);
    }
    debug!(groups = groups_total, "overloads grouped");
}

/// Group one type's members; returns the number of groups.
fn group_type(ctx: &mut BuildContext<'_>, ty: TypeId) -> usize {
    let eligible: Vec<MemberId> = ctx
        .model
        .type_def(ty)
        .members()
        .iter()
        .copied()
        .filter(|&m| ctx.model.member(m).item.item_type.is_overloadable())
        .collect();
    if eligible.is_empty() {
        return 0;
    }

    // Declared placeholders, keyed by the group id of a same-named member.
    let mut groups: IndexMap<String, MemberId> = IndexMap::new();
    for &placeholder in ctx.model.type_def(ty).overloads() {
        let name = ctx.model.member(placeholder).name();
        let representative = eligible
            .iter()
            .find(|&&m| ctx.model.member(m).name() == name);
        if let Some(group) = representative.and_then(|&m| overload_id(ctx.model.member(m))) {
            groups.insert(group, placeholder);
        }
    }
    let declared = groups.len();

    for &m in &eligible {
        let Some(group) = overload_id(ctx.model.member(m)) else {
            continue;
        };
        let placeholder = match groups.get(&group) {
            Some(&existing) => existing,
            // The first member of a group names its placeholder.
            None => {
                let member = ctx.model.member(m);
                let placeholder = Member::new(member.item.name.clone(), member.item.item_type);
                let created = ctx.model.add_overload(ty, placeholder);
                ctx.model.set_member_id(created, group.as_str());
                let (display, full_display) =
                    placeholder_names(ctx.model.member(m), ctx.model.type_def(ty));
                let source = ctx.model.member(m).item.source_path.clone();
                let placeholder = ctx.model.member_mut(created);
                placeholder.display_name = display;
                placeholder.full_display_name = full_display;
                placeholder.item.source_path = source;
                groups.insert(group.clone(), created);
                created
            }
        };
        if groups.get_index_of(&group).is_some_and(|i| i < declared) {
            refresh_declared(ctx, ty, placeholder, m, &group);
        }
        let uid = ctx.model.member(placeholder).item.uid_arc().cloned();
        trace!(member = %ctx.model.member(m).name(), group = %group, "overload member");
        ctx.model.member_mut(m).overload = uid;
    }

    let placeholders: Vec<MemberId> = groups.values().copied().collect();
    ctx.model.set_type_overloads(ty, placeholders.clone());
    for &placeholder in &placeholders {
        assign_placeholder_monikers(ctx, ty, placeholder);
    }
    placeholders.len()
}

/// A declared placeholder takes its id, names and kind from the members it
/// groups, like a created one.
fn refresh_declared(
    ctx: &mut BuildContext<'_>,
    ty: TypeId,
    placeholder: MemberId,
    member: MemberId,
    group: &str,
) {
    if ctx.model.member(placeholder).id() != Some(group) {
        ctx.model.set_member_id(placeholder, group);
        let (display, full_display) =
            placeholder_names(ctx.model.member(member), ctx.model.type_def(ty));
        let kind = ctx.model.member(member).item.item_type;
        let target = ctx.model.member_mut(placeholder);
        target.display_name = display;
        target.full_display_name = full_display;
        target.item.item_type = kind;
    }
}

/// `(DisplayName, FullDisplayName)` of a group placeholder.
///
/// The representative's parameter list is dropped, and so is a trailing
/// generic argument list unless it belongs to an interface qualifier
/// (`IEnumerable<T>.GetEnumerator` keeps its `<T>`).
pub fn placeholder_names(representative: &Member, parent: &TypeDef) -> (String, String) {
    let display = match representative.item.item_type {
        ItemType::Constructor => parent.name().to_string(),
        ItemType::Method
        | ItemType::Property
        | ItemType::Operator
        | ItemType::AttachedProperty
        | ItemType::Namespace
        | ItemType::Class
        | ItemType::Struct
        | ItemType::Interface
        | ItemType::Enum
        | ItemType::Delegate
        | ItemType::Field
        | ItemType::Event
        | ItemType::AttachedEvent
        | ItemType::Container => strip_signature(representative),
    };
    let full_display = format!("{}.{}", parent.full_name, display);
    (display, full_display)
}

fn strip_signature(member: &Member) -> String {
    let mut display = member.display_name.as_str();
    if let Some(paren) = display.rfind('(') {
        display = &display[..paren];
    }
    if is_indexer(member) {
        if let Some(bracket) = display.rfind('[') {
            display = &display[..bracket];
        }
    }
    if let Some(angle) = display.rfind('<') {
        let after_last_dot = display.rfind('.').is_none_or(|dot| angle > dot);
        if after_last_dot {
            display = &display[..angle];
        }
    }
    display.to_string()
}

/// Placeholder monikers: distinct union of the grouped members' monikers
/// from the frameworks index.
fn assign_placeholder_monikers(ctx: &mut BuildContext<'_>, ty: TypeId, placeholder: MemberId) {
    let frameworks = &ctx.inputs.frameworks;
    if frameworks.is_empty() {
        return;
    }
    let Some(uid) = ctx.model.member(placeholder).item.uid_arc().cloned() else {
        return;
    };

    let mut monikers: Vec<String> = Vec::new();
    for &m in ctx.model.type_def(ty).members() {
        let member = ctx.model.member(m);
        if member.overload.as_ref() != Some(&uid) {
            continue;
        }
        let found = member
            .item
            .doc_id
            .as_deref()
            .filter(|d| !d.is_empty())
            .and_then(|d| frameworks.get(d));
        for moniker in found.into_iter().flatten() {
            if !monikers.contains(moniker) {
                monikers.push(moniker.clone());
            }
        }
    }
    if !monikers.is_empty() {
        ctx.model
            .member_mut(placeholder)
            .item
            .metadata
            .insert(meta::MONIKERS.to_string(), MetadataValue::from(monikers));
    }
}
