//! Identifier pass.
//!
//! Assigns every entity its id (and therefore its uid), computes member
//! display names, orders types, and fills the uid and doc-id tables.

use indexmap::IndexMap;
use regex::NoExpand;
use rustc_hash::FxHashSet;
use std::cmp::{Ordering, Reverse};
use std::sync::Arc;
use tracing::{debug, trace};

use super::{BuildCache, BuildContext};
use crate::base::constants::CSHARP_SIGNATURE;
use crate::base::{ItemRef, MemberId, TypeId};
use crate::model::{ItemType, Member, Parameter, TypeDef};
use crate::typeref::synthesize_type_id;

pub fn run(ctx: &mut BuildContext<'_>) {
    build_ids(ctx);
    sort_types(ctx);
    index_types(ctx);
    build_unique_members(ctx);
    build_doc_id_index(ctx);
}

// ============================================================================
// ID SYNTHESIS
// ============================================================================

fn build_ids(ctx: &mut BuildContext<'_>) {
    let namespaces: Vec<_> = ctx.model.namespace_ids().collect();
    for ns in namespaces {
        let name = ctx.model.namespace(ns).item.name.clone();
        ctx.model.set_namespace_id(ns, name);
    }

    let types: Vec<TypeId> = ctx.model.type_ids().collect();
    for &ty in &types {
        let type_def = ctx.model.type_def(ty);
        let id: Arc<str> = match &type_def.raw_id {
            Some(raw) if !raw.is_empty() => raw.clone(),
            _ => Arc::from(synthesize_type_id(&type_def.full_name)),
        };
        ctx.model.set_type_id(ty, id);

        let base_uid = ctx
            .model
            .type_def(ty)
            .base_type
            .as_ref()
            .map(|base| ctx.cache.types.outer_uid(&base.name));
        if let (Some(uid), Some(base)) = (base_uid, ctx.model.type_def_mut(ty).base_type.as_mut()) {
            base.set_uid(uid);
        }
    }

    let mut member_count = 0usize;
    for &ty in &types {
        let members = ctx.model.type_def(ty).members().to_vec();
        for m in members {
            let parent = ctx.model.type_def(ty);
            let member = ctx.model.member(m);
            let id = synthesize_member_id(member, parent, &mut ctx.cache);
            let (display, full_display) = display_names(member, parent, &mut ctx.cache);
            trace!(member = %member.name(), id = %id, "member id");

            ctx.model.set_member_id(m, id);
            let member = ctx.model.member_mut(m);
            member.display_name = display;
            member.full_display_name = full_display;
            member_count += 1;
        }
    }
    debug!(types = types.len(), members = member_count, "ids built");
}

/// Id of a member, relative to its declaring type.
///
/// A DocId carrying a `|` boundary marker is decoded when it is scoped under
/// the parent uid; otherwise the id is synthesized from the name, the generic
/// arity and the parameter types.
pub fn synthesize_member_id(member: &Member, parent: &TypeDef, cache: &mut BuildCache) -> String {
    if let Some(id) = decode_doc_id(member.item.doc_id.as_deref(), parent.uid()) {
        return id;
    }

    let item = &member.item;
    let mut id = item.name.replace('.', "#");
    let arity = item.type_parameters.len();
    if arity > 0 {
        if let Some(pos) = id.rfind('<') {
            id.truncate(pos);
        }
        id.push_str(&format!("``{arity}"));
    }
    let mut id = id.replace('<', "{").replace('>', "}").replace(',', "@");

    if item.parameters.is_empty() {
        return id;
    }
    let type_params = names(&parent.item.type_parameters);
    let member_params = names(&item.type_parameters);

    if member.is_conversion_operator() {
        let source = cache
            .types
            .spec_id(&item.parameters[0].type_name, &type_params, &member_params);
        let target = item
            .return_value
            .as_ref()
            .map(|ret| cache.types.spec_id(&ret.type_name, &type_params, &member_params))
            .unwrap_or_default();
        id.push_str(&format!("({source})~{target}"));
    } else {
        let params: Vec<String> = item
            .parameters
            .iter()
            .map(|p| parameter_uid(p, &type_params, &member_params, cache))
            .collect();
        id.push_str(&format!("({})", params.join(",")));
    }
    id
}

fn decode_doc_id(doc_id: Option<&str>, parent_uid: Option<&str>) -> Option<String> {
    let doc_id = doc_id.filter(|d| d.contains('|'))?;
    let parts: Vec<&str> = doc_id.split(':').collect();
    let [_, qualified] = parts.as_slice() else {
        return None;
    };
    let rest = qualified.strip_prefix(parent_uid.unwrap_or(""))?;
    Some(rest.trim_start_matches('.').to_string())
}

fn names(params: &[Parameter]) -> Vec<&str> {
    params.iter().map(|p| p.name.as_ref()).collect()
}

/// Encoding of one parameter type inside a member id.
fn parameter_uid(
    param: &Parameter,
    type_params: &[&str],
    member_params: &[&str],
    cache: &mut BuildCache,
) -> String {
    let mut uid = param
        .type_name
        .replace('+', ".")
        .replace('<', "{")
        .replace('>', "}");
    if param.ref_type.is_some_and(|r| r.is_by_ref()) {
        uid.push('@');
    }
    let uid = replace_generic_names(uid, type_params, "`", cache);
    replace_generic_names(uid, member_params, "``", cache)
}

/// Replace whole-word generic parameter names by `prefix` + position.
/// Longer names go first so `TKey` is never split by `T`.
fn replace_generic_names(uid: String, names: &[&str], prefix: &str, cache: &mut BuildCache) -> String {
    if names.is_empty() {
        return uid;
    }
    if let Some(i) = names.iter().position(|n| *n == uid) {
        return format!("{prefix}{i}");
    }
    let mut order: Vec<usize> = (0..names.len()).collect();
    order.sort_by_key(|&i| Reverse(names[i].len()));

    let mut out = uid;
    for i in order {
        let replacement = format!("{prefix}{i}");
        if let Some(regex) = cache.generic_name_regex(names[i]) {
            out = regex.replace_all(&out, NoExpand(&replacement)).into_owned();
        }
    }
    out
}

/// Overload-group id: the id up to its parameter list, without the generic
/// arity suffix, plus `*`.
pub fn overload_id(member: &Member) -> Option<String> {
    let id = member.id().filter(|id| !id.is_empty())?;
    let mut group = &id[..id.find('(').unwrap_or(id.len())];
    let arity = member.item.type_parameters.len();
    if arity > 0 {
        group = group
            .strip_suffix(format!("``{arity}").as_str())
            .unwrap_or(group);
    }
    Some(format!("{group}*"))
}

// ============================================================================
// DISPLAY NAMES
// ============================================================================

/// `(DisplayName, FullDisplayName)` of a member.
pub fn display_names(member: &Member, parent: &TypeDef, cache: &mut BuildCache) -> (String, String) {
    let item = &member.item;
    let base = if item.item_type == ItemType::Constructor {
        parent.name()
    } else {
        member.name()
    };
    let mut display = base.strip_prefix("op_").unwrap_or(base).to_string();
    let without_eii = display.clone();

    if member.is_eii() {
        if let Some(dot) = display.rfind('.') {
            let interface = cache.types.display_name(&display[..dot]);
            display = format!("{interface}.{}", &display[dot + 1..]);
        }
    }

    let param_part = parameter_part(member, cache);
    display.push_str(&param_part);
    let full_display = format!("{}.{}{}", parent.full_name, without_eii, param_part);
    (display, full_display)
}

fn parameter_part(member: &Member, cache: &mut BuildCache) -> String {
    let item = &member.item;
    if item.parameters.is_empty() {
        return match item.item_type {
            ItemType::Method | ItemType::Constructor => "()".to_string(),
            ItemType::Namespace
            | ItemType::Class
            | ItemType::Struct
            | ItemType::Interface
            | ItemType::Enum
            | ItemType::Delegate
            | ItemType::Field
            | ItemType::Property
            | ItemType::Event
            | ItemType::Operator
            | ItemType::AttachedEvent
            | ItemType::AttachedProperty
            | ItemType::Container => String::new(),
        };
    }

    let types: Vec<String> = item
        .parameters
        .iter()
        .map(|p| cache.types.display_name(&p.type_name))
        .collect();
    if member.is_conversion_operator() {
        let target = item
            .return_value
            .as_ref()
            .map(|ret| cache.types.display_name(&ret.type_name))
            .unwrap_or_default();
        format!("({} to {})", types[0], target)
    } else if is_indexer(member) {
        format!("[{}]", types.join(", "))
    } else {
        format!("({})", types.join(", "))
    }
}

/// Properties whose C# signature takes bracketed arguments.
pub fn is_indexer(member: &Member) -> bool {
    member.item.item_type == ItemType::Property
        && member
            .item
            .signatures
            .get(CSHARP_SIGNATURE)
            .is_some_and(|sig| sig.contains('['))
}

// ============================================================================
// ORDERING
// ============================================================================

/// Order type ids segment by segment; generic arities compare numerically
/// (`` Func`2 `` before `` Func`10 ``).
pub fn compare_type_ids(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let (x_name, x_arity) = split_arity(x);
                let (y_name, y_arity) = split_arity(y);
                let order = x_name.cmp(y_name).then(x_arity.cmp(&y_arity));
                if order != Ordering::Equal {
                    return order;
                }
            }
        }
    }
}

fn split_arity(segment: &str) -> (&str, u32) {
    match segment.rsplit_once('`') {
        Some((name, arity)) => match arity.parse() {
            Ok(n) => (name, n),
            Err(_) => (segment, 0),
        },
        None => (segment, 0),
    }
}

fn sort_types(ctx: &mut BuildContext<'_>) {
    let namespaces: Vec<_> = ctx.model.namespace_ids().collect();
    for ns in namespaces {
        let mut types = ctx.model.namespace(ns).types().to_vec();
        types.sort_by(|&a, &b| {
            compare_type_ids(
                ctx.model.type_def(a).uid().unwrap_or(""),
                ctx.model.type_def(b).uid().unwrap_or(""),
            )
        });
        ctx.model.set_namespace_types(ns, types);
    }
}

// ============================================================================
// TABLES
// ============================================================================

fn index_types(ctx: &mut BuildContext<'_>) {
    let types: Vec<TypeId> = ctx.model.type_ids().collect();
    for ty in types {
        let item = &ctx.model.type_def(ty).item;
        let Some(uid) = item.uid_arc().cloned() else {
            continue;
        };
        if ctx.index.types_by_uid.insert(uid.clone(), ty).is_some() {
            ctx.diagnostics
                .duplicate_type_uid(&uid, item.source_path.clone());
        }
    }
}

/// Report duplicate member uids, then index members by uid. A member whose
/// uid collides case-insensitively with a type uid gets a kind suffix.
fn build_unique_members(ctx: &mut BuildContext<'_>) {
    let members: Vec<MemberId> = ctx.model.member_ids().collect();

    let mut groups: IndexMap<Arc<str>, Vec<MemberId>> = IndexMap::new();
    for &m in &members {
        if let Some(uid) = ctx.model.member(m).item.uid_arc() {
            groups.entry(uid.clone()).or_default().push(m);
        }
    }
    for (uid, group) in groups.iter().filter(|(_, g)| g.len() > 1) {
        let first_parent = ctx.model.member(group[0]).parent();
        let same_type = group
            .iter()
            .all(|&m| ctx.model.member(m).parent() == first_parent);
        for &m in group {
            let member = ctx.model.member(m);
            let source = member.item.source_path.clone();
            match member.parent().filter(|_| same_type) {
                Some(parent) => {
                    let type_uid = ctx.model.type_def(parent).uid().unwrap_or("");
                    ctx.diagnostics.duplicate_signature(uid, type_uid, source);
                }
                None => ctx.diagnostics.duplicate_member_uid(uid, source),
            }
        }
    }

    let type_uids: FxHashSet<String> = ctx
        .index
        .types_by_uid
        .keys()
        .map(|uid| uid.to_lowercase())
        .collect();
    for m in members {
        let member = ctx.model.member(m);
        let clashes = member
            .uid()
            .is_some_and(|uid| type_uids.contains(&uid.to_lowercase()));
        if clashes {
            let id = format!(
                "{}_{}",
                member.id().unwrap_or(""),
                member.item.item_type.initial()
            );
            trace!(id = %id, "member uid clashes with a type uid");
            ctx.model.set_member_id(m, id);
        }
        if let Some(uid) = ctx.model.member(m).item.uid_arc() {
            ctx.index.members_by_uid.insert(uid.clone(), m);
        }
    }
}

/// Doc id -> entity over indexed types and members. On conflict the later
/// entity wins and an error cites both documents.
fn build_doc_id_index(ctx: &mut BuildContext<'_>) {
    let items: Vec<ItemRef> = ctx
        .index
        .types_by_uid
        .values()
        .map(|&t| ItemRef::Type(t))
        .chain(ctx.index.members_by_uid.values().map(|&m| ItemRef::Member(m)))
        .collect();

    for item in items {
        let data = ctx.model.item(item);
        let Some(doc_id) = data.doc_id.clone().filter(|d| !d.is_empty()) else {
            continue;
        };
        if let Some(previous) = ctx.index.items_by_doc_id.insert(doc_id.clone(), item) {
            if previous != item {
                let previous_source = ctx.model.item(previous).source_path.clone();
                ctx.diagnostics
                    .duplicate_doc_id(&doc_id, data.source_path.clone(), previous_source);
            }
        }
    }
}
