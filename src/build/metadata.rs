//! Documentation-derived metadata and assembly-name backfill.

use indexmap::IndexMap;
use tracing::debug;

use super::BuildContext;
use crate::base::constants::meta;
use crate::base::{ItemRef, MemberId, NamespaceId, TypeId};
use crate::model::{AssemblyInfo, ItemType, MetadataValue};

/// Audience an additional note is addressed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteAudience {
    Caller,
    Implementer,
    Inheritor,
}

impl NoteAudience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Caller => "caller",
            Self::Implementer => "implementer",
            Self::Inheritor => "inheritor",
        }
    }
}

pub fn run(ctx: &mut BuildContext<'_>) {
    let namespaces: Vec<NamespaceId> = ctx.model.namespace_ids().collect();
    let mut internal = 0usize;
    for ns in namespaces {
        let ns_internal = ctx
            .model
            .namespace(ns)
            .item
            .docs
            .as_ref()
            .is_some_and(|d| d.internal_only);
        internal += apply(ctx, ItemRef::Namespace(ns), ns_internal, None);

        let types: Vec<TypeId> = ctx.model.namespace(ns).types().to_vec();
        for ty in types {
            let ty_internal = internal_only(ctx, ItemRef::Type(ty), ns_internal);
            internal += apply(ctx, ItemRef::Type(ty), ty_internal, None);

            let members: Vec<MemberId> = ctx.model.type_def(ty).members().to_vec();
            let parent_kind = ctx.model.type_def(ty).item.item_type;
            for m in members {
                let m_internal = internal_only(ctx, ItemRef::Member(m), ty_internal);
                internal += apply(ctx, ItemRef::Member(m), m_internal, Some(parent_kind));
            }
        }
    }

    let filled = fill_missing_assembly_names(ctx);
    debug!(internal_only = internal, assembly_names_filled = filled, "metadata built");
}

/// An entity without docs inherits its container's flag.
fn internal_only(ctx: &BuildContext<'_>, item: ItemRef, inherited: bool) -> bool {
    ctx.model
        .item(item)
        .docs
        .as_ref()
        .map_or(inherited, |d| d.internal_only)
}

/// Write internal-only, alt-compliant and note metadata for one entity;
/// returns 1 when the entity is internal-only.
fn apply(ctx: &mut BuildContext<'_>, item: ItemRef, internal: bool, parent: Option<ItemType>) -> usize {
    let data = ctx.model.item(item);
    let kind = data.item_type;
    let uid = data.uid().unwrap_or_default().to_string();
    let source = data.source_path.clone();
    let alt_compliant = data
        .docs
        .as_ref()
        .and_then(|d| d.alt_compliant.clone())
        .filter(|a| !a.is_empty());
    let raw_notes: Vec<(String, String)> = data
        .docs
        .as_ref()
        .map(|d| {
            d.additional_notes
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect()
        })
        .unwrap_or_default();

    let mut notes: IndexMap<String, MetadataValue> = IndexMap::new();
    for (key, text) in raw_notes {
        if !NOTE_KINDS.contains(&key.as_str()) {
            ctx.diagnostics.unknown_additional_note(&uid, &key, source.clone());
            continue;
        }
        if let Some(audience) = note_audience(&key, kind, parent) {
            notes.insert(
                audience.as_str().to_string(),
                MetadataValue::from(text.trim_end()),
            );
        }
    }

    let metadata = &mut ctx.model.item_mut(item).metadata;
    if let Some(alt) = alt_compliant {
        metadata.insert(meta::ALT_COMPLIANT.to_string(), MetadataValue::from(alt));
    }
    if internal {
        metadata.insert(meta::INTERNAL_ONLY.to_string(), MetadataValue::from(true));
    }
    if !notes.is_empty() {
        metadata.insert(meta::ADDITIONAL_NOTES.to_string(), MetadataValue::Map(notes));
    }
    usize::from(internal)
}

/// Note kinds understood by [`note_audience`].
pub const NOTE_KINDS: [&str; 2] = ["usage", "overrides"];

/// Audience for a note. An `overrides` note on something that is neither
/// an interface nor a class, or its member, has none.
pub fn note_audience(key: &str, kind: ItemType, parent: Option<ItemType>) -> Option<NoteAudience> {
    let is = |wanted: ItemType| kind == wanted || parent == Some(wanted);
    match key {
        "usage" => Some(NoteAudience::Caller),
        "overrides" if is(ItemType::Interface) => Some(NoteAudience::Implementer),
        "overrides" if is(ItemType::Class) => Some(NoteAudience::Inheritor),
        _ => None,
    }
}

/// Unnamed member assembly entries take the name of the first type
/// assembly whose versions cover theirs.
fn fill_missing_assembly_names(ctx: &mut BuildContext<'_>) -> usize {
    let types: Vec<TypeId> = ctx.model.type_ids().collect();
    let mut filled = 0usize;
    for ty in types {
        let type_assemblies: Vec<AssemblyInfo> = ctx.model.type_def(ty).item.assembly_info.clone();
        if type_assemblies.is_empty() {
            continue;
        }
        let members: Vec<MemberId> = ctx.model.type_def(ty).members().to_vec();
        for m in members {
            for asm in ctx.model.member_mut(m).item.assembly_info.iter_mut() {
                if asm.name.is_some() || asm.versions.is_empty() {
                    continue;
                }
                let fallback = type_assemblies
                    .iter()
                    .find(|t| asm.versions.iter().all(|v| t.versions.contains(v)));
                asm.name = fallback.and_then(|t| t.name.clone());
                filled += usize::from(asm.name.is_some());
            }
        }
    }
    filled
}
