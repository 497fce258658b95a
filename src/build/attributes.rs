//! Attribute type resolution and visibility.

use std::sync::Arc;
use tracing::{debug, trace};

use super::BuildContext;
use crate::base::constants::{ATTRIBUTE_ACCESSOR_PREFIXES, ATTRIBUTE_SUFFIX};
use crate::base::{MemberId, TypeId};
use crate::filter::FilterStore;
use crate::model::Attribute;
use crate::store::StoreIndex;

pub fn run(ctx: &mut BuildContext<'_>) {
    let filters = ctx.inputs.filters.as_ref();
    let types: Vec<TypeId> = ctx.model.type_ids().collect();
    let mut resolved = 0usize;
    let mut hidden = 0usize;

    for ty in types {
        let members: Vec<MemberId> = ctx.model.type_def(ty).members().to_vec();
        for attr in ctx.model.type_def_mut(ty).item.attributes.iter_mut() {
            hidden += usize::from(!resolve(attr, ctx.index, filters));
            resolved += 1;
        }
        for m in members {
            for attr in ctx.model.member_mut(m).item.attributes.iter_mut() {
                hidden += usize::from(!resolve(attr, ctx.index, filters));
                resolved += 1;
            }
        }
    }
    debug!(attributes = resolved, hidden, "attributes resolved");
}

/// Resolve one attribute in place; returns its visibility.
fn resolve(attr: &mut Attribute, index: &StoreIndex, filters: Option<&FilterStore>) -> bool {
    let full_name = resolve_attribute_type(&attr.declaration, |name| {
        index.type_by_full_name(name).is_some()
    });
    if let Some(filters) = filters {
        attr.visible = filters.is_attribute_visible(&full_name);
    }
    trace!(declaration = %attr.declaration, full_name = %full_name, visible = attr.visible, "attribute");
    attr.type_full_name = Some(Arc::from(full_name));
    attr.visible
}

/// Fully-qualified type name declared by an attribute occurrence.
///
/// The argument list and any accessor prefix (`get: `, `set: `, ...) are
/// removed; the `Attribute`-suffixed name is preferred when it is a known
/// type or when the bare name is not. A name that already ends in
/// `Attribute` is not suffixed twice unless that doubled name is known.
pub fn resolve_attribute_type(declaration: &str, is_known: impl Fn(&str) -> bool) -> String {
    let mut name = declaration;
    if let Some(paren) = name.find('(') {
        name = &name[..paren];
    }
    for prefix in ATTRIBUTE_ACCESSOR_PREFIXES {
        if let Some(rest) = name.strip_prefix(prefix) {
            name = rest;
        }
    }
    let name = name.trim();

    let suffixed = format!("{name}{ATTRIBUTE_SUFFIX}");
    if is_known(&suffixed) {
        return suffixed;
    }
    if name.ends_with(ATTRIBUTE_SUFFIX) || is_known(name) {
        name.to_string()
    } else {
        suffixed
    }
}
