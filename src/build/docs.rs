//! Documentation binding: parameter, type-parameter and return descriptions.

use tracing::{debug, trace};

use super::BuildContext;
use crate::base::{ItemRef, MemberId, TypeId};
use crate::model::{Docs, ItemData, Parameter};

pub fn run(ctx: &mut BuildContext<'_>) {
    let types: Vec<TypeId> = ctx.model.type_ids().collect();
    let mut bound = 0usize;
    for &ty in &types {
        bound += bind(&mut ctx.model.type_def_mut(ty).item);
        let members: Vec<MemberId> = ctx.model.type_def(ty).members().to_vec();
        for m in members {
            bound += bind(&mut ctx.model.member_mut(m).item);
        }
    }

    if ctx.options.strict_mode {
        check_exceptions(ctx, &types);
    }
    debug!(items = bound, "documentation bound");
}

/// Copy descriptions from the item's docs; returns 1 when the item had docs.
fn bind(item: &mut ItemData) -> usize {
    let Some(docs) = item.docs.as_ref() else {
        return 0;
    };
    describe(&mut item.type_parameters, &docs.type_parameters);
    describe(&mut item.parameters, &docs.parameters);
    if let Some(ret) = item.return_value.as_mut() {
        ret.description = docs.returns.clone();
    }
    1
}

fn describe(params: &mut [Parameter], texts: &indexmap::IndexMap<String, String>) {
    for param in params {
        param.description = texts.get(param.name.as_ref()).cloned();
    }
}

/// Documented exceptions must name a known type or member.
fn check_exceptions(ctx: &mut BuildContext<'_>, types: &[TypeId]) {
    let mut items: Vec<ItemRef> = Vec::new();
    for &ty in types {
        items.push(ItemRef::Type(ty));
        items.extend(
            ctx.model
                .type_def(ty)
                .members()
                .iter()
                .map(|&m| ItemRef::Member(m)),
        );
    }

    for item in items {
        let data = ctx.model.item(item);
        let Some(docs) = data.docs.as_ref() else {
            continue;
        };
        let unresolved: Vec<String> = unresolved_exceptions(docs, |uid| {
            ctx.index.type_by_uid(uid).is_some() || ctx.index.member_by_uid(uid).is_some()
        });
        if unresolved.is_empty() {
            continue;
        }
        let uid = data.uid().unwrap_or_default().to_string();
        let source = data.source_path.clone();
        for exception in unresolved {
            trace!(uid = %uid, exception = %exception, "unresolved exception");
            ctx.diagnostics
                .unresolved_exception(&uid, &exception, source.clone());
        }
    }
}

fn unresolved_exceptions(docs: &Docs, known: impl Fn(&str) -> bool) -> Vec<String> {
    docs.exceptions
        .iter()
        .filter(|e| !known(&e.uid))
        .map(|e| e.uid.clone())
        .collect()
}
