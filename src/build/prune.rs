//! API filter pre-pass: hidden types and members are detached before any
//! identifier is built, so nothing downstream ever sees them.

use tracing::debug;

use super::BuildContext;
use crate::base::{MemberId, NamespaceId, TypeId};

pub fn run(ctx: &mut BuildContext<'_>) {
    let Some(filters) = ctx.inputs.filters.as_ref().filter(|f| f.has_api_filters()) else {
        return;
    };

    let mut pruned_types = 0usize;
    let mut pruned_members = 0usize;
    let namespaces: Vec<NamespaceId> = ctx.model.namespace_ids().collect();
    for ns in namespaces {
        let ns_name = ctx.model.namespace(ns).item.name.clone();
        let types: Vec<TypeId> = ctx.model.namespace(ns).types().to_vec();

        let mut kept_types = Vec::with_capacity(types.len());
        for ty in types {
            let type_def = ctx.model.type_def(ty);
            if !filters.is_type_visible(&ns_name, type_def.name()) {
                let source = type_def.item.source_path.clone();
                let name = type_def.full_name.clone();
                ctx.diagnostics.pruned_by_filter("type", &name, source);
                pruned_types += 1;
                continue;
            }
            kept_types.push(ty);

            let type_name = type_def.item.name.clone();
            let members: Vec<MemberId> = type_def.members().to_vec();
            let mut kept_members = Vec::with_capacity(members.len());
            for m in members {
                let member = ctx.model.member(m);
                if filters.is_member_visible(&ns_name, &type_name, member.name()) {
                    kept_members.push(m);
                } else {
                    let name = format!("{}.{}", type_name, member.name());
                    let source = member.item.source_path.clone();
                    ctx.diagnostics.pruned_by_filter("member", &name, source);
                    pruned_members += 1;
                }
            }
            ctx.model.set_type_members(ty, kept_members);
        }
        ctx.model.set_namespace_types(ns, kept_types);
    }
    debug!(types = pruned_types, members = pruned_members, "api filters applied");
}
