//! Inheritance chain and inherited member tests.

use apidoc::diagnostics::codes;
use apidoc::{BuildInputs, BuildOptions, Model, Namespace};
use rstest::rstest;
use rustc_hash::FxHashSet;

use crate::helpers::diagnostic_helpers::*;
use crate::helpers::model_fixtures::*;

#[rstest]
#[case("N.Root", &["System.Object"])]
#[case("N.Middle", &["System.Object", "N.Root"])]
#[case("N.Leaf", &["System.Object", "N.Root", "N.Middle"])]
fn test_chain_is_root_first(#[case] uid: &str, #[case] expected: &[&str]) {
    let store = build(hierarchy());
    let chain: Vec<&str> = store
        .type_by_uid(uid)
        .unwrap()
        .inheritance_uids
        .iter()
        .map(|u| u.as_ref())
        .collect();
    assert_eq!(chain, expected);
}

#[test]
fn test_chains_are_duplicate_free_and_end_at_immediate_base() {
    let mut model = hierarchy();
    let ns = model.namespace_ids().next().unwrap();
    model.add_type(ns, class("A").with_base_type("N.B"));
    model.add_type(ns, class("B").with_base_type("N.C"));
    model.add_type(ns, class("C").with_base_type("N.A"));
    let store = build(model);

    for ty in store.type_ids() {
        let type_def = store.model().type_def(ty);
        let chain = &type_def.inheritance_uids;
        let distinct: FxHashSet<&str> = chain.iter().map(|u| u.as_ref()).collect();
        assert_eq!(distinct.len(), chain.len(), "{:?}", type_def.uid());
        assert!(!distinct.contains(type_def.uid().unwrap()));
        if let (Some(base), Some(last)) = (&type_def.base_type, chain.last()) {
            assert_eq!(base.uid(), Some(last.as_ref()));
        }
    }
    assert_eq!(count_code(&store, codes::INHERITANCE_CYCLE), 3);
}

#[rstest]
#[case("Render", Some("N.Middle"))]
#[case("Describe", Some("N.Root"))]
#[case("Measure", None)]
#[case("Finalize", None)]
#[case("#ctor", None)]
#[case("Create", None)]
fn test_inherited_members_of_leaf(#[case] id: &str, #[case] expected: Option<&str>) {
    let store = build(hierarchy());
    let leaf = store.type_by_uid("N.Leaf").unwrap();
    assert_eq!(leaf.inherited_members.get(id).map(|u| u.as_ref()), expected);
}

#[test]
fn test_inherited_members_never_shadow_local_ids() {
    let store = build(hierarchy());
    for ty in store.type_ids() {
        let type_def = store.model().type_def(ty);
        for &m in type_def.members() {
            let id = store.model().member(m).id().unwrap();
            assert!(
                !type_def.inherited_members.contains_key(id),
                "{id} is declared by {:?}",
                type_def.uid()
            );
        }
    }
}

#[test]
fn test_static_class_keeps_chain_but_inherits_nothing() {
    let mut model = hierarchy();
    let ns = model.namespace_ids().next().unwrap();
    model.add_type(
        ns,
        class("Helpers")
            .with_base_type("N.Root")
            .with_modifiers(&["public", "static"]),
    );
    let store = build(model);

    let helpers = store.type_by_uid("N.Helpers").unwrap();
    assert!(helpers.inherited_members.is_empty());
    assert_eq!(helpers.inheritance_uids.len(), 2);
}

#[test]
fn test_graph_links_interfaces_and_bases() {
    let store = build(model_with(vec![
        interface("IShape"),
        class("Shape").with_interface("N.IShape"),
        class("Square").with_base_type("N.Shape"),
    ]));

    let parents: Vec<&str> = store
        .graph()
        .parents_of("N.Shape")
        .iter()
        .map(|u| u.as_ref())
        .collect();
    assert_eq!(parents, vec!["N.IShape"]);

    let children: Vec<&str> = store
        .graph()
        .children_of("N.Shape")
        .iter()
        .map(|u| u.as_ref())
        .collect();
    assert_eq!(children, vec!["N.Square"]);
}

#[test]
fn test_external_base_reported_only_in_strict_mode() {
    let relaxed = build(hierarchy());
    assert_eq!(count_code(&relaxed, codes::EXTERNAL_BASE_TYPE), 0);

    let strict = build_with_options(
        hierarchy(),
        BuildInputs::new(),
        BuildOptions::new().with_strict_mode(true),
    );
    assert_eq!(count_code(&strict, codes::EXTERNAL_BASE_TYPE), 3);
}

#[test]
fn test_interface_without_base_has_empty_chain() {
    let mut model = Model::new();
    let ns = model.add_namespace(Namespace::new("N"));
    model.add_type(ns, interface("IShape"));
    let store = build(model);
    assert!(store.type_by_uid("N.IShape").unwrap().inheritance_uids.is_empty());
}
