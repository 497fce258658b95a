//! Overload group tests.

use apidoc::build::ids::overload_id;
use apidoc::{BuildInputs, FrameworksIndex, ItemType, Member, Store, TypeDef};
use rstest::rstest;

use crate::helpers::model_fixtures::*;

/// Placeholders of the type with the given uid, as `(uid, display name)`.
fn placeholders(store: &Store, type_uid: &str) -> Vec<(String, String)> {
    store
        .type_by_uid(type_uid)
        .unwrap()
        .overloads()
        .iter()
        .map(|&m| {
            let member = store.model().member(m);
            (
                member.uid().unwrap_or_default().to_string(),
                member.display_name.clone(),
            )
        })
        .collect()
}

#[rstest]
#[case(method("Draw"))]
#[case(method("Draw").with_param("x", "System.Int32"))]
#[case(method("Draw").with_param("x", "System.Int32").with_param("y", "System.Int32"))]
#[case(method("Draw<T>").with_type_parameters(&["T"]).with_param("item", "T"))]
#[case(
    method("Draw<T1,T2>")
        .with_type_parameters(&["T1", "T2"])
        .with_param("a", "T1")
        .with_param("b", "T2")
)]
fn test_overload_id_is_identical_across_arities(#[case] member: Member) {
    let mut model = model_with(vec![class("Widget")]);
    let ty = model.type_ids().next().unwrap();
    let m = model.add_member(ty, member);
    let store = build(model);

    let member = store.model().member(m);
    let group = overload_id(member).unwrap();
    assert_eq!(group, "Draw*");
    assert!(!group.contains('('));
    assert_eq!(member.overload.as_deref(), Some("N.Widget.Draw*"));
}

#[test]
fn test_one_placeholder_per_name() {
    let store = build(collections());
    let groups = placeholders(&store, "System.Collections.Generic.Dictionary`2");
    assert_eq!(
        groups,
        vec![
            (
                "System.Collections.Generic.Dictionary`2.Add*".to_string(),
                "Add".to_string()
            ),
            (
                "System.Collections.Generic.Dictionary`2.TryAdd*".to_string(),
                "TryAdd".to_string()
            ),
        ]
    );
}

#[test]
fn test_members_point_at_their_group() {
    let store = build(hierarchy());
    let leaf = store.type_by_uid("N.Leaf").unwrap();
    for &m in leaf.members() {
        assert_eq!(
            store.model().member(m).overload.as_deref(),
            Some("N.Leaf.Measure*")
        );
    }
    assert_eq!(leaf.overloads().len(), 1);
}

#[test]
fn test_constructor_group_uses_type_name() {
    let mut model = model_with(vec![class("Widget")]);
    let ty = model.type_ids().next().unwrap();
    model.add_member(ty, Member::new(".ctor", ItemType::Constructor));
    model.add_member(
        ty,
        Member::new(".ctor", ItemType::Constructor).with_param("name", "System.String"),
    );
    let store = build(model);

    assert_eq!(
        placeholders(&store, "N.Widget"),
        vec![("N.Widget.#ctor*".to_string(), "Widget".to_string())]
    );
}

#[test]
fn test_fields_and_events_are_not_grouped() {
    let mut model = model_with(vec![class("Widget")]);
    let ty = model.type_ids().next().unwrap();
    model.add_member(ty, Member::new("Size", ItemType::Field));
    model.add_member(ty, Member::new("Changed", ItemType::Event));
    let store = build(model);

    assert!(placeholders(&store, "N.Widget").is_empty());
}

#[test]
fn test_placeholder_monikers_are_the_union_of_the_group() {
    let mut model = model_with(vec![TypeDef::new("Widget", "N.Widget", ItemType::Class)]);
    let ty = model.type_ids().next().unwrap();
    model.add_member(ty, method("Draw").with_doc_id("M:N.Widget.Draw"));
    model.add_member(
        ty,
        method("Draw")
            .with_doc_id("M:N.Widget.Draw(System.Int32)")
            .with_param("x", "System.Int32"),
    );
    let frameworks = FrameworksIndex::new()
        .with_entry("M:N.Widget.Draw", &["net6", "net7"])
        .with_entry("M:N.Widget.Draw(System.Int32)", &["net5", "net6"]);
    let store = build_with(model, BuildInputs::new().with_frameworks(frameworks));

    let widget = store.type_by_uid("N.Widget").unwrap();
    let placeholder = store.model().member(widget.overloads()[0]);
    let mut monikers = placeholder.item.monikers().unwrap().to_vec();
    monikers.sort();
    assert_eq!(monikers, vec!["net5", "net6", "net7"]);
}
