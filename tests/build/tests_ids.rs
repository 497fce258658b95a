//! Identifier, uid and display-name tests.

use apidoc::diagnostics::codes;
use apidoc::model::RefType;
use apidoc::{ItemRef, ItemType, Member, Model, Namespace, TypeDef};
use rstest::rstest;

use crate::helpers::diagnostic_helpers::*;
use crate::helpers::model_fixtures::*;

/// Build a one-member model and return the member's id.
fn built_member_id(type_def: TypeDef, member: Member) -> String {
    let mut model = Model::new();
    let ns = model.add_namespace(Namespace::new("N"));
    let ty = model.add_type(ns, type_def);
    let m = model.add_member(ty, member);
    let store = build(model);
    store.model().member(m).id().unwrap_or_default().to_string()
}

fn dictionary_type() -> TypeDef {
    TypeDef::new(
        "Dictionary<TKey,TValue>",
        "N.Dictionary<TKey,TValue>",
        ItemType::Class,
    )
    .with_type_parameters(&["TKey", "TValue"])
}

// ============================================================================
// Member ids
// ============================================================================

#[rstest]
#[case(class("Widget"), method("Draw"), "Draw")]
#[case(class("Widget"), method("Draw").with_param("x", "System.Int32"), "Draw(System.Int32)")]
#[case(
    class("Widget"),
    method("Draw").with_param("x", "System.Int32").with_param("y", "System.String[]"),
    "Draw(System.Int32,System.String[])"
)]
#[case(
    class("Widget"),
    Member::new(".ctor", ItemType::Constructor).with_param("name", "System.String"),
    "#ctor(System.String)"
)]
#[case(
    dictionary_type(),
    method("Add").with_param("key", "TKey").with_param("value", "TValue"),
    "Add(`0,`1)"
)]
#[case(
    dictionary_type(),
    method("Add").with_param("pair", "System.Collections.Generic.KeyValuePair<TKey,TValue>"),
    "Add(System.Collections.Generic.KeyValuePair{`0,`1})"
)]
#[case(
    class("Widget"),
    method("Create<T>").with_type_parameters(&["T"]).with_param("item", "T"),
    "Create``1(``0)"
)]
#[case(
    class("Widget"),
    method("Swap").with_ref_param("a", "System.Int32&", RefType::Ref),
    "Swap(System.Int32@)"
)]
fn test_member_id(#[case] type_def: TypeDef, #[case] member: Member, #[case] expected: &str) {
    assert_eq!(built_member_id(type_def, member), expected);
}

#[test]
fn test_dictionary_add_example() {
    let store = build(collections());

    let dictionary = store
        .type_by_full_name("System.Collections.Generic.Dictionary<TKey,TValue>")
        .unwrap();
    assert_eq!(dictionary.uid(), Some("System.Collections.Generic.Dictionary`2"));

    let add = store
        .member_by_uid("System.Collections.Generic.Dictionary`2.Add(`0,`1)")
        .unwrap();
    assert_eq!(add.id(), Some("Add(`0,`1)"));
    assert_eq!(add.display_name, "Add(TKey, TValue)");
}

#[test]
fn test_conversion_operator_example() {
    let store = build(collections());

    let op = store
        .member_by_uid("Conversions.MyStruct.op_Explicit(MyStruct)~System.Int32")
        .unwrap();
    assert_eq!(op.id(), Some("op_Explicit(MyStruct)~System.Int32"));
    assert_eq!(op.display_name, "Explicit(MyStruct to Int32)");
    assert_eq!(op.full_display_name, "Conversions.MyStruct.Explicit(MyStruct to Int32)");
}

#[rstest]
#[case(method("Draw"), "Draw()")]
#[case(Member::new(".ctor", ItemType::Constructor), "Widget()")]
#[case(Member::new("Count", ItemType::Property), "Count")]
#[case(method("Draw").with_param("x", "System.Int32"), "Draw(Int32)")]
fn test_display_name(#[case] member: Member, #[case] expected: &str) {
    let mut model = model_with(vec![class("Widget")]);
    let ty = model.type_ids().next().unwrap();
    let m = model.add_member(ty, member);
    let store = build(model);
    assert_eq!(store.model().member(m).display_name, expected);
}

// ============================================================================
// Uids
// ============================================================================

#[test]
fn test_uid_is_parent_uid_plus_id() {
    let store = build(collections());
    let model = store.model();

    for ns in store.namespace_ids() {
        let item = model.item(ItemRef::Namespace(ns));
        assert_eq!(item.uid(), item.id());
    }
    for ty in store.type_ids() {
        let item = model.item(ItemRef::Type(ty));
        assert_eq!(item.uid(), item.id());
    }
    for m in store.member_ids() {
        let member = model.member(m);
        let parent = model.type_def(member.parent().unwrap());
        let expected = format!("{}.{}", parent.uid().unwrap(), member.id().unwrap());
        assert_eq!(member.uid(), Some(expected.as_str()));
    }
}

#[test]
fn test_loader_supplied_type_id_is_kept() {
    let store = build(model_with(vec![class("Widget").with_raw_id("N.Gadget")]));
    assert!(store.type_by_uid("N.Gadget").is_some());
    assert!(store.type_by_uid("N.Widget").is_none());
}

#[test]
fn test_member_clashing_with_type_uid_gets_kind_suffix() {
    let mut model = model_with(vec![class("Outer"), class("Outer.Inner")]);
    let outer = model.type_ids().next().unwrap();
    let field = model.add_member(outer, Member::new("Inner", ItemType::Field));
    let store = build(model);

    assert_eq!(store.model().member(field).uid(), Some("N.Outer.Inner_f"));
    assert!(store.member_by_uid("N.Outer.Inner_f").is_some());
}

#[test]
fn test_member_clash_with_type_uid_ignores_case() {
    let mut model = model_with(vec![class("Outer"), class("Outer.inner")]);
    let outer = model.type_ids().next().unwrap();
    let method = model.add_member(outer, Member::new("Inner", ItemType::Method));
    let store = build(model);

    assert_eq!(store.model().member(method).uid(), Some("N.Outer.Inner_m"));
    assert!(store.member_by_uid("N.Outer.Inner").is_none());
}

#[test]
fn test_duplicate_type_uid_names_the_type() {
    let store = build(model_with(vec![
        class("Widget"),
        class("Gadget").with_raw_id("N.Widget"),
    ]));

    let warnings = with_code(&store, codes::DUPLICATE_UID);
    assert_eq!(warnings.len(), 1);
    assert_eq!(&*warnings[0].message, "duplicate type uid 'N.Widget'");
}

#[test]
fn test_types_sorted_by_id_within_namespace() {
    let store = build(model_with(vec![
        class("Func`10").with_raw_id("N.Func`10"),
        class("Zebra"),
        class("Func`2").with_raw_id("N.Func`2"),
        class("Apple"),
    ]));
    let ns = store.namespace("N").unwrap();
    let uids: Vec<&str> = ns
        .types()
        .iter()
        .filter_map(|&ty| store.model().type_def(ty).uid())
        .collect();
    assert_eq!(uids, vec!["N.Apple", "N.Func`2", "N.Func`10", "N.Zebra"]);
}

// ============================================================================
// Duplicates
// ============================================================================

#[test]
fn test_duplicate_signature_is_a_warning() {
    let mut model = model_with(vec![class("Widget")]);
    let ty = model.type_ids().next().unwrap();
    model.add_member(ty, method("Draw").with_param("x", "System.Int32"));
    model.add_member(ty, method("Draw").with_param("y", "System.Int32"));
    let store = build(model);

    assert_eq!(count_code(&store, codes::DUPLICATE_SIGNATURE), 2);
    assert_no_errors(&store);
}

#[test]
fn test_duplicate_doc_id_last_write_wins() {
    let model = model_with(vec![
        class("First")
            .with_doc_id("T:N.Shared")
            .with_source_path("xml/N/First.xml"),
        class("Second")
            .with_doc_id("T:N.Shared")
            .with_source_path("xml/N/Second.xml"),
    ]);
    let store = build(model);

    let winner = store.item_by_doc_id("T:N.Shared").unwrap();
    assert_eq!(winner.uid(), Some("N.Second"));

    let errors = with_code(&store, codes::DUPLICATE_DOC_ID);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].source.as_deref(), Some("xml/N/Second.xml"));
    assert_eq!(
        errors[0].related.iter().map(|r| r.as_ref()).collect::<Vec<_>>(),
        vec!["xml/N/First.xml"]
    );
}

#[test]
fn test_overload_comment_id() {
    let store = build(collections());
    let dictionary = store
        .type_by_uid("System.Collections.Generic.Dictionary`2")
        .unwrap();
    let placeholder = dictionary
        .overloads()
        .iter()
        .map(|&m| store.model().member(m))
        .find(|m| m.uid() == Some("System.Collections.Generic.Dictionary`2.Add*"))
        .unwrap();
    assert_eq!(
        placeholder.item.comment_id().as_deref(),
        Some("Overload:System.Collections.Generic.Dictionary`2.Add")
    );
}
