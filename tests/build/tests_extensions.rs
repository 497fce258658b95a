//! Extension method tests.

use apidoc::build::extensions::is_applicable;
use apidoc::diagnostics::codes;
use apidoc::{BuildInputs, ExtensionMethod, FrameworksIndex, Model, Store};
use rstest::rstest;

use crate::helpers::diagnostic_helpers::*;
use crate::helpers::model_fixtures::*;

const GO_DOC_ID: &str = "M:N.Ext.Go(N.IFoo)";
const GO_UID: &str = "N.Ext.Go(N.IFoo)";

/// `IFoo`, `Bar : IFoo`, `Baz : Bar` and static `Ext` declaring `Go(IFoo)`.
fn extension_model() -> Model {
    let mut model = model_with(vec![
        interface("IFoo").with_doc_id("T:N.IFoo"),
        class("Bar").with_doc_id("T:N.Bar").with_interface("N.IFoo"),
        class("Baz").with_doc_id("T:N.Baz").with_base_type("N.Bar"),
        class("Ext")
            .with_doc_id("T:N.Ext")
            .with_modifiers(&["public", "static"]),
    ]);
    let ext = model.type_ids().last().unwrap();
    model.add_member(
        ext,
        method("Go")
            .with_doc_id(GO_DOC_ID)
            .with_param("target", "N.IFoo")
            .with_modifiers(&["public", "static"]),
    );
    model
}

fn go_declaration() -> ExtensionMethod {
    ExtensionMethod::new("T:N.IFoo", GO_DOC_ID, "N.Ext")
}

fn extended(store: &Store, uid: &str) -> bool {
    store
        .type_by_uid(uid)
        .unwrap()
        .extension_methods
        .iter()
        .any(|u| u.as_ref() == GO_UID)
}

fn frameworks(bar: Option<&[&str]>, ext: Option<&[&str]>) -> FrameworksIndex {
    let mut index = FrameworksIndex::new()
        .with_entry("T:N.IFoo", &["net5"])
        .with_entry(GO_DOC_ID, &["net5"]);
    if let Some(monikers) = bar {
        index = index.with_entry("T:N.Bar", monikers);
    }
    if let Some(monikers) = ext {
        index = index.with_entry("T:N.Ext", monikers);
    }
    index
}

#[test]
fn test_interface_extension_reaches_implementer() {
    let inputs = BuildInputs::new()
        .with_frameworks(frameworks(Some(&["net5", "net6"]), Some(&["net5"])))
        .with_extension_method(go_declaration());
    let store = build_with(extension_model(), inputs);

    assert!(extended(&store, "N.IFoo"));
    assert!(extended(&store, "N.Bar"));
    assert!(!extended(&store, "N.Ext"));

    let declaration = store.extension_method(GO_DOC_ID).unwrap();
    assert_eq!(declaration.uid.as_deref(), Some(GO_UID));
    assert!(store.member_by_uid(GO_UID).unwrap().is_extension_method);
}

#[rstest]
#[case(Some(&["net5", "net6"][..]), Some(&["net5"][..]), true)]
#[case(Some(&["net7"][..]), Some(&["net5"][..]), false)]
#[case(None, Some(&["net5"][..]), false)]
#[case(Some(&["net5"][..]), None, false)]
fn test_applicability_follows_monikers(
    #[case] bar: Option<&[&str]>,
    #[case] ext: Option<&[&str]>,
    #[case] expected: bool,
) {
    let inputs = BuildInputs::new()
        .with_frameworks(frameworks(bar, ext))
        .with_extension_method(go_declaration());
    let store = build_with(extension_model(), inputs);
    assert_eq!(extended(&store, "N.Bar"), expected);
}

#[test]
fn test_no_monikers_anywhere_applies() {
    let store = build_with(
        extension_model(),
        BuildInputs::new().with_extension_method(go_declaration()),
    );
    assert!(extended(&store, "N.Bar"));
    assert!(extended(&store, "N.Baz"));
}

#[rstest]
#[case(None, None, true)]
#[case(Some(vec![]), None, true)]
#[case(Some(vec!["net5"]), Some(vec!["net5", "net6"]), true)]
#[case(Some(vec!["net5"]), Some(vec!["net6"]), false)]
#[case(Some(vec!["net5"]), None, false)]
#[case(None, Some(vec!["net5"]), false)]
fn test_is_applicable(
    #[case] type_monikers: Option<Vec<&str>>,
    #[case] method_monikers: Option<Vec<&str>>,
    #[case] expected: bool,
) {
    let owned = |m: Option<Vec<&str>>| -> Option<Vec<String>> {
        m.map(|v| v.into_iter().map(String::from).collect())
    };
    let type_monikers = owned(type_monikers);
    let method_monikers = owned(method_monikers);
    assert_eq!(
        is_applicable(type_monikers.as_deref(), method_monikers.as_deref()),
        expected
    );
}

#[test]
fn test_unknown_member_is_reported_as_info() {
    let inputs = BuildInputs::new()
        .with_extension_method(go_declaration())
        .with_extension_method(ExtensionMethod::new("T:N.IFoo", "M:N.Ext.Gone", "N.Ext"));
    let store = build_with(extension_model(), inputs);

    assert_eq!(count_code(&store, codes::UNRESOLVED_EXTENSION_METHOD), 1);
    assert!(!store.extension_method("M:N.Ext.Gone").unwrap().is_resolved());
    assert!(extended(&store, "N.Bar"));
}

#[test]
fn test_duplicate_declaration_is_a_warning() {
    let inputs = BuildInputs::new()
        .with_extension_method(go_declaration())
        .with_extension_method(go_declaration());
    let store = build_with(extension_model(), inputs);

    assert_eq!(count_code(&store, codes::DUPLICATE_EXTENSION_METHOD), 1);
    assert_eq!(store.extensions().len(), 1);
}
