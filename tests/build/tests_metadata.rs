//! Frameworks, packages, documentation binding and note metadata.

use apidoc::base::constants::meta;
use apidoc::diagnostics::codes;
use apidoc::{AssemblyInfo, BuildInputs, Docs, FrameworksIndex, ItemType, Member, Model, Namespace, TypeDef};
use indexmap::IndexMap;

use crate::helpers::diagnostic_helpers::*;
use crate::helpers::model_fixtures::*;

/// `N.Foo` shipped in `N.Core`, with one documented method.
fn shipped() -> Model {
    let mut model = Model::new();
    let ns = model.add_namespace(Namespace::new("N"));
    let foo = model.add_type(
        ns,
        TypeDef::new("Foo", "N.Foo", ItemType::Class)
            .with_doc_id("T:N.Foo")
            .with_assembly(AssemblyInfo::new("N.Core", vec!["1.0".into(), "2.0".into()])),
    );
    model.add_member(
        foo,
        method("Run")
            .with_doc_id("M:N.Foo.Run")
            .with_assembly(AssemblyInfo::new("N.Core", vec!["2.0".into()])),
    );
    model
}

fn frameworks() -> FrameworksIndex {
    FrameworksIndex::new()
        .with_entry("N", &["net6", "net7"])
        .with_entry("T:N.Foo", &["net6", "net7"])
        .with_entry("M:N.Foo.Run", &["net7"])
}

#[test]
fn test_monikers_come_from_the_frameworks_index() {
    let store = build_with(shipped(), BuildInputs::new().with_frameworks(frameworks()));
    assert_no_errors(&store);

    let ns = store.namespace("N").unwrap();
    assert_eq!(ns.item.monikers(), Some(&["net6".to_string(), "net7".to_string()][..]));
    let run = store.member_by_uid("N.Foo.Run").unwrap();
    assert_eq!(run.item.monikers(), Some(&["net7".to_string()][..]));
}

#[test]
fn test_member_missing_from_frameworks_is_an_error() {
    let frameworks = FrameworksIndex::new().with_entry("T:N.Foo", &["net6"]);
    let store = build_with(shipped(), BuildInputs::new().with_frameworks(frameworks));

    let errors = with_code(&store, codes::MISSING_FRAMEWORK_INFO);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("M:N.Foo.Run"));
}

#[test]
fn test_package_names_follow_monikers() {
    let mut packages = IndexMap::new();
    packages.insert("net7".to_string(), "N.Core.Package".to_string());
    let inputs = BuildInputs::new()
        .with_frameworks(frameworks())
        .with_moniker_packages(packages);
    let store = build_with(shipped(), inputs);

    let foo = store.type_by_uid("N.Foo").unwrap();
    assert_eq!(
        foo.item.metadata[meta::PACKAGE_NAMES].as_strings(),
        Some(&["N.Core.Package".to_string()][..])
    );
    let placeholder = store.model().member(foo.overloads()[0]);
    assert!(placeholder.item.metadata.contains_key(meta::PACKAGE_NAMES));
}

#[test]
fn test_assembly_moniker_mapping_and_unknown_assemblies() {
    let mut assemblies = IndexMap::new();
    assemblies.insert("net6".to_string(), vec!["N.Core".to_string()]);
    assemblies.insert("net7".to_string(), vec!["N.Extra".to_string()]);
    let inputs = BuildInputs::new()
        .with_frameworks(frameworks())
        .with_moniker_assemblies(assemblies);
    let store = build_with(shipped(), inputs);

    let foo = store.type_by_uid("N.Foo").unwrap();
    let mapping = foo.item.metadata[meta::ASSEMBLY_MONIKER_MAPPING]
        .as_map()
        .unwrap();
    assert_eq!(mapping["N.Core"].as_strings(), Some(&["net6".to_string()][..]));

    // Run ships only in net7, which N.Core does not.
    let run = store.member_by_uid("N.Foo.Run").unwrap();
    assert!(!run.item.metadata.contains_key(meta::ASSEMBLY_MONIKER_MAPPING));
    assert_eq!(count_code(&store, codes::UNKNOWN_ASSEMBLY), 0);
}

#[test]
fn test_parameter_and_return_descriptions_are_bound() {
    let mut model = model_with(vec![class("Box")]);
    let ty = model.type_ids().next().unwrap();
    let put = model.add_member(
        ty,
        Member::new("Put", ItemType::Method)
            .with_param("value", "System.Int32")
            .with_param("slot", "System.Int32")
            .with_return("System.Boolean")
            .with_docs(
                Docs::new()
                    .with_parameter("value", "The value to store.")
                    .with_returns("Whether the value fit."),
            ),
    );
    let store = build(model);

    let put = store.model().member(put);
    assert_eq!(
        put.item.parameters[0].description.as_deref(),
        Some("The value to store.")
    );
    assert_eq!(put.item.parameters[1].description, None);
    assert_eq!(
        put.item.return_value.as_ref().and_then(|r| r.description.as_deref()),
        Some("Whether the value fit.")
    );
}

#[test]
fn test_notes_alt_compliant_and_internal_only() {
    let mut model = model_with(vec![interface("IShape").with_docs(
        Docs::new()
            .with_note("overrides", "Implement carefully.\n")
            .with_note("usage", "Call sparingly.")
            .with_note("trivia", "Nobody reads this.")
            .with_alt_compliant("T:N.ICompliantShape")
            .internal_only(),
    )]);
    let ty = model.type_ids().next().unwrap();
    let area = model.add_member(ty, method("Area"));
    let store = build(model);

    let shape = store.type_by_uid("N.IShape").unwrap();
    let notes = shape.item.metadata[meta::ADDITIONAL_NOTES].as_map().unwrap();
    assert_eq!(notes["implementer"].as_str(), Some("Implement carefully."));
    assert_eq!(notes["caller"].as_str(), Some("Call sparingly."));
    assert_eq!(
        shape.item.metadata[meta::ALT_COMPLIANT].as_str(),
        Some("N.ICompliantShape")
    );
    assert_eq!(shape.item.metadata[meta::INTERNAL_ONLY].as_bool(), Some(true));
    assert_eq!(count_code(&store, codes::UNKNOWN_ADDITIONAL_NOTE), 1);

    // Undocumented members inherit the flag from their type.
    let area = store.model().member(area);
    assert_eq!(area.item.metadata[meta::INTERNAL_ONLY].as_bool(), Some(true));
}

#[test]
fn test_unnamed_member_assembly_takes_covering_type_assembly() {
    let mut model = shipped();
    let ty = model.type_ids().next().unwrap();
    let covered = model.add_member(
        ty,
        method("Stop").with_assembly(AssemblyInfo::unnamed(vec!["2.0".into()])),
    );
    let uncovered = model.add_member(
        ty,
        method("Pause").with_assembly(AssemblyInfo::unnamed(vec!["3.0".into()])),
    );
    let store = build(model);

    assert_eq!(
        store.model().member(covered).item.assembly_info[0].name.as_deref(),
        Some("N.Core")
    );
    assert_eq!(
        store.model().member(uncovered).item.assembly_info[0].name,
        None
    );
}
