//! Attribute resolution and visibility tests.

use apidoc::build::attributes::resolve_attribute_type;
use apidoc::filter::{AttributeFilter, FilterStore};
use apidoc::{BuildInputs, ItemType, Model, Namespace, Store, TypeDef};
use rstest::rstest;

use crate::helpers::model_fixtures::*;

/// `MyNamespace.Widget` carrying two attributes, with
/// `MyNamespace.SpecialAttribute` documented alongside it.
fn attributed(filters: Option<FilterStore>) -> Store {
    let mut model = Model::new();
    let ns = model.add_namespace(Namespace::new("MyNamespace"));
    model.add_type(
        ns,
        TypeDef::new("SpecialAttribute", "MyNamespace.SpecialAttribute", ItemType::Class),
    );
    model.add_type(
        ns,
        TypeDef::new("Widget", "MyNamespace.Widget", ItemType::Class)
            .with_attribute("MyNamespace.Special")
            .with_attribute("System.Obsolete(\"use Gadget\")"),
    );
    let mut inputs = BuildInputs::new();
    if let Some(filters) = filters {
        inputs = inputs.with_filters(filters);
    }
    build_with(model, inputs)
}

/// `(type full name, visible)` of every attribute on `Widget`.
fn widget_attributes(store: &Store) -> Vec<(String, bool)> {
    store
        .type_by_uid("MyNamespace.Widget")
        .unwrap()
        .item
        .attributes
        .iter()
        .map(|a| {
            (
                a.type_full_name.as_deref().unwrap_or_default().to_string(),
                a.visible,
            )
        })
        .collect()
}

#[test]
fn test_default_deny_then_allow_special() {
    let filters = FilterStore::new()
        .with_attribute_filter(AttributeFilter::new("*").with_type("*", false))
        .with_attribute_filter(
            AttributeFilter::new("MyNamespace").with_type("SpecialAttribute", true),
        );
    let store = attributed(Some(filters));

    assert_eq!(
        widget_attributes(&store),
        vec![
            ("MyNamespace.SpecialAttribute".to_string(), true),
            ("System.ObsoleteAttribute".to_string(), false),
        ]
    );
}

#[test]
fn test_without_rules_everything_is_visible() {
    let store = attributed(None);
    assert!(widget_attributes(&store).iter().all(|(_, visible)| *visible));
}

#[rstest]
// No rule decides: visible.
#[case(vec![], true)]
#[case(vec![AttributeFilter::new("Other").with_type("*", false)], true)]
// Single rule.
#[case(vec![AttributeFilter::new("System").with_type("ObsoleteAttribute", false)], false)]
// Later rules override earlier ones, in both directions.
#[case(
    vec![
        AttributeFilter::new("*").with_type("*", false),
        AttributeFilter::new("System").with_type("ObsoleteAttribute", true),
    ],
    true
)]
#[case(
    vec![
        AttributeFilter::new("System").with_type("ObsoleteAttribute", true),
        AttributeFilter::new("*").with_type("*", false),
    ],
    false
)]
// A later rule without a decision leaves the earlier one standing.
#[case(
    vec![
        AttributeFilter::new("System").with_type("ObsoleteAttribute", false),
        AttributeFilter::new("Other").with_type("*", true),
    ],
    false
)]
fn test_last_matching_rule_wins(#[case] rules: Vec<AttributeFilter>, #[case] expected: bool) {
    let filters = rules
        .into_iter()
        .fold(FilterStore::new(), |store, rule| store.with_attribute_filter(rule));
    assert_eq!(filters.is_attribute_visible("System.ObsoleteAttribute"), expected);
}

#[rstest]
#[case("System.Obsolete", &[], "System.ObsoleteAttribute")]
#[case("System.ObsoleteAttribute(\"old\")", &[], "System.ObsoleteAttribute")]
#[case("get: System.Diagnostics.Contracts.Pure", &[], "System.Diagnostics.Contracts.PureAttribute")]
#[case("N.Marker", &["N.Marker"], "N.Marker")]
#[case("N.Marker", &["N.Marker", "N.MarkerAttribute"], "N.MarkerAttribute")]
fn test_attribute_type_names(
    #[case] declaration: &str,
    #[case] known: &[&str],
    #[case] expected: &str,
) {
    let resolved = resolve_attribute_type(declaration, |name| known.contains(&name));
    assert_eq!(resolved, expected);
}
