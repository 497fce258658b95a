//! Visibility filter rules.
//!
//! Two rule families share one evaluation scheme: rules are checked in
//! declaration order, each may or may not yield a decision, and the last
//! decision wins. With no decision the subject stays visible.
//!
//! - [`AttributeFilter`] - which custom attributes are shown
//! - [`TypeFilter`] / [`MemberFilter`] - which APIs are documented at all

use indexmap::IndexMap;

/// Wildcard accepted for namespace, type and member names.
pub const WILDCARD: &str = "*";

// ============================================================================
// ATTRIBUTE FILTERS
// ============================================================================

/// Attribute visibility rules scoped to one namespace.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeFilter {
    /// Namespace the rule applies to, or `*`.
    pub namespace: String,
    /// Attribute type name -> expose.
    pub type_filters: IndexMap<String, bool>,
    /// Decision for attribute types without a specific entry; set by a `*` entry.
    pub default_value: Option<bool>,
}

impl AttributeFilter {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// Add a type entry; `*` sets the default decision.
    pub fn with_type(mut self, name: &str, expose: bool) -> Self {
        if name == WILDCARD {
            self.default_value = Some(expose);
        } else {
            self.type_filters.insert(name.to_string(), expose);
        }
        self
    }

    /// Decision for an attribute type given by full name, if this rule has one.
    ///
    /// Type entries may be written as simple names or full names.
    pub fn filter(&self, type_full_name: &str) -> Option<bool> {
        let (namespace, name) = split_full_name(type_full_name);
        if self.namespace != WILDCARD && self.namespace != namespace {
            return None;
        }
        self.type_filters
            .get(name)
            .or_else(|| self.type_filters.get(type_full_name))
            .copied()
            .or(self.default_value)
    }
}

// ============================================================================
// API FILTERS
// ============================================================================

/// Type visibility rule.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeFilter {
    pub namespace: String,
    /// Simple type name, or `*`.
    pub name: String,
    pub expose: bool,
}

impl TypeFilter {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>, expose: bool) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            expose,
        }
    }

    /// Returns true when the rule targets the given type.
    pub fn matches(&self, namespace: &str, type_name: &str) -> bool {
        (self.namespace == WILDCARD || self.namespace == namespace)
            && (self.name == WILDCARD || self.name == type_name)
    }

    pub fn filter(&self, namespace: &str, type_name: &str) -> Option<bool> {
        self.matches(namespace, type_name).then_some(self.expose)
    }
}

/// Member visibility rule, nested under a type rule.
#[derive(Clone, Debug, PartialEq)]
pub struct MemberFilter {
    pub parent: TypeFilter,
    /// Member name, or `*`.
    pub name: String,
    pub expose: bool,
}

impl MemberFilter {
    pub fn new(parent: TypeFilter, name: impl Into<String>, expose: bool) -> Self {
        Self {
            parent,
            name: name.into(),
            expose,
        }
    }

    pub fn filter(&self, namespace: &str, type_name: &str, member_name: &str) -> Option<bool> {
        (self.parent.matches(namespace, type_name)
            && (self.name == WILDCARD || self.name == member_name))
            .then_some(self.expose)
    }
}

// ============================================================================
// FILTER STORE
// ============================================================================

/// All filter rules of a documentation set, in declaration order.
///
/// # Example
/// ```rust
/// use apidoc::filter::{AttributeFilter, FilterStore};
///
/// let store = FilterStore::new()
///     .with_attribute_filter(AttributeFilter::new("*").with_type("*", false))
///     .with_attribute_filter(
///         AttributeFilter::new("MyNamespace").with_type("SpecialAttribute", true),
///     );
///
/// assert!(store.is_attribute_visible("MyNamespace.SpecialAttribute"));
/// assert!(!store.is_attribute_visible("MyNamespace.OtherAttribute"));
/// assert!(!store.is_attribute_visible("System.ObsoleteAttribute"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterStore {
    pub attribute_filters: Vec<AttributeFilter>,
    pub type_filters: Vec<TypeFilter>,
    pub member_filters: Vec<MemberFilter>,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute_filter(mut self, filter: AttributeFilter) -> Self {
        self.attribute_filters.push(filter);
        self
    }

    pub fn with_type_filter(mut self, filter: TypeFilter) -> Self {
        self.type_filters.push(filter);
        self
    }

    pub fn with_member_filter(mut self, filter: MemberFilter) -> Self {
        self.member_filters.push(filter);
        self
    }

    pub fn has_api_filters(&self) -> bool {
        !self.type_filters.is_empty() || !self.member_filters.is_empty()
    }

    /// Attribute visibility: the last rule with a decision wins, default visible.
    pub fn is_attribute_visible(&self, type_full_name: &str) -> bool {
        last_decision(self.attribute_filters.iter().map(|f| f.filter(type_full_name)))
            .unwrap_or(true)
    }

    pub fn is_type_visible(&self, namespace: &str, type_name: &str) -> bool {
        last_decision(
            self.type_filters
                .iter()
                .map(|f| f.filter(namespace, type_name)),
        )
        .unwrap_or(true)
    }

    pub fn is_member_visible(&self, namespace: &str, type_name: &str, member_name: &str) -> bool {
        last_decision(
            self.member_filters
                .iter()
                .map(|f| f.filter(namespace, type_name, member_name)),
        )
        .unwrap_or(true)
    }
}

/// Every rule is evaluated; no short-circuit on the first match.
fn last_decision(decisions: impl Iterator<Item = Option<bool>>) -> Option<bool> {
    decisions.fold(None, |current, decision| decision.or(current))
}

/// Split `A.B.C` into (`A.B`, `C`). A name without dots has an empty namespace.
fn split_full_name(full_name: &str) -> (&str, &str) {
    full_name.rsplit_once('.').unwrap_or(("", full_name))
}
