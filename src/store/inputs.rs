//! Build inputs: optional side indices and build options.

use indexmap::IndexMap;
use std::sync::Arc;

use crate::base::TypeId;
use crate::filter::FilterStore;

// ============================================================================
// FRAMEWORKS INDEX
// ============================================================================

/// Doc id (or namespace uid) -> monikers the entity ships in.
///
/// Monikers are kept in first-seen order without duplicates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameworksIndex {
    entries: IndexMap<String, Vec<String>>,
}

impl FrameworksIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `key` is available in `moniker`.
    pub fn add(&mut self, key: impl Into<String>, moniker: &str) {
        let monikers = self.entries.entry(key.into()).or_default();
        if !monikers.iter().any(|m| m == moniker) {
            monikers.push(moniker.to_string());
        }
    }

    pub fn with_entry(mut self, key: &str, monikers: &[&str]) -> Self {
        for moniker in monikers {
            self.add(key, moniker);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Merge another index into this one.
    pub fn extend(&mut self, other: FrameworksIndex) {
        for (key, monikers) in other.entries {
            for moniker in monikers {
                self.add(key.clone(), &moniker);
            }
        }
    }
}

// ============================================================================
// EXTENSION METHODS
// ============================================================================

/// An extension-method declaration from the documentation index.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtensionMethod {
    /// Doc id of the extended type, e.g. `T:System.Collections.Generic.IEnumerable`1`.
    pub target_doc_id: String,
    /// Doc id of the declaring member.
    pub member_doc_id: String,
    /// Declaring type as written in the index.
    pub parent_type_string: String,
    /// Uid of the declaring member, once resolved.
    pub uid: Option<Arc<str>>,
    /// Declaring type, once resolved.
    pub parent_type: Option<TypeId>,
}

impl ExtensionMethod {
    pub fn new(
        target_doc_id: impl Into<String>,
        member_doc_id: impl Into<String>,
        parent_type_string: impl Into<String>,
    ) -> Self {
        Self {
            target_doc_id: target_doc_id.into(),
            member_doc_id: member_doc_id.into(),
            parent_type_string: parent_type_string.into(),
            uid: None,
            parent_type: None,
        }
    }

    /// Target doc id with its `T:` prefix removed.
    pub fn target_uid(&self) -> &str {
        self.target_doc_id
            .strip_prefix("T:")
            .unwrap_or(&self.target_doc_id)
    }

    pub fn is_resolved(&self) -> bool {
        self.uid.is_some()
    }
}

// ============================================================================
// OPTIONS
// ============================================================================

/// Switches controlling a build.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Report external base types and unresolved exceptions.
    pub strict_mode: bool,
    /// Remove types and members hidden by API filter rules before building.
    pub apply_api_filters: bool,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strict_mode(mut self, strict: bool) -> Self {
        self.strict_mode = strict;
        self
    }

    pub fn with_api_filters(mut self, apply: bool) -> Self {
        self.apply_api_filters = apply;
        self
    }
}

// ============================================================================
// INPUTS
// ============================================================================

/// Side indices consumed by a build. All of them are optional.
#[derive(Clone, Debug, Default)]
pub struct BuildInputs {
    pub frameworks: FrameworksIndex,
    pub extension_methods: Vec<ExtensionMethod>,
    /// Moniker -> package name.
    pub moniker_packages: Option<IndexMap<String, String>>,
    /// Moniker -> assembly names.
    pub moniker_assemblies: Option<IndexMap<String, Vec<String>>>,
    pub filters: Option<FilterStore>,
}

impl BuildInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frameworks(mut self, frameworks: FrameworksIndex) -> Self {
        self.frameworks = frameworks;
        self
    }

    pub fn with_extension_method(mut self, extension: ExtensionMethod) -> Self {
        self.extension_methods.push(extension);
        self
    }

    pub fn with_extension_methods(mut self, extensions: Vec<ExtensionMethod>) -> Self {
        self.extension_methods.extend(extensions);
        self
    }

    pub fn with_moniker_packages(mut self, mapping: IndexMap<String, String>) -> Self {
        self.moniker_packages = Some(mapping);
        self
    }

    pub fn with_moniker_assemblies(mut self, mapping: IndexMap<String, Vec<String>>) -> Self {
        self.moniker_assemblies = Some(mapping);
        self
    }

    pub fn with_filters(mut self, filters: FilterStore) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Assembly name -> monikers it ships in, inverted from the moniker mapping.
    pub fn assembly_monikers(&self) -> Option<IndexMap<String, Vec<String>>> {
        let mapping = self.moniker_assemblies.as_ref()?;
        let mut inverted: IndexMap<String, Vec<String>> = IndexMap::new();
        for (moniker, assemblies) in mapping {
            for assembly in assemblies {
                inverted
                    .entry(assembly.clone())
                    .or_default()
                    .push(moniker.clone());
            }
        }
        Some(inverted)
    }
}
