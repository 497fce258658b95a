//! Shared fields carried by every documented entity.

use indexmap::IndexMap;
use std::sync::Arc;

use super::{AssemblyInfo, Attribute, Docs, Metadata, Parameter};
use crate::base::constants::CSHARP_MODIFIERS;

// ============================================================================
// ITEM TYPE
// ============================================================================

/// The kind of a documented entity.
///
/// This is a closed set: every pass that behaves differently per kind matches
/// on it exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemType {
    Namespace,
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
    Field,
    Property,
    Event,
    Constructor,
    Method,
    Operator,
    AttachedEvent,
    AttachedProperty,
    Container,
}

impl ItemType {
    /// Canonical name, as used in source documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Namespace => "Namespace",
            Self::Class => "Class",
            Self::Struct => "Struct",
            Self::Interface => "Interface",
            Self::Enum => "Enum",
            Self::Delegate => "Delegate",
            Self::Field => "Field",
            Self::Property => "Property",
            Self::Event => "Event",
            Self::Constructor => "Constructor",
            Self::Method => "Method",
            Self::Operator => "Operator",
            Self::AttachedEvent => "AttachedEvent",
            Self::AttachedProperty => "AttachedProperty",
            Self::Container => "Container",
        }
    }

    /// Parse a canonical kind name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        const ALL: [ItemType; 15] = [
            ItemType::Namespace,
            ItemType::Class,
            ItemType::Struct,
            ItemType::Interface,
            ItemType::Enum,
            ItemType::Delegate,
            ItemType::Field,
            ItemType::Property,
            ItemType::Event,
            ItemType::Constructor,
            ItemType::Method,
            ItemType::Operator,
            ItemType::AttachedEvent,
            ItemType::AttachedProperty,
            ItemType::Container,
        ];
        ALL.into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
    }

    /// Lower-cased first letter of the kind name (`Property` -> `p`).
    pub fn initial(&self) -> char {
        self.as_str()
            .chars()
            .next()
            .map(|c| c.to_ascii_lowercase())
            .unwrap_or('_')
    }

    /// Returns true for type-level kinds.
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            Self::Class | Self::Struct | Self::Interface | Self::Enum | Self::Delegate
        )
    }

    /// Returns true for member-level kinds.
    pub fn is_member(&self) -> bool {
        matches!(
            self,
            Self::Field
                | Self::Property
                | Self::Event
                | Self::Constructor
                | Self::Method
                | Self::Operator
                | Self::AttachedEvent
                | Self::AttachedProperty
        )
    }

    /// Returns true for kinds that take part in overload grouping.
    pub fn is_overloadable(&self) -> bool {
        match self {
            Self::Method
            | Self::Constructor
            | Self::Property
            | Self::Operator
            | Self::AttachedProperty => true,
            Self::Namespace
            | Self::Class
            | Self::Struct
            | Self::Interface
            | Self::Enum
            | Self::Delegate
            | Self::Field
            | Self::Event
            | Self::AttachedEvent
            | Self::Container => false,
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ITEM DATA
// ============================================================================

/// Fields common to namespaces, types and members.
///
/// `id` and `uid` are private: the uid is derived from the id and the parent
/// chain, so both are only ever written through [`Model`](super::Model), which
/// keeps them consistent.
#[derive(Clone, Debug)]
pub struct ItemData {
    /// Raw source name.
    pub name: Arc<str>,
    pub item_type: ItemType,
    id: Option<Arc<str>>,
    uid: Option<Arc<str>>,
    /// Raw documentation-comment id (`M:`, `T:`, `F:`, ...).
    pub doc_id: Option<Arc<str>>,
    pub metadata: Metadata,
    pub attributes: Vec<Attribute>,
    pub type_parameters: Vec<Parameter>,
    pub parameters: Vec<Parameter>,
    pub return_value: Option<Parameter>,
    /// Language -> rendered signature.
    pub signatures: IndexMap<String, String>,
    /// Language -> modifiers (`static`, `get`, `set`, ...).
    pub modifiers: IndexMap<String, Vec<String>>,
    pub docs: Option<Docs>,
    pub assembly_info: Vec<AssemblyInfo>,
    /// Path of the document the entity was loaded from.
    pub source_path: Option<Arc<str>>,
}

impl ItemData {
    pub fn new(name: impl Into<Arc<str>>, item_type: ItemType) -> Self {
        Self {
            name: name.into(),
            item_type,
            id: None,
            uid: None,
            doc_id: None,
            metadata: Metadata::new(),
            attributes: Vec::new(),
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            return_value: None,
            signatures: IndexMap::new(),
            modifiers: IndexMap::new(),
            docs: None,
            assembly_info: Vec::new(),
            source_path: None,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    pub(crate) fn uid_arc(&self) -> Option<&Arc<str>> {
        self.uid.as_ref()
    }

    /// Set the id and recompute the uid against the given parent uid.
    pub(super) fn assign_id(&mut self, id: Option<Arc<str>>, parent_uid: Option<&str>) {
        self.id = id;
        self.refresh_uid(parent_uid);
    }

    pub(super) fn refresh_uid(&mut self, parent_uid: Option<&str>) {
        self.uid = match (&self.id, parent_uid) {
            (None, _) => None,
            (Some(id), Some(parent)) if !parent.is_empty() => {
                Some(Arc::from(format!("{parent}.{id}")))
            }
            (Some(id), _) => Some(id.clone()),
        };
    }

    /// The language-agnostic comment id, derived from the uid.
    ///
    /// Reuses the DocId's one-letter prefix over the uid. Overload placeholders
    /// (uid ending in `*`, no DocId) become `Overload:<uid>`; namespaces `N:<uid>`.
    pub fn comment_id(&self) -> Option<String> {
        let uid = self.uid.as_deref().filter(|uid| !uid.is_empty())?;
        let doc_id = self.doc_id.as_deref().filter(|d| !d.is_empty());

        if doc_id.is_none() && uid.ends_with('*') {
            return Some(format!("Overload:{}", uid.trim_matches('*')));
        }
        if let Some((prefix, _)) = doc_id.and_then(|d| d.split_once(':')) {
            return Some(format!("{prefix}:{uid}"));
        }
        if self.item_type == ItemType::Namespace {
            return Some(format!("N:{uid}"));
        }
        None
    }

    /// `Some(true)` when the C# modifiers include `static`; `None` when no C#
    /// modifiers were recorded.
    pub fn is_static(&self) -> Option<bool> {
        self.modifiers
            .get(CSHARP_MODIFIERS)
            .map(|mods| mods.iter().any(|m| m == "static"))
    }

    /// Returns true when the C# modifiers contain the given keyword.
    pub fn has_modifier(&self, keyword: &str) -> bool {
        self.modifiers
            .get(CSHARP_MODIFIERS)
            .is_some_and(|mods| mods.iter().any(|m| m == keyword))
    }

    /// Monikers recorded in metadata, if any.
    pub fn monikers(&self) -> Option<&[String]> {
        self.metadata
            .get(crate::base::constants::meta::MONIKERS)
            .and_then(|v| v.as_strings())
    }
}
