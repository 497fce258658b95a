//! Parsed documentation blocks and assembly information.
//!
//! Turning raw doc-comment markup into these structures happens upstream;
//! the build passes only bind them onto entities.

use indexmap::IndexMap;

/// Documentation attached to an entity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Docs {
    /// Parameter name -> description.
    pub parameters: IndexMap<String, String>,
    /// Type parameter name -> description.
    pub type_parameters: IndexMap<String, String>,
    pub returns: Option<String>,
    pub exceptions: Vec<TypedContent>,
    /// Note kind (`usage`, `overrides`, ...) -> text.
    pub additional_notes: IndexMap<String, String>,
    /// Cref of the CLS-compliant alternative, prefix already stripped.
    pub alt_compliant: Option<String>,
    pub internal_only: bool,
}

impl Docs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameter(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), text.into());
        self
    }

    pub fn with_type_parameter(
        mut self,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.type_parameters.insert(name.into(), text.into());
        self
    }

    pub fn with_returns(mut self, text: impl Into<String>) -> Self {
        self.returns = Some(text.into());
        self
    }

    pub fn with_exception(mut self, exception: TypedContent) -> Self {
        self.exceptions.push(exception);
        self
    }

    pub fn with_note(mut self, kind: impl Into<String>, text: impl Into<String>) -> Self {
        self.additional_notes.insert(kind.into(), text.into());
        self
    }

    /// Set the alt-compliant cref; a `X:` prefix is stripped.
    pub fn with_alt_compliant(mut self, cref: &str) -> Self {
        let uid = cref.split_once(':').map(|(_, rest)| rest).unwrap_or(cref);
        self.alt_compliant = Some(uid.to_string());
        self
    }

    pub fn internal_only(mut self) -> Self {
        self.internal_only = true;
        self
    }
}

/// A cref-typed piece of documentation (exceptions, permissions).
#[derive(Clone, Debug, PartialEq)]
pub struct TypedContent {
    pub comment_id: String,
    pub uid: String,
    pub description: Option<String>,
}

impl TypedContent {
    /// Build from a cref such as `T:System.IO.IOException`.
    pub fn from_cref(cref: &str, description: Option<String>) -> Self {
        let uid = cref
            .split_once(':')
            .map(|(_, rest)| rest)
            .unwrap_or(cref)
            .replace('+', ".");
        Self {
            comment_id: cref.to_string(),
            uid,
            description,
        }
    }
}

/// An assembly an entity ships in, with the assembly versions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssemblyInfo {
    /// May be missing for members; back-filled from the declaring type.
    pub name: Option<String>,
    pub versions: Vec<String>,
}

impl AssemblyInfo {
    pub fn new(name: impl Into<String>, versions: Vec<String>) -> Self {
        Self {
            name: Some(name.into()),
            versions,
        }
    }

    pub fn unnamed(versions: Vec<String>) -> Self {
        Self {
            name: None,
            versions,
        }
    }
}
