//! Parameters, type parameters and return values.

use std::sync::Arc;

/// How a parameter is passed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RefType {
    Ref,
    Out,
    This,
    In,
}

impl RefType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ref" => Some(Self::Ref),
            "out" => Some(Self::Out),
            "this" => Some(Self::This),
            "in" => Some(Self::In),
            _ => None,
        }
    }

    /// Returns true when the parameter is passed by reference in the id encoding.
    pub fn is_by_ref(&self) -> bool {
        matches!(self, Self::Ref | Self::Out)
    }
}

/// A parameter, type parameter or return value.
///
/// For type parameters `type_name` repeats the parameter name.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub name: Arc<str>,
    /// Type string with any trailing `&` removed.
    pub type_name: Arc<str>,
    /// Type string exactly as found in the source document.
    pub original_type: Arc<str>,
    pub ref_type: Option<RefType>,
    pub description: Option<String>,
}

impl Parameter {
    /// Create a parameter from its raw type string.
    pub fn new(name: impl Into<Arc<str>>, raw_type: &str) -> Self {
        Self {
            name: name.into(),
            type_name: Arc::from(raw_type.trim_end_matches('&')),
            original_type: Arc::from(raw_type),
            ref_type: None,
            description: None,
        }
    }

    /// Create a generic type parameter.
    pub fn type_param(name: &str) -> Self {
        Self::new(name, name)
    }

    /// Create a return value of the given type.
    pub fn returns(raw_type: &str) -> Self {
        Self::new("", raw_type)
    }

    pub fn with_ref_type(mut self, ref_type: RefType) -> Self {
        self.ref_type = Some(ref_type);
        self
    }
}
