//! Custom attribute occurrences.

use std::sync::Arc;

/// A custom attribute applied to a type or member.
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    /// Declaration as written, e.g. `System.Obsolete("use Bar")` or `get: System.Pure`.
    pub declaration: Arc<str>,
    /// Resolved attribute type, filled by the attribute pass.
    pub type_full_name: Option<Arc<str>>,
    /// Visibility after filter rules; visible unless a rule says otherwise.
    pub visible: bool,
}

impl Attribute {
    pub fn new(declaration: impl Into<Arc<str>>) -> Self {
        Self {
            declaration: declaration.into(),
            type_full_name: None,
            visible: true,
        }
    }
}
