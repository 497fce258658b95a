//! Diagnostics: user-facing build messages.
//!
//! Every fault the build passes hit is recoverable: it is recorded here as a
//! [`Diagnostic`] and the build carries on. The collector also mirrors each
//! diagnostic as a `tracing` event so hosts with a subscriber see them live.

use std::sync::Arc;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// A diagnostic message, optionally tied to source documents.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Diagnostic code (e.g., "E0001").
    pub code: Option<Arc<str>>,
    pub message: Arc<str>,
    /// Document the offending entity was loaded from.
    pub source: Option<Arc<str>>,
    /// Other documents involved (e.g., the earlier definition of a duplicate).
    pub related: Vec<Arc<str>>,
}

impl Diagnostic {
    fn new(severity: Severity, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            source: None,
            related: Vec::new(),
        }
    }

    /// Create a new error diagnostic.
    pub fn error(message: impl Into<Arc<str>>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<Arc<str>>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Create a new informational diagnostic.
    pub fn info(message: impl Into<Arc<str>>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Set the diagnostic code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_source(mut self, source: Option<Arc<str>>) -> Self {
        self.source = source;
        self
    }

    pub fn with_related(mut self, related: Option<Arc<str>>) -> Self {
        self.related.extend(related);
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.severity.as_str())?;
        if let Some(code) = &self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(source) = &self.source {
            write!(f, " ({source})")?;
        }
        Ok(())
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Standard diagnostic codes.
///
/// ## Code Ranges
///
/// - **E0001-E0099**: Errors (conflicting or missing index data)
/// - **W0001-W0099**: Warnings (duplicates, unresolved references)
/// - **I0001-I0099**: Informational (skipped inputs)
pub mod codes {
    // ========================================================================
    // ERRORS (E0001-E0099)
    // ========================================================================

    /// Two entities share a DocId.
    pub const DUPLICATE_DOC_ID: &str = "E0001";
    /// A member's DocId has no frameworks index entry.
    pub const MISSING_FRAMEWORK_INFO: &str = "E0002";
    /// A metadata overlay header is not valid YAML or has no uid.
    pub const INVALID_OVERLAY_HEADER: &str = "E0003";

    // ========================================================================
    // WARNINGS (W0001-W0099)
    // ========================================================================

    /// Two members of a type resolve to the same signature.
    pub const DUPLICATE_SIGNATURE: &str = "W0001";
    /// A base type is not part of the documented set (strict mode).
    pub const EXTERNAL_BASE_TYPE: &str = "W0002";
    /// The base-type chain loops back on itself.
    pub const INHERITANCE_CYCLE: &str = "W0003";
    /// An additional note has a kind nobody understands.
    pub const UNKNOWN_ADDITIONAL_NOTE: &str = "W0004";
    /// A documented exception does not resolve (strict mode).
    pub const UNRESOLVED_EXCEPTION: &str = "W0005";
    /// Two types, or two members of different types, resolve to the same uid.
    pub const DUPLICATE_UID: &str = "W0006";
    /// Two extension-method declarations name the same member.
    pub const DUPLICATE_EXTENSION_METHOD: &str = "W0007";
    /// One overlay file carries two headers for the same uid.
    pub const DUPLICATE_OVERLAY_UID: &str = "W0008";

    // ========================================================================
    // INFORMATIONAL (I0001-I0099)
    // ========================================================================

    /// An extension-method declaration names an unknown member.
    pub const UNRESOLVED_EXTENSION_METHOD: &str = "I0001";
    /// An assembly is missing from the assembly moniker mapping.
    pub const UNKNOWN_ASSEMBLY: &str = "I0002";
    /// An entity was removed by an API filter rule.
    pub const PRUNED_BY_FILTER: &str = "I0003";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics during a build.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic and mirror it to `tracing`.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        let code = diagnostic.code.as_deref().unwrap_or("");
        let source = diagnostic.source.as_deref().unwrap_or("");
        match diagnostic.severity {
            Severity::Error => {
                tracing::error!(code, source, "{}", diagnostic.message)
            }
            Severity::Warning => {
                tracing::warn!(code, source, "{}", diagnostic.message)
            }
            Severity::Info => tracing::info!(code, source, "{}", diagnostic.message),
        }
        self.diagnostics.push(diagnostic);
    }

    /// Add a duplicate DocId error citing both documents.
    pub fn duplicate_doc_id(
        &mut self,
        doc_id: &str,
        source: Option<Arc<str>>,
        previous: Option<Arc<str>>,
    ) {
        let message = format!(
            "duplicate doc id '{}' in '{}' and '{}'",
            doc_id,
            previous.as_deref().unwrap_or("<unknown>"),
            source.as_deref().unwrap_or("<unknown>"),
        );
        self.add(
            Diagnostic::error(message)
                .with_code(codes::DUPLICATE_DOC_ID)
                .with_source(source)
                .with_related(previous),
        );
    }

    pub fn missing_framework_info(&mut self, doc_id: &str, source: Option<Arc<str>>) {
        self.add(
            Diagnostic::error(format!("no frameworks entry for member '{doc_id}'"))
                .with_code(codes::MISSING_FRAMEWORK_INFO)
                .with_source(source),
        );
    }

    pub fn duplicate_signature(&mut self, uid: &str, type_uid: &str, source: Option<Arc<str>>) {
        self.add(
            Diagnostic::warning(format!(
                "member '{uid}' is declared more than once in '{type_uid}'"
            ))
            .with_code(codes::DUPLICATE_SIGNATURE)
            .with_source(source),
        );
    }

    pub fn duplicate_member_uid(&mut self, uid: &str, source: Option<Arc<str>>) {
        self.add(
            Diagnostic::warning(format!("duplicate member uid '{uid}'"))
                .with_code(codes::DUPLICATE_UID)
                .with_source(source),
        );
    }

    pub fn duplicate_type_uid(&mut self, uid: &str, source: Option<Arc<str>>) {
        self.add(
            Diagnostic::warning(format!("duplicate type uid '{uid}'"))
                .with_code(codes::DUPLICATE_UID)
                .with_source(source),
        );
    }

    pub fn external_base_type(&mut self, type_uid: &str, base_uid: &str, source: Option<Arc<str>>) {
        self.add(
            Diagnostic::warning(format!(
                "base type '{base_uid}' of '{type_uid}' is not documented"
            ))
            .with_code(codes::EXTERNAL_BASE_TYPE)
            .with_source(source),
        );
    }

    pub fn inheritance_cycle(&mut self, type_uid: &str, repeated: &str, source: Option<Arc<str>>) {
        self.add(
            Diagnostic::warning(format!(
                "inheritance chain of '{type_uid}' loops back to '{repeated}'"
            ))
            .with_code(codes::INHERITANCE_CYCLE)
            .with_source(source),
        );
    }

    pub fn unknown_additional_note(&mut self, uid: &str, kind: &str, source: Option<Arc<str>>) {
        self.add(
            Diagnostic::warning(format!("unknown additional note '{kind}' on '{uid}'"))
                .with_code(codes::UNKNOWN_ADDITIONAL_NOTE)
                .with_source(source),
        );
    }

    pub fn unresolved_exception(&mut self, uid: &str, exception: &str, source: Option<Arc<str>>) {
        self.add(
            Diagnostic::warning(format!(
                "exception '{exception}' documented on '{uid}' cannot be resolved"
            ))
            .with_code(codes::UNRESOLVED_EXCEPTION)
            .with_source(source),
        );
    }

    pub fn duplicate_extension_method(&mut self, member_doc_id: &str) {
        self.add(
            Diagnostic::warning(format!(
                "extension method '{member_doc_id}' is declared more than once"
            ))
            .with_code(codes::DUPLICATE_EXTENSION_METHOD),
        );
    }

    pub fn unresolved_extension_method(&mut self, member_doc_id: &str) {
        self.add(
            Diagnostic::info(format!(
                "extension method '{member_doc_id}' does not match a documented member"
            ))
            .with_code(codes::UNRESOLVED_EXTENSION_METHOD),
        );
    }

    pub fn unknown_assembly(&mut self, uid: &str, assembly: &str) {
        self.add(
            Diagnostic::info(format!(
                "assembly '{assembly}' of '{uid}' has no moniker mapping"
            ))
            .with_code(codes::UNKNOWN_ASSEMBLY),
        );
    }

    pub fn pruned_by_filter(&mut self, kind: &str, name: &str, source: Option<Arc<str>>) {
        self.add(
            Diagnostic::info(format!("{kind} '{name}' hidden by API filter"))
                .with_code(codes::PRUNED_BY_FILTER)
                .with_source(source),
        );
    }

    pub fn invalid_overlay_header(&mut self, reason: &str, source: Option<Arc<str>>) {
        self.add(
            Diagnostic::error(format!("metadata overlay header rejected: {reason}"))
                .with_code(codes::INVALID_OVERLAY_HEADER)
                .with_source(source),
        );
    }

    pub fn duplicate_overlay_uid(&mut self, uid: &str, source: Option<Arc<str>>) {
        self.add(
            Diagnostic::warning(format!("duplicate overlay uid '{uid}'; first header kept"))
                .with_code(codes::DUPLICATE_OVERLAY_UID)
                .with_source(source),
        );
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Diagnostics carrying the given code.
    pub fn with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.diagnostics
            .iter()
            .filter(move |d| d.code.as_deref() == Some(code))
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
