//! Diagnostic assertion helpers.

use apidoc::{Diagnostic, Severity, Store};

/// Number of diagnostics carrying `code`.
pub fn count_code(store: &Store, code: &str) -> usize {
    store.diagnostic_collector().with_code(code).count()
}

/// Diagnostics carrying `code`.
pub fn with_code<'a>(store: &'a Store, code: &'a str) -> Vec<&'a Diagnostic> {
    store.diagnostic_collector().with_code(code).collect()
}

/// Assert a build produced no error-level diagnostics.
pub fn assert_no_errors(store: &Store) {
    let errors: Vec<&Diagnostic> = store
        .diagnostics()
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .collect();
    assert!(
        errors.is_empty(),
        "Expected no errors, got {} error(s):\n{}",
        errors.len(),
        errors
            .iter()
            .map(|e| format!("  {e}"))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
