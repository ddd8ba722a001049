//! Rendering of findings into display lines.
//!
//! Pure formatting: one line per [`Diagnostic`], in the order the validator
//! emitted them. Nothing here sorts or deduplicates.

use crate::diagnostic::Diagnostic;

/// Header printed above the findings by the CLI.
pub const ERROR_LOG_BANNER: &str = "===================ERROR LOG====================";

/// Printed when a document has no findings.
pub const NO_ERRORS: &str = "No errors found.";

/// Renders each finding as `Error at line N: …`.
pub fn report(diagnostics: &[Diagnostic]) -> Vec<String> {
    diagnostics.iter().map(ToString::to_string).collect()
}

/// Like [`report`], but yields [`NO_ERRORS`] for an empty list.
pub fn render_summary(diagnostics: &[Diagnostic]) -> Vec<String> {
    if diagnostics.is_empty() {
        vec![NO_ERRORS.to_string()]
    } else {
        report(diagnostics)
    }
}
