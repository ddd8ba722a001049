//! # tagcheck core
//!
//! Streaming structural validation for markup-like tagged text.
//!
//! ## Overview
//!
//! The validator consumes [`TagToken`](tagcheck_syntax::TagToken)s in document order and reports
//! structural defects without building a parse tree:
//!
//! - **MissingStart**: an end tag with nothing open to close
//! - **MissingEnd**: a start tag still open at end of input
//! - **Mismatch**: an open tag skipped when an enclosing end tag was resolved
//! - **Extra**: an orphaned tag that reconciliation could not cancel
//! - **InvalidFormat**: a token whose shape could not be classified
//!
//! Validation always completes; malformed input produces findings, never `Err`.
//!
//! ## Modules
//!
//! - [`validator`] - The state machine and end-of-stream reconciliation
//! - [`collections`] - LIFO/FIFO containers with checked removal
//! - [`diagnostic`] - Finding types
//! - [`report`] - Display rendering
//! - [`config`] - Validator settings, persisted as JSON
//!
//! ## Examples
//!
//! ```
//! use tagcheck_core::{check_str, report, ValidatorConfig};
//!
//! let source = "<catalog>\n  <book>\n</catalog>\n</book>\n";
//! let diagnostics = check_str(&ValidatorConfig::default(), source);
//! assert!(diagnostics.is_empty()); // the late </book> cancels the mismatch
//!
//! let diagnostics = check_str(&ValidatorConfig::default(), "<catalog>\n<book>\n");
//! assert_eq!(
//!     report(&diagnostics),
//!     ["Error at line 2: unclosed tag <book>", "Error at line 1: unclosed tag <catalog>"],
//! );
//! ```

pub mod collections;
pub mod config;
pub mod diagnostic;
pub mod report;
pub mod validator;

pub use config::{MismatchPolicy, ValidatorConfig};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use report::{render_summary, report};
pub use validator::Validator;

use tagcheck_syntax::TagScanner;

/// Scans and validates a whole document with a fresh validator.
pub fn check_str(config: &ValidatorConfig, input: &str) -> Vec<Diagnostic> {
    let tokens = TagScanner::new(config.scan_mode).scan(input);
    Validator::new(*config).validate(&tokens)
}
