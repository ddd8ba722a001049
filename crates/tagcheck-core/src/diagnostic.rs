use serde::{Deserialize, Serialize};
use std::fmt;

/// The class of a structural finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// End tag with no open candidate.
    MissingStart,
    /// Start tag never closed before end of input.
    MissingEnd,
    /// Open tag abandoned when an enclosing end tag was resolved past it.
    Mismatch,
    /// Orphaned tag that could not be reconciled.
    Extra,
    /// Token that could not be classified.
    InvalidFormat,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DiagnosticKind::MissingStart => "missing start tag",
            DiagnosticKind::MissingEnd => "missing end tag",
            DiagnosticKind::Mismatch => "mismatched tag",
            DiagnosticKind::Extra => "extra tag",
            DiagnosticKind::InvalidFormat => "invalid tag format",
        };
        f.write_str(label)
    }
}

/// One reported structural finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// 1-based line of the tag the finding is about.
    pub line: usize,
    /// Tag name, or the raw token text for [`DiagnosticKind::InvalidFormat`].
    pub detail: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, line: usize, detail: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            detail: detail.into(),
        }
    }

    /// Renders the finding without its line prefix.
    pub fn to_diagnostic_message(&self) -> String {
        match self.kind {
            DiagnosticKind::MissingStart => {
                format!("missing start tag for </{}>", self.detail)
            }
            DiagnosticKind::MissingEnd => format!("unclosed tag <{}>", self.detail),
            DiagnosticKind::Mismatch => format!("mismatched tag <{}>", self.detail),
            DiagnosticKind::Extra => format!("extra element {}", self.detail),
            DiagnosticKind::InvalidFormat => {
                format!("invalid tag format {}", self.detail)
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error at line {}: {}",
            self.line,
            self.to_diagnostic_message()
        )
    }
}
