//! # tagcheck syntax
//!
//! Tokenization and shape classification for markup-like tagged text.
//!
//! ## Overview
//!
//! This crate turns raw document text into an ordered stream of [`TagToken`]s.
//! It does not build a tree and it does not understand XML grammar; every
//! angle-bracketed occurrence is judged by its *shape* alone:
//!
//! - **Start** `<name attr="…">` opens a scope
//! - **End** `</name>` closes one
//! - **SelfClosing** `<name/>` has no scope effect
//! - **Declaration** `<?xml …?>`, `<!DOCTYPE …>` has no scope effect
//! - **Invalid** anything else, e.g. `<a>>` or an unterminated `<a`
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   update(chunk)   ┌────────────┐   classify()   ┌──────────┐
//! │  document    │ ────────────────► │ TagScanner │ ─────────────► │ TagToken │
//! │  (streaming) │                   │            │                │  stream  │
//! └──────────────┘                   └────────────┘                └──────────┘
//! ```
//!
//! ## Examples
//!
//! ```
//! use tagcheck_syntax::{ScanMode, TagKind, TagScanner};
//!
//! let tokens = TagScanner::new(ScanMode::Tags).scan("<note>\n  <to>Tove</to>\n</note>\n");
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(kinds, [TagKind::Start, TagKind::Start, TagKind::End, TagKind::End]);
//! assert_eq!(tokens[1].line, 2);
//! ```

use serde::{Deserialize, Serialize};

/// Shape-based tag classification.
pub mod classify;
/// Streaming scanner that splits text into tag occurrences.
pub mod scanner;

pub use classify::classify;
pub use scanner::{ScanMode, TagScanner};

/// The shape of a single tag occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    /// `<name>` or `<name attrs>`
    Start,
    /// `</name>`
    End,
    /// `<name/>` or `<name attrs/>`
    SelfClosing,
    /// `<?…?>` or `<!…>`
    Declaration,
    /// Could not be classified; `name` holds the raw text.
    Invalid,
}

/// A classified tag occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagToken {
    pub kind: TagKind,
    /// Bare identifier for start/end/self-closing tags, raw text otherwise.
    pub name: String,
    /// 1-based source line.
    pub line: usize,
}

impl TagToken {
    pub fn new(kind: TagKind, name: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            name: name.into(),
            line,
        }
    }
}
