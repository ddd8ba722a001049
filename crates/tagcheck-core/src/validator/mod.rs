use crate::collections::{Queue, Stack};
use crate::config::{MismatchPolicy, ValidatorConfig};
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use tagcheck_syntax::{TagKind, TagToken};


/// A tag currently believed to be open.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenFrame {
    name: String,
    line: usize,
}

/// A tag abandoned by the scan, pending reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Orphan {
    name: String,
    line: usize,
}

/// Streaming structural validator for tag tokens.
///
/// ## Algorithm
///
/// The validator keeps three containers:
///
/// - a **stack** of open tags (most recently opened on top),
/// - an **error queue** of provisional findings,
/// - an **extras queue** of orphaned tags.
///
/// Start tags are pushed. Self-closing tags and declarations are ignored.
/// Invalid tokens are reported immediately. An end tag is resolved by the
/// first rule that applies:
///
/// 1. It names the top of the stack: pop, no finding.
/// 2. It names the head of the error queue: the earlier finding is cancelled.
/// 3. The stack is empty: queue a [`DiagnosticKind::MissingStart`].
/// 4. Otherwise search down the stack. Tags skipped on the way are recorded per
///    [`MismatchPolicy`] and the matching tag is popped. Without a match every
///    popped tag and the end tag itself become orphans.
///
/// [`finish`](Self::finish) then drains the stack as
/// [`DiagnosticKind::MissingEnd`] (top first) and cross-cancels the two queues
/// head to head; whatever remains is reported.
///
/// ## Examples
///
/// ```
/// use tagcheck_core::{DiagnosticKind, Validator, ValidatorConfig};
/// use tagcheck_syntax::TagScanner;
///
/// let tokens = TagScanner::default().scan("<a>\n<b>\n</a>\n");
/// let diagnostics = Validator::new(ValidatorConfig::default()).validate(&tokens);
///
/// assert_eq!(diagnostics.len(), 1);
/// assert_eq!(diagnostics[0].kind, DiagnosticKind::Mismatch);
/// assert_eq!(diagnostics[0].detail, "b");
/// ```
pub struct Validator {
    config: ValidatorConfig,
    open: Stack<OpenFrame>,
    errors: Queue<Diagnostic>,
    extras: Queue<Orphan>,
    emitted: Vec<Diagnostic>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

impl Validator {
    /// Creates a validator with empty state.
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            open: Stack::new(),
            errors: Queue::new(),
            extras: Queue::new(),
            emitted: Vec::new(),
        }
    }

    /// Consumes one token in document order.
    pub fn feed(&mut self, token: &TagToken) {
        match token.kind {
            TagKind::SelfClosing | TagKind::Declaration => {}
            TagKind::Invalid => {
                log::debug!("line {}: invalid tag {:?}", token.line, token.name);
                self.emitted.push(Diagnostic::new(
                    DiagnosticKind::InvalidFormat,
                    token.line,
                    token.name.as_str(),
                ));
            }
            TagKind::Start => self.open.push(OpenFrame {
                name: token.name.clone(),
                line: token.line,
            }),
            TagKind::End => self.close(token),
        }
    }

    /// Feeds every token, then reconciles.
    pub fn validate<'a>(mut self, tokens: impl IntoIterator<Item = &'a TagToken>) -> Vec<Diagnostic> {
        for token in tokens {
            self.feed(token);
        }
        self.finish()
    }

    fn close(&mut self, token: &TagToken) {
        let name = token.name.as_str();

        if self.open.peek().is_ok_and(|top| top.name == name) {
            let _ = self.open.pop();
            return;
        }

        if self.errors.peek().is_ok_and(|head| head.detail == name) {
            if let Ok(cancelled) = self.errors.dequeue() {
                log::debug!(
                    "line {}: </{}> cancels {:?} from line {}",
                    token.line,
                    name,
                    cancelled.kind,
                    cancelled.line
                );
            }
            return;
        }

        if self.open.is_empty() {
            log::debug!("line {}: </{}> has no open candidate", token.line, name);
            self.errors.enqueue(Diagnostic::new(
                DiagnosticKind::MissingStart,
                token.line,
                name,
            ));
            return;
        }

        let found = self.open.search_by(|frame| frame.name == name);
        log::trace!(
            "line {}: searching stack for <{}>, depth {:?}",
            token.line,
            name,
            found
        );

        while let Ok(frame) = self.open.pop() {
            if frame.name == name {
                break;
            }
            match (found, self.config.mismatch_policy) {
                (Some(_), MismatchPolicy::Report) => self.errors.enqueue(Diagnostic::new(
                    DiagnosticKind::Mismatch,
                    frame.line,
                    frame.name,
                )),
                _ => self.extras.enqueue(Orphan {
                    name: frame.name,
                    line: frame.line,
                }),
            }
        }

        if found.is_none() {
            self.extras.enqueue(Orphan {
                name: name.to_string(),
                line: token.line,
            });
        }
    }

    /// Consumes the validator and runs end-of-stream reconciliation.
    ///
    /// # Returns
    ///
    /// Every finding in detection order; empty for a well-formed document.
    pub fn finish(mut self) -> Vec<Diagnostic> {
        while let Ok(frame) = self.open.pop() {
            self.errors.enqueue(Diagnostic::new(
                DiagnosticKind::MissingEnd,
                frame.line,
                frame.name,
            ));
        }

        log::debug!(
            "reconciling {} error(s) against {} orphan(s)",
            self.errors.len(),
            self.extras.len()
        );

        let mut diagnostics = std::mem::take(&mut self.emitted);
        loop {
            let same = match (self.errors.peek(), self.extras.peek()) {
                (Ok(error), Ok(orphan)) => error.detail == orphan.name,
                _ => break,
            };
            if same {
                let _ = self.errors.dequeue();
                let _ = self.extras.dequeue();
            } else if let Ok(error) = self.errors.dequeue() {
                diagnostics.push(error);
            }
        }

        diagnostics.extend(self.errors.drain());
        diagnostics.extend(
            self.extras
                .drain()
                .map(|orphan| Diagnostic::new(DiagnosticKind::Extra, orphan.line, orphan.name)),
        );
        diagnostics
    }
}
