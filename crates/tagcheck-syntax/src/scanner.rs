use crate::{TagToken, classify};
use serde::{Deserialize, Serialize};

/// How a line of input is split into tag occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    /// Every `<…>` substring on a line is its own occurrence; text between
    /// tags is ignored.
    #[default]
    Tags,
    /// Each trimmed line starting with `<` is one occurrence.
    Lines,
}

/// A streaming scanner for tagged text.
///
/// `TagScanner` accepts input in arbitrary chunks, classifies every complete
/// line it has seen and keeps the trailing partial line buffered until more
/// input (or [`finish`](Self::finish)) arrives. Line numbers are tracked across
/// chunks, so scanning a document in one call or in many yields the same
/// tokens.
pub struct TagScanner {
    mode: ScanMode,
    buffer: String,
    line: usize,
}

impl Default for TagScanner {
    fn default() -> Self {
        Self::new(ScanMode::default())
    }
}

impl TagScanner {
    /// Creates a new, empty scanner.
    pub fn new(mode: ScanMode) -> Self {
        Self {
            mode,
            buffer: String::new(),
            line: 0,
        }
    }

    /// Number of complete lines consumed so far.
    pub fn lines_scanned(&self) -> usize {
        self.line
    }

    /// Appends input to the internal buffer and scans every complete line.
    ///
    /// # Returns
    ///
    /// The tokens found on the lines completed by this chunk, in document order.
    pub fn update(&mut self, input: &str) -> Vec<TagToken> {
        self.buffer.push_str(input);

        let Some(last_nl) = self.buffer.rfind('\n') else {
            return Vec::new();
        };
        let chunk: String = self.buffer.drain(..=last_nl).collect();

        let mut tokens = Vec::new();
        for line in chunk.lines() {
            self.line += 1;
            self.scan_line(line, &mut tokens);
        }
        log::trace!(
            "scanned through line {}, {} new token(s)",
            self.line,
            tokens.len()
        );
        tokens
    }

    /// Consumes the scanner and scans the trailing line, if any, as the end of input.
    pub fn finish(mut self) -> Vec<TagToken> {
        let mut tokens = Vec::new();
        if !self.buffer.is_empty() {
            let rest = std::mem::take(&mut self.buffer);
            self.line += 1;
            self.scan_line(rest.strip_suffix('\r').unwrap_or(&rest), &mut tokens);
        }
        tokens
    }

    /// Scans a whole document at once.
    pub fn scan(mut self, input: &str) -> Vec<TagToken> {
        let mut tokens = self.update(input);
        tokens.extend(self.finish());
        tokens
    }

    fn scan_line(&self, line: &str, tokens: &mut Vec<TagToken>) {
        match self.mode {
            ScanMode::Tags => scan_tags(line, self.line, tokens),
            ScanMode::Lines => {
                let trimmed = line.trim();
                if trimmed.starts_with('<') {
                    tokens.push(classify(trimmed, self.line));
                }
            }
        }
    }
}

fn scan_tags(line: &str, line_no: usize, tokens: &mut Vec<TagToken>) {
    let mut rest = line;
    while let Some(start) = rest.find('<') {
        let candidate = &rest[start..];
        let Some(close) = candidate.find('>') else {
            // Unterminated: the remainder of the line is one occurrence.
            tokens.push(classify(candidate, line_no));
            return;
        };

        let mut end = close + 1;
        let tail = &candidate[end..];
        end += tail.len() - tail.trim_start_matches('>').len();

        tokens.push(classify(&candidate[..end], line_no));
        rest = &candidate[end..];
    }
}
