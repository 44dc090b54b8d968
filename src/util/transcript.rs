//! Ordered trace lines produced by a demonstration.

use std::fmt;

/// Collects the human-readable lines a demo produces.
///
/// Library code writes here instead of printing; the CLI decides how to show it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line.
    pub fn line(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::trace!(%line, "transcript");
        self.lines.push(line);
    }

    /// Append every line of a multi-line block.
    pub fn block(&mut self, text: &str) {
        for line in text.lines() {
            self.line(line);
        }
    }

    /// Append an empty separator line.
    pub fn blank(&mut self) {
        self.line("");
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if any line equals `needle` exactly.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l == needle)
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}
