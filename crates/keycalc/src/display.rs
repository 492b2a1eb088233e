//! Display sinks
//!
//! The evaluator never renders anything itself. It writes running text into a
//! [`DisplaySink`] and reads the current text back when it needs to trim it.
//! Sinks are plain text surfaces: replacing the division-by-zero text with
//! `0` before the next edit is the evaluator's job, not the sink's.

/// A single text surface the evaluator writes to
pub trait DisplaySink {
    /// Current display text
    fn text(&self) -> &str;

    /// Replaces the display text
    fn set_text(&mut self, text: &str);

    /// Appends to the display text as is
    fn append(&mut self, s: &str) {
        let text = format!("{}{s}", self.text());
        self.set_text(&text);
    }

    /// Removes up to `count` characters from the end of the display
    fn trim_end(&mut self, count: usize) {
        let text = self.text();
        let keep = text.chars().count().saturating_sub(count);
        let trimmed: String = text.chars().take(keep).collect();
        self.set_text(&trimmed);
    }

    /// Empties the display
    fn clear(&mut self) {
        self.set_text("");
    }
}

/// In-memory display backed by a `String`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDisplay {
    text: String,
    updates: usize,
}

impl TextDisplay {
    /// Creates an empty display
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of writes received so far
    #[must_use]
    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl DisplaySink for TextDisplay {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
        self.updates += 1;
    }

    fn append(&mut self, s: &str) {
        self.text.push_str(s);
        self.updates += 1;
    }
}

impl std::fmt::Display for TextDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
