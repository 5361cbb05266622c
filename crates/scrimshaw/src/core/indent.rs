//! Indentation-aware text output
//!
//! The UML tree serializes itself through an [`IndentingWriter`], which
//! prefixes every new line with the whitespace for the nesting depth that is
//! active when the line's first character is written. Newlines embedded in
//! appended text arm the prefix exactly like explicit [`newline`] calls.
//!
//! [`newline`]: IndentingWriter::newline

use std::fmt;

/// Indentation state: the width of one indent unit and the current level.
///
/// Levels never go negative; [`decrease`](Indentation::decrease) at level 0
/// stays at level 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indentation {
    width: usize,
    level: usize,
}

impl Indentation {
    /// Default indentation: two spaces per level, starting at level 0.
    pub const DEFAULT: Indentation = Indentation { width: 2, level: 0 };

    /// Indentation of `width` spaces per level, starting at level 0.
    pub fn spaces(width: usize) -> Self {
        Self { width, level: 0 }
    }

    /// One level deeper.
    pub fn increase(self) -> Self {
        Self {
            level: self.level + 1,
            ..self
        }
    }

    /// One level shallower, saturating at 0.
    pub fn decrease(self) -> Self {
        Self {
            level: self.level.saturating_sub(1),
            ..self
        }
    }

    /// Current nesting level.
    pub fn level(self) -> usize {
        self.level
    }

    /// Width of one indent unit in spaces.
    pub fn width(self) -> usize {
        self.width
    }

    fn prefix_len(self) -> usize {
        self.width * self.level
    }
}

impl Default for Indentation {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A string-backed writer that indents every line it starts.
///
/// `whitespace()` is deferred and collapsing: at most one space appears
/// between two visible characters, and no space is emitted at the start of a
/// line or before a newline. This lets callers chain optional fragments
/// (`name`, stereotype, link) with `whitespace()` separators without
/// producing doubled or trailing spaces when a fragment is absent.
#[derive(Debug)]
pub struct IndentingWriter {
    buffer: String,
    indentation: Indentation,
    at_line_start: bool,
    pending_space: bool,
}

impl IndentingWriter {
    /// New writer with the given indentation settings.
    pub fn new(indentation: Indentation) -> Self {
        Self {
            buffer: String::new(),
            indentation,
            at_line_start: true,
            pending_space: false,
        }
    }

    /// Increase the indentation level for subsequent lines.
    pub fn indent(&mut self) -> &mut Self {
        self.indentation = self.indentation.increase();
        self
    }

    /// Decrease the indentation level for subsequent lines.
    pub fn unindent(&mut self) -> &mut Self {
        self.indentation = self.indentation.decrease();
        self
    }

    /// Append text. Embedded newline characters arm the indent prefix for
    /// the following line, exactly like [`newline`](Self::newline).
    pub fn append(&mut self, text: &str) -> &mut Self {
        for ch in text.chars() {
            self.push(ch);
        }
        self
    }

    /// Request a single separating space before the next visible character.
    pub fn whitespace(&mut self) -> &mut Self {
        self.pending_space = true;
        self
    }

    /// Terminate the current line.
    pub fn newline(&mut self) -> &mut Self {
        self.push('\n');
        self
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the writer, yielding the rendered text.
    pub fn into_string(self) -> String {
        self.buffer
    }

    fn push(&mut self, ch: char) {
        if ch == '\n' {
            self.buffer.push('\n');
            self.at_line_start = true;
            self.pending_space = false;
            return;
        }
        if self.at_line_start {
            for _ in 0..self.indentation.prefix_len() {
                self.buffer.push(' ');
            }
            self.at_line_start = false;
        } else if self.pending_space {
            self.buffer.push(' ');
        }
        self.pending_space = false;
        self.buffer.push(ch);
    }
}

impl fmt::Write for IndentingWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }
}
