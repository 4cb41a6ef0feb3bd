//! Indentation-aware output buffer.

use crate::error::PrintError;

/// Accumulates printed text, inserting indentation lazily.
///
/// Indentation for a line is written once, right before the first write
/// that follows a line break, so the depth in effect at that moment decides
/// the indentation of the whole line.
#[derive(Debug)]
pub struct TextSink {
    buf: String,
    indent_unit: String,
    new_line: String,
    depth: usize,
    line_needs_indent: bool,
}

impl TextSink {
    pub fn new(indent_unit: impl Into<String>, new_line: impl Into<String>) -> Self {
        Self {
            buf: String::with_capacity(4096),
            indent_unit: indent_unit.into(),
            new_line: new_line.into(),
            depth: 0,
            line_needs_indent: true,
        }
    }

    /// Append text to the current line.
    pub fn write(&mut self, text: &str) {
        if self.line_needs_indent {
            for _ in 0..self.depth {
                self.buf.push_str(&self.indent_unit);
            }
            self.line_needs_indent = false;
        }
        self.buf.push_str(text);
    }

    /// Append text, then end the line.
    pub fn write_line(&mut self, text: &str) {
        self.write(text);
        self.newline();
    }

    pub fn newline(&mut self) {
        self.buf.push_str(&self.new_line);
        self.line_needs_indent = true;
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn unindent(&mut self) -> Result<(), PrintError> {
        if self.depth == 0 {
            return Err(PrintError::IndentUnderflow);
        }
        self.depth -= 1;
        Ok(())
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn contents(&self) -> &str {
        &self.buf
    }

    /// Take the buffer, leaving the sink empty at depth zero.
    pub fn take(&mut self) -> String {
        self.depth = 0;
        self.line_needs_indent = true;
        std::mem::take(&mut self.buf)
    }
}

impl Default for TextSink {
    fn default() -> Self {
        Self::new("    ", "\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_applied_once_per_line() {
        let mut sink = TextSink::new("  ", "\n");
        sink.write_line("a {");
        sink.indent();
        sink.write("b");
        sink.write("c");
        sink.newline();
        sink.unindent().unwrap();
        sink.write("}");
        assert_eq!(sink.contents(), "a {\n  bc\n}");
    }

    #[test]
    fn test_depth_at_first_write_wins() {
        let mut sink = TextSink::default();
        sink.newline();
        sink.indent();
        sink.indent();
        sink.write("x");
        sink.unindent().unwrap();
        sink.write("y");
        assert_eq!(sink.contents(), "\n        xy");
    }

    #[test]
    fn test_empty_lines_carry_no_indent() {
        let mut sink = TextSink::default();
        sink.indent();
        sink.newline();
        sink.newline();
        assert_eq!(sink.contents(), "\n\n");
    }

    #[test]
    fn test_unindent_underflow() {
        let mut sink = TextSink::default();
        assert!(matches!(sink.unindent(), Err(PrintError::IndentUnderflow)));
        assert_eq!(sink.depth(), 0);
    }

    #[test]
    fn test_take_resets() {
        let mut sink = TextSink::default();
        sink.indent();
        sink.write("x");
        assert_eq!(sink.take(), "    x");
        assert_eq!(sink.depth(), 0);
        assert_eq!(sink.contents(), "");
    }
}
