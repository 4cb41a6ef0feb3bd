//! Printer configuration.

use serde::{Deserialize, Serialize};

/// Options for the printer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrinterOptions {
    /// Indentation unit written once per depth level.
    pub indent: String,
    /// Line terminator.
    pub new_line: String,
    /// Whether attached and orphan comments are printed.
    pub print_comments: bool,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            new_line: "\n".to_string(),
            print_comments: true,
        }
    }
}

impl PrinterOptions {
    /// Indent with `width` spaces.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent = " ".repeat(width);
        self
    }

    pub fn without_comments(mut self) -> Self {
        self.print_comments = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let options: PrinterOptions = serde_json::from_str(r#"{ "printComments": false }"#).unwrap();
        assert_eq!(options.indent, "    ");
        assert_eq!(options.new_line, "\n");
        assert!(!options.print_comments);
    }

    #[test]
    fn test_builders() {
        let options = PrinterOptions::default().with_indent_width(2).without_comments();
        assert_eq!(options.indent, "  ");
        assert!(!options.print_comments);
    }
}
