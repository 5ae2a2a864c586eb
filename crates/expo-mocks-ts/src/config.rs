//! Formatter configuration.

/// Quote character used for string literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    #[default]
    Single,
    Double,
}

impl QuoteStyle {
    pub fn quote_char(&self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }
}

/// Configuration options for the TypeScript printer.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatConfig {
    /// Maximum line length before a signature is broken one parameter per line.
    pub max_line_length: usize,
    /// Number of spaces per indentation level.
    pub indent_size: usize,
    /// Use tabs instead of spaces for indentation.
    pub use_tabs: bool,
    /// Quote character for string literals.
    pub quote_style: QuoteStyle,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            max_line_length: 80,
            indent_size: 2,
            use_tabs: false,
            quote_style: QuoteStyle::Single,
        }
    }
}

impl FormatConfig {
    /// Create a new config with custom line length.
    pub fn with_line_length(mut self, length: usize) -> Self {
        self.max_line_length = length;
        self
    }

    /// Create a new config with custom indent size.
    pub fn with_indent_size(mut self, size: usize) -> Self {
        self.indent_size = size;
        self
    }

    /// Create a new config using tabs for indentation.
    pub fn with_tabs(mut self) -> Self {
        self.use_tabs = true;
        self
    }

    /// Create a new config with a custom quote style.
    pub fn with_quote_style(mut self, style: QuoteStyle) -> Self {
        self.quote_style = style;
        self
    }

    /// Get the indentation string for one level.
    pub fn indent_str(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.indent_size)
        }
    }

    /// Visual width of `level` indentation levels, counting a tab as `indent_size` columns.
    pub(crate) fn indent_width(&self, level: usize) -> usize {
        level * self.indent_size
    }
}
