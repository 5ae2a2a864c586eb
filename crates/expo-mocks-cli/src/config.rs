//! Project configuration (expo-mocks.toml) parsing and types.

use std::fs;
use std::path::Path;

use anyhow::Context;
use expo_mocks_gen::{DEFAULT_EXTENSION, DEFAULT_OUTPUT_DIR};
use expo_mocks_ts::{FormatConfig, QuoteStyle};
use serde::Deserialize;

/// Default configuration file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "expo-mocks.toml";

/// Quote style as spelled in expo-mocks.toml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigQuoteStyle {
    Single,
    Double,
}

impl From<ConfigQuoteStyle> for QuoteStyle {
    fn from(style: ConfigQuoteStyle) -> Self {
        match style {
            ConfigQuoteStyle::Single => QuoteStyle::Single,
            ConfigQuoteStyle::Double => QuoteStyle::Double,
        }
    }
}

/// Root configuration structure for expo-mocks.toml.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct MocksConfig {
    /// Where and how mock files are written.
    #[serde(default)]
    pub output: OutputConfig,
    /// Printer settings.
    #[serde(default)]
    pub format: FormatSection,
}

/// Output section.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output directory, relative to the working directory.
    pub dir: Option<String>,
    /// File extension of generated mocks (without the dot).
    pub extension: Option<String>,
}

/// Format section.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FormatSection {
    /// Number of spaces per indentation level.
    pub indent_size: Option<usize>,
    /// Indent with tabs.
    pub use_tabs: Option<bool>,
    /// "single" or "double".
    pub quote_style: Option<ConfigQuoteStyle>,
    /// Maximum line length before a signature is broken up.
    pub max_line_length: Option<usize>,
}

impl MocksConfig {
    /// Load configuration from expo-mocks.toml in the current directory.
    /// Returns `Ok(None)` if the file doesn't exist.
    pub fn load() -> anyhow::Result<Option<Self>> {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from_path(path).map(Some)
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration or return default if not found.
    pub fn load_or_default() -> anyhow::Result<Self> {
        Ok(Self::load()?.unwrap_or_default())
    }
}

impl OutputConfig {
    /// Get the output directory, defaulting to "mocks".
    pub fn dir(&self) -> &str {
        self.dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR)
    }

    /// Get the file extension, defaulting to "ts".
    pub fn extension(&self) -> &str {
        self.extension
            .as_deref()
            .map(|ext| ext.trim_start_matches('.'))
            .unwrap_or(DEFAULT_EXTENSION)
    }
}

impl FormatSection {
    /// Build the printer configuration, starting from the printer defaults.
    pub fn to_format_config(&self) -> FormatConfig {
        let mut config = FormatConfig::default();
        if let Some(size) = self.indent_size {
            config = config.with_indent_size(size);
        }
        if self.use_tabs.unwrap_or(false) {
            config = config.with_tabs();
        }
        if let Some(style) = self.quote_style {
            config = config.with_quote_style(style.into());
        }
        if let Some(length) = self.max_line_length {
            config = config.with_line_length(length);
        }
        config
    }
}
