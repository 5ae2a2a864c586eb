use std::path::PathBuf;

use expo_mocks_ts::FormatError;

/// Mock generation error.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid module schema in {}", path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("module name `{0}` cannot be used as a file name")]
    InvalidModuleName(String),

    #[error(transparent)]
    Format(#[from] FormatError),
}
