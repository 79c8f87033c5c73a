use std::path::PathBuf;

use crate::core::types::MenuId;

#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("menu node not found in rendered tree: {0}")]
    NodeNotFound(MenuId),

    #[error("invalid search pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON menu data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid menu record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid TOON menu data: {0}")]
    Toon(String),

    #[error("unsupported menu data format: {0}")]
    UnsupportedFormat(String),
}
