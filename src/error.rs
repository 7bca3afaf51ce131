use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid dimensions {width}x{height}: both must be non-zero")]
    InvalidInput { width: u64, height: u64 },

    #[error("invalid aspect ratio {0:?}")]
    InvalidFormat(String),

    #[error("no video streams found")]
    NoStreamsFound,

    #[error("{tool} failed: {reason}")]
    ExternalToolFailure { tool: String, reason: String },

    #[error("processed file {} is empty", .0.display())]
    EmptyOutput(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn tool(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ExternalToolFailure {
            tool: tool.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
