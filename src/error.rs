//! Error types for loading, comparing and rendering documents.

use std::path::PathBuf;

use crate::loader::SourceFormat;

/// Errors that can occur while producing a diff.
#[derive(Debug, thiserror::Error)]
pub enum GendiffError {
    /// The source file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension is not one of `.json`, `.yaml`, `.yml`.
    #[error("unsupported file extension: {} (expected .json, .yaml or .yml)", .0.display())]
    UnsupportedExtension(PathBuf),

    /// The content is not a valid document for its detected format.
    #[error("invalid {format} document: {message}")]
    Decode {
        format: SourceFormat,
        message: String,
    },

    /// The document parsed, but its root is not a mapping.
    #[error("{format} document root must be a mapping")]
    NotAMapping { format: SourceFormat },

    /// The requested output format is not one of `stylish`, `plain`, `json`.
    #[error("unsupported output format: {0} (expected stylish, plain or json)")]
    UnsupportedFormat(String),

    /// The structured renderer failed to serialize the diff tree.
    #[error("failed to render json output: {0}")]
    Render(#[from] serde_json::Error),
}

/// Convenience alias used across the library modules.
pub type Result<T> = std::result::Result<T, GendiffError>;
