//! Error types emitted by the Eventseek CLI.

use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted by the Eventseek CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Opening the event snapshot failed.
    #[error("failed to open event snapshot at {path:?}: {source}")]
    OpenSnapshot {
        /// Requested snapshot path.
        path: PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Snapshot JSON could not be decoded.
    #[error("failed to parse event snapshot at {path:?}: {source}")]
    ParseSnapshot {
        /// Requested snapshot path.
        path: PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The requested region code is not in the reference table.
    #[error("unknown region code '{code}'")]
    UnknownRegion {
        /// The code that failed to match.
        code: String,
    },
    /// Serializing the ranked events failed.
    #[error("failed to serialize ranked events: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing to the output stream failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
