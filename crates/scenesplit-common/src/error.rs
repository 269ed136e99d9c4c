//! Error taxonomy shared by every stage of scene production.
//!
//! Every variant is fatal to the source file being processed: the caller
//! aborts that file on the first error and keeps whatever scenes were already
//! fully produced.

use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDateTime;

use crate::types::format_position;

/// Common error type for scenesplit.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bad command-line usage.
    #[error("Argument error: {0}")]
    Argument(String),

    /// The output folder does not exist.
    #[error("Destination folder does not exist: {}", path.display())]
    DestinationMissing { path: PathBuf },

    /// No sidecar segment list next to the source file.
    #[error("Scene file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// A sidecar row could not be interpreted.
    #[error("Malformed scene file {} (row {row}): {message}", path.display())]
    Sidecar {
        path: PathBuf,
        row: usize,
        message: String,
    },

    /// The source pattern matched no files.
    #[error("No matches for pattern: {0}")]
    NoMatches(String),

    /// Kept segment dates are not ascending.
    #[error("Dates aren't ascending: {previous} > {found}. Use -t to tolerate this.")]
    OutOfOrderDate {
        previous: NaiveDateTime,
        found: NaiveDateTime,
    },

    /// Kept segment positions are not ascending.
    #[error(
        "Positions aren't ascending: {} > {}",
        format_position(*previous),
        format_position(*found)
    )]
    OutOfOrderPosition { previous: Duration, found: Duration },

    /// A kept segment has no subject.
    #[error("Segment at {} is missing subject", format_position(*position))]
    MissingSubject { position: Duration },

    /// A scene's computed end is not after its start.
    #[error(
        "Scene starting at {} ends at {}, which is not after its start",
        format_position(*start),
        format_position(*end)
    )]
    DegenerateScene { start: Duration, end: Duration },

    /// Every disambiguation letter for a filename is taken.
    #[error("Too many duplicates for {base}")]
    GenerationExhausted { base: String },

    /// The transcoder, prober, or metadata writer reported failure.
    #[error("External tool failed [{tool}]: {message}")]
    ExternalTool { tool: String, message: String },

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new Argument error.
    pub fn argument<S: Into<String>>(msg: S) -> Self {
        Self::Argument(msg.into())
    }

    /// Create a new ExternalTool error.
    pub fn external_tool(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalTool {
            tool: tool.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
