//! Error taxonomy for the cleanup operations.
//!
//! A missing database file is deliberately *not* represented here; the reset
//! treats it as a benign skip (see [`crate::reset::ResetOutcome::Skipped`]).

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by a database reset.
#[derive(Debug, Error)]
pub enum CleanupError {
    /// The file exists but could not be opened read-write.
    #[error("failed to open database at {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A step inside the cleanup transaction failed. The transaction has
    /// already been rolled back by the time this surfaces.
    #[error("[{label}] Cleanup failed: {source}")]
    Cleanup {
        label: String,
        #[source]
        source: rusqlite::Error,
    },

    /// The progress stream rejected a write.
    #[error("failed to write progress output")]
    Output(#[from] std::io::Error),
}
