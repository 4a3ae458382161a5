//! Error types for Sextant operations.
//!
//! Checking itself never fails: defects in diagrams are reported as
//! [`Finding`](crate::Finding)s. [`SextantError`] covers the conditions that
//! stop a run before any diagram is checked.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for Sextant operations.
#[derive(Debug, Error)]
pub enum SextantError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}
