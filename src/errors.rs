//! Error types for extraction operations.
//!
//! Only two things are fatal: the header being unreadable and the parser
//! failing to produce a tree. "Class not found" is an absent result, not an
//! error, and unrecognized member or type shapes degrade to omission.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures surfaced by the extraction entry points.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The header file could not be read.
    #[error("failed to read header {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The parser could not produce a syntax tree for the input.
    #[error("parse failure: {0}")]
    Parse(String),
}
