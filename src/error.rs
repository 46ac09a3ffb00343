//! Command-line error types.
//!
//! Conversion itself cannot fail; these cover argument handling and the
//! file I/O around it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a command-line run. Every variant exits with status 1.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong number of arguments; `program` is `argv[0]`.
    #[error("Usage: {program} README.md README.html")]
    Usage { program: String },

    /// Input path is absent or not a regular file.
    #[error("Missing {path}")]
    MissingInput { path: PathBuf },

    /// Input is larger than the translator accepts.
    #[error("{path} is {len} bytes, over the {max} byte limit", max = crate::MAX_INPUT_LEN)]
    InputTooLarge { path: PathBuf, len: u64 },

    /// Reading the input failed, including input that is not UTF-8.
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    /// Creating or writing the output failed.
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

impl Error {
    /// Whether the failure happened during the read/convert/write sequence,
    /// as opposed to argument validation.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::InputTooLarge { .. } | Self::Read { .. } | Self::Write { .. }
        )
    }
}
