use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when saving a buffer to a file.
///
/// There are exactly three failure conditions; whether a caller sees them as
/// `Err` values or as logged events is decided by the configured
/// [`FailurePolicy`](crate::FailurePolicy).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SaveError {
    /// The caller provided no payload bytes.
    ///
    /// This is checked before the destination is opened, so an existing file
    /// at the path is never truncated by an empty-payload call.
    #[error("cannot save empty payload to file: {}", path.display())]
    EmptyPayload {
        /// The destination that would have been written.
        path: PathBuf,
    },

    /// The destination file could not be created for writing.
    #[error("failed to open file for writing: {}: {source}", path.display())]
    Open {
        /// The destination that failed to open.
        path: PathBuf,

        /// The underlying I/O error.
        source: io::Error,
    },

    /// The payload could not be written in full.
    ///
    /// The destination has already been truncated at this point; its contents
    /// are undefined.
    #[error("failed to write {len} bytes to file: {}: {source}", path.display())]
    Write {
        /// The destination being written.
        path: PathBuf,

        /// The payload length in bytes.
        len: usize,

        /// The underlying I/O error.
        source: io::Error,
    },
}

/// A specialized `Result` type for save operations, returning the crate's
/// [`SaveError`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, SaveError>;
