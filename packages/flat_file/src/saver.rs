//! Whole-buffer writes with policy-selected failure reporting.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{Result, SaveError};

/// How [`FileSaver`] reports a failed save.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailurePolicy {
    /// Failures are returned to the caller as [`SaveError`] values,
    /// stopping the caller's control flow.
    Propagate,

    /// Failures are recorded on the error stream via [`tracing`] and the call
    /// reports success. After a logged write failure the destination file's
    /// contents are undefined or partial.
    Log,
}

/// Writes a complete byte buffer to a file, truncating any existing contents.
///
/// The failure-reporting policy is fixed at construction; see
/// [`FailurePolicy`] for the two options.
///
/// # Examples
///
/// ```
/// use flat_file::{FailurePolicy, FileSaver};
///
/// # fn main() -> Result<(), flat_file::SaveError> {
/// let dir = tempfile::tempdir().expect("failed to create temporary directory");
/// let path = dir.path().join("snapshot.bin");
///
/// let saver = FileSaver::new(FailurePolicy::Propagate);
/// saver.save(&path, &[0x41, 0x42, 0x43])?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FileSaver {
    policy: FailurePolicy,
}

impl FileSaver {
    /// Creates a saver with the given failure-reporting policy.
    #[must_use]
    pub fn new(policy: FailurePolicy) -> Self {
        Self { policy }
    }

    /// The policy this saver was configured with.
    #[must_use]
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Writes the whole payload to `path`, truncating any existing file.
    ///
    /// # Errors
    ///
    /// With [`FailurePolicy::Propagate`], returns [`SaveError`] when the
    /// payload is empty, the destination cannot be opened, or the write does
    /// not complete. With [`FailurePolicy::Log`] those same conditions emit an
    /// error event instead and the call returns `Ok`.
    pub fn save(&self, path: impl AsRef<Path>, payload: &[u8]) -> Result<()> {
        let path = path.as_ref();

        match write_whole(path, payload) {
            Ok(()) => Ok(()),
            Err(error) => match self.policy {
                FailurePolicy::Propagate => Err(error),
                FailurePolicy::Log => {
                    tracing::error!(%error, path = %path.display(), "file save failed");
                    Ok(())
                }
            },
        }
    }
}

// The three failure conditions, checked in order: empty payload (before the
// destination is touched), unopenable destination, incomplete write.
fn write_whole(path: &Path, payload: &[u8]) -> Result<()> {
    if payload.is_empty() {
        return Err(SaveError::EmptyPayload {
            path: path.to_path_buf(),
        });
    }

    let mut file = File::create(path).map_err(|source| SaveError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(payload).map_err(|source| SaveError::Write {
        path: path.to_path_buf(),
        len: payload.len(),
        source,
    })?;

    Ok(())
}
