#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Whole-buffer file writes with a configurable failure-reporting policy.
//!
//! This package writes a complete byte buffer to a destination path, truncating
//! any existing file. What happens on failure is an explicit configuration
//! choice rather than a hard-coded behavior:
//!
//! - [`FailurePolicy::Propagate`] returns the error to the caller
//! - [`FailurePolicy::Log`] records the error on the error stream and continues
//!
//! The core functionality includes:
//! - [`FileSaver`] - Writes a buffer to a path under the configured policy
//! - [`FailurePolicy`] - The two failure-reporting policies
//! - [`SaveError`] - One variant per failure condition
//! - [`SaveOnce`] - An explicit process-scoped "already saved" token
//!
//! # Simple Usage
//!
//! ```
//! use flat_file::{FailurePolicy, FileSaver};
//!
//! # fn main() -> Result<(), flat_file::SaveError> {
//! let dir = tempfile::tempdir().expect("failed to create temporary directory");
//! let path = dir.path().join("report.bin");
//!
//! let saver = FileSaver::new(FailurePolicy::Propagate);
//! saver.save(&path, b"ABC")?;
//!
//! assert_eq!(std::fs::read(&path).expect("file was just written"), b"ABC");
//! # Ok(())
//! # }
//! ```
//!
//! # Log-and-continue
//!
//! With [`FailurePolicy::Log`] a failed save is reported through [`tracing`]
//! and the call still returns `Ok`, leaving the destination's contents
//! undefined or partial. Use this in telemetry paths where a lost report must
//! not take down the caller:
//!
//! ```
//! use flat_file::{FailurePolicy, FileSaver};
//!
//! let saver = FileSaver::new(FailurePolicy::Log);
//!
//! // An empty payload is a failure, but with the log policy it only emits
//! // an error event.
//! let result = saver.save("/nonexistent/report.bin", &[]);
//! assert!(result.is_ok());
//! ```

mod error;
mod save_once;
mod saver;

pub use error::SaveError;
pub use save_once::SaveOnce;
pub use saver::{FailurePolicy, FileSaver};
