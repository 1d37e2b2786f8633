//! Process-scoped "already saved" state.

use std::sync::atomic::{AtomicBool, Ordering};

/// A claimable marker recording whether a one-time save has happened.
///
/// This replaces the ambient "have we serialized yet" boolean such code tends
/// to grow: the state starts unset, is claimed by exactly one caller through
/// [`begin`](Self::begin), and is observed through
/// [`is_complete`](Self::is_complete). Pass a reference to everything that
/// needs to coordinate on the same save instead of reaching for a global.
///
/// # Examples
///
/// ```
/// use flat_file::SaveOnce;
///
/// static SNAPSHOT_SAVED: SaveOnce = SaveOnce::new();
///
/// if SNAPSHOT_SAVED.begin() {
///     // First caller: perform the save.
/// }
///
/// assert!(SNAPSHOT_SAVED.is_complete());
/// ```
#[derive(Debug, Default)]
pub struct SaveOnce {
    saved: AtomicBool,
}

impl SaveOnce {
    /// Creates a marker in the "not yet saved" state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            saved: AtomicBool::new(false),
        }
    }

    /// Claims the save.
    ///
    /// Returns `true` for exactly one caller across all threads; every later
    /// call returns `false`.
    pub fn begin(&self) -> bool {
        self.saved
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Whether the save has been claimed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.saved.load(Ordering::Acquire)
    }
}
