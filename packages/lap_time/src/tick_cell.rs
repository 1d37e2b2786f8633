//! Tick storage selected by the target's atomic capability.

#[cfg(not(target_has_atomic = "64"))]
use portable_atomic::AtomicU64;
#[cfg(target_has_atomic = "64")]
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

/// A 64-bit tick slot shared between threads.
///
/// On targets with native 64-bit atomics this is a plain [`AtomicU64`] and every
/// operation is lock-free. Elsewhere the slot is encoded through `portable-atomic`'s
/// best available strategy for the target, which may take an internal lock.
/// Call sites are encoding-agnostic; [`TickCell::IS_LOCK_FREE`] reports the outcome.
///
/// Loads are acquire and stores are release, pairing a reader of one cell with the
/// writer that last stored it. Nothing orders *pairs* of cells relative to each
/// other; that is the stopwatch's documented torn-update race.
#[derive(Debug)]
pub(crate) struct TickCell {
    ticks: AtomicU64,
}

impl TickCell {
    /// Whether the selected encoding performs lock-free loads and stores.
    #[cfg(target_has_atomic = "64")]
    pub(crate) const IS_LOCK_FREE: bool = true;

    #[cfg(not(target_has_atomic = "64"))]
    pub(crate) const IS_LOCK_FREE: bool = AtomicU64::is_always_lock_free();

    pub(crate) const fn new(ticks: u64) -> Self {
        Self {
            ticks: AtomicU64::new(ticks),
        }
    }

    pub(crate) fn load(&self) -> u64 {
        self.ticks.load(Ordering::Acquire)
    }

    pub(crate) fn store(&self, ticks: u64) {
        self.ticks.store(ticks, Ordering::Release);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn new_cell_holds_initial_value() {
        let cell = TickCell::new(42);
        assert_eq!(cell.load(), 42);
    }

    #[test]
    fn store_overwrites() {
        let cell = TickCell::new(0);
        cell.store(u64::MAX);
        assert_eq!(cell.load(), u64::MAX);
    }

    #[test]
    fn cell_is_shareable_between_threads() {
        let cell = Arc::new(TickCell::new(0));

        let writer = Arc::clone(&cell);
        let handle = thread::spawn(move || {
            writer.store(7);
        });

        handle.join().unwrap();
        assert_eq!(cell.load(), 7);
    }

    // The encoding choice is a compile-time constant.
    const _: bool = TickCell::IS_LOCK_FREE;
}
