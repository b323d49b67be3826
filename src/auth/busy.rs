use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// In-flight indicator for one kind of auth request.
///
/// Clones share the same flag. [`BusyFlag::try_claim`] sets it atomically and
/// hands back a guard that clears it again on drop, so the flag falls back to
/// idle whether the request finished, failed or panicked.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

#[derive(Debug)]
#[must_use = "the flag is cleared as soon as the guard is dropped"]
pub struct BusyGuard(Arc<AtomicBool>);

impl BusyFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Returns `None` when a request already holds the flag.
    pub fn try_claim(&self) -> Option<BusyGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(Arc::clone(&self.0)))
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
