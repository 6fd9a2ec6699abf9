use std::sync::atomic::{AtomicBool, Ordering};

/// Holds an in-flight flag raised for as long as the guard lives.
///
/// Dropping the guard clears the flag, which covers normal returns, `?`
/// early exits and a request future being dropped mid-fetch.
#[derive(Debug)]
pub struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    /// Raises `flag` if it is currently clear.
    ///
    /// Returns `None` when another holder already owns it.
    pub fn try_acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
