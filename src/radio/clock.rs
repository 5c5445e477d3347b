use core::time::Duration;

/// A monotonic time source used to measure timeouts.
///
/// The returned value is the time passed since an arbitrary (but fixed) epoch,
/// so only the difference between two readings is meaningful.
/// It must never decrease.
pub trait MonotonicClock {
    fn now(&mut self) -> Duration;
}

/// A [`MonotonicClock`] backed by [`std::time::Instant`].
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug)]
pub struct StdClock {
    epoch: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    pub fn new() -> Self {
        Self {
            epoch: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl MonotonicClock for StdClock {
    fn now(&mut self) -> Duration {
        self.epoch.elapsed()
    }
}
