//! Time sources used to seed the custom generators.

use chrono::Utc;

/// Source of the clock readings used as one-shot seeds.
///
/// Generators take their time source by value so tests can substitute a
/// [`FixedClock`] and reproduce sequences exactly.
pub trait TimeSource {
    /// High-resolution reading in nanoseconds.
    fn high_resolution_nanos(&self) -> u64;

    /// Whole seconds since the Unix epoch.
    fn unix_seconds(&self) -> u64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn high_resolution_nanos(&self) -> u64 {
        (**self).high_resolution_nanos()
    }

    fn unix_seconds(&self) -> u64 {
        (**self).unix_seconds()
    }
}

/// The real system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn high_resolution_nanos(&self) -> u64 {
        Utc::now()
            .timestamp_nanos_opt()
            .and_then(|nanos| u64::try_from(nanos).ok())
            .unwrap_or_default()
    }

    fn unix_seconds(&self) -> u64 {
        u64::try_from(Utc::now().timestamp()).unwrap_or_default()
    }
}

/// A clock frozen at fixed readings.
///
/// # Examples
///
/// ```rust
/// use prng_generators::{FixedClock, TimeSource};
///
/// let clock = FixedClock::new(1_500, 42);
/// assert_eq!(clock.high_resolution_nanos(), 1_500);
/// assert_eq!(clock.unix_seconds(), 42);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedClock {
    nanos: u64,
    seconds: u64,
}

impl FixedClock {
    /// Creates a clock that always returns the given readings.
    #[inline]
    pub fn new(nanos: u64, seconds: u64) -> Self {
        Self { nanos, seconds }
    }
}

impl TimeSource for FixedClock {
    fn high_resolution_nanos(&self) -> u64 {
        self.nanos
    }

    fn unix_seconds(&self) -> u64 {
        self.seconds
    }
}
