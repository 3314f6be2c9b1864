use core::fmt;

use crate::CounterError;

/// A counter that can be incremented by one or reset to zero.
///
/// The count starts at 0 and only grows through [`Counter::increment`].
/// At `u64::MAX` it saturates instead of wrapping, so a reset is the only
/// way the value ever goes down.
///
/// # Example
///
/// ```
/// use counter_model::prelude::*;
///
/// let mut counter = Counter::new();
/// counter.increment();
/// counter.increment();
/// counter.increment();
/// assert_eq!(counter.current_count(), 3);
///
/// counter.reset();
/// assert_eq!(counter.current_count(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Counter {
    current_count: u64,
}

impl Counter {
    /// Create a new counter at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { current_count: 0 }
    }

    /// Increment the count by 1, saturating at `u64::MAX`.
    pub fn increment(&mut self) {
        match self.current_count.checked_add(1) {
            Some(next) => self.current_count = next,
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(count = self.current_count, "counter saturated");
            }
        }
    }

    /// Increment the count by 1, or fail if it is already at `u64::MAX`.
    ///
    /// On failure the count is left unchanged.
    ///
    /// ```
    /// use counter_model::prelude::*;
    ///
    /// let mut counter = Counter::new();
    /// assert!(counter.try_increment().is_ok());
    /// assert_eq!(counter.current_count(), 1);
    /// ```
    pub fn try_increment(&mut self) -> Result<(), CounterError> {
        match self.current_count.checked_add(1) {
            Some(next) => {
                self.current_count = next;
                Ok(())
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!("refusing to increment past u64::MAX");
                Err(CounterError::Overflow)
            }
        }
    }

    /// Set the count back to 0.
    pub fn reset(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(previous = self.current_count, "counter reset");
        self.current_count = 0;
    }

    /// Get the current count.
    #[must_use]
    pub const fn current_count(&self) -> u64 {
        self.current_count
    }

    /// Whether the count is 0.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.current_count == 0
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current_count)
    }
}

impl From<Counter> for u64 {
    fn from(counter: Counter) -> Self {
        counter.current_count
    }
}
