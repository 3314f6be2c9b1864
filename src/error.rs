use core::fmt;

/// Error returned by the fallible counter operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterError {
    /// The count is already at `u64::MAX` and cannot be incremented.
    Overflow,
}

impl fmt::Display for CounterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow => write!(f, "counter overflow: value is already at u64::MAX"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CounterError {}
