//! Convenient re-exports for common usage.
//!
//! ```
//! use counter_model::prelude::*;
//! ```

pub use crate::Counter;
pub use crate::CounterError;
