//! # counter-model
//!
//! A counter that is incremented one step at a time and reset to zero.
//!
//! ## Quick Start
//!
//! ```
//! use counter_model::prelude::*;
//!
//! let mut counter = Counter::new();
//! counter.increment();
//! counter.increment();
//! assert_eq!(counter.current_count(), 2);
//!
//! counter.reset();
//! assert_eq!(counter.current_count(), 0);
//! ```
//!
//! ## Overflow
//!
//! [`Counter::increment`] saturates at `u64::MAX`. Use
//! [`Counter::try_increment`] to get a [`CounterError::Overflow`] instead.
//!
//! ## `no_std` Support
//!
//! The counter itself never allocates and works without `std`. Disable the
//! default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! counter-model = { version = "0.1", default-features = false }
//! ```
//!
//! With `tracing` enabled on a `no_std` target, `tracing` itself still
//! needs `alloc`.
//!
//! ## Features
//!
//! - `std` (default): implements `std::error::Error` for [`CounterError`]
//! - `serde`: `Serialize`/`Deserialize` for [`Counter`]
//! - `tracing`: emits events on reset and saturation
//! - `wasm`: JavaScript bindings via `wasm-bindgen`

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(missing_docs)]

mod counter;
mod error;
#[cfg(feature = "wasm")]
mod wasm;

pub mod prelude;

pub use counter::Counter;
pub use error::CounterError;
#[cfg(feature = "wasm")]
pub use wasm::WasmCounter;
