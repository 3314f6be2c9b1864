//! WebAssembly bindings for counter-model.
//!
//! Enable with the `wasm` feature:
//!
//! ```toml
//! [dependencies]
//! counter-model = { version = "0.1", features = ["wasm"] }
//! ```

use wasm_bindgen::prelude::*;

/// A click counter for use from JavaScript.
#[wasm_bindgen(js_name = Counter)]
pub struct WasmCounter {
    inner: crate::Counter,
}

#[wasm_bindgen(js_class = Counter)]
impl WasmCounter {
    /// Create a new counter at zero.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: crate::Counter::new(),
        }
    }

    /// Increment the count by 1, saturating at `u64::MAX`.
    pub fn increment(&mut self) {
        self.inner.increment();
    }

    /// Set the count back to 0.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Get the current count.
    ///
    /// The value crosses into JavaScript as a `BigInt`, not a `number`.
    #[wasm_bindgen(getter, js_name = currentCount)]
    pub fn current_count(&self) -> u64 {
        self.inner.current_count()
    }
}

impl Default for WasmCounter {
    fn default() -> Self {
        Self::new()
    }
}
