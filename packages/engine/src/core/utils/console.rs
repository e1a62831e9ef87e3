//! Browser console logging
//!
//! On wasm32 messages go to `console.log`. Native builds (tests, Rust
//! callers) drop them, but the format arguments are still type-checked.
//!
//! ```rust
//! use idealgas_engine::console_log;
//!
//! let n = 3;
//! console_log!("spawned {} particles", n);
//! ```

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::console::log(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[cfg(target_arch = "wasm32")]
pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}
