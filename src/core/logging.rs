//! Console Logging
//!
//! In the browser messages go to the devtools console through `web_sys::console`.
//! On native targets (unit tests, integration tests) the calls compile to nothing,
//! since the imported console functions only exist inside a wasm host.
//!
//! Usage:
//! ```rust
//! use ballpit_engine::{console_log, console_warn};
//!
//! console_log!("runner started with {} bodies", 3);
//! console_warn!("config rejected: {}", "max_bodies must be greater than zero");
//! ```

#[cfg(target_arch = "wasm32")]
pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(message: &str) {
    let _ = message;
}

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(message: &str) {
    let _ = message;
}

/// Log an informational line to the browser console
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::logging::log(&format!($($arg)*))
    };
}

/// Log a warning line to the browser console
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::logging::warn(&format!($($arg)*))
    };
}
