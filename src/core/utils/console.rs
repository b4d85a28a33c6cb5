//! Console logging macros
//!
//! In the browser: routed to `console.log` / `console.warn` via web-sys
//! Native debug builds: stderr
//! Native release builds: compiled out
//!
//! Usage:
//! ```rust
//! use bodykit::{console_log, console_warn};
//!
//! let n = 3;
//! console_log!("spawned {} bodies", n);
//! console_warn!("ignored {} malformed options", n);
//! ```

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

/// `console.log` with `format!` syntax
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::console::log(&format!($($arg)*));
        }
        #[cfg(all(not(target_arch = "wasm32"), debug_assertions))]
        {
            eprintln!($($arg)*);
        }
        #[cfg(all(not(target_arch = "wasm32"), not(debug_assertions)))]
        {
            if false {
                eprintln!($($arg)*);
            }
        }
    }};
}

/// `console.warn` with `format!` syntax
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::console::warn(&format!($($arg)*));
        }
        #[cfg(all(not(target_arch = "wasm32"), debug_assertions))]
        {
            eprintln!("warning: {}", format!($($arg)*));
        }
        #[cfg(all(not(target_arch = "wasm32"), not(debug_assertions)))]
        {
            if false {
                eprintln!($($arg)*);
            }
        }
    }};
}
