//! Bodykit - Rigid body data model for 2D sandbox simulations
//!
//! Plain state for generic, polygon and circle bodies plus factory
//! constructors. Stepping, collision and rendering live in the host engine.
//!
//! Architecture:
//! - core/   - Vec2, console logging macros
//! - domain/ - Body / PolygonBody / CircleBody and their options
//! - api/    - JS facade (wasm-bindgen)

// Utils with logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod api;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the module
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("bodykit {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get crate version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::api::wasm::BodyHandle;
pub use crate::core::vec2::Vec2;
pub use crate::domain::body::{AnyBody, Body, BodyKind, CircleBody, PolygonBody};
pub use crate::domain::options::{BodyOptions, CircleBodyOptions, PolygonBodyOptions};
