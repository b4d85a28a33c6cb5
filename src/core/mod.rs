//! Core value types and utilities

// Macros first so the rest of the crate sees them
#[macro_use]
pub mod utils;
pub mod json_float;
pub mod vec2;
