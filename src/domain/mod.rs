//! Body model and its configuration objects

pub mod body;
pub mod options;
