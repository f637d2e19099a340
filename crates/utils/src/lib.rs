//! Common utility for reading FEMTIC style text inputs
//!
//! These are left public for convenience.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod error;
mod tokens;

// Flatten
pub use error::{Error, Result};
pub use tokens::Tokens;
