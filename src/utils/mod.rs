//! Utility module for pattern display and parsing

pub mod format;

pub use format::*;
