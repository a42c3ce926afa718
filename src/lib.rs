//! # Hopfield Memory
//!
//! A binary associative-memory network (classical Hopfield model) over
//! bipolar patterns, built on a small dense-matrix library.
//!
//! ## Features
//!
//! - Dense `Matrix` container with bounds-checked access
//! - Matrix arithmetic: add, subtract, scale, multiply, transpose, identity,
//!   dot product, copy
//! - Hebbian training with suppressed self-connections
//! - Single-pass recall with a strict-positive sign decision
//!
//! ## Quick Start
//!
//! ```rust
//! use hopfield_memory::{format_pattern, HopfieldNetwork};
//!
//! fn main() -> hopfield_memory::Result<()> {
//!     let mut network = HopfieldNetwork::new(4)?;
//!     network.train(&[true, true, false, false])?;
//!
//!     // A corrupted version of the trained pattern
//!     let recalled = network.present(&[true, false, false, false])?;
//!     assert_eq!(format_pattern(&recalled), "[T,T,F,F]");
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod hopfield;
pub mod matrix;
pub mod utils;

// Re-export main types for convenience
pub use error::{HopfieldError, MatrixError, Result};
pub use hopfield::bipolar::{bipolar_to_bool, to_bipolar};
pub use hopfield::HopfieldNetwork;
pub use matrix::Matrix;
pub use utils::format::{format_pattern, parse_pattern};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{HopfieldError, MatrixError, Result};
    pub use crate::hopfield::bipolar::{bipolar_to_bool, to_bipolar};
    pub use crate::hopfield::HopfieldNetwork;
    pub use crate::matrix::{math, Matrix};
    pub use crate::utils::format::{format_pattern, parse_pattern};
}
