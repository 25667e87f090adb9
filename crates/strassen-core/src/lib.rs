//! `strassen-core` - Dense square matrix multiplication with Strassen's algorithm.
//!
//! This crate provides:
//! - A `Buffer` owning one square integer matrix, and `View`s that alias it
//! - A padding calculator choosing a working size that halves evenly
//! - A `Multiplier` trait with linear (reference) and Strassen implementations
//! - A verifier that cross-checks products against the linear multiplier
//! - Caller-owned operation statistics
//!
//! Entries use wrapping integer arithmetic; see [`Element`].

pub mod buffer;
pub mod config;
pub mod element;
pub mod error;
pub mod multiply;
pub mod padding;
pub mod stats;
pub mod verify;
pub mod view;

// Re-export primary types at the crate root for convenience.
pub use buffer::Buffer;
pub use config::{StrassenConfig, DEFAULT_CUTOFF};
pub use element::Element;
pub use error::{Result, StrassenError};
pub use multiply::{
    linear_multiply, strassen_multiply, LinearMultiplier, Multiplier, StrassenMultiplier,
};
pub use padding::padded_dimension;
pub use stats::OpStats;
pub use verify::verify;
pub use view::View;
