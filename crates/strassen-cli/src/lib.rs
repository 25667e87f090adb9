//! `strassen-cli` - Command-line driver for `strassen-core`.
//!
//! Decodes `strassen DEBUG DIMENSION INPUT`, loads or generates the two
//! operands, multiplies them, and reports results, timings, verification
//! and operation counts according to the debug flags.

pub mod args;
pub mod error;
pub mod input;
pub mod random;
pub mod report;
pub mod run;

pub use args::{DebugFlags, RunConfig, Source, Usage};
pub use error::{CliError, Result};
pub use run::run;
