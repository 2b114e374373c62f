//! Command-line host around `pom-order-core`.
//!
//! The binary is a thin trigger: it reads descriptor files, runs the
//! reordering transform, and applies the result as a whole-file rewrite.
//! All ordering semantics live in the core crate.

pub mod cli;
pub mod error;

pub use cli::{Cli, Summary, run};
pub use error::{CliError, Result};
