//! Library exports for pathkit-cli.
//!
//! The binary is a thin shell over these modules, which integration tests
//! and benches can also reach.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
