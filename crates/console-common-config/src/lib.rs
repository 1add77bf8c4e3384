//! Configuration types for the site replication console.
//!
//! The console reads a single `console.yaml` file. Every section is optional
//! and falls back to defaults, and `${VAR}` / `${VAR:-default}` references
//! are expanded from the environment before parsing.

pub mod env;
pub mod loader;
pub mod types;


pub use env::*;
pub use loader::*;
pub use types::*;
