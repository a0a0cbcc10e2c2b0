#![warn(rust_2018_idioms, missing_debug_implementations, clippy::pedantic)]

pub mod config;
pub mod filters;
pub mod options;

pub use config::{CompilerConfig, ConfigError};
pub use filters::OutputFilters;
pub use options::{Agbcc, OptionStrategy};
