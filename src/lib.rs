#![forbid(unsafe_code)]

//! Thoughts: developer notes and thoughts management
//!
//! Thoughts keeps a small JSON configuration file describing where a developer's
//! notes repositories live and how local repositories map into them. This crate
//! contains the config-resolution layer and the CLI that drives it.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;

// Re-export core types for convenient access
pub use config::{ConfigFile, ConfigResolver, EnvLookup, ProcessEnv, ThoughtsConfig};
pub use error::ConfigError;
