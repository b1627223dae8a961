//! Clarity CLI library
//!
//! This library provides the command-line interface for the clarity
//! text pipeline.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod lexicon_source;
pub mod output;

pub use error::{CliError, CliResult};
