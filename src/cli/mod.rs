//! CLI module for timedial
//!
//! This module contains all CLI command definitions and handlers using clap.

pub mod check;
pub mod commands;
pub mod config;

pub use commands::{Cli, Commands};
