//! Core functionality for timedial
//!
//! This module contains shared non-UI logic:
//! - Application configuration
//! - Launching menu commands

pub mod config;
pub mod launcher;

pub use config::Config;
pub use launcher::{ExitState, Launcher, SystemLauncher};
