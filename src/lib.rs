//! timedial - a full-screen terminal menu
//!
//! This library provides the menu tree model and its loaders, the terminal
//! interface that renders and navigates it, and the CLI around both.

pub mod cli;
pub mod core;
pub mod error;
pub mod menu;
pub mod tui;

pub use error::{Result, TimedialError};
