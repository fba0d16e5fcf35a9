//! Custom error types for timedial
//!
//! User-friendly error messages for all failure scenarios.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the timedial application
#[derive(Error, Debug)]
pub enum TimedialError {
    /// The menu definition file does not exist
    #[error("Menu file not found: {}\n\n  → Set 'menu-file' with 'timedial config set menu-file PATH' or pass --menu.", .0.display())]
    MenuNotFound(PathBuf),

    /// The menu definition could not be parsed
    #[error("Failed to load menu from {}: {message}", path.display())]
    MenuParse { path: PathBuf, message: String },

    /// An entry in the menu tree violates a structural rule
    #[error("Invalid menu entry '{path}': {reason}")]
    InvalidMenu { path: String, reason: String },

    /// A dynamic entry references a provider nobody registered
    #[error("Unknown menu provider '{0}'.\n\n  → Check the 'callable' value in the menu file.")]
    UnknownProvider(String),

    /// A dynamic menu provider failed to build its menu
    #[error("Menu '{id}' is unavailable: {message}")]
    Provider { id: String, message: String },

    /// A command could not be started
    #[error("Failed to start {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML serialization/deserialization error
    #[error("Configuration file is invalid: {0}")]
    Toml(String),

    /// Terminal/TUI error
    #[error("Terminal error: {0}\n\n  → Try resizing your terminal or restarting it.")]
    Terminal(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input from user
    #[error("{0}")]
    InvalidInput(String),
}

impl TimedialError {
    /// Build a structural validation error for the entry at `path`
    pub fn invalid(path: impl Into<String>, reason: impl Into<String>) -> Self {
        TimedialError::InvalidMenu {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error must abort startup
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            TimedialError::MenuNotFound(_)
                | TimedialError::MenuParse { .. }
                | TimedialError::InvalidMenu { .. }
                | TimedialError::UnknownProvider(_)
                | TimedialError::Config(_)
                | TimedialError::Toml(_)
        )
    }
}

impl From<toml::de::Error> for TimedialError {
    fn from(err: toml::de::Error) -> Self {
        TimedialError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for TimedialError {
    fn from(err: toml::ser::Error) -> Self {
        TimedialError::Toml(err.to_string())
    }
}

/// Result type alias using TimedialError
pub type Result<T> = std::result::Result<T, TimedialError>;
