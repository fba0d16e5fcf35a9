//! CLI command definitions using clap
//!
//! Defines the command structure for the `timedial` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// timedial - full-screen terminal menu
///
/// Presents a catalogue of shells, games and simulators to users connected
/// over a text terminal. Run without arguments to start the menu.
#[derive(Parser, Debug)]
#[command(name = "timedial", version, about, long_about = None)]
pub struct Cli {
    /// Menu definition file, overriding the configured one
    #[arg(long, global = true, env = "TIMEDIAL_MENU")]
    pub menu: Option<PathBuf>,

    /// Configuration file to use instead of the default location
    #[arg(long, global = true, env = "TIMEDIAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the menu definition and print its tree
    Check,

    /// Manage configuration
    Config(ConfigArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set {
        /// Configuration key
        key: ConfigKey,

        /// Configuration value
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: ConfigKey,
    },

    /// Reset a configuration value to its default
    Remove {
        /// Configuration key
        key: ConfigKey,
    },

    /// Print the configuration file location
    Path,
}

/// Available configuration keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigKey {
    /// Menu definition file
    MenuFile,
    /// Log file location
    LogFile,
    /// Log level used when RUST_LOG is unset
    LogLevel,
    /// Footer status refresh interval in seconds
    StatusInterval,
    /// Program that starts a simulator by name
    SimulatorLauncher,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_runs_menu() {
        let cli = Cli::try_parse_from(["timedial"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_menu_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["timedial", "check", "--menu", "/srv/menu.yaml"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Check)));
        assert_eq!(cli.menu, Some(PathBuf::from("/srv/menu.yaml")));
    }

    #[test]
    fn test_config_set() {
        let cli =
            Cli::try_parse_from(["timedial", "config", "set", "status-interval", "10"]).unwrap();
        match cli.command {
            Some(Commands::Config(ConfigArgs {
                command: ConfigCommand::Set { key, value },
            })) => {
                assert_eq!(key, ConfigKey::StatusInterval);
                assert_eq!(value, "10");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Cli::try_parse_from(["timedial", "config", "get", "colour"]).is_err());
    }
}
