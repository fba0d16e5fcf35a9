//! Configuration CLI command handlers

use std::path::{Path, PathBuf};

use crate::cli::commands::{ConfigCommand, ConfigKey};
use crate::core::config::Config;
use crate::error::{Result, TimedialError};

/// Handle configuration commands against the file at `path`
pub fn handle_config(command: ConfigCommand, path: &Path) -> Result<()> {
    match command {
        ConfigCommand::Set { key, value } => handle_set(path, key, &value),
        ConfigCommand::Get { key } => handle_get(path, key),
        ConfigCommand::Remove { key } => handle_remove(path, key),
        ConfigCommand::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}

/// Apply `value` for `key` to `config`
pub fn apply(config: &mut Config, key: ConfigKey, value: &str) -> Result<()> {
    match key {
        ConfigKey::MenuFile => config.menu_file = absolute(value)?,
        ConfigKey::LogFile => config.log_file = Some(absolute(value)?),
        ConfigKey::LogLevel => config.set_log_level(value)?,
        ConfigKey::StatusInterval => config.set_status_interval(value)?,
        ConfigKey::SimulatorLauncher => config.simulator_launcher = absolute(value)?,
    }
    Ok(())
}

/// Current value of `key` as shown to the user
pub fn describe(config: &Config, key: ConfigKey) -> String {
    match key {
        ConfigKey::MenuFile => format!("Menu file: {}", config.menu_file.display()),
        ConfigKey::LogFile => match &config.log_file {
            Some(path) => format!("Log file: {}", path.display()),
            None => "Log file: Not configured (using the data directory)".to_string(),
        },
        ConfigKey::LogLevel => format!("Log level: {}", config.log_level),
        ConfigKey::StatusInterval => {
            format!("Status interval: {} seconds", config.status_interval_secs)
        }
        ConfigKey::SimulatorLauncher => {
            format!("Simulator launcher: {}", config.simulator_launcher.display())
        }
    }
}

fn absolute(value: &str) -> Result<PathBuf> {
    let path = PathBuf::from(value);
    if !path.is_absolute() {
        return Err(TimedialError::InvalidInput(format!(
            "'{}' is not an absolute path",
            value
        )));
    }
    Ok(path)
}

/// Handle setting a configuration value
fn handle_set(path: &Path, key: ConfigKey, value: &str) -> Result<()> {
    let mut config = Config::load_from(path)?;
    apply(&mut config, key, value)?;
    config.save_to(path)?;
    println!("{}", describe(&config, key));
    Ok(())
}

/// Handle getting a configuration value
fn handle_get(path: &Path, key: ConfigKey) -> Result<()> {
    let config = Config::load_from(path)?;
    println!("{}", describe(&config, key));
    Ok(())
}

/// Handle resetting a configuration value
fn handle_remove(path: &Path, key: ConfigKey) -> Result<()> {
    let mut config = Config::load_from(path)?;
    let defaults = Config::default();
    match key {
        ConfigKey::MenuFile => config.menu_file = defaults.menu_file,
        ConfigKey::LogFile => config.log_file = None,
        ConfigKey::LogLevel => config.log_level = defaults.log_level,
        ConfigKey::StatusInterval => config.status_interval_secs = defaults.status_interval_secs,
        ConfigKey::SimulatorLauncher => config.simulator_launcher = defaults.simulator_launcher,
    }
    config.save_to(path)?;
    println!("{} (default)", describe(&config, key));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_paths_must_be_absolute() {
        let mut config = Config::default();
        apply(&mut config, ConfigKey::MenuFile, "/srv/menu.toml").unwrap();
        assert_eq!(config.menu_file, PathBuf::from("/srv/menu.toml"));
        assert!(apply(&mut config, ConfigKey::MenuFile, "menu.toml").is_err());
    }

    #[test]
    fn test_set_then_remove_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        handle_set(&path, ConfigKey::StatusInterval, "5").unwrap();
        assert_eq!(Config::load_from(&path).unwrap().status_interval_secs, 5);

        handle_remove(&path, ConfigKey::StatusInterval).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().status_interval_secs, 30);
    }

    #[test]
    fn test_invalid_value_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(handle_set(&path, ConfigKey::LogLevel, "loud").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_describe_unset_log_file() {
        let config = Config::default();
        assert!(describe(&config, ConfigKey::LogFile).contains("Not configured"));
    }
}
