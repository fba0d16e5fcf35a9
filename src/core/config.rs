//! Application configuration management
//!
//! Handles loading and saving settings including:
//! - Location of the menu definition file
//! - Log file and log level
//! - Footer status refresh interval
//! - Simulator discovery

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimedialError};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Menu definition file (YAML, TOML or JSON)
    #[serde(default = "default_menu_file")]
    pub menu_file: PathBuf,

    /// Log file; defaults to `timedial.log` in the data directory
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Footer status refresh interval in seconds
    #[serde(default = "default_status_interval")]
    pub status_interval_secs: u64,

    /// Directories scanned for simulators, later ones override earlier ones
    #[serde(default = "default_simulator_dirs")]
    pub simulator_dirs: Vec<PathBuf>,

    /// Program used to start a simulator by name
    #[serde(default = "default_simulator_launcher")]
    pub simulator_launcher: PathBuf,
}

fn default_menu_file() -> PathBuf {
    PathBuf::from("/opt/timedial/menu.yaml")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_status_interval() -> u64 {
    30
}

fn default_simulator_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from("/opt/timedial/simulators")];
    if let Some(base) = BaseDirs::new() {
        dirs.push(base.home_dir().join("simulators"));
    }
    dirs
}

fn default_simulator_launcher() -> PathBuf {
    PathBuf::from("/usr/local/bin/timedial-start-sim")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu_file: default_menu_file(),
            log_file: None,
            log_level: default_log_level(),
            status_interval_secs: default_status_interval(),
            simulator_dirs: default_simulator_dirs(),
            simulator_launcher: default_simulator_launcher(),
        }
    }
}

impl Config {
    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.toml"))
    }

    /// Effective log file path
    pub fn log_path(&self) -> Result<PathBuf> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::project_dirs()?.data_dir().join("timedial.log")),
        }
    }

    /// Footer refresh interval
    pub fn status_interval(&self) -> Duration {
        Duration::from_secs(self.status_interval_secs.max(1))
    }

    /// Set the status interval from user input
    pub fn set_status_interval(&mut self, value: &str) -> Result<()> {
        let secs: u64 = value.parse().map_err(|_| {
            TimedialError::InvalidInput(format!(
                "Invalid interval '{}'. Expected a number of seconds.",
                value
            ))
        })?;
        if secs == 0 {
            return Err(TimedialError::InvalidInput(
                "The status interval must be at least one second.".into(),
            ));
        }
        self.status_interval_secs = secs;
        Ok(())
    }

    /// Set the log level from user input
    pub fn set_log_level(&mut self, value: &str) -> Result<()> {
        let level = value.to_ascii_lowercase();
        if !matches!(
            level.as_str(),
            "trace" | "debug" | "info" | "warn" | "error" | "off"
        ) {
            return Err(TimedialError::InvalidInput(format!(
                "Invalid log level '{}'. Available levels: trace, debug, info, warn, error, off",
                value
            )));
        }
        self.log_level = level;
        Ok(())
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("org", "timedial", "timedial")
            .ok_or_else(|| TimedialError::Config("Could not determine config directory".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.menu_file, PathBuf::from("/opt/timedial/menu.yaml"));
        assert_eq!(config.status_interval_secs, 30);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.simulator_dirs[0], PathBuf::from("/opt/timedial/simulators"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "menu_file = \"/srv/menu.toml\"\nstatus_interval_secs = 5\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.menu_file, PathBuf::from("/srv/menu.toml"));
        assert_eq!(config.status_interval(), Duration::from_secs(5));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.log_file = Some(PathBuf::from("/tmp/timedial.log"));
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.log_path().unwrap(), PathBuf::from("/tmp/timedial.log"));
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "status_interval_secs = \"soon\"\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(TimedialError::Toml(_))
        ));
    }

    #[test]
    fn test_set_status_interval() {
        let mut config = Config::default();
        config.set_status_interval("10").unwrap();
        assert_eq!(config.status_interval_secs, 10);
        assert!(config.set_status_interval("0").is_err());
        assert!(config.set_status_interval("later").is_err());
    }

    #[test]
    fn test_set_log_level() {
        let mut config = Config::default();
        config.set_log_level("DEBUG").unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.set_log_level("loud").is_err());
    }
}
