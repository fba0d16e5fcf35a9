//! Menu definition files
//!
//! The menu is authored as YAML, TOML or JSON with a top-level `mainmenu`
//! list. Each entry carries a `name`, a `description` (string or list of
//! strings) and exactly one of `items`, `command` or `callable`:
//!
//! ```yaml
//! mainmenu:
//!   - name: Retro
//!     description: Old favourites
//!     items:
//!       - name: Play
//!         description: Start the game
//!         command:
//!           exec: ["/usr/games/play"]
//!           publisher: Acme
//!   - name: Simulators
//!     description: Historic machines
//!     callable: simulators
//! ```
//!
//! Loading validates the whole tree up front so navigation never meets a
//! malformed entry.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, TimedialError};
use crate::menu::model::{check_exec, Command, Description, MenuEntry, MenuSet};
use crate::menu::providers::ProviderRegistry;

/// A description as written in a definition file
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawDescription {
    One(String),
    Many(Vec<String>),
}

impl From<RawDescription> for Description {
    fn from(raw: RawDescription) -> Self {
        match raw {
            RawDescription::One(line) => Description::Line(line),
            RawDescription::Many(lines) => Description::Lines(lines),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawCommand {
    exec: Vec<String>,
    #[serde(default)]
    publisher: Option<String>,
    #[serde(default)]
    original_date: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    version_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    name: String,
    description: RawDescription,
    #[serde(default)]
    items: Option<Vec<RawEntry>>,
    #[serde(default)]
    command: Option<RawCommand>,
    #[serde(default)]
    callable: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawMenu {
    mainmenu: Vec<RawEntry>,
}

/// Serialization format of a menu file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFormat {
    Yaml,
    Toml,
    Json,
}

impl MenuFormat {
    /// Pick the format from the file extension, defaulting to YAML
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("toml") => MenuFormat::Toml,
            Some("json") => MenuFormat::Json,
            _ => MenuFormat::Yaml,
        }
    }
}

/// Load and validate the menu at `path`
pub fn load_menu(path: &Path, providers: &ProviderRegistry) -> Result<MenuSet> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => TimedialError::MenuNotFound(path.to_path_buf()),
        _ => TimedialError::MenuParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
    })?;

    let menu = parse_menu(&contents, MenuFormat::from_path(path), providers).map_err(|e| match e {
        TimedialError::MenuParse { message, .. } => TimedialError::MenuParse {
            path: path.to_path_buf(),
            message,
        },
        other => other,
    })?;

    tracing::info!(
        "Loaded menu from {} ({} top-level entries)",
        path.display(),
        menu.len()
    );
    Ok(menu)
}

/// Parse and validate a menu definition held in memory
pub fn parse_menu(
    contents: &str,
    format: MenuFormat,
    providers: &ProviderRegistry,
) -> Result<MenuSet> {
    let parsed: std::result::Result<RawMenu, String> = match format {
        MenuFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
        MenuFormat::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
        MenuFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
    };
    let raw = parsed.map_err(|message| TimedialError::MenuParse {
        path: PathBuf::from("<input>"),
        message,
    })?;

    if raw.mainmenu.is_empty() {
        return Err(TimedialError::invalid(
            "mainmenu",
            "the main menu must contain at least one entry",
        ));
    }
    MenuSet::new(convert_entries(raw.mainmenu, "", providers)?)
}

fn convert_entries(
    raw: Vec<RawEntry>,
    parent: &str,
    providers: &ProviderRegistry,
) -> Result<Vec<MenuEntry>> {
    raw.into_iter()
        .map(|entry| convert_entry(entry, parent, providers))
        .collect()
}

fn convert_entry(raw: RawEntry, parent: &str, providers: &ProviderRegistry) -> Result<MenuEntry> {
    let path = if parent.is_empty() {
        raw.name.clone()
    } else {
        format!("{} > {}", parent, raw.name)
    };
    if raw.name.trim().is_empty() {
        return Err(TimedialError::invalid(path, "name must not be empty"));
    }

    match (raw.items, raw.command, raw.callable) {
        (Some(items), None, None) => {
            if items.is_empty() {
                return Err(TimedialError::invalid(path, "items must not be empty"));
            }
            let children = convert_entries(items, &path, providers)?;
            MenuEntry::group(raw.name, raw.description, children)
        }
        (None, Some(command), None) => {
            check_exec(&command.exec).map_err(|reason| TimedialError::invalid(&path, reason))?;
            let mut built = Command::new(command.exec)?;
            built.publisher = command.publisher;
            built.version = command.version;
            built.version_date = command.version_date;
            built.original_date = command.original_date;
            MenuEntry::command(raw.name, raw.description, built)
        }
        (None, None, Some(id)) => {
            if id.trim().is_empty() {
                return Err(TimedialError::invalid(path, "callable must not be empty"));
            }
            if !providers.contains(&id) {
                return Err(TimedialError::invalid(
                    path,
                    format!("unknown callable '{}'", id),
                ));
            }
            MenuEntry::dynamic(raw.name, raw.description, id)
        }
        (None, None, None) => Err(TimedialError::invalid(
            path,
            "entry must define one of items, command or callable",
        )),
        _ => Err(TimedialError::invalid(
            path,
            "entry must define only one of items, command or callable",
        )),
    }
}
