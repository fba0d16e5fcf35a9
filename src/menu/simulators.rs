//! Built-in `simulators` provider
//!
//! Scans simulator directories for `<name>/simulator.toml` files and turns
//! each one into a command entry that starts the simulator through the
//! configured launcher:
//!
//! ```toml
//! [emulator]
//! label = "PDP-11/70 running Unix V7"
//!
//! [description]
//! text = ["Seventh Edition Unix.", "Log in as root."]
//! publisher = "Bell Labs"
//! version = "V7"
//! original_date = "1979"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::menu::model::{Command, Description, MenuEntry, MenuSet};
use crate::menu::providers::ProviderRegistry;
use crate::menu::source::RawDescription;

/// Id under which the provider is registered
pub const PROVIDER_ID: &str = "simulators";

/// Name of the per-simulator definition file
const SIMULATOR_FILE: &str = "simulator.toml";

#[derive(Debug, Deserialize)]
struct SimulatorFile {
    emulator: EmulatorSection,
    #[serde(default)]
    description: DescriptionSection,
}

#[derive(Debug, Deserialize)]
struct EmulatorSection {
    label: String,
}

#[derive(Debug, Default, Deserialize)]
struct DescriptionSection {
    #[serde(default)]
    text: Option<RawDescription>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    publisher: Option<String>,
    #[serde(default)]
    original_date: Option<String>,
    #[serde(default)]
    version_date: Option<String>,
}

/// Register the provider scanning `dirs` (later directories win on name clashes)
pub fn register(registry: &mut ProviderRegistry, dirs: Vec<PathBuf>, launcher: PathBuf) {
    registry.register(PROVIDER_ID, move || discover(&dirs, &launcher));
}

/// Build a menu of all simulators found in `dirs`
pub fn discover(dirs: &[PathBuf], launcher: &Path) -> anyhow::Result<MenuSet> {
    let mut found: BTreeMap<String, PathBuf> = BTreeMap::new();
    for dir in dirs {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Skipping simulator directory {}: {}", dir.display(), e);
                continue;
            }
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                found.insert(name.to_string(), path.clone());
            }
        }
    }

    let mut simulators = Vec::new();
    for (name, path) in found {
        let config_file = path.join(SIMULATOR_FILE);
        if !config_file.is_file() {
            continue;
        }
        match load_simulator(&name, &config_file, launcher) {
            Ok(entry) => simulators.push(entry),
            Err(e) => tracing::warn!("Failed to load {}: {:#}", config_file.display(), e),
        }
    }

    if simulators.is_empty() {
        anyhow::bail!("no simulators are installed");
    }
    simulators.sort_by(|a, b| a.name().cmp(b.name()));
    tracing::debug!("Discovered {} simulators", simulators.len());
    Ok(MenuSet::new(simulators)?)
}

fn load_simulator(name: &str, config_file: &Path, launcher: &Path) -> anyhow::Result<MenuEntry> {
    let contents = fs::read_to_string(config_file)
        .with_context(|| format!("cannot read {}", config_file.display()))?;
    let file: SimulatorFile = toml::from_str(&contents).context("invalid simulator definition")?;
    let section = file.description;

    let mut command = Command::new([launcher.to_string_lossy().into_owned(), name.to_string()])?;
    command.publisher = section.publisher;
    command.version = section.version;
    command.version_date = section.version_date;
    command.original_date = section.original_date;

    let description = section
        .text
        .map(Description::from)
        .unwrap_or_else(|| Description::Line(String::new()));
    Ok(MenuEntry::command(file.emulator.label, description, command)?)
}
