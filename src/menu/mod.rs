//! Menu tree model, definition files and dynamic providers

pub mod model;
pub mod providers;
pub mod simulators;
pub mod source;

pub use model::{Command, Description, EntryKind, MenuEntry, MenuSet};
pub use providers::ProviderRegistry;
pub use source::{load_menu, parse_menu, MenuFormat};

use crate::core::config::Config;

/// Providers every menu file may reference
pub fn builtin_providers(config: &Config) -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();
    simulators::register(
        &mut registry,
        config.simulator_dirs.clone(),
        config.simulator_launcher.clone(),
    );
    registry
}
