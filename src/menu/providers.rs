//! Registry of dynamic menu providers
//!
//! A dynamic entry names a provider by id. Selecting the entry calls the
//! provider, which builds a brand new [`MenuSet`] every time.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Result, TimedialError};
use crate::menu::model::MenuSet;

/// A zero-argument function building a fresh menu
pub type Provider = Box<dyn Fn() -> anyhow::Result<MenuSet>>;

/// Maps provider ids to the functions that build their menus
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Provider>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `provider` under `id`, replacing any previous one
    pub fn register<F>(&mut self, id: impl Into<String>, provider: F)
    where
        F: Fn() -> anyhow::Result<MenuSet> + 'static,
    {
        let id = id.into();
        tracing::debug!("Registered menu provider '{}'", id);
        self.providers.insert(id, Box::new(provider));
    }

    pub fn contains(&self, id: &str) -> bool {
        self.providers.contains_key(id)
    }

    /// Registered ids, sorted
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Build the menu for `id`
    pub fn build(&self, id: &str) -> Result<MenuSet> {
        let provider = self
            .providers
            .get(id)
            .ok_or_else(|| TimedialError::UnknownProvider(id.to_string()))?;
        provider().map_err(|e| TimedialError::Provider {
            id: id.to_string(),
            message: format!("{:#}", e),
        })
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.ids())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::model::{Command, MenuEntry};

    fn sample() -> anyhow::Result<MenuSet> {
        let entry = MenuEntry::command("Shell", "A shell", Command::new(["/bin/sh"])?)?;
        Ok(MenuSet::new(vec![entry])?)
    }

    #[test]
    fn test_unknown_provider() {
        let registry = ProviderRegistry::new();
        assert!(matches!(
            registry.build("nope"),
            Err(TimedialError::UnknownProvider(id)) if id == "nope"
        ));
    }

    #[test]
    fn test_each_build_is_fresh() {
        let mut registry = ProviderRegistry::new();
        registry.register("shells", sample);
        let first = registry.build("shells").unwrap();
        let second = registry.build("shells").unwrap();
        assert!(!MenuSet::same(&first, &second));
        assert_eq!(first.names(), second.names());
    }

    #[test]
    fn test_provider_failure_is_wrapped() {
        let mut registry = ProviderRegistry::new();
        registry.register("broken", || Err(anyhow::anyhow!("disk on fire")));
        let err = registry.build("broken").unwrap_err();
        assert_eq!(err.to_string(), "Menu 'broken' is unavailable: disk on fire");
    }

    #[test]
    fn test_ids_sorted() {
        let mut registry = ProviderRegistry::new();
        registry.register("b", sample);
        registry.register("a", sample);
        assert_eq!(registry.ids(), vec!["a", "b"]);
    }
}
