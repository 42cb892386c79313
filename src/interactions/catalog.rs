//! Interaction catalog loading and per-day bookkeeping.
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use bevy::log::warn;
use bevy::prelude::Resource;
use serde::Deserialize;

const CATALOG_CONFIG_PATH: &str = "config/interactions.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub interactions: Vec<InteractionConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InteractionConfig {
    pub key: String,
    pub prompt: String,
    #[serde(default)]
    pub energy_cost: u32,
}

/// One interactable object kind: its prompt text, energy cost, and whether
/// the player already performed it today.
#[derive(Debug, Clone)]
pub struct InteractionDefinition {
    key: String,
    prompt: String,
    energy_cost: u32,
    performed_today: bool,
}

impl InteractionDefinition {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn energy_cost(&self) -> u32 {
        self.energy_cost
    }

    pub fn performed_today(&self) -> bool {
        self.performed_today
    }

    fn mark_performed(&mut self) {
        self.performed_today = true;
    }

    fn reset_for_new_day(&mut self) {
        self.performed_today = false;
    }
}

/// The full set of interactable definitions, keyed by trigger key.
///
/// Entries are created once at startup and live for the whole session; only
/// the per-day flag mutates.
#[derive(Resource, Debug, Clone)]
pub struct InteractionCatalog {
    entries: HashMap<String, InteractionDefinition>,
}

impl InteractionCatalog {
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data =
            fs::read_to_string(&path).map_err(|err| format!("unable to read file: {err}"))?;
        let config: CatalogConfig =
            toml::from_str(&data).map_err(|err| format!("invalid interaction config: {err}"))?;
        Self::from_config(config)
    }

    pub fn from_config(config: CatalogConfig) -> Result<Self, String> {
        if config.interactions.is_empty() {
            return Err("interaction config must define at least one entry".to_string());
        }

        let mut entries = HashMap::new();
        for interaction in config.interactions {
            if interaction.key.trim().is_empty() {
                return Err("interaction key cannot be empty".to_string());
            }
            if entries.contains_key(&interaction.key) {
                return Err(format!(
                    "duplicate interaction key '{}'",
                    interaction.key
                ));
            }
            entries.insert(
                interaction.key.clone(),
                InteractionDefinition {
                    key: interaction.key,
                    prompt: interaction.prompt,
                    energy_cost: interaction.energy_cost,
                    performed_today: false,
                },
            );
        }

        Ok(Self { entries })
    }

    /// Built-in catalog used when no config file is present.
    pub fn fallback() -> Self {
        let defaults: [(&str, &str, u32); 10] = [
            ("chest", "Open the chest?", 0),
            ("comp_sci", "Would you like to study?", 20),
            ("chat", "Would you like to chat to your friends?", 10),
            ("basketball", "Would you like to play basketball?", 20),
            ("eat", "Would you like to eat?", 10),
            (
                "accomodation",
                "Go to sleep for the night?\nYour alarm is set for 8am.",
                0,
            ),
            ("rch", "Would you like to study in the hub?", 10),
            ("tree", "Speak to the tree?", 5),
            ("ducks", "Would you like to feed the ducks?", 10),
            ("cook", "Would you like to cook?", 30),
        ];

        let config = CatalogConfig {
            interactions: defaults
                .into_iter()
                .map(|(key, prompt, energy_cost)| InteractionConfig {
                    key: key.to_string(),
                    prompt: prompt.to_string(),
                    energy_cost,
                })
                .collect(),
        };

        Self::from_config(config).expect("fallback interaction catalog should be valid")
    }

    /// True when the key has a dedicated prompt rather than generic flavor.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&InteractionDefinition> {
        self.entries.get(key)
    }

    /// Prompt text shown when offering the interaction.
    pub fn prompt(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(InteractionDefinition::prompt)
    }

    /// Energy cost for the key; unknown keys cost nothing.
    pub fn energy_cost(&self, key: &str) -> u32 {
        self.entries
            .get(key)
            .map(InteractionDefinition::energy_cost)
            .unwrap_or(0)
    }

    /// Flags the interaction as performed for the current day.
    pub fn mark_performed(&mut self, key: &str) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.mark_performed();
        }
    }

    /// Clears every per-day flag; called on each day rollover.
    pub fn advance_day(&mut self) {
        for entry in self.entries.values_mut() {
            entry.reset_for_new_day();
        }
    }
}

impl Default for InteractionCatalog {
    fn default() -> Self {
        match Self::load_from_file(CATALOG_CONFIG_PATH) {
            Ok(catalog) => catalog,
            Err(error) => {
                warn!(
                    "Failed to load interaction config from {}: {error}. Falling back to defaults.",
                    CATALOG_CONFIG_PATH
                );
                Self::fallback()
            }
        }
    }
}
