use bevy::prelude::*;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::light::components::LightAnimation;

const PRESETS_JSON: &str = include_str!("../../assets/light_presets.json");

#[derive(Debug, Deserialize)]
struct PresetsJson {
    presets: BTreeMap<String, LightAnimation>,
}

/// Named animation presets, keyed by name in alphabetical order
#[derive(Resource, Debug, Default, Clone)]
pub struct LightPresets {
    presets: BTreeMap<String, LightAnimation>,
}

impl LightPresets {
    /// Parse the embedded preset file
    pub fn load() -> Result<Self, String> {
        Self::from_json(PRESETS_JSON)
    }

    /// Parse presets from JSON: `{ "presets": { "<name>": { ...fields } } }`
    ///
    /// Fields left out of a preset take the `LightAnimation` defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let parsed: PresetsJson =
            serde_json::from_str(json).map_err(|e| format!("Invalid preset file: {}", e))?;

        if parsed.presets.is_empty() {
            return Err("No presets defined".to_string());
        }

        Ok(LightPresets {
            presets: parsed.presets,
        })
    }

    /// Fresh copy of a preset, with no captured baseline
    pub fn get(&self, name: &str) -> Option<LightAnimation> {
        self.presets.get(name).cloned()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

/// Load the embedded presets, falling back to an empty library on error
pub fn load_light_presets() -> LightPresets {
    match LightPresets::load() {
        Ok(presets) => {
            info!(
                "Loaded {} light presets: {}",
                presets.len(),
                presets.names().collect::<Vec<_>>().join(", ")
            );
            presets
        }
        Err(e) => {
            error!("Failed to load light presets: {}", e);
            LightPresets::default()
        }
    }
}
