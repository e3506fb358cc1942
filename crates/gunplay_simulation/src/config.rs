//! Weapon config (JSON data assets)
//!
//! Пример:
//! ```json
//! {
//!   "kind": { "type": "hitscan", "range": 80.0 },
//!   "damage_type": { "damage": 25.0, "impulse_kind": "ray", "damage_class": "ballistic" },
//!   "impulse_strength": 150.0,
//!   "fire_sound": "sounds/rifle_shot"
//! }
//! ```
//!
//! Любое отсутствующее поле берётся из defaults `Weapon`.

use bevy::prelude::*;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::combat::{
    Weapon, WeaponDamageType, WeaponKind, DEFAULT_HITSCAN_RANGE, DEFAULT_IMPULSE_STRENGTH,
    DEFAULT_MUZZLE_OFFSET,
};
use crate::input::{InputActionId, MappingContext, MappingContextId};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid weapon config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Вариант оружия в конфиге
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WeaponKindConfig {
    Base,
    Hitscan {
        #[serde(default = "default_range")]
        range: f32,
    },
    Projectile { speed: f32, radius: f32 },
}

impl Default for WeaponKindConfig {
    fn default() -> Self {
        Self::Hitscan {
            range: DEFAULT_HITSCAN_RANGE,
        }
    }
}

impl From<WeaponKindConfig> for WeaponKind {
    fn from(config: WeaponKindConfig) -> Self {
        match config {
            WeaponKindConfig::Base => WeaponKind::Base,
            WeaponKindConfig::Hitscan { range } => WeaponKind::Hitscan { range },
            WeaponKindConfig::Projectile { speed, radius } => {
                WeaponKind::Projectile { speed, radius }
            }
        }
    }
}

fn default_range() -> f32 {
    DEFAULT_HITSCAN_RANGE
}

fn default_impulse_strength() -> f32 {
    DEFAULT_IMPULSE_STRENGTH
}

fn default_muzzle_offset() -> [f32; 3] {
    DEFAULT_MUZZLE_OFFSET.to_array()
}

fn default_fire_action() -> String {
    "Fire".into()
}

fn default_mapping_context() -> String {
    "WeaponContext".into()
}

/// Описание оружия (data asset)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeaponConfig {
    #[serde(default)]
    pub kind: WeaponKindConfig,
    #[serde(default)]
    pub damage_type: Option<WeaponDamageType>,
    #[serde(default = "default_impulse_strength")]
    pub impulse_strength: f32,
    #[serde(default = "default_muzzle_offset")]
    pub muzzle_offset: [f32; 3],
    #[serde(default)]
    pub fire_sound: Option<String>,
    #[serde(default)]
    pub fire_animation: Option<String>,
    #[serde(default = "default_fire_action")]
    pub fire_action: String,
    #[serde(default = "default_mapping_context")]
    pub mapping_context: String,
    /// Определение mapping context, которое оружие ставит при attach
    #[serde(default)]
    pub mappings: Option<MappingContext>,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            kind: WeaponKindConfig::default(),
            damage_type: None,
            impulse_strength: DEFAULT_IMPULSE_STRENGTH,
            muzzle_offset: default_muzzle_offset(),
            fire_sound: None,
            fire_animation: None,
            fire_action: default_fire_action(),
            mapping_context: default_mapping_context(),
            mappings: None,
        }
    }
}

impl WeaponConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Weapon компонент (без owner, attach выставит его сам)
    pub fn into_weapon(self) -> Weapon {
        Weapon {
            kind: self.kind.into(),
            owner: None,
            damage_type: self.damage_type,
            impulse_strength: self.impulse_strength,
            actors_to_ignore: Vec::new(),
            muzzle_offset: Vec3::from_array(self.muzzle_offset),
            fire_sound: self.fire_sound,
            fire_animation: self.fire_animation,
            fire_action: InputActionId::new(self.fire_action),
            mapping_context: MappingContextId::new(self.mapping_context),
        }
    }
}
