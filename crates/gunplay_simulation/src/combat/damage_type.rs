//! Damage type config (read-only external data)
//!
//! Один `WeaponDamageType` на оружие: сколько урона, как переводить
//! попадание в физическую силу, и тег классификации урона.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Как попадание превращается в физическую силу
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Reflect)]
#[serde(rename_all = "snake_case")]
pub enum ImpulseKind {
    /// Directional: против нормали в точке попадания (hitscan)
    Ray,
    /// Directional: вдоль полёта снаряда (если снаряд есть)
    Point,
    /// Radial: урон + сила по сфере вокруг снаряда
    Radial,
    /// Без импульса: undirected урон по цели
    ///
    /// Неизвестные строки в конфиге тоже попадают сюда.
    #[default]
    #[serde(other)]
    None,
}

/// Тег классификации урона ("ballistic", "explosive", ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Reflect)]
pub struct DamageClass(pub String);

impl DamageClass {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }
}

impl Default for DamageClass {
    fn default() -> Self {
        Self::new("generic")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
pub struct WeaponDamageType {
    pub damage: f32,
    #[serde(default)]
    pub impulse_kind: ImpulseKind,
    #[serde(default)]
    pub damage_class: DamageClass,
}

impl WeaponDamageType {
    pub fn new(damage: f32, impulse_kind: ImpulseKind) -> Self {
        Self {
            damage,
            impulse_kind,
            damage_class: DamageClass::default(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.damage_class = DamageClass::new(class);
        self
    }
}
