//! Weapon component + варианты оружия
//!
//! Architecture:
//! - `Weapon`: базовое состояние (damage type, impulse, ignore-list, owner)
//! - `WeaponKind`: tagged variant вместо иерархии: Base / Hitscan / Projectile
//! - Owner: plain `Entity` handle на персонажа, оружие им не владеет

use bevy::prelude::*;

use super::WeaponDamageType;
use crate::input::{InputActionId, MappingContextId};

/// Дальность hitscan по умолчанию (метры)
pub const DEFAULT_HITSCAN_RANGE: f32 = 50.0;

/// Сила импульса по умолчанию (Н·с)
pub const DEFAULT_IMPULSE_STRENGTH: f32 = 100.0;

/// Offset дула от оружия по умолчанию (метры, local space оружия)
///
/// Оси Bevy: forward = -Z, up = +Y, right = +X. Дуло на метр впереди и
/// 10 см выше pivot.
pub const DEFAULT_MUZZLE_OFFSET: Vec3 = Vec3::new(0.0, 0.1, -1.0);

/// Вариант оружия (единственная переопределяемая часть: fire)
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub enum WeaponKind {
    /// Только звук + анимация, урон не наносит
    Base,
    /// Мгновенный луч из камеры
    Hitscan { range: f32 },
    /// Физический снаряд из дула
    Projectile { speed: f32, radius: f32 },
}

impl Default for WeaponKind {
    fn default() -> Self {
        Self::Hitscan {
            range: DEFAULT_HITSCAN_RANGE,
        }
    }
}

/// Оружие first-person персонажа
///
/// Инвариант: `owner` выставляется только успешным attach.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Weapon {
    pub kind: WeaponKind,

    /// Персонаж, который держит оружие (None до attach)
    pub owner: Option<Entity>,

    pub damage_type: Option<WeaponDamageType>,

    pub impulse_strength: f32,

    /// Исключения для radial queries
    ///
    /// ⚠️ Растёт на один снаряд за каждое radial попадание и никогда
    /// не чистится (см. DESIGN.md, open questions).
    pub actors_to_ignore: Vec<Entity>,

    pub muzzle_offset: Vec3,

    /// Звук выстрела (asset id), None = без звука
    pub fire_sound: Option<String>,

    /// Montage выстрела на меше рук (asset id), None = без анимации
    pub fire_animation: Option<String>,

    pub fire_action: InputActionId,

    pub mapping_context: MappingContextId,
}

impl Default for Weapon {
    fn default() -> Self {
        Self {
            kind: WeaponKind::default(),
            owner: None,
            damage_type: None,
            impulse_strength: DEFAULT_IMPULSE_STRENGTH,
            actors_to_ignore: Vec::new(),
            muzzle_offset: DEFAULT_MUZZLE_OFFSET,
            fire_sound: None,
            fire_animation: None,
            fire_action: InputActionId::new("Fire"),
            mapping_context: MappingContextId::new("WeaponContext"),
        }
    }
}

impl Weapon {
    pub fn hitscan(range: f32, damage_type: WeaponDamageType) -> Self {
        Self {
            kind: WeaponKind::Hitscan { range },
            damage_type: Some(damage_type),
            ..default()
        }
    }

    pub fn projectile(speed: f32, radius: f32, damage_type: WeaponDamageType) -> Self {
        Self {
            kind: WeaponKind::Projectile { speed, radius },
            damage_type: Some(damage_type),
            ..default()
        }
    }

    pub fn is_attached(&self) -> bool {
        self.owner.is_some()
    }
}

/// Снаряд projectile оружия
///
/// Физикой (полёт, коллизии) владеет Rapier. Попадание приходит
/// от хоста событием `ProjectileImpact`.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Projectile {
    /// Оружие, из которого выпущен (для damage policy)
    pub weapon: Entity,
    /// Радиус radial эффекта (метры)
    pub radius: f32,
}

/// Снимок снаряда на момент попадания
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileView {
    pub entity: Entity,
    pub location: Vec3,
    pub radius: f32,
    pub velocity: Vec3,
}
