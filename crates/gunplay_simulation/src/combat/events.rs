//! Weapon events
//!
//! Входящие (хост/input → ECS):
//! - `FireIntent`: нажали fire (из input routing или AI)
//! - `ProjectileImpact`: снаряд во что-то попал (collision от хоста)
//! - `AttachWeaponRequest` / `WeaponEndPlay`: lifecycle оружия
//!
//! Исходящие (ECS → хост/наблюдатели):
//! - `FireCue`: звук/анимация для проигрывания
//! - `HitscanImpact`: broadcast попадания (VFX, scoring)
//! - `SpawnProjectile`: projectile вариант выстрелил
//! - `WeaponAttached` / `AttachDeclined`

use bevy::prelude::*;

use crate::physics::HitRecord;

/// Event: оружие должно выстрелить
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireIntent {
    pub weapon: Entity,
}

/// Event: звук/анимация выстрела (playback: забота хоста)
#[derive(Event, Debug, Clone, PartialEq)]
pub enum FireCue {
    Sound { asset: String, location: Vec3 },
    Montage { asset: String, mesh: Entity, play_rate: f32 },
}

/// Event: hitscan попал (fire-and-forget broadcast)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct HitscanImpact {
    pub weapon: Entity,
    pub actor: Entity,
    pub impact_point: Vec3,
    pub direction: Vec3,
}

/// Event: projectile оружие выпустило снаряд
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SpawnProjectile {
    pub weapon: Entity,
    pub location: Vec3,
    pub velocity: Vec3,
    pub radius: f32,
}

/// Event: снаряд попал (хост → ECS)
///
/// `target` = None → попали в то, что не актор (урон не наносится).
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ProjectileImpact {
    pub projectile: Entity,
    pub target: Option<Entity>,
    pub hit: HitRecord,
}

/// Event: выдать оружие персонажу
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachWeaponRequest {
    pub weapon: Entity,
    pub character: Entity,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponAttached {
    pub weapon: Entity,
    pub character: Entity,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachDeclined {
    pub weapon: Entity,
    pub character: Entity,
    pub reason: super::AttachError,
}

/// Event: оружие уходит из мира (teardown до despawn)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponEndPlay {
    pub weapon: Entity,
}
