//! Fire логика вариантов оружия
//!
//! - `fire_base`: звук + montage, без урона
//! - `fire_hitscan`: base + луч из камеры → `apply_damage` → `HitscanImpact`
//! - `fire_projectile`: base + `SpawnProjectile` из дула
//! - `fire`: dispatch по `WeaponKind`

use bevy::prelude::*;

use super::{apply_damage, DamageApi, FireCue, HitscanImpact, SpawnProjectile, Weapon, WeaponKind};
use crate::components::CharacterView;
use crate::physics::{PhysicsApi, VISIBILITY};

/// Где оружие находится в мире в момент выстрела
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponPose {
    pub entity: Entity,
    pub location: Vec3,
    pub rotation: Quat,
}

/// Что получилось из выстрела (для систем и логов)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FireOutcome {
    pub cues: Vec<FireCue>,
    pub impact: Option<HitscanImpact>,
    pub projectile: Option<SpawnProjectile>,
}

/// Базовый fire: только звук и анимация
///
/// Нужны персонаж и его контроллер, иначе no-op (возвращает false).
pub fn fire_base(
    weapon: &Weapon,
    character: Option<&CharacterView>,
    cues: &mut Vec<FireCue>,
) -> bool {
    let Some(character) = character else {
        return false;
    };
    if character.controller.is_none() {
        return false;
    }

    if let Some(sound) = &weapon.fire_sound {
        cues.push(FireCue::Sound {
            asset: sound.clone(),
            location: character.location,
        });
    }

    if let Some(animation) = &weapon.fire_animation {
        cues.push(FireCue::Montage {
            asset: animation.clone(),
            mesh: character.mesh_1p,
            play_rate: 1.0,
        });
    }

    true
}

/// Hitscan fire: луч из позиции оружия вдоль forward камеры
///
/// Нет blocking hit в пределах `range` → ни урона, ни broadcast.
pub fn fire_hitscan(
    weapon: &mut Weapon,
    range: f32,
    pose: &WeaponPose,
    character: Option<&CharacterView>,
    physics: &mut impl PhysicsApi,
    damage: &mut impl DamageApi,
    outcome: &mut FireOutcome,
) {
    fire_base(weapon, character, &mut outcome.cues);

    if !weapon.is_attached() {
        return;
    }
    let Some(character) = character else {
        return;
    };

    let direction = character.camera_forward;
    let ignore = [character.entity];
    let Some(hit) = physics.cast_ray(pose.location, direction, range, VISIBILITY, &ignore) else {
        return;
    };

    apply_damage(weapon, Some(character), Some(hit.actor), &hit, None, physics, damage);

    outcome.impact = Some(HitscanImpact {
        weapon: pose.entity,
        actor: hit.actor,
        impact_point: hit.impact_point,
        direction,
    });
}

/// Projectile fire: снаряд из дула вдоль forward камеры
pub fn fire_projectile(
    weapon: &Weapon,
    speed: f32,
    radius: f32,
    pose: &WeaponPose,
    character: Option<&CharacterView>,
    outcome: &mut FireOutcome,
) {
    if !fire_base(weapon, character, &mut outcome.cues) {
        return;
    }
    let Some(character) = character else {
        return;
    };

    let direction = character.camera_forward.normalize_or_zero();
    outcome.projectile = Some(SpawnProjectile {
        weapon: pose.entity,
        location: pose.location + pose.rotation * weapon.muzzle_offset,
        velocity: direction * speed,
        radius,
    });
}

/// Выстрел по варианту оружия
pub fn fire(
    weapon: &mut Weapon,
    pose: &WeaponPose,
    character: Option<&CharacterView>,
    physics: &mut impl PhysicsApi,
    damage: &mut impl DamageApi,
) -> FireOutcome {
    let mut outcome = FireOutcome::default();

    match weapon.kind {
        WeaponKind::Base => {
            fire_base(weapon, character, &mut outcome.cues);
        }
        WeaponKind::Hitscan { range } => {
            fire_hitscan(weapon, range, pose, character, physics, damage, &mut outcome);
        }
        WeaponKind::Projectile { speed, radius } => {
            fire_projectile(weapon, speed, radius, pose, character, &mut outcome);
        }
    }

    outcome
}
