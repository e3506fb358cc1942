//! Damage + impulse dispatch (общий путь для всех вариантов оружия)
//!
//! Порядок внутри `apply_damage`:
//! 1. Damage по impulse kind (point / radial / undirected fallback)
//! 2. Impulse в компонент попадания (только если он simulating physics)
//! 3. Radial side path: overlap сферы снаряда → radial force по props
//!
//! Все guard'ы: тихий no-op: выстрел best-effort, ретраить нечего.

use bevy::prelude::*;

use super::{DamageApi, DamageRequest, ImpulseKind, ProjectileView, Weapon};
use crate::components::CharacterView;
use crate::logger::log;
use crate::physics::{HitRecord, PhysicsApi, PHYSICS_BODY};

/// Применить урон от попадания
///
/// - `target` None → no-op
/// - у оружия нет damage type → no-op
/// - оружие без владельца → no-op (некому атрибутировать урон)
/// - `projectile` None для hitscan
pub fn apply_damage(
    weapon: &mut Weapon,
    character: Option<&CharacterView>,
    target: Option<Entity>,
    hit: &HitRecord,
    projectile: Option<&ProjectileView>,
    physics: &mut impl PhysicsApi,
    damage: &mut impl DamageApi,
) {
    let Some(target) = target else {
        return;
    };
    let Some(damage_type) = weapon.damage_type.clone() else {
        log("apply_damage: weapon has no damage type, skipping");
        return;
    };
    let Some(character) = character else {
        log("apply_damage: weapon has no owner, skipping");
        return;
    };

    // Снаряд: если есть, иначе сам персонаж
    let emitter = projectile.map(|p| p.entity).unwrap_or(character.entity);
    let instigator = character.controller;
    let kind = damage_type.impulse_kind;

    // === 1. Damage ===
    match kind {
        ImpulseKind::Ray | ImpulseKind::Point => {
            damage.deal(DamageRequest::Point {
                target,
                amount: damage_type.damage,
                direction: -hit.impact_normal,
                hit: hit.clone(),
                instigator,
                causer: emitter,
                class: damage_type.damage_class.clone(),
            });
        }
        ImpulseKind::Radial => {
            // Без снаряда центра взрыва нет → урона нет (hitscan + radial)
            if let Some(projectile) = projectile {
                damage.deal(DamageRequest::Radial {
                    amount: damage_type.damage,
                    origin: projectile.location,
                    radius: projectile.radius,
                    class: damage_type.damage_class.clone(),
                    ignore: weapon.actors_to_ignore.clone(),
                    causer: projectile.entity,
                    instigator,
                });
            } else {
                log("apply_damage: radial damage without projectile, skipping");
            }
        }
        ImpulseKind::None => {
            damage.deal(DamageRequest::Undirected {
                target,
                amount: damage_type.damage,
                instigator,
                causer: character.entity,
                class: damage_type.damage_class.clone(),
            });
        }
    }

    // === 2. Impulse в точке попадания ===
    if let Some(component) = hit.component {
        if physics.is_simulating_physics(component) {
            let impulse = match (kind, projectile) {
                (ImpulseKind::Ray, _) => Some(-hit.impact_normal * weapon.impulse_strength),
                // Скорость снаряда важнее нормали
                (ImpulseKind::Point, Some(projectile)) => {
                    Some(projectile.velocity.normalize_or_zero() * weapon.impulse_strength)
                }
                _ => None,
            };

            if let Some(impulse) = impulse {
                physics.add_impulse_at_location(
                    component,
                    impulse,
                    hit.impact_point,
                    hit.bone.as_deref(),
                );
            }
        }
    }

    // === 3. Radial force ===
    let (ImpulseKind::Radial, Some(projectile)) = (kind, projectile) else {
        return;
    };

    weapon.actors_to_ignore.push(projectile.entity);

    let overlapped = physics.overlap_sphere(
        projectile.location,
        projectile.radius,
        PHYSICS_BODY,
        &weapon.actors_to_ignore,
    );

    for actor in overlapped {
        for component in physics.primitive_components(actor) {
            if !physics.is_simulating_physics(component) {
                continue;
            }

            physics.add_radial_force(
                component,
                projectile.location,
                projectile.radius,
                weapon.impulse_strength,
                true,
            );
        }
    }
}
