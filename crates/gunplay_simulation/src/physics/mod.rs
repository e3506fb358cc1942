//! Physics boundary для оружия
//!
//! Weapon логика не ходит в Rapier напрямую: только через `PhysicsApi`:
//! - spatial queries: ray cast по каналу, sphere overlap по object type
//! - rigid body: simulating check, impulse в точке, radial force
//!
//! `RapierPhysics` (SystemParam): реализация на bevy_rapier3d.
//! В тестах: recording double.

use bevy::prelude::*;
use bevy_rapier3d::prelude::Group;

pub mod collision_layers;
pub mod rapier;

#[cfg(test)]
mod rapier_tests;

pub use collision_layers::*;
pub use rapier::RapierPhysics;

/// Результат попадания (живёт один выстрел)
#[derive(Debug, Clone, PartialEq)]
pub struct HitRecord {
    /// Актор, в которого попали (entity с RigidBody, либо сам collider)
    pub actor: Entity,
    /// Конкретный collider/body, в который попали
    pub component: Option<Entity>,
    pub impact_point: Vec3,
    pub impact_normal: Vec3,
    /// Кость скелета (для ragdoll), Rapier её не знает → None
    pub bone: Option<String>,
}

impl HitRecord {
    pub fn new(actor: Entity, impact_point: Vec3, impact_normal: Vec3) -> Self {
        Self {
            actor,
            component: Some(actor),
            impact_point,
            impact_normal,
            bone: None,
        }
    }
}

/// Spatial queries + rigid body операции, которые нужны оружию
pub trait PhysicsApi {
    /// Первый blocking hit вдоль луча (direction нормализуется)
    fn cast_ray(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        channel: Group,
        ignore: &[Entity],
    ) -> Option<HitRecord>;

    /// Акторы, пересекающие сферу (фильтр по object type), без ignore
    fn overlap_sphere(
        &self,
        center: Vec3,
        radius: f32,
        object_types: Group,
        ignore: &[Entity],
    ) -> Vec<Entity>;

    /// Physics компоненты актора: по одному на каждое тело
    ///
    /// Дочерние colliders одного тела дают одну запись (тело), иначе
    /// radial force применится к нему несколько раз.
    fn primitive_components(&self, actor: Entity) -> Vec<Entity>;

    /// Компонент (тело или его collider) симулируется физикой
    fn is_simulating_physics(&self, component: Entity) -> bool;

    /// Impulse уходит в тело, которому принадлежит `component`
    fn add_impulse_at_location(
        &mut self,
        component: Entity,
        impulse: Vec3,
        location: Vec3,
        bone: Option<&str>,
    );

    /// Radial force с linear falloff: strength × (1 - distance / radius)
    ///
    /// `accel_change`: strength задаёт ускорение, масса тела не влияет.
    fn add_radial_force(
        &mut self,
        component: Entity,
        origin: Vec3,
        radius: f32,
        strength: f32,
        accel_change: bool,
    );
}

/// Radial force в точке `point` от взрыва в `origin` (linear falloff)
///
/// Вне радиуса (или радиус ≤ 0) → ZERO. В самом центре направление
/// не определено → ZERO.
pub fn radial_force_at(origin: Vec3, radius: f32, strength: f32, point: Vec3) -> Vec3 {
    if radius <= 0.0 {
        return Vec3::ZERO;
    }

    let delta = point - origin;
    let distance = delta.length();
    if distance > radius {
        return Vec3::ZERO;
    }

    delta.normalize_or_zero() * strength * (1.0 - distance / radius)
}
