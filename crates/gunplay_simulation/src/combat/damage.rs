//! Damage boundary
//!
//! Weapon policy не трогает Health напрямую: она отдаёт `DamageRequest`
//! через `DamageApi`. В ECS запросы уходят событиями в
//! `resolve_damage_requests` (systems/damage.rs).

use bevy::prelude::*;

use super::DamageClass;
use crate::physics::HitRecord;

/// Запрос на урон (point / radial / undirected)
#[derive(Event, Debug, Clone, PartialEq)]
pub enum DamageRequest {
    /// Урон в точке попадания с направлением
    Point {
        target: Entity,
        amount: f32,
        direction: Vec3,
        hit: HitRecord,
        instigator: Option<Entity>,
        causer: Entity,
        class: DamageClass,
    },

    /// Урон по сфере, linear falloff от центра
    Radial {
        amount: f32,
        origin: Vec3,
        radius: f32,
        class: DamageClass,
        ignore: Vec<Entity>,
        causer: Entity,
        instigator: Option<Entity>,
    },

    /// Урон без направления
    Undirected {
        target: Entity,
        amount: f32,
        instigator: Option<Entity>,
        causer: Entity,
        class: DamageClass,
    },
}

impl DamageRequest {
    pub fn causer(&self) -> Entity {
        match self {
            DamageRequest::Point { causer, .. }
            | DamageRequest::Radial { causer, .. }
            | DamageRequest::Undirected { causer, .. } => *causer,
        }
    }

    pub fn instigator(&self) -> Option<Entity> {
        match self {
            DamageRequest::Point { instigator, .. }
            | DamageRequest::Radial { instigator, .. }
            | DamageRequest::Undirected { instigator, .. } => *instigator,
        }
    }

    pub fn class(&self) -> &DamageClass {
        match self {
            DamageRequest::Point { class, .. }
            | DamageRequest::Radial { class, .. }
            | DamageRequest::Undirected { class, .. } => class,
        }
    }
}

/// Приёмник damage запросов (engine-side)
pub trait DamageApi {
    fn deal(&mut self, request: DamageRequest);
}

/// Системы копят запросы в Vec и пишут пачкой в EventWriter
impl DamageApi for Vec<DamageRequest> {
    fn deal(&mut self, request: DamageRequest) {
        self.push(request);
    }
}

/// Событие: урон нанесен
///
/// Генерируется после применения damage к Health.
/// Используется для UI, звуков, эффектов.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct DamageDealt {
    /// Контроллер, который инициировал урон
    pub instigator: Option<Entity>,
    /// Что нанесло урон (снаряд или персонаж)
    pub causer: Entity,
    pub target: Entity,
    pub damage: f32,
    pub class: DamageClass,
    pub target_died: bool,
}

/// Событие: entity умер (health <= 0)
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct EntityDied {
    pub entity: Entity,
    pub killer: Option<Entity>,
}

/// Множитель radial урона на расстоянии `distance`
///
/// Linear falloff: 1.0 в центре, 0.0 на границе, снаружи 0.0.
pub fn radial_damage_scale(distance: f32, radius: f32) -> f32 {
    if radius <= 0.0 || distance > radius {
        return 0.0;
    }
    (1.0 - distance / radius).clamp(0.0, 1.0)
}
