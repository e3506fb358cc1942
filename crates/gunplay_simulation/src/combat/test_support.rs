//! Recording double для `PhysicsApi` + фабрики тестовых данных

use bevy::prelude::*;
use bevy_rapier3d::prelude::Group;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::components::CharacterView;
use crate::physics::{HitRecord, PhysicsApi};

#[derive(Debug, Clone, PartialEq)]
pub struct RayCastCall {
    pub origin: Vec3,
    pub direction: Vec3,
    pub max_distance: f32,
    pub channel: Group,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlapCall {
    pub center: Vec3,
    pub radius: f32,
    pub object_types: Group,
    pub ignore: Vec<Entity>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImpulseCall {
    pub component: Entity,
    pub impulse: Vec3,
    pub location: Vec3,
    pub bone: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadialForceCall {
    pub component: Entity,
    pub origin: Vec3,
    pub radius: f32,
    pub strength: f32,
    pub accel_change: bool,
}

/// Отвечает заранее заданными результатами и пишет все вызовы
#[derive(Debug, Default)]
pub struct RecordingPhysics {
    pub ray_hit: Option<HitRecord>,
    pub overlap_result: Vec<Entity>,
    pub simulating: HashSet<Entity>,
    pub components: HashMap<Entity, Vec<Entity>>,

    pub ray_casts: RefCell<Vec<RayCastCall>>,
    pub overlaps: RefCell<Vec<OverlapCall>>,
    pub impulses: Vec<ImpulseCall>,
    pub radial_forces: Vec<RadialForceCall>,
}

impl RecordingPhysics {
    pub fn simulate(mut self, component: Entity) -> Self {
        self.simulating.insert(component);
        self
    }

    pub fn with_ray_hit(mut self, hit: HitRecord) -> Self {
        self.ray_hit = Some(hit);
        self
    }

    pub fn with_overlap(mut self, actors: Vec<Entity>) -> Self {
        self.overlap_result = actors;
        self
    }
}

impl PhysicsApi for RecordingPhysics {
    fn cast_ray(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        channel: Group,
        _ignore: &[Entity],
    ) -> Option<HitRecord> {
        self.ray_casts.borrow_mut().push(RayCastCall {
            origin,
            direction,
            max_distance,
            channel,
        });
        self.ray_hit.clone()
    }

    fn overlap_sphere(
        &self,
        center: Vec3,
        radius: f32,
        object_types: Group,
        ignore: &[Entity],
    ) -> Vec<Entity> {
        self.overlaps.borrow_mut().push(OverlapCall {
            center,
            radius,
            object_types,
            ignore: ignore.to_vec(),
        });
        self.overlap_result
            .iter()
            .copied()
            .filter(|actor| !ignore.contains(actor))
            .collect()
    }

    fn primitive_components(&self, actor: Entity) -> Vec<Entity> {
        self.components.get(&actor).cloned().unwrap_or_else(|| vec![actor])
    }

    fn is_simulating_physics(&self, component: Entity) -> bool {
        self.simulating.contains(&component)
    }

    fn add_impulse_at_location(
        &mut self,
        component: Entity,
        impulse: Vec3,
        location: Vec3,
        bone: Option<&str>,
    ) {
        self.impulses.push(ImpulseCall {
            component,
            impulse,
            location,
            bone: bone.map(str::to_owned),
        });
    }

    fn add_radial_force(
        &mut self,
        component: Entity,
        origin: Vec3,
        radius: f32,
        strength: f32,
        accel_change: bool,
    ) {
        self.radial_forces.push(RadialForceCall {
            component,
            origin,
            radius,
            strength,
            accel_change,
        });
    }
}

pub const CHARACTER: Entity = Entity::from_raw(10);
pub const CONTROLLER: Entity = Entity::from_raw(11);
pub const MESH_1P: Entity = Entity::from_raw(12);
pub const WEAPON: Entity = Entity::from_raw(20);
pub const TARGET: Entity = Entity::from_raw(30);
pub const PROJECTILE: Entity = Entity::from_raw(40);

pub fn character_view() -> CharacterView {
    CharacterView {
        entity: CHARACTER,
        controller: Some(CONTROLLER),
        location: Vec3::new(0.0, 1.0, 0.0),
        mesh_1p: MESH_1P,
        camera_forward: Vec3::NEG_Z,
    }
}

pub fn hit_on(target: Entity) -> HitRecord {
    HitRecord {
        actor: target,
        component: Some(target),
        impact_point: Vec3::new(0.0, 1.0, -10.0),
        impact_normal: Vec3::Z,
        bone: Some("spine_01".into()),
    }
}
