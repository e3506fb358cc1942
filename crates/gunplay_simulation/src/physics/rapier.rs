//! `PhysicsApi` на bevy_rapier3d
//!
//! - collider → тело: поднимаемся по `ChildOf` до entity с `RigidBody`
//! - simulating = тело `RigidBody::Dynamic`
//! - impulse копится в `ExternalImpulse` тела (Rapier сбрасывает его после step)
//! - radial force переводится в impulse за один fixed step
//!   (ExternalForce в Rapier persistent, а нам нужен one-shot)
//! - масса для accel_change берётся из Rapier rigid-body set

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::{radial_force_at, HitRecord, PhysicsApi};
use crate::logger::{log, log_warning};

#[derive(SystemParam)]
pub struct RapierPhysics<'w, 's> {
    rapier: ReadRapierContext<'w, 's>,
    bodies: Query<
        'w,
        's,
        (
            &'static RigidBody,
            &'static GlobalTransform,
            Option<&'static ReadMassProperties>,
        ),
    >,
    parents: Query<'w, 's, &'static ChildOf>,
    children: Query<'w, 's, &'static Children>,
    colliders: Query<'w, 's, (), With<Collider>>,
    impulses: Query<'w, 's, &'static mut ExternalImpulse>,
    commands: Commands<'w, 's>,
    time: Res<'w, Time<Fixed>>,
}

impl RapierPhysics<'_, '_> {
    /// Collider → актор: поднимаемся по иерархии до entity с RigidBody
    fn actor_of(&self, collider: Entity) -> Entity {
        self.body_of(collider).unwrap_or(collider)
    }

    /// Тело, которому принадлежит collider (или само тело)
    fn body_of(&self, component: Entity) -> Option<Entity> {
        let mut current = component;
        loop {
            if self.bodies.contains(current) {
                return Some(current);
            }
            current = self.parents.get(current).ok()?.parent();
        }
    }

    fn is_ignored(&self, collider: Entity, ignore: &[Entity]) -> bool {
        ignore.contains(&collider) || ignore.contains(&self.actor_of(collider))
    }

    /// Масса тела после последнего step
    ///
    /// Rapier считает её из colliders; `ReadMassProperties` (если есть) как запасной путь.
    fn body_mass(&self, body: Entity) -> Option<f32> {
        let from_context = self.rapier.single().ok().and_then(|context| {
            let handle = context.entity2body().get(&body).copied()?;
            context.rigidbody_set.bodies.get(handle).map(|rb| rb.mass())
        });

        from_context
            .filter(|mass| *mass > 0.0)
            .or_else(|| {
                let (_, _, props) = self.bodies.get(body).ok()?;
                props.map(|props| props.get().mass).filter(|mass| *mass > 0.0)
            })
    }

    fn push_impulse(&mut self, body: Entity, impulse: Vec3, torque_impulse: Vec3) {
        if let Ok(mut external) = self.impulses.get_mut(body) {
            external.impulse += impulse;
            external.torque_impulse += torque_impulse;
            return;
        }

        // Body без ExternalImpulse: вставляем (второй impulse в этом же кадре перезапишет первый)
        log(&format!("⚠️ Body {:?} has no ExternalImpulse, inserting", body));
        self.commands.entity(body).insert(ExternalImpulse {
            impulse,
            torque_impulse,
        });
    }
}

impl PhysicsApi for RapierPhysics<'_, '_> {
    fn cast_ray(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        channel: Group,
        ignore: &[Entity],
    ) -> Option<HitRecord> {
        let direction = direction.normalize_or_zero();
        if direction == Vec3::ZERO || max_distance <= 0.0 {
            return None;
        }

        let Ok(context) = self.rapier.single() else {
            return None;
        };

        let predicate = |collider: Entity| !self.is_ignored(collider, ignore);
        let filter = QueryFilter::new()
            .groups(CollisionGroups::new(channel, channel))
            .predicate(&predicate);

        let (collider, intersection) =
            context.cast_ray_and_get_normal(origin, direction, max_distance, true, filter)?;

        Some(HitRecord {
            actor: self.actor_of(collider),
            component: Some(collider),
            impact_point: intersection.point,
            impact_normal: intersection.normal,
            bone: None,
        })
    }

    fn overlap_sphere(
        &self,
        center: Vec3,
        radius: f32,
        object_types: Group,
        ignore: &[Entity],
    ) -> Vec<Entity> {
        let mut actors = Vec::new();
        if radius <= 0.0 {
            return actors;
        }

        let Ok(context) = self.rapier.single() else {
            return actors;
        };

        let shape = Collider::ball(radius);
        let predicate = |collider: Entity| !self.is_ignored(collider, ignore);
        let filter = QueryFilter::new()
            .groups(CollisionGroups::new(object_types, object_types))
            .predicate(&predicate);

        context.intersect_shape(center, Quat::IDENTITY, &*shape.raw, filter, |collider| {
            let actor = self.actor_of(collider);
            if !actors.contains(&actor) {
                actors.push(actor);
            }
            true // продолжаем поиск
        });

        actors
    }

    fn primitive_components(&self, actor: Entity) -> Vec<Entity> {
        let mut bodies = Vec::new();
        let mut pending = vec![actor];

        // Обход иерархии актора: каждый collider/body → его тело, без повторов
        while let Some(entity) = pending.pop() {
            if self.bodies.contains(entity) || self.colliders.contains(entity) {
                if let Some(body) = self.body_of(entity) {
                    if !bodies.contains(&body) {
                        bodies.push(body);
                    }
                }
            }
            if let Ok(children) = self.children.get(entity) {
                pending.extend((**children).iter().copied());
            }
        }

        bodies
    }

    fn is_simulating_physics(&self, component: Entity) -> bool {
        self.body_of(component)
            .is_some_and(|body| matches!(self.bodies.get(body), Ok((RigidBody::Dynamic, _, _))))
    }

    fn add_impulse_at_location(
        &mut self,
        component: Entity,
        impulse: Vec3,
        location: Vec3,
        bone: Option<&str>,
    ) {
        let Some(body) = self.body_of(component) else {
            return;
        };
        let Ok((_, transform, _)) = self.bodies.get(body) else {
            return;
        };

        if let Some(bone) = bone {
            log(&format!("Bone {:?} ignored: impulse applied to body {:?}", bone, body));
        }

        // Impulse не в центре тела → добавляем вращение
        let torque_impulse = (location - transform.translation()).cross(impulse);
        self.push_impulse(body, impulse, torque_impulse);
    }

    fn add_radial_force(
        &mut self,
        component: Entity,
        origin: Vec3,
        radius: f32,
        strength: f32,
        accel_change: bool,
    ) {
        let Some(body) = self.body_of(component) else {
            return;
        };
        let Ok((_, transform, _)) = self.bodies.get(body) else {
            return;
        };

        let mut force = radial_force_at(origin, radius, strength, transform.translation());
        if force == Vec3::ZERO {
            return;
        }

        // accel_change: strength это ускорение → F = m·a
        if accel_change {
            let Some(mass) = self.body_mass(body) else {
                log_warning(&format!("Radial force skipped: body {:?} has no mass yet", body));
                return;
            };
            force *= mass;
        }

        let step = self.time.timestep().as_secs_f32();
        self.push_impulse(body, force * step, Vec3::ZERO);
    }
}
