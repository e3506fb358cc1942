//! Tests for `RapierPhysics` на живом Rapier мире.
//!
//! Headless app: MinimalPlugins + TransformPlugin + RapierPhysicsPlugin,
//! время идёт ровно по 1/60 за update. Несколько update до запроса,
//! чтобы colliders попали в query pipeline и Rapier посчитал массы.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::ecs::system::RunSystemOnce;
    use bevy::prelude::*;
    use bevy::time::TimeUpdateStrategy;
    use bevy::transform::TransformPlugin;
    use bevy_rapier3d::prelude::*;

    use crate::physics::{HitRecord, PhysicsApi, RapierPhysics, PHYSICS_BODY, VISIBILITY};

    fn physics_app() -> App {
        let mut app = App::new();
        app.add_plugins((
            MinimalPlugins,
            TransformPlugin,
            RapierPhysicsPlugin::<NoUserData>::default(),
        ))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
            1.0 / 60.0,
        )))
        .insert_resource(Time::<Fixed>::from_hz(60.0));
        app
    }

    fn settle(app: &mut App) {
        for _ in 0..3 {
            app.update();
        }
    }

    /// Dynamic тело без гравитации (куб с half extent `half`)
    fn spawn_box(app: &mut App, position: Vec3, half: f32, groups: Group) -> Entity {
        app.world_mut()
            .spawn((
                Transform::from_translation(position),
                RigidBody::Dynamic,
                Collider::cuboid(half, half, half),
                CollisionGroups::new(groups, Group::ALL),
                GravityScale(0.0),
                Velocity::zero(),
                ExternalImpulse::default(),
            ))
            .id()
    }

    /// Тело без своего collider: colliders дочерние, со смещениями `offsets`
    fn spawn_compound(app: &mut App, position: Vec3, offsets: &[Vec3]) -> (Entity, Vec<Entity>) {
        let world = app.world_mut();
        let body = world
            .spawn((
                Transform::from_translation(position),
                RigidBody::Dynamic,
                GravityScale(0.0),
                Velocity::zero(),
                ExternalImpulse::default(),
            ))
            .id();

        let colliders = offsets
            .iter()
            .map(|offset| {
                world
                    .spawn((
                        Transform::from_translation(*offset),
                        Collider::cuboid(0.5, 0.5, 0.5),
                        CollisionGroups::new(VISIBILITY | PHYSICS_BODY, Group::ALL),
                        ChildOf(body),
                    ))
                    .id()
            })
            .collect();

        (body, colliders)
    }

    /// Луч из начала координат вдоль -Z
    fn cast_forward(app: &mut App, ignore: Vec<Entity>) -> Option<HitRecord> {
        app.world_mut()
            .run_system_once(move |physics: RapierPhysics| {
                physics.cast_ray(Vec3::ZERO, Vec3::NEG_Z, 50.0, VISIBILITY, &ignore)
            })
            .expect("rapier physics param available")
    }

    fn linvel(app: &App, body: Entity) -> Vec3 {
        app.world()
            .get::<Velocity>(body)
            .map(|velocity| velocity.linvel)
            .unwrap_or_default()
    }

    #[test]
    fn test_ray_hit_on_child_collider_reports_body_and_facing_normal() {
        let mut app = physics_app();
        let (body, colliders) = spawn_compound(&mut app, Vec3::new(0.0, 0.0, -10.0), &[Vec3::ZERO]);
        settle(&mut app);

        let hit = cast_forward(&mut app, Vec::new()).expect("box blocks the ray");

        assert_eq!(hit.actor, body);
        assert_eq!(hit.component, Some(colliders[0]));
        assert!((hit.impact_point.z - (-9.5)).abs() < 1e-3, "point = {:?}", hit.impact_point);
        // Нормаль смотрит навстречу лучу
        assert!((hit.impact_normal - Vec3::Z).length() < 1e-3, "normal = {:?}", hit.impact_normal);
        assert!(hit.bone.is_none());
    }

    #[test]
    fn test_ray_skips_ignored_owner() {
        let mut app = physics_app();
        // Владелец стоит на линии огня, его collider дочерний
        let (owner, _) = spawn_compound(&mut app, Vec3::new(0.0, 0.0, -3.0), &[Vec3::ZERO]);
        let target = spawn_box(&mut app, Vec3::new(0.0, 0.0, -10.0), 0.5, VISIBILITY);
        settle(&mut app);

        let blocked = cast_forward(&mut app, Vec::new()).expect("owner blocks");
        assert_eq!(blocked.actor, owner);

        let hit = cast_forward(&mut app, vec![owner]).expect("target behind owner");
        assert_eq!(hit.actor, target);
        assert_eq!(hit.component, Some(target));

        let miss = cast_forward(&mut app, vec![owner, target]);
        assert!(miss.is_none());
    }

    #[test]
    fn test_overlap_filters_by_physics_body_and_ignore_list() {
        let mut app = physics_app();
        let prop = spawn_box(&mut app, Vec3::new(2.0, 0.0, 0.0), 0.5, VISIBILITY | PHYSICS_BODY);
        let _wall = spawn_box(&mut app, Vec3::new(-2.0, 0.0, 0.0), 0.5, VISIBILITY);
        let ignored = spawn_box(&mut app, Vec3::new(0.0, 2.0, 0.0), 0.5, PHYSICS_BODY);
        let _far = spawn_box(&mut app, Vec3::new(0.0, 0.0, 20.0), 0.5, PHYSICS_BODY);
        settle(&mut app);

        let actors = app
            .world_mut()
            .run_system_once(move |physics: RapierPhysics| {
                physics.overlap_sphere(Vec3::ZERO, 3.0, PHYSICS_BODY, &[ignored])
            })
            .expect("rapier physics param available");

        assert_eq!(actors, vec![prop]);
    }

    #[test]
    fn test_primitive_components_one_entry_per_body() {
        let mut app = physics_app();
        let offsets = [Vec3::new(-0.6, 0.0, 0.0), Vec3::new(0.6, 0.0, 0.0)];
        let (body, _) = spawn_compound(&mut app, Vec3::ZERO, &offsets);
        settle(&mut app);

        let components = app
            .world_mut()
            .run_system_once(move |physics: RapierPhysics| physics.primitive_components(body))
            .expect("rapier physics param available");

        assert_eq!(components, vec![body]);
    }

    #[test]
    fn test_impulse_on_child_collider_moves_owning_body() {
        let mut app = physics_app();
        let (body, colliders) = spawn_compound(&mut app, Vec3::new(0.0, 0.0, -10.0), &[Vec3::ZERO]);
        settle(&mut app);

        let collider = colliders[0];
        let simulating = app
            .world_mut()
            .run_system_once(move |mut physics: RapierPhysics| {
                let simulating = physics.is_simulating_physics(collider);
                let center = Vec3::new(0.0, 0.0, -10.0);
                physics.add_impulse_at_location(collider, Vec3::new(0.0, 0.0, -5.0), center, None);
                simulating
            })
            .expect("rapier physics param available");
        app.update();

        assert!(simulating);
        let velocity = linvel(&app, body);
        assert!(velocity.z < -1.0, "linvel = {:?}", velocity);
        assert!(velocity.x.abs() < 1e-4 && velocity.y.abs() < 1e-4);
    }

    #[test]
    fn test_radial_accel_change_ignores_mass() {
        let mut app = physics_app();
        // Масса 1 и 8 (density 1)
        let light = spawn_box(&mut app, Vec3::new(0.0, 0.0, -10.0), 0.5, PHYSICS_BODY);
        let heavy = spawn_box(&mut app, Vec3::new(10.0, 0.0, -10.0), 1.0, PHYSICS_BODY);
        settle(&mut app);

        app.world_mut()
            .run_system_once(move |mut physics: RapierPhysics| {
                // Взрыв в 1м слева от каждого тела, radius 4 → 75% strength
                physics.add_radial_force(light, Vec3::new(-1.0, 0.0, -10.0), 4.0, 100.0, true);
                physics.add_radial_force(heavy, Vec3::new(9.0, 0.0, -10.0), 4.0, 100.0, true);
            })
            .expect("rapier physics param available");
        app.update();

        // Δv = 75 × (1/60)
        for body in [light, heavy] {
            let velocity = linvel(&app, body);
            assert!((velocity.x - 1.25).abs() < 1e-2, "{:?} linvel = {:?}", body, velocity);
            assert!(velocity.y.abs() < 1e-4 && velocity.z.abs() < 1e-4);
        }
    }

    #[test]
    fn test_radial_force_without_accel_change_scales_with_mass() {
        let mut app = physics_app();
        let light = spawn_box(&mut app, Vec3::new(0.0, 0.0, -10.0), 0.5, PHYSICS_BODY);
        let heavy = spawn_box(&mut app, Vec3::new(10.0, 0.0, -10.0), 1.0, PHYSICS_BODY);
        settle(&mut app);

        app.world_mut()
            .run_system_once(move |mut physics: RapierPhysics| {
                physics.add_radial_force(light, Vec3::new(-1.0, 0.0, -10.0), 4.0, 100.0, false);
                physics.add_radial_force(heavy, Vec3::new(9.0, 0.0, -10.0), 4.0, 100.0, false);
            })
            .expect("rapier physics param available");
        app.update();

        let light_speed = linvel(&app, light).x;
        let heavy_speed = linvel(&app, heavy).x;
        assert!((light_speed - 1.25).abs() < 1e-2, "light = {}", light_speed);
        assert!((heavy_speed - 1.25 / 8.0).abs() < 1e-2, "heavy = {}", heavy_speed);
    }
}
