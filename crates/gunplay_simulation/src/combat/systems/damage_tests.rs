//! Tests for damage resolution system.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::combat::{
        radial_damage_scale, DamageClass, DamageDealt, DamageRequest, EntityDied,
    };
    use crate::components::{Dead, Health};
    use crate::physics::HitRecord;

    fn damage_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<DamageRequest>()
            .add_event::<DamageDealt>()
            .add_event::<EntityDied>()
            .add_systems(Update, crate::combat::systems::resolve_damage_requests);
        app
    }

    fn collect<E: Event + Clone>(app: &App) -> Vec<E> {
        let events = app.world().resource::<Events<E>>();
        let mut cursor = events.get_cursor();
        cursor.read(events).cloned().collect()
    }

    fn spawn_target(app: &mut App, health: f32, position: Vec3) -> Entity {
        app.world_mut()
            .spawn((Health::new(health), GlobalTransform::from_translation(position)))
            .id()
    }

    #[test]
    fn test_radial_damage_scale() {
        assert_eq!(radial_damage_scale(0.0, 4.0), 1.0);
        assert_eq!(radial_damage_scale(2.0, 4.0), 0.5);
        assert_eq!(radial_damage_scale(4.0, 4.0), 0.0);
        assert_eq!(radial_damage_scale(5.0, 4.0), 0.0);
        assert_eq!(radial_damage_scale(1.0, 0.0), 0.0);
    }

    #[test]
    fn test_point_damage_reduces_health() {
        let mut app = damage_app();
        let target = spawn_target(&mut app, 100.0, Vec3::ZERO);
        let shooter = Entity::from_raw(900);

        app.world_mut().send_event(DamageRequest::Point {
            target,
            amount: 30.0,
            direction: Vec3::NEG_Z,
            hit: HitRecord::new(target, Vec3::ZERO, Vec3::Z),
            instigator: Some(shooter),
            causer: shooter,
            class: DamageClass::new("ballistic"),
        });
        app.update();

        assert_eq!(app.world().get::<Health>(target).map(|h| h.current), Some(70.0));

        let dealt = collect::<DamageDealt>(&app);
        assert_eq!(dealt.len(), 1);
        assert_eq!(dealt[0].damage, 30.0);
        assert_eq!(dealt[0].class, DamageClass::new("ballistic"));
        assert!(!dealt[0].target_died);
        assert!(collect::<EntityDied>(&app).is_empty());
    }

    #[test]
    fn test_lethal_damage_marks_dead_once() {
        let mut app = damage_app();
        let target = spawn_target(&mut app, 20.0, Vec3::ZERO);
        let shooter = Entity::from_raw(900);

        for _ in 0..2 {
            app.world_mut().send_event(DamageRequest::Undirected {
                target,
                amount: 50.0,
                instigator: Some(shooter),
                causer: shooter,
                class: DamageClass::default(),
            });
        }
        app.update();

        let dealt = collect::<DamageDealt>(&app);
        // Второй запрос по трупу игнорируется
        assert_eq!(dealt.len(), 1);
        assert_eq!(dealt[0].damage, 20.0);
        assert!(dealt[0].target_died);

        let died = collect::<EntityDied>(&app);
        assert_eq!(died, vec![EntityDied { entity: target, killer: Some(shooter) }]);
        assert!(app.world().get::<Dead>(target).is_some());
    }

    #[test]
    fn test_radial_damage_falloff_and_ignore() {
        let mut app = damage_app();
        let near = spawn_target(&mut app, 100.0, Vec3::new(1.0, 0.0, 0.0));
        let far = spawn_target(&mut app, 100.0, Vec3::new(10.0, 0.0, 0.0));
        let ignored = spawn_target(&mut app, 100.0, Vec3::ZERO);
        let rocket = Entity::from_raw(901);

        app.world_mut().send_event(DamageRequest::Radial {
            amount: 40.0,
            origin: Vec3::ZERO,
            radius: 4.0,
            class: DamageClass::new("explosive"),
            ignore: vec![ignored],
            causer: rocket,
            instigator: None,
        });
        app.update();

        // 1m из 4m → 0.75 × 40 = 30
        let near_health = app.world().get::<Health>(near).map(|h| h.current).unwrap_or_default();
        assert!((near_health - 70.0).abs() < 1e-4, "near = {}", near_health);
        assert_eq!(app.world().get::<Health>(far).map(|h| h.current), Some(100.0));
        assert_eq!(app.world().get::<Health>(ignored).map(|h| h.current), Some(100.0));

        let dealt = collect::<DamageDealt>(&app);
        assert_eq!(dealt.len(), 1);
        assert_eq!(dealt[0].target, near);
        assert_eq!(dealt[0].causer, rocket);
    }
}
