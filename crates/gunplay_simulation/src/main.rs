//! Headless симуляция gunplay
//!
//! Rapier мир без рендера: персонаж с винтовкой стреляет по ящику,
//! в консоль выводится урон и импульсы.

use bevy::prelude::*;
use bevy::transform::TransformPlugin;
use bevy_rapier3d::prelude::*;

use gunplay_simulation::physics::{PHYSICS_BODY, VISIBILITY};
use gunplay_simulation::{
    create_headless_app, log_error, AttachWeaponRequest, AttachmentSockets, Character, DamageDealt,
    Health, InputRouting, MappingContext, MappingContexts, RawInputPressed, SimulationPlugin,
    WeaponConfig, GRIP_POINT,
};
use gunplay_simulation::input::InputKey;

const RIFLE_CONFIG: &str = r#"{
    "kind": { "type": "hitscan", "range": 50.0 },
    "damage_type": { "damage": 25.0, "impulse_kind": "ray", "damage_class": "ballistic" },
    "impulse_strength": 40.0,
    "fire_sound": "sounds/rifle_shot",
    "fire_animation": "animations/rifle_fire",
    "mappings": {
        "id": "WeaponContext",
        "mappings": [ { "key": "MouseLeft", "action": "Fire" } ]
    }
}"#;

fn main() {
    println!("Starting gunplay headless simulation");

    let config = match WeaponConfig::from_json_str(RIFLE_CONFIG) {
        Ok(config) => config,
        Err(err) => {
            log_error(&format!("Rifle config rejected: {}", err));
            return;
        }
    };

    let mut app = create_headless_app();
    app.add_plugins((
        TransformPlugin,
        RapierPhysicsPlugin::<NoUserData>::default(),
        SimulationPlugin,
    ));

    if let Some(context) = config.mappings.clone() {
        app.world_mut().resource_mut::<MappingContexts>().insert(context);
    }
    app.world_mut()
        .resource_mut::<MappingContexts>()
        .insert(MappingContext::new("Default").map("Space", "Jump"));

    let world = app.world_mut();

    // Персонаж: контроллер + меш рук + камера на уровне глаз
    let controller = world.spawn_empty().id();
    world.resource_mut::<InputRouting>().register_player(controller);

    let mesh = world
        .spawn((
            Transform::default(),
            AttachmentSockets::default()
                .with_socket(GRIP_POINT, Transform::from_xyz(0.2, -0.2, -0.3)),
        ))
        .id();
    let camera = world.spawn(Transform::from_xyz(0.0, 1.7, 0.0)).id();
    let character = world
        .spawn((
            Character {
                controller: Some(controller),
                mesh_1p: mesh,
                camera,
            },
            Transform::from_xyz(0.0, 1.7, 0.0),
        ))
        .id();
    world.entity_mut(character).add_children(&[mesh]);

    // Цель: физический ящик в 10м перед камерой
    let target = world
        .spawn((
            Health::new(100.0),
            Transform::from_xyz(0.0, 1.7, -10.0),
            RigidBody::Dynamic,
            Collider::cuboid(0.5, 0.5, 0.5),
            CollisionGroups::new(VISIBILITY | PHYSICS_BODY, Group::ALL),
            GravityScale(0.0),
            ExternalImpulse::default(),
        ))
        .id();

    let weapon = world.spawn((config.into_weapon(), Transform::default())).id();
    world.send_event(AttachWeaponRequest { weapon, character });

    // Rapier подхватывает colliders в первом кадре
    app.update();
    app.update();

    for shot in 0..5 {
        app.world_mut().send_event(RawInputPressed {
            controller,
            key: InputKey::new("MouseLeft"),
        });
        app.update();

        let health = app.world().get::<Health>(target).map(|h| h.current);
        println!("Shot {}: target health {:?}", shot, health);
    }

    let events = app.world().resource::<Events<DamageDealt>>();
    let mut cursor = events.get_cursor();
    for dealt in cursor.read(events) {
        println!(
            "DamageDealt: {:.1} {} → {:?} (died: {})",
            dealt.damage, dealt.class.0, dealt.target, dealt.target_died
        );
    }

    println!("Simulation complete!");
}
