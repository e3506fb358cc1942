//! Weapon systems: fire intents, снаряды, попадания снарядов

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::combat::{
    apply_damage, fire, DamageRequest, FireCue, FireIntent, HitscanImpact, Projectile,
    ProjectileImpact, ProjectileView, SpawnProjectile, Weapon, WeaponPose,
};
use crate::components::{Character, CharacterView};
use crate::logger::{log, log_warning};
use crate::physics::{get_layer_name, projectile_filter, RapierPhysics, PROJECTILE};

/// Радиус физического тела снаряда (не путать с radial радиусом)
pub const PROJECTILE_BODY_RADIUS: f32 = 0.05;

/// Собрать `CharacterView` владельца оружия
pub fn owner_view(
    owner: Option<Entity>,
    characters: &Query<(&Character, &GlobalTransform)>,
    transforms: &Query<&GlobalTransform>,
) -> Option<CharacterView> {
    let owner = owner?;
    let (character, transform) = characters.get(owner).ok()?;
    let camera = transforms.get(character.camera).ok();

    Some(CharacterView::build(owner, character, transform, camera))
}

/// System: FireIntent → fire по варианту оружия
///
/// Урон уходит в `DamageRequest` (resolve_damage_requests),
/// cues/impact/снаряд: отдельными событиями.
pub fn process_fire_intents(
    mut intents: EventReader<FireIntent>,
    mut weapons: Query<(&mut Weapon, &GlobalTransform)>,
    characters: Query<(&Character, &GlobalTransform)>,
    transforms: Query<&GlobalTransform>,
    mut physics: RapierPhysics,
    mut damage_events: EventWriter<DamageRequest>,
    mut cue_events: EventWriter<FireCue>,
    mut impact_events: EventWriter<HitscanImpact>,
    mut spawn_events: EventWriter<SpawnProjectile>,
) {
    let mut requests: Vec<DamageRequest> = Vec::new();

    for intent in intents.read() {
        let Ok((mut weapon, transform)) = weapons.get_mut(intent.weapon) else {
            log_warning(&format!("FireIntent: weapon {:?} not found", intent.weapon));
            continue;
        };

        let character = owner_view(weapon.owner, &characters, &transforms);
        let pose = WeaponPose {
            entity: intent.weapon,
            location: transform.translation(),
            rotation: transform.rotation(),
        };

        let outcome = fire(&mut weapon, &pose, character.as_ref(), &mut physics, &mut requests);

        cue_events.write_batch(outcome.cues);

        if let Some(impact) = outcome.impact {
            log(&format!(
                "🎯 Hitscan {:?} hit {:?} at {:?}",
                impact.weapon, impact.actor, impact.impact_point
            ));
            impact_events.write(impact);
        }

        if let Some(projectile) = outcome.projectile {
            spawn_events.write(projectile);
        }
    }

    damage_events.write_batch(requests);
}

/// System: SpawnProjectile → Rapier тело снаряда
pub fn spawn_projectiles(mut commands: Commands, mut events: EventReader<SpawnProjectile>) {
    for event in events.read() {
        let projectile = commands
            .spawn((
                Projectile {
                    weapon: event.weapon,
                    radius: event.radius,
                },
                Transform::from_translation(event.location),
                RigidBody::Dynamic,
                Collider::ball(PROJECTILE_BODY_RADIUS),
                Velocity::linear(event.velocity),
                CollisionGroups::new(PROJECTILE, projectile_filter()),
                Ccd::enabled(),
                ActiveEvents::COLLISION_EVENTS,
                ExternalImpulse::default(),
            ))
            .id();

        log(&format!(
            "Projectile {:?} spawned by {:?} at {:?} (layer {})",
            projectile,
            event.weapon,
            event.location,
            get_layer_name(PROJECTILE)
        ));
    }
}

/// System: ProjectileImpact → apply_damage с снарядом
pub fn process_projectile_impacts(
    mut impacts: EventReader<ProjectileImpact>,
    mut weapons: Query<&mut Weapon>,
    projectiles: Query<(&Projectile, &GlobalTransform, Option<&Velocity>)>,
    characters: Query<(&Character, &GlobalTransform)>,
    transforms: Query<&GlobalTransform>,
    mut physics: RapierPhysics,
    mut damage_events: EventWriter<DamageRequest>,
) {
    let mut requests: Vec<DamageRequest> = Vec::new();

    for impact in impacts.read() {
        let Ok((projectile, transform, velocity)) = projectiles.get(impact.projectile) else {
            log_warning(&format!("ProjectileImpact: projectile {:?} not found", impact.projectile));
            continue;
        };
        let Ok(mut weapon) = weapons.get_mut(projectile.weapon) else {
            // Оружие уже despawned: снаряд "осиротел", урон не атрибутировать
            continue;
        };

        let view = ProjectileView {
            entity: impact.projectile,
            location: transform.translation(),
            radius: projectile.radius,
            velocity: velocity.map(|v| v.linvel).unwrap_or(Vec3::ZERO),
        };
        let character = owner_view(weapon.owner, &characters, &transforms);

        apply_damage(
            &mut weapon,
            character.as_ref(),
            impact.target,
            &impact.hit,
            Some(&view),
            &mut physics,
            &mut requests,
        );
    }

    damage_events.write_batch(requests);
}

/// System: снаряд, который попал, уходит из мира
pub fn despawn_spent_projectiles(
    mut commands: Commands,
    mut impacts: EventReader<ProjectileImpact>,
    projectiles: Query<(), With<Projectile>>,
) {
    for impact in impacts.read() {
        if projectiles.contains(impact.projectile) {
            commands.entity(impact.projectile).despawn();
        }
    }
}
