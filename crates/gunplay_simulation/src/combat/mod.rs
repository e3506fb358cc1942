//! Combat module: оружие first-person персонажа
//!
//! Policy (чистые функции, без Query):
//! - attach.rs: attach_weapon / end_play (owner, ignore-list, input mapping)
//! - fire.rs: fire по варианту (base / hitscan / projectile)
//! - dispatch.rs: apply_damage (damage + impulse + radial force)
//!
//! ECS wiring: systems/: события → policy → события.
//!
//! Engine-side границы:
//! - `PhysicsApi` (physics/): Rapier
//! - `DamageApi`: DamageRequest события → resolve_damage_requests
//! - `InputBinder` (input/): InputRouting resource

use bevy::prelude::*;

pub mod attach;
pub mod damage;
pub mod damage_type;
pub mod dispatch;
pub mod events;
pub mod fire;
pub mod systems;
pub mod weapon;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export основных типов
pub use attach::{attach_weapon, end_play, AttachError, AttachTarget};
pub use damage::{radial_damage_scale, DamageApi, DamageDealt, DamageRequest, EntityDied};
pub use damage_type::{DamageClass, ImpulseKind, WeaponDamageType};
pub use dispatch::apply_damage;
pub use events::*;
pub use fire::{fire, fire_base, fire_hitscan, fire_projectile, FireOutcome, WeaponPose};
pub use weapon::{
    Projectile, ProjectileView, Weapon, WeaponKind, DEFAULT_HITSCAN_RANGE,
    DEFAULT_IMPULSE_STRENGTH, DEFAULT_MUZZLE_OFFSET,
};

/// Порядок weapon систем внутри кадра
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum WeaponSet {
    /// Raw input → FireIntent
    Input,
    /// Attach, fire, снаряды, попадания
    Weapons,
    /// DamageRequest → Health
    Damage,
    /// End play (teardown + despawn)
    Teardown,
}

/// Combat Plugin
///
/// Регистрирует weapon системы в Update (один выстрел = один кадр).
///
/// Порядок выполнения:
/// 1. route_input_presses / trigger_bound_actions: input → FireIntent
/// 2. process_attach_requests: attach до fire того же кадра
/// 3. process_fire_intents: fire по варианту
/// 4. spawn_projectiles / process_projectile_impacts / despawn_spent_projectiles
/// 5. resolve_damage_requests: DamageRequest → Health, DamageDealt, EntityDied
/// 6. process_weapon_end_play: mapping снимается до despawn
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<FireIntent>()
            .add_event::<FireCue>()
            .add_event::<HitscanImpact>()
            .add_event::<SpawnProjectile>()
            .add_event::<ProjectileImpact>()
            .add_event::<AttachWeaponRequest>()
            .add_event::<WeaponAttached>()
            .add_event::<AttachDeclined>()
            .add_event::<WeaponEndPlay>()
            .add_event::<DamageRequest>()
            .add_event::<DamageDealt>()
            .add_event::<EntityDied>();

        app.configure_sets(
            Update,
            (
                WeaponSet::Input,
                WeaponSet::Weapons,
                WeaponSet::Damage,
                WeaponSet::Teardown,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                (
                    crate::input::route_input_presses,
                    crate::input::trigger_bound_actions,
                )
                    .chain()
                    .in_set(WeaponSet::Input),
                (
                    systems::process_attach_requests,
                    systems::process_fire_intents,
                    systems::spawn_projectiles,
                    systems::process_projectile_impacts,
                    systems::despawn_spent_projectiles,
                )
                    .chain()
                    .in_set(WeaponSet::Weapons),
                systems::resolve_damage_requests.in_set(WeaponSet::Damage),
                systems::process_weapon_end_play.in_set(WeaponSet::Teardown),
            ),
        );
    }
}
