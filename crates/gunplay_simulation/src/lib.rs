//! Gunplay Simulation Core
//!
//! ECS-симуляция first-person оружия на Bevy 0.16 + Rapier
//!
//! Слои:
//! - combat: оружие (attach, fire, damage/impulse dispatch): чистая policy + systems
//! - input: mapping contexts и routing нажатий в FireIntent
//! - physics: Rapier адаптер за `PhysicsApi` (ray cast, overlap, impulses)
//! - components: персонаж, здоровье, attachment sockets
//!
//! Хост (headless binary, внешний движок) шлёт события: input, attach,
//! попадания снарядов. Наружу уходят cues, impacts, урон.

use bevy::prelude::*;

// Публичные модули
pub mod combat;
pub mod components;
pub mod config;
pub mod input;
pub mod logger;
pub mod physics;

// Re-export базовых типов для удобства
pub use combat::{
    AttachDeclined, AttachError, AttachWeaponRequest, CombatPlugin, DamageDealt, DamageRequest,
    EntityDied, FireCue, FireIntent, HitscanImpact, ImpulseKind, Projectile, ProjectileImpact,
    SpawnProjectile, Weapon, WeaponAttached, WeaponDamageType, WeaponEndPlay, WeaponKind,
    WeaponSet,
};
pub use components::*;
pub use config::{ConfigError, WeaponConfig};
pub use input::{
    InputRouting, InputRoutingPlugin, MappingContext, MappingContexts, RawInputPressed,
};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel,
    LogPrinter,
};

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Rapier plugin добавляет хост: без него ray cast/overlap просто ничего не находят.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz: шаг Rapier и перевод radial force → impulse
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .add_plugins((InputRoutingPlugin, CombatPlugin));
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}
