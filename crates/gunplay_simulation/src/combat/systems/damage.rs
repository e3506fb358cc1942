//! Damage resolution: DamageRequest → Health

use bevy::prelude::*;

use crate::combat::{radial_damage_scale, DamageDealt, DamageRequest, EntityDied};
use crate::components::{Dead, Health};
use crate::logger::log_info;

/// Система: применить DamageRequest события к Health
///
/// - Point / Undirected → полный урон по target
/// - Radial → все живые Health в радиусе (кроме ignore и causer),
///   урон × (1 - d / radius)
pub fn resolve_damage_requests(
    mut commands: Commands,
    mut requests: EventReader<DamageRequest>,
    mut targets: Query<(Entity, &mut Health, Option<&GlobalTransform>)>,
    mut dealt: EventWriter<DamageDealt>,
    mut died: EventWriter<EntityDied>,
) {
    for request in requests.read() {
        let hits: Vec<(Entity, f32)> = match request {
            DamageRequest::Point { target, amount, .. }
            | DamageRequest::Undirected { target, amount, .. } => vec![(*target, *amount)],
            DamageRequest::Radial {
                amount,
                origin,
                radius,
                ignore,
                causer,
                ..
            } => targets
                .iter()
                .filter(|(entity, _, _)| entity != causer && !ignore.contains(entity))
                .filter_map(|(entity, _, transform)| {
                    let distance = transform?.translation().distance(*origin);
                    let scaled = amount * radial_damage_scale(distance, *radius);
                    (scaled > 0.0).then_some((entity, scaled))
                })
                .collect(),
        };

        for (target, amount) in hits {
            let Ok((_, mut health, _)) = targets.get_mut(target) else {
                continue;
            };
            if !health.is_alive() {
                continue;
            }

            let applied = health.take_damage(amount);
            let target_died = !health.is_alive();

            dealt.write(DamageDealt {
                instigator: request.instigator(),
                causer: request.causer(),
                target,
                damage: applied,
                class: request.class().clone(),
                target_died,
            });

            if target_died {
                died.write(EntityDied {
                    entity: target,
                    killer: request.instigator(),
                });
                commands.entity(target).insert(Dead);

                log_info(&format!("Entity {:?} killed by {:?}", target, request.instigator()));
            }
        }
    }
}
