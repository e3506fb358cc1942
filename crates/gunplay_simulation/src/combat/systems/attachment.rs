//! Attachment systems: attach оружия к персонажу, teardown

use bevy::prelude::*;

use crate::combat::{
    attach_weapon, end_play, AttachDeclined, AttachTarget, AttachWeaponRequest, Weapon,
    WeaponAttached, WeaponEndPlay,
};
use crate::components::{Armed, Attachment, AttachmentSockets, Character, GRIP_POINT};
use crate::input::InputRouting;
use crate::logger::{log, log_warning};

/// System: AttachWeaponRequest → attach_weapon + иерархия
///
/// Оружие становится child меша рук в socket GripPoint (snap to target),
/// персонаж получает `Armed`.
pub fn process_attach_requests(
    mut commands: Commands,
    mut requests: EventReader<AttachWeaponRequest>,
    mut weapons: Query<&mut Weapon>,
    characters: Query<(&Character, Has<Armed>)>,
    sockets: Query<&AttachmentSockets>,
    mut routing: ResMut<InputRouting>,
    mut attached: EventWriter<WeaponAttached>,
    mut declined: EventWriter<AttachDeclined>,
) {
    // Armed вставляется через Commands → два запроса в одном кадре видят старое состояние
    let mut armed_this_frame: Vec<Entity> = Vec::new();

    for request in requests.read() {
        let Ok(mut weapon) = weapons.get_mut(request.weapon) else {
            log_warning(&format!("AttachWeaponRequest: weapon {:?} not found", request.weapon));
            continue;
        };

        let character = characters.get(request.character).ok();
        let target = character.map(|(character, armed)| AttachTarget {
            character: request.character,
            controller: character.controller,
            already_armed: armed || armed_this_frame.contains(&request.character),
        });

        if let Err(reason) = attach_weapon(request.weapon, &mut weapon, target, &mut *routing) {
            log(&format!(
                "Attach declined: weapon {:?} → {:?} ({})",
                request.weapon, request.character, reason
            ));
            declined.write(AttachDeclined {
                weapon: request.weapon,
                character: request.character,
                reason,
            });
            continue;
        }

        let Some((character, _)) = character else {
            continue;
        };

        let socket = sockets
            .get(character.mesh_1p)
            .map(|sockets| sockets.socket_transform(GRIP_POINT))
            .unwrap_or(Transform::IDENTITY);

        commands
            .entity(request.weapon)
            .insert((socket, Attachment::weapon()));
        commands.entity(character.mesh_1p).add_child(request.weapon);
        commands.entity(request.character).insert(Armed {
            weapon: request.weapon,
        });
        armed_this_frame.push(request.character);

        attached.write(WeaponAttached {
            weapon: request.weapon,
            character: request.character,
        });
    }
}

/// System: WeaponEndPlay → снять input mapping, затем despawn оружия
pub fn process_weapon_end_play(
    mut commands: Commands,
    mut events: EventReader<WeaponEndPlay>,
    weapons: Query<&Weapon>,
    characters: Query<(&Character, Option<&Armed>)>,
    mut routing: ResMut<InputRouting>,
) {
    for event in events.read() {
        let Ok(weapon) = weapons.get(event.weapon) else {
            continue;
        };

        let owner = weapon.owner.and_then(|owner| characters.get(owner).ok().map(|c| (owner, c)));
        let controller = owner.and_then(|(_, (character, _))| character.controller);

        // Mapping снимаем до despawn, иначе context останется у контроллера
        end_play(event.weapon, weapon, controller, &mut *routing);

        if let Some((owner, (_, Some(armed)))) = owner {
            if armed.weapon == event.weapon {
                commands.entity(owner).remove::<Armed>();
            }
        }

        commands.entity(event.weapon).despawn();
    }
}
