//! Attach / end play оружия
//!
//! Здесь только policy: owner, ignore-list, input mapping.
//! Иерархию (parent под меш рук) и маркер `Armed` ставят системы.

use bevy::prelude::*;
use thiserror::Error;

use super::Weapon;
use crate::input::{InputBinder, TriggerEvent, WEAPON_MAPPING_PRIORITY};
use crate::logger::log;

/// Почему attach отклонён
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachError {
    #[error("target character does not exist")]
    NoCharacter,
    #[error("character already holds a weapon")]
    AlreadyArmed,
}

/// Персонаж глазами attach
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachTarget {
    pub character: Entity,
    pub controller: Option<Entity>,
    pub already_armed: bool,
}

/// Выдать оружие персонажу
///
/// При успехе: owner записан, ignore-list = [owner], и если у контроллера
/// есть input subsystem: mapping context стоит с priority 1, fire action
/// привязан к этому оружию.
pub fn attach_weapon(
    weapon_entity: Entity,
    weapon: &mut Weapon,
    target: Option<AttachTarget>,
    binder: &mut impl InputBinder,
) -> Result<(), AttachError> {
    let target = target.ok_or(AttachError::NoCharacter)?;
    if target.already_armed {
        return Err(AttachError::AlreadyArmed);
    }

    weapon.owner = Some(target.character);
    weapon.actors_to_ignore = vec![target.character];

    if let Some(controller) = target.controller {
        if binder.has_subsystem(controller) {
            let context = &weapon.mapping_context;
            binder.add_mapping_context(controller, context, WEAPON_MAPPING_PRIORITY);
            let action = &weapon.fire_action;
            binder.bind_action(controller, action, TriggerEvent::Triggered, weapon_entity);
        }
    }

    log(&format!(
        "🔫 Weapon {:?} attached to {:?}",
        weapon_entity, target.character
    ));

    Ok(())
}

/// Teardown оружия: снять mapping context до despawn
///
/// `controller`: контроллер текущего владельца (None если владельца нет).
pub fn end_play(
    weapon_entity: Entity,
    weapon: &Weapon,
    controller: Option<Entity>,
    binder: &mut impl InputBinder,
) {
    if !weapon.is_attached() {
        return;
    }
    let Some(controller) = controller else {
        return;
    };
    if !binder.has_subsystem(controller) {
        return;
    }

    binder.remove_mapping_context(controller, &weapon.mapping_context);
    binder.unbind_weapon(controller, weapon_entity);

    log(&format!(
        "Weapon {:?} removed input mapping from {:?}",
        weapon_entity, controller
    ));
}
