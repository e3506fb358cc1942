//! Input routing systems
//!
//! RawInputPressed → ActionTriggered → FireIntent

use bevy::prelude::*;

use super::{ActionTriggered, InputRouting, MappingContexts, RawInputPressed, TriggerEvent};
use crate::combat::FireIntent;
use crate::logger::log;

/// System: сырые нажатия → actions (по активным mapping contexts)
pub fn route_input_presses(
    mut presses: EventReader<RawInputPressed>,
    routing: Res<InputRouting>,
    definitions: Res<MappingContexts>,
    mut actions: EventWriter<ActionTriggered>,
) {
    for press in presses.read() {
        let Some(action) = routing.resolve_action(press.controller, &press.key, &definitions) else {
            continue;
        };

        actions.write(ActionTriggered {
            controller: press.controller,
            action,
            trigger: TriggerEvent::Triggered,
        });
    }
}

/// System: actions → FireIntent для привязанных weapons
pub fn trigger_bound_actions(
    mut actions: EventReader<ActionTriggered>,
    routing: Res<InputRouting>,
    mut intents: EventWriter<FireIntent>,
) {
    for triggered in actions.read() {
        let weapons =
            routing.bound_weapons(triggered.controller, &triggered.action, triggered.trigger);
        for weapon in weapons {
            log(&format!(
                "Action {:?} → fire weapon {:?}",
                triggered.action.0, weapon
            ));
            intents.write(FireIntent { weapon });
        }
    }
}
