//! Input routing: mapping contexts по приоритету + action bindings
//!
//! Состояние per-controller:
//! - установленные contexts (priority, порядок установки)
//! - bindings action → weapon
//!
//! Контроллер без `register_player` не имеет input subsystem: 
//! все операции над ним no-op (AI контроллеры).

use bevy::prelude::*;
use std::collections::HashMap;

use super::{InputActionId, InputBinder, InputKey, MappingContext, MappingContextId, TriggerEvent};

/// Установленный context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledContext {
    pub id: MappingContextId,
    pub priority: i32,
    /// Монотонный счётчик: при равном priority побеждает последний
    pub order: u64,
}

/// Binding: action + trigger → fire конкретного оружия
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionBinding {
    pub action: InputActionId,
    pub trigger: TriggerEvent,
    pub weapon: Entity,
}

#[derive(Debug, Clone, Default)]
pub struct PlayerInput {
    pub contexts: Vec<InstalledContext>,
    pub bindings: Vec<ActionBinding>,
}

/// Определения mapping contexts (key → action)
#[derive(Resource, Debug, Clone, Default)]
pub struct MappingContexts {
    contexts: HashMap<MappingContextId, MappingContext>,
}

impl MappingContexts {
    pub fn insert(&mut self, context: MappingContext) {
        self.contexts.insert(context.id.clone(), context);
    }

    pub fn get(&self, id: &MappingContextId) -> Option<&MappingContext> {
        self.contexts.get(id)
    }
}

/// Enhanced-input state всех player контроллеров
#[derive(Resource, Debug, Default)]
pub struct InputRouting {
    players: HashMap<Entity, PlayerInput>,
    next_order: u64,
}

impl InputRouting {
    /// Контроллер получает input subsystem (local player)
    pub fn register_player(&mut self, controller: Entity) {
        self.players.entry(controller).or_default();
    }

    pub fn player(&self, controller: Entity) -> Option<&PlayerInput> {
        self.players.get(&controller)
    }

    pub fn has_context(&self, controller: Entity, context: &MappingContextId) -> bool {
        self.players
            .get(&controller)
            .is_some_and(|player| player.contexts.iter().any(|c| &c.id == context))
    }

    /// Action для key: context с максимальным priority, который мапит key
    ///
    /// Высокий priority перекрывает (consume) низкий для того же key.
    pub fn resolve_action(
        &self,
        controller: Entity,
        key: &InputKey,
        definitions: &MappingContexts,
    ) -> Option<InputActionId> {
        let player = self.players.get(&controller)?;

        let mut ordered: Vec<&InstalledContext> = player.contexts.iter().collect();
        ordered.sort_by(|a, b| b.priority.cmp(&a.priority).then(b.order.cmp(&a.order)));

        ordered
            .into_iter()
            .filter_map(|installed| definitions.get(&installed.id))
            .find_map(|context| context.action_for(key).cloned())
    }

    /// Weapons, привязанные к action + trigger
    pub fn bound_weapons(
        &self,
        controller: Entity,
        action: &InputActionId,
        trigger: TriggerEvent,
    ) -> Vec<Entity> {
        self.players
            .get(&controller)
            .map(|player| {
                player
                    .bindings
                    .iter()
                    .filter(|binding| &binding.action == action && binding.trigger == trigger)
                    .map(|binding| binding.weapon)
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl InputBinder for InputRouting {
    fn has_subsystem(&self, controller: Entity) -> bool {
        self.players.contains_key(&controller)
    }

    fn add_mapping_context(
        &mut self,
        controller: Entity,
        context: &MappingContextId,
        priority: i32,
    ) {
        let order = self.next_order;
        let Some(player) = self.players.get_mut(&controller) else {
            return;
        };

        // Повторная установка обновляет priority (как в enhanced input)
        player.contexts.retain(|installed| &installed.id != context);
        player.contexts.push(InstalledContext {
            id: context.clone(),
            priority,
            order,
        });
        self.next_order += 1;
    }

    fn remove_mapping_context(&mut self, controller: Entity, context: &MappingContextId) {
        if let Some(player) = self.players.get_mut(&controller) {
            player.contexts.retain(|installed| &installed.id != context);
        }
    }

    fn bind_action(
        &mut self,
        controller: Entity,
        action: &InputActionId,
        trigger: TriggerEvent,
        weapon: Entity,
    ) {
        if let Some(player) = self.players.get_mut(&controller) {
            player.bindings.push(ActionBinding {
                action: action.clone(),
                trigger,
                weapon,
            });
        }
    }

    fn unbind_weapon(&mut self, controller: Entity, weapon: Entity) {
        if let Some(player) = self.players.get_mut(&controller) {
            player.bindings.retain(|binding| binding.weapon != weapon);
        }
    }
}
