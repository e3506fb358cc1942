//! Input domain: mapping contexts, action bindings, routing
//!
//! Оружие не трогает глобальный input state напрямую: при attach/end play
//! оно получает `InputBinder` (в ECS это `InputRouting` resource).
//!
//! Flow:
//! 1. Хост шлёт `RawInputPressed { controller, key }`
//! 2. `route_input_presses` выбирает action по contexts (priority desc)
//! 3. `trigger_bound_actions` → `FireIntent` для привязанного оружия

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub mod events;
pub mod routing;
pub mod systems;


pub use events::*;
pub use routing::*;
pub use systems::*;

/// Priority, с которым оружие ставит свой context
///
/// 1 перекрывает default context (0): например touch кнопка Jump → Fire.
pub const WEAPON_MAPPING_PRIORITY: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Reflect)]
pub struct InputActionId(pub String);

impl InputActionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Reflect)]
pub struct MappingContextId(pub String);

impl MappingContextId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// Логическая клавиша/кнопка ("MouseLeft", "Touch1", "Space")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputKey(pub String);

impl InputKey {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Reflect)]
pub enum TriggerEvent {
    Started,
    Triggered,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMapping {
    pub key: InputKey,
    pub action: InputActionId,
}

/// Mapping context: набор key → action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingContext {
    pub id: MappingContextId,
    #[serde(default)]
    pub mappings: Vec<KeyMapping>,
}

impl MappingContext {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: MappingContextId::new(id),
            mappings: Vec::new(),
        }
    }

    pub fn map(mut self, key: impl Into<String>, action: impl Into<String>) -> Self {
        self.mappings.push(KeyMapping {
            key: InputKey::new(key),
            action: InputActionId::new(action),
        });
        self
    }

    pub fn action_for(&self, key: &InputKey) -> Option<&InputActionId> {
        self.mappings
            .iter()
            .find(|mapping| &mapping.key == key)
            .map(|mapping| &mapping.action)
    }
}

/// Engine-side input subsystem, который оружие мутирует при attach/end play
///
/// Контроллер без subsystem (AI) → все вызовы no-op.
pub trait InputBinder {
    fn has_subsystem(&self, controller: Entity) -> bool;

    fn add_mapping_context(
        &mut self,
        controller: Entity,
        context: &MappingContextId,
        priority: i32,
    );

    fn remove_mapping_context(&mut self, controller: Entity, context: &MappingContextId);

    fn bind_action(
        &mut self,
        controller: Entity,
        action: &InputActionId,
        trigger: TriggerEvent,
        weapon: Entity,
    );

    /// Снять все bindings оружия (end play)
    fn unbind_weapon(&mut self, controller: Entity, weapon: Entity);
}

/// Input routing plugin (resources + events)
pub struct InputRoutingPlugin;

impl Plugin for InputRoutingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputRouting>()
            .init_resource::<MappingContexts>()
            .add_event::<RawInputPressed>()
            .add_event::<ActionTriggered>();
    }
}
