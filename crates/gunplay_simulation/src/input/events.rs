//! Input events
//!
//! Хост (окно, touch, тесты) шлёт сырые нажатия, routing превращает их
//! в actions по активным mapping contexts.

use bevy::prelude::*;

use super::{InputActionId, InputKey, TriggerEvent};

/// Сырое нажатие клавиши/кнопки у конкретного контроллера
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct RawInputPressed {
    pub controller: Entity,
    pub key: InputKey,
}

/// Action сработал (после resolve по mapping contexts)
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ActionTriggered {
    pub controller: Entity,
    pub action: InputActionId,
    pub trigger: TriggerEvent,
}
