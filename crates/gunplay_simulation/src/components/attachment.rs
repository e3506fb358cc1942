//! Attachment компоненты: sockets на меше + привязка оружия

use bevy::prelude::*;
use std::collections::HashMap;

/// Socket на меше рук, куда крепится оружие
pub const GRIP_POINT: &str = "GripPoint";

/// Attachment: привязка entity к socket на host меше
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Attachment {
    /// Socket на host меше (например "GripPoint")
    pub attachment_point: String,

    /// Тип attachment (для logic/UI)
    pub attachment_type: AttachmentType,
}

impl Attachment {
    /// Attachment для weapon (GripPoint)
    pub fn weapon() -> Self {
        Self {
            attachment_point: GRIP_POINT.into(),
            attachment_type: AttachmentType::Weapon,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum AttachmentType {
    Weapon,
}

/// Именованные sockets меша (local transforms относительно меша)
///
/// Неизвестный socket → identity (snap к origin меша).
#[derive(Component, Debug, Clone, Default)]
pub struct AttachmentSockets {
    pub sockets: HashMap<String, Transform>,
}

impl AttachmentSockets {
    pub fn with_socket(mut self, name: impl Into<String>, transform: Transform) -> Self {
        self.sockets.insert(name.into(), transform);
        self
    }

    /// Snap-to-target: local transform для attachment в socket
    pub fn socket_transform(&self, name: &str) -> Transform {
        self.sockets.get(name).copied().unwrap_or(Transform::IDENTITY)
    }
}
