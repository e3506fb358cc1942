//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: здоровье и смерть (Health, Dead)
//! - character: first-person персонаж (Character, Armed, CharacterView)
//! - attachment: sockets меша и привязка оружия (Attachment, AttachmentSockets)

pub mod actor;
pub mod attachment;
pub mod character;

// Re-exports для удобного импорта
pub use actor::*;
pub use attachment::*;
pub use character::*;
