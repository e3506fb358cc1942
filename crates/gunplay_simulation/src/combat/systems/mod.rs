//! Combat systems (ECS wiring вокруг weapon policy)

pub mod attachment;
pub mod damage;
pub mod weapon;

#[cfg(test)]
mod damage_tests;

// Re-export all systems
pub use attachment::*;
pub use damage::*;
pub use weapon::*;
