//! Collision Layers Constants
//!
//! Rapier collision groups: centralised constants для всего проекта.
//!
//! ## Каналы:
//! - GROUP_1: Visibility (всё, что блокирует hitscan луч)
//! - GROUP_4: PhysicsBody (объекты для radial overlap query)
//! - GROUP_5: Projectiles
//!
//! ## Использование:
//! ```ignore
//! // Prop, который блокирует луч и реагирует на взрывы
//! CollisionGroups::new(VISIBILITY | PHYSICS_BODY, Group::ALL)
//! ```

use bevy_rapier3d::prelude::Group;

/// Trace channel для hitscan (line of sight)
pub const VISIBILITY: Group = Group::GROUP_1;

/// Object type для radial overlap (физические props)
pub const PHYSICS_BODY: Group = Group::GROUP_4;

/// Снаряды projectile оружия
pub const PROJECTILE: Group = Group::GROUP_5;

/// Mask снарядов: всё кроме других снарядов
pub fn projectile_filter() -> Group {
    Group::ALL - PROJECTILE
}

/// Название канала для debug логов
pub fn get_layer_name(group: Group) -> &'static str {
    if group == VISIBILITY {
        "Visibility"
    } else if group == PHYSICS_BODY {
        "PhysicsBody"
    } else if group == PROJECTILE {
        "Projectile"
    } else {
        "Unknown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projectiles_ignore_each_other() {
        assert!(!projectile_filter().contains(PROJECTILE));
        assert!(projectile_filter().contains(VISIBILITY));
        assert!(projectile_filter().contains(PHYSICS_BODY));
    }

    #[test]
    fn test_layer_names() {
        assert_eq!(get_layer_name(VISIBILITY), "Visibility");
        assert_eq!(get_layer_name(PHYSICS_BODY), "PhysicsBody");
        assert_eq!(get_layer_name(Group::GROUP_9), "Unknown");
    }
}
