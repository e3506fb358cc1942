//! First-person character: controller, меш рук, камера

use bevy::prelude::*;

/// First-person персонаж, которому можно выдать оружие
///
/// Все поля: handles в ECS world, не ownership:
/// - `controller`: кто управляет (player controller entity), None = без контроллера
/// - `mesh_1p`: меш рук (attachment sockets + fire montage)
/// - `camera`: камера, forward которой задаёт направление hitscan
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Character {
    pub controller: Option<Entity>,
    pub mesh_1p: Entity,
    pub camera: Entity,
}

/// Маркер: персонаж уже держит оружие
///
/// Вставляется при успешном attach, удаляется при end play оружия.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Armed {
    pub weapon: Entity,
}

/// Снимок персонажа на момент выстрела
///
/// Собирается системой из `Character` + transforms, чтобы weapon логика
/// не зависела от Query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterView {
    pub entity: Entity,
    pub controller: Option<Entity>,
    pub location: Vec3,
    pub mesh_1p: Entity,
    pub camera_forward: Vec3,
}

impl CharacterView {
    /// Собрать view из компонентов; камера без GlobalTransform → forward персонажа
    pub fn build(
        entity: Entity,
        character: &Character,
        transform: &GlobalTransform,
        camera: Option<&GlobalTransform>,
    ) -> Self {
        let forward = camera.unwrap_or(transform).forward();

        Self {
            entity,
            controller: character.controller,
            location: transform.translation(),
            mesh_1p: character.mesh_1p,
            camera_forward: forward.as_vec3(),
        }
    }
}
