//! Enemy homing.
//!
//! Every enemy's velocity is re-aimed each frame: the unit vector from the
//! enemy toward the player's current position, scaled to the configured enemy
//! speed. The polygon also picks up a fixed rotation increment — visual spin
//! only, not coupled to the physics.

use super::System;
use crate::ecs::{EcsError, Tag};
use crate::engine::World;
use crate::math;

pub struct EnemyMovement;

impl System for EnemyMovement {
    fn name(&self) -> &'static str {
        "enemy_movement"
    }

    fn run(&mut self, world: &mut World) -> Result<(), EcsError> {
        let player_position = world
            .entities
            .expect_unique(Tag::Player)?
            .require_position()?
            .0;
        let speed = world.config.enemy.speed;
        let spin = world.config.enemy.spin;

        for id in world.entities.tagged(Tag::Enemy)? {
            let Some(enemy) = world.entities.get_mut(id) else {
                continue;
            };
            let position = enemy.require_position()?.0;
            enemy.require_velocity_mut()?.0 =
                math::normalize_to(player_position - position, speed);
            enemy.require_polygon_mut()?.rotation += spin;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::ecs::{Cardinality, Component, Polygon, Position, Velocity};
    use crate::math::Vec2;
    use approx::assert_relative_eq;

    fn world_with_player(at: Vec2) -> World {
        let mut world = World::new(GameConfig::default());
        world.entities.register(Tag::Player, Cardinality::Unique);
        world.entities.register(Tag::Enemy, Cardinality::Multi);
        let player = world.entities.add(Tag::Player).unwrap();
        player.set(Component::Position(Position(at)));
        world.entities.update();
        world
    }

    fn add_enemy(world: &mut World, at: Vec2) -> crate::ecs::EntityId {
        let enemy = world.entities.add(Tag::Enemy).unwrap();
        enemy.set(Component::Position(Position(at)));
        enemy.set(Component::Velocity(Velocity(Vec2::ZERO)));
        enemy.set(Component::Polygon(Polygon::regular(50.0, 5)));
        let id = enemy.id();
        world.entities.update();
        id
    }

    #[test]
    fn velocity_points_at_player_with_enemy_speed() {
        let mut world = world_with_player(Vec2::new(100.0, 0.0));
        let id = add_enemy(&mut world, Vec2::new(0.0, 0.0));
        EnemyMovement.run(&mut world).unwrap();

        let v = world.entities.get(id).unwrap().require_velocity().unwrap().0;
        let speed = world.config.enemy.speed;
        assert_relative_eq!(v.length(), speed, epsilon = 1e-4);
        // Pointing along +x, straight at the player.
        assert_relative_eq!(v.x, speed, epsilon = 1e-4);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn rotation_advances_by_spin() {
        let mut world = world_with_player(Vec2::new(500.0, 500.0));
        let id = add_enemy(&mut world, Vec2::new(0.0, 0.0));
        EnemyMovement.run(&mut world).unwrap();
        EnemyMovement.run(&mut world).unwrap();
        let rotation = world.entities.get(id).unwrap().require_polygon().unwrap().rotation;
        assert_relative_eq!(rotation, 2.0 * world.config.enemy.spin, epsilon = 1e-6);
    }

    #[test]
    fn missing_player_is_a_contract_violation() {
        let mut world = World::new(GameConfig::default());
        world.entities.register(Tag::Player, Cardinality::Unique);
        world.entities.register(Tag::Enemy, Cardinality::Multi);
        assert_eq!(
            EnemyMovement.run(&mut world).err(),
            Some(EcsError::MissingEntity(Tag::Player))
        );
    }
}
