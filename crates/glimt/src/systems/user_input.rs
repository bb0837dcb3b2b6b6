//! Player input resolution.
//!
//! Turns the player's [`Input`](crate::ecs::Input) component — mutated by the
//! external event source — into a velocity, and fires bullets on left click.
//!
//! Movement keys resolve with a cancel rule: holding left and right at once
//! yields zero on that axis, not a left bias. The click flag is an
//! edge-trigger: it is cleared unconditionally at the end of this system,
//! whether or not a bullet was spawned, so one click fires at most one bullet
//! per frame.

use super::System;
use crate::ecs::{Component, Damage, EcsError, Movement, Position, Tag, Velocity};
use crate::engine::World;
use crate::math::{self, Vec2};

pub struct UserInput;

/// Resolve held movement keys into a velocity of magnitude `speed`.
///
/// Left sets x to -1; right sets x to 0 if it was already -1 (the cancel)
/// and to 1 otherwise. Same rule for up/down on y.
fn resolve_movement(movement: Movement, speed: f32) -> Vec2 {
    let mut v = Vec2::ZERO;
    if movement.left {
        v.x = -1.0;
    }
    if movement.right {
        v.x = if v.x == -1.0 { 0.0 } else { 1.0 };
    }
    if movement.up {
        v.y = -1.0;
    }
    if movement.down {
        v.y = if v.y == -1.0 { 0.0 } else { 1.0 };
    }
    math::normalize_to(v, speed)
}

impl System for UserInput {
    fn name(&self) -> &'static str {
        "user_input"
    }

    fn run(&mut self, world: &mut World) -> Result<(), EcsError> {
        let (position, sprite, speed, damage, input) = {
            let player = world.entities.expect_unique(Tag::Player)?;
            (
                player.require_position()?.0,
                *player.require_sprite()?,
                player.require_speed()?.value,
                *player.require_damage()?,
                *player.require_input()?,
            )
        };

        world
            .entities
            .expect_unique_mut(Tag::Player)?
            .require_velocity_mut()?
            .0 = resolve_movement(input.movement, speed);

        if input.mouse.left_click {
            let spawn = position + Vec2::new(sprite.width / 2.0, sprite.height / 2.0);
            let velocity =
                math::normalize_to(input.mouse.position - spawn, world.config.bullet.speed);
            let bullet = world.entities.add(Tag::Bullet)?;
            bullet.set(Component::Position(Position(spawn)));
            bullet.set(Component::Velocity(Velocity(velocity)));
            // The player's damage value at fire time, copied onto the bullet.
            bullet.set(Component::Damage(Damage {
                value: damage.value,
            }));
        }

        // Edge-trigger: cleared whether or not a bullet was spawned.
        world
            .entities
            .expect_unique_mut(Tag::Player)?
            .require_input_mut()?
            .mouse
            .left_click = false;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::ecs::{Cardinality, Input, Speed, Sprite, SpriteId};
    use approx::assert_relative_eq;

    fn world() -> World {
        let mut world = World::new(GameConfig::default());
        world.entities.register(Tag::Player, Cardinality::Unique);
        world.entities.register(Tag::Bullet, Cardinality::Multi);
        let player = world.entities.add(Tag::Player).unwrap();
        player.set(Component::Position(Position(Vec2::new(200.0, 200.0))));
        player.set(Component::Velocity(Velocity(Vec2::ZERO)));
        player.set(Component::Speed(Speed { value: 10.0 }));
        player.set(Component::Input(Input::default()));
        player.set(Component::Sprite(Sprite {
            image: SpriteId(1),
            width: 100.0,
            height: 100.0,
        }));
        player.set(Component::Damage(Damage { value: 1 }));
        world.entities.update();
        world
    }

    fn held(world: &mut World, set: impl FnOnce(&mut Input)) {
        let player = world.entities.expect_unique_mut(Tag::Player).unwrap();
        set(player.require_input_mut().unwrap());
    }

    fn player_velocity(world: &World) -> Vec2 {
        world
            .entities
            .expect_unique(Tag::Player)
            .unwrap()
            .require_velocity()
            .unwrap()
            .0
    }

    #[test]
    fn left_only_moves_left_at_speed() {
        let mut world = world();
        held(&mut world, |i| i.movement.left = true);
        UserInput.run(&mut world).unwrap();
        let v = player_velocity(&world);
        assert_relative_eq!(v.x, -10.0, epsilon = 1e-4);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut world = world();
        held(&mut world, |i| {
            i.movement.left = true;
            i.movement.right = true;
            i.movement.up = true;
            i.movement.down = true;
        });
        UserInput.run(&mut world).unwrap();
        assert_eq!(player_velocity(&world), Vec2::ZERO);
    }

    #[test]
    fn diagonal_is_normalized_to_speed() {
        let mut world = world();
        held(&mut world, |i| {
            i.movement.right = true;
            i.movement.down = true;
        });
        UserInput.run(&mut world).unwrap();
        let v = player_velocity(&world);
        assert_relative_eq!(v.length(), 10.0, epsilon = 1e-4);
        assert_relative_eq!(v.x, v.y, epsilon = 1e-4);
    }

    #[test]
    fn no_keys_means_zero_velocity() {
        let mut world = world();
        // Give the player some leftover velocity from an earlier frame.
        world
            .entities
            .expect_unique_mut(Tag::Player)
            .unwrap()
            .require_velocity_mut()
            .unwrap()
            .0 = Vec2::new(3.0, 3.0);
        UserInput.run(&mut world).unwrap();
        assert_eq!(player_velocity(&world), Vec2::ZERO);
    }

    #[test]
    fn left_click_fires_one_bullet_toward_mouse() {
        let mut world = world();
        held(&mut world, |i| {
            i.mouse.left_click = true;
            i.mouse.position = Vec2::new(1000.0, 250.0);
        });
        UserInput.run(&mut world).unwrap();
        world.entities.update();

        let bullets = world.entities.tagged(Tag::Bullet).unwrap();
        assert_eq!(bullets.len(), 1);
        let bullet = world.entities.get(bullets[0]).unwrap();
        // Spawned at the sprite center.
        assert_eq!(bullet.require_position().unwrap().0, Vec2::new(250.0, 250.0));
        // Flying straight at the mouse at bullet speed.
        let v = bullet.require_velocity().unwrap().0;
        assert_relative_eq!(v.length(), world.config.bullet.speed, epsilon = 1e-3);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-4);
        assert!(v.x > 0.0);
        // Damage copied from the player.
        assert_eq!(bullet.require_damage().unwrap().value, 1);
    }

    #[test]
    fn click_flag_clears_even_without_a_shot() {
        let mut world = world();
        // No click at all: the flag stays false and no bullet appears.
        UserInput.run(&mut world).unwrap();
        world.entities.update();
        assert!(world.entities.tagged(Tag::Bullet).unwrap().is_empty());

        // Click once, run twice: exactly one bullet.
        held(&mut world, |i| i.mouse.left_click = true);
        UserInput.run(&mut world).unwrap();
        let player = world.entities.expect_unique(Tag::Player).unwrap();
        assert!(!player.require_input().unwrap().mouse.left_click);
        UserInput.run(&mut world).unwrap();
        world.entities.update();
        assert_eq!(world.entities.tagged(Tag::Bullet).unwrap().len(), 1);
    }
}
