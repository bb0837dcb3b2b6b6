//! Collision resolution.
//!
//! Two passes, run in order:
//!
//! 1. **Player pass** — clamps the player inside the world bounds, then tests
//!    every live enemy against the player. Overlap destroys the enemy and
//!    deducts its damage from the player's health; at zero or below the
//!    world's outcome flips to [`Outcome::PlayerDied`].
//! 2. **Bullet pass** — each live bullet is first tested against the walls
//!    (destroyed with a bullet-radius margin), then against live enemies. A
//!    bullet spends itself on the first enemy it overlaps; if that enemy's
//!    health reaches zero it is destroyed and its score is credited to the
//!    player.
//!
//! Destruction here only flips the alive flag; the corpses disappear at the
//! next frame's synchronization point. Both passes skip entities already
//! flagged dead this frame, so a spent bullet never hits a second enemy and a
//! dead enemy absorbs nothing further.
//!
//! The overlap tests mirror the original tuning: the player test compares
//! squared distance of the enemy center (position plus half a radius on each
//! axis) and the sprite center against `r² - r`, the bullet test compares raw
//! positions against `r²`.

use super::System;
use crate::ecs::{EcsError, EntityId, Tag};
use crate::engine::{Outcome, World};
use crate::math::{self, Vec2};

pub struct Collision;

impl Collision {
    fn player_pass(world: &mut World) -> Result<(), EcsError> {
        let bounds = world.bounds;
        let radius = world.config.enemy.radius;

        let player_center = {
            let player = world.entities.expect_unique_mut(Tag::Player)?;
            let sprite = *player.require_sprite()?;
            let position = player.require_position_mut()?;
            position.0.x = position.0.x.clamp(0.0, bounds.width - sprite.width);
            position.0.y = position.0.y.clamp(0.0, bounds.height - sprite.height);
            position.0 + Vec2::new(sprite.width * 0.5, sprite.height * 0.5)
        };

        let threshold = radius * radius - radius;
        let offset = Vec2::splat(radius * 0.5);
        let mut damage_taken = 0;

        for id in world.entities.tagged(Tag::Enemy)? {
            let Some(enemy) = world.entities.get_mut(id) else {
                continue;
            };
            if !enemy.is_active() {
                continue;
            }
            let center = enemy.require_position()?.0 + offset;
            if math::distance_squared(center, player_center) < threshold {
                damage_taken += enemy.require_damage()?.value;
                enemy.destroy();
            }
        }

        if damage_taken > 0 {
            let health = {
                let player = world.entities.expect_unique_mut(Tag::Player)?;
                let health = player.require_health_mut()?;
                health.value -= damage_taken;
                health.value
            };
            log::debug!("player took {damage_taken} damage, health now {health}");
            if health <= 0 && world.outcome != Outcome::PlayerDied {
                log::info!("player died");
                world.outcome = Outcome::PlayerDied;
            }
        }
        Ok(())
    }

    fn bullet_pass(world: &mut World, bullet_id: EntityId) -> Result<(), EcsError> {
        let bounds = world.bounds;
        let margin = world.config.bullet.radius;
        let radius = world.config.enemy.radius;
        let threshold = radius * radius;

        let (bullet_position, bullet_damage) = {
            let Some(bullet) = world.entities.get(bullet_id) else {
                return Ok(());
            };
            if !bullet.is_active() {
                return Ok(());
            }
            (bullet.require_position()?.0, bullet.require_damage()?.value)
        };

        // Out of bounds: the bullet dies at the wall and hits nothing.
        if bullet_position.x < 0.0
            || bullet_position.y < 0.0
            || bullet_position.x + margin > bounds.width
            || bullet_position.y + margin > bounds.height
        {
            if let Some(bullet) = world.entities.get_mut(bullet_id) {
                bullet.destroy();
            }
            return Ok(());
        }

        let mut score_gained = 0;
        for enemy_id in world.entities.tagged(Tag::Enemy)? {
            let overlap = {
                let Some(enemy) = world.entities.get(enemy_id) else {
                    continue;
                };
                if !enemy.is_active() {
                    continue;
                }
                math::distance_squared(enemy.require_position()?.0, bullet_position) < threshold
            };
            if !overlap {
                continue;
            }

            if let Some(enemy) = world.entities.get_mut(enemy_id) {
                let health = enemy.require_health_mut()?;
                health.value -= bullet_damage;
                if health.value <= 0 {
                    score_gained += enemy.require_score()?.value;
                    enemy.destroy();
                }
            }
            if let Some(bullet) = world.entities.get_mut(bullet_id) {
                bullet.destroy();
            }
            // A bullet is spent on its first hit.
            break;
        }

        if score_gained > 0 {
            world
                .entities
                .expect_unique_mut(Tag::Player)?
                .require_score_mut()?
                .value += score_gained;
        }
        Ok(())
    }
}

impl System for Collision {
    fn name(&self) -> &'static str {
        "collision"
    }

    fn run(&mut self, world: &mut World) -> Result<(), EcsError> {
        Self::player_pass(world)?;
        for bullet_id in world.entities.tagged(Tag::Bullet)? {
            Self::bullet_pass(world, bullet_id)?;
        }
        Ok(())
    }
}
