//! Enemy spawner.
//!
//! Spawns one enemy per interval at one of the four world corners. A single
//! random draw `n` in `[3, 10)` decides both the polygon's vertex count and,
//! via `n % 4`, which corner it appears at — the two decisions are
//! intentionally coupled to one draw, matching the shipped behavior. The same
//! `n` also sets the enemy's health, damage, and score.
//!
//! The generator is owned by the system and seedable, so tests can pin the
//! sequence.

use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::System;
use crate::ecs::{Component, Damage, EcsError, Health, Polygon, Position, Score, Tag, Velocity};
use crate::engine::World;
use crate::math::Vec2;

pub struct Spawner {
    interval: Duration,
    last_spawn: Instant,
    rng: ChaCha8Rng,
}

impl Spawner {
    /// Spawner with a nondeterministic seed. The interval comes from the
    /// world's enemy config.
    pub fn new(interval: Duration) -> Self {
        Self::from_rng(interval, ChaCha8Rng::from_entropy())
    }

    /// Spawner with a fixed seed, for deterministic tests and demos.
    pub fn with_seed(interval: Duration, seed: u64) -> Self {
        Self::from_rng(interval, ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(interval: Duration, rng: ChaCha8Rng) -> Self {
        Self {
            interval,
            last_spawn: Instant::now(),
            rng,
        }
    }

    /// The four spawn positions, inset from the world corners. Indexed by
    /// `n % 4`.
    fn corner(world: &World, index: usize) -> Vec2 {
        let inset = world.config.enemy.spawn_inset;
        let (w, h) = (world.bounds.width, world.bounds.height);
        match index {
            0 => Vec2::new(inset, inset),
            1 => Vec2::new(inset, h - inset),
            2 => Vec2::new(w - inset, inset),
            _ => Vec2::new(w - inset, h - inset),
        }
    }
}

impl System for Spawner {
    fn name(&self) -> &'static str {
        "spawner"
    }

    fn run(&mut self, world: &mut World) -> Result<(), EcsError> {
        if self.last_spawn.elapsed() < self.interval {
            return Ok(());
        }

        // One draw drives vertex count, corner, health, damage, and score.
        let n = self.rng.gen_range(3..10usize);
        let position = Self::corner(world, n % 4);
        let radius = world.config.enemy.radius;

        let enemy = world.entities.add(Tag::Enemy)?;
        enemy.set(Component::Position(Position(position)));
        enemy.set(Component::Velocity(Velocity(Vec2::ZERO)));
        enemy.set(Component::Polygon(Polygon::regular(radius, n)));
        enemy.set(Component::Score(Score { value: n as i32 }));
        enemy.set(Component::Health(Health { value: n as i32 }));
        enemy.set(Component::Damage(Damage { value: n as i32 }));
        log::debug!("spawned {n}-gon enemy at ({}, {})", position.x, position.y);

        self.last_spawn = Instant::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::ecs::Cardinality;

    fn world() -> World {
        let mut world = World::new(GameConfig::default());
        world.entities.register(Tag::Enemy, Cardinality::Multi);
        world
    }

    #[test]
    fn respects_the_interval() {
        let mut world = world();
        let mut spawner = Spawner::with_seed(Duration::from_secs(3600), 1);
        spawner.run(&mut world).unwrap();
        world.entities.update();
        assert!(world.entities.tagged(Tag::Enemy).unwrap().is_empty());
    }

    #[test]
    fn zero_interval_spawns_every_frame() {
        let mut world = world();
        let mut spawner = Spawner::with_seed(Duration::ZERO, 1);
        for _ in 0..3 {
            world.entities.update();
            spawner.run(&mut world).unwrap();
        }
        world.entities.update();
        assert_eq!(world.entities.tagged(Tag::Enemy).unwrap().len(), 3);
    }

    #[test]
    fn spawned_enemy_has_full_component_set() {
        let mut world = world();
        let mut spawner = Spawner::with_seed(Duration::ZERO, 42);
        spawner.run(&mut world).unwrap();
        world.entities.update();
        let id = world.entities.tagged(Tag::Enemy).unwrap()[0];
        let enemy = world.entities.get(id).unwrap();
        let n = enemy.require_polygon().unwrap().vertices.len();
        assert!((3..10).contains(&n));
        // One draw feeds every stat.
        assert_eq!(enemy.require_health().unwrap().value, n as i32);
        assert_eq!(enemy.require_damage().unwrap().value, n as i32);
        assert_eq!(enemy.require_score().unwrap().value, n as i32);
        assert_eq!(enemy.require_velocity().unwrap().0, Vec2::ZERO);
    }

    #[test]
    fn corner_follows_vertex_count() {
        let mut world = world();
        let mut spawner = Spawner::with_seed(Duration::ZERO, 7);
        spawner.run(&mut world).unwrap();
        world.entities.update();
        let id = world.entities.tagged(Tag::Enemy).unwrap()[0];
        let enemy = world.entities.get(id).unwrap();
        let n = enemy.require_polygon().unwrap().vertices.len();
        let expected = Spawner::corner(&world, n % 4);
        assert_eq!(enemy.require_position().unwrap().0, expected);
    }

    #[test]
    fn fixed_seed_is_deterministic() {
        let counts = |seed| {
            let mut world = world();
            let mut spawner = Spawner::with_seed(Duration::ZERO, seed);
            let mut out = Vec::new();
            for _ in 0..5 {
                world.entities.update();
                spawner.run(&mut world).unwrap();
            }
            world.entities.update();
            for id in world.entities.tagged(Tag::Enemy).unwrap() {
                let e = world.entities.get(id).unwrap();
                out.push(e.require_polygon().unwrap().vertices.len());
            }
            out
        };
        assert_eq!(counts(99), counts(99));
    }
}
