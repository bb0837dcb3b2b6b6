//! # Engine — Frame Driver and Shared World
//!
//! The [`Engine`] owns everything the simulation needs: a [`World`] of shared
//! state and the fixed [`Schedule`](crate::systems::Schedule) of systems. One
//! call to [`Engine::step`] is one frame:
//!
//! 1. [`EntityManager::update`](crate::ecs::EntityManager::update) — the only
//!    structural synchronization point. Entities destroyed last frame vanish,
//!    entities added last frame become visible.
//! 2. The six systems run in their fixed order.
//!
//! ## Design
//!
//! Input arrives between frames through [`Engine::apply`], which mutates a
//! single component (the player's [`Input`](crate::ecs::Input)) and nothing
//! else. The driver never spawns or destroys entities mid-frame itself, and
//! neither does any system; all structural change funnels through step 1.
//!
//! A lethal hit does not abort the frame. The collision system flips the
//! world's [`Outcome`] and `step` reports it; the embedder decides whether to
//! keep stepping, show a death screen, or restart with a fresh engine.

use std::time::Duration;

use crate::config::GameConfig;
use crate::draw::DrawCommand;
use crate::ecs::{
    Cardinality, Component, Damage, EcsError, EntityManager, Health, Input, Position, Score, Speed,
    Sprite, SpriteId, Tag, Velocity,
};
use crate::input::{Direction, InputEvent, MouseButton};
use crate::math::Vec2;
use crate::systems::{
    Collision, EnemyMovement, Kinematics, Render, Schedule, Spawner, UserInput,
};

/// The playfield rectangle, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

/// What a frame step concluded about the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Running,
    /// The player's health reached zero. The world is left intact for
    /// inspection; stepping further is allowed but pointless.
    PlayerDied,
}

/// Shared state every system reads and writes.
pub struct World {
    pub entities: EntityManager,
    pub bounds: Bounds,
    pub config: GameConfig,
    /// Rebuilt from scratch by the render system each frame.
    pub draw_list: Vec<DrawCommand>,
    pub outcome: Outcome,
}

impl World {
    pub fn new(config: GameConfig) -> Self {
        let bounds = Bounds {
            width: config.width,
            height: config.height,
        };
        Self {
            entities: EntityManager::new(),
            bounds,
            config,
            draw_list: Vec::new(),
            outcome: Outcome::Running,
        }
    }
}

/// The frame driver. See the module docs for the per-frame contract.
pub struct Engine {
    world: World,
    schedule: Schedule,
}

impl Engine {
    /// Engine with a nondeterministic spawn sequence.
    pub fn new(config: GameConfig) -> Result<Self, EcsError> {
        let interval = Duration::from_millis(config.enemy.spawn_interval_ms);
        Self::with_spawner(config, Spawner::new(interval))
    }

    /// Engine whose enemy spawns replay deterministically for a given seed.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, EcsError> {
        let interval = Duration::from_millis(config.enemy.spawn_interval_ms);
        Self::with_spawner(config, Spawner::with_seed(interval, seed))
    }

    fn with_spawner(config: GameConfig, spawner: Spawner) -> Result<Self, EcsError> {
        let mut world = World::new(config);
        world.entities.register(Tag::Player, Cardinality::Unique);
        world.entities.register(Tag::Bullet, Cardinality::Multi);
        world.entities.register(Tag::Enemy, Cardinality::Multi);
        Self::spawn_player(&mut world)?;
        // Admit the player before the first frame so every system can rely
        // on the unique slot being filled.
        world.entities.update();

        let mut schedule = Schedule::new();
        schedule.add(spawner);
        schedule.add(EnemyMovement);
        schedule.add(UserInput);
        schedule.add(Kinematics);
        schedule.add(Collision);
        schedule.add(Render);

        log::info!(
            "engine ready: {}x{} world, {} systems",
            world.bounds.width,
            world.bounds.height,
            schedule.len()
        );
        Ok(Self { world, schedule })
    }

    fn spawn_player(world: &mut World) -> Result<(), EcsError> {
        let config = &world.config.player;
        let position = Vec2::new(
            world.bounds.width / 2.0 - config.sprite_width,
            world.bounds.height / 2.0 - config.sprite_height,
        );
        let sprite = Sprite {
            image: SpriteId(1),
            width: config.sprite_width,
            height: config.sprite_height,
        };
        let speed = config.speed;
        let health = config.health;
        let damage = config.damage;

        let player = world.entities.add(Tag::Player)?;
        player.set(Component::Sprite(sprite));
        player.set(Component::Position(Position(position)));
        player.set(Component::Velocity(Velocity(Vec2::ZERO)));
        player.set(Component::Speed(Speed { value: speed }));
        player.set(Component::Input(Input::default()));
        player.set(Component::Score(Score { value: 0 }));
        player.set(Component::Health(Health { value: health }));
        player.set(Component::Damage(Damage { value: damage }));
        Ok(())
    }

    /// Advance the simulation by one frame.
    pub fn step(&mut self) -> Result<Outcome, EcsError> {
        self.world.entities.update();
        self.schedule.run(&mut self.world)?;
        Ok(self.world.outcome)
    }

    /// Feed one input state change into the player's input component.
    ///
    /// Pressing left or right also flips the sprite to face that way, the
    /// same way the key handler swaps the facing image.
    pub fn apply(&mut self, event: InputEvent) -> Result<(), EcsError> {
        let player = self.world.entities.expect_unique_mut(Tag::Player)?;
        match event {
            InputEvent::Move { direction, pressed } => {
                let movement = &mut player.require_input_mut()?.movement;
                match direction {
                    Direction::Up => movement.up = pressed,
                    Direction::Down => movement.down = pressed,
                    Direction::Left => movement.left = pressed,
                    Direction::Right => movement.right = pressed,
                }
                if pressed {
                    match direction {
                        Direction::Left => player.require_sprite_mut()?.image = SpriteId(0),
                        Direction::Right => player.require_sprite_mut()?.image = SpriteId(1),
                        _ => {}
                    }
                }
            }
            InputEvent::MouseMoved(position) => {
                player.require_input_mut()?.mouse.position = position;
            }
            InputEvent::MousePressed(button) => {
                let mouse = &mut player.require_input_mut()?.mouse;
                match button {
                    MouseButton::Left => mouse.left_click = true,
                    MouseButton::Right => mouse.right_click = true,
                }
            }
        }
        Ok(())
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The draw commands produced by the most recent step.
    pub fn draw_list(&self) -> &[DrawCommand] {
        &self.world.draw_list
    }
}
