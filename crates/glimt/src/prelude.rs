//! Convenience re-exports — `use glimt::prelude::*` for the common items.
//!
//! Types only — all functionality is discoverable through methods on types,
//! not free functions.

pub use crate::config::{BulletConfig, ConfigError, EnemyConfig, GameConfig, PlayerConfig};
pub use crate::draw::{DrawCommand, Rgb};
pub use crate::ecs::{
    Cardinality, Component, ComponentKind, Damage, EcsError, Entity, EntityId, EntityManager,
    Health, Input, Movement, Polygon, Position, Score, Speed, Sprite, SpriteId, Tag, Velocity,
};
pub use crate::engine::{Bounds, Engine, Outcome, World};
pub use crate::input::{Direction, InputEvent, MouseButton};
pub use crate::math::Vec2;
pub use crate::systems::{Schedule, System};
