//! The entity-component runtime: component records, entities, and the
//! manager that reconciles structural changes between frames.

pub mod component;
pub mod entity;
pub mod error;
pub mod manager;

pub use component::{
    Component, ComponentKind, Damage, Health, Input, Mouse, Movement, Polygon, Position, Score,
    Speed, Sprite, SpriteId, Velocity,
};
pub use entity::{Entity, EntityId, Tag};
pub use error::EcsError;
pub use manager::{Cardinality, EntityManager};
