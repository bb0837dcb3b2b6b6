//! # Systems — The Per-Frame Update Pipeline
//!
//! A system reads and mutates component state through the world's
//! [`EntityManager`](crate::ecs::EntityManager); systems never call each
//! other and communicate only through that shared state. The [`Schedule`]
//! runs them in a fixed order, once per frame:
//!
//! Spawner → EnemyMovement → UserInput → Kinematics → Collision → Render
//!
//! That total ordering *is* the concurrency-safety mechanism: there is no
//! parallelism and no locking, and structural changes a system requests are
//! deferred to the next frame's synchronization point, so no system can
//! invalidate another's iteration. No system calls
//! [`EntityManager::update`](crate::ecs::EntityManager::update) itself.

mod collision;
mod enemy_movement;
mod kinematics;
mod render;
mod spawner;
mod user_input;

pub use collision::Collision;
pub use enemy_movement::EnemyMovement;
pub use kinematics::Kinematics;
pub use render::Render;
pub use spawner::Spawner;
pub use user_input::UserInput;

use crate::ecs::EcsError;
use crate::engine::World;

/// A pipeline stage. Runs exactly once per frame against the shared world.
///
/// Errors are programming-contract violations (see
/// [`EcsError`](crate::ecs::EcsError)); the frame driver aborts the step
/// rather than swallow them.
pub trait System {
    /// Short name for logs and diagnostics.
    fn name(&self) -> &'static str;

    fn run(&mut self, world: &mut World) -> Result<(), EcsError>;
}

/// An ordered list of systems, run front to back.
pub struct Schedule {
    systems: Vec<Box<dyn System>>,
}

impl Schedule {
    pub fn new() -> Self {
        Self {
            systems: Vec::new(),
        }
    }

    /// Append a system to the end of the pipeline.
    pub fn add<S: System + 'static>(&mut self, system: S) {
        self.systems.push(Box::new(system));
    }

    /// Run every system in order. Stops at the first contract violation.
    pub fn run(&mut self, world: &mut World) -> Result<(), EcsError> {
        for system in &mut self.systems {
            if let Err(err) = system.run(world) {
                log::error!("system `{}` failed: {err}", system.name());
                return Err(err);
            }
        }
        Ok(())
    }

    /// Number of systems in the pipeline.
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new()
    }
}
