//! Position integration.
//!
//! One Euler step per frame: every entity carrying both a position and a
//! velocity advances by its velocity. Entities missing either component are
//! left alone. There is no delta-time scaling; speeds are tuned in
//! units-per-frame.

use super::System;
use crate::ecs::EcsError;
use crate::engine::World;

pub struct Kinematics;

impl System for Kinematics {
    fn name(&self) -> &'static str {
        "kinematics"
    }

    fn run(&mut self, world: &mut World) -> Result<(), EcsError> {
        for id in world.entities.ids() {
            let Some(entity) = world.entities.get_mut(id) else {
                continue;
            };
            let Some(velocity) = entity.velocity().map(|v| v.0) else {
                continue;
            };
            if let Some(position) = entity.position_mut() {
                position.0 += velocity;
            }
        }
        Ok(())
    }
}
