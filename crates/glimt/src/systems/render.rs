//! Frame composition.
//!
//! The simulation never touches a canvas or a GPU. This system rebuilds the
//! world's [`DrawCommand`](crate::draw::DrawCommand) list from scratch each
//! frame; a presentation layer (or a test) consumes it after the step. The
//! list is cleared first, so a frame's output is exactly what this pass
//! emitted.
//!
//! Per tag: the player contributes its sprite, a reticule at the cursor, and
//! the score/health readouts; bullets are fuchsia discs; enemies are stroked
//! polygons colored by remaining health.

use super::System;
use crate::draw::{self, DrawCommand, FUCHSIA};
use crate::ecs::{EcsError, Tag};
use crate::engine::World;
use crate::math::Vec2;

pub struct Render;

impl System for Render {
    fn name(&self) -> &'static str {
        "render"
    }

    fn run(&mut self, world: &mut World) -> Result<(), EcsError> {
        let (width, height) = (world.bounds.width, world.bounds.height);
        let bullet_radius = world.config.bullet.radius;
        world.draw_list.clear();

        for entity in world.entities.iter() {
            match entity.tag() {
                Tag::Player => {
                    let sprite = entity.require_sprite()?;
                    let position = entity.require_position()?.0;
                    world.draw_list.push(DrawCommand::Sprite {
                        image: sprite.image,
                        position,
                        width: sprite.width,
                        height: sprite.height,
                    });
                    world.draw_list.push(DrawCommand::Reticule {
                        center: entity.require_input()?.mouse.position,
                        radius: 10.0,
                    });
                    world.draw_list.push(DrawCommand::Text {
                        text: format!("Score: {}", entity.require_score()?.value),
                        at: Vec2::new(width * 0.8, height * 0.1),
                    });
                    world.draw_list.push(DrawCommand::Text {
                        text: format!("Health: {}", entity.require_health()?.value),
                        at: Vec2::new(width * 0.1, height * 0.1),
                    });
                }
                Tag::Bullet => {
                    world.draw_list.push(DrawCommand::Disc {
                        center: entity.require_position()?.0,
                        radius: bullet_radius,
                        color: FUCHSIA,
                    });
                }
                Tag::Enemy => {
                    let polygon = entity.require_polygon()?;
                    world.draw_list.push(DrawCommand::Polygon {
                        position: entity.require_position()?.0,
                        rotation: polygon.rotation,
                        vertices: polygon.vertices.clone(),
                        stroke: draw::health_color(entity.require_health()?.value),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::ecs::{
        Cardinality, Component, Damage, Health, Input, Polygon, Position, Score, Sprite, SpriteId,
        Velocity,
    };

    fn world() -> World {
        let mut world = World::new(GameConfig::default());
        world.entities.register(Tag::Player, Cardinality::Unique);
        world.entities.register(Tag::Bullet, Cardinality::Multi);
        world.entities.register(Tag::Enemy, Cardinality::Multi);
        let player = world.entities.add(Tag::Player).unwrap();
        player.set(Component::Position(Position(Vec2::new(500.0, 500.0))));
        player.set(Component::Sprite(Sprite {
            image: SpriteId(1),
            width: 100.0,
            height: 100.0,
        }));
        player.set(Component::Input(Input::default()));
        player.set(Component::Score(Score { value: 12 }));
        player.set(Component::Health(Health { value: 7 }));
        world.entities.update();
        world
    }

    #[test]
    fn player_contributes_sprite_reticule_and_stats() {
        let mut world = world();
        Render.run(&mut world).unwrap();

        assert_eq!(world.draw_list.len(), 4);
        assert!(matches!(
            world.draw_list[0],
            DrawCommand::Sprite {
                image: SpriteId(1),
                ..
            }
        ));
        assert!(matches!(world.draw_list[1], DrawCommand::Reticule { .. }));
        let texts: Vec<&str> = world
            .draw_list
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["Score: 12", "Health: 7"]);
    }

    #[test]
    fn bullets_and_enemies_get_their_shapes() {
        let mut world = world();
        let bullet = world.entities.add(Tag::Bullet).unwrap();
        bullet.set(Component::Position(Position(Vec2::new(10.0, 10.0))));
        bullet.set(Component::Velocity(Velocity(Vec2::ZERO)));
        bullet.set(Component::Damage(Damage { value: 1 }));
        let enemy = world.entities.add(Tag::Enemy).unwrap();
        enemy.set(Component::Position(Position(Vec2::new(20.0, 20.0))));
        enemy.set(Component::Polygon(Polygon::regular(50.0, 6)));
        enemy.set(Component::Health(Health { value: 6 }));
        world.entities.update();

        Render.run(&mut world).unwrap();

        let discs = world
            .draw_list
            .iter()
            .filter(|c| matches!(c, DrawCommand::Disc { .. }))
            .count();
        assert_eq!(discs, 1);
        let polygon = world
            .draw_list
            .iter()
            .find_map(|c| match c {
                DrawCommand::Polygon {
                    vertices, stroke, ..
                } => Some((vertices.len(), *stroke)),
                _ => None,
            })
            .unwrap();
        assert_eq!(polygon.0, 6);
        assert_eq!(polygon.1, crate::draw::health_color(6));
    }

    #[test]
    fn list_is_rebuilt_each_frame() {
        let mut world = world();
        Render.run(&mut world).unwrap();
        Render.run(&mut world).unwrap();
        assert_eq!(world.draw_list.len(), 4);
    }
}
