//! Draw commands.
//!
//! The simulation decides *what* to draw; an external presenter decides how.
//! Each frame the render system rebuilds the world's draw list as a flat
//! sequence of [`DrawCommand`]s carrying exactly the data a backend needs —
//! no canvas, no pixels, no GPU types leak in here.

use crate::ecs::SpriteId;
use crate::math::Vec2;

/// An RGB color, 8 bits per channel.
pub type Rgb = [u8; 3];

/// The bullet and reticule accent color.
pub const FUCHSIA: Rgb = [255, 0, 255];

/// Enemy stroke colors indexed by remaining health. Index 0 is unused —
/// enemies spawn with health in `[3, 10)` and are destroyed at 0.
const ENEMY_PALETTE: [Rgb; 9] = [
    [0, 0, 0],       // unused
    [255, 0, 0],     // red
    [255, 165, 0],   // orange
    [255, 255, 0],   // yellow
    [0, 128, 0],     // green
    [0, 255, 255],   // cyan
    [0, 0, 255],     // blue
    [75, 0, 130],    // indigo
    [128, 0, 128],   // purple
];

/// Map an enemy's remaining health to its stroke color.
pub fn health_color(health: i32) -> Rgb {
    let index = health.clamp(1, ENEMY_PALETTE.len() as i32 - 1) as usize;
    ENEMY_PALETTE[index]
}

/// One drawing instruction for the presenter, in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// An image at a position, top-left anchored.
    Sprite {
        image: SpriteId,
        position: Vec2,
        width: f32,
        height: f32,
    },
    /// A filled disc.
    Disc {
        center: Vec2,
        radius: f32,
        color: Rgb,
    },
    /// A closed polygon outline: `vertices` are offsets from `position`,
    /// rotated by `rotation` radians.
    Polygon {
        position: Vec2,
        rotation: f32,
        vertices: Vec<Vec2>,
        stroke: Rgb,
    },
    /// The aiming reticule, a stroked circle at the mouse position.
    Reticule { center: Vec2, radius: f32 },
    /// A text label anchored at `at`.
    Text { text: String, at: Vec2 },
}
