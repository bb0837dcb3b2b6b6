//! Input events from the outside world.
//!
//! The simulation never reads raw keyboard or mouse events. An external event
//! source translates whatever it receives (DOM events, winit events, a test
//! script) into [`InputEvent`]s and feeds them to
//! [`Engine::apply`](crate::engine::Engine::apply), which mutates exactly one
//! component: the player's [`Input`](crate::ecs::Input).

use crate::math::Vec2;

/// A movement direction, already mapped from whatever key bindings the event
/// source uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A mouse button the simulation cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

/// One input state change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A movement key was pressed (`pressed = true`) or released.
    Move {
        direction: Direction,
        pressed: bool,
    },
    /// The cursor moved to a new world-space position.
    MouseMoved(Vec2),
    /// A mouse button went down. Click flags are edge-triggered: the input
    /// system consumes and clears them once per frame.
    MousePressed(MouseButton),
}
