//! # Glimt — A Headless Arcade Shooter Core
//!
//! The full simulation of a top-down arena shooter — a tag-indexed entity
//! manager with deferred structural mutation, a fixed six-system pipeline,
//! and a draw-command output layer — with no window, GPU, or audio attached.
//! An embedder owns the clock and the canvas: it feeds
//! [`InputEvent`](input::InputEvent)s in, calls
//! [`Engine::step`](engine::Engine::step) once per frame, and presents the
//! resulting [`DrawCommand`](draw::DrawCommand) list however it likes.
//!
//! Start with `use glimt::prelude::*` and build an
//! [`Engine`](engine::Engine).

pub mod config;
pub mod draw;
pub mod ecs;
pub mod engine;
pub mod input;
pub mod math;
pub mod prelude;
pub mod systems;
