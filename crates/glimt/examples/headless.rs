//! Run the simulation without a window for a few hundred frames.
//!
//! A scripted player holds a direction, tracks an imaginary cursor, and
//! clicks every 30 frames. Run with `RUST_LOG=debug` to watch spawns and
//! collisions scroll by.

use glimt::prelude::*;

fn main() -> Result<(), EcsError> {
    env_logger::init();

    let mut config = GameConfig::default();
    // Spawn fast so a short run sees plenty of enemies.
    config.enemy.spawn_interval_ms = 100;
    let mut engine = Engine::with_seed(config, 0x911f)?;

    engine.apply(InputEvent::Move {
        direction: Direction::Right,
        pressed: true,
    })?;

    for frame in 0u32..300 {
        // Aim at the center-right of the arena and fire now and then.
        engine.apply(InputEvent::MouseMoved(Vec2::new(1700.0, 540.0)))?;
        if frame % 30 == 0 {
            engine.apply(InputEvent::MousePressed(MouseButton::Left))?;
        }

        if engine.step()? == Outcome::PlayerDied {
            log::info!("died on frame {frame}");
            break;
        }

        std::thread::sleep(std::time::Duration::from_millis(16));
    }

    let world = engine.world();
    let player = world.entities.expect_unique(Tag::Player)?;
    log::info!(
        "final score {}, health {}, {} entities live, {} draw commands",
        player.require_score()?.value,
        player.require_health()?.value,
        world.entities.len(),
        world.draw_list.len()
    );
    Ok(())
}
