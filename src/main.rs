//! Skyfall entry point
//!
//! Windowed backends live outside the crate, so the binary runs the full
//! lifecycle headless: a scripted pilot weaves and fires for a few hundred
//! frames at a nominal 60 Hz while the log shows what the sim is doing.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use skyfall::consts::MAX_BEAMS;
use skyfall::engine::{EntityKind, Key, ScriptedInput};
use skyfall::render::NullSurface;
use skyfall::Game;

const DEMO_FRAMES: usize = 600;
const FRAME: Duration = Duration::from_micros(16_667);

fn demo_script() -> ScriptedInput {
    let mut frames = Vec::with_capacity(DEMO_FRAMES);
    for i in 0..DEMO_FRAMES {
        // Weave: a second left, a second right, with a climb every so often
        let mut held = vec![if (i / 60) % 2 == 0 { Key::Left } else { Key::Right }];
        if (i / 120) % 3 == 0 {
            held.push(Key::Up);
        }
        // Tap fire three times a second
        let pressed = if i % 20 == 0 { vec![Key::Fire] } else { vec![] };
        frames.push((held, pressed));
    }
    ScriptedInput::new(frames)
}

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut game = Game::new(seed, demo_script(), NullSurface::new());
    game.on_start();

    let mut frame = 0u64;
    loop {
        let quit = match game.on_frame(FRAME.as_secs_f32()) {
            Ok(quit) => quit,
            Err(e) => {
                log::error!("frame {frame} failed: {e}");
                break;
            }
        };
        frame += 1;

        if frame % 60 == 0 {
            let store = &game.state().store;
            log::info!(
                "frame {frame}: {} entities, {}/{MAX_BEAMS} beams in flight",
                store.len(),
                store.count_of(EntityKind::Beam),
            );
        }

        if quit || game.input_mut().finished() {
            break;
        }
        game.input_mut().step();
        std::thread::sleep(FRAME);
    }

    game.on_exit();
}
