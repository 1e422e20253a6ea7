//! Stick Bridge entry point
//!
//! Headless host: drives the simulation with the autopilot for a fixed number
//! of ticks, renders every tick into a recording canvas, and prints the final
//! state as JSON.
//!
//! Usage: `stick-bridge [seed] [ticks]`

use std::error::Error;

use stick_bridge::render::{RecordingCanvas, draw};
use stick_bridge::sim::{Autopilot, GameLoop, GameState};

const DEFAULT_SEED: u64 = 0x5eed;
/// One minute at 60 ticks per second
const DEFAULT_TICKS: u64 = 60 * 60;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().map(|s| s.parse::<u64>()).transpose()?.unwrap_or(DEFAULT_SEED);
    let ticks = args.next().map(|s| s.parse::<u64>()).transpose()?.unwrap_or(DEFAULT_TICKS);

    log::info!("Stick Bridge (headless) starting: seed {seed}, {ticks} ticks");

    let mut game = GameLoop::new(seed);
    let pilot = Autopilot::default();
    let mut canvas = RecordingCanvas::new();
    let mut crossings = 0u32;
    let mut falls = 0u32;

    for _ in 0..ticks {
        let was_gliding = game.is_scrolling();
        let input = pilot.decide(&game);
        game.advance(input.held);

        if was_gliding && !game.is_scrolling() {
            crossings += 1;
        }
        if game.state() == GameState::Falling {
            falls += 1;
        }

        canvas.clear();
        draw(&game, &mut canvas);
    }

    log::info!(
        "Finished after {} ticks: {crossings} crossings, {falls} falls, {} draw calls in last frame",
        game.time_ticks(),
        canvas.commands().len()
    );
    println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    Ok(())
}
