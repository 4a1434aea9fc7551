//! Wireframe Asteroids entry point
//!
//! Native headless run: a scripted pilot plays a fixed number of frames into
//! a vertex batch, then the final session snapshot is printed as JSON.
//!
//! Usage: `wireframe-asteroids [settings.json] [frames]`

use wireframe_asteroids::audio::NullAudio;
use wireframe_asteroids::platform::{Key, KeyboardState};
use wireframe_asteroids::renderer::FrameBatch;
use wireframe_asteroids::{Game, Settings};

const DEFAULT_SETTINGS_PATH: &str = "asteroids_settings.json";
const DEFAULT_FRAMES: u32 = 1800;
const FIXED_DT: f32 = 1.0 / 60.0;

/// Spin slowly, pulse thrust and fire twice a second
fn pilot(frame: u32, keyboard: &mut KeyboardState) {
    keyboard.set_key(Key::RotateRight, frame % 240 < 60);
    keyboard.set_key(Key::Thrust, frame % 300 < 20);
    keyboard.set_key(Key::Fire, frame % 30 == 0);
    keyboard.set_key(Key::Confirm, frame % 120 == 0);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let settings_path = args.next().unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());
    let frames = match args.next().map(|s| s.parse::<u32>()) {
        Some(Ok(n)) => n,
        Some(Err(err)) => {
            log::warn!("Invalid frame count ({err}), using {DEFAULT_FRAMES}");
            DEFAULT_FRAMES
        }
        None => DEFAULT_FRAMES,
    };

    let settings = Settings::load(&settings_path);
    let mut game = Game::new(&settings, NullAudio);
    let mut keyboard = KeyboardState::new();
    let mut batch = FrameBatch::new();

    for frame in 0..frames {
        pilot(frame, &mut keyboard);
        batch.clear();
        game.frame_with_dt(&keyboard, FIXED_DT, &mut batch);
        keyboard.end_frame();

        if game.quit_requested() {
            break;
        }
    }

    log::info!(
        "Final frame: {} line vertices, {} triangle vertices ({} bytes)",
        batch.lines.len(),
        batch.triangles.len(),
        batch.line_bytes().len() + batch.triangle_bytes().len()
    );
    log::info!(
        "Score {} | {} asteroids left | won: {}",
        game.state.score,
        game.state.asteroids.len(),
        game.state.won
    );

    match serde_json::to_string_pretty(&game.state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Failed to serialize snapshot: {err}"),
    }
}
