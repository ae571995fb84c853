//! First-person grid ray caster in a minifb window.
//!
//! Controls  ↑/W = forward  ↓/S = back  ←/A = turn left  →/D = turn right  Esc = quit
//!
//! ```bash
//! cargo run --release -- [--map level.txt] [--measured]
//! ```

use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use glam::Vec2;
use log::{error, info};
use minifb::{Key, Window, WindowOptions};

use raycaster_rs::{
    config::Opts,
    engine::RenderState,
    renderer::Software,
    sim::{InputCmd, KeyState},
    world::{Camera, GridMap},
};

fn main() -> anyhow::Result<()> {
    // ─────────── parse CLI ────────────
    let opts = Opts::parse();
    simplelog::WriteLogger::init(
        opts.log_level,
        simplelog::ConfigBuilder::new()
            .set_target_level(log::LevelFilter::Off)
            .set_location_level(log::LevelFilter::Off)
            .build(),
        std::io::stderr(),
    )?;
    opts.validate()?;

    // ─────────── load map & place camera ───────
    let map = match &opts.map {
        Some(path) => GridMap::from_file(path)
            .with_context(|| format!("cannot load map {}", path.display()))?,
        None => GridMap::builtin(),
    };

    let start = match opts.start {
        Some(pos) => pos,
        None => map
            .first_open_cell()
            .map(|cell| cell.as_vec2() + Vec2::splat(0.5))
            .context("map has no empty cell to start in")?,
    };
    let camera = Camera::facing(start, Vec2::X, opts.plane);

    let mut state = RenderState::new(map, camera, opts.palette(), opts.screen(), opts.motion())?;
    let mut renderer = Software::default();
    let mut clock = opts.clock();

    info!(
        "{}×{} map, start {:?}, {}×{} view",
        state.map.size(),
        state.map.size(),
        start,
        opts.width,
        opts.height
    );

    // ─────────── show window ────────────
    let mut win = Window::new("Raycaster", opts.width, opts.height, WindowOptions::default())?;
    win.set_target_fps(60);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let cmd = InputCmd::from(sample_keys(&win));
        state.update(cmd, clock.tick());

        let t0 = Instant::now();
        let mut presented = Ok(());
        state
            .render_frame(&mut renderer, |fb, w, h| {
                acc_time += t0.elapsed();
                acc_frames += 1;
                presented = win.update_with_buffer(fb, w, h);
            })
            .inspect_err(|e| error!("frame aborted: {e}"))?;
        presented?;

        if last_print.elapsed() >= Duration::from_secs(3) && acc_frames > 0 {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            info!("avg render: {:.2} ms  ({:.1} FPS)", avg_ms, 1000.0 / avg_ms);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}

/// Held movement keys, arrows and WASD alike.
fn sample_keys(win: &Window) -> KeyState {
    let mut keys = KeyState::empty();
    let held = |a, b| win.is_key_down(a) || win.is_key_down(b);
    keys.set(KeyState::TURN_LEFT, held(Key::Left, Key::A));
    keys.set(KeyState::TURN_RIGHT, held(Key::Right, Key::D));
    keys.set(KeyState::MOVE_FORWARD, held(Key::Up, Key::W));
    keys.set(KeyState::MOVE_BACKWARD, held(Key::Down, Key::S));
    keys
}
