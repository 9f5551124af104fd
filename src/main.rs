//! Terminal synthwave runner (default binary).
//!
//! Drives the grid simulation from a monotonic clock at a fixed frame cadence and
//! renders every frame into the terminal through the framebuffer pipeline.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use synthwave_grid::config::{AppConfig, ENV_LOG_FILTER};
use synthwave_grid::core::{FrameClock, GridSimulation};
use synthwave_grid::input::{handle_key_event, should_quit};
use synthwave_grid::term::{FrameBuffer, FrameKey, RedrawGate, SceneView, TerminalRenderer, Viewport};
use synthwave_grid::types::{GridConfig, SceneAction};

/// A paused (unchanging) scene is still flushed this often.
const IDLE_REDRAW_MS: u64 = 500;

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_tracing(log_path: Option<&str>) -> Result<()> {
    // Logging to the terminal would tear the frame; only log when a file is given.
    let Some(path) = log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
    Ok(())
}

fn build_simulation(grid: &GridConfig, seed: u64) -> Result<GridSimulation> {
    info!(seed, "building simulation");
    Ok(GridSimulation::from_seed(grid.clone(), seed)?)
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut sim = build_simulation(&config.grid, config.seed.unwrap_or_else(rand::random))?;

    let start = Instant::now();
    let frame = Duration::from_millis(config.frame_interval_ms);
    let mut clock = FrameClock::new();
    let mut view = SceneView::new();
    let mut gate = RedrawGate::new(IDLE_REDRAW_MS);
    let mut fb = FrameBuffer::new(0, 0);
    let mut paused = false;

    loop {
        let frame_start = Instant::now();

        // Pausing keeps the clock running so resuming does not jump.
        if let Some(delta) = clock.tick(start.elapsed().as_secs_f64()) {
            if !paused {
                sim.update(delta);
            }
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let key = FrameKey {
            version: sim.version(),
            viewport,
            paused,
        };
        if gate.should_redraw(start.elapsed().as_millis() as u64, key) {
            let overlay = paused.then_some("PAUSED");
            view.render_into(&sim, viewport, overlay, &mut fb);
            term.present(&mut fb)?;
        }

        // Input until the next frame is due.
        let mut timeout = frame.saturating_sub(frame_start.elapsed());
        while event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(SceneAction::TogglePause) => {
                            paused = !paused;
                            info!(paused, "pause toggled");
                        }
                        Some(SceneAction::Restart) => {
                            sim = build_simulation(&config.grid, rand::random())?;
                            gate.invalidate();
                        }
                        None => {}
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    gate.invalidate();
                }
                _ => {}
            }
            timeout = frame.saturating_sub(frame_start.elapsed());
        }
    }
}
