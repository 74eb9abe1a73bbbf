//! Terminal charades runner (default binary).
//!
//! Picks a category, then shows one card at a time. Cards are marked with
//! tilt gestures (from the TCP sensor feed or the arrow keys) or by key.
//! Rendering uses crossterm and a framebuffer-based renderer.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use charades::sensor::{SensorBridge, SensorHub};
use charades::term::{
    FeedStatusView, FrameBuffer, GameView, PickerView, RenderThrottle, TerminalRenderer, Viewport,
};
use charades::types::TICK_MS;
use charades::{App, AppConfig, ScreenView};

/// Repaint at least this often even when nothing changed.
const HEARTBEAT_MS: u64 = 1_000;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;
    info!(seed = ?config.seed, "charades starting");

    let hub = SensorHub::new(config.sensor.buffer);
    let bridge = if config.sensor_disabled {
        info!("sensor feed disabled");
        None
    } else {
        match SensorBridge::start(config.sensor.clone(), hub.clone()) {
            Ok(bridge) => Some(bridge),
            Err(e) => {
                // Keyboard play still works without the feed.
                warn!(error = %e, "sensor feed unavailable");
                None
            }
        }
    };
    let feed = FeedStatusView {
        addr: bridge.as_ref().map(SensorBridge::addr),
    };

    let mut app = App::new(&config, hub);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app, &feed);

    // Always try to restore terminal state.
    let _ = term.exit();
    drop(bridge);
    info!("charades stopped");
    result
}

fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(());
    };

    let log_file = std::fs::File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let filter = tracing_subscriber::EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, app: &mut App, feed: &FeedStatusView) -> Result<()> {
    let picker = PickerView::default();
    let game_view = GameView::default();
    let mut throttle = RenderThrottle::new(HEARTBEAT_MS);
    let mut fb = FrameBuffer::new(0, 0);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    while !app.should_quit() {
        // Render.
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, app.revision()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let viewport = Viewport::new(w, h);
            match app.view() {
                ScreenView::Categories {
                    categories,
                    selected,
                } => picker.render_into(categories, selected, viewport, &mut fb),
                ScreenView::Game(snap) => {
                    game_view.render_into_with_feed(&snap, Some(feed), viewport, &mut fb)
                }
            }
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => app.handle_key(key),
                    KeyEventKind::Release => app.handle_key_release(key.code),
                },
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            app.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }

    Ok(())
}
