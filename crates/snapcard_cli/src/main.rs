//! Snapcard demo runner
//!
//! Drives the draggable-card demo headlessly: either a built-in scripted
//! drag/release flow or a scenario file.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use snapcard_animation::DEFAULT_STEP_FRACTION;
use snapcard_app::{run_scenario, CardBoard, HeadlessRunConfig, HeadlessRuntime, Scenario};
use snapcard_core::events::{event_types, Event, EventData, EventDispatcher};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snapcard", about = "Draggable snap-back card demo", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Logical viewport width
    #[arg(long, global = true, default_value_t = 1280)]
    width: u32,

    /// Logical viewport height
    #[arg(long, global = true, default_value_t = 720)]
    height: u32,

    /// Logical milliseconds per frame
    #[arg(long, global = true, default_value_t = 16)]
    tick_ms: u64,
}

#[derive(Subcommand)]
enum Command {
    /// Run the built-in drag/release demo and log the snap-back frames
    Demo {
        /// Maximum frame budget for the snap-back
        #[arg(long, default_value_t = 120)]
        frames: u32,

        /// Snap-back step fraction
        #[arg(long, default_value_t = DEFAULT_STEP_FRACTION)]
        step_fraction: f32,
    },
    /// Execute a scenario file against the demo board
    Run {
        /// Path to the scenario JSON
        scenario: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let cfg = HeadlessRunConfig {
        width: cli.width,
        height: cli.height,
        tick_ms: cli.tick_ms,
        ..Default::default()
    };

    match cli.command {
        Command::Demo {
            frames,
            step_fraction,
        } => run_demo(cfg, frames, step_fraction),
        Command::Run { scenario } => run_file(cfg, &scenario),
    }
}

fn run_demo(cfg: HeadlessRunConfig, frames: u32, step_fraction: f32) -> Result<()> {
    let mut board = CardBoard::demo(cfg.width as f32, cfg.height as f32);
    board.set_step_fraction(step_fraction);

    // Observe the host-toolkit events the demo synthesizes
    let mut dispatcher = EventDispatcher::new();
    for card in board.cards() {
        let id = card.widget_id();
        dispatcher.register(id, event_types::DRAG, move |event| {
            if let EventData::Drag { delta_x, delta_y } = event.data {
                tracing::info!(widget_id = id, delta_x, delta_y, "drag");
            }
        });
        dispatcher.register(id, event_types::DRAG_END, move |_| {
            tracing::info!(widget_id = id, "release");
        });
    }

    // Scripted gesture: drag the first card well off its rest position,
    // then let go
    let widget_id = board
        .card_at(0)
        .context("demo board has no cards")?
        .widget_id();
    let gesture = [
        Event::drag(widget_id, 60.0, -20.0, 0),
        Event::drag(widget_id, 50.0, -25.0, 16),
        Event::drag(widget_id, 30.0, -15.0, 32),
        Event::drag_end(widget_id, 48),
    ];
    for event in gesture {
        let mut event = event;
        dispatcher.dispatch(&mut event);
        board.handle_event(&event)?;
    }

    let released = board.card_at(0).context("demo board has no cards")?;
    tracing::info!(
        offset_x = released.offset().x,
        offset_y = released.offset().y,
        "snap-back starting"
    );

    let mut run_cfg = cfg;
    run_cfg.max_frames = frames;
    HeadlessRuntime::run(run_cfg, |ctx| {
        if !board.has_active_cards() {
            return;
        }
        board.tick();
        if let Some(card) = board.card_at(0) {
            tracing::info!(
                frame = ctx.frame_index,
                elapsed_ms = ctx.elapsed_ms,
                offset_x = card.offset().x,
                offset_y = card.offset().y,
                "frame"
            );
        }
    })?;

    if !board.all_at_rest() {
        bail!("card did not settle within {frames} frames");
    }
    tracing::info!("all cards back at rest");
    Ok(())
}

fn run_file(cfg: HeadlessRunConfig, path: &Path) -> Result<()> {
    let scenario = Scenario::from_path(path)
        .with_context(|| format!("failed to load scenario {}", path.display()))?;
    let mut board = CardBoard::demo(cfg.width as f32, cfg.height as f32);

    let outcome = run_scenario(&mut board, &scenario, cfg)?;
    let report = outcome.report();
    tracing::info!(
        elapsed_frames = report.elapsed_frames,
        elapsed_ms = report.elapsed_ms,
        "scenario finished"
    );

    if outcome.is_failed() {
        bail!(
            "scenario failed at step {:?} ({:?}): {}",
            report.failed_index,
            report.failed_step,
            report.message.as_deref().unwrap_or("unknown")
        );
    }
    Ok(())
}
