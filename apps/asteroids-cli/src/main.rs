use anyhow::Context;
use asteroids_input::{ControlSteps, InputRouter};
use asteroids_kernel::{Flight, FlightConfig, FlightEvent, ManualClock};
use asteroids_render::{DebugTextRenderer, FrameLoop, FrameOutcome, FrameView};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "asteroids-cli", about = "Headless asteroids flight runner")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions
    Info,
    /// Print the effective flight config as YAML
    Config {
        /// YAML config file; defaults are used when omitted
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
    /// Fly the ship for a number of frames with scripted key presses
    Fly {
        /// YAML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Number of frames to run
        #[arg(short, long, default_value = "120")]
        frames: u64,
        /// Simulated milliseconds between frames
        #[arg(long, default_value = "16")]
        frame_ms: u64,
        /// One key per frame (w/s/a/d/z/p); '.' presses nothing
        #[arg(short, long, default_value = "")]
        keys: String,
        /// Override the config seed
        #[arg(short, long)]
        seed: Option<u64>,
        /// Print the final frame as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("asteroids-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("kernel: {}", asteroids_kernel::crate_info());
            println!("input: {}", asteroids_input::crate_info());
            println!("render: {}", asteroids_render::crate_info());
        }
        Commands::Config { path } => {
            let config = load_config(path.as_deref())?;
            print!("{}", config.to_yaml()?);
        }
        Commands::Fly {
            config,
            frames,
            frame_ms,
            keys,
            seed,
            json,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(seed) = seed {
                config.seed = seed;
            }
            fly(&config, frames, frame_ms, &keys, json)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<FlightConfig> {
    match path {
        Some(path) => FlightConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(FlightConfig::default()),
    }
}

fn fly(
    config: &FlightConfig,
    frames: u64,
    frame_ms: u64,
    keys: &str,
    json: bool,
) -> anyhow::Result<()> {
    let router = InputRouter::new(ControlSteps {
        thrust: config.thrust_step,
        yaw: config.yaw_step,
        azimuth: config.azimuth_step,
    });
    let mut frame_loop = FrameLoop::new(Flight::new(config, 0), ManualClock::new(0));
    let mut renderer = DebugTextRenderer::new();
    let mut script = keys.chars();

    for _ in 0..frames {
        if let Some(control) = script.next().and_then(|key| router.route(key)) {
            frame_loop.apply(control);
        }
        frame_loop.clock().advance(frame_ms);
        if let FrameOutcome::Drawn(report) = frame_loop.frame(&mut renderer) {
            tracing::debug!(
                tick = report.tick,
                x = report.position.x,
                y = report.position.y,
                z = report.position.z,
                wrapped = report.wrapped,
                "frame"
            );
        }
    }

    let events = frame_loop.flight_mut().drain_events();
    let wraps = events
        .iter()
        .filter(|e| matches!(e, FlightEvent::Wrapped { .. }))
        .count();
    tracing::info!(frames, wraps, events = events.len(), "flight finished");

    if json {
        let view = FrameView::capture(frame_loop.flight());
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", renderer.last_frame());
    }
    Ok(())
}
