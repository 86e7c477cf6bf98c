use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use terrarun::config::{FileConfig, sim};
use terrarun::domain::{GeoPoint, Leaderboard};
use terrarun::geometry::area_m2;
use terrarun::output::write_run_geojson;
use terrarun::render::ConsoleView;
use terrarun::sim::{LoopRoute, RunOutcome, RunSession, SessionConfig};

/// Simulate a territory run: trace a loop on the map and claim ground
/// from the rival zone.
///
/// Examples:
///   # Full practice loop with default pacing
///   terrarun
///
///   # Instant run, resolved territories written as GeoJSON
///   terrarun --fast -o run.geojson
///
///   # Stop early after 10 ticks
///   terrarun --fast --steps 10
///
///   # Start somewhere else, steeper loop tilt
///   terrarun --lat 52.5200 --lon 13.4050 --route-rotation 45
#[derive(Parser, Debug)]
#[command(name = "terrarun")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches terrarun.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start latitude (use with --lon)
    #[arg(long, requires = "lon")]
    lat: Option<f64>,

    /// Start longitude (use with --lat)
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Milliseconds between simulated position ticks
    #[arg(long, default_value = "200")]
    interval_ms: u64,

    /// Stop after this many ticks instead of completing the loop
    #[arg(long)]
    steps: Option<u32>,

    /// Tilt of the simulated loop, counter-clockwise degrees
    #[arg(long, default_value = "20.0", allow_hyphen_values = true)]
    route_rotation: f64,

    /// Tilt of the rival zone about the start point, counter-clockwise degrees
    #[arg(long, default_value = "15.0", allow_hyphen_values = true)]
    rival_rotation: f64,

    /// Skip the inter-tick sleep and run the loop instantly
    #[arg(long)]
    fast: bool,

    /// Write the resolved territories as a GeoJSON file
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Enable verbose map-event logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let lat = args
        .lat
        .or_else(|| file_config.as_ref().and_then(|c| c.lat))
        .unwrap_or(sim::START_LAT);
    let lon = args
        .lon
        .or_else(|| file_config.as_ref().and_then(|c| c.lon))
        .unwrap_or(sim::START_LON);
    let interval_ms = if args.interval_ms != sim::TICK_INTERVAL_MS {
        args.interval_ms
    } else {
        file_config
            .as_ref()
            .map(|c| c.interval_ms)
            .unwrap_or(sim::TICK_INTERVAL_MS)
    };
    let steps = args
        .steps
        .or_else(|| file_config.as_ref().and_then(|c| c.steps));
    let route_rotation = if (args.route_rotation - sim::ROUTE_ROTATION_DEG).abs() > 0.01 {
        args.route_rotation
    } else {
        file_config
            .as_ref()
            .map(|c| c.route_rotation)
            .unwrap_or(sim::ROUTE_ROTATION_DEG)
    };
    let rival_rotation = if (args.rival_rotation - sim::RIVAL_ROTATION_DEG).abs() > 0.01 {
        args.rival_rotation
    } else {
        file_config
            .as_ref()
            .map(|c| c.rival_rotation)
            .unwrap_or(sim::RIVAL_ROTATION_DEG)
    };
    let fast = args.fast || file_config.as_ref().map(|c| c.fast).unwrap_or(false);
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);
    let output = args
        .output
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.output.clone()));

    println!("terrarun - Territory Run Simulator");
    println!("==================================");
    println!();

    let start = GeoPoint::new(lat, lon);

    if verbose {
        println!("Configuration:");
        println!("  Start: ({:.4}, {:.4})", start.lat, start.lon);
        println!("  Tick interval: {}ms", interval_ms);
        println!("  Route rotation: {}°", route_rotation);
        println!("  Rival rotation: {}°", rival_rotation);
        if let Some(n) = steps {
            println!("  Early stop after: {} ticks", n);
        }
        if let Some(ref path) = output {
            println!("  Output: {}", path.display());
        }
        println!();
    }

    let session_config = SessionConfig {
        start,
        rival_rotation_deg: rival_rotation,
    };
    let mut session = RunSession::new(session_config, ConsoleView::new(verbose));

    let route = LoopRoute::new(start, route_rotation);
    let total_ticks = steps
        .map(|n| n.min(route.total_steps()))
        .unwrap_or(route.total_steps());

    println!(
        "Running from ({:.4}, {:.4}): {} ticks at {}ms",
        start.lat, start.lon, total_ticks, interval_ms
    );

    let progress = create_progress(total_ticks as u64);
    let run_start = Instant::now();

    session.start();
    for position in route.take(total_ticks as usize) {
        if !fast {
            std::thread::sleep(Duration::from_millis(interval_ms));
        }
        session.record_position(position);
        progress.inc(1);
    }
    let outcome = session
        .stop()
        .expect("session was started before the tick loop");

    progress.finish_with_message(format!(
        "Run finished [{:.1}s]",
        run_start.elapsed().as_secs_f32()
    ));
    println!();

    let mut leaderboard = Leaderboard::mock();
    report_outcome(&outcome, &session, &mut leaderboard);
    print_leaderboard(&leaderboard);

    if let Some(ref path) = output {
        write_run_geojson(path, &outcome, session.path().points())
            .context("Failed to write GeoJSON output")?;
        println!();
        println!("Wrote {}", path.display());
    }

    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );

    Ok(())
}

fn report_outcome(
    outcome: &RunOutcome,
    session: &RunSession<ConsoleView>,
    leaderboard: &mut Leaderboard,
) {
    match outcome {
        RunOutcome::Claimed {
            resolution,
            territory,
        } => {
            println!("Territory claimed!");
            println!(
                "  Your territory:  {:>10.0} m²",
                area_m2(territory)
            );
            println!(
                "  Captured:        {:>10.0} m² ({} part(s))",
                resolution.captured_area_m2,
                resolution.captured.0.len()
            );
            println!(
                "  Rival remainder: {:>10.0} m² ({} part(s))",
                resolution.remaining_area_m2,
                resolution.remaining.0.len()
            );
            println!(
                "  Rival score: {} -> {}",
                sim::RIVAL_SCORE,
                session.rival().score()
            );
            leaderboard.record("You", resolution.captured_area_m2);
        }
        RunOutcome::TooShort { points } => {
            println!("No territory this time ({} point(s) traced).", points);
        }
        RunOutcome::Fallback { territory, error } => {
            println!("Territory kept as traced outline ({}).", error);
            println!("  Your territory: {:>10.0} m²", area_m2(territory));
        }
    }
}

fn print_leaderboard(leaderboard: &Leaderboard) {
    println!();
    println!("Leaderboard");
    println!("-----------");
    for (i, entry) in leaderboard.entries().iter().enumerate() {
        println!("  {}. {} - {:.0} m²", i + 1, entry.name, entry.area_m2);
    }
}

fn create_progress(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} running [{bar:30}] {pos}/{len} ticks {msg}")
            .unwrap()
            .progress_chars("=> "),
    );
    pb
}
