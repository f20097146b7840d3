//! Command-line driver for the annealing demo.

use std::path::PathBuf;

use anyhow::ensure;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tsp_anneal::anneal::{AnnealConfig, TemperatureSchedule};
use tsp_anneal::plot;
use tsp_anneal::tsp::Instance;

/// Simulated annealing on a random travelling-salesman instance,
/// rendered as an animated tour next to its energy trace.
#[derive(Parser, Debug)]
#[command(about, version)]
struct Args {
    /// Number of random points to tour.
    #[arg(default_value_t = 15)]
    num_points: usize,

    /// Number of annealing steps.
    #[arg(default_value_t = 2000)]
    kmax: usize,

    /// Seed for point generation and the annealing run.
    #[arg(long)]
    seed: Option<u64>,

    /// Output GIF path.
    #[arg(long, default_value = "annealing.gif")]
    out: PathBuf,

    /// Render a frame every N steps. Defaults to roughly 200 frames
    /// per run.
    #[arg(long)]
    frame_every: Option<usize>,

    /// Also write a PNG snapshot of the best tour found.
    #[arg(long)]
    png: Option<PathBuf>,

    /// Use geometric cooling with this decay factor instead of the
    /// default linear decay to zero.
    #[arg(long)]
    alpha: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    ensure!(
        args.num_points >= 2,
        "need at least 2 points, got {}",
        args.num_points
    );
    ensure!(args.kmax >= 1, "need at least 1 annealing step");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let instance = Instance::random(args.num_points, &mut rng);

    let schedule = match args.alpha {
        Some(alpha) => TemperatureSchedule::Geometric { alpha },
        None => TemperatureSchedule::Linear,
    };
    let mut config = AnnealConfig::default()
        .with_steps(args.kmax)
        .with_schedule(schedule);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config.validate().map_err(anyhow::Error::msg)?;

    let frame_every = args
        .frame_every
        .unwrap_or_else(|| (args.kmax / 200).max(1));
    info!(
        "annealing {} points over {} steps (frame every {})",
        args.num_points, args.kmax, frame_every
    );

    let result = plot::animate_gif(&args.out, &instance, &config, frame_every)?;

    info!("wrote {}", args.out.display());
    info!(
        "energy {:.4} -> {:.4}; {}/{} moves accepted, {} improving",
        result.initial_energy,
        result.best_energy,
        result.accepted_moves,
        result.steps,
        result.improving_moves
    );

    if let Some(png) = &args.png {
        plot::render_png(png, &instance, &result.best, &result.energy_history, 0.0)?;
        info!("wrote {}", png.display());
    }

    Ok(())
}
