//! Wealth Exchange Simulation
//!
//! Driver binary: builds the model from tuning.toml plus CLI overrides,
//! runs a fixed number of ticks, and writes periodic JSON snapshots.

use clap::Parser;
use std::fs;
use tracing::{error, info, warn};

use wealth_core::config::{Config, DEFAULT_TUNING_PATH};
use wealth_core::output::{
    generate_snapshot, write_current_state, write_snapshot, write_snapshot_to_dir,
    SnapshotGenerator,
};
use wealth_core::Model;

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "wealth_sim")]
#[command(about = "A minimal wealth exchange agent-based model")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate
    #[arg(long)]
    ticks: Option<u64>,

    /// Number of agents to spawn
    #[arg(long)]
    agents: Option<usize>,

    /// Grid width
    #[arg(long)]
    width: Option<u32>,

    /// Grid height
    #[arg(long)]
    height: Option<u32>,

    /// Interval between world snapshots (in ticks)
    #[arg(long)]
    snapshot_interval: Option<u64>,

    /// Path to the tuning file
    #[arg(long, default_value = DEFAULT_TUNING_PATH)]
    tuning: String,

    /// Output initial model state as JSON before running
    #[arg(long)]
    output_initial_state: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = Config::load_or_default(&args.tuning);

    let seed = args.seed.unwrap_or(config.simulation.default_seed);
    let ticks = args.ticks.unwrap_or(config.simulation.default_ticks);
    let agents = args.agents.unwrap_or(config.model.agents);
    let width = args.width.unwrap_or(config.model.width);
    let height = args.height.unwrap_or(config.model.height);
    let snapshot_interval = args
        .snapshot_interval
        .unwrap_or(config.simulation.snapshot_interval);

    println!("Wealth Exchange Simulation");
    println!("==========================");
    println!("Seed: {}", seed);
    println!("Ticks: {}", ticks);
    println!("Agents: {}", agents);
    println!("Grid: {}x{}", width, height);
    println!("Snapshot interval: {}", snapshot_interval);
    println!();

    // Ensure output directories exist
    fs::create_dir_all("output/snapshots").unwrap_or_else(|e| {
        warn!("could not create output directories: {}", e);
    });

    let mut model = match Model::new(agents, width, height, seed) {
        Ok(model) => model,
        Err(e) => {
            error!("invalid model parameters: {}", e);
            std::process::exit(1);
        }
    };
    info!(agents, width, height, "model constructed");

    let mut generator = SnapshotGenerator::new(snapshot_interval);

    if args.output_initial_state {
        let initial = generate_snapshot(&model, &mut generator, "initial_state");
        if let Err(e) = write_snapshot(&initial, "output/initial_state.json") {
            warn!("could not write initial state: {}", e);
        } else {
            println!("Wrote output/initial_state.json");
        }
    }

    // Initial snapshot
    let initial_snapshot = generate_snapshot(&model, &mut generator, "simulation_start");
    if let Err(e) = write_snapshot_to_dir(&initial_snapshot) {
        warn!("could not write initial snapshot: {}", e);
    }
    if let Err(e) = write_current_state(&initial_snapshot) {
        warn!("could not write current state: {}", e);
    }

    println!("Starting simulation...");
    println!();

    // Main simulation loop
    for tick in 0..ticks {
        let log = model.step();

        if tick % 10 == 0 && !log.is_empty() {
            info!(
                tick,
                events = log.len(),
                moves = log.move_count(),
                transfers = log.transfer_count(),
                "tick summary"
            );
        }

        if generator.should_snapshot(model.tick()) {
            let snapshot = generate_snapshot(&model, &mut generator, "periodic");
            if let Err(e) = write_snapshot_to_dir(&snapshot) {
                warn!("could not write snapshot at tick {}: {}", tick, e);
            }
            if let Err(e) = write_current_state(&snapshot) {
                warn!("could not write current state at tick {}: {}", tick, e);
            }
        }

        if tick > 0 && tick % 100 == 0 {
            println!("Tick {} / {}", tick, ticks);
        }
    }

    // Final snapshot
    let final_snapshot = generate_snapshot(&model, &mut generator, "simulation_end");
    if let Err(e) = write_snapshot_to_dir(&final_snapshot) {
        warn!("could not write final snapshot: {}", e);
    }
    if let Err(e) = write_current_state(&final_snapshot) {
        warn!("could not write final current state: {}", e);
    }

    println!();
    println!(
        "Simulation complete. Ran {} ticks, total wealth {} across {} agents.",
        ticks,
        model.total_wealth(),
        model.agents().len()
    );
    println!("Generated {} snapshots.", generator.snapshot_count());
}
