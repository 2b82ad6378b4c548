//! KathaNav CLI - narrate a recorded robot trajectory.
//!
//! Reads the odometry channel of a bag file, coalesces the trajectory
//! into movement instructions, and prints them. Alternative modes emit
//! the generation-request prompt for a downstream language model, or the
//! request wrapped as a temporal-logic command string.
//!
//! # Usage
//!
//! ```bash
//! katha-nav run.bag
//! katha-nav --mode prompt run.bag
//! katha-nav --config katha.toml --mode stl run.bag
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use log::info;

use katha_nav::render::{ConsoleRenderer, InstructionRenderer, PromptBuilder, StlCommand};
use katha_nav::{
    BagReader, Instruction, NarrationConfig, Result, TrajectoryFeatures, TrajectorySegmenter,
};

#[derive(Parser)]
#[command(name = "katha-nav")]
#[command(about = "Narrate a recorded robot trajectory as movement instructions")]
struct Args {
    /// Input bag file
    bag: PathBuf,

    /// TOML configuration file (defaults to katha.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output mode
    #[arg(long, value_enum, default_value_t = Mode::Instructions)]
    mode: Mode,

    /// Override the segmenter distance threshold (meters)
    #[arg(long)]
    threshold: Option<f32>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Movement instructions, one per line
    Instructions,
    /// Generation-request text for a command model
    Prompt,
    /// Request text wrapped as a temporal-logic command
    Stl,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(args: &Args) -> Result<NarrationConfig> {
    if let Some(path) = &args.config {
        info!("Loading configuration from {:?}", path);
        return NarrationConfig::load(path);
    }
    if Path::new("katha.toml").exists() {
        info!("Loading configuration from katha.toml");
        return NarrationConfig::load(Path::new("katha.toml"));
    }
    Ok(NarrationConfig::default())
}

fn run(args: &Args) -> Result<()> {
    let mut config = load_config(args)?;
    if let Some(threshold) = args.threshold {
        config.segmenter.distance_threshold = threshold;
    }

    info!("KathaNav v{}", env!("CARGO_PKG_VERSION"));

    let mut reader = BagReader::open(&args.bag)?;
    info!(
        "Bag: {} messages, {:.3}s",
        reader.message_count(),
        reader.duration_secs()
    );

    match args.mode {
        Mode::Instructions => {
            let instructions = narrate_bag(&mut reader, &config)?;
            let mut renderer = ConsoleRenderer::stdout();
            for instruction in &instructions {
                renderer.render(instruction)?;
            }
            renderer.finish()?;
        }
        Mode::Prompt => {
            // Prompt features come from every channel; a bag without
            // odometry is still a valid request source.
            let features = collect_features(&mut reader)?;
            let builder = PromptBuilder::new(config.prompt.clone());
            println!("{}", builder.command_request(&features));
        }
        Mode::Stl => {
            let instructions = narrate_bag(&mut reader, &config)?;
            let features = collect_features(&mut reader)?;
            let builder = PromptBuilder::new(config.prompt.clone());
            let description = builder.path_description(&features, &instructions);
            println!("{}", StlCommand::globally(description));
        }
    }

    Ok(())
}

/// Narrate the bag's odometry channel into instructions.
fn narrate_bag(reader: &mut BagReader, config: &NarrationConfig) -> Result<Vec<Instruction>> {
    let track = reader.odometry_track()?;

    let mut segmenter = TrajectorySegmenter::new(config.segmenter);
    let instructions = segmenter.narrate(track.into_iter().map(|s| s.data.position));

    info!(
        "Narrated {} samples ({} skipped as jitter) into {} instructions",
        segmenter.samples_seen(),
        segmenter.samples_skipped(),
        instructions.len()
    );

    Ok(instructions)
}

/// Collect prompt features from every channel of the bag.
fn collect_features(reader: &mut BagReader) -> Result<TrajectoryFeatures> {
    reader.rewind()?;
    let mut features = TrajectoryFeatures::new();
    while let Some(msg) = reader.next_message()? {
        features.push(&msg);
    }
    Ok(features)
}
