//! Generate synthetic bag files for pipeline testing.
//!
//! Drives a simulated robot around a square path with configurable
//! Gaussian position jitter and drops periodic object detections, then
//! writes the run as a bag. Useful for exercising the narration pipeline
//! without recorded data.
//!
//! # Usage
//!
//! ```bash
//! bag_synth --output square.bag
//! bag_synth --output noisy.bag --samples 400 --noise 0.05 --seed 7
//! ```

use std::f32::consts::FRAC_PI_2;
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use katha_nav::math::normalize_angle;
use katha_nav::{
    BagWriter, BoundingBox, Detection, OdometrySample, Position3D, Quaternion, Timestamped,
};

#[derive(Parser)]
#[command(name = "bag-synth")]
#[command(about = "Generate a synthetic square-path bag file")]
struct Args {
    /// Output bag file
    #[arg(short, long)]
    output: PathBuf,

    /// Number of odometry samples
    #[arg(long, default_value = "240")]
    samples: u32,

    /// Odometry rate in Hz
    #[arg(long, default_value = "20.0")]
    rate_hz: f32,

    /// Distance per sample along each side (meters)
    #[arg(long, default_value = "0.6")]
    step: f32,

    /// Samples per side of the square
    #[arg(long, default_value = "20")]
    side_samples: u32,

    /// Gaussian position jitter stddev (meters)
    #[arg(long, default_value = "0.02")]
    noise: f32,

    /// RNG seed (0 = nondeterministic)
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Emit a detection set every N odometry samples (0 = none)
    #[arg(long, default_value = "50")]
    detection_interval: u32,
}

/// Gaussian noise source with reproducible seeding.
struct NoiseGenerator {
    rng: SmallRng,
}

impl NoiseGenerator {
    /// If seed is 0, uses random entropy for non-deterministic behavior.
    /// Otherwise, uses the provided seed for reproducible results.
    fn new(seed: u64) -> Self {
        let rng = if seed == 0 {
            SmallRng::from_entropy()
        } else {
            SmallRng::seed_from_u64(seed)
        };
        Self { rng }
    }

    fn gaussian(&mut self, stddev: f32) -> f32 {
        if stddev == 0.0 {
            return 0.0;
        }
        let n: f32 = self.rng.sample(StandardNormal);
        n * stddev
    }
}

/// Labels cycled through the periodic detection sets.
const DETECTION_LABELS: [&str; 4] = ["person", "white pole", "tree", "car"];

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.side_samples == 0 {
        return Err("--side-samples must be greater than zero".into());
    }

    let mut writer = BagWriter::create(&args.output)?;
    let mut noise = NoiseGenerator::new(args.seed);

    let period_us = (1_000_000.0 / args.rate_hz) as u64;
    let start_time_us = 1_000_000_000u64;

    // Square path: forward, right, backward, left.
    let headings = [FRAC_PI_2, 0.0, -FRAC_PI_2, std::f32::consts::PI];

    let mut x = 0.0f32;
    let mut y = 0.0f32;
    let mut detection_cycle = 0usize;

    for i in 0..args.samples {
        let side = ((i / args.side_samples) % 4) as usize;
        let heading = normalize_angle(headings[side]);
        let corner = i % args.side_samples == 0 && i > 0;

        let (sin_h, cos_h) = heading.sin_cos();
        x += args.step * cos_h + noise.gaussian(args.noise);
        y += args.step * sin_h + noise.gaussian(args.noise);

        // Heading changes by 90 degrees over one sample at each corner.
        let angular_rate_z = if corner {
            -FRAC_PI_2 * args.rate_hz
        } else {
            noise.gaussian(0.01)
        };

        let timestamp_us = start_time_us + u64::from(i) * period_us;
        let sample = OdometrySample::new(
            Position3D::new(x, y, 0.0),
            Quaternion::from_yaw(heading),
            angular_rate_z,
        );
        writer.write_odometry(&Timestamped::new(sample, timestamp_us))?;

        if args.detection_interval > 0 && i > 0 && i % args.detection_interval == 0 {
            let label = DETECTION_LABELS[detection_cycle % DETECTION_LABELS.len()];
            detection_cycle += 1;

            let detections = vec![Detection::new(
                label,
                0.5 + 0.4 * (1.0 - noise.gaussian(0.2).abs()).clamp(0.0, 1.0),
                BoundingBox::new(
                    100 + (i as i32 % 200),
                    80,
                    40 + (i as i32 % 30),
                    90,
                ),
            )];
            writer.write_detections(&Timestamped::new(detections, timestamp_us))?;
        }
    }

    let info = writer.finish()?;

    println!("Wrote {}", info.path.display());
    println!(
        "  {} messages ({} odometry, {} detections)",
        info.message_count, info.odometry_count, info.detection_count
    );
    println!(
        "  {:.1} s, {:.2} MB, {:.1} Hz",
        info.duration_secs(),
        info.file_size_mb(),
        info.message_rate_hz()
    );

    Ok(())
}
