//! CLI tool for inspecting bag files.
//!
//! Displays metadata and statistics about recorded bag files.
//!
//! # Usage
//!
//! ```bash
//! bag_info run.bag
//! bag_info --verbose run.bag
//! ```

use std::env;

use katha_nav::{BagReader, ChannelKind};

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct Config {
    bag_path: String,
    verbose: bool,
    count_messages: bool,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut bag_path = None;
    let mut verbose = false;
    let mut count_messages = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--verbose" | "-v" => {
                verbose = true;
            }
            "--count" | "-c" => {
                count_messages = true;
            }
            "--help" | "-h" => {
                return Err("Help requested".to_string());
            }
            arg if !arg.starts_with('-') => {
                if bag_path.is_some() {
                    return Err("Multiple bag files specified".to_string());
                }
                bag_path = Some(arg.to_string());
            }
            _ => {
                return Err(format!("Unknown argument: {}", args[i]));
            }
        }
        i += 1;
    }

    let bag_path = bag_path.ok_or("Missing bag file argument")?;

    Ok(Config {
        bag_path,
        verbose,
        count_messages,
    })
}

fn print_usage(program: &str) {
    eprintln!(
        r#"
Usage: {} [OPTIONS] <BAG_FILE>

Display information about a bag file.

OPTIONS:
    -v, --verbose   Show detailed message breakdown
    -c, --count     Count actual messages (reads entire file)
    -h, --help      Show this help message

EXAMPLES:
    {} run.bag
    {} --verbose run.bag
"#,
        program, program, program
    );
}

fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = BagReader::open(&config.bag_path)?;

    let version = reader.header().version;
    let flags = reader.header().flags;
    let start_time_us = reader.header().start_time_us;
    let end_time_us = reader.header().end_time_us;
    let duration_secs = reader.header().duration_secs();
    let message_count = reader.header().message_count;

    println!("Bag File Information");
    println!("====================");
    println!("File: {}", config.bag_path);
    println!();

    println!("Header Information:");
    println!("  Format version: {}", version);
    println!("  Flags: 0x{:04x}", flags);
    println!(
        "  Start time: {} us ({:.3} s)",
        start_time_us,
        start_time_us as f64 / 1_000_000.0
    );
    println!(
        "  End time: {} us ({:.3} s)",
        end_time_us,
        end_time_us as f64 / 1_000_000.0
    );
    println!("  Duration: {:.3} seconds", duration_secs);
    println!("  Message count (header): {}", message_count);
    println!();

    if config.count_messages || config.verbose {
        println!("Scanning messages...");
        reader.rewind()?;

        let mut odometry_count = 0u64;
        let mut detection_count = 0u64;
        let mut object_count = 0u64;
        let mut total_count = 0u64;

        let mut first_timestamp: Option<u64> = None;
        let mut last_timestamp = 0u64;

        while let Some(msg) = reader.next_message()? {
            total_count += 1;
            let ts = msg.timestamp_us();

            if first_timestamp.is_none() {
                first_timestamp = Some(ts);
            }
            last_timestamp = ts;

            match msg.channel() {
                ChannelKind::Odometry => odometry_count += 1,
                ChannelKind::Detections => {
                    detection_count += 1;
                    if let Some(set) = msg.as_detections() {
                        object_count += set.data.len() as u64;
                    }
                }
            }
        }

        let actual_duration = last_timestamp.saturating_sub(first_timestamp.unwrap_or(0));

        println!();
        println!("Message Statistics:");
        println!("  Total messages: {}", total_count);
        println!(
            "  Odometry: {} ({:.1}%)",
            odometry_count,
            100.0 * odometry_count as f64 / total_count.max(1) as f64
        );
        println!(
            "  Detections: {} ({:.1}%, {} objects)",
            detection_count,
            100.0 * detection_count as f64 / total_count.max(1) as f64,
            object_count
        );
        println!();

        let duration_secs = actual_duration as f64 / 1_000_000.0;
        if duration_secs > 0.0 {
            println!("Rates:");
            println!("  Overall: {:.1} Hz", total_count as f64 / duration_secs);
            if odometry_count > 0 {
                println!("  Odometry: {:.1} Hz", odometry_count as f64 / duration_secs);
            }
            if detection_count > 0 {
                println!(
                    "  Detections: {:.1} Hz",
                    detection_count as f64 / duration_secs
                );
            }
        }

        if config.verbose && odometry_count > 0 {
            println!();
            println!("First 5 odometry samples:");
            reader.rewind()?;
            let mut shown = 0;
            while let Some(msg) = reader.next_message()? {
                if let Some(sample) = msg.as_odometry() {
                    println!(
                        "  [{:>12} us] position: ({:>7.3}, {:>7.3}, {:>7.3}), yaw: {:>6.1} deg",
                        sample.timestamp_us,
                        sample.data.position.x,
                        sample.data.position.y,
                        sample.data.position.z,
                        sample.data.orientation.yaw().to_degrees()
                    );
                    shown += 1;
                    if shown >= 5 {
                        break;
                    }
                }
            }
        }

        if config.verbose && detection_count > 0 {
            println!();
            println!("First detection set:");
            reader.rewind()?;
            while let Some(msg) = reader.next_message()? {
                if let Some(set) = msg.as_detections() {
                    println!("  Timestamp: {} us", set.timestamp_us);
                    println!("  Objects: {}", set.data.len());
                    for detection in &set.data {
                        println!(
                            "    {} ({:.2}) at {}x{}+{}+{}",
                            detection.label,
                            detection.confidence,
                            detection.bounds.width,
                            detection.bounds.height,
                            detection.bounds.x,
                            detection.bounds.y
                        );
                    }
                    break;
                }
            }
        }
    }

    let metadata = std::fs::metadata(&config.bag_path)?;
    let file_size = metadata.len();
    println!();
    println!("File Size:");
    println!(
        "  {} bytes ({:.2} KB, {:.2} MB)",
        file_size,
        file_size as f64 / 1024.0,
        file_size as f64 / 1_048_576.0
    );

    if message_count > 0 {
        println!(
            "  Average per message: {:.1} bytes",
            file_size as f64 / message_count as f64
        );
    }

    Ok(())
}
