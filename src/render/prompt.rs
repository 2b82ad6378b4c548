//! Generation-request text for a downstream language model.

use std::fmt::Write as _;

use serde::Deserialize;

use crate::features::TrajectoryFeatures;
use crate::segment::Instruction;

/// Configuration for [`PromptBuilder`].
///
/// All model-facing knobs live here so a builder is constructed once,
/// reused for the whole run, and dropped explicitly; nothing hides in
/// module globals.
#[derive(Debug, Clone, Deserialize)]
pub struct PromptConfig {
    /// Token budget forwarded to the model client with each request.
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Trailer line asking the model for a temporal-logic command.
    #[serde(default = "default_command_trailer")]
    pub command_trailer: String,

    /// Opening line for path-description requests.
    #[serde(default = "default_description_preamble")]
    pub description_preamble: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            command_trailer: default_command_trailer(),
            description_preamble: default_description_preamble(),
        }
    }
}

fn default_max_length() -> usize {
    500
}
fn default_command_trailer() -> String {
    "Generate STL command for these inputs:".to_string()
}
fn default_description_preamble() -> String {
    "Describe a path using the following landmarks and actions:".to_string()
}

/// Builds request text from narrated instructions and extracted features.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    config: PromptConfig,
}

impl PromptBuilder {
    /// Create a builder with the given configuration.
    pub fn new(config: PromptConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    /// Command-generation request from extracted features.
    ///
    /// Lists turn rates, object sighting times, and all message
    /// timestamps (seconds, two decimals), then asks for a command.
    pub fn command_request(&self, features: &TrajectoryFeatures) -> String {
        let directions = features
            .turn_rates
            .iter()
            .map(|r| format!("{:.2}", r.data))
            .collect::<Vec<_>>()
            .join(", ");
        let objects = features
            .object_events
            .iter()
            .map(|o| format!("{:.2}", o.timestamp_secs()))
            .collect::<Vec<_>>()
            .join(", ");
        let times = features
            .timestamps_us
            .iter()
            .map(|t| format!("{:.2}", *t as f64 / 1_000_000.0))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Directions: {}\nObjects encountered at times: {}\nTimestamps: {}\n{}",
            directions, objects, times, self.config.command_trailer
        )
    }

    /// Path-description request from sightings and narrated instructions.
    pub fn path_description(
        &self,
        features: &TrajectoryFeatures,
        instructions: &[Instruction],
    ) -> String {
        let mut text = self.config.description_preamble.clone();
        text.push('\n');

        for event in &features.object_events {
            let _ = write!(
                text,
                "Pass by a {} with confidence {:.2}, ",
                event.data.label, event.data.confidence
            );
        }
        for instruction in instructions {
            let _ = write!(text, "then {}, ", lowercase_first(&instruction.to_string()));
        }

        text
    }
}

/// Lower-case the leading character of a rendered instruction so it reads
/// naturally mid-sentence.
fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{BoundingBox, Detection, Timestamped};
    use crate::segment::Direction;

    fn sample_features() -> TrajectoryFeatures {
        let mut features = TrajectoryFeatures::new();
        features.turn_rates.push(Timestamped::new(0.25, 1_000_000));
        features.turn_rates.push(Timestamped::new(-0.1, 2_000_000));
        features.object_events.push(Timestamped::new(
            Detection::new("white pole", 0.91, BoundingBox::new(5, 5, 20, 40)),
            2_500_000,
        ));
        features.timestamps_us = vec![1_000_000, 2_000_000, 2_500_000];
        features
    }

    #[test]
    fn test_command_request_sections() {
        let builder = PromptBuilder::new(PromptConfig::default());
        let text = builder.command_request(&sample_features());

        assert_eq!(
            text,
            "Directions: 0.25, -0.10\n\
             Objects encountered at times: 2.50\n\
             Timestamps: 1.00, 2.00, 2.50\n\
             Generate STL command for these inputs:"
        );
    }

    #[test]
    fn test_path_description() {
        let builder = PromptBuilder::new(PromptConfig::default());
        let instructions = [
            Instruction::Move {
                direction: Direction::Right,
                steps: 2,
            },
            Instruction::LandmarkStop,
        ];
        let text = builder.path_description(&sample_features(), &instructions);

        assert!(text.starts_with("Describe a path using the following landmarks and actions:\n"));
        assert!(text.contains("Pass by a white pole with confidence 0.91, "));
        assert!(text.contains("then move right for 2 steps, "));
        assert!(text.contains("then see a white pole and stop, "));
    }

    #[test]
    fn test_config_reuse() {
        let builder = PromptBuilder::new(PromptConfig {
            max_length: 150,
            ..PromptConfig::default()
        });
        assert_eq!(builder.config().max_length, 150);
    }
}
