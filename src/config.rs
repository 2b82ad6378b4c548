//! Configuration loading for KathaNav

use std::path::Path;

use serde::Deserialize;

use crate::error::{KathaError, Result};
use crate::render::PromptConfig;
use crate::segment::SegmenterConfig;

/// Top-level configuration for the narration pipeline.
///
/// Loaded from a TOML file; every field has a default, so a missing or
/// partial file behaves predictably.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NarrationConfig {
    /// Trajectory segmenter thresholds
    #[serde(default)]
    pub segmenter: SegmenterConfig,

    /// Prompt builder settings
    #[serde(default)]
    pub prompt: PromptConfig,
}

impl NarrationConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| KathaError::Config(format!("Failed to read config file: {}", e)))?;
        let config: NarrationConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
