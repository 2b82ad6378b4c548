//! Segmenter configuration.

use serde::Deserialize;

/// Configuration for [`crate::segment::TrajectorySegmenter`].
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SegmenterConfig {
    /// Minimum planar travel (meters) for a sample to count as motion.
    ///
    /// Samples closer than this to the previous accepted sample are
    /// dropped as sensor jitter, without advancing the reference
    /// position. Must be > 0.
    #[serde(default = "default_distance_threshold")]
    pub distance_threshold: f32,

    /// Half-width (meters) of the landmark zone around the origin.
    ///
    /// An accepted sample with |x| and |y| both below this radius emits a
    /// landmark event. Must be > 0.
    #[serde(default = "default_landmark_radius")]
    pub landmark_radius: f32,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            distance_threshold: default_distance_threshold(),
            landmark_radius: default_landmark_radius(),
        }
    }
}

fn default_distance_threshold() -> f32 {
    0.5
}
fn default_landmark_radius() -> f32 {
    0.5
}
