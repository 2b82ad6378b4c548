//! Object detection types.
//!
//! Detections arrive pre-computed on their own bag channel; this crate
//! never runs a vision model itself.

use serde::{Deserialize, Serialize};

/// Axis-aligned pixel bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge in pixels
    pub x: i32,
    /// Top edge in pixels
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl BoundingBox {
    /// Create a new bounding box.
    #[inline]
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A single detected object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Class label (e.g. "person", "white pole")
    pub label: String,
    /// Detector confidence in [0, 1]
    pub confidence: f32,
    /// Location in the source frame
    pub bounds: BoundingBox,
}

impl Detection {
    /// Create a new detection.
    pub fn new(label: impl Into<String>, confidence: f32, bounds: BoundingBox) -> Self {
        Self {
            label: label.into(),
            confidence,
            bounds,
        }
    }
}
