//! Value types shared across the narration pipeline.

mod detection;
mod odometry;
mod position;
mod timestamped;

pub use detection::{BoundingBox, Detection};
pub use odometry::{OdometrySample, Quaternion};
pub use position::Position3D;
pub use timestamped::Timestamped;
