//! Trajectory segmentation: positions in, movement instructions out.
//!
//! The segmenter coalesces runs of consecutive samples that share a
//! dominant axis-aligned movement direction into single instructions
//! ("Move right for 3 steps"), and flags samples near the landmark at the
//! origin ("See a white pole and stop"). It is a pure, single-pass
//! transform with O(1) running state; rendering of the resulting
//! instructions is a separate concern (see [`crate::render`]).
//!
//! # Example
//!
//! ```
//! use katha_nav::core::types::Position3D;
//! use katha_nav::segment::{SegmenterConfig, TrajectorySegmenter};
//!
//! let mut segmenter = TrajectorySegmenter::new(SegmenterConfig::default());
//! let track = [
//!     Position3D::new(0.0, 0.0, 0.0),
//!     Position3D::new(1.0, 0.0, 0.0),
//!     Position3D::new(2.0, 0.0, 0.0),
//!     Position3D::new(2.0, 1.0, 0.0),
//! ];
//! let instructions = segmenter.narrate(track);
//! let lines: Vec<String> = instructions.iter().map(|i| i.to_string()).collect();
//! assert_eq!(lines, ["Move right for 2 steps", "Move forward for 1 steps"]);
//! ```

mod config;
mod instruction;
mod segmenter;

pub use config::SegmenterConfig;
pub use instruction::{Direction, Instruction};
pub use segmenter::TrajectorySegmenter;
