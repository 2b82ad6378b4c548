//! KathaNav - Trajectory narration for robot sensor logs
//!
//! Reads recorded robot runs ("bags") and turns the trajectory into
//! natural-language movement instructions, optionally packaged as
//! generation-request text for a downstream language model or wrapped as
//! a pseudo-temporal-logic command string.
//!
//! # Architecture
//!
//! The crate is organized into 5 logical layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                  main / bin/                        │  ← Executables
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                      io/                            │  ← Infrastructure
//! │                 (bag read/write)                    │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                    render/                          │  ← Presentation
//! │        (console, prompt building, STL form)         │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │               segment/  features/                   │  ← Core transforms
//! │     (run coalescing, feature extraction)            │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │                 (types, math)                       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The segmenter is a pure single-pass transform with O(1) running
//! state; everything stateful about files, channels, and presentation
//! lives in the layers around it. Heavyweight perception and generation
//! (vision models, language models) are external collaborators: bags
//! carry pre-computed detections in, and the renderer hands request text
//! out.

// ============================================================================
// Layer 1: Core foundation (no internal deps)
// ============================================================================
pub mod core;

// ============================================================================
// Layer 2: Core transforms (depend on core)
// ============================================================================
pub mod features;
pub mod segment;

// ============================================================================
// Layer 3: Presentation (depends on core, transforms)
// ============================================================================
pub mod render;

// ============================================================================
// Layer 4: I/O infrastructure (depends on core)
// ============================================================================
pub mod io;

// ============================================================================
// Crate-wide configuration and errors
// ============================================================================
pub mod config;
pub mod error;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

pub use config::NarrationConfig;
pub use error::{KathaError, Result};

pub use core::math;
pub use core::types::{
    BoundingBox, Detection, OdometrySample, Position3D, Quaternion, Timestamped,
};

pub use features::TrajectoryFeatures;
pub use segment::{Direction, Instruction, SegmenterConfig, TrajectorySegmenter};

pub use render::{ConsoleRenderer, InstructionRenderer, PromptBuilder, PromptConfig, StlCommand};

pub use io::bag::{BagHeader, BagInfo, BagMessage, BagReader, BagWriter, ChannelKind};
