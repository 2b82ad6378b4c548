//! Rendering of narrated instructions.
//!
//! The segmenter returns structured [`Instruction`] values; everything
//! about turning them into bytes lives here. [`ConsoleRenderer`] writes
//! one line per instruction, [`PromptBuilder`] packages instructions and
//! extracted features as request text for an external generative model,
//! and [`StlCommand`] wraps text in the temporal-logic command form.
//! Model invocation itself is out of scope for this crate.

mod console;
mod prompt;
mod stl;

use crate::error::Result;
use crate::segment::Instruction;

pub use console::ConsoleRenderer;
pub use prompt::{PromptBuilder, PromptConfig};
pub use stl::StlCommand;

/// Sink for narrated instructions.
///
/// Implementations decide presentation; the narration pipeline only
/// pushes instructions through this seam.
pub trait InstructionRenderer {
    /// Render one instruction.
    fn render(&mut self, instruction: &Instruction) -> Result<()>;

    /// Flush any buffered output at end of narration.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
