//! Line-per-instruction text renderer.

use std::io::{self, Write};

use crate::error::Result;
use crate::segment::Instruction;

use super::InstructionRenderer;

/// Renders each instruction as one line of text.
///
/// Generic over the output sink so tests can capture into a buffer.
#[derive(Debug)]
pub struct ConsoleRenderer<W: Write> {
    writer: W,
}

impl ConsoleRenderer<io::Stdout> {
    /// Renderer writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleRenderer<W> {
    /// Renderer writing to an arbitrary sink.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the renderer, returning the sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> InstructionRenderer for ConsoleRenderer<W> {
    fn render(&mut self, instruction: &Instruction) -> Result<()> {
        writeln!(self.writer, "{}", instruction)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
