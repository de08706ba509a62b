//! Output sinks.
//!
//! A sink receives the finished mosaic exactly once, together with the descriptive name derived
//! from the source origin and the active options.

use crate::foundation::error::SlitResult;
use crate::mosaic::accumulator::Mosaic;

/// Raster file output through the `image` crate.
pub mod image_file;

/// Sink contract for the finished mosaic.
pub trait OutputSink {
    /// Consume the finished mosaic under `name` (no file extension).
    fn write(&mut self, mosaic: &Mosaic, name: &str) -> SlitResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    outputs: Vec<(String, Mosaic)>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the captured outputs, in write order.
    pub fn outputs(&self) -> &[(String, Mosaic)] {
        &self.outputs
    }

    /// The most recently written output, if any.
    pub fn last(&self) -> Option<&(String, Mosaic)> {
        self.outputs.last()
    }
}

impl OutputSink for InMemorySink {
    fn write(&mut self, mosaic: &Mosaic, name: &str) -> SlitResult<()> {
        self.outputs.push((name.to_string(), mosaic.clone()));
        Ok(())
    }
}
