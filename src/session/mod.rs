//! The accumulation pass that ties sources, geometry, the mosaic and sinks together.

/// Output naming.
pub mod naming;
/// Frame loop and run statistics.
pub mod runner;
