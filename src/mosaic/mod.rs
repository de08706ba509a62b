//! Frames, the accumulated mosaic, and the mirror finishing pass.

/// Strip concatenation into the output buffer.
pub mod accumulator;
/// Decoded frame buffers.
pub mod frame;
/// Reversed-copy post-pass.
pub mod mirror;
