//! slitlapse builds single-frame timelapse images.
//!
//! Every frame of an ordered sequence contributes one vertical strip; strips are concatenated
//! left to right so the output shows how a horizontal slice of the scene evolves over time.
//!
//! # Pipeline overview
//!
//! 1. **Source**: a [`FrameSource`] yields frames in ascending order plus a (possibly approximate)
//!    frame count ([`StillsSource`], [`VideoSource`], [`RemoteVideo`], [`InMemorySource`]).
//! 2. **Geometry**: [`compute_slice`] turns `(i, frame_count, frame_width, SliceConfig)` into a
//!    column range, or a skip under fixed-width decimation.
//! 3. **Accumulate**: [`Mosaic::append`] concatenates the strip onto the output.
//! 4. **Finish**: [`finish_mirror`] optionally appends the flipped mosaic.
//! 5. **Sink**: an [`OutputSink`] receives the mosaic and its [`output_name`].
//!
//! [`run`] drives all five steps.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical frames and options give a byte-identical mosaic.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod geometry;
mod mosaic;
mod session;
mod sink;
mod source;

pub use config::options::{MirrorMode, SliceConfig, SliceConfigBuilder};
pub use foundation::core::{FrameCount, FrameIndex, StripLayout};
pub use foundation::error::{SlitError, SlitResult};
pub use geometry::slice::{Baseline, SliceDecision, SliceSpec, baseline, compute_slice};
pub use mosaic::accumulator::Mosaic;
pub use mosaic::frame::Frame;
pub use mosaic::mirror::finish_mirror;
pub use session::naming::{NAME_PREFIX, output_name};
pub use session::runner::{RunStats, build_mosaic, run};
pub use sink::image_file::{ImageFileSink, ImageFileSinkOpts, ensure_parent_dir};
pub use sink::{InMemorySink, OutputSink};
pub use source::remote::{REMOTE_FORMAT, RemoteVideo};
pub use source::stills::{StillsSource, decode_still, frame_from_image, still_file_name};
pub use source::video::{VideoSource, VideoSourceInfo, probe_video};
pub use source::{FrameSource, InMemorySource, SourceOrigin, is_tool_on_path};
