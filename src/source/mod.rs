//! Frame sources.
//!
//! The session only sees [`FrameSource`]; which origin produced the frames (a stills directory,
//! a local video, a downloaded remote video, or memory) is decided before processing starts.

use std::collections::VecDeque;
use std::path::PathBuf;

use crate::foundation::core::FrameCount;
use crate::foundation::error::SlitResult;
use crate::mosaic::frame::Frame;

/// Downloading remote videos through `yt-dlp`.
pub mod remote;
/// Numbered still images in a directory.
pub mod stills;
/// Local video files streamed through `ffmpeg`.
pub mod video;

/// Where a source's frames come from. Used to derive the output name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceOrigin {
    /// Directory of `frame_NNNN.png` stills.
    Stills(PathBuf),
    /// Local video file.
    Video(PathBuf),
    /// Remote video, downloaded to `file`.
    Remote {
        /// URL the video was fetched from.
        url: String,
        /// Local copy that is decoded.
        file: PathBuf,
    },
    /// In-memory frames with a caller-chosen label.
    Memory(String),
}

impl SourceOrigin {
    /// Short label for output naming: the final path component, or the memory label.
    pub fn label(&self) -> String {
        fn last_component(p: &std::path::Path) -> String {
            p.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| p.display().to_string())
        }

        match self {
            Self::Stills(dir) => last_component(dir),
            Self::Video(path) => last_component(path),
            Self::Remote { file, .. } => last_component(file),
            Self::Memory(label) => label.clone(),
        }
    }
}

/// Source contract: frames in strictly ascending index order, plus a (possibly approximate)
/// total count.
///
/// Any OS resource held by an implementation (file handle, child process) is released when the
/// source is dropped, including after an error.
pub trait FrameSource {
    /// Total frame count; exact for stills, possibly non-integer for video containers.
    fn frame_count(&self) -> FrameCount;
    /// Next frame, or `None` at end of stream.
    fn next_frame(&mut self) -> SlitResult<Option<Frame>>;
    /// Where the frames come from.
    fn origin(&self) -> &SourceOrigin;
}

/// Vector-backed source for tests and embedding.
#[derive(Debug)]
pub struct InMemorySource {
    frames: VecDeque<Frame>,
    count: FrameCount,
    origin: SourceOrigin,
}

impl InMemorySource {
    /// Source whose count is exactly `frames.len()`.
    pub fn new(label: impl Into<String>, frames: Vec<Frame>) -> Self {
        let count = FrameCount::exact(frames.len() as u64);
        Self::with_count(label, frames, count)
    }

    /// Source that announces `count` regardless of how many frames it actually yields.
    pub fn with_count(label: impl Into<String>, frames: Vec<Frame>, count: FrameCount) -> Self {
        Self {
            frames: frames.into(),
            count,
            origin: SourceOrigin::Memory(label.into()),
        }
    }

    /// Frames not yet consumed.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl FrameSource for InMemorySource {
    fn frame_count(&self) -> FrameCount {
        self.count
    }

    fn next_frame(&mut self) -> SlitResult<Option<Frame>> {
        Ok(self.frames.pop_front())
    }

    fn origin(&self) -> &SourceOrigin {
        &self.origin
    }
}

impl<S: FrameSource + ?Sized> FrameSource for Box<S> {
    fn frame_count(&self) -> FrameCount {
        (**self).frame_count()
    }

    fn next_frame(&mut self) -> SlitResult<Option<Frame>> {
        (**self).next_frame()
    }

    fn origin(&self) -> &SourceOrigin {
        (**self).origin()
    }
}

/// Return `true` when `tool -version` (or `--version`) runs successfully from `PATH`.
pub fn is_tool_on_path(tool: &str, version_flag: &str) -> bool {
    std::process::Command::new(tool)
        .arg(version_flag)
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/source/mod.rs"]
mod tests;
