use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::DynamicImage;

use crate::foundation::core::FrameCount;
use crate::foundation::error::{SlitError, SlitResult};
use crate::mosaic::frame::Frame;
use crate::source::{FrameSource, SourceOrigin};

/// File name of the still for frame `index` (`frame_0000.png`, `frame_0001.png`, ...).
pub fn still_file_name(index: u64) -> String {
    format!("frame_{index:04}.png")
}

/// Directory of numbered stills.
///
/// The frame count is the number of regular files in the directory. Frame `i` is read from
/// [`still_file_name`]`(i)`; a missing file is a source error.
#[derive(Debug)]
pub struct StillsSource {
    dir: PathBuf,
    count: u64,
    next: u64,
    origin: SourceOrigin,
}

impl StillsSource {
    /// Open a stills directory and count its files.
    #[tracing::instrument]
    pub fn open(dir: &Path) -> SlitResult<Self> {
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("read stills directory '{}'", dir.display()))?;
        let mut count = 0u64;
        for entry in entries {
            let entry = entry.with_context(|| format!("list '{}'", dir.display()))?;
            let meta = entry
                .metadata()
                .with_context(|| format!("stat '{}'", entry.path().display()))?;
            if meta.is_file() {
                count += 1;
            }
        }
        tracing::debug!(count, "counted stills");

        Ok(Self {
            dir: dir.to_path_buf(),
            count,
            next: 0,
            origin: SourceOrigin::Stills(dir.to_path_buf()),
        })
    }

    /// Directory being read.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FrameSource for StillsSource {
    fn frame_count(&self) -> FrameCount {
        FrameCount::exact(self.count)
    }

    fn next_frame(&mut self) -> SlitResult<Option<Frame>> {
        if self.next >= self.count {
            return Ok(None);
        }
        let path = self.dir.join(still_file_name(self.next));
        let bytes = std::fs::read(&path).map_err(|e| {
            SlitError::source(format!("read still '{}': {e}", path.display()))
        })?;
        let frame = decode_still(&bytes)
            .map_err(|e| SlitError::source(format!("decode still '{}': {e}", path.display())))?;
        self.next += 1;
        Ok(Some(frame))
    }

    fn origin(&self) -> &SourceOrigin {
        &self.origin
    }
}

/// Decode encoded image bytes into a [`Frame`].
///
/// 8-bit luma, luma+alpha, RGB and RGBA keep their channel layout; anything else is converted
/// to RGB8 or RGBA8 depending on whether it carries alpha.
pub fn decode_still(bytes: &[u8]) -> SlitResult<Frame> {
    let img = image::load_from_memory(bytes).context("decode image from memory")?;
    frame_from_image(img)
}

/// Convert a decoded image into a [`Frame`].
pub fn frame_from_image(img: DynamicImage) -> SlitResult<Frame> {
    let (width, height) = (img.width(), img.height());
    let (channels, data) = match img {
        DynamicImage::ImageLuma8(buf) => (1, buf.into_raw()),
        DynamicImage::ImageLumaA8(buf) => (2, buf.into_raw()),
        DynamicImage::ImageRgb8(buf) => (3, buf.into_raw()),
        DynamicImage::ImageRgba8(buf) => (4, buf.into_raw()),
        other if other.color().has_alpha() => (4, other.to_rgba8().into_raw()),
        other => (3, other.to_rgb8().into_raw()),
    };
    Frame::new(width, height, channels, data)
}

#[cfg(test)]
#[path = "../../tests/unit/source/stills.rs"]
mod tests;
