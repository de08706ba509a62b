use crate::foundation::core::StripLayout;
use crate::foundation::error::{SlitError, SlitResult};

/// One decoded frame: 8-bit interleaved pixels, tightly packed, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Channels per pixel (1 = luma, 2 = luma+alpha, 3 = RGB, 4 = RGBA).
    pub channels: u8,
    /// `width * height * channels` bytes.
    pub data: Vec<u8>,
}

impl Frame {
    /// Create a frame, checking the buffer length against the declared shape.
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> SlitResult<Self> {
        if !(1..=4).contains(&channels) {
            return Err(SlitError::validation(format!(
                "frame channel count must be 1..=4, got {channels}"
            )));
        }
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(SlitError::validation(format!(
                "frame buffer is {} bytes, expected {expected} for {width}x{height}x{channels}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// A frame filled with a single pixel value (`px.len()` is the channel count).
    pub fn filled(width: u32, height: u32, px: &[u8]) -> SlitResult<Self> {
        let n = width as usize * height as usize;
        let channels = u8::try_from(px.len())
            .map_err(|_| SlitError::validation("pixel has too many channels"))?;
        Self::new(width, height, channels, px.repeat(n))
    }

    /// Height and channel layout of this frame.
    pub fn layout(&self) -> StripLayout {
        StripLayout {
            height: self.height,
            channels: self.channels,
        }
    }

    /// Borrow the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of range for {}x{} frame",
            self.width,
            self.height
        );
        let c = self.channels as usize;
        let off = (y as usize * self.width as usize + x as usize) * c;
        &self.data[off..off + c]
    }

    /// Append column `x`, top to bottom, to `out`.
    pub(crate) fn extend_with_column(&self, x: u32, out: &mut Vec<u8>) {
        for y in 0..self.height {
            out.extend_from_slice(self.pixel(x, y));
        }
    }
}
