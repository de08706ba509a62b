use crate::foundation::core::StripLayout;
use crate::foundation::error::{SlitError, SlitResult};
use crate::geometry::slice::SliceSpec;
use crate::mosaic::frame::Frame;

/// The growing output image.
///
/// Pixels are stored column-major (each column is `height * channels` contiguous bytes) so that
/// appending a strip on the right edge is a plain extend. Use [`Mosaic::to_row_major`] for
/// encoders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mosaic {
    layout: Option<StripLayout>,
    width: u32,
    columns: Vec<u8>,
}

impl Mosaic {
    /// An unseeded, zero-sized mosaic.
    pub fn new() -> Self {
        Self::default()
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels (0 until the first frame seeds the mosaic).
    pub fn height(&self) -> u32 {
        self.layout.map_or(0, |l| l.height)
    }

    /// Channels per pixel (0 until seeded).
    pub fn channels(&self) -> u8 {
        self.layout.map_or(0, |l| l.channels)
    }

    /// Layout fixed by the first appended frame.
    pub fn layout(&self) -> Option<StripLayout> {
        self.layout
    }

    /// Return `true` when no columns have been appended.
    pub fn is_empty(&self) -> bool {
        self.width == 0
    }

    /// Borrow column `x`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `x >= self.width()`.
    pub fn column(&self, x: u32) -> &[u8] {
        assert!(
            x < self.width,
            "column {x} out of range for mosaic width {}",
            self.width
        );
        let len = self.column_len();
        let off = x as usize * len;
        &self.columns[off..off + len]
    }

    /// Borrow the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= self.width()` or `y >= self.height()`.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        assert!(
            y < self.height(),
            "row {y} out of range for mosaic height {}",
            self.height()
        );
        let c = self.channels() as usize;
        let off = y as usize * c;
        &self.column(x)[off..off + c]
    }

    /// Copy out as tightly packed row-major bytes.
    pub fn to_row_major(&self) -> Vec<u8> {
        let c = self.channels() as usize;
        let mut out = Vec::with_capacity(self.columns.len());
        for y in 0..self.height() {
            for x in 0..self.width {
                out.extend_from_slice(self.pixel(x, y));
            }
        }
        debug_assert_eq!(out.len(), self.width as usize * self.height() as usize * c);
        out
    }

    /// Concatenate `frame[:, spec.left..spec.right]` onto the right edge.
    ///
    /// The first call seeds the mosaic's height and channel count. Bounds past the frame's right
    /// edge are truncated to it, so a strip may contribute fewer columns than `spec.width()`, or
    /// none. Returns the number of columns appended.
    pub fn append(&mut self, frame: &Frame, spec: SliceSpec) -> SlitResult<u32> {
        let layout = *self.layout.get_or_insert(frame.layout());
        if frame.layout() != layout {
            return Err(SlitError::DimensionMismatch {
                expected_height: layout.height,
                expected_channels: layout.channels,
                got_height: frame.height,
                got_channels: frame.channels,
            });
        }

        let fw = u64::from(frame.width);
        let left = spec.left.min(fw) as u32;
        let right = spec.right.min(fw) as u32;
        let added = right.saturating_sub(left);
        if added == 0 {
            return Ok(0);
        }

        self.columns.reserve(added as usize * layout.column_len());
        for x in left..right {
            frame.extend_with_column(x, &mut self.columns);
        }
        self.width = self
            .width
            .checked_add(added)
            .ok_or_else(|| SlitError::validation("mosaic width overflow"))?;
        Ok(added)
    }

    /// Append a horizontally flipped copy of every current column.
    pub(crate) fn push_reversed_copy(&mut self) -> SlitResult<()> {
        let len = self.column_len();
        if len == 0 || self.width == 0 {
            return Ok(());
        }
        let width = self
            .width
            .checked_mul(2)
            .ok_or_else(|| SlitError::validation("mosaic width overflow"))?;
        let original = self.columns.len();
        self.columns.reserve(original);
        for x in (0..self.width as usize).rev() {
            self.columns.extend_from_within(x * len..(x + 1) * len);
        }
        self.width = width;
        Ok(())
    }

    fn column_len(&self) -> usize {
        self.layout.map_or(0, StripLayout::column_len)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mosaic/accumulator.rs"]
mod tests;
