use crate::foundation::error::{SlitError, SlitResult};

/// Absolute 0-based frame index in sequence order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// Index of the frame that follows this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Total frame count reported by a source.
///
/// Still-image sets report an exact integer. Video containers often only know an estimate
/// (`duration * fps`), so the value is kept as `f64` and is only ever divided and floored.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct FrameCount(pub f64);

impl FrameCount {
    /// Exact count, e.g. the number of files in a stills directory.
    pub fn exact(n: u64) -> Self {
        Self(n as f64)
    }

    /// Approximate count as reported by a container.
    pub fn estimated(n: f64) -> Self {
        Self(n)
    }

    /// Raw floating-point value.
    pub fn as_f64(self) -> f64 {
        self.0
    }

    /// Return `true` when the count does not announce any frames.
    pub fn is_empty(self) -> bool {
        self.0.is_nan() || self.0 <= 0.0
    }

    /// Return `true` when the count is a whole number.
    pub fn is_whole(self) -> bool {
        self.0.is_finite() && self.0.fract() == 0.0
    }

    /// Return the value when it can safely be used as a divisor.
    pub fn checked_divisor(self) -> SlitResult<f64> {
        if !self.0.is_finite() || self.0 <= 0.0 {
            return Err(SlitError::validation(format!(
                "frame count must be a positive finite number, got {}",
                self.0
            )));
        }
        Ok(self.0)
    }
}

/// Height and channel layout shared by every strip of a mosaic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StripLayout {
    /// Height in pixels.
    pub height: u32,
    /// Interleaved 8-bit channels per pixel (1..=4).
    pub channels: u8,
}

impl StripLayout {
    /// Bytes occupied by one full-height pixel column.
    pub fn column_len(self) -> usize {
        self.height as usize * self.channels as usize
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
