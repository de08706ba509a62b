use crate::config::options::{MirrorMode, SliceConfig};
use crate::foundation::core::{FrameCount, FrameIndex};
use crate::foundation::error::{SlitError, SlitResult};

/// Half-open pixel column range `[left, right)` to extract from one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SliceSpec {
    /// Inclusive left column.
    pub left: u64,
    /// Exclusive right column, always `> left`.
    pub right: u64,
}

impl SliceSpec {
    /// Strip width in columns.
    pub fn width(self) -> u64 {
        self.right - self.left
    }
}

/// Per-frame outcome of the geometry step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliceDecision {
    /// Extract these columns and append them to the mosaic.
    Take(SliceSpec),
    /// Decimated: the frame contributes nothing.
    Skip,
}

impl SliceDecision {
    /// The strip bounds, if the frame is included.
    pub fn spec(self) -> Option<SliceSpec> {
        match self {
            Self::Take(spec) => Some(spec),
            Self::Skip => None,
        }
    }
}

/// Frame-count-derived strip width before stretch and fixed-width adjustments.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Baseline {
    /// Horizontal range scanned across the sequence (halved for [`MirrorMode::Half`]).
    ///
    /// Zero for frames too narrow to halve; the strip width then clamps to 1.
    pub effective_width: f64,
    /// `effective_width / frame_count`, unrounded.
    pub slice_width_float: f64,
    /// Floor of `slice_width_float`, at least 1.
    pub slice_width: u64,
}

/// Compute the baseline strip width shared by every frame of a run.
pub fn baseline(
    frame_count: FrameCount,
    frame_width: u32,
    config: &SliceConfig,
) -> SlitResult<Baseline> {
    let n = frame_count.checked_divisor()?;
    let effective = match config.mirror {
        MirrorMode::Half => frame_width / 2,
        MirrorMode::None | MirrorMode::Full => frame_width,
    };

    let effective_width = f64::from(effective);
    let slice_width_float = effective_width / n;
    Ok(Baseline {
        effective_width,
        slice_width_float,
        slice_width: floor_at_least_one(slice_width_float),
    })
}

/// Decide which columns of frame `i` (of `frame_count`) end up in the mosaic.
///
/// Pure and deterministic: the result depends only on the arguments, never on earlier frames.
pub fn compute_slice(
    i: FrameIndex,
    frame_count: FrameCount,
    frame_width: u32,
    config: &SliceConfig,
) -> SlitResult<SliceDecision> {
    let base = baseline(frame_count, frame_width, config)?;
    let n = frame_count.as_f64();
    let slice_width = base.slice_width;

    let left = match config.slice_location {
        Some(loc) => floor_u64(loc * f64::from(frame_width)),
        None => {
            // Repeated floor rounding of `slice_width` must not run ahead of the true
            // proportional position.
            let stepped = slice_width.saturating_mul(i.0);
            stepped.min(floor_u64(base.slice_width_float * i.0 as f64))
        }
    };
    // Past the right edge a strip contributes nothing, wherever it starts.
    let left = left.min(u64::from(frame_width));

    let mut right = match config.stretch {
        None => left.saturating_add(slice_width),
        Some(s) if s < 1.0 => left.saturating_add(floor_at_least_one(slice_width as f64 * s)),
        Some(s) => left.saturating_add(floor_u64(slice_width as f64 * s)),
    };

    if config.fixed_width {
        // A zero-column scan still targets a single column of output.
        let target_width = base.effective_width.max(1.0);
        let new_slice_width = right - left;
        let final_width = new_slice_width as f64 * n;
        if final_width > target_width && new_slice_width == 1 {
            let k = floor_u64(n / target_width);
            if k == 0 {
                return Err(SlitError::validation(format!(
                    "fixed-width decimation step is zero ({n} frames over {target_width} columns)"
                )));
            }
            if i.0 % k != 0 {
                return Ok(SliceDecision::Skip);
            }
        } else {
            let add_stretch = target_width / (new_slice_width as f64 * n);
            right = left.saturating_add(floor_at_least_one(new_slice_width as f64 * add_stretch));
        }
    }

    debug_assert!(right > left);
    Ok(SliceDecision::Take(SliceSpec { left, right }))
}

fn floor_u64(v: f64) -> u64 {
    // `as` saturates: NaN and negatives become 0.
    v.floor() as u64
}

fn floor_at_least_one(v: f64) -> u64 {
    floor_u64(v).max(1)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/slice.rs"]
mod tests;
