use crate::config::options::SliceConfig;
use crate::foundation::error::SlitResult;
use crate::mosaic::accumulator::Mosaic;

/// Final pass: for any mirror mode other than `None`, append the whole mosaic flipped
/// left-to-right, doubling its width.
///
/// `Half` and `Full` are identical here; they only differ in how much of each frame the geometry
/// step scanned.
pub fn finish_mirror(mut mosaic: Mosaic, config: &SliceConfig) -> SlitResult<Mosaic> {
    if config.mirror.is_enabled() {
        mosaic.push_reversed_copy()?;
    }
    Ok(mosaic)
}

#[cfg(test)]
#[path = "../../tests/unit/mosaic/mirror.rs"]
mod tests;
