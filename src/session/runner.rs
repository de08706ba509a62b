use crate::config::options::SliceConfig;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::SlitResult;
use crate::geometry::slice::{SliceDecision, compute_slice};
use crate::mosaic::accumulator::Mosaic;
use crate::mosaic::mirror::finish_mirror;
use crate::session::naming::output_name;
use crate::sink::OutputSink;
use crate::source::FrameSource;

/// Per-run statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RunStats {
    /// Frames pulled from the source.
    pub frames_read: u64,
    /// Frames whose strip was appended.
    pub frames_included: u64,
    /// Frames dropped by fixed-width decimation.
    pub frames_skipped: u64,
    /// Final mosaic width in pixels (after mirroring).
    pub width: u32,
    /// Final mosaic height in pixels.
    pub height: u32,
}

/// Pull every frame from `source`, accumulate the strips, and apply the mirror pass.
///
/// Frames are consumed strictly in order; each one is fully handled before the next is
/// requested. A source that runs dry before its announced count simply ends the run early.
#[tracing::instrument(skip_all, fields(origin = ?source.origin()))]
pub fn build_mosaic(
    source: &mut dyn FrameSource,
    config: &SliceConfig,
) -> SlitResult<(Mosaic, RunStats)> {
    config.validate()?;
    let frame_count = source.frame_count();
    let mut mosaic = Mosaic::new();
    let mut stats = RunStats::default();
    let mut idx = FrameIndex(0);

    while let Some(frame) = source.next_frame()? {
        let i = idx;
        idx = idx.next();
        stats.frames_read += 1;

        match compute_slice(i, frame_count, frame.width, config)? {
            SliceDecision::Take(spec) => {
                mosaic.append(&frame, spec)?;
                stats.frames_included += 1;
                tracing::debug!(
                    i = i.0,
                    frame_count = frame_count.as_f64(),
                    slice_width = spec.width(),
                    left = spec.left,
                    right = spec.right,
                    mosaic_width = mosaic.width(),
                    mosaic_height = mosaic.height(),
                    "appended strip"
                );
            }
            SliceDecision::Skip => {
                stats.frames_skipped += 1;
                tracing::debug!(i = i.0, "decimated");
            }
        }
    }

    if (stats.frames_read as f64) < frame_count.as_f64().floor() {
        tracing::warn!(
            frames_read = stats.frames_read,
            frame_count = frame_count.as_f64(),
            "source ended before its announced frame count"
        );
    }

    let mosaic = finish_mirror(mosaic, config)?;
    stats.width = mosaic.width();
    stats.height = mosaic.height();
    Ok((mosaic, stats))
}

/// Build the mosaic and hand it to `sink` under its descriptive name.
pub fn run(
    source: &mut dyn FrameSource,
    config: &SliceConfig,
    sink: &mut dyn OutputSink,
) -> SlitResult<RunStats> {
    let name = output_name(source.origin(), config);
    let (mosaic, stats) = build_mosaic(source, config)?;
    sink.write(&mosaic, &name)?;
    tracing::info!(
        name = %name,
        frames_read = stats.frames_read,
        frames_included = stats.frames_included,
        frames_skipped = stats.frames_skipped,
        width = stats.width,
        height = stats.height,
        "timelapse finished"
    );
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/session/runner.rs"]
mod tests;
