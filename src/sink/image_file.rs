use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{SlitError, SlitResult};
use crate::mosaic::accumulator::Mosaic;
use crate::sink::OutputSink;

/// Options for [`ImageFileSink`].
#[derive(Clone, Debug)]
pub struct ImageFileSinkOpts {
    /// Directory the image is written into.
    pub out_dir: PathBuf,
    /// Encoded format; the file extension follows it.
    pub format: image::ImageFormat,
    /// Overwrite an existing file with the same name.
    pub overwrite: bool,
}

impl ImageFileSinkOpts {
    /// PNG output into `out_dir`, overwriting existing files.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            format: image::ImageFormat::Png,
            overwrite: true,
        }
    }
}

/// Writes the mosaic as `<out_dir>/<name>.<ext>`.
#[derive(Debug)]
pub struct ImageFileSink {
    opts: ImageFileSinkOpts,
    written: Option<PathBuf>,
}

impl ImageFileSink {
    /// Create a sink with the given options.
    pub fn new(opts: ImageFileSinkOpts) -> Self {
        Self {
            opts,
            written: None,
        }
    }

    /// Path of the last successfully written file.
    pub fn written_path(&self) -> Option<&Path> {
        self.written.as_deref()
    }

    /// Path `name` would be written to.
    pub fn path_for(&self, name: &str) -> PathBuf {
        let ext = self
            .opts
            .format
            .extensions_str()
            .first()
            .copied()
            .unwrap_or("png");
        self.opts.out_dir.join(format!("{name}.{ext}"))
    }
}

impl OutputSink for ImageFileSink {
    fn write(&mut self, mosaic: &Mosaic, name: &str) -> SlitResult<()> {
        if mosaic.is_empty() || mosaic.height() == 0 {
            return Err(SlitError::sink(format!(
                "refusing to encode an empty {}x{} mosaic as '{name}'",
                mosaic.width(),
                mosaic.height()
            )));
        }
        let color = color_type_for(mosaic.channels())?;
        let path = self.path_for(name);
        if !self.opts.overwrite && path.exists() {
            return Err(SlitError::sink(format!(
                "output file '{}' already exists",
                path.display()
            )));
        }
        ensure_parent_dir(&path)?;

        image::save_buffer_with_format(
            &path,
            &mosaic.to_row_major(),
            mosaic.width(),
            mosaic.height(),
            color,
            self.opts.format,
        )
        .with_context(|| format!("write image '{}'", path.display()))?;

        tracing::info!(
            path = %path.display(),
            width = mosaic.width(),
            height = mosaic.height(),
            "wrote mosaic"
        );
        self.written = Some(path);
        Ok(())
    }
}

fn color_type_for(channels: u8) -> SlitResult<image::ColorType> {
    match channels {
        1 => Ok(image::ColorType::L8),
        2 => Ok(image::ColorType::La8),
        3 => Ok(image::ColorType::Rgb8),
        4 => Ok(image::ColorType::Rgba8),
        other => Err(SlitError::sink(format!(
            "unsupported channel count {other} for image output"
        ))),
    }
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> SlitResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/sink/image_file.rs"]
mod tests;
