use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context as _;

use crate::foundation::error::{SlitError, SlitResult};
use crate::source::video::{VideoSource, probe_video};
use crate::source::{SourceOrigin, is_tool_on_path};

/// `yt-dlp` format selector: an mp4 no taller than 720p, falling back to the best mp4.
pub const REMOTE_FORMAT: &str = "mp4[height<=720]/best[ext=mp4]";

/// Output template relative to the download directory.
const OUTPUT_TEMPLATE: &str = "%(id)s.%(ext)s";

/// A video fetched from a URL, then decoded like a local file.
#[derive(Clone, Debug)]
pub struct RemoteVideo {
    /// URL passed to `yt-dlp`.
    pub url: String,
    /// Directory the download is written to.
    pub download_dir: PathBuf,
}

impl RemoteVideo {
    /// Describe a remote video to be stored under `download_dir`.
    pub fn new(url: impl Into<String>, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            download_dir: download_dir.into(),
        }
    }

    /// Download (or reuse a previous download) and open it as a [`VideoSource`].
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    pub fn open(&self) -> SlitResult<VideoSource> {
        let file = self.fetch()?;
        let info = probe_video(&file)?;
        VideoSource::open_probed(
            info,
            SourceOrigin::Remote {
                url: self.url.clone(),
                file,
            },
        )
    }

    /// Make sure the video is on disk and return its path.
    ///
    /// An existing file at the resolved output path is reused without downloading again.
    pub fn fetch(&self) -> SlitResult<PathBuf> {
        if !is_tool_on_path("yt-dlp", "--version") {
            return Err(SlitError::source(
                "yt-dlp is required for remote videos, but was not found on PATH",
            ));
        }
        std::fs::create_dir_all(&self.download_dir).with_context(|| {
            format!(
                "failed to create download directory '{}'",
                self.download_dir.display()
            )
        })?;

        let target = self.resolve_file_name()?;
        if target.is_file() {
            tracing::info!(path = %target.display(), "reusing downloaded video");
            return Ok(target);
        }

        tracing::info!(path = %target.display(), "downloading video");
        let out = self
            .base_command()
            .arg(&self.url)
            .output()
            .map_err(|e| SlitError::source(format!("failed to run yt-dlp: {e}")))?;
        if !out.status.success() {
            return Err(SlitError::source(format!(
                "yt-dlp download failed for '{}': {}",
                self.url,
                String::from_utf8_lossy(&out.stderr).trim()
            )));
        }
        if !target.is_file() {
            return Err(SlitError::source(format!(
                "yt-dlp finished but '{}' does not exist",
                target.display()
            )));
        }
        Ok(target)
    }

    fn resolve_file_name(&self) -> SlitResult<PathBuf> {
        let out = self
            .base_command()
            .args(["--get-filename", self.url.as_str()])
            .output()
            .map_err(|e| SlitError::source(format!("failed to run yt-dlp: {e}")))?;
        if !out.status.success() {
            return Err(SlitError::source(format!(
                "yt-dlp could not resolve '{}': {}",
                self.url,
                String::from_utf8_lossy(&out.stderr).trim()
            )));
        }
        parse_resolved_path(&String::from_utf8_lossy(&out.stdout)).ok_or_else(|| {
            SlitError::source(format!("yt-dlp returned no file name for '{}'", self.url))
        })
    }

    fn base_command(&self) -> Command {
        let mut cmd = Command::new("yt-dlp");
        cmd.args(["--no-warnings", "--no-playlist", "-f", REMOTE_FORMAT, "-o"])
            .arg(output_template(&self.download_dir));
        cmd
    }
}

fn output_template(dir: &Path) -> PathBuf {
    dir.join(OUTPUT_TEMPLATE)
}

/// First non-empty line of `yt-dlp --get-filename` output.
pub(crate) fn parse_resolved_path(stdout: &str) -> Option<PathBuf> {
    stdout
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
#[path = "../../tests/unit/source/remote.rs"]
mod tests;
