use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdout};

use crate::foundation::core::FrameCount;
use crate::foundation::error::{SlitError, SlitResult};
use crate::mosaic::frame::Frame;
use crate::source::{FrameSource, SourceOrigin};

/// Channels of the raw `rgb24` frames requested from `ffmpeg`.
const DECODE_CHANNELS: u8 = 3;

/// Basic metadata about a source video file.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoSourceInfo {
    /// Path used for probing/decoding.
    pub source_path: PathBuf,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Frame count: exact when the container stores it, otherwise `duration * fps`.
    pub frame_count: FrameCount,
}

/// Local video decoded frame by frame through a spawned `ffmpeg`.
///
/// The child process is killed and reaped when the source is dropped, whether the stream was
/// exhausted, abandoned early, or failed.
pub struct VideoSource {
    info: VideoSourceInfo,
    origin: SourceOrigin,
    child: Option<Child>,
    stdout: Option<ChildStdout>,
    stderr_drain: Option<std::thread::JoinHandle<std::io::Result<Vec<u8>>>>,
    frame_len: usize,
    finished: bool,
}

impl VideoSource {
    /// Probe `path` and start streaming its frames.
    #[tracing::instrument]
    pub fn open(path: &Path) -> SlitResult<Self> {
        let info = probe_video(path)?;
        Self::open_probed(info, SourceOrigin::Video(path.to_path_buf()))
    }

    /// Start streaming an already probed video, reporting `origin`.
    pub fn open_probed(info: VideoSourceInfo, origin: SourceOrigin) -> SlitResult<Self> {
        let frame_len =
            info.width as usize * info.height as usize * usize::from(DECODE_CHANNELS);
        if frame_len == 0 {
            return Err(SlitError::source(
                "video frame size is zero (invalid source dimensions)",
            ));
        }
        tracing::debug!(
            width = info.width,
            height = info.height,
            frame_count = info.frame_count.as_f64(),
            "probed video"
        );

        let mut child = spawn_decoder(&info.source_path)?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| SlitError::source("failed to open ffmpeg stdout (unexpected)"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| SlitError::source("failed to open ffmpeg stderr (unexpected)"))?;
        let stderr_drain = std::thread::spawn(move || {
            let mut stderr_bytes = Vec::new();
            stderr.read_to_end(&mut stderr_bytes)?;
            Ok(stderr_bytes)
        });

        Ok(Self {
            info,
            origin,
            child: Some(child),
            stdout: Some(stdout),
            stderr_drain: Some(stderr_drain),
            frame_len,
            finished: false,
        })
    }

    /// Probed metadata.
    pub fn info(&self) -> &VideoSourceInfo {
        &self.info
    }

    /// Wait for the decoder after EOF and surface a non-zero exit.
    fn finish(&mut self) -> SlitResult<()> {
        self.finished = true;
        drop(self.stdout.take());
        let Some(mut child) = self.child.take() else {
            return Ok(());
        };
        let status = child
            .wait()
            .map_err(|e| SlitError::source(format!("failed to wait for ffmpeg: {e}")))?;
        let stderr_bytes = match self.stderr_drain.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| SlitError::source("ffmpeg stderr drain thread panicked"))?
                .map_err(|e| SlitError::source(format!("ffmpeg stderr read failed: {e}")))?,
            None => Vec::new(),
        };
        if !status.success() {
            return Err(SlitError::source(format!(
                "ffmpeg decode of '{}' exited with status {}: {}",
                self.info.source_path.display(),
                status,
                String::from_utf8_lossy(&stderr_bytes).trim()
            )));
        }
        Ok(())
    }
}

impl FrameSource for VideoSource {
    fn frame_count(&self) -> FrameCount {
        self.info.frame_count
    }

    fn next_frame(&mut self) -> SlitResult<Option<Frame>> {
        if self.finished {
            return Ok(None);
        }
        let Some(stdout) = self.stdout.as_mut() else {
            return Ok(None);
        };

        let mut buf = vec![0u8; self.frame_len];
        let filled = read_full(stdout, &mut buf)
            .map_err(|e| SlitError::source(format!("failed to read from ffmpeg: {e}")))?;
        if filled == 0 {
            self.finish()?;
            return Ok(None);
        }
        if filled < self.frame_len {
            self.finished = true;
            return Err(SlitError::source(format!(
                "ffmpeg produced a truncated frame: got {filled} bytes, expected {}",
                self.frame_len
            )));
        }

        Frame::new(self.info.width, self.info.height, DECODE_CHANNELS, buf).map(Some)
    }

    fn origin(&self) -> &SourceOrigin {
        &self.origin
    }
}

impl Drop for VideoSource {
    fn drop(&mut self) {
        drop(self.stdout.take());
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
        if let Some(handle) = self.stderr_drain.take() {
            let _ = handle.join();
        }
    }
}

impl std::fmt::Debug for VideoSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoSource")
            .field("info", &self.info)
            .field("origin", &self.origin)
            .field("running", &self.child.is_some())
            .finish()
    }
}

/// Read until `buf` is full or EOF; returns the number of bytes read.
fn read_full(r: &mut impl Read, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Parse an ffprobe rational such as `30000/1001` or `25`.
pub(crate) fn parse_rate(s: &str) -> Option<f64> {
    let (num, den) = match s.split_once('/') {
        Some((n, d)) => (n.trim().parse::<f64>().ok()?, d.trim().parse::<f64>().ok()?),
        None => (s.trim().parse::<f64>().ok()?, 1.0),
    };
    if den == 0.0 {
        return None;
    }
    let rate = num / den;
    (rate.is_finite() && rate > 0.0).then_some(rate)
}

/// Pick the frame count from ffprobe fields: `nb_frames` when present, else `duration * rate`.
pub(crate) fn resolve_frame_count(
    nb_frames: Option<&str>,
    duration_sec: Option<&str>,
    avg_frame_rate: Option<&str>,
) -> Option<FrameCount> {
    if let Some(n) = nb_frames.and_then(|s| s.trim().parse::<u64>().ok())
        && n > 0
    {
        return Some(FrameCount::exact(n));
    }
    let duration = duration_sec.and_then(|s| s.trim().parse::<f64>().ok())?;
    let rate = avg_frame_rate.and_then(parse_rate)?;
    let estimate = duration * rate;
    (estimate.is_finite() && estimate > 0.0).then(|| FrameCount::estimated(estimate))
}

/// Probe source video metadata through `ffprobe`.
#[cfg(feature = "media-ffmpeg")]
pub fn probe_video(source_path: &Path) -> SlitResult<VideoSourceInfo> {
    #[derive(serde::Deserialize)]
    struct ProbeStream {
        codec_type: Option<String>,
        width: Option<u32>,
        height: Option<u32>,
        nb_frames: Option<String>,
        avg_frame_rate: Option<String>,
        duration: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeFormat {
        duration: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        streams: Vec<ProbeStream>,
        format: Option<ProbeFormat>,
    }

    let out = std::process::Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_streams",
            "-show_format",
        ])
        .arg(source_path)
        .output()
        .map_err(|e| SlitError::source(format!("failed to run ffprobe: {e}")))?;
    if !out.status.success() {
        return Err(SlitError::source(format!(
            "ffprobe failed for '{}': {}",
            source_path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    let parsed: ProbeOut = serde_json::from_slice(&out.stdout)
        .map_err(|e| SlitError::serde(format!("ffprobe json parse failed: {e}")))?;
    let video_stream = parsed
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .ok_or_else(|| SlitError::source("no video stream found"))?;
    let width = video_stream
        .width
        .ok_or_else(|| SlitError::source("missing video width from ffprobe"))?;
    let height = video_stream
        .height
        .ok_or_else(|| SlitError::source("missing video height from ffprobe"))?;
    let duration = video_stream
        .duration
        .as_deref()
        .or_else(|| parsed.format.as_ref().and_then(|f| f.duration.as_deref()));
    let frame_count = resolve_frame_count(
        video_stream.nb_frames.as_deref(),
        duration,
        video_stream.avg_frame_rate.as_deref(),
    )
    .ok_or_else(|| {
        SlitError::source(format!(
            "ffprobe reported neither a frame count nor a duration for '{}'",
            source_path.display()
        ))
    })?;

    Ok(VideoSourceInfo {
        source_path: source_path.to_path_buf(),
        width,
        height,
        frame_count,
    })
}

#[cfg(not(feature = "media-ffmpeg"))]
/// Probe source video metadata through `ffprobe`.
///
/// Returns an error when `media-ffmpeg` feature is disabled.
pub fn probe_video(_source_path: &Path) -> SlitResult<VideoSourceInfo> {
    Err(SlitError::source(
        "video input requires the 'media-ffmpeg' feature",
    ))
}

#[cfg(feature = "media-ffmpeg")]
fn spawn_decoder(source_path: &Path) -> SlitResult<Child> {
    use std::process::{Command, Stdio};

    Command::new("ffmpeg")
        .args(["-v", "error", "-nostdin", "-i"])
        .arg(source_path)
        .args(["-an", "-f", "rawvideo", "-pix_fmt", "rgb24", "pipe:1"])
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            SlitError::source(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })
}

#[cfg(not(feature = "media-ffmpeg"))]
fn spawn_decoder(_source_path: &Path) -> SlitResult<Child> {
    Err(SlitError::source(
        "video input requires the 'media-ffmpeg' feature",
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/source/video.rs"]
mod tests;
