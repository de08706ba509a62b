use std::{fmt, fs::File, io::BufReader, path::Path, str::FromStr};

use anyhow::Context as _;

use crate::foundation::error::{SlitError, SlitResult};

/// Whether and how a reversed copy of the mosaic is appended after accumulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MirrorMode {
    /// No reversed copy.
    #[default]
    None,
    /// Scan only the first half of each frame, then mirror to rebuild the back half.
    Half,
    /// Scan the whole frame, then append a full reversed replay.
    Full,
}

impl MirrorMode {
    /// Return `true` for `Half` and `Full`.
    pub fn is_enabled(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Stable lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Half => "half",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for MirrorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MirrorMode {
    type Err = SlitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "half" => Ok(Self::Half),
            "full" => Ok(Self::Full),
            other => Err(SlitError::validation(format!(
                "unknown mirror mode '{other}' (expected none, half or full)"
            ))),
        }
    }
}

/// Processing options, resolved once before any frame is read.
///
/// Every field is optional; an absent field means baseline behavior. Unknown keys are rejected
/// when deserializing.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliceConfig {
    /// Fixed horizontal origin of the strip as a fraction of frame width, in `[0, 1]`.
    ///
    /// When unset the origin scans across the frame as the frame index grows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slice_location: Option<f64>,
    /// Reversed-copy policy.
    pub mirror: MirrorMode,
    /// Strip width multiplier, `> 0`. Values below 1 narrow, values above 1 widen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stretch: Option<f64>,
    /// Keep the total output width close to the frame width.
    pub fixed_width: bool,
}

impl SliceConfig {
    /// Start building a configuration.
    pub fn builder() -> SliceConfigBuilder {
        SliceConfigBuilder::default()
    }

    /// Check value ranges.
    pub fn validate(&self) -> SlitResult<()> {
        if let Some(loc) = self.slice_location
            && !(loc.is_finite() && (0.0..=1.0).contains(&loc))
        {
            return Err(SlitError::validation(format!(
                "slice_location must be within [0, 1], got {loc}"
            )));
        }
        if let Some(stretch) = self.stretch
            && !(stretch.is_finite() && stretch > 0.0)
        {
            return Err(SlitError::validation(format!(
                "stretch must be a positive finite number, got {stretch}"
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(s: &str) -> SlitResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| SlitError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> SlitResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| SlitError::serde(format!("parse config '{}': {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Builder for [`SliceConfig`]; `build` validates.
#[derive(Clone, Debug, Default)]
pub struct SliceConfigBuilder {
    cfg: SliceConfig,
}

impl SliceConfigBuilder {
    /// Fix the strip origin at `fraction` of the frame width.
    pub fn slice_location(mut self, fraction: f64) -> Self {
        self.cfg.slice_location = Some(fraction);
        self
    }

    /// Select the mirror policy.
    pub fn mirror(mut self, mode: MirrorMode) -> Self {
        self.cfg.mirror = mode;
        self
    }

    /// Set the strip width multiplier.
    pub fn stretch(mut self, factor: f64) -> Self {
        self.cfg.stretch = Some(factor);
        self
    }

    /// Enable or disable the fixed total width policy.
    pub fn fixed_width(mut self, on: bool) -> Self {
        self.cfg.fixed_width = on;
        self
    }

    /// Finish and validate.
    pub fn build(self) -> SlitResult<SliceConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/options.rs"]
mod tests;
