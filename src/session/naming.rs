use crate::config::options::SliceConfig;
use crate::source::SourceOrigin;

/// Prefix shared by every output name.
pub const NAME_PREFIX: &str = "SFTL";

/// Descriptive, deterministic output name (without extension).
///
/// `SFTL_<source>` followed by, in this order and only when set: `_slice=<v>`,
/// `_<mode>-mirror`, `_stretch=<v>`, `_fixed-width`.
pub fn output_name(origin: &SourceOrigin, config: &SliceConfig) -> String {
    let mut name = String::from(NAME_PREFIX);
    let label = origin.label();
    if !label.is_empty() {
        name.push('_');
        name.push_str(&label);
    }
    if let Some(loc) = config.slice_location {
        name.push_str(&format!("_slice={loc}"));
    }
    if config.mirror.is_enabled() {
        name.push_str(&format!("_{}-mirror", config.mirror));
    }
    if let Some(stretch) = config.stretch {
        name.push_str(&format!("_stretch={stretch}"));
    }
    if config.fixed_width {
        name.push_str("_fixed-width");
    }
    name
}

#[cfg(test)]
#[path = "../../tests/unit/session/naming.rs"]
mod tests;
