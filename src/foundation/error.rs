/// Convenience result type used across slitlapse.
pub type SlitResult<T> = Result<T, SlitError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum SlitError {
    /// Invalid user-provided configuration or input values.
    #[error("validation error: {0}")]
    Validation(String),

    /// A frame does not share the height/channel layout the mosaic was seeded with.
    #[error(
        "dimension mismatch: expected {expected_height}px tall x {expected_channels} channels, got {got_height}px x {got_channels}"
    )]
    DimensionMismatch {
        /// Height the mosaic was seeded with.
        expected_height: u32,
        /// Channel count the mosaic was seeded with.
        expected_channels: u8,
        /// Height of the offending frame.
        got_height: u32,
        /// Channel count of the offending frame.
        got_channels: u8,
    },

    /// Errors while reading frames from a source.
    #[error("source error: {0}")]
    Source(String),

    /// Errors while handing the finished mosaic to a sink.
    #[error("sink error: {0}")]
    Sink(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlitError {
    /// Build a [`SlitError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SlitError::Source`] value.
    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }

    /// Build a [`SlitError::Sink`] value.
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }

    /// Build a [`SlitError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
