//! Processing options.

/// Enumerated processing options and their validation.
pub mod options;
