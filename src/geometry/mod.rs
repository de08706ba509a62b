//! Per-frame strip geometry.

/// Strip bounds, baseline width and the stretch/fixed-width policies.
pub mod slice;
