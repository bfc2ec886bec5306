//! Pure, platform-agnostic logic: score aggregation, filter state and formatting.

pub mod aggregate;
pub mod filters;
pub mod format;
