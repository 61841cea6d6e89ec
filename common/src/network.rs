//! Host level models.
//!
//! * [`template::HostnameTemplate`]: turns an index into a hostname.
//! * [`range::IndexRange`]: the half-open `[lower, upper)` index bounds.
//! * [`target::HostTarget`]: one generated hostname with its index.
//! * [`host`]: resolution, probe and aggregated per-host outcomes.

pub mod host;
pub mod range;
pub mod target;
pub mod template;
