//! # Hostscan Core
//!
//! The resolve-then-probe pipeline.
//!
//! * **[`scanner`]**: generates hostnames, fans out one host probe per target,
//!   and yields outcomes in target order.
//! * **[`scanner::resolver`]**: the DNS seam and the system backend.
//! * **[`network::tcp`]**: single TCP connect attempts.
//! * **[`report`]**: turns an outcome into output lines.

pub mod network;
pub mod report;
pub mod scanner;

pub use report::{Tally, format_outcome};
pub use scanner::resolver::{Resolve, SystemResolver};
pub use scanner::{Scan, Scanner};
