//! End-to-end tests for the resolve-then-probe pipeline.
//!
//! DNS is replaced by an in-memory table; ports are real loopback listeners.

#[cfg(test)]
mod scan;
#[cfg(test)]
mod util;
