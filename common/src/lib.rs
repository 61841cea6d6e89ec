//! # Hostscan Common
//!
//! Shared vocabulary for the scanner workspace: the values handed to the core
//! by the command line, the per-host result model, and the error taxonomy.
//!
//! Nothing in this crate performs I/O.

pub mod config;
pub mod error;
pub mod network;
