//! # Result Formatting
//!
//! Decides which hosts are reported and renders their lines:
//!
//! ```text
//! <canonical>[ ("<alias>", ...)][: <addr>, ...][ TCP: <port>, ...]
//! <requested>: Socket error: <code>, <message>
//! \tUnable to connect to port <port>: Socket error: <code>: <message>
//! ```

use std::fmt::Display;

use hostscan_common::config::OutputOptions;
use hostscan_common::network::host::{HostEntry, HostOutcome};

/// Renders `outcome` into zero or more output lines.
///
/// A resolved host is dropped when `require_ports` is set and any probe
/// failed. Per-port failure lines depend only on `show_failures`, so they
/// are emitted even for a dropped host.
pub fn format_outcome(outcome: &HostOutcome, options: &OutputOptions) -> Vec<String> {
    let entry = match &outcome.resolution.outcome {
        Ok(entry) => entry,
        Err(err) if options.show_failures => {
            return vec![format!(
                "{}: Socket error: {}",
                outcome.resolution.requested_hostname, err
            )];
        }
        Err(_) => return Vec::new(),
    };

    let mut lines: Vec<String> = Vec::new();

    if is_reported(outcome, options) {
        lines.push(host_line(entry, outcome, options));
    }

    if options.show_failures {
        lines.extend(outcome.failed_ports().map(|(port, err)| {
            format!("\tUnable to connect to port {port}: Socket error: {err}")
        }));
    }

    lines
}

/// Whether a resolved host gets its success line.
pub fn is_reported(outcome: &HostOutcome, options: &OutputOptions) -> bool {
    outcome.is_resolved() && (!options.require_ports || outcome.all_ports_open())
}

fn host_line(entry: &HostEntry, outcome: &HostOutcome, options: &OutputOptions) -> String {
    let joiner = options.list_joiner();
    let mut line = entry.canonical_name.clone();

    if !options.omit_aliases {
        let aliases: Vec<&str> = entry.distinct_aliases().collect();
        if !aliases.is_empty() {
            line.push_str(&format!(" (\"{}\")", aliases.join("\", \"")));
        }
    }

    if !options.omit_addresses && !entry.addresses.is_empty() {
        line.push_str(": ");
        line.push_str(&join(&entry.addresses, &joiner));
    }

    if !options.omit_ports {
        let open: Vec<u16> = outcome.open_ports().collect();
        if !open.is_empty() {
            line.push_str(" TCP: ");
            line.push_str(&join(&open, &joiner));
        }
    }

    line
}

fn join<T: Display>(items: &[T], joiner: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(joiner)
}

/// Running counts for the end-of-scan summary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub scanned: usize,
    pub resolved: usize,
    pub reported: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: &HostOutcome, options: &OutputOptions) {
        self.scanned += 1;
        if outcome.is_resolved() {
            self.resolved += 1;
        }
        if is_reported(outcome, options) {
            self.reported += 1;
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
