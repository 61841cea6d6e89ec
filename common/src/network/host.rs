//! Per-host results: what DNS returned, how each port probe went, and the
//! aggregate handed to the formatter.

use std::net::IpAddr;

use crate::error::{ConnectionError, ResolutionError};
use crate::network::target::HostTarget;

/// Host entry returned by a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostEntry {
    pub canonical_name: String,
    pub aliases: Vec<String>,
    pub addresses: Vec<IpAddr>,
}

impl HostEntry {
    pub fn new(canonical_name: impl Into<String>) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            ..Self::default()
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        if !self.aliases.contains(&alias) {
            self.aliases.push(alias);
        }
        self
    }

    pub fn with_address(mut self, address: IpAddr) -> Self {
        self.addresses.push(address);
        self
    }

    /// Aliases other than the canonical name, compared case-insensitively.
    pub fn distinct_aliases(&self) -> impl Iterator<Item = &str> {
        self.aliases
            .iter()
            .map(String::as_str)
            .filter(|alias| !alias.eq_ignore_ascii_case(&self.canonical_name))
    }
}

/// Outcome of resolving one requested hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    pub requested_hostname: String,
    pub outcome: Result<HostEntry, ResolutionError>,
}

impl ResolutionResult {
    pub fn resolved(requested_hostname: impl Into<String>, entry: HostEntry) -> Self {
        Self {
            requested_hostname: requested_hostname.into(),
            outcome: Ok(entry),
        }
    }

    pub fn failed(requested_hostname: impl Into<String>, error: ResolutionError) -> Self {
        Self {
            requested_hostname: requested_hostname.into(),
            outcome: Err(error),
        }
    }

    pub fn entry(&self) -> Option<&HostEntry> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&ResolutionError> {
        self.outcome.as_ref().err()
    }
}

/// Outcome of one TCP connect attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortProbeResult {
    pub port: u16,
    pub outcome: Result<(), ConnectionError>,
}

impl PortProbeResult {
    pub fn open(port: u16) -> Self {
        Self { port, outcome: Ok(()) }
    }

    pub fn closed(port: u16, error: ConnectionError) -> Self {
        Self {
            port,
            outcome: Err(error),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn error(&self) -> Option<&ConnectionError> {
        self.outcome.as_ref().err()
    }
}

/// Everything learned about one target.
///
/// `port_results` is empty when resolution failed; otherwise it holds one
/// entry per requested port, in request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostOutcome {
    pub target: HostTarget,
    pub resolution: ResolutionResult,
    pub port_results: Vec<PortProbeResult>,
}

impl HostOutcome {
    pub fn is_resolved(&self) -> bool {
        self.resolution.outcome.is_ok()
    }

    /// True when no ports were probed or every probe connected.
    pub fn all_ports_open(&self) -> bool {
        self.port_results.iter().all(PortProbeResult::succeeded)
    }

    pub fn open_ports(&self) -> impl Iterator<Item = u16> + '_ {
        self.port_results
            .iter()
            .filter(|result| result.succeeded())
            .map(|result| result.port)
    }

    pub fn failed_ports(&self) -> impl Iterator<Item = (u16, &ConnectionError)> {
        self.port_results
            .iter()
            .filter_map(|result| result.error().map(|err| (result.port, err)))
    }
}
