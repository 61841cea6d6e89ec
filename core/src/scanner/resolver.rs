//! Forward host-entry lookups.
//!
//! [`Resolve`] is the seam between the pipeline and a DNS backend.
//! [`SystemResolver`] is the production backend and honours the platform
//! resolver configuration and hosts file.

use std::net::IpAddr;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::lookup::Lookup;
use hickory_resolver::lookup_ip::LookupIp;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{Name, RData, RecordType};
use hostscan_common::error::{ResolutionError, SocketErrorCode};
use hostscan_common::network::host::{HostEntry, ResolutionResult};
use tokio_util::sync::CancellationToken;
use tracing::debug;

#[async_trait]
pub trait Resolve: Send + Sync {
    /// Looks up `hostname` once. No retries.
    async fn resolve(&self, hostname: &str) -> Result<HostEntry, ResolutionError>;
}

pub struct SystemResolver {
    inner: TokioAsyncResolver,
}

impl SystemResolver {
    pub fn from_system_conf() -> Result<Self, ResolutionError> {
        let inner =
            TokioAsyncResolver::tokio_from_system_conf().map_err(|err| to_resolution_error(&err))?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl Resolve for SystemResolver {
    async fn resolve(&self, hostname: &str) -> Result<HostEntry, ResolutionError> {
        let result = self.inner.lookup_ip(hostname).await;
        to_host_entry(hostname, result.as_ref().map(LookupIp::as_lookup))
    }
}

fn to_host_entry(
    hostname: &str,
    result: Result<&Lookup, &ResolveError>,
) -> Result<HostEntry, ResolutionError> {
    match result {
        Ok(lookup) => Ok(entry_from_lookup(hostname, lookup)),
        Err(err) => match err.kind() {
            // The name exists but carries no address records.
            ResolveErrorKind::NoRecordsFound {
                response_code: ResponseCode::NoError,
                ..
            } => Ok(HostEntry::new(hostname)),
            _ => Err(to_resolution_error(err)),
        },
    }
}

/// Runs one lookup for `hostname`, giving up if `cancel` fires first.
pub async fn resolve_host(
    resolver: &dyn Resolve,
    hostname: &str,
    cancel: &CancellationToken,
) -> ResolutionResult {
    let outcome = tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ResolutionError::aborted()),
        res = resolver.resolve(hostname) => res,
    };

    match outcome {
        Ok(entry) => {
            debug!(
                hostname,
                canonical = %entry.canonical_name,
                addresses = entry.addresses.len(),
                "resolved"
            );
            ResolutionResult::resolved(hostname, entry)
        }
        Err(err) => {
            debug!(hostname, error = %err, "resolution failed");
            ResolutionResult::failed(hostname, err)
        }
    }
}

fn entry_from_lookup(hostname: &str, lookup: &Lookup) -> HostEntry {
    let mut canonical_name: Option<String> = None;
    let mut aliases: Vec<String> = Vec::new();
    let mut addresses: Vec<IpAddr> = Vec::new();

    for record in lookup.records() {
        if record.record_type() == RecordType::CNAME {
            aliases.push(display_name(record.name()));
            continue;
        }
        if let Some(ip) = record.data().and_then(RData::ip_addr) {
            canonical_name.get_or_insert_with(|| display_name(record.name()));
            addresses.push(ip);
        }
    }

    let mut entry = HostEntry::new(canonical_name.unwrap_or_else(|| hostname.to_string()));
    for alias in aliases {
        entry = entry.with_alias(alias);
    }
    entry.addresses = addresses;
    entry
}

fn display_name(name: &Name) -> String {
    name.to_utf8().trim_end_matches('.').to_string()
}

fn to_resolution_error(err: &ResolveError) -> ResolutionError {
    let code = match err.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => match response_code {
            ResponseCode::NXDomain => SocketErrorCode::HostNotFound,
            ResponseCode::ServFail => SocketErrorCode::TryAgain,
            _ => SocketErrorCode::NoData,
        },
        ResolveErrorKind::Timeout => SocketErrorCode::TimedOut,
        ResolveErrorKind::Io(io_err) => io_err.kind().into(),
        ResolveErrorKind::NoConnections => SocketErrorCode::NetworkUnreachable,
        _ => SocketErrorCode::SocketError,
    };
    ResolutionError::new(code, err.to_string())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
