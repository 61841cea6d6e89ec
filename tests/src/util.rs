use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use hostscan_common::config::{OutputOptions, ScanConfig};
use hostscan_common::error::{ResolutionError, SocketErrorCode};
use hostscan_common::network::host::{HostEntry, HostOutcome};
use hostscan_common::network::range::IndexRange;
use hostscan_common::network::template::HostnameTemplate;
use hostscan_core::{Resolve, Scanner, format_outcome};
use tokio::net::TcpListener;

pub const LOCALHOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Answers from a fixed table, optionally after a per-host delay.
#[derive(Default, Clone)]
pub struct StaticResolver {
    entries: HashMap<String, HostEntry>,
    delays: HashMap<String, Duration>,
}

impl StaticResolver {
    pub fn with_host(mut self, hostname: &str, entry: HostEntry) -> Self {
        self.entries.insert(hostname.to_string(), entry);
        self
    }

    pub fn with_delay(mut self, hostname: &str, delay: Duration) -> Self {
        self.delays.insert(hostname.to_string(), delay);
        self
    }
}

#[async_trait]
impl Resolve for StaticResolver {
    async fn resolve(&self, hostname: &str) -> Result<HostEntry, ResolutionError> {
        if let Some(delay) = self.delays.get(hostname) {
            tokio::time::sleep(*delay).await;
        }
        self.entries.get(hostname).cloned().ok_or_else(|| {
            ResolutionError::new(SocketErrorCode::HostNotFound, "No such host is known")
        })
    }
}

pub fn config(
    template: &str,
    lower: u32,
    upper: u32,
    ports: &[u16],
    output: OutputOptions,
) -> ScanConfig {
    ScanConfig::new(
        HostnameTemplate::parse(template).unwrap(),
        IndexRange::new(lower, upper).unwrap(),
        ports.iter().copied(),
        output,
    )
}

pub async fn outcomes(resolver: StaticResolver, cfg: &ScanConfig) -> Vec<HostOutcome> {
    Scanner::new(resolver).scan(cfg).collect().await
}

pub async fn render(resolver: StaticResolver, cfg: &ScanConfig) -> Vec<String> {
    outcomes(resolver, cfg)
        .await
        .iter()
        .flat_map(|outcome| format_outcome(outcome, &cfg.output))
        .collect()
}

pub async fn open_listener() -> (TcpListener, u16) {
    let listener = TcpListener::bind((LOCALHOST, 0)).await.unwrap();
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

/// A loopback port with nothing listening on it.
pub async fn closed_port() -> u16 {
    open_listener().await.1
}
