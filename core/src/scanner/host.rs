use futures::future::join_all;
use hostscan_common::network::host::HostOutcome;
use hostscan_common::network::target::HostTarget;
use tokio_util::sync::CancellationToken;

use crate::network::tcp;
use crate::scanner::resolver::{self, Resolve};

/// Resolves `target`, then probes every port in `ports` concurrently.
///
/// Ports are never probed when resolution fails. Port results keep the
/// order of `ports`.
pub async fn probe_host(
    resolver: &dyn Resolve,
    target: HostTarget,
    ports: &[u16],
    cancel: &CancellationToken,
) -> HostOutcome {
    let resolution = resolver::resolve_host(resolver, &target.hostname, cancel).await;

    let port_results = match resolution.entry() {
        Some(entry) => {
            join_all(
                ports
                    .iter()
                    .map(|&port| tcp::probe_port(&entry.addresses, port, cancel)),
            )
            .await
        }
        None => Vec::new(),
    };

    HostOutcome {
        target,
        resolution,
        port_results,
    }
}
