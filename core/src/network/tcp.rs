use std::net::{IpAddr, SocketAddr};

use hostscan_common::error::{ConnectionError, SocketErrorCode};
use hostscan_common::network::host::PortProbeResult;
use tokio::net::TcpStream;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Makes a single connect attempt to `port`, trying `addresses` in order
/// until one accepts.
///
/// The stream is dropped as soon as the handshake completes. Cancellation
/// drops the pending connect, which closes its socket.
pub async fn probe_port(
    addresses: &[IpAddr],
    port: u16,
    cancel: &CancellationToken,
) -> PortProbeResult {
    if addresses.is_empty() {
        return PortProbeResult::closed(
            port,
            ConnectionError::new(
                SocketErrorCode::AddressNotAvailable,
                "host has no addresses to connect to",
            ),
        );
    }

    let endpoints: Vec<SocketAddr> = addresses
        .iter()
        .map(|ip| SocketAddr::new(*ip, port))
        .collect();

    let attempt = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!(port, "connect cancelled");
            return PortProbeResult::closed(port, ConnectionError::aborted());
        }
        res = TcpStream::connect(endpoints.as_slice()) => res,
    };

    match attempt {
        Ok(stream) => {
            debug!(port, peer = ?stream.peer_addr().ok(), "port accepted connection");
            drop(stream);
            PortProbeResult::open(port)
        }
        Err(err) => {
            debug!(port, error = %err, "connect failed");
            PortProbeResult::closed(port, err.into())
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
