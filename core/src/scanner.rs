//! # Scan Orchestration
//!
//! A [`Scanner`] turns a [`ScanConfig`] into a [`Scan`]: one spawned host
//! probe per generated hostname, all started at once, with outcomes yielded
//! strictly in index order.
//!
//! There is no concurrency limit. The runtime and the OS absorb up to
//! `upper - lower` simultaneous lookups and connects.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, ready};

use futures::stream::{FuturesOrdered, Stream, StreamExt};
use hostscan_common::config::ScanConfig;
use hostscan_common::error::ResolutionError;
use hostscan_common::network::host::HostOutcome;
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, info};

use resolver::{Resolve, SystemResolver};

pub mod host;
pub mod resolver;

#[derive(Clone)]
pub struct Scanner {
    resolver: Arc<dyn Resolve>,
    cancel: CancellationToken,
}

impl Scanner {
    pub fn new(resolver: impl Resolve + 'static) -> Self {
        Self {
            resolver: Arc::new(resolver),
            cancel: CancellationToken::new(),
        }
    }

    /// Scanner backed by the platform resolver configuration.
    pub fn from_system_conf() -> Result<Self, ResolutionError> {
        Ok(Self::new(SystemResolver::from_system_conf()?))
    }

    /// Replaces the scanner's cancellation token.
    ///
    /// Cancelling `token` aborts every in-flight lookup and connect of every
    /// scan started afterwards.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Starts probing every target in `config`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn scan(&self, config: &ScanConfig) -> Scan {
        let cancel = self.cancel.child_token();
        let ports: Arc<[u16]> = Arc::from(config.ports.as_slice());
        let mut pending = FuturesOrdered::new();

        for target in config.targets() {
            let resolver = Arc::clone(&self.resolver);
            let ports = Arc::clone(&ports);
            let cancel = cancel.clone();
            pending.push_back(tokio::spawn(async move {
                host::probe_host(resolver.as_ref(), target, &ports, &cancel).await
            }));
        }

        info!(
            template = %config.template,
            hosts = pending.len(),
            ports = ports.len(),
            "scan started"
        );

        Scan {
            pending,
            _cancel_on_drop: cancel.drop_guard(),
        }
    }
}

/// Ordered stream of [`HostOutcome`]s.
///
/// Each outcome is yielded as soon as it and every earlier target have
/// finished. Dropping the stream cancels whatever is still running.
pub struct Scan {
    pending: FuturesOrdered<JoinHandle<HostOutcome>>,
    _cancel_on_drop: DropGuard,
}

impl Scan {
    /// Outcomes not yet yielded.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl Stream for Scan {
    type Item = HostOutcome;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        match ready!(self.pending.poll_next_unpin(cx)) {
            Some(Ok(outcome)) => Poll::Ready(Some(outcome)),
            Some(Err(err)) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Some(Err(err)) => {
                // Only happens while the runtime is shutting down.
                debug!(error = %err, "host probe aborted");
                Poll::Ready(None)
            }
            None => Poll::Ready(None),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.pending.len()))
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
