use std::time::Instant;

use anyhow::Context;
use futures::StreamExt;
use hostscan_common::config::ScanConfig;
use hostscan_core::{Scanner, Tally, format_outcome};
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, info, info_span, warn};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::terminal::{print, progress};

pub async fn scan(cfg: &ScanConfig) -> anyhow::Result<()> {
    let scanner = Scanner::from_system_conf()
        .context("failed to load the system resolver configuration")?;
    cancel_on_interrupt(scanner.cancellation_token().clone());

    let span = info_span!("scan", indicatif.pb_show = true);
    span.pb_set_style(&progress::style()?);
    span.pb_set_length(cfg.host_count() as u64);
    span.pb_set_message(cfg.template.as_str());

    let start_time = Instant::now();
    let tally = run(&scanner, cfg, &span).instrument(span.clone()).await?;
    drop(span);

    info!(
        "Scan complete: {} of {} hosts resolved, {} reported in {:.2}s",
        tally.resolved,
        tally.scanned,
        tally.reported,
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

async fn run(scanner: &Scanner, cfg: &ScanConfig, span: &tracing::Span) -> anyhow::Result<Tally> {
    let mut tally = Tally::default();
    let mut outcomes = scanner.scan(cfg);

    while let Some(outcome) = outcomes.next().await {
        tally.record(&outcome, &cfg.output);
        print::lines(&format_outcome(&outcome, &cfg.output)).context("failed to write results")?;
        span.pb_inc(1);
    }

    Ok(tally)
}

fn cancel_on_interrupt(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling outstanding lookups and connections");
            token.cancel();
        }
    });
}
