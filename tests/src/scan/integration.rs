#![cfg(test)]
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use hostscan_common::config::OutputOptions;
use hostscan_common::network::host::HostEntry;

use crate::util::{self, LOCALHOST, StaticResolver};

fn example_hosts() -> StaticResolver {
    StaticResolver::default()
        .with_host(
            "host0.example.com",
            HostEntry::new("host0.example.com")
                .with_address(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1))),
        )
        .with_host(
            "host1.example.com",
            HostEntry::new("host1.example.com")
                .with_address(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 2))),
        )
}

fn loopback_host() -> StaticResolver {
    StaticResolver::default().with_host(
        "lo0.test",
        HostEntry::new("lo0.test").with_address(LOCALHOST),
    )
}

#[tokio::test]
async fn names_and_addresses_without_ports() {
    let cfg = util::config("host{0}.example.com", 0, 2, &[], OutputOptions::default());

    let lines = util::render(example_hosts(), &cfg).await;

    assert_eq!(
        lines,
        vec!["host0.example.com: 192.0.2.1", "host1.example.com: 192.0.2.2"]
    );
}

#[tokio::test]
async fn only_open_ports_are_listed() {
    let (_listener, open) = util::open_listener().await;
    let closed = util::closed_port().await;
    let cfg = util::config("lo{0}.test", 0, 1, &[open, closed], OutputOptions::default());

    let lines = util::render(loopback_host(), &cfg).await;

    assert_eq!(lines, vec![format!("lo0.test: 127.0.0.1 TCP: {open}")]);
}

#[tokio::test]
async fn required_ports_drop_host_silently() {
    let (_listener, open) = util::open_listener().await;
    let closed = util::closed_port().await;
    let output = OutputOptions {
        require_ports: true,
        ..OutputOptions::default()
    };
    let cfg = util::config("lo{0}.test", 0, 1, &[open, closed], output);

    let lines = util::render(loopback_host(), &cfg).await;

    assert!(lines.is_empty(), "unexpected output: {lines:?}");
}

#[tokio::test]
async fn unresolvable_host_emits_one_failure_line() {
    let output = OutputOptions {
        show_failures: true,
        ..OutputOptions::default()
    };
    let cfg = util::config("missing{0}.test", 0, 1, &[80], output);

    let lines = util::render(StaticResolver::default(), &cfg).await;

    assert_eq!(
        lines,
        vec!["missing0.test: Socket error: HostNotFound, No such host is known"]
    );
}

#[tokio::test]
async fn output_keeps_host_order_when_later_hosts_resolve_first() {
    let mut resolver = StaticResolver::default();
    for index in 0..5u8 {
        let hostname = format!("n{index}.test");
        resolver = resolver
            .with_host(
                &hostname,
                HostEntry::new(hostname.as_str())
                    .with_address(IpAddr::V4(Ipv4Addr::new(127, 0, 0, index + 1))),
            )
            .with_delay(&hostname, Duration::from_millis(15 * (5 - index as u64)));
    }
    let cfg = util::config("n{0}.test", 0, 5, &[], OutputOptions::default());

    let outcomes = util::outcomes(resolver, &cfg).await;

    assert_eq!(outcomes.len(), cfg.host_count());
    assert_eq!(
        outcomes.iter().map(|o| o.target.index).collect::<Vec<_>>(),
        vec![0, 1, 2, 3, 4]
    );
}

#[tokio::test]
async fn every_resolved_host_has_one_result_per_port() {
    let closed_a = util::closed_port().await;
    let closed_b = util::closed_port().await;
    let resolver = loopback_host().with_host(
        "lo1.test",
        HostEntry::new("lo1.test").with_address(LOCALHOST),
    );
    let cfg = util::config("lo{0}.test", 0, 3, &[closed_a, closed_b], OutputOptions::default());

    let outcomes = util::outcomes(resolver, &cfg).await;

    assert_eq!(outcomes.len(), 3);
    for outcome in outcomes.iter().filter(|o| o.is_resolved()) {
        assert_eq!(outcome.port_results.len(), cfg.ports.len());
    }
    assert!(outcomes[2].port_results.is_empty());
}

#[tokio::test]
async fn drop_law_depends_only_on_require_ports() {
    let (_listener, open) = util::open_listener().await;
    let closed = util::closed_port().await;

    for require_ports in [false, true] {
        let output = OutputOptions {
            require_ports,
            ..OutputOptions::default()
        };
        let cfg = util::config("lo{0}.test", 0, 1, &[open, closed], output);

        let lines = util::render(loopback_host(), &cfg).await;

        assert_eq!(lines.is_empty(), require_ports, "require_ports = {require_ports}");
    }
}

#[tokio::test]
async fn repeated_scans_produce_identical_output() {
    let (_listener, open) = util::open_listener().await;
    let closed = util::closed_port().await;
    let output = OutputOptions {
        show_failures: true,
        ..OutputOptions::default()
    };
    let cfg = util::config("lo{0}.test", 0, 2, &[open, closed], output);

    let first = util::render(loopback_host(), &cfg).await;
    let second = util::render(loopback_host(), &cfg).await;

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[tokio::test]
async fn aliases_exclude_canonical_name() {
    let resolver = StaticResolver::default().with_host(
        "www0.test",
        HostEntry::new("server.test")
            .with_alias("www0.test")
            .with_alias("SERVER.test")
            .with_address(LOCALHOST),
    );
    let cfg = util::config("www{0}.test", 0, 1, &[], OutputOptions::default());

    let lines = util::render(resolver, &cfg).await;

    assert_eq!(lines, vec!["server.test (\"www0.test\"): 127.0.0.1"]);
}
