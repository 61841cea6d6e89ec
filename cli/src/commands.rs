pub mod scan;

use clap::Parser;
use clap::error::ErrorKind;
use hostscan_common::config::{DEFAULT_LIST_SEPARATOR, OutputOptions, ScanConfig};
use hostscan_common::error::ConfigError;
use hostscan_common::network::range::IndexRange;
use hostscan_common::network::template::HostnameTemplate;
use tracing::warn;

/// Exit code for an option value that could not be parsed.
pub const EXIT_INVALID_VALUE: i32 = -1;
/// Exit code for an upper bound below the lower bound.
pub const EXIT_BOUNDS_REVERSED: i32 = -2;

#[derive(Parser, Debug)]
#[command(name = "hostscan", version)]
#[command(about = "Resolves a numbered range of hostnames and probes their TCP ports.")]
pub struct CommandLine {
    /// Format string for the hostnames to look up, e.g. "host{0}.example.com"
    #[arg(short = 'f', long = "format", value_name = "HOSTFORMAT")]
    pub format: HostnameTemplate,

    /// Lower inclusive integer bound to apply to the host format
    #[arg(short = 'l', long = "lower", value_name = "LOWER", default_value_t = 0)]
    pub lower: u32,

    /// Upper exclusive integer bound to apply to the host format
    #[arg(short = 'u', long = "upper", value_name = "UPPER", default_value_t = 255)]
    pub upper: u32,

    /// TCP ports to attempt a connection to, split on the list separator
    #[arg(short = 't', long = "tcp", value_name = "PORTS")]
    pub tcp: Option<String>,

    /// Treat hosts that do not listen on every specified port as failures
    #[arg(long = "tcp-reqd")]
    pub tcp_required: bool,

    /// Also include failed lookups and connection attempts in the output
    #[arg(long = "show-failures")]
    pub show_failures: bool,

    /// Omit host aliases from the output
    #[arg(long = "no-alias")]
    pub no_alias: bool,

    /// Omit the host address list from the output
    #[arg(long = "no-address")]
    pub no_address: bool,

    /// Omit the verified open TCP ports from the output
    #[arg(long = "no-port")]
    pub no_port: bool,

    /// Separator for the port list and for lists in the output
    #[arg(long = "list-separator", value_name = "SEP", default_value = DEFAULT_LIST_SEPARATOR)]
    pub list_separator: String,
}

impl CommandLine {
    /// Parses the process arguments, exiting on help, version or invalid input.
    pub fn parse_args() -> Self {
        match Self::try_parse() {
            Ok(commands) => commands,
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => err.exit(),
                _ => {
                    let _ = err.print();
                    std::process::exit(EXIT_INVALID_VALUE);
                }
            },
        }
    }

    pub fn to_config(&self) -> Result<ScanConfig, ConfigError> {
        let range = IndexRange::new(self.lower, self.upper)?;
        let ports = self
            .tcp
            .as_deref()
            .map(|raw| parse_ports(raw, &self.list_separator))
            .unwrap_or_default();

        let output = OutputOptions {
            require_ports: self.tcp_required,
            show_failures: self.show_failures,
            omit_aliases: self.no_alias,
            omit_addresses: self.no_address,
            omit_ports: self.no_port,
            list_separator: self.list_separator.clone(),
        };

        Ok(ScanConfig::new(self.format.clone(), range, ports, output))
    }
}

pub fn exit_code(err: &ConfigError) -> i32 {
    match err {
        ConfigError::UpperBelowLower { .. } => EXIT_BOUNDS_REVERSED,
        ConfigError::Template(_) => EXIT_INVALID_VALUE,
    }
}

/// Splits `raw` on `separator` into port numbers.
///
/// Entries that are not a port in `1..=65535` are reported and skipped.
pub fn parse_ports(raw: &str, separator: &str) -> Vec<u16> {
    let separator = match separator.trim() {
        "" => DEFAULT_LIST_SEPARATOR,
        trimmed => trimmed,
    };

    raw.split(separator)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| match entry.parse::<u32>() {
            Ok(0) => {
                warn!("Ignoring TCP port {entry}: below the minimum port number 1");
                None
            }
            Ok(port) => match u16::try_from(port) {
                Ok(port) => Some(port),
                Err(_) => {
                    warn!("Ignoring TCP port {entry}: above the maximum port number 65535");
                    None
                }
            },
            Err(_) => {
                warn!("Ignoring TCP port {entry}: not a non-negative integer");
                None
            }
        })
        .collect()
}
