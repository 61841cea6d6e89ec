//! Validated configuration handed from the command line to the core.

use crate::network::range::IndexRange;
use crate::network::target::HostTarget;
use crate::network::template::HostnameTemplate;

pub const DEFAULT_LIST_SEPARATOR: &str = ",";

/// Controls which hosts produce output and which fields are printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOptions {
    /// Hosts that do not accept every requested port are not reported.
    pub require_ports: bool,
    /// Also report failed lookups and failed connection attempts.
    pub show_failures: bool,
    pub omit_aliases: bool,
    pub omit_addresses: bool,
    pub omit_ports: bool,
    /// Separator used to split port lists on input and join lists on output.
    pub list_separator: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            require_ports: false,
            show_failures: false,
            omit_aliases: false,
            omit_addresses: false,
            omit_ports: false,
            list_separator: DEFAULT_LIST_SEPARATOR.to_string(),
        }
    }
}

impl OutputOptions {
    /// Trimmed separator followed by a single space, e.g. `", "`.
    pub fn list_joiner(&self) -> String {
        format!("{} ", self.list_separator.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub template: HostnameTemplate,
    pub range: IndexRange,
    /// Ports to probe on every resolved host, in request order and without duplicates.
    pub ports: Vec<u16>,
    pub output: OutputOptions,
}

impl ScanConfig {
    pub fn new(
        template: HostnameTemplate,
        range: IndexRange,
        ports: impl IntoIterator<Item = u16>,
        output: OutputOptions,
    ) -> Self {
        let mut unique: Vec<u16> = Vec::new();
        for port in ports {
            if !unique.contains(&port) {
                unique.push(port);
            }
        }

        Self {
            template,
            range,
            ports: unique,
            output,
        }
    }

    pub fn targets(&self) -> impl Iterator<Item = HostTarget> + '_ {
        self.template.targets(self.range)
    }

    pub fn host_count(&self) -> usize {
        self.range.len()
    }
}
