//! Error taxonomy shared by the resolver, the prober and the configuration layer.

use std::fmt;
use std::io;

use thiserror::Error;

/// Symbolic socket error codes rendered in result lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocketErrorCode {
    HostNotFound,
    NoData,
    TryAgain,
    TimedOut,
    ConnectionRefused,
    ConnectionReset,
    HostUnreachable,
    NetworkUnreachable,
    AddressNotAvailable,
    AccessDenied,
    OperationAborted,
    SocketError,
}

impl SocketErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocketErrorCode::HostNotFound => "HostNotFound",
            SocketErrorCode::NoData => "NoData",
            SocketErrorCode::TryAgain => "TryAgain",
            SocketErrorCode::TimedOut => "TimedOut",
            SocketErrorCode::ConnectionRefused => "ConnectionRefused",
            SocketErrorCode::ConnectionReset => "ConnectionReset",
            SocketErrorCode::HostUnreachable => "HostUnreachable",
            SocketErrorCode::NetworkUnreachable => "NetworkUnreachable",
            SocketErrorCode::AddressNotAvailable => "AddressNotAvailable",
            SocketErrorCode::AccessDenied => "AccessDenied",
            SocketErrorCode::OperationAborted => "OperationAborted",
            SocketErrorCode::SocketError => "SocketError",
        }
    }
}

impl fmt::Display for SocketErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<io::ErrorKind> for SocketErrorCode {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => SocketErrorCode::HostNotFound,
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => SocketErrorCode::TimedOut,
            io::ErrorKind::ConnectionRefused => SocketErrorCode::ConnectionRefused,
            io::ErrorKind::ConnectionReset | io::ErrorKind::ConnectionAborted => {
                SocketErrorCode::ConnectionReset
            }
            io::ErrorKind::HostUnreachable => SocketErrorCode::HostUnreachable,
            io::ErrorKind::NetworkUnreachable | io::ErrorKind::NetworkDown => {
                SocketErrorCode::NetworkUnreachable
            }
            io::ErrorKind::AddrNotAvailable | io::ErrorKind::InvalidInput => {
                SocketErrorCode::AddressNotAvailable
            }
            io::ErrorKind::PermissionDenied => SocketErrorCode::AccessDenied,
            io::ErrorKind::Interrupted => SocketErrorCode::OperationAborted,
            _ => SocketErrorCode::SocketError,
        }
    }
}

/// A DNS lookup for one hostname failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}, {message}")]
pub struct ResolutionError {
    pub code: SocketErrorCode,
    pub message: String,
}

impl ResolutionError {
    pub fn new(code: SocketErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn aborted() -> Self {
        Self::new(SocketErrorCode::OperationAborted, "name resolution was cancelled")
    }
}

impl From<io::Error> for ResolutionError {
    fn from(err: io::Error) -> Self {
        Self::new(err.kind().into(), err.to_string())
    }
}

/// A TCP connect attempt against one port failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct ConnectionError {
    pub code: SocketErrorCode,
    pub message: String,
}

impl ConnectionError {
    pub fn new(code: SocketErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn aborted() -> Self {
        Self::new(SocketErrorCode::OperationAborted, "connection attempt was cancelled")
    }
}

impl From<io::Error> for ConnectionError {
    fn from(err: io::Error) -> Self {
        Self::new(err.kind().into(), err.to_string())
    }
}

/// The hostname template could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template '{0}' has no '{{0}}' placeholder")]
    MissingPlaceholder(String),
    #[error("template '{0}' has more than one placeholder")]
    MultiplePlaceholders(String),
    #[error("placeholder '{{{0}}}' must refer to argument 0")]
    InvalidArgumentIndex(String),
    #[error("unsupported format specifier '{0}'")]
    UnsupportedSpecifier(String),
    #[error("unbalanced brace at offset {0}")]
    UnbalancedBrace(usize),
}

/// Configuration rejected before any probing starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("upper bound {upper} is less than lower bound {lower}")]
    UpperBelowLower { lower: u32, upper: u32 },
    #[error(transparent)]
    Template(#[from] TemplateError),
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
