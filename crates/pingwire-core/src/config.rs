use crate::types::EchoId;
use std::fmt::{Display, Formatter};
use std::net::IpAddr;

/// Default values for configuration.
pub mod defaults {
    use crate::PrivilegeMode;

    /// The default value for `identifier`.
    ///
    /// The identifier is deliberately configurable so that unrelated sessions
    /// sharing a raw socket at the OS level do not collide; this default is
    /// the historical sentinel.
    pub const DEFAULT_ECHO_IDENTIFIER: u16 = 0x0dbb;

    /// The default value for `payload-size`.
    pub const DEFAULT_PAYLOAD_SIZE: u16 = 32;

    /// The default value for `payload-pattern`.
    pub const DEFAULT_PAYLOAD_PATTERN: u8 = 0;

    /// The default value for `privilege-mode`.
    pub const DEFAULT_PRIVILEGE_MODE: PrivilegeMode = PrivilegeMode::Unprivileged;
}

/// The privilege mode.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrivilegeMode {
    /// Privileged mode, using a `SOCK_RAW` socket.
    ///
    /// This requires the `CAP_NET_RAW` capability on Linux. Received `IPv4`
    /// datagrams carry the IP header.
    Privileged,
    /// Unprivileged mode, using a `SOCK_DGRAM` socket.
    Unprivileged,
}

impl PrivilegeMode {
    #[must_use]
    pub const fn is_unprivileged(self) -> bool {
        match self {
            Self::Privileged => false,
            Self::Unprivileged => true,
        }
    }
}

impl Display for PrivilegeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Privileged => write!(f, "privileged"),
            Self::Unprivileged => write!(f, "unprivileged"),
        }
    }
}

/// The IP address family.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AddressFamily {
    /// Internet Protocol v4.
    Ipv4,
    /// Internet Protocol v6.
    Ipv6,
}

impl From<IpAddr> for AddressFamily {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => Self::Ipv4,
            IpAddr::V6(_) => Self::Ipv6,
        }
    }
}

impl Display for AddressFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ipv4 => write!(f, "v4"),
            Self::Ipv6 => write!(f, "v6"),
        }
    }
}

/// Configuration for an echo tunnel session.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TunnelConfig {
    /// The address family of the wrapped socket.
    pub family: AddressFamily,
    /// The privilege mode the wrapped socket was opened with.
    pub privilege_mode: PrivilegeMode,
    /// The echo identifier stamped on every outgoing request.
    pub identifier: EchoId,
}

impl TunnelConfig {
    /// Create a config for the given family with default mode and identifier.
    #[must_use]
    pub const fn new(family: AddressFamily) -> Self {
        Self {
            family,
            privilege_mode: defaults::DEFAULT_PRIVILEGE_MODE,
            identifier: EchoId(defaults::DEFAULT_ECHO_IDENTIFIER),
        }
    }
}
