use crate::config::{defaults, PrivilegeMode};
use crate::constants::MAX_PACKET_SIZE;
use crate::error::{Error, Result};
use crate::types::{EchoId, PayloadPattern, PayloadSize};
use crate::Pinger;
use pingwire_packet::icmpv4::echo::EchoPacket;

/// Build a [`Pinger`].
///
/// # Example
///
/// Build a pinger with a custom identifier and a 64 byte probe payload:
///
/// ```
/// # fn main() -> anyhow::Result<()> {
/// use pingwire_core::{Builder, EchoId, PayloadSize};
///
/// let pinger = Builder::new()
///     .identifier(EchoId(0x1234))
///     .payload_size(PayloadSize(64))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Builder {
    identifier: EchoId,
    payload_size: PayloadSize,
    payload_pattern: PayloadPattern,
    privilege_mode: PrivilegeMode,
}

impl Builder {
    /// Create a `Builder` with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            identifier: EchoId(defaults::DEFAULT_ECHO_IDENTIFIER),
            payload_size: PayloadSize(defaults::DEFAULT_PAYLOAD_SIZE),
            payload_pattern: PayloadPattern(defaults::DEFAULT_PAYLOAD_PATTERN),
            privilege_mode: defaults::DEFAULT_PRIVILEGE_MODE,
        }
    }

    /// Set the echo identifier stamped on every request.
    ///
    /// Concurrent unrelated sessions should use distinct identifiers so that
    /// their replies can be told apart at the OS level.
    #[must_use]
    pub fn identifier(mut self, identifier: EchoId) -> Self {
        self.identifier = identifier;
        self
    }

    /// Set the probe payload size.
    #[must_use]
    pub fn payload_size(mut self, payload_size: PayloadSize) -> Self {
        self.payload_size = payload_size;
        self
    }

    /// Set the probe payload fill byte.
    #[must_use]
    pub fn payload_pattern(mut self, payload_pattern: PayloadPattern) -> Self {
        self.payload_pattern = payload_pattern;
        self
    }

    /// Set the privilege mode.
    #[must_use]
    pub fn privilege_mode(mut self, privilege_mode: PrivilegeMode) -> Self {
        self.privilege_mode = privilege_mode;
        self
    }

    /// Build the [`Pinger`].
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidPacketSize`] if the configured payload does
    /// not fit the probe packet buffer.
    pub fn build(self) -> Result<Pinger> {
        // the echo header is the same size for both families
        let packet_size = EchoPacket::minimum_packet_size() + usize::from(self.payload_size.0);
        if packet_size > MAX_PACKET_SIZE {
            return Err(Error::InvalidPacketSize(packet_size));
        }
        Ok(Pinger {
            identifier: self.identifier,
            payload_size: self.payload_size,
            payload_pattern: self.payload_pattern,
            privilege_mode: self.privilege_mode,
        })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
