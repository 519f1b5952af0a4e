use crate::config::{AddressFamily, TunnelConfig};
use crate::constants::MAX_DATAGRAM_SIZE;
use crate::error::{Error, Result};
use crate::net;
use crate::net::socket::Socket;
use crate::types::Sequence;
use pingwire_packet::icmpv4::echo::EchoPacket;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::instrument;

/// A datagram channel carried over ICMP echo.
///
/// Payloads written with [`EchoTunnel::send_to`] are wrapped in ICMP Echo
/// Request packets and reads with [`EchoTunnel::recv_from`] unwrap ICMP Echo
/// Replies back into payload bytes, so an ICMP socket can stand in for an
/// ordinary packet-oriented connection without exposing ICMP framing to the
/// caller.
///
/// The tunnel owns the wrapped socket; releasing it is the caller's
/// responsibility, via [`EchoTunnel::into_inner`] and [`Socket::shutdown`] or
/// by dropping the tunnel. A tunnel is not safe for concurrent use without
/// external synchronisation.
pub struct EchoTunnel<S> {
    socket: S,
    config: TunnelConfig,
    sequence: Sequence,
    recv_buf: Box<[u8]>,
}

impl<S: Socket> EchoTunnel<S> {
    /// Wrap an open ICMP socket.
    #[must_use]
    pub fn new(socket: S, config: TunnelConfig) -> Self {
        Self {
            socket,
            config,
            sequence: Sequence(0),
            recv_buf: vec![0_u8; MAX_DATAGRAM_SIZE].into_boxed_slice(),
        }
    }

    /// Send `payload` to `dest` wrapped in an ICMP Echo Request.
    ///
    /// The session sequence number increments on every send, across
    /// destination changes, and is never reset; it wraps at `u16::MAX`.
    /// Returns the underlying socket write result.
    #[instrument(skip(self, payload), level = "trace")]
    pub fn send_to(&mut self, payload: &[u8], dest: IpAddr) -> Result<usize> {
        self.sequence = self.sequence.next();
        // the echo header is the same size for both families
        let mut buf = vec![0_u8; EchoPacket::minimum_packet_size() + payload.len()];
        let packet_size = match self.config.family {
            AddressFamily::Ipv4 => {
                net::ipv4::make_echo_request(&mut buf, self.config.identifier, self.sequence, payload)
            }
            AddressFamily::Ipv6 => {
                net::ipv6::make_echo_request(&mut buf, self.config.identifier, self.sequence, payload)
            }
        }?;
        Ok(self
            .socket
            .send_to(&buf[..packet_size], SocketAddr::new(dest, 0))?)
    }

    /// Receive one ICMP Echo Reply, copying its payload into `buf`.
    ///
    /// Returns the payload length and the reply source address. Read failures
    /// propagate unchanged, an elapsed read deadline included; there is no
    /// retry here. Receiving any ICMP message other than an Echo Reply fails
    /// with [`Error::UnexpectedIcmpType`].
    #[instrument(skip(self, buf), level = "trace")]
    pub fn recv_from(&mut self, buf: &mut [u8]) -> Result<(usize, SocketAddr)> {
        let (bytes_read, addr) = self.socket.recv_from(&mut self.recv_buf)?;
        let addr = addr.ok_or(Error::MissingAddr)?;
        let len = match self.config.family {
            AddressFamily::Ipv4 => net::ipv4::parse_echo_reply(
                &self.recv_buf[..bytes_read],
                self.config.privilege_mode,
                buf,
            ),
            AddressFamily::Ipv6 => net::ipv6::parse_echo_reply(&self.recv_buf[..bytes_read], buf),
        }?;
        Ok((len, addr))
    }

    /// Set the deadline for subsequent reads, `None` to block indefinitely.
    pub fn set_read_timeout(&mut self, timeout: Option<Duration>) -> Result<()> {
        Ok(self.socket.set_read_timeout(timeout)?)
    }

    /// The current session sequence number.
    #[must_use]
    pub const fn sequence(&self) -> Sequence {
        self.sequence
    }

    /// Unwrap the tunnel, returning the socket.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.socket
    }
}
