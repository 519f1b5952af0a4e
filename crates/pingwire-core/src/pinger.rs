use crate::config::{defaults, PrivilegeMode};
use crate::constants::{MAX_ATTEMPT_WAIT, MAX_PACKET_SIZE};
use crate::error::{Error, Result};
use crate::net;
use crate::net::platform::SocketImpl;
use crate::net::socket::Socket;
use crate::types::{EchoId, PayloadPattern, PayloadSize, Sequence};
use crate::Builder;
use std::net::{IpAddr, SocketAddr};
use std::time::{Duration, Instant};
use tracing::instrument;

/// The outcome of a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PingOutcome {
    /// A reply was received; carries the round trip time.
    Reply(Duration),
    /// The timeout budget was exhausted with no reply.
    ///
    /// This is a successful outcome, distinct from every error.
    TimedOut,
}

impl PingOutcome {
    /// The round trip time, if a reply was received.
    #[must_use]
    pub const fn rtt(&self) -> Option<Duration> {
        match self {
            Self::Reply(rtt) => Some(*rtt),
            Self::TimedOut => None,
        }
    }
}

/// Probe a host with ICMP echo requests and report round trip latency.
///
/// Each call to [`Pinger::ping`] opens, uses and shuts down its own socket,
/// so concurrent calls are independent of one another.
///
/// # Example
///
/// Probe loopback with a two second budget:
///
/// ```no_run
/// # fn main() -> anyhow::Result<()> {
/// use pingwire_core::{PingOutcome, Pinger};
/// use std::time::Duration;
///
/// match Pinger::default().ping("127.0.0.1", Duration::from_millis(2000))? {
///     PingOutcome::Reply(rtt) => println!("reply in {}ms", rtt.as_millis()),
///     PingOutcome::TimedOut => println!("no reply"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Pinger {
    pub(crate) identifier: EchoId,
    pub(crate) payload_size: PayloadSize,
    pub(crate) payload_pattern: PayloadPattern,
    pub(crate) privilege_mode: PrivilegeMode,
}

impl Default for Pinger {
    fn default() -> Self {
        Self {
            identifier: EchoId(defaults::DEFAULT_ECHO_IDENTIFIER),
            payload_size: PayloadSize(defaults::DEFAULT_PAYLOAD_SIZE),
            payload_pattern: PayloadPattern(defaults::DEFAULT_PAYLOAD_PATTERN),
            privilege_mode: defaults::DEFAULT_PRIVILEGE_MODE,
        }
    }
}

impl Pinger {
    /// Create a [`Builder`] for a customised `Pinger`.
    #[must_use]
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Probe `addr` until a reply arrives or `timeout` is exhausted.
    ///
    /// Sends an echo request at most once per second, waiting out the
    /// remainder of each second for a reply, so a single dropped packet does
    /// not spend the whole budget. The first successful read completes the
    /// probe and the elapsed time since the first send is reported; replies
    /// are not correlated against the request identifier or sequence.
    ///
    /// Probing an unresponsive address returns [`PingOutcome::TimedOut`]
    /// after approximately `timeout` has elapsed; this is not an error. A
    /// zero `timeout` returns [`PingOutcome::TimedOut`] without sending
    /// anything.
    #[instrument(skip(self), level = "trace")]
    pub fn ping(&self, addr: &str, timeout: Duration) -> Result<PingOutcome> {
        self.ping_with::<SocketImpl>(addr, timeout)
    }

    fn ping_with<S: Socket>(&self, addr: &str, timeout: Duration) -> Result<PingOutcome> {
        let dest = addr
            .parse::<IpAddr>()
            .map_err(|_| Error::InvalidAddress(String::from(addr)))?;
        tracing::debug!(?dest, ?timeout);
        let mut socket = net::open_echo_socket::<S>(dest, self.privilege_mode)?;
        let outcome = self.ping_loop(&mut socket, dest, timeout);
        let _ = socket.shutdown();
        outcome
    }

    #[instrument(skip(self, socket), level = "trace")]
    fn ping_loop<S: Socket>(
        &self,
        socket: &mut S,
        dest: IpAddr,
        timeout: Duration,
    ) -> Result<PingOutcome> {
        let start = Instant::now();
        let payload = vec![self.payload_pattern.0; usize::from(self.payload_size.0)];
        let mut send_buf = [0_u8; MAX_PACKET_SIZE];
        let mut recv_buf = [0_u8; MAX_PACKET_SIZE];
        let mut sequence = Sequence(0);
        let mut remaining = timeout;
        while remaining > Duration::ZERO {
            sequence += Sequence(1);
            let wait = remaining.min(MAX_ATTEMPT_WAIT);
            remaining -= wait;
            socket.set_read_timeout(Some(wait))?;
            let packet_size = match dest {
                IpAddr::V4(_) => {
                    net::ipv4::make_echo_request(&mut send_buf, self.identifier, sequence, &payload)
                }
                IpAddr::V6(_) => {
                    net::ipv6::make_echo_request(&mut send_buf, self.identifier, sequence, &payload)
                }
            }?;
            socket.send_to(&send_buf[..packet_size], SocketAddr::new(dest, 0))?;
            match socket.recv_from(&mut recv_buf) {
                Ok(_) => return Ok(PingOutcome::Reply(start.elapsed())),
                Err(err) if err.is_timeout() => {}
                Err(err) => return Err(Error::IoError(err)),
            }
        }
        Ok(PingOutcome::TimedOut)
    }
}
