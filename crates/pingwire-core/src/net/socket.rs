use crate::error::IoResult as Result;
use std::net::SocketAddr;
use std::time::Duration;

/// A packet-oriented connection over an ICMP socket.
///
/// Implementations own the underlying OS socket descriptor; dropping the
/// value or calling [`Socket::shutdown`] releases it.
#[cfg_attr(test, mockall::automock)]
pub trait Socket
where
    Self: Sized,
{
    /// Create an unprivileged IPv4 socket for ICMP echo.
    fn new_icmp_dgram_socket_ipv4() -> Result<Self>;
    /// Create an unprivileged IPv6 socket for ICMP echo.
    fn new_icmp_dgram_socket_ipv6() -> Result<Self>;
    /// Create a raw IPv4 socket for ICMP echo.
    fn new_icmp_raw_socket_ipv4() -> Result<Self>;
    /// Create a raw IPv6 socket for ICMP echo.
    fn new_icmp_raw_socket_ipv6() -> Result<Self>;
    /// Set the deadline for subsequent reads, `None` to block indefinitely.
    fn set_read_timeout(&mut self, timeout: Option<Duration>) -> Result<()>;
    /// Send `buf` to `addr`, returning the number of bytes written.
    fn send_to(&mut self, buf: &[u8], addr: SocketAddr) -> Result<usize>;
    /// Receive a single datagram, blocking up to the configured read timeout.
    fn recv_from(&mut self, buf: &mut [u8]) -> Result<(usize, Option<SocketAddr>)>;
    fn shutdown(&mut self) -> Result<()>;
}
