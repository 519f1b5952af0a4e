use crate::error::{IoError, IoOperation, IoResult};
use crate::net::socket::Socket;
use itertools::Itertools;
use socket2::{Domain, Protocol, SockAddr, Type};
use std::io;
use std::net::{Shutdown, SocketAddr};
use std::time::Duration;
use tracing::instrument;

/// A network socket.
///
/// Sockets are blocking; read deadlines are enforced with `SO_RCVTIMEO`, so a
/// `recv_from` whose deadline elapses fails with a timeout-kind error (see
/// [`IoError::is_timeout`]).
pub struct SocketImpl {
    inner: socket2::Socket,
}

impl SocketImpl {
    fn new(domain: Domain, ty: Type, protocol: Protocol) -> IoResult<Self> {
        Ok(Self {
            inner: socket2::Socket::new(domain, ty, Some(protocol))
                .map_err(|err| IoError::Other(err, IoOperation::NewSocket))?,
        })
    }
}

impl Socket for SocketImpl {
    #[instrument(level = "trace")]
    fn new_icmp_dgram_socket_ipv4() -> IoResult<Self> {
        Self::new(Domain::IPV4, Type::DGRAM, Protocol::ICMPV4)
    }
    #[instrument(level = "trace")]
    fn new_icmp_dgram_socket_ipv6() -> IoResult<Self> {
        Self::new(Domain::IPV6, Type::DGRAM, Protocol::ICMPV6)
    }
    #[instrument(level = "trace")]
    fn new_icmp_raw_socket_ipv4() -> IoResult<Self> {
        Self::new(Domain::IPV4, Type::RAW, Protocol::ICMPV4)
    }
    #[instrument(level = "trace")]
    fn new_icmp_raw_socket_ipv6() -> IoResult<Self> {
        Self::new(Domain::IPV6, Type::RAW, Protocol::ICMPV6)
    }
    #[instrument(skip(self), level = "trace")]
    fn set_read_timeout(&mut self, timeout: Option<Duration>) -> IoResult<()> {
        self.inner
            .set_read_timeout(timeout)
            .map_err(|err| IoError::Other(err, IoOperation::SetReadTimeout))
    }
    #[instrument(skip(self, buf), level = "trace")]
    fn send_to(&mut self, buf: &[u8], addr: SocketAddr) -> IoResult<usize> {
        tracing::trace!(buf = format!("{:02x?}", buf.iter().format(" ")), ?addr);
        self.inner
            .send_to(buf, &SockAddr::from(addr))
            .map_err(|err| IoError::SendTo(err, addr))
    }
    #[instrument(skip(self, buf), level = "trace")]
    fn recv_from(&mut self, buf: &mut [u8]) -> IoResult<(usize, Option<SocketAddr>)> {
        let (bytes_read, addr) = self
            .inner
            .recv_from_into_buf(buf)
            .map_err(|err| IoError::Other(err, IoOperation::RecvFrom))?;
        tracing::trace!(
            buf = format!("{:02x?}", buf[..bytes_read].iter().format(" ")),
            bytes_read,
            ?addr
        );
        Ok((bytes_read, addr))
    }
    #[instrument(skip(self), level = "trace")]
    fn shutdown(&mut self) -> IoResult<()> {
        self.inner
            .shutdown(Shutdown::Both)
            .map_err(|err| IoError::Other(err, IoOperation::Shutdown))
    }
}

/// An extension trait to allow `recv_from` method which writes to a `&mut [u8]`.
///
/// This is required for `socket2::Socket` which [does not currently provide] this method.
///
/// [does not currently provide]: https://github.com/rust-lang/socket2/issues/223
trait RecvFrom {
    fn recv_from_into_buf(&self, buf: &mut [u8]) -> io::Result<(usize, Option<SocketAddr>)>;
}

impl RecvFrom for socket2::Socket {
    // Safety: the `recv` implementation promises not to write uninitialised
    // bytes to the `buf`fer, so this casting is safe.
    #![allow(unsafe_code)]
    fn recv_from_into_buf(&self, buf: &mut [u8]) -> io::Result<(usize, Option<SocketAddr>)> {
        let buf = unsafe {
            &mut *(std::ptr::from_mut::<[u8]>(buf) as *mut [std::mem::MaybeUninit<u8>])
        };
        self.recv_from(buf)
            .map(|(size, addr)| (size, addr.as_socket()))
    }
}
