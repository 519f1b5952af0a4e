use crate::config::PrivilegeMode;
use crate::error::Result;
use crate::net::socket::Socket;
use std::net::IpAddr;
use tracing::instrument;

pub(crate) mod ipv4;
pub(crate) mod ipv6;
pub mod platform;
pub mod socket;

/// Open a socket for ICMP echo to the given destination.
///
/// The address family is inferred from the destination and the socket type
/// from the privilege mode. The caller owns the returned socket and must
/// release it via [`Socket::shutdown`] (or by dropping it).
///
/// # Errors
///
/// Fails if the OS refuses to create the socket, for example when raw ICMP
/// sockets require an elevated capability the process does not hold.
#[instrument(level = "trace")]
pub fn open_echo_socket<S: Socket>(dest: IpAddr, privilege_mode: PrivilegeMode) -> Result<S> {
    Ok(match (dest, privilege_mode) {
        (IpAddr::V4(_), PrivilegeMode::Unprivileged) => S::new_icmp_dgram_socket_ipv4(),
        (IpAddr::V4(_), PrivilegeMode::Privileged) => S::new_icmp_raw_socket_ipv4(),
        (IpAddr::V6(_), PrivilegeMode::Unprivileged) => S::new_icmp_dgram_socket_ipv6(),
        (IpAddr::V6(_), PrivilegeMode::Privileged) => S::new_icmp_raw_socket_ipv6(),
    }?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::socket::tests::MTX;
    use crate::net::socket::MockSocket;
    use std::str::FromStr;

    #[test]
    fn test_open_ipv4_dgram() {
        let _m = MTX.lock();

        let ctx = MockSocket::new_icmp_dgram_socket_ipv4_context();
        ctx.expect().times(1).returning(|| Ok(MockSocket::new()));

        let dest = IpAddr::from_str("127.0.0.1").unwrap();
        open_echo_socket::<MockSocket>(dest, PrivilegeMode::Unprivileged).unwrap();
    }

    #[test]
    fn test_open_ipv4_raw() {
        let _m = MTX.lock();

        let ctx = MockSocket::new_icmp_raw_socket_ipv4_context();
        ctx.expect().times(1).returning(|| Ok(MockSocket::new()));

        let dest = IpAddr::from_str("10.0.0.1").unwrap();
        open_echo_socket::<MockSocket>(dest, PrivilegeMode::Privileged).unwrap();
    }

    #[test]
    fn test_open_ipv6_dgram() {
        let _m = MTX.lock();

        let ctx = MockSocket::new_icmp_dgram_socket_ipv6_context();
        ctx.expect().times(1).returning(|| Ok(MockSocket::new()));

        let dest = IpAddr::from_str("::1").unwrap();
        open_echo_socket::<MockSocket>(dest, PrivilegeMode::Unprivileged).unwrap();
    }

    #[test]
    fn test_open_ipv6_raw() {
        let _m = MTX.lock();

        let ctx = MockSocket::new_icmp_raw_socket_ipv6_context();
        ctx.expect().times(1).returning(|| Ok(MockSocket::new()));

        let dest = IpAddr::from_str("2a00:1450:4009:815::200e").unwrap();
        open_echo_socket::<MockSocket>(dest, PrivilegeMode::Privileged).unwrap();
    }

    #[test]
    fn test_open_socket_failure_surfaces() {
        let _m = MTX.lock();

        let ctx = MockSocket::new_icmp_dgram_socket_ipv4_context();
        ctx.expect().times(1).returning(|| {
            Err(crate::error::IoError::Other(
                std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                crate::error::IoOperation::NewSocket,
            ))
        });

        let dest = IpAddr::from_str("127.0.0.1").unwrap();
        let err = open_echo_socket::<MockSocket>(dest, PrivilegeMode::Unprivileged).unwrap_err();
        assert!(matches!(err, crate::error::Error::IoError(_)));
    }
}
