use crate::config::PrivilegeMode;
use crate::error::{Error, Result};
use crate::types::{EchoId, Sequence};
use pingwire_packet::checksum::icmp_ipv4_checksum;
use pingwire_packet::icmpv4::echo::EchoPacket;
use pingwire_packet::icmpv4::{IcmpCode, IcmpPacket, IcmpType};
use pingwire_packet::ipv4::Ipv4Packet;
use tracing::instrument;

/// Build an `ICMPv4` echo request into `buf`, returning the packet length.
#[instrument(skip(buf, payload), level = "trace")]
pub fn make_echo_request(
    buf: &mut [u8],
    identifier: EchoId,
    sequence: Sequence,
    payload: &[u8],
) -> Result<usize> {
    let packet_size = EchoPacket::minimum_packet_size() + payload.len();
    if packet_size > buf.len() {
        return Err(Error::InvalidPacketSize(packet_size));
    }
    let mut echo = EchoPacket::new(&mut buf[..packet_size])?;
    echo.set_icmp_type(IcmpType::EchoRequest);
    echo.set_icmp_code(IcmpCode(0));
    echo.set_identifier(identifier.0);
    echo.set_sequence(sequence.0);
    echo.set_payload(payload);
    echo.set_checksum(icmp_ipv4_checksum(echo.packet()));
    Ok(packet_size)
}

/// Parse an `ICMPv4` echo reply, copying its payload into `out`.
///
/// Raw sockets deliver the IP header ahead of the ICMP message; in privileged
/// mode it is stepped over first.
#[instrument(skip(buf, out), level = "trace")]
pub fn parse_echo_reply(
    buf: &[u8],
    privilege_mode: PrivilegeMode,
    out: &mut [u8],
) -> Result<usize> {
    let icmp_bytes = match privilege_mode {
        PrivilegeMode::Privileged => {
            let ipv4 = Ipv4Packet::new_view(buf)?;
            // a truncated header falls through to the ICMP length check below
            &buf[ipv4.header_bytes().min(buf.len())..]
        }
        PrivilegeMode::Unprivileged => buf,
    };
    let icmp = IcmpPacket::new_view(icmp_bytes)?;
    match icmp.get_icmp_type() {
        IcmpType::EchoReply => {
            let echo = EchoPacket::new_view(icmp_bytes)?;
            let payload = echo.payload();
            if payload.len() > out.len() {
                return Err(Error::InsufficientCapacity);
            }
            out[..payload.len()].copy_from_slice(payload);
            Ok(payload.len())
        }
        icmp_type => Err(Error::UnexpectedIcmpType(icmp_type.id())),
    }
}
