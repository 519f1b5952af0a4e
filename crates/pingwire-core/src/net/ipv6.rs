use crate::error::{Error, Result};
use crate::types::{EchoId, Sequence};
use pingwire_packet::icmpv6::echo::EchoPacket;
use pingwire_packet::icmpv6::{IcmpCode, IcmpPacket, IcmpType};
use tracing::instrument;

/// Build an `ICMPv6` echo request into `buf`, returning the packet length.
///
/// The checksum is left zero; it covers a pseudo header of source and
/// destination addresses which only the kernel knows, so the kernel fills it.
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
    Ok(packet_size)
}

/// Parse an `ICMPv6` echo reply, copying its payload into `out`.
///
/// `IPv6` sockets never deliver the IP header, raw or otherwise.
#[instrument(skip(buf, out), level = "trace")]
pub fn parse_echo_reply(buf: &[u8], out: &mut [u8]) -> Result<usize> {
    let icmp = IcmpPacket::new_view(buf)?;
    match icmp.get_icmp_type() {
        IcmpType::EchoReply => {
            let echo = EchoPacket::new_view(buf)?;
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
