use std::time::Duration;

/// The maximum size of probe packet we allow.
pub const MAX_PACKET_SIZE: usize = 1024;

/// The longest a single probe attempt will wait for a reply.
///
/// Capping each wait bounds worst-case unresponsiveness and allows several
/// send attempts within one overall timeout budget.
pub const MAX_ATTEMPT_WAIT: Duration = Duration::from_millis(1000);

/// The size of the tunnel receive staging buffer.
///
/// Large enough for a maximum length IP datagram.
pub const MAX_DATAGRAM_SIZE: usize = 65_535;
