use std::fmt::{Display, Formatter};
use std::io;
use std::net::SocketAddr;
use thiserror::Error;

/// A pingwire error result.
pub type Result<T> = std::result::Result<T, Error>;

/// A pingwire error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid IP address: {0}")]
    InvalidAddress(String),
    #[error("invalid packet size: {0}")]
    InvalidPacketSize(usize),
    #[error("invalid packet: {0}")]
    PacketError(#[from] pingwire_packet::error::Error),
    #[error("unexpected ICMP message type: {0}")]
    UnexpectedIcmpType(u8),
    #[error("insufficient buffer capacity")]
    InsufficientCapacity,
    #[error("missing address from socket call")]
    MissingAddr,
    #[error("IO error: {0}")]
    IoError(#[from] IoError),
}

/// Custom IO error result.
pub type IoResult<T> = std::result::Result<T, IoError>;

/// Custom IO error.
#[derive(Error, Debug)]
pub enum IoError {
    #[error("Sendto error for {1}: {0}")]
    SendTo(io::Error, SocketAddr),
    #[error("Failed to {0}: {1}")]
    Other(io::Error, IoOperation),
}

impl IoError {
    /// Get the underlying `io::ErrorKind`.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::SendTo(e, _) | Self::Other(e, _) => e.kind(),
        }
    }

    /// Whether this error was caused by a read deadline elapsing.
    ///
    /// `SO_RCVTIMEO` surfaces as `WouldBlock` on unix and `TimedOut` on
    /// windows.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self.kind(),
            io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
        )
    }
}

/// Io operation.
#[derive(Debug)]
pub enum IoOperation {
    NewSocket,
    SetReadTimeout,
    RecvFrom,
    Shutdown,
}

impl Display for IoOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NewSocket => write!(f, "create new socket"),
            Self::SetReadTimeout => write!(f, "set read timeout"),
            Self::RecvFrom => write!(f, "recv from"),
            Self::Shutdown => write!(f, "shutdown"),
        }
    }
}
