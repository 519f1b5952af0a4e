//! Pingwire - an ICMP echo probing and datagram tunnelling library.
//!
//! This crate provides two independent facilities which share ICMP message
//! construction:
//!
//! - [`Pinger`] measures reachability and round trip latency to a host by
//!   sending ICMP Echo Requests and timing the first reply, retrying within a
//!   shrinking timeout budget.
//! - [`EchoTunnel`] wraps an ICMP socket so that arbitrary payload writes are
//!   carried inside Echo Requests and Echo Replies are unwrapped back into
//!   payload bytes, presenting a protocol agnostic datagram channel (useful
//!   for tunnelling or latency instrumented transports).
//!
//! Both operate on sockets opened by [`open_echo_socket`], which selects the
//! address family from the destination and the socket type from the
//! [`PrivilegeMode`]. Unprivileged `SOCK_DGRAM` ICMP sockets are used by
//! default; raw sockets require an elevated capability such as `CAP_NET_RAW`
//! on Linux.
//!
//! # Examples
//!
//! Probe loopback with a two second budget:
//!
//! ```no_run
//! # fn main() -> anyhow::Result<()> {
//! use pingwire_core::{PingOutcome, Pinger};
//! use std::time::Duration;
//!
//! match Pinger::default().ping("127.0.0.1", Duration::from_millis(2000))? {
//!     PingOutcome::Reply(rtt) => println!("reply in {}ms", rtt.as_millis()),
//!     PingOutcome::TimedOut => println!("no reply"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Exchange opaque datagrams over ICMP echo:
//!
//! ```no_run
//! # fn main() -> anyhow::Result<()> {
//! use pingwire_core::{
//!     open_echo_socket, AddressFamily, EchoTunnel, PrivilegeMode, SocketImpl, TunnelConfig,
//! };
//! use std::net::IpAddr;
//! use std::str::FromStr;
//!
//! let dest = IpAddr::from_str("1.1.1.1")?;
//! let socket = open_echo_socket::<SocketImpl>(dest, PrivilegeMode::Unprivileged)?;
//! let mut tunnel = EchoTunnel::new(socket, TunnelConfig::new(AddressFamily::from(dest)));
//! tunnel.send_to(b"hello", dest)?;
//! let mut buf = [0_u8; 1500];
//! let (n, from) = tunnel.recv_from(&mut buf)?;
//! println!("{n} bytes from {from}");
//! # Ok(())
//! # }
//! ```
#![warn(clippy::all, clippy::pedantic, clippy::nursery, rust_2018_idioms)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::option_if_let_else,
    clippy::missing_const_for_fn
)]
#![deny(unsafe_code)]

mod builder;
mod config;
mod constants;
mod error;
mod net;
mod pinger;
mod tunnel;
mod types;

pub use builder::Builder;
pub use config::{defaults, AddressFamily, PrivilegeMode, TunnelConfig};
pub use constants::{MAX_ATTEMPT_WAIT, MAX_PACKET_SIZE};
pub use error::{Error, IoError, IoOperation, Result};
pub use net::open_echo_socket;
pub use net::platform::SocketImpl;
pub use net::socket::Socket;
pub use pinger::{PingOutcome, Pinger};
pub use tunnel::EchoTunnel;
pub use types::{EchoId, PayloadPattern, PayloadSize, Sequence};
