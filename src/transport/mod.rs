//! Transport Module
//!
//! Byte-level link to the device.
//!
//! ## Architecture
//! - `Transport` trait: send one frame, receive one reply, close
//! - `TcpTransport`: blocking TCP socket with connect/read/write timeouts
//!
//! The protocol client only sees the trait, so it can be driven by an
//! in-memory transport in tests.

mod tcp;

pub use tcp::TcpTransport;

use crate::error::Result;

/// Blocking byte transport to a device
pub trait Transport {
    /// Write a complete frame
    fn send(&mut self, frame: &[u8]) -> Result<()>;

    /// Perform one read and return the bytes received
    fn receive(&mut self) -> Result<Vec<u8>>;

    /// Close the connection
    ///
    /// Subsequent `send()`/`receive()` calls fail with `NotConnected`.
    fn close(&mut self) -> Result<()>;

    /// Whether the connection is still open
    fn is_connected(&self) -> bool;
}
