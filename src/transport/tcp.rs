//! TCP Transport
//!
//! Blocking TCP connection to a signal tower.

use std::io::Read;
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::config::Config;
use crate::error::{PnsError, Result};
use crate::protocol::write_frame;
use super::Transport;

/// TCP connection to a device
#[derive(Debug)]
pub struct TcpTransport {
    /// Underlying stream, `None` once closed
    stream: Option<TcpStream>,

    /// Size of the buffer used for each reply read
    receive_buffer_size: usize,

    /// Peer address for logging
    peer_addr: String,
}

impl TcpTransport {
    /// Connect to the device named in the config
    ///
    /// Sets up timeouts and disables Nagle's algorithm
    pub fn connect(config: &Config) -> Result<Self> {
        check_buffer_size(config)?;

        let addr = resolve(&config.device_addr)?;
        tracing::debug!(
            addr = %addr,
            timeout_ms = config.connect_timeout_ms,
            "Connecting to device"
        );

        let connected = if config.connect_timeout_ms > 0 {
            TcpStream::connect_timeout(&addr, Duration::from_millis(config.connect_timeout_ms))
        } else {
            TcpStream::connect(addr)
        };
        let stream = connected.map_err(|e| {
            tracing::error!(addr = %addr, error = %e, "TCP connection failed");
            PnsError::Io(e)
        })?;

        Self::from_stream(stream, config)
    }

    /// Wrap an already connected stream
    pub fn from_stream(stream: TcpStream, config: &Config) -> Result<Self> {
        check_buffer_size(config)?;

        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Frames are tiny and latency-sensitive
        stream.set_nodelay(true)?;

        if config.read_timeout_ms > 0 {
            stream.set_read_timeout(Some(Duration::from_millis(config.read_timeout_ms)))?;
        }
        if config.write_timeout_ms > 0 {
            stream.set_write_timeout(Some(Duration::from_millis(config.write_timeout_ms)))?;
        }

        tracing::debug!("Connection established to {}", peer_addr);

        Ok(Self {
            stream: Some(stream),
            receive_buffer_size: config.receive_buffer_size,
            peer_addr,
        })
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }

    fn stream(&mut self) -> Result<&mut TcpStream> {
        self.stream.as_mut().ok_or(PnsError::NotConnected)
    }
}

impl Transport for TcpTransport {
    fn send(&mut self, frame: &[u8]) -> Result<()> {
        write_frame(self.stream()?, frame)
    }

    fn receive(&mut self) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; self.receive_buffer_size];
        let n = self.stream()?.read(&mut buf)?;
        if n == 0 {
            tracing::debug!("Device {} closed the connection", self.peer_addr);
            return Err(PnsError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "connection closed by device",
            )));
        }
        buf.truncate(n);
        Ok(buf)
    }

    fn close(&mut self) -> Result<()> {
        if let Some(stream) = self.stream.take() {
            tracing::debug!("Closing connection to {}", self.peer_addr);
            match stream.shutdown(Shutdown::Both) {
                Ok(()) => {}
                // Peer already gone, nothing left to release
                Err(e) if e.kind() == std::io::ErrorKind::NotConnected => {}
                Err(e) => return Err(PnsError::Io(e)),
            }
        }
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.stream.is_some()
    }
}

/// Resolve a host:port string to the first socket address
fn resolve(addr: &str) -> Result<SocketAddr> {
    addr.to_socket_addrs()
        .map_err(|e| PnsError::Config(format!("invalid device address '{}': {}", addr, e)))?
        .next()
        .ok_or_else(|| PnsError::Config(format!("device address '{}' did not resolve", addr)))
}

fn check_buffer_size(config: &Config) -> Result<()> {
    if config.receive_buffer_size == 0 {
        return Err(PnsError::Config(
            "receive buffer size must be non-zero".to_string(),
        ));
    }
    Ok(())
}
