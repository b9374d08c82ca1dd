//! Configuration for the PNS client
//!
//! Centralized configuration with sensible defaults. The device address is
//! deployment configuration, not protocol state.

use crate::protocol::{ReplyValidation, StatusLayout};

/// Main configuration for a PNS client session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Device address (host:port)
    pub device_addr: String,

    /// Connect timeout (milliseconds)
    pub connect_timeout_ms: u64,

    /// Socket read timeout (milliseconds, 0 = block forever)
    pub read_timeout_ms: u64,

    /// Socket write timeout (milliseconds, 0 = block forever)
    pub write_timeout_ms: u64,

    /// Size of the buffer used for the single reply read
    pub receive_buffer_size: usize,

    // -------------------------------------------------------------------------
    // Protocol Configuration
    // -------------------------------------------------------------------------
    /// How strictly the reply status byte is checked
    pub reply_validation: ReplyValidation,

    /// Where the status body sits inside a GetData reply
    pub status_layout: StatusLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device_addr: "192.168.10.1:10000".to_string(),
            connect_timeout_ms: 5000,
            read_timeout_ms: 5000,
            write_timeout_ms: 5000,
            receive_buffer_size: 1024,
            reply_validation: ReplyValidation::default(),
            status_layout: StatusLayout::default(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the device address (host:port)
    pub fn device_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.device_addr = addr.into();
        self
    }

    /// Set the connect timeout (in milliseconds)
    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.config.connect_timeout_ms = ms;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    /// Set the reply buffer size (in bytes)
    pub fn receive_buffer_size(mut self, size: usize) -> Self {
        self.config.receive_buffer_size = size;
        self
    }

    /// Set the reply validation mode
    pub fn reply_validation(mut self, validation: ReplyValidation) -> Self {
        self.config.reply_validation = validation;
        self
    }

    /// Set the status body layout
    pub fn status_layout(mut self, layout: StatusLayout) -> Self {
        self.config.status_layout = layout;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
