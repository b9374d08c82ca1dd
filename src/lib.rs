//! # PNS Client
//!
//! A client for the PNS binary control protocol spoken by networked
//! signal-tower lights:
//! - Run control (LED patterns + buzzer), clear, and status query
//! - Bit-exact frame encoding and reply validation
//! - Pluggable blocking transport with a TCP implementation
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Front-end                             │
//! │            (parse invocation, render status)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Protocol Client                           │
//! │              (send one frame, read one reply)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ Frame Codec │          │  Transport  │
//!   │  + Models   │          │    (TCP)    │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use pns_client::{Config, PnsClient};
//! use pns_client::protocol::{BuzzerMode, LedPattern, RunControlData};
//! use pns_client::transport::{TcpTransport, Transport};
//!
//! # fn main() -> pns_client::Result<()> {
//! let config = Config::default();
//! let mut transport = TcpTransport::connect(&config)?;
//!
//! let data = RunControlData::from_patterns(
//!     [LedPattern::On, LedPattern::Off, LedPattern::BlinkingSlow, LedPattern::Off, LedPattern::NoChange],
//!     BuzzerMode::Ring,
//! );
//! PnsClient::new(&mut transport).run_control(&data)?;
//!
//! transport.close()?;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod transport;
pub mod client;
pub mod frontend;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{PnsError, Result};
pub use config::Config;
pub use client::PnsClient;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the PNS client
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
