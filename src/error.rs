//! Error types for the PNS client
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using PnsError
pub type Result<T> = std::result::Result<T, PnsError>;

/// Unified error type for PNS client operations
#[derive(Debug, Error)]
pub enum PnsError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transport is not connected")]
    NotConnected,

    // -------------------------------------------------------------------------
    // Reply Errors
    // -------------------------------------------------------------------------
    #[error("negative acknowledge")]
    NegativeAcknowledge,

    #[error("Incomplete response: expected at least {expected} bytes, got {actual}")]
    IncompleteResponse { expected: usize, actual: usize },

    #[error("Unexpected response status: 0x{0:02x}")]
    UnexpectedStatus(u8),

    // -------------------------------------------------------------------------
    // Frame / Model Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Invalid pattern code: {0}")]
    InvalidPattern(u8),

    // -------------------------------------------------------------------------
    // Front-end Errors
    // -------------------------------------------------------------------------
    #[error("Missing arguments: expected {expected} values, got {got}")]
    MissingArguments { expected: usize, got: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}
