//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! ### Request (Frame) Format
//! ```text
//! ┌──────────┬────────┬─────────┬──────────┬──────────────────┐
//! │ "AB" (2) │ Cmd (1)│ Pad (1) │ Len (2)  │     Payload      │
//! └──────────┴────────┴─────────┴──────────┴──────────────────┘
//! ```
//!
//! ### Payload by Command Type
//! - RUN CONTROL: red, amber, green, blue, white, buzzer (6 bytes)
//! - CLEAR:       empty
//! - GET DATA:    empty
//!
//! ### Response Format
//! ```text
//! ┌──────────┬─────────────────────────────┐
//! │Status(1) │  Status body (GET DATA)     │
//! └──────────┴─────────────────────────────┘
//! ```

use std::io::Write;

use bytes::{BufMut, BytesMut};

use crate::error::{PnsError, Result};
use super::{CommandId, ReplyValidation, ResponseStatus, PRODUCT_ID};

/// Header size: 2 bytes product id + 1 byte command + 1 byte pad + 2 bytes length
pub const HEADER_SIZE: usize = 6;

/// Maximum payload size (DataLength is a 16-bit field)
pub const MAX_PAYLOAD_SIZE: usize = u16::MAX as usize;

/// Value of the reserved byte after the command id
const RESERVED: u8 = 0x00;

/// Parsed request frame header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub command_id: CommandId,
    pub data_length: u16,
}

// =============================================================================
// Frame Encoding/Decoding
// =============================================================================

/// Encode a command frame to bytes
///
/// Format: "AB" (2) + command_id (1) + 0x00 (1) + payload_len (2, BE) + payload
///
/// # Panics
///
/// Panics if `payload` is longer than `MAX_PAYLOAD_SIZE`.
pub fn encode_frame(command_id: CommandId, payload: &[u8]) -> Vec<u8> {
    assert!(
        payload.len() <= MAX_PAYLOAD_SIZE,
        "Payload too large: {} bytes (max {})",
        payload.len(),
        MAX_PAYLOAD_SIZE
    );

    let mut message = BytesMut::with_capacity(HEADER_SIZE + payload.len());
    message.put_slice(&PRODUCT_ID);
    message.put_u8(command_id.as_byte());
    message.put_u8(RESERVED);
    message.put_u16(payload.len() as u16);
    message.put_slice(payload);

    message.to_vec()
}

/// Decode a command frame from bytes
///
/// Returns the header and the payload slice it describes
pub fn decode_frame(bytes: &[u8]) -> Result<(FrameHeader, &[u8])> {
    if bytes.len() < HEADER_SIZE {
        return Err(PnsError::Protocol(format!(
            "Incomplete header: expected {} bytes, got {}",
            HEADER_SIZE,
            bytes.len()
        )));
    }

    if bytes[0..2] != PRODUCT_ID {
        return Err(PnsError::Protocol(format!(
            "Unknown product id: {:02x} {:02x}",
            bytes[0], bytes[1]
        )));
    }

    let command_id = CommandId::try_from(bytes[2])?;
    let data_length = u16::from_be_bytes([bytes[4], bytes[5]]);

    let total_len = HEADER_SIZE + data_length as usize;
    if bytes.len() < total_len {
        return Err(PnsError::Protocol(format!(
            "Incomplete payload: expected {} bytes, got {}",
            total_len,
            bytes.len()
        )));
    }

    let header = FrameHeader {
        command_id,
        data_length,
    };
    Ok((header, &bytes[HEADER_SIZE..total_len]))
}

// =============================================================================
// Response Validation
// =============================================================================

/// Validate the status byte of a reply
///
/// Only an explicit NAK fails. Returns the full reply unchanged so callers
/// can decode from it.
pub fn validate_response(reply: &[u8]) -> Result<&[u8]> {
    validate_response_with(reply, ReplyValidation::NakOnly)
}

/// Validate the status byte of a reply with the given strictness
pub fn validate_response_with(reply: &[u8], validation: ReplyValidation) -> Result<&[u8]> {
    let status = match reply.first() {
        Some(&byte) => byte,
        None => {
            return Err(PnsError::IncompleteResponse {
                expected: 1,
                actual: 0,
            })
        }
    };

    match (ResponseStatus::try_from(status), validation) {
        (Ok(ResponseStatus::Nak), _) => Err(PnsError::NegativeAcknowledge),
        (Ok(ResponseStatus::Ack), _) => Ok(reply),
        (Err(e), ReplyValidation::RequireAck) => Err(e),
        (Err(_), ReplyValidation::NakOnly) => {
            tracing::debug!("Accepting reply with non-ACK status 0x{:02x}", status);
            Ok(reply)
        }
    }
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Write an encoded frame to a stream
pub fn write_frame<W: Write>(writer: &mut W, frame: &[u8]) -> Result<()> {
    writer.write_all(frame)?;
    writer.flush()?;
    Ok(())
}
