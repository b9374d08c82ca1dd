//! Response definitions
//!
//! Represents replies from the device.

use crate::error::{PnsError, Result};
use super::command::{BuzzerMode, LedColor, LedPattern};

/// Normal response byte
pub const ACK: u8 = 0x06;

/// Abnormal response byte
pub const NAK: u8 = 0x15;

/// Size of the status body returned for GetData
pub const STATUS_DATA_SIZE: usize = 6;

/// Response status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ResponseStatus {
    Ack = ACK,
    Nak = NAK,
}

impl TryFrom<u8> for ResponseStatus {
    type Error = PnsError;

    fn try_from(byte: u8) -> Result<Self> {
        match byte {
            ACK => Ok(ResponseStatus::Ack),
            NAK => Ok(ResponseStatus::Nak),
            _ => Err(PnsError::UnexpectedStatus(byte)),
        }
    }
}

/// How strictly the leading status byte of a reply is checked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReplyValidation {
    /// Only an explicit NAK fails; any other byte is accepted
    #[default]
    NakOnly,

    /// The reply must start with ACK
    RequireAck,
}

/// Where the 6-byte status body sits inside a GetData reply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusLayout {
    /// Decode the first six bytes of the raw reply, status byte included
    #[default]
    RawReply,

    /// Decode the six bytes that follow the status byte
    AfterStatusByte,
}

impl StatusLayout {
    /// Offset of the status body within the reply
    pub fn offset(self) -> usize {
        match self {
            StatusLayout::RawReply => 0,
            StatusLayout::AfterStatusByte => 1,
        }
    }

    /// Slice the status body out of a validated reply
    pub fn body(self, reply: &[u8]) -> Result<&[u8]> {
        let start = self.offset();
        let end = start + STATUS_DATA_SIZE;
        if reply.len() < end {
            return Err(PnsError::IncompleteResponse {
                expected: end,
                actual: reply.len(),
            });
        }
        Ok(&reply[start..end])
    }
}

/// Status of the LED units and buzzer, as reported by GetData
///
/// A read-only view over the received bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusData {
    led_pattern: [u8; 5],
    buzzer: u8,
}

impl StatusData {
    /// Decode status data from a reply body
    ///
    /// Requires at least 6 bytes; extra bytes are ignored.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < STATUS_DATA_SIZE {
            return Err(PnsError::IncompleteResponse {
                expected: STATUS_DATA_SIZE,
                actual: data.len(),
            });
        }

        let mut led_pattern = [0u8; 5];
        led_pattern.copy_from_slice(&data[0..5]);

        Ok(Self {
            led_pattern,
            buzzer: data[5],
        })
    }

    /// LED patterns 1 to 5 (red, amber, green, blue, white)
    pub fn led_pattern(&self) -> [u8; 5] {
        self.led_pattern
    }

    /// Buzzer mode code
    pub fn buzzer(&self) -> u8 {
        self.buzzer
    }

    /// Raw pattern code for one color
    pub fn led(&self, color: LedColor) -> u8 {
        self.led_pattern[color.index()]
    }

    /// Named pattern for one color, if the code is a known one
    pub fn led_pattern_of(&self, color: LedColor) -> Option<LedPattern> {
        LedPattern::try_from(self.led(color)).ok()
    }

    /// Named buzzer mode, if the code is a known one
    pub fn buzzer_mode(&self) -> Option<BuzzerMode> {
        BuzzerMode::try_from(self.buzzer).ok()
    }
}
