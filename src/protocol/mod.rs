//! Protocol Module
//!
//! Defines the PNS wire protocol spoken by the signal tower.
//!
//! ## Protocol Format
//!
//! ### Request Format
//! ```text
//! ┌──────────┬────────┬─────────┬──────────┬──────────────────┐
//! │ "AB" (2) │ Cmd (1)│ Pad (1) │ Len (2)  │     Payload      │
//! └──────────┴────────┴─────────┴──────────┴──────────────────┘
//! ```
//!
//! ### Commands
//! - 'S' (0x53): RUN CONTROL - Payload: 5 LED patterns + buzzer mode
//! - 'C' (0x43): CLEAR       - Payload: empty
//! - 'G' (0x47): GET DATA    - Payload: empty
//!
//! ### Response Format
//! ```text
//! ┌──────────┬─────────────────────────────┐
//! │Status(1) │  LED x5 + buzzer (GET DATA) │
//! └──────────┴─────────────────────────────┘
//! ```
//!
//! ### Status Codes
//! - 0x06: ACK
//! - 0x15: NAK

mod command;
mod response;
mod codec;

pub use command::{
    BuzzerMode, CommandId, LedColor, LedPattern, RunControlData, PRODUCT_ID,
    RUN_CONTROL_DATA_SIZE,
};
pub use response::{
    ReplyValidation, ResponseStatus, StatusData, StatusLayout, ACK, NAK, STATUS_DATA_SIZE,
};
pub use codec::{
    decode_frame, encode_frame, validate_response, validate_response_with, write_frame,
    FrameHeader, HEADER_SIZE, MAX_PAYLOAD_SIZE,
};
