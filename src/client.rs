//! Protocol Client
//!
//! One public entry point per command kind. Each call is a strict
//! send-then-receive round trip over a borrowed transport:
//!
//! ```text
//!   build frame ──► transport.send ──► transport.receive ──► validate ──► decode
//! ```
//!
//! The client never opens, retries or closes the connection.

use crate::config::Config;
use crate::error::Result;
use crate::protocol::{
    encode_frame, validate_response_with, CommandId, ReplyValidation, RunControlData,
    StatusData, StatusLayout,
};
use crate::transport::Transport;

/// PNS client bound to an open transport
pub struct PnsClient<'a, T: Transport + ?Sized> {
    /// Connection owned by the caller
    transport: &'a mut T,

    /// Strictness of the reply status check
    validation: ReplyValidation,

    /// Position of the status body in GetData replies
    status_layout: StatusLayout,
}

impl<'a, T: Transport + ?Sized> PnsClient<'a, T> {
    /// Create a client with default protocol options
    pub fn new(transport: &'a mut T) -> Self {
        Self {
            transport,
            validation: ReplyValidation::default(),
            status_layout: StatusLayout::default(),
        }
    }

    /// Create a client using the protocol options from a config
    pub fn from_config(transport: &'a mut T, config: &Config) -> Self {
        Self::new(transport)
            .with_validation(config.reply_validation)
            .with_status_layout(config.status_layout)
    }

    /// Set the reply validation mode
    pub fn with_validation(mut self, validation: ReplyValidation) -> Self {
        self.validation = validation;
        self
    }

    /// Set the status body layout
    pub fn with_status_layout(mut self, layout: StatusLayout) -> Self {
        self.status_layout = layout;
        self
    }

    /// Send the run control command
    ///
    /// Drives each LED unit and the buzzer with the given patterns.
    pub fn run_control(&mut self, data: &RunControlData) -> Result<()> {
        self.round_trip(CommandId::RunControl, &data.encode())?;
        Ok(())
    }

    /// Send the clear command
    ///
    /// Turns off every LED unit and stops the buzzer.
    pub fn clear(&mut self) -> Result<()> {
        self.round_trip(CommandId::Clear, &[])?;
        Ok(())
    }

    /// Send the status acquisition command
    pub fn get_data(&mut self) -> Result<StatusData> {
        let reply = self.round_trip(CommandId::GetData, &[])?;
        let body = self.status_layout.body(&reply)?;
        let status = StatusData::from_bytes(body)?;

        tracing::debug!(
            led_pattern = ?status.led_pattern(),
            buzzer = status.buzzer(),
            "Decoded status"
        );
        Ok(status)
    }

    /// Send one frame, read one reply and validate it
    fn round_trip(&mut self, command_id: CommandId, payload: &[u8]) -> Result<Vec<u8>> {
        let frame = encode_frame(command_id, payload);
        tracing::debug!(
            command = %command_id.as_char(),
            data_length = payload.len(),
            "Sending frame"
        );
        tracing::trace!("Frame bytes: {:02x?}", frame);

        self.transport.send(&frame)?;
        let reply = self.transport.receive()?;

        tracing::debug!(
            command = %command_id.as_char(),
            reply_len = reply.len(),
            "Received reply"
        );
        tracing::trace!("Reply bytes: {:02x?}", reply);

        if let Err(e) = validate_response_with(&reply, self.validation) {
            tracing::warn!(command = %command_id.as_char(), "Device rejected command: {}", e);
            return Err(e);
        }

        Ok(reply)
    }
}
