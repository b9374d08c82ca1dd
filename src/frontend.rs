//! Front-end
//!
//! Turns command-line input into one of the three commands, runs it over a
//! transport and renders the result.

use crate::client::PnsClient;
use crate::config::Config;
use crate::error::{PnsError, Result};
use crate::protocol::{CommandId, LedColor, RunControlData, StatusData};
use crate::transport::Transport;

/// A single command invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    RunControl(RunControlData),
    Clear,
    GetData,
}

/// Result of a successful invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Device acknowledged a run control or clear command
    Acknowledged,

    /// Device returned its current status
    Status(StatusData),
}

/// Parse a command discriminant
///
/// Accepts the single characters `S`, `C` and `G`, and the aliases
/// `run`, `clear` and `get`.
pub fn parse_command(s: &str) -> Result<CommandId> {
    match s {
        "run" => Ok(CommandId::RunControl),
        "clear" => Ok(CommandId::Clear),
        "get" => Ok(CommandId::GetData),
        _ => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => CommandId::try_from(c),
                _ => Err(PnsError::InvalidCommand(format!("unknown command '{}'", s))),
            }
        }
    }
}

impl Invocation {
    /// Build an invocation from a command and its integer arguments
    ///
    /// Run control needs six values (red, amber, green, blue, white, buzzer);
    /// fewer is a `MissingArguments` error and nothing is sent.
    pub fn new(command_id: CommandId, values: &[u8]) -> Result<Self> {
        let expected = command_id.payload_len();
        if values.len() > expected {
            tracing::warn!(
                command = %command_id.as_char(),
                extra = values.len() - expected,
                "Ignoring extra arguments"
            );
        }

        match command_id {
            CommandId::RunControl => Ok(Invocation::RunControl(RunControlData::from_values(values)?)),
            CommandId::Clear => Ok(Invocation::Clear),
            CommandId::GetData => Ok(Invocation::GetData),
        }
    }

    /// Command this invocation sends
    pub fn command_id(&self) -> CommandId {
        match self {
            Invocation::RunControl(_) => CommandId::RunControl,
            Invocation::Clear => CommandId::Clear,
            Invocation::GetData => CommandId::GetData,
        }
    }
}

/// Run an invocation and close the transport afterwards
///
/// The transport is closed exactly once, whether the command succeeds or
/// fails. A command error takes precedence over a close error.
pub fn execute<T: Transport + ?Sized>(
    transport: &mut T,
    invocation: &Invocation,
    config: &Config,
) -> Result<Outcome> {
    let result = {
        let mut client = PnsClient::from_config(&mut *transport, config);
        match invocation {
            Invocation::RunControl(data) => client.run_control(data).map(|_| Outcome::Acknowledged),
            Invocation::Clear => client.clear().map(|_| Outcome::Acknowledged),
            Invocation::GetData => client.get_data().map(Outcome::Status),
        }
    };

    let closed = transport.close();
    let outcome = result?;
    closed?;
    Ok(outcome)
}

/// Render status data in the fixed report order
pub fn render_status(status: &StatusData) -> String {
    let mut out = String::from("Response data for status acquisition command\n");
    for color in LedColor::ALL {
        out.push_str(&format!("LED {} pattern :{}\n", color.name(), status.led(color)));
    }
    out.push_str(&format!("buzzer mode :{}\n", status.buzzer()));
    out
}
