//! PNS CLI Client
//!
//! Sends a single PNS command to a signal tower and prints the result.

use clap::Parser;
use pns_client::frontend::{self, Invocation, Outcome};
use pns_client::protocol::{CommandId, ReplyValidation, StatusLayout};
use pns_client::transport::TcpTransport;
use pns_client::{Config, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// PNS CLI
#[derive(Parser, Debug)]
#[command(name = "pns-cli")]
#[command(about = "Control a networked signal tower over the PNS protocol")]
#[command(version)]
struct Args {
    /// Device address (host:port)
    #[arg(short, long, default_value = "192.168.10.1:10000")]
    addr: String,

    /// Connect timeout in milliseconds
    #[arg(long, default_value = "5000")]
    connect_timeout_ms: u64,

    /// Read/write timeout in milliseconds (0 = none)
    #[arg(short, long, default_value = "5000")]
    timeout_ms: u64,

    /// Require an explicit ACK instead of only rejecting NAK
    #[arg(long)]
    strict_ack: bool,

    /// Decode the status body from the bytes after the status byte
    #[arg(long)]
    status_after_ack: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Command: S (run control), C (clear) or G (get status)
    #[arg(value_parser = frontend::parse_command)]
    command: CommandId,

    /// Run control values: red amber green blue white buzzer
    values: Vec<u8>,
}

fn main() {
    let args = Args::parse();

    // Initialize tracing/logging
    let default_filter = if args.verbose {
        "info,pns_client=debug"
    } else {
        "warn,pns_client=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        tracing::error!("Command failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let invocation = Invocation::new(args.command, &args.values)?;

    let config = Config::builder()
        .device_addr(&args.addr)
        .connect_timeout_ms(args.connect_timeout_ms)
        .read_timeout_ms(args.timeout_ms)
        .write_timeout_ms(args.timeout_ms)
        .reply_validation(if args.strict_ack {
            ReplyValidation::RequireAck
        } else {
            ReplyValidation::NakOnly
        })
        .status_layout(if args.status_after_ack {
            StatusLayout::AfterStatusByte
        } else {
            StatusLayout::RawReply
        })
        .build();

    tracing::debug!("PNS CLI v{}", pns_client::VERSION);
    tracing::debug!("Device address: {}", config.device_addr);

    let mut transport = TcpTransport::connect(&config)?;
    match frontend::execute(&mut transport, &invocation, &config)? {
        Outcome::Acknowledged => {
            tracing::info!(command = %invocation.command_id().as_char(), "Command acknowledged");
        }
        Outcome::Status(status) => print!("{}", frontend::render_status(&status)),
    }

    Ok(())
}
