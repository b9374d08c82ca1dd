//! Protocol Client Tests
//!
//! Drives the client against an in-memory transport.

mod common;

use common::ScriptedTransport;
use pns_client::protocol::{ReplyValidation, RunControlData, StatusLayout};
use pns_client::transport::Transport;
use pns_client::{Config, PnsClient, PnsError};

// =============================================================================
// Run Control Tests
// =============================================================================

#[test]
fn test_run_control_sends_one_frame() {
    let mut transport = ScriptedTransport::with_replies([b"\x06"]);

    PnsClient::new(&mut transport)
        .run_control(&RunControlData::new(1, 0, 2, 0, 9, 1))
        .unwrap();

    assert_eq!(
        transport.sent,
        vec![vec![0x41, 0x42, 0x53, 0x00, 0x00, 0x06, 0x01, 0x00, 0x02, 0x00, 0x09, 0x01]]
    );
    assert_eq!(transport.remaining_replies(), 0);
}

#[test]
fn test_run_control_nak() {
    let mut transport = ScriptedTransport::with_replies([b"\x15"]);

    let result = PnsClient::new(&mut transport).run_control(&RunControlData::new(0, 0, 0, 0, 0, 0));
    assert!(matches!(result, Err(PnsError::NegativeAcknowledge)));
}

#[test]
fn test_run_control_empty_reply() {
    let mut transport = ScriptedTransport::with_replies([b""]);

    let result = PnsClient::new(&mut transport).run_control(&RunControlData::new(1, 1, 1, 1, 1, 1));
    assert!(matches!(
        result,
        Err(PnsError::IncompleteResponse { expected: 1, .. })
    ));
}

// =============================================================================
// Clear Tests
// =============================================================================

#[test]
fn test_clear_sends_empty_payload() {
    let mut transport = ScriptedTransport::with_replies([b"\x06"]);

    PnsClient::new(&mut transport).clear().unwrap();

    assert_eq!(transport.sent, vec![vec![0x41, 0x42, 0x43, 0x00, 0x00, 0x00]]);
}

#[test]
fn test_clear_twice_is_independent() {
    let mut transport = ScriptedTransport::with_replies([&b"\x15"[..], &b"\x06"[..]]);

    {
        let mut client = PnsClient::new(&mut transport);
        assert!(matches!(client.clear(), Err(PnsError::NegativeAcknowledge)));
        assert!(client.clear().is_ok());
    }

    assert_eq!(transport.sent.len(), 2);
    assert_eq!(transport.sent[0], transport.sent[1]);
}

#[test]
fn test_client_does_not_close_transport() {
    let mut transport = ScriptedTransport::with_replies([b"\x06"]);

    PnsClient::new(&mut transport).clear().unwrap();

    assert!(transport.is_connected());
    assert_eq!(transport.close_calls, 0);
}

#[test]
fn test_transport_error_propagates() {
    // No scripted reply: receive fails with an I/O error
    let mut transport = ScriptedTransport::new();

    let result = PnsClient::new(&mut transport).clear();
    assert!(matches!(result, Err(PnsError::Io(_))));
    assert_eq!(transport.sent.len(), 1);
}

// =============================================================================
// Get Data Tests
// =============================================================================

#[test]
fn test_get_data_raw_reply_layout() {
    // Default layout decodes the first six bytes of the raw reply
    let mut transport = ScriptedTransport::with_replies([[0x06u8, 0x01, 0x02, 0x03, 0x04, 0x09]]);

    let status = PnsClient::new(&mut transport).get_data().unwrap();

    assert_eq!(transport.sent, vec![vec![0x41, 0x42, 0x47, 0x00, 0x00, 0x00]]);
    assert_eq!(status.led_pattern(), [0x06, 0x01, 0x02, 0x03, 0x04]);
    assert_eq!(status.buzzer(), 0x09);
}

#[test]
fn test_get_data_after_status_byte_layout() {
    let mut transport =
        ScriptedTransport::with_replies([[0x06u8, 0x01, 0x00, 0x02, 0x00, 0x09, 0x01]]);

    let status = PnsClient::new(&mut transport)
        .with_status_layout(StatusLayout::AfterStatusByte)
        .get_data()
        .unwrap();

    assert_eq!(status.led_pattern(), [1, 0, 2, 0, 9]);
    assert_eq!(status.buzzer(), 1);
}

#[test]
fn test_get_data_incomplete_reply() {
    let mut transport = ScriptedTransport::with_replies([b"\x06\x00"]);

    let result = PnsClient::new(&mut transport).get_data();
    assert!(matches!(
        result,
        Err(PnsError::IncompleteResponse {
            expected: 6,
            actual: 2
        })
    ));
}

#[test]
fn test_get_data_after_status_byte_needs_seven_bytes() {
    let mut transport = ScriptedTransport::with_replies([[0x06u8, 1, 1, 1, 1, 1]]);

    let result = PnsClient::new(&mut transport)
        .with_status_layout(StatusLayout::AfterStatusByte)
        .get_data();
    assert!(matches!(
        result,
        Err(PnsError::IncompleteResponse {
            expected: 7,
            actual: 6
        })
    ));
}

#[test]
fn test_get_data_nak() {
    let mut transport = ScriptedTransport::with_replies([b"\x15"]);

    let result = PnsClient::new(&mut transport).get_data();
    assert!(matches!(result, Err(PnsError::NegativeAcknowledge)));
}

// =============================================================================
// Validation Mode Tests
// =============================================================================

#[test]
fn test_nak_only_accepts_malformed_status_byte() {
    let mut transport = ScriptedTransport::with_replies([[0x00u8, 1, 2, 3, 4, 0]]);

    let status = PnsClient::new(&mut transport).get_data().unwrap();
    assert_eq!(status.buzzer(), 0);
}

#[test]
fn test_require_ack_rejects_malformed_status_byte() {
    let mut transport = ScriptedTransport::with_replies([[0x00u8, 1, 2, 3, 4, 0]]);

    let result = PnsClient::new(&mut transport)
        .with_validation(ReplyValidation::RequireAck)
        .get_data();
    assert!(matches!(result, Err(PnsError::UnexpectedStatus(0x00))));
}

#[test]
fn test_from_config_applies_protocol_options() {
    let config = Config::builder()
        .reply_validation(ReplyValidation::RequireAck)
        .status_layout(StatusLayout::AfterStatusByte)
        .build();
    let mut transport = ScriptedTransport::with_replies([[0x07u8, 0, 0, 0, 0, 0, 0]]);

    let result = PnsClient::from_config(&mut transport, &config).get_data();
    assert!(matches!(result, Err(PnsError::UnexpectedStatus(0x07))));
}
