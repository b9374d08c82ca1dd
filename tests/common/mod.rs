//! Shared test helpers
//!
//! An in-memory transport that records sent frames and replays scripted
//! replies in order.

#![allow(dead_code)]

use std::collections::VecDeque;

use pns_client::transport::Transport;
use pns_client::{PnsError, Result};

/// In-memory transport with scripted replies
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    /// Frames written by the client, in order
    pub sent: Vec<Vec<u8>>,

    /// Replies handed out by `receive()`, in order
    replies: VecDeque<Vec<u8>>,

    /// Number of `close()` calls
    pub close_calls: usize,

    closed: bool,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replies<I, R>(replies: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[u8]>,
    {
        let mut transport = Self::new();
        for reply in replies {
            transport.push_reply(reply.as_ref());
        }
        transport
    }

    pub fn push_reply(&mut self, reply: &[u8]) {
        self.replies.push_back(reply.to_vec());
    }

    pub fn remaining_replies(&self) -> usize {
        self.replies.len()
    }
}

impl Transport for ScriptedTransport {
    fn send(&mut self, frame: &[u8]) -> Result<()> {
        if self.closed {
            return Err(PnsError::NotConnected);
        }
        self.sent.push(frame.to_vec());
        Ok(())
    }

    fn receive(&mut self) -> Result<Vec<u8>> {
        if self.closed {
            return Err(PnsError::NotConnected);
        }
        self.replies.pop_front().ok_or_else(|| {
            PnsError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "no scripted reply",
            ))
        })
    }

    fn close(&mut self) -> Result<()> {
        self.close_calls += 1;
        self.closed = true;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        !self.closed
    }
}
