//! Session identity and client configuration.

use talkroom_proto::{LOGOUT_PATH, TALK_PATH};

/// Who this session speaks as.
///
/// Assigned externally before connecting and immutable afterwards: there are
/// no setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    sender_id: String,
    sender_name: String,
}

impl Identity {
    /// Create an identity.
    pub fn new(sender_id: impl Into<String>, sender_name: impl Into<String>) -> Self {
        Self { sender_id: sender_id.into(), sender_name: sender_name.into() }
    }

    /// Opaque session identifier, stamped on every outbound message.
    pub fn sender_id(&self) -> &str {
        &self.sender_id
    }

    /// Display name shown next to this session's messages.
    pub fn sender_name(&self) -> &str {
        &self.sender_name
    }
}

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server `host:port`.
    pub server: String,
    /// Session identity.
    pub identity: Identity,
}

impl ClientConfig {
    /// Create a configuration for `server` (`host:port`).
    pub fn new(server: impl Into<String>, identity: Identity) -> Self {
        Self { server: server.into(), identity }
    }

    /// WebSocket URL of the chat channel.
    pub fn talk_url(&self) -> String {
        format!("ws://{}{TALK_PATH}", self.server)
    }

    /// URL visited once the session has logged out.
    pub fn logout_url(&self) -> String {
        format!("http://{}{LOGOUT_PATH}", self.server)
    }
}
