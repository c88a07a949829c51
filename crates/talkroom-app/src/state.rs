//! Connection state.

/// Where the session is in its connection lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Channel not open yet. The view shows the awaiting-connection screen.
    AwaitingConnection,
    /// Channel open and `main` joined.
    Active,
    /// Session ended by logout. Terminal.
    LoggedOut,
    /// Channel closed without logout. Terminal.
    Closed,
}

impl ConnectionState {
    /// Whether no further event can change the session.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::LoggedOut | Self::Closed)
    }
}
