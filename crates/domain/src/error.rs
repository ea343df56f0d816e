//! Common error types used across the workspace.
//!
//! Each failure class a submission can hit has its own variant so the HTTP
//! boundary can decide how to surface it without string matching.

/// Failure reported by the Pronote collaborator while a session is open.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The remote instance could not be reached.
    #[error("network error: {0}")]
    Network(String),
    /// The remote instance answered something the client does not understand.
    #[error("protocol error: {0}")]
    Protocol(String),
    /// A record came back with missing or unparsable fields.
    #[error("malformed data: {0}")]
    MalformedData(String),
}

/// Everything that can stop a dashboard submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    /// Username or password absent from the form.
    #[error("username and password are required")]
    MissingCredentials,
    /// No Pronote collaborator was wired at process start.
    #[error("pronote client is unavailable")]
    ClientUnavailable,
    /// The remote instance did not yield a logged-in session.
    #[error("authentication rejected")]
    AuthenticationRejected,
    /// An ENT/CAS provider was configured; only direct login is supported.
    #[error("unsupported authentication method: {0}")]
    UnsupportedAuthMethod(String),
    /// Unclassified collaborator failure (network, parsing, library internals).
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl DashboardError {
    /// Whether this failure needs operator attention.
    ///
    /// Only collaborator failures are unexpected; the other classes are
    /// ordinary user-facing outcomes.
    #[must_use]
    pub fn is_unexpected(&self) -> bool {
        matches!(self, Self::Client(_))
    }
}
