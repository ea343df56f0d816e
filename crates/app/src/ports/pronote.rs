//! Pronote collaborator port — session opening and data listings.
//!
//! The authentication handshake, payload encryption and session handling of
//! the remote protocol all live behind these traits. The application only
//! sees plain domain records.

use std::future::Future;

use chrono::NaiveDate;
use pronote_dashboard_domain::credentials::LoginRequest;
use pronote_dashboard_domain::error::ClientError;
use pronote_dashboard_domain::homework::Homework;
use pronote_dashboard_domain::lesson::Lesson;

/// Opens remote sessions against a Pronote instance.
///
/// Every call opens a fresh session; sessions are never pooled or reused.
pub trait PronoteConnector: Send + Sync {
    /// Session type produced by [`connect`](Self::connect).
    type Session: PronoteSession;

    /// Open a session with the given request.
    ///
    /// A rejected login is **not** an error: the returned session simply
    /// reports [`PronoteSession::is_logged_in`] as `false`. Errors are
    /// reserved for transport and protocol failures.
    fn connect(
        &self,
        request: LoginRequest,
    ) -> impl Future<Output = Result<Self::Session, ClientError>> + Send;
}

/// An opened remote session.
pub trait PronoteSession: Send + Sync {
    /// Whether the remote instance accepted the credentials.
    fn is_logged_in(&self) -> bool;

    /// List homework due between `from` and `to` (both inclusive).
    fn homework(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> impl Future<Output = Result<Vec<Homework>, ClientError>> + Send;

    /// List lessons taking place between `from` and `to` (both inclusive).
    fn lessons(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> impl Future<Output = Result<Vec<Lesson>, ClientError>> + Send;
}
