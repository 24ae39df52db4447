//! Server-side session handling and the admin gate.
//!
//! The cookie carries only a random session id. The `logged_in` flag lives in
//! the session store on the server.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use time::Duration;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

use crate::error::UiError;

/// Session key holding the admin flag.
pub const LOGGED_IN_KEY: &str = "logged_in";

/// Name of the session id cookie.
pub const SESSION_COOKIE: &str = "quizbook.sid";

pub const LOGIN_PATH: &str = "/login";

/// Session cookie and expiry settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Sessions idle longer than this are dropped, which logs the admin out.
    pub idle_minutes: u32,
    /// Mark the cookie `Secure`. Needs HTTPS in front of the server.
    pub secure_cookies: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_minutes: 8 * 60,
            secure_cookies: false,
        }
    }
}

impl SessionConfig {
    /// Build the session layer with an in-process store.
    #[must_use]
    pub fn layer(&self) -> SessionManagerLayer<MemoryStore> {
        SessionManagerLayer::new(MemoryStore::default())
            .with_name(SESSION_COOKIE)
            .with_http_only(true)
            .with_same_site(SameSite::Lax)
            .with_secure(self.secure_cookies)
            .with_expiry(Expiry::OnInactivity(Duration::minutes(i64::from(
                self.idle_minutes,
            ))))
    }
}

/// Mark the session as an authenticated admin session.
///
/// The session id is rotated first so an id handed out before login is never
/// promoted.
///
/// # Errors
///
/// Returns `UiError::Session` if the session store fails.
pub async fn mark_logged_in(session: &Session) -> Result<(), UiError> {
    session.cycle_id().await?;
    session.insert(LOGGED_IN_KEY, true).await?;
    Ok(())
}

/// Drop the session and everything in it. Safe to call without a session.
///
/// # Errors
///
/// Returns `UiError::Session` if the session store fails.
pub async fn clear(session: &Session) -> Result<(), UiError> {
    session.flush().await?;
    Ok(())
}

/// Extractor that admits only requests carrying the admin flag.
///
/// Anything else is redirected to the login page without a message. A
/// missing session and an expired one look the same. Put it before any body
/// extractor so rejected requests never reach the store.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession;

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        match session.get::<bool>(LOGGED_IN_KEY).await {
            Ok(Some(true)) => Ok(Self),
            Ok(_) => Err(Redirect::to(LOGIN_PATH).into_response()),
            Err(err) => Err(UiError::from(err).into_response()),
        }
    }
}
