//! Helpers for the signed-in user stored on a `tower_sessions::Session`.
//!
//! Each helper maps store failures to the matching `AppError` variant so
//! callers can simply use `?`.

use crate::error::{AppError, AppResult};
use tower_sessions::Session;

/// Session attribute holding the authenticated username.
pub const USERNAME_KEY: &str = "username";

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "session_id";

/// The username of the signed-in user, or `None` for an anonymous session.
pub async fn current_user(session: &Session) -> AppResult<Option<String>> {
    session
        .get::<String>(USERNAME_KEY)
        .await
        .map_err(AppError::SessionRead)
}

/// Mark the session as authenticated and write it to the store right away.
pub async fn sign_in(session: &Session, username: &str) -> AppResult<()> {
    session
        .insert(USERNAME_KEY, username)
        .await
        .map_err(AppError::SessionWrite)?;

    session.save().await.map_err(AppError::SessionWrite)
}

/// Drop every attribute, delete the record from the store and expire the cookie.
pub async fn sign_out(session: &Session) -> AppResult<()> {
    session.flush().await.map_err(AppError::SessionRead)
}
