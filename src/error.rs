//! # Error Handling
//!
//! This module defines the application error type and how it turns into an
//! HTTP response.
//!
//! The only runtime failures are session store access and template rendering.
//! All of them surface as `500 Internal Server Error` with a short, static,
//! plain-text body; the underlying cause goes to the log instead.
//! Form validation problems are not errors: they re-render the login page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-wide error type
///
/// `session::Error` carries no hint about whether a read or a write failed,
/// so the variants record that instead. The user-facing message depends on it.
#[derive(Error, Debug)]
pub enum AppError {
    /// The session could not be loaded (or destroyed) through the store
    #[error("Session read failed: {0}")]
    SessionRead(#[source] tower_sessions::session::Error),

    /// The session could not be written back to the store
    #[error("Session write failed: {0}")]
    SessionWrite(#[source] tower_sessions::session::Error),

    /// A view template failed to render
    #[error("Template error: {0}")]
    Render(#[from] askama::Error),
}

impl AppError {
    /// The static body sent to the client for this error.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::SessionRead(_) => "Error retrieving session",
            AppError::SessionWrite(_) => "Error creating session",
            AppError::Render(_) => "Error rendering page",
        }
    }
}

/// Convert AppError into an HTTP response
///
/// Logs the detailed error, then answers with the static message so store or
/// template internals never reach the browser.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("{:?}", self);

        (StatusCode::INTERNAL_SERVER_ERROR, self.public_message()).into_response()
    }
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;
