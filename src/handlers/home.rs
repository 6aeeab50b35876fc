use crate::auth::session;
use crate::error::AppResult;
use crate::views;
use axum::response::{IntoResponse, Redirect, Response};
use tower_sessions::Session;

/// `GET /` has no page of its own.
pub async fn root() -> Redirect {
    Redirect::to("/home")
}

/// Render the signed-in user's home page.
///
/// The auth gate already turned anonymous callers away; the check is repeated
/// so the handler stays correct if it is ever mounted without the gate.
pub async fn home(session: Session) -> AppResult<Response> {
    match session::current_user(&session).await? {
        Some(username) => Ok(views::home(&username)?.into_response()),
        None => Ok(Redirect::to("/login").into_response()),
    }
}
