use crate::auth::session::current_user;
use crate::error::AppError;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

/// Paths reachable without an authenticated session.
const PUBLIC_PATHS: [&str; 2] = ["/login", "/logout"];

pub fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

pub async fn require_auth(
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if is_public(request.uri().path()) {
        return Ok(next.run(request).await);
    }

    match current_user(&session).await? {
        Some(_) => Ok(next.run(request).await),
        None => {
            tracing::debug!(path = %request.uri().path(), "anonymous request, redirecting to login");
            Ok(Redirect::to("/login").into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_login_and_logout_are_public() {
        assert!(is_public("/login"));
        assert!(is_public("/logout"));
        assert!(!is_public("/"));
        assert!(!is_public("/home"));
        assert!(!is_public("/login/"));
        assert!(!is_public("/logout/extra"));
    }
}
