//! # Router Assembly
//!
//! Binds the handlers to their paths and wraps them in the middleware stack.
//!
//! ## Layer order (outermost first)
//! 1. `TraceLayer`: request/response logging
//! 2. `no_cache`: cache-busting headers on *every* response
//! 3. Session layer: resolves the `session_id` cookie against the store
//! 4. `require_auth`: the gate in front of every route but `/login` and `/logout`
//!
//! Axum applies `.layer()` calls inside-out, so they appear below in reverse.

use crate::auth::session::SESSION_COOKIE;
use crate::config::Config;
use crate::handlers::{auth, home};
use crate::middleware;
use crate::state::AppState;
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use time::Duration;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};

/// Session layer over `store`, configured from `config`.
///
/// Sessions expire after `SESSION_TTL_HOURS` without a request.
pub fn session_layer<Store>(store: Store, config: &Config) -> SessionManagerLayer<Store>
where
    Store: SessionStore + Clone,
{
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE)
        .with_secure(config.cookie_secure)
        .with_expiry(Expiry::OnInactivity(Duration::hours(i64::from(config.session_ttl_hours))))
}

/// Build the complete application router.
pub fn app<Store>(state: AppState, sessions: SessionManagerLayer<Store>) -> Router
where
    Store: SessionStore + Clone,
{
    Router::new()
        .route("/", get(home::root))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/home", get(home::home))
        .route("/logout", post(auth::logout))
        .layer(axum_middleware::from_fn(middleware::auth::require_auth))
        .layer(sessions)
        .layer(axum_middleware::from_fn(middleware::cache::no_cache))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
