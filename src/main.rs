//! # Session Login Server
//!
//! A small web application demonstrating cookie-backed, server-side session
//! authentication: a login form, a protected home page and logout.
//!
//! ## Key Concepts
//! - **Session**: Server-side attributes keyed by an opaque id the browser keeps in a cookie
//! - **Auth Gate**: Middleware that sends anonymous callers to `/login`
//! - **Credential Verifier**: Pluggable check of a submitted username/password pair

mod auth;        // who is signed in: credential check, session attribute helpers
mod config;      // env / .env settings with defaults
mod error;       // AppError and its 500 bodies
mod handlers;    // /, /login, /home, /logout
mod middleware;  // login gate, no-cache headers
mod routes;      // router + layer stack
mod state;       // AppState (credential verifier)
mod views;       // askama login/home pages

use crate::config::Config;
use crate::state::AppState;
// In-process session storage, synchronized internally
use tower_sessions::MemoryStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main application entry point
///
/// This function:
/// 1. Sets up logging for debugging and monitoring
/// 2. Loads configuration from environment variables
/// 3. Creates the session store and the credential verifier
/// 4. Builds the router with its middleware stack
/// 5. Starts the HTTP server
///
/// A port that can't be bound aborts the process with an error.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG wins; otherwise debug for this crate, info elsewhere
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,session_login=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    // The store is created here and handed to the session layer;
    // handlers only ever see it through the `Session` extractor
    let session_store = MemoryStore::default();
    let sessions = routes::session_layer(session_store, &config);

    let app_state = AppState::new(&config);
    let app = routes::app(app_state, sessions);

    let bind_addr = config.bind_address();
    tracing::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
