//! # Authentication Module
//!
//! Everything that decides *who* the caller is lives here; the routing layer
//! only asks these questions and never touches credentials or session keys
//! directly.
//!
//! ## Submodules
//! - `credentials`: The pluggable `CredentialVerifier` capability and the
//!   single-pair implementation used by default
//! - `session`: Reading, setting and destroying the signed-in user on a session
//!
//! ## Session states
//! A session is *authenticated* while it carries a `username` attribute and
//! *anonymous* otherwise.
//! 1. Anonymous → Authenticated: valid `POST /login` → `session::sign_in()`
//! 2. Authenticated → Anonymous: `POST /logout` → `session::sign_out()`, or
//!    the store expires the session after inactivity

pub mod credentials;
pub mod session;
