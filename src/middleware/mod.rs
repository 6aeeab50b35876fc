//! # Middleware Module
//!
//! Middleware intercepts HTTP requests and responses.
//! Used for cross-cutting concerns like authentication, logging, caching headers, etc.
//!
//! ## Our Middleware
//! - `auth`: Redirects to the login page unless the session is authenticated
//! - `cache`: Stops browsers from caching any response, signed-in pages included

pub mod auth;
pub mod cache;
