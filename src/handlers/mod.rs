//! # HTTP Request Handlers
//!
//! This module contains all the HTTP route handlers (controllers).
//!
//! ## Submodules
//! - `auth`: Login form, login submission and logout
//! - `home`: The root redirect and the protected home page
//!
//! ## Handler Pattern
//! Handlers are async functions that:
//! 1. Extract data from request (session, form body, shared state)
//! 2. Read or change the signed-in user through `crate::auth::session`
//! 3. Return a rendered view or a redirect; store failures become `AppError`

pub mod auth;
pub mod home;
