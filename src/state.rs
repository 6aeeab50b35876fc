//! # Application State
//!
//! This module defines the shared state that's accessible to all request handlers.
//! In Axum, state is how you share resources across different parts of your
//! application without reaching for globals.
//!
//! The session store is deliberately *not* in here: it is owned by the
//! `SessionManagerLayer`, and handlers reach it through the `Session` extractor.

use crate::auth::credentials::{CredentialVerifier, StaticCredential};
use crate::config::Config;
use std::sync::Arc; // Atomic Reference Counting - for thread-safe sharing

/// Shared application state
///
/// Axum clones the state for each request; that only copies an `Arc` pointer.
#[derive(Clone)]
pub struct AppState {
    /// Checks submitted login credentials
    pub verifier: Arc<dyn CredentialVerifier>,
}

impl AppState {
    /// State backed by the credential pair from the configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_verifier(StaticCredential::from_config(config))
    }

    /// State backed by any verifier, e.g. an external identity provider.
    pub fn with_verifier(verifier: impl CredentialVerifier + 'static) -> Self {
        AppState {
            verifier: Arc::new(verifier),
        }
    }
}
