//! # Credential Verification
//!
//! Login handlers only know the `CredentialVerifier` trait. Swapping the
//! fixed pair for a real identity provider means writing another
//! implementation and handing it to `AppState`.

use crate::config::Config;

/// Decides whether a submitted username/password pair is acceptable.
///
/// Implementations must be shareable across request tasks, hence the
/// `Send + Sync` bound.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Accepts exactly one configured pair, compared verbatim.
///
/// No trimming, no case folding and no constant-time comparison.
pub struct StaticCredential {
    username: String,
    password: String,
}

impl StaticCredential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.login_username, &config.login_password)
    }
}

impl CredentialVerifier for StaticCredential {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pair_is_accepted() {
        let verifier = StaticCredential::from_config(&Config::default());
        assert!(verifier.verify("Abid", "0000"));
    }

    #[test]
    fn wrong_password_is_rejected() {
        let verifier = StaticCredential::new("Abid", "0000");
        assert!(!verifier.verify("Abid", "1234"));
    }

    #[test]
    fn comparison_is_verbatim() {
        let verifier = StaticCredential::new("Abid", "0000");
        assert!(!verifier.verify("abid", "0000"));
        assert!(!verifier.verify("Abid ", "0000"));
        assert!(!verifier.verify("Abid", " 0000"));
    }
}
