//! # Configuration Management
//!
//! This module handles loading configuration from environment variables.
//! It uses the "12-factor app" methodology where configuration comes from the environment.
//!
//! ## Environment Variables
//! - `HOST`: Server bind address (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8000)
//! - `SESSION_TTL_HOURS`: Hours of inactivity before a session expires (default: 24)
//! - `COOKIE_SECURE`: Mark the session cookie `Secure` (default: false)
//! - `LOGIN_USERNAME` / `LOGIN_PASSWORD`: The accepted credential pair (default: Abid / 0000)

use anyhow::{bail, Context, Result};
use std::env;
use std::fmt;

/// Ten years. Expiry is computed as "now + TTL", which must stay a valid date.
pub const MAX_SESSION_TTL_HOURS: u32 = 24 * 365 * 10;

/// Application configuration
///
/// Every field has a default, so the server starts with an empty environment.
#[derive(Clone)]
pub struct Config {
    /// Server host/IP address to bind to
    pub host: String,

    /// Server port number
    pub port: u16,

    /// Sessions idle for longer than this are dropped by the store.
    /// Between 1 and `MAX_SESSION_TTL_HOURS`.
    pub session_ttl_hours: u32,

    /// Whether browsers may only send the session cookie over HTTPS.
    /// Off by default because the server speaks plain HTTP.
    pub cookie_secure: bool,

    /// Username accepted by the login form
    pub login_username: String,

    /// Password accepted by the login form
    pub login_password: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 8000,
            session_ttl_hours: 24,
            cookie_secure: false,
            login_username: "Abid".to_string(),
            login_password: "0000".to_string(),
        }
    }
}

// The password must never end up in the startup log line.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("session_ttl_hours", &self.session_ttl_hours)
            .field("cookie_secure", &self.cookie_secure)
            .field("login_username", &self.login_username)
            .field("login_password", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads variables from .env file (if present) using dotenvy
    /// 2. Reads each configuration value from environment
    /// 3. Falls back to the defaults if variables aren't set
    /// 4. Returns an error if a numeric value fails to parse
    ///
    /// ## Example .env file
    /// ```text
    /// HOST=127.0.0.1
    /// PORT=8000
    /// SESSION_TTL_HOURS=24
    /// COOKIE_SECURE=false
    /// ```
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (dotenvy doesn't error if file missing)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// `from_env` passes the process environment; tests pass a closure over a
    /// fixed table so they don't race on shared globals.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("invalid PORT: {raw:?}"))?,
            None => defaults.port,
        };

        let session_ttl_hours = match lookup("SESSION_TTL_HOURS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("invalid SESSION_TTL_HOURS: {raw:?}"))?,
            None => defaults.session_ttl_hours,
        };
        if !(1..=MAX_SESSION_TTL_HOURS).contains(&session_ttl_hours) {
            bail!(
                "invalid SESSION_TTL_HOURS: {session_ttl_hours} (must be between 1 and {MAX_SESSION_TTL_HOURS})"
            );
        }

        let cookie_secure = lookup("COOKIE_SECURE")
            .and_then(|raw| parse_bool(&raw))
            .unwrap_or(defaults.cookie_secure);

        Ok(Config {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            session_ttl_hours,
            cookie_secure,
            login_username: lookup("LOGIN_USERNAME").unwrap_or(defaults.login_username),
            login_password: lookup("LOGIN_PASSWORD").unwrap_or(defaults.login_password),
        })
    }

    /// Get the socket address to bind the server to
    ///
    /// Example: "0.0.0.0:8000"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a boolean flag the way operators tend to write them.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let table: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| table.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(config.session_ttl_hours, 24);
        assert!(!config.cookie_secure);
        assert_eq!(config.login_username, "Abid");
        assert_eq!(config.login_password, "0000");
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("SESSION_TTL_HOURS", "2"),
            ("COOKIE_SECURE", "yes"),
            ("LOGIN_USERNAME", "alice"),
            ("LOGIN_PASSWORD", "hunter2"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:9090");
        assert_eq!(config.session_ttl_hours, 2);
        assert!(config.cookie_secure);
        assert_eq!(config.login_username, "alice");
        assert_eq!(config.login_password, "hunter2");
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn invalid_ttl_is_an_error() {
        assert!(Config::from_lookup(lookup_from(&[("SESSION_TTL_HOURS", "soon")])).is_err());
    }

    #[test]
    fn negative_ttl_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("SESSION_TTL_HOURS", "-5")])).unwrap_err();
        assert!(err.to_string().contains("SESSION_TTL_HOURS"));
    }

    #[test]
    fn zero_ttl_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("SESSION_TTL_HOURS", "0")])).unwrap_err();
        assert!(err.to_string().contains("between 1 and"));
    }

    #[test]
    fn ttl_beyond_u32_is_an_error() {
        let huge = (u64::from(u32::MAX) + 1).to_string();
        assert!(Config::from_lookup(lookup_from(&[("SESSION_TTL_HOURS", huge.as_str())])).is_err());
    }

    #[test]
    fn ttl_above_cap_is_an_error() {
        let over = (MAX_SESSION_TTL_HOURS + 1).to_string();
        assert!(Config::from_lookup(lookup_from(&[("SESSION_TTL_HOURS", over.as_str())])).is_err());
    }

    #[test]
    fn ttl_at_cap_is_accepted() {
        let max = MAX_SESSION_TTL_HOURS.to_string();
        let config =
            Config::from_lookup(lookup_from(&[("SESSION_TTL_HOURS", max.as_str())])).unwrap();
        assert_eq!(config.session_ttl_hours, MAX_SESSION_TTL_HOURS);
    }

    #[test]
    fn parse_bool_variants() {
        for val in ["1", "true", "YES", " On "] {
            assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
        }
        for val in ["0", "False", "no", "OFF"] {
            assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
        }
        assert_eq!(parse_bool(""), None);
    }

    #[test]
    fn debug_output_hides_password() {
        let rendered = format!("{:?}", Config::default());
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("0000"));
    }
}
