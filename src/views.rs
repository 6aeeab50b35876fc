//! # Views
//!
//! Compile-time checked HTML templates. The markup lives in `templates/`;
//! each struct below is the binding rendered into it.

use crate::error::AppResult;
use askama::Template;
use axum::response::Html;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginView<'a> {
    /// Shown above the form; empty means no message
    pub error: &'a str,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeView<'a> {
    pub username: &'a str,
}

/// Render the login form with an optional error message.
pub fn login(error: &str) -> AppResult<Html<String>> {
    Ok(Html(LoginView { error }.render()?))
}

/// Render the home page for a signed-in user.
pub fn home(username: &str) -> AppResult<Html<String>> {
    Ok(Html(HomeView { username }.render()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_without_error_has_no_message() {
        let Html(page) = login("").unwrap();
        assert!(page.contains("action=\"/login\""));
        assert!(!page.contains("class=\"error\""));
    }

    #[test]
    fn login_shows_error() {
        let Html(page) = login("Invalid username or password.").unwrap();
        assert!(page.contains("Invalid username or password."));
    }

    #[test]
    fn home_escapes_username() {
        let Html(page) = home("<b>Abid</b>").unwrap();
        assert!(page.contains("&lt;b&gt;Abid&lt;/b&gt;"));
        assert!(page.contains("action=\"/logout\""));
    }
}
