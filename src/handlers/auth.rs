use crate::auth::session;
use crate::error::AppResult;
use crate::state::AppState;
use crate::views;
use axum::{
    extract::{rejection::FormRejection, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;

pub const MISSING_FIELDS: &str = "Username and password are required.";
pub const INVALID_CREDENTIALS: &str = "Invalid username or password.";

/// Login form body. Absent fields read as empty strings; so does a body that
/// isn't a urlencoded form at all.
#[derive(Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// Login page

pub async fn login_page(session: Session) -> AppResult<Response> {
    if session::current_user(&session).await?.is_some() {
        return Ok(Redirect::to("/home").into_response());
    }

    Ok(views::login("")?.into_response())
}

// Login submission

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<LoginForm>, FormRejection>,
) -> AppResult<Response> {
    let form = form.map(|Form(form)| form).unwrap_or_else(|rejection| {
        tracing::debug!(%rejection, "unreadable login form, treating as empty");
        LoginForm::default()
    });

    if form.username.is_empty() || form.password.is_empty() {
        return Ok(views::login(MISSING_FIELDS)?.into_response());
    }

    if !state.verifier.verify(&form.username, &form.password) {
        tracing::info!(username = %form.username, "login rejected");
        return Ok(views::login(INVALID_CREDENTIALS)?.into_response());
    }

    session::sign_in(&session, &form.username).await?;
    tracing::info!(username = %form.username, "login succeeded");

    Ok(Redirect::to("/home").into_response())
}

// Logout

pub async fn logout(session: Session) -> AppResult<Redirect> {
    session::sign_out(&session).await?;
    tracing::debug!("session destroyed");

    Ok(Redirect::to("/login"))
}
