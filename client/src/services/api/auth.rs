//! # Authentication Endpoints
//!
//! Registration, login and logout. Successful register/login calls persist the
//! session; logout only touches local storage.

use shared::{AuthResponse, LoginRequest, RegisterRequest};

use super::client::ApiClient;
use crate::core::error::Result;
use crate::services::storage::Session;

/// Outcome of a successful register/login.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthOutcome {
    pub message: String,
    pub session: Session,
}

impl AuthOutcome {
    fn from_response(message: &str, response: AuthResponse) -> Self {
        Self {
            message: message.to_string(),
            session: Session {
                token: response.token,
                user: response.user,
            },
        }
    }
}

/// Register a new account.
#[tracing::instrument(skip(client, password), fields(username = %username, email = %email))]
pub async fn register(
    client: &ApiClient,
    username: String,
    email: String,
    password: String,
    full_name: String,
) -> Result<AuthOutcome> {
    tracing::info!("Attempting registration");

    let request = RegisterRequest {
        username,
        email,
        password,
        full_name,
    };

    let response: AuthResponse = client
        .send_json("register", client.client.post(client.url("/auth/register")).json(&request))
        .await?;

    let outcome = AuthOutcome::from_response("Registration successful", response);
    client.store_session(&outcome.session);
    Ok(outcome)
}

/// Login with username and password.
#[tracing::instrument(skip(client, password), fields(username = %username))]
pub async fn login(client: &ApiClient, username: String, password: String) -> Result<AuthOutcome> {
    tracing::info!("Attempting login");

    let request = LoginRequest { username, password };

    let response: AuthResponse = client
        .send_json("login", client.client.post(client.url("/auth/login")).json(&request))
        .await?;

    let outcome = AuthOutcome::from_response("Login successful", response);
    client.store_session(&outcome.session);
    Ok(outcome)
}

/// Forget the stored session. Never fails from the caller's point of view.
pub fn logout(client: &ApiClient) {
    match client.session().clear() {
        Ok(()) => tracing::info!("Logged out"),
        Err(e) => tracing::error!(error = %e, "Failed to clear session"),
    }
}
