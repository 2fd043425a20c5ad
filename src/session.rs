//! One-shot login and registration flows.
//!
//! Neither flow keeps state on the client: the outcome tells the caller which
//! view to show next, and any failure has already been notified.

use crate::http_handler::http_request::{login_post::LoginRequest, register_post::RegisterRequest};
use crate::http_handler::{Credentials, HTTPClient};
use crate::view_model::{NotificationLevel, Notifier};
use crate::{error, info};

/// View shown after a successful login.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// View shown after a successful registration.
pub const LOGIN_VIEW: &str = "/login";

const LOGIN_FAILED: &str = "Login failed";
const REGISTER_FAILED: &str = "Register failed";
const REGISTER_DONE: &str = "Registered! Now login.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Navigate to the given view.
    Redirect(&'static str),
    /// The flow failed with the message that was notified.
    Failed(String),
}

pub async fn login(client: &HTTPClient, credentials: &Credentials, notifier: &dyn Notifier) -> AuthOutcome {
    match client.send(&LoginRequest::new(credentials)).await {
        Ok(_) => {
            info!("Logged in as {}.", credentials.email());
            AuthOutcome::Redirect(DASHBOARD_VIEW)
        }
        Err(err) => {
            error!("Login for {} failed: {err}", credentials.email());
            let message = err.server_message().unwrap_or(LOGIN_FAILED).to_string();
            notifier.notify(NotificationLevel::Error, &message);
            AuthOutcome::Failed(message)
        }
    }
}

pub async fn register(client: &HTTPClient, credentials: &Credentials, notifier: &dyn Notifier) -> AuthOutcome {
    match client.send(&RegisterRequest::new(credentials)).await {
        Ok(_) => {
            info!("Registered {}.", credentials.email());
            notifier.notify(NotificationLevel::Success, REGISTER_DONE);
            AuthOutcome::Redirect(LOGIN_VIEW)
        }
        Err(err) => {
            error!("Registration for {} failed: {err}", credentials.email());
            let message = err.server_message().unwrap_or(REGISTER_FAILED).to_string();
            notifier.notify(NotificationLevel::Error, &message);
            AuthOutcome::Failed(message)
        }
    }
}
