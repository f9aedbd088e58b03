//! Login and signup commands.
//!
//! Credentials are verified against the rental site's backend. Both commands
//! validate their input, publish `Authenticating` while the request is in
//! flight, and map the response into [`SessionStatus`]; the panel that
//! triggered them only ever observes the resulting session cache.

use std::any::Any;

use estates_states::{Command, Dep, State, Updater, state_assign_impl};
use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::{AppConfig, SessionCompute, SessionStatus, User};

/// Editable fields shared by the login and signup forms.
#[derive(Debug, Clone, Default)]
pub struct CredentialsInput {
    pub email: String,
    pub password: String,
    /// Display name, collected by the signup form only.
    pub display_name: String,
}

impl State for CredentialsInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

/// Request payload for `/auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request payload for `/auth/signup`.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response from both auth endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    /// Whether the credentials were accepted.
    pub ok: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// Session token for authenticated API calls (present on success).
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Extracts an error message from a response, falling back to a default.
fn extract_error_message(response_bytes: &[u8], default: &str) -> String {
    serde_json::from_slice::<AuthResponse>(response_bytes)
        .map(|r| r.message.unwrap_or_else(|| default.to_string()))
        .unwrap_or_else(|_| default.to_string())
}

fn failed(updater: &Updater, message: impl Into<String>) {
    updater.set(SessionCompute {
        status: SessionStatus::Failed(message.into()),
    });
}

/// Sends an auth request and maps the response into the session cache.
///
/// `fallback` fills in the user profile when the backend omits one.
fn send_auth_request(url: String, body: Vec<u8>, fallback: User, updater: Updater) {
    let mut request = ehttp::Request::post(&url, body);
    request.headers.insert("Content-Type", "application/json");

    ehttp::fetch(request, move |result| match result {
        Ok(response) => {
            if response.status == 200 {
                match serde_json::from_slice::<AuthResponse>(&response.bytes) {
                    Ok(auth) if auth.ok => {
                        let user = auth
                            .user
                            .map(|u| User {
                                name: u.name,
                                email: u.email,
                            })
                            .unwrap_or(fallback);
                        info!("authentication succeeded for {}", user.display_name());
                        updater.set(SessionCompute {
                            status: SessionStatus::SignedIn {
                                user,
                                token: auth.token,
                            },
                        });
                    }
                    Ok(auth) => {
                        let message = auth
                            .message
                            .unwrap_or_else(|| "Invalid email or password".to_string());
                        info!("authentication rejected: {message}");
                        failed(&updater, message);
                    }
                    Err(e) => {
                        error!("failed to parse auth response: {e}");
                        failed(&updater, "Failed to parse server response");
                    }
                }
            } else if response.status == 400 {
                failed(
                    &updater,
                    extract_error_message(&response.bytes, "Invalid request format"),
                );
            } else if response.status == 401 {
                failed(
                    &updater,
                    extract_error_message(&response.bytes, "Invalid email or password"),
                );
            } else if response.status == 409 {
                failed(
                    &updater,
                    extract_error_message(
                        &response.bytes,
                        "An account with this email already exists",
                    ),
                );
            } else {
                error!("auth request failed with status {}", response.status);
                failed(&updater, format!("Server error (status {})", response.status));
            }
        }
        Err(err) => {
            error!("auth request failed: {err}");
            failed(&updater, format!("Network error: {err}"));
        }
    });
}

/// Manual-only command that signs the user in.
///
/// ## Flow
///
/// 1. Validates that email and password are present
/// 2. Sets status to `Authenticating`
/// 3. POSTs to `{api}/auth/login`
/// 4. Maps the response into [`SessionStatus`]
///
/// Dispatch explicitly via `ctx.dispatch::<LoginCommand>()`.
#[derive(Debug, Default)]
pub struct LoginCommand;

impl Command for LoginCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let input = deps.get_state_ref::<CredentialsInput>();
        let config = deps.get_state_ref::<AppConfig>();

        let email = input.email.trim().to_string();
        let password = input.password.clone();

        if email.is_empty() {
            info!("LoginCommand: email is empty");
            failed(&updater, "Email is required");
            return;
        }
        if !email.contains('@') {
            info!("LoginCommand: email format invalid");
            failed(&updater, "Enter a valid email address");
            return;
        }
        if password.is_empty() {
            info!("LoginCommand: password is empty");
            failed(&updater, "Password is required");
            return;
        }

        info!("LoginCommand: signing in '{email}'");
        updater.set(SessionCompute {
            status: SessionStatus::Authenticating,
        });

        let url = format!("{}/auth/login", config.api_url());
        let body = match serde_json::to_vec(&LoginRequest {
            email: email.clone(),
            password,
        }) {
            Ok(body) => body,
            Err(e) => {
                error!("LoginCommand: failed to serialize request: {e}");
                failed(&updater, format!("Internal error: {e}"));
                return;
            }
        };

        let fallback = User {
            name: None,
            email: Some(email),
        };
        send_auth_request(url, body, fallback, updater);
    }
}

/// Manual-only command that creates an account and signs the user in.
///
/// Same flow as [`LoginCommand`] against `{api}/auth/signup`, with the
/// display name required and a minimum password length.
///
/// Dispatch explicitly via `ctx.dispatch::<SignupCommand>()`.
#[derive(Debug, Default)]
pub struct SignupCommand;

/// Backend rejects shorter passwords; checked client-side for a nicer error.
const MIN_PASSWORD_LEN: usize = 8;

impl Command for SignupCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let input = deps.get_state_ref::<CredentialsInput>();
        let config = deps.get_state_ref::<AppConfig>();

        let name = input.display_name.trim().to_string();
        let email = input.email.trim().to_string();
        let password = input.password.clone();

        if name.is_empty() {
            info!("SignupCommand: name is empty");
            failed(&updater, "Name is required");
            return;
        }
        if email.is_empty() {
            info!("SignupCommand: email is empty");
            failed(&updater, "Email is required");
            return;
        }
        if !email.contains('@') {
            info!("SignupCommand: email format invalid");
            failed(&updater, "Enter a valid email address");
            return;
        }
        if password.len() < MIN_PASSWORD_LEN {
            info!("SignupCommand: password too short");
            failed(
                &updater,
                format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
            );
            return;
        }

        info!("SignupCommand: creating account for '{email}'");
        updater.set(SessionCompute {
            status: SessionStatus::Authenticating,
        });

        let url = format!("{}/auth/signup", config.api_url());
        let body = match serde_json::to_vec(&SignupRequest {
            name: name.clone(),
            email: email.clone(),
            password,
        }) {
            Ok(body) => body,
            Err(e) => {
                error!("SignupCommand: failed to serialize request: {e}");
                failed(&updater, format!("Internal error: {e}"));
                return;
            }
        };

        let fallback = User {
            name: Some(name),
            email: Some(email),
        };
        send_auth_request(url, body, fallback, updater);
    }
}
