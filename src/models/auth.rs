use serde::{Deserialize, Serialize};

/// Request to log in to the backend.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    /// The username to authenticate with.
    pub username: String,

    /// The password to authenticate with.
    pub password: String,
}

/// Successful login response carrying the issued bearer token.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// The opaque JWT attached to subsequent authenticated requests.
    pub token: String,

    /// Profile of the user who just logged in.
    pub user: Option<AccountSummary>,
}

/// Minimal account profile returned alongside the token.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AccountSummary {
    pub name: String,
}

/// Request to create a new account.
#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,

    /// Display name shown in the app.
    pub name: String,
}

/// Request to recover a forgotten username.
#[derive(Debug, Serialize)]
pub struct FindIdRequest {
    pub name: String,
    pub phone: String,
}
