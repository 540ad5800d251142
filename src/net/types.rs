//! Shared wire-protocol DTOs for the auth API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's login/refresh payloads exactly so serde
//! round-trips stay lossless and the flow code can remain schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Access level attached to a user account.
///
/// Serialized in lowercase on the wire (`"admin"`, `"manager"`, `"user"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    User,
}

impl Role {
    /// Lowercase wire/display name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::User => "user",
        }
    }
}

/// An authenticated user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier, opaque to the client.
    pub id: String,
    /// Sign-in email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Access level used by route guards.
    pub role: Role,
}

/// Successful response body from `/login` and `/refresh-token`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Short-lived token sent as the `Authorization` bearer value.
    pub access_token: String,
    /// Long-lived token exchanged for fresh pairs.
    pub refresh_token: String,
    /// The signed-in user.
    pub user: User,
}

/// Errors produced by auth flow operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The server rejected the request with a non-success HTTP status.
    #[error("auth request rejected: status {status}")]
    Rejected { status: u16, body: String },

    /// The HTTP request could not be sent or completed.
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be deserialized.
    #[error("response parse failed: {0}")]
    ResponseParse(String),

    /// A refresh was attempted with no refresh token in storage.
    #[error("no refresh token stored")]
    MissingRefreshToken,

    /// A browser-only request was issued outside the browser build.
    #[error("auth API unavailable outside the browser")]
    Unavailable,
}

/// Transport-neutral async trait for the auth endpoints. Enables mocking in
/// tests and keeps flow logic independent of the HTTP layer.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Exchange credentials for a token pair and the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the request fails, the response is
    /// malformed, or the server rejects the credentials.
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError>;

    /// Exchange a refresh token for a fresh token pair.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the request fails, the response is
    /// malformed, or the server no longer honors the token.
    async fn refresh(&self, refresh_token: &str) -> Result<AuthResponse, AuthError>;
}
