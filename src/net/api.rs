//! HTTP transport for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`AuthError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport, rejection, and parse failures map onto distinct [`AuthError`]
//! variants so flow code can branch without string matching. Response bodies
//! of rejected requests are preserved for display.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{AuthApi, AuthError, AuthResponse};

/// Settings for reaching the auth API.
#[derive(Clone, Debug, Default)]
pub struct ApiConfig {
    /// Base URL prefix for auth endpoints; empty means same-origin paths.
    pub base_url: String,
}

/// [`AuthApi`] implementation backed by `gloo-net` requests.
#[derive(Clone, Debug, Default)]
pub struct HttpAuthApi {
    config: ApiConfig,
}

impl HttpAuthApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn login_url(&self) -> String {
        join_url(&self.config.base_url, "/login")
    }

    fn refresh_url(&self) -> String {
        join_url(&self.config.base_url, "/refresh-token")
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// POST a JSON body and decode the standard auth response.
async fn post_auth(url: &str, payload: serde_json::Value) -> Result<AuthResponse, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(&payload)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::Rejected { status, body });
        }
        resp.json::<AuthResponse>()
            .await
            .map_err(|e| AuthError::ResponseParse(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, payload);
        Err(AuthError::Unavailable)
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        let payload = serde_json::json!({
            "email": email,
            "password": password,
        });
        post_auth(&self.login_url(), payload).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<AuthResponse, AuthError> {
        let payload = serde_json::json!({
            "refresh_token": refresh_token,
        });
        post_auth(&self.refresh_url(), payload).await
    }
}
