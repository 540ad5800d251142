//! Login, logout, and token-refresh orchestration against the auth API.
//!
//! DESIGN
//! ======
//! `AuthClient` owns no session truth of its own; all state lives in
//! [`Session`] and token storage, so the client handle can be cloned freely
//! into pages and interceptors. Refresh calls coalesce through a
//! [`SingleFlight`] gate: while one exchange is in flight every further
//! caller waits on the same outcome, and the gate frees itself whenever the
//! exchange settles, success or failure.
//!
//! ERROR HANDLING
//! ==============
//! Login failures propagate unchanged and leave the session untouched.
//! Any refresh failure is terminal for the session: tokens are dropped and
//! the user is signed out once, inside the shared flight, before the error
//! fans out to every waiter.

#[cfg(test)]
#[path = "auth_client_test.rs"]
mod auth_client_test;

use std::sync::Arc;

use crate::net::single_flight::SingleFlight;
use crate::net::types::{AuthApi, AuthError, User};
use crate::state::session::Session;
use crate::util::token_storage::{self, TokenPair};

/// Client-side auth flow: login, logout, coalesced token refresh, and
/// startup session restore.
pub struct AuthClient<A> {
    api: Arc<A>,
    session: Session,
    refresh_flight: SingleFlight<Result<String, AuthError>>,
}

impl<A> Clone for AuthClient<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            session: self.session,
            refresh_flight: self.refresh_flight.clone(),
        }
    }
}

impl<A: AuthApi> AuthClient<A> {
    pub fn new(api: A, session: Session) -> Self {
        Self {
            api: Arc::new(api),
            session,
            refresh_flight: SingleFlight::new(),
        }
    }

    /// The session this client writes to.
    pub fn session(&self) -> Session {
        self.session
    }

    /// Exchange credentials for a signed-in session.
    ///
    /// On success the session holds the returned user and both tokens are
    /// persisted. On failure the session is left untouched.
    ///
    /// # Errors
    ///
    /// Returns the transport or rejection [`AuthError`] from the login
    /// endpoint unchanged.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let response = self.api.login(email, password).await?;
        let tokens = TokenPair {
            access: response.access_token,
            refresh: response.refresh_token,
        };
        let user = response.user;
        self.session.establish(user.clone(), &tokens);
        Ok(user)
    }

    /// Sign out immediately. Infallible; delegates to [`Session::clear`].
    pub fn logout(&self) {
        self.session.clear();
    }

    /// Exchange the stored refresh token for a fresh pair, yielding the new
    /// access token.
    ///
    /// Concurrent calls coalesce into one request; every caller observes
    /// the same token or the same error. The next call after the exchange
    /// settles starts a fresh request.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingRefreshToken`] with nothing in storage,
    /// or the endpoint's [`AuthError`] unchanged. Every failure signs the
    /// session out before the error is returned.
    pub async fn refresh_access_token(&self) -> Result<String, AuthError> {
        let api = Arc::clone(&self.api);
        let session = self.session;
        self.refresh_flight
            .run(|| {
                let api = Arc::clone(&api);
                async move {
                    let Some(refresh_token) = token_storage::load_refresh_token() else {
                        session.clear();
                        return Err(AuthError::MissingRefreshToken);
                    };
                    match api.refresh(&refresh_token).await {
                        Ok(response) => {
                            let tokens = TokenPair {
                                access: response.access_token,
                                refresh: response.refresh_token,
                            };
                            session.establish(response.user, &tokens);
                            Ok(tokens.access)
                        }
                        Err(err) => {
                            leptos::logging::warn!("token refresh failed: {err}");
                            session.clear();
                            Err(err)
                        }
                    }
                }
            })
            .await
    }

    /// Re-establish a persisted session at startup.
    ///
    /// With no stored refresh token this only marks the restore finished;
    /// otherwise the refresh exchange decides. Success signs the session
    /// back in, failure takes the usual forced sign-out path.
    pub async fn restore(&self) {
        if token_storage::load_refresh_token().is_none() {
            self.session.finish_loading();
            return;
        }
        let _ = self.refresh_access_token().await;
    }

    /// `Authorization` header value for the stored access token, if any.
    pub fn authorized_bearer(&self) -> Option<String> {
        token_storage::load_access_token().map(|token| format!("Bearer {token}"))
    }
}
