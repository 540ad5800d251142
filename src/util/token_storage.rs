//! Browser localStorage persistence for the opaque token pair.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tokens are stored verbatim under fixed keys so a session can survive page
//! reloads. Hydrate builds write through to `localStorage`; other builds
//! (SSR, tests) share an in-process map so the flow code exercises the same
//! paths everywhere. Storage failures are swallowed: a session that cannot
//! persist still works for the current page view.

#[cfg(test)]
#[path = "token_storage_test.rs"]
mod token_storage_test;

/// Storage key for the short-lived access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key for the long-lived refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// An access/refresh token pair as issued by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Persist both tokens, replacing any previous pair.
pub fn save_tokens(tokens: &TokenPair) {
    set_item(ACCESS_TOKEN_KEY, &tokens.access);
    set_item(REFRESH_TOKEN_KEY, &tokens.refresh);
}

/// Load the stored access token, if any.
pub fn load_access_token() -> Option<String> {
    get_item(ACCESS_TOKEN_KEY)
}

/// Load the stored refresh token, if any.
pub fn load_refresh_token() -> Option<String> {
    get_item(REFRESH_TOKEN_KEY)
}

/// Remove both tokens from storage.
pub fn clear_tokens() {
    remove_item(ACCESS_TOKEN_KEY);
    remove_item(REFRESH_TOKEN_KEY);
}

fn set_item(key: &'static str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        fallback::set(key, value);
    }
}

fn get_item(key: &'static str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        fallback::get(key)
    }
}

fn remove_item(key: &'static str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.remove_item(key);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        fallback::remove(key);
    }
}

/// In-process stand-in for `localStorage` on non-browser builds.
#[cfg(not(feature = "hydrate"))]
mod fallback {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<&'static str, String>> = RefCell::new(HashMap::new());
    }

    pub fn set(key: &'static str, value: &str) {
        STORE.with(|store| store.borrow_mut().insert(key, value.to_owned()));
    }

    pub fn get(key: &'static str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }

    pub fn remove(key: &'static str) {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
}
