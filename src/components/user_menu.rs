//! Signed-in user badge with the sign-out action.

use leptos::prelude::*;

use crate::net::api::HttpAuthApi;
use crate::net::auth_client::AuthClient;
use crate::state::session::Session;

/// Current-user badge: name, email, role tag, and a sign-out button.
#[component]
pub fn UserMenu() -> impl IntoView {
    let session = expect_context::<Session>();
    let client = expect_context::<AuthClient<HttpAuthApi>>();

    let name = move || {
        session.with(|state| {
            state
                .user
                .as_ref()
                .map(|user| user.name.clone())
                .unwrap_or_else(|| "Signed out".to_owned())
        })
    };
    let email = move || {
        session.with(|state| {
            state
                .user
                .as_ref()
                .map(|user| user.email.clone())
                .unwrap_or_default()
        })
    };
    let role_tag = move || {
        session.with(|state| state.user.as_ref().map(|user| user.role.as_str()).unwrap_or(""))
    };

    let on_logout = move |_| client.logout();

    view! {
        <div class="user-menu">
            <span class="user-menu__name">{name}</span>
            <span class="user-menu__email">{email}</span>
            <span class="user-menu__role">{role_tag}</span>
            <button class="user-menu__logout" on:click=on_logout>
                "Sign out"
            </button>
        </div>
    }
}
