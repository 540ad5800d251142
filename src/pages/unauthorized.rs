//! Unauthorized page shown when a route guard denies access.

use leptos::prelude::*;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized-page">
            <h1>"Access denied"</h1>
            <p class="unauthorized-message">
                "Your account does not have permission to view that area."
            </p>
            <a href="/" class="unauthorized-link">"Back to overview"</a>
        </div>
    }
}
