//! Centered spinner with an optional status line.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading-spinner" role="status" aria-live="polite">
            <span class="loading-spinner__wheel" aria-hidden="true"></span>
            {message.map(|text| view! { <p class="loading-spinner__message">{text}</p> })}
        </div>
    }
}
