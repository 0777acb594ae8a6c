//! Route guard wrapping every page behind the access decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard owns no policy. It feeds the current session and pathname into
//! `routing::access::decide` and acts on the result: spinner while the session
//! restores, children when allowed, and a history-replacing navigation
//! otherwise so the back button cannot land on a disallowed route.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading_spinner::LoadingSpinner;
use crate::routing::access::{Decision, decide};
use crate::state::auth::AuthState;

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let session = auth.with(AuthState::session);
        location.pathname.with(|path| decide(&session, path))
    });

    Effect::new(move || {
        if let Decision::Redirect(target) = decision.get() {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || decision.get() == Decision::Render
            fallback=move || {
                let message = match decision.get_untracked() {
                    Decision::Redirect(_) => "Redirecting...",
                    Decision::Loading | Decision::Render => "Loading...",
                };
                view! { <LoadingSpinner message=message/> }
            }
        >
            {children()}
        </Show>
    }
}
