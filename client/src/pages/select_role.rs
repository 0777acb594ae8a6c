//! Role selection for accounts that have not picked one yet.

#[cfg(test)]
#[path = "select_role_test.rs"]
mod select_role_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Role, User};
use crate::routing::paths;
use crate::state::auth::AuthState;

/// Landing path once `user` holds a role.
#[must_use]
pub fn role_landing(user: &User) -> &'static str {
    match user.role {
        Role::None => paths::SELECT_ROLE,
        Role::Patient if user.is_profile_complete => paths::HOME,
        Role::Patient => paths::COMPLETE_PROFILE,
        Role::HospitalAdmin => paths::HOSPITAL_DASHBOARD,
    }
}

struct RoleOption {
    role: Role,
    title: &'static str,
    description: &'static str,
}

const ROLE_OPTIONS: [RoleOption; 2] = [
    RoleOption {
        role: Role::Patient,
        title: "I am a Patient",
        description: "Book appointments and manage your healthcare visits",
    },
    RoleOption {
        role: Role::HospitalAdmin,
        title: "I am a Hospital Admin",
        description: "Manage hospital slots, appointments and staff",
    },
];

#[component]
pub fn SelectRolePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let choose = move |role: Role| {
        if busy.get_untracked() {
            return;
        }
        let Some(email) = auth.with_untracked(|a| a.email().map(str::to_owned)) else {
            error.set("User email not found. Please login again.".to_owned());
            navigate(paths::LOGIN, NavigateOptions::default());
            return;
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_role(&email, role).await {
                    Ok(response) => {
                        let landing = role_landing(&response.user);
                        let saved = auth.try_update(|a| {
                            a.login(&crate::util::storage::BrowserStorage, response.token, response.user)
                        });
                        if let Some(Err(e)) = saved {
                            leptos::logging::warn!("{e}");
                        }
                        navigate(landing, NavigateOptions::default());
                    }
                    Err(e) => error.set(e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (email, role);
    };

    view! {
        <div class="select-role-page">
            <header class="select-role-page__header">
                <h1>"Welcome to HABS"</h1>
                <p>"Select your role to continue"</p>
            </header>
            <div class="select-role-page__cards">
                {ROLE_OPTIONS
                    .into_iter()
                    .map(|RoleOption { role, title, description }| {
                        let choose = choose.clone();
                        view! {
                            <button
                                class="role-card"
                                disabled=move || busy.get()
                                on:click=move |_| choose(role)
                            >
                                <h2 class="role-card__title">{title}</h2>
                                <p class="role-card__description">{description}</p>
                                <Show when=move || busy.get()>
                                    <p class="role-card__status">"Updating..."</p>
                                </Show>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <Show when=move || !error.get().is_empty()>
                <p class="select-role-page__error">{move || error.get()}</p>
            </Show>
        </div>
    }
}
