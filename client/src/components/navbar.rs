//! Top navigation bar with role-aware links and logout.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::net::types::Role;
use crate::routing::paths;
use crate::state::auth::AuthState;
use crate::util::storage::BrowserStorage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

const PATIENT_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", path: paths::HOME },
    NavItem { label: "Find Hospital", path: paths::HOSPITALS },
    NavItem { label: "My Bookings", path: paths::MY_BOOKINGS },
];

const ADMIN_ITEMS: &[NavItem] = &[
    NavItem { label: "Hospital Dashboard", path: paths::HOSPITAL_DASHBOARD },
    NavItem { label: "Find Hospital", path: paths::HOSPITALS },
];

/// Links offered to `role`; the route guard would bounce anything else.
#[must_use]
pub fn nav_items(role: Role) -> &'static [NavItem] {
    match role {
        Role::Patient => PATIENT_ITEMS,
        Role::HospitalAdmin => ADMIN_ITEMS,
        Role::None => &[],
    }
}

#[must_use]
pub fn is_active(current: &str, item: &str) -> bool {
    current == item
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let menu_open = RwSignal::new(false);

    // The guard sees the cleared session and replaces the route with /login.
    let on_logout = move |_| {
        menu_open.set(false);
        auth.update(|a| a.logout(&BrowserStorage));
    };

    let links = move || {
        let role = auth.with(AuthState::role);
        nav_items(role)
            .iter()
            .map(|item| {
                let path = item.path;
                view! {
                    <a
                        href=path
                        class=move || {
                            if location.pathname.with(|p| is_active(p, path)) {
                                "navbar__link navbar__link--active"
                            } else {
                                "navbar__link"
                            }
                        }
                        on:click=move |_| menu_open.set(false)
                    >
                        {item.label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href=paths::HOME>"HABS"</a>
            <button
                class="navbar__menu-toggle"
                aria-label="Toggle menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>
            <div class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                {links}
                <Show when=move || auth.with(AuthState::is_authenticated)>
                    <button class="btn navbar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
