//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the two shared state signals. The auth session starts in its
//! loading state so the server render and the first browser render agree;
//! once hydrated, an effect restores it from local storage exactly once and
//! the route guard re-evaluates.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    booking_detail::BookingDetailPage, complete_profile::CompleteProfilePage, home::HomePage,
    hospital_access::HospitalAccessPage, hospital_dashboard::HospitalDashboardPage,
    hospital_detail::HospitalDetailPage, hospitals::HospitalsPage, login::LoginPage, my_bookings::MyBookingsPage,
    patient_access_denied::PatientAccessDeniedPage, select_role::SelectRolePage,
};
use crate::state::{auth::AuthState, search::SearchState};
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Guarded page under the navigation bar.
#[component]
fn NavLayout(children: ChildrenFn) -> impl IntoView {
    view! {
        <ProtectedRoute>
            <Navbar/>
            <main class="app-main">{children()}</main>
        </ProtectedRoute>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let search = RwSignal::new(SearchState::pending());
    provide_context(auth);
    provide_context(search);

    // Effects only run in the browser, so this is the hydrate-time restore.
    Effect::new(move || {
        auth.set(AuthState::restore(&BrowserStorage));
    });

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_specialties().await {
                Ok(specialties) => search.update(|s| s.loaded(specialties)),
                Err(e) => {
                    leptos::logging::warn!("failed to load specialties: {e}");
                    search.update(|s| s.loaded(Vec::new()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = search;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/habs.css"/>
        <Title text="HABS"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("select-role")
                    view=|| view! { <ProtectedRoute><SelectRolePage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("complete-profile")
                    view=|| view! { <ProtectedRoute><CompleteProfilePage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("")
                    view=|| view! { <NavLayout><HomePage/></NavLayout> }
                />
                <Route
                    path=StaticSegment("hospitals")
                    view=|| view! { <NavLayout><HospitalsPage/></NavLayout> }
                />
                <Route
                    path=(StaticSegment("hospital"), ParamSegment("id"))
                    view=|| view! { <NavLayout><HospitalDetailPage/></NavLayout> }
                />
                <Route
                    path=StaticSegment("my-bookings")
                    view=|| view! { <NavLayout><MyBookingsPage/></NavLayout> }
                />
                <Route
                    path=(StaticSegment("booking"), ParamSegment("id"))
                    view=|| view! { <NavLayout><BookingDetailPage/></NavLayout> }
                />
                <Route
                    path=StaticSegment("hospital-dashboard")
                    view=|| view! { <NavLayout><HospitalDashboardPage/></NavLayout> }
                />
                <Route
                    path=StaticSegment("hospital-access")
                    view=|| view! { <NavLayout><HospitalAccessPage/></NavLayout> }
                />
                <Route
                    path=StaticSegment("patient-access-denied")
                    view=|| view! { <NavLayout><PatientAccessDeniedPage/></NavLayout> }
                />
            </Routes>
        </Router>
    }
}
