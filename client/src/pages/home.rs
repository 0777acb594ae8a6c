//! Patient home: greeting, symptom search, and quick actions.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::symptom_search::SymptomSearch;
use crate::routing::paths;
use crate::state::auth::AuthState;
use crate::util::age::{format_date, today};

#[must_use]
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..12 => "Good Morning",
        12..17 => "Good Afternoon",
        _ => "Good Evening",
    }
}

/// Part of an email address before the `@`, used as a display name.
#[must_use]
pub fn display_name(email: Option<&str>) -> &str {
    email.and_then(|e| e.split('@').next()).filter(|n| !n.is_empty()).unwrap_or("there")
}

pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction { title: "Book Appointment", description: "Find a doctor and book now", href: paths::HOSPITALS },
    QuickAction { title: "My Appointments", description: "View upcoming visits", href: paths::MY_BOOKINGS },
    QuickAction { title: "Find Hospitals", description: "Explore nearby facilities", href: paths::HOSPITALS },
    QuickAction { title: "Emergency", description: "Get immediate help", href: "/hospitals?emergency=true" },
];

fn current_hour() -> u32 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().get_hours()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().hour().into()
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let searched = RwSignal::new(false);
    let on_search = Callback::new(move |_symptom: String| searched.set(true));
    Effect::new(move || {
        if searched.get() {
            navigate(paths::HOSPITALS, NavigateOptions::default());
        }
    });

    // Clock-dependent text is filled in after hydration so server and
    // browser markup agree.
    let hour = RwSignal::new(None::<u32>);
    let date_line = RwSignal::new(String::new());
    Effect::new(move || {
        hour.set(Some(current_hour()));
        date_line.set(today().map(format_date).unwrap_or_default());
    });

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <p class="home-page__date">{move || date_line.get()}</p>
                <h1>
                    {move || hour.get().map_or("Welcome", greeting)} ", "
                    {move || auth.with(|a| display_name(a.email()).to_owned())}
                </h1>
                <p>"What brings you in today?"</p>
                <SymptomSearch on_search=on_search/>
            </section>
            <section class="home-page__actions">
                {QUICK_ACTIONS
                    .into_iter()
                    .map(|action| {
                        view! {
                            <a class="quick-action" href=action.href>
                                <h3 class="quick-action__title">{action.title}</h3>
                                <p class="quick-action__description">{action.description}</p>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
        </div>
    }
}
