//! Shown to hospital admins who reach a patient-only area.

use leptos::prelude::*;

use crate::routing::paths;

#[component]
pub fn PatientAccessDeniedPage() -> impl IntoView {
    view! {
        <div class="access-page access-page--denied">
            <section class="access-page__hero">
                <h1>"Access Restricted"</h1>
                <p>"This page is exclusively for patients"</p>
            </section>
            <section class="access-page__notice">
                <p>
                    "You're logged in as a " <strong>"Hospital"</strong>
                    ". This area is only available to registered patients."
                </p>
            </section>
            <div class="access-page__actions">
                <a class="btn btn--primary" href=paths::HOSPITAL_DASHBOARD>"Go to Hospital Dashboard"</a>
                <a class="btn" href=paths::HOSPITALS>"Browse Hospitals"</a>
            </div>
        </div>
    }
}
