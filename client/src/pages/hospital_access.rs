//! Shown to patients who reach a hospital-admin route.

use leptos::prelude::*;

use crate::routing::paths;

const BENEFITS: [(&str, &str); 6] = [
    ("Manage Appointments", "Handle patient bookings effortlessly with smart scheduling"),
    ("Queue Management", "Real-time queue tracking reduces wait times"),
    ("Analytics Dashboard", "Track performance with detailed insights"),
    ("Verified Badge", "Build trust with verified hospital status"),
    ("Smart Calendar", "Organized view of all appointments"),
    ("Doctor Profiles", "Showcase your specialist team"),
];

#[component]
pub fn HospitalAccessPage() -> impl IntoView {
    view! {
        <div class="access-page">
            <section class="access-page__hero">
                <h1>"Hospital Dashboard"</h1>
                <p>"This section is exclusively for registered healthcare providers"</p>
            </section>
            <section class="access-page__notice">
                <p>
                    "You're logged in as a " <strong>"Patient"</strong>
                    ". The Hospital Dashboard is only available to registered healthcare facilities."
                </p>
            </section>
            <section class="access-page__pitch">
                <h2>"Are you a Hospital or Clinic?"</h2>
                <p>"Join HABS and connect with thousands of patients looking for quality healthcare"</p>
                <div class="access-page__benefits">
                    {BENEFITS
                        .into_iter()
                        .map(|(title, description)| {
                            view! {
                                <div class="benefit">
                                    <h3>{title}</h3>
                                    <p>{description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="access-page__actions">
                    <a class="btn btn--primary" href="mailto:support@habs.com">"Register Your Hospital"</a>
                    <a class="btn" href=paths::HOME>"Back to Home"</a>
                </div>
            </section>
            <section class="access-page__partner">
                <p>"Already a partner hospital?"</p>
                <a class="btn" href=paths::LOGIN>"Sign in with your hospital account"</a>
            </section>
        </div>
    }
}
