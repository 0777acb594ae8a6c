//! Booking confirmation with token, queue position, and visit instructions.

#[cfg(test)]
#[path = "booking_detail_test.rs"]
mod booking_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::loading_spinner::LoadingSpinner;
use crate::net::types::Booking;
use crate::routing::paths;
use crate::util::age::format_api_date;

pub const VISIT_INSTRUCTIONS: [&str; 4] = [
    "Arrive 15 minutes before your slot time.",
    "Carry a valid photo ID and any previous medical records.",
    "Show your token number at the reception desk.",
    "Track your queue position from My Bookings.",
];

/// One-line summary used when sharing a booking.
#[must_use]
pub fn share_text(booking: &Booking) -> String {
    let hospital = booking.hospital.as_ref().map_or("hospital", |h| h.name.as_str());
    match booking.token_number {
        Some(token) => format!("Appointment at {hospital} - Token #{token}"),
        None => format!("Appointment at {hospital}"),
    }
}

fn print_page() {
    #[cfg(feature = "hydrate")]
    if let Some(window) = web_sys::window() {
        let _ = window.print();
    }
}

#[component]
pub fn BookingDetailPage() -> impl IntoView {
    let params = use_params_map();
    let booking = RwSignal::new(None::<Booking>);
    let loading = RwSignal::new(true);

    Effect::new(move || {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::get_booking(&id).await {
                Ok(found) => booking.set(Some(found)),
                Err(e) => {
                    leptos::logging::warn!("booking {id} failed to load: {e}");
                    booking.set(None);
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, booking);
    });

    let details = |b: Booking| {
        let summary = share_text(&b);
        let hospital = b.hospital.as_ref().map(|h| h.name.clone()).unwrap_or_default();
        let address = b.hospital.as_ref().map(|h| h.address().to_owned()).unwrap_or_default();
        let date = b.appointment_date.as_deref().map(format_api_date).unwrap_or_default();
        let time = b.slot.as_ref().map(crate::net::types::Slot::time_range).unwrap_or_default();
        let patient = b.patient_name().unwrap_or_default().to_owned();
        view! {
            <section class="booking-detail__success">
                <h1>"Booking Confirmed"</h1>
                <p>"Your appointment has been successfully booked"</p>
            </section>
            <section class="booking-detail__token">
                <span class="booking-detail__token-label">"Token Number"</span>
                <span class="booking-detail__token-value">
                    {b.token_number.map(|t| format!("#{t}")).unwrap_or_else(|| "-".to_owned())}
                </span>
                <span class="status">{b.status.label()}</span>
            </section>
            <dl class="booking-detail__info">
                <dt>"Hospital"</dt>
                <dd>{hospital} <br/> <small>{address}</small></dd>
                <dt>"Date"</dt>
                <dd>{date}</dd>
                <dt>"Time"</dt>
                <dd>{time}</dd>
                <dt>"Patient"</dt>
                <dd>{patient}</dd>
                <dt>"Queue Position"</dt>
                <dd>{b.queue_position.map(|p| format!("#{p}")).unwrap_or_default()}</dd>
                <dt>"Estimated Wait"</dt>
                <dd>{b.estimated_wait_time.map(|m| format!("~{m} min")).unwrap_or_default()}</dd>
            </dl>
            <section class="booking-detail__instructions">
                <h2>"Important Instructions"</h2>
                <ul>{VISIT_INSTRUCTIONS.into_iter().map(|line| view! { <li>{line}</li> }).collect::<Vec<_>>()}</ul>
            </section>
            <p class="booking-detail__summary">{summary}</p>
        }
    };

    view! {
        <div class="booking-detail">
            <a class="back-link" href=paths::HOME>"← Home"</a>
            {move || {
                if loading.get() {
                    view! { <LoadingSpinner message="Loading booking details..."/> }.into_any()
                } else if let Some(b) = booking.get() {
                    details(b).into_any()
                } else {
                    view! {
                        <div class="empty-state">
                            <h2>"Booking not found"</h2>
                            <a class="btn" href=paths::HOME>"Go to Home"</a>
                        </div>
                    }
                        .into_any()
                }
            }}
            <div class="booking-detail__actions">
                <button class="btn" on:click=move |_| print_page()>"Print"</button>
                <a class="btn btn--primary" href=paths::MY_BOOKINGS>"My Bookings"</a>
            </div>
        </div>
    }
}
