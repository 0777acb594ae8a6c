//! The signed-in patient's bookings with cancellation.

#[cfg(test)]
#[path = "my_bookings_test.rs"]
mod my_bookings_test;

use leptos::prelude::*;

use crate::components::loading_spinner::LoadingSpinner;
use crate::net::types::{Booking, BookingStatus, Slot};
use crate::routing::paths;
use crate::util::age::format_api_date;

#[must_use]
pub fn bookings_heading(count: usize) -> String {
    if count == 1 { "1 Booking Found".to_owned() } else { format!("{count} Bookings Found") }
}

#[must_use]
pub fn status_class(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Confirmed => "status status--confirmed",
        BookingStatus::Completed => "status status--completed",
        BookingStatus::Cancelled => "status status--cancelled",
        BookingStatus::Other => "status",
    }
}

fn confirm_cancel() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message("Are you sure you want to cancel this booking?").ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

#[component]
pub fn MyBookingsPage() -> impl IntoView {
    let bookings = RwSignal::new(Vec::<Booking>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let refresh = RwSignal::new(0_u32);

    Effect::new(move || {
        refresh.track();
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::my_bookings().await {
                Ok(found) => bookings.set(found),
                Err(e) => error.set(format!("Error fetching your bookings: {e}")),
            }
            loading.set(false);
        });
    });

    let cancel = move |id: String| {
        if !confirm_cancel() {
            return;
        }
        error.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::cancel_booking(&id).await {
                Ok(()) => refresh.update(|n| *n += 1),
                Err(e) => error.set(e.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    let cards = move || {
        bookings
            .get()
            .into_iter()
            .map(|b| {
                let id = b.id.clone();
                let href = paths::booking_path(&b.id);
                let hospital = b.hospital.as_ref().map_or_else(|| "Hospital".to_owned(), |h| h.name.clone());
                let date = b.appointment_date.as_deref().map(format_api_date).unwrap_or_default();
                let time = b.slot.as_ref().map(Slot::time_range).unwrap_or_default();
                let token = b.token_number.map(|t| format!("#{t}")).unwrap_or_default();
                let queue = b.is_cancellable().then(|| {
                    format!(
                        "Position #{} · ~{} min",
                        b.queue_position.unwrap_or_default(),
                        b.estimated_wait_time.unwrap_or_default()
                    )
                });
                let cancellable = b.is_cancellable();
                view! {
                    <article class="booking-card">
                        <header class="booking-card__header">
                            <a href=href>
                                <h3>{hospital}</h3>
                            </a>
                            <span class=status_class(b.status)>{b.status.label()}</span>
                        </header>
                        <dl class="booking-card__details">
                            <dt>"Date"</dt>
                            <dd>{date}</dd>
                            <dt>"Time"</dt>
                            <dd>{time}</dd>
                            <dt>"Token"</dt>
                            <dd>{token}</dd>
                        </dl>
                        {queue.map(|q| view! { <p class="booking-card__queue">{q}</p> })}
                        {b.symptoms.map(|s| view! { <p class="booking-card__symptoms">{s}</p> })}
                        {cancellable
                            .then(|| {
                                view! {
                                    <button class="btn btn--danger" on:click=move |_| cancel(id.clone())>
                                        "Cancel Booking"
                                    </button>
                                }
                            })}
                    </article>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="my-bookings-page">
            <header>
                <h1>"My Bookings"</h1>
            </header>
            <Show when=move || !error.get().is_empty()>
                <p class="my-bookings-page__error">{move || error.get()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner message="Fetching your bookings..."/> }>
                <Show
                    when=move || !bookings.with(Vec::is_empty)
                    fallback=|| {
                        view! {
                            <div class="empty-state">
                                <h3>"No bookings yet"</h3>
                                <a class="btn btn--primary" href=paths::HOSPITALS>"Find a Hospital"</a>
                            </div>
                        }
                    }
                >
                    <h2>{move || bookings_heading(bookings.with(Vec::len))}</h2>
                    <div class="my-bookings-page__list">{cards}</div>
                </Show>
            </Show>
        </div>
    }
}
