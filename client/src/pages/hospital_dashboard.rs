//! Hospital admin dashboard: daily bookings, status counts, queue update.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only reachable by hospital admins. Booking counts are derived locally from
//! the fetched list; the queue form is prefilled from them (fifteen minutes
//! per confirmed patient) and can be edited before it is pushed back to the
//! hospital record.

#[cfg(test)]
#[path = "hospital_dashboard_test.rs"]
mod hospital_dashboard_test;

use leptos::prelude::*;

use crate::components::loading_spinner::LoadingSpinner;
use crate::net::types::{Booking, BookingStats, Hospital, QueueUpdate};
use crate::util::age::{iso_date, today};

/// Parse a number input, treating anything unparseable as zero.
#[must_use]
pub fn parse_count(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// Whether a response for request `seq` is still the latest one issued.
/// Older responses are dropped so they cannot overwrite newer figures.
#[must_use]
pub fn is_current_request(latest: u64, seq: u64) -> bool {
    latest == seq
}

#[must_use]
pub fn stat_cards(stats: &BookingStats) -> [(&'static str, usize); 4] {
    [
        ("Total Bookings", stats.total),
        ("Confirmed", stats.confirmed),
        ("Completed", stats.completed),
        ("Cancelled", stats.cancelled),
    ]
}

#[component]
pub fn HospitalDashboardPage() -> impl IntoView {
    let hospitals = RwSignal::new(Vec::<Hospital>::new());
    let selected = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let bookings = RwSignal::new(Vec::<Booking>::new());
    let loading = RwSignal::new(false);
    let queue = RwSignal::new(QueueUpdate::default());
    let message = RwSignal::new(String::new());
    let request_seq = RwSignal::new(0_u64);
    let stats = Memo::new(move |_| bookings.with(|b| BookingStats::from_bookings(b)));

    Effect::new(move || {
        date.set(today().map(iso_date).unwrap_or_default());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_hospitals(&crate::net::types::HospitalQuery::default()).await {
                Ok(found) => hospitals.set(found),
                Err(e) => message.set(format!("Failed to load hospitals: {e}")),
            }
        });
    });

    Effect::new(move || {
        let hospital_id = selected.get();
        let day = date.get();
        if hospital_id.is_empty() {
            return;
        }
        let seq = request_seq.get_untracked() + 1;
        request_seq.set(seq);
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let day = Some(day.as_str()).filter(|d| !d.is_empty());
            let result = crate::net::api::hospital_bookings(&hospital_id, day).await;
            if !is_current_request(request_seq.get_untracked(), seq) {
                return;
            }
            match result {
                Ok(found) => {
                    queue.set(BookingStats::from_bookings(&found).queue_update());
                    bookings.set(found);
                }
                Err(e) => {
                    leptos::logging::warn!("bookings for {hospital_id} failed to load: {e}");
                    message.set("Failed to fetch bookings".to_owned());
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (day, seq);
    });

    let on_update_queue = move |_| {
        let hospital_id = selected.get_untracked();
        let update = queue.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_queue(&hospital_id, &update).await {
                Ok(()) => message.set("Queue information updated".to_owned()),
                Err(_) => message.set("Failed to update queue".to_owned()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (hospital_id, update);
    };

    let rows = move || {
        bookings
            .get()
            .into_iter()
            .map(|b| {
                let token = b.token_number.map(|t| format!("#{t}")).unwrap_or_default();
                let patient = b.patient_name().unwrap_or("Walk-in").to_owned();
                let phone = b.user.as_ref().and_then(|u| u.phone.clone()).unwrap_or_default();
                let time = b.slot.as_ref().map(crate::net::types::Slot::time_range).unwrap_or_default();
                view! {
                    <tr>
                        <td>{token}</td>
                        <td>{patient}</td>
                        <td>{phone}</td>
                        <td>{time}</td>
                        <td>{b.symptoms.unwrap_or_default()}</td>
                        <td><span class="status">{b.status.label()}</span></td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Hospital Dashboard"</h1>
                <p>"Manage appointments and queue information"</p>
            </header>
            <label class="filter">
                "Select Hospital"
                <select class="filter__input" on:change=move |ev| selected.set(event_target_value(&ev))>
                    <option value="">"Choose a hospital..."</option>
                    {move || {
                        hospitals
                            .get()
                            .into_iter()
                            .map(|h| view! { <option value=h.id>{h.name}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>
            <Show when=move || !message.get().is_empty()>
                <p class="dashboard-page__message">{move || message.get()}</p>
            </Show>
            <Show when=move || !selected.get().is_empty()>
                <div class="dashboard-page__stats">
                    {move || {
                        stat_cards(&stats.get())
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="stat-card">
                                        <span class="stat-card__label">{label}</span>
                                        <span class="stat-card__value">{value}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <section class="queue-form">
                    <h2>"Queue Management"</h2>
                    <label class="filter">
                        "Current Queue Length"
                        <input
                            class="filter__input"
                            type="number"
                            min="0"
                            prop:value=move || queue.get().queue_length.to_string()
                            on:input=move |ev| {
                                let value = parse_count(&event_target_value(&ev));
                                queue.update(|q| q.queue_length = value);
                            }
                        />
                    </label>
                    <label class="filter">
                        "Current Wait Time (minutes)"
                        <input
                            class="filter__input"
                            type="number"
                            min="0"
                            prop:value=move || queue.get().current_wait_time.to_string()
                            on:input=move |ev| {
                                let value = parse_count(&event_target_value(&ev));
                                queue.update(|q| q.current_wait_time = value);
                            }
                        />
                    </label>
                    <button class="btn btn--primary" on:click=on_update_queue>"Update Queue"</button>
                </section>
                <section class="appointments">
                    <div class="appointments__header">
                        <h2>"Appointments"</h2>
                        <input
                            type="date"
                            prop:value=move || date.get()
                            on:change=move |ev| date.set(event_target_value(&ev))
                        />
                    </div>
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <LoadingSpinner message="Loading appointments..."/> }
                    >
                        <Show
                            when=move || !bookings.with(Vec::is_empty)
                            fallback=|| view! { <p class="empty-state">"No appointments for this date."</p> }
                        >
                            <table class="appointments__table">
                                <thead>
                                    <tr>
                                        <th>"Token"</th>
                                        <th>"Patient"</th>
                                        <th>"Phone"</th>
                                        <th>"Time"</th>
                                        <th>"Symptoms"</th>
                                        <th>"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>{rows}</tbody>
                            </table>
                        </Show>
                    </Show>
                </section>
            </Show>
        </div>
    }
}
