//! Single hospital view with dated slot list and booking.

#[cfg(test)]
#[path = "hospital_detail_test.rs"]
mod hospital_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::booking_form::BookingForm;
use crate::components::hospital_card::{fee_label, rating_label, wait_label};
use crate::components::loading_spinner::LoadingSpinner;
use crate::net::types::{Hospital, Slot};
use crate::routing::paths;
use crate::util::age::{iso_date, today};

/// Remaining capacity badge for a slot.
#[must_use]
pub fn availability_label(slot: &Slot) -> String {
    if slot.is_unlimited { "Open".to_owned() } else { format!("{} slots", slot.available_count) }
}

#[must_use]
pub fn book_button_label(slot: &Slot) -> &'static str {
    if slot.is_bookable() { "Book Now" } else { "Fully Booked" }
}

/// At or below this many open places a slot is shown as nearly full.
const LOW_AVAILABILITY: u32 = 5;

#[must_use]
pub fn is_low_availability(slot: &Slot) -> bool {
    !slot.is_unlimited && slot.available_count <= LOW_AVAILABILITY
}

#[component]
pub fn HospitalDetailPage() -> impl IntoView {
    let params = use_params_map();
    let hospital_id = move || params.with(|p| p.get("id").unwrap_or_default());

    let hospital = RwSignal::new(None::<Hospital>);
    let slots = RwSignal::new(Vec::<Slot>::new());
    let loading = RwSignal::new(true);
    let date = RwSignal::new(String::new());
    let min_date = RwSignal::new(String::new());
    let booking_slot = RwSignal::new(None::<Slot>);

    // Default the date picker to today once running in the browser.
    Effect::new(move || {
        let now = today().map(iso_date).unwrap_or_default();
        min_date.set(now.clone());
        date.set(now);
    });

    Effect::new(move || {
        let id = hospital_id();
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::get_hospital(&id).await {
                Ok(found) => hospital.set(Some(found)),
                Err(e) => {
                    leptos::logging::warn!("hospital {id} failed to load: {e}");
                    hospital.set(None);
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, hospital);
    });

    Effect::new(move || {
        let id = hospital_id();
        let day = date.get();
        if day.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_slots(&id, Some(&day)).await {
                Ok(found) => slots.set(found),
                Err(e) => {
                    leptos::logging::warn!("slots for {id} failed to load: {e}");
                    slots.set(Vec::new());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, slots);
    });

    let on_close = Callback::new(move |()| booking_slot.set(None));

    let slot_list = move || {
        slots
            .get()
            .into_iter()
            .map(|slot| {
                let bookable = slot.is_bookable();
                let badge = availability_label(&slot);
                let low = is_low_availability(&slot);
                let button = book_button_label(&slot);
                let doctor = slot.doctor.as_ref().map(|d| format!("Dr. {}", d.name));
                let time = slot.time_range();
                view! {
                    <li class="slot">
                        <span class="slot__time">{time}</span>
                        <span class="slot__badge" class:slot__badge--low=low>{badge}</span>
                        {doctor.map(|name| view! { <span class="slot__doctor">{name}</span> })}
                        <button
                            class="btn btn--primary"
                            disabled=!bookable
                            on:click=move |_| booking_slot.set(Some(slot.clone()))
                        >
                            {button}
                        </button>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    let details = move |h: Hospital| {
        let hours = h.opd_hours();
        let name = h.name.clone();
        view! {
            <header class="hospital-detail__header">
                <h1>{h.name.clone()}</h1>
                {h.verified.then(|| view! { <span class="badge">"Verified"</span> })}
                {h.is_emergency().then(|| view! { <span class="badge badge--emergency">"24x7 Emergency"</span> })}
                <p class="hospital-detail__address">{h.address().to_owned()}</p>
                <p class="hospital-detail__rating">
                    "★ " {rating_label(&h)} " (" {h.rating.as_ref().map_or(0, |r| r.count)} " reviews)"
                </p>
            </header>
            <dl class="hospital-detail__info">
                <dt>"OPD Hours"</dt>
                <dd>{format!("{} - {}", hours.start, hours.end)}</dd>
                <dt>"Current Queue"</dt>
                <dd>{wait_label(&h)}</dd>
                <dt>"Consultation Fee"</dt>
                <dd>{fee_label(&h.fee_range())}</dd>
                <dt>"Phone"</dt>
                <dd>{h.contact.as_ref().and_then(|c| c.phone.clone()).unwrap_or_default()}</dd>
            </dl>
            <ul class="hospital-detail__specialties">
                {h.specialty_names().into_iter().map(|s| view! { <li>{s}</li> }).collect::<Vec<_>>()}
            </ul>
            <section class="hospital-detail__slots">
                <div class="hospital-detail__slots-header">
                    <h2>"Available Slots"</h2>
                    <input
                        type="date"
                        min=move || min_date.get()
                        prop:value=move || date.get()
                        on:change=move |ev| date.set(event_target_value(&ev))
                    />
                </div>
                <Show
                    when=move || !slots.with(Vec::is_empty)
                    fallback=|| view! { <p class="empty-state">"No slots available for this date."</p> }
                >
                    <ul class="slot-list">{slot_list}</ul>
                </Show>
            </section>
            {move || {
                let name = name.clone();
                booking_slot
                    .get()
                    .map(|slot| view! { <BookingForm booking_slot=slot hospital_name=name on_close=on_close/> })
            }}
        }
    };

    view! {
        <div class="hospital-detail">
            <a class="back-link" href=paths::HOSPITALS>"← Back to Hospitals"</a>
            {move || {
                if loading.get() {
                    view! { <LoadingSpinner message="Loading hospital details..."/> }.into_any()
                } else if let Some(h) = hospital.get() {
                    details(h).into_any()
                } else {
                    view! {
                        <div class="empty-state">
                            <h2>"Hospital not found"</h2>
                            <a class="btn" href=paths::HOSPITALS>"Back to Hospitals"</a>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
