//! Slot booking dialog collecting the attending patient's details.

#[cfg(test)]
#[path = "booking_form_test.rs"]
mod booking_form_test;

use leptos::prelude::*;

use crate::net::types::{Gender, NewBooking, Slot, WalkInPatient};
use crate::util::validators::{format_phone_number, is_valid_indian_phone};

/// Raw form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingInput {
    pub name: String,
    pub phone: String,
    pub age: String,
    pub gender: String,
    pub symptoms: String,
}

/// Validate the form and build the booking request for `slot_id`.
///
/// # Errors
///
/// Returns the message to show next to the form.
pub fn validate_booking_input(slot_id: &str, input: &BookingInput) -> Result<NewBooking, &'static str> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err("Please enter the patient's name.");
    }
    if !is_valid_indian_phone(&input.phone) {
        return Err("Please enter a valid 10-digit mobile number.");
    }
    let age = match input.age.trim() {
        "" => None,
        raw => match raw.parse::<u8>() {
            Ok(age) if (1..=120).contains(&age) => Some(age),
            _ => return Err("Age must be between 1 and 120."),
        },
    };
    let gender = Gender::from_label(&input.gender).unwrap_or(Gender::Male);
    let symptoms = Some(input.symptoms.trim().to_owned()).filter(|s| !s.is_empty());

    Ok(NewBooking {
        slot_id: slot_id.to_owned(),
        user: WalkInPatient {
            name: name.to_owned(),
            phone: format_phone_number(&input.phone),
            age,
            gender,
        },
        symptoms,
    })
}

#[component]
pub fn BookingForm(booking_slot: Slot, hospital_name: String, on_close: Callback<()>) -> impl IntoView {
    let input = RwSignal::new(BookingInput { gender: Gender::Male.label().to_owned(), ..BookingInput::default() });
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let slot_id = booking_slot.id.clone();
    let when = booking_slot.time_range();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let booking = match input.with(|i| validate_booking_input(&slot_id, i)) {
            Ok(booking) => booking,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_booking(&booking).await {
                Ok(created) => {
                    on_close.run(());
                    // Hard navigation so the detail page loads fresh queue data.
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&crate::routing::paths::booking_path(&created.id));
                    }
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = booking;
    };

    let field = move |update: fn(&mut BookingInput, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            input.update(|i| update(i, value));
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Book Appointment"</h2>
                <p class="dialog__subtitle">{hospital_name} " · " {when}</p>
                <form class="booking-form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Full Name *"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Enter your name"
                            prop:value=move || input.with(|i| i.name.clone())
                            on:input=field(|i, v| i.name = v)
                        />
                    </label>
                    <label class="dialog__label">
                        "Phone Number *"
                        <input
                            class="dialog__input"
                            type="tel"
                            placeholder="10-digit mobile number"
                            prop:value=move || input.with(|i| i.phone.clone())
                            on:input=field(|i, v| i.phone = v)
                        />
                    </label>
                    <label class="dialog__label">
                        "Age"
                        <input
                            class="dialog__input"
                            type="number"
                            min="1"
                            max="120"
                            prop:value=move || input.with(|i| i.age.clone())
                            on:input=field(|i, v| i.age = v)
                        />
                    </label>
                    <label class="dialog__label">
                        "Gender"
                        <select class="dialog__input" on:change=field(|i, v| i.gender = v)>
                            {Gender::ALL
                                .into_iter()
                                .map(|g| view! { <option value=g.label()>{g.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Symptoms / Reason for Visit"
                        <textarea
                            class="dialog__input"
                            rows="3"
                            placeholder="Describe your symptoms..."
                            prop:value=move || input.with(|i| i.symptoms.clone())
                            on:input=field(|i, v| i.symptoms = v)
                        ></textarea>
                    </label>
                    <Show when=move || error.with(Option::is_some)>
                        <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Booking..." } else { "Confirm Booking" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
