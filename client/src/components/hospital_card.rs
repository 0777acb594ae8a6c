//! Summary card linking to a hospital's detail page.

#[cfg(test)]
#[path = "hospital_card_test.rs"]
mod hospital_card_test;

use leptos::prelude::*;

use crate::net::types::{FeeRange, Hospital};
use crate::routing::paths;

#[must_use]
pub fn fee_label(fees: &FeeRange) -> String {
    format!("₹{} - ₹{}", fees.min, fees.max)
}

#[must_use]
pub fn wait_label(hospital: &Hospital) -> String {
    format!("{} patients · ~{} min wait", hospital.queue_length, hospital.current_wait_time)
}

#[must_use]
pub fn rating_label(hospital: &Hospital) -> String {
    format!("{:.1}", hospital.average_rating())
}

#[component]
pub fn HospitalCard(hospital: Hospital) -> impl IntoView {
    let href = paths::hospital_path(&hospital.id);
    let fees = fee_label(&hospital.fee_range());
    let wait = wait_label(&hospital);
    let rating = rating_label(&hospital);
    let address = hospital.address().to_owned();
    let specialties = hospital.specialty_names();
    let emergency = hospital.is_emergency();
    let verified = hospital.verified;

    view! {
        <a class="hospital-card" href=href>
            <div class="hospital-card__header">
                <h3 class="hospital-card__name">{hospital.name}</h3>
                {verified.then(|| view! { <span class="hospital-card__badge">"Verified"</span> })}
                {emergency.then(|| view! { <span class="hospital-card__badge hospital-card__badge--emergency">"24x7 Emergency"</span> })}
            </div>
            <p class="hospital-card__address">{address}</p>
            <div class="hospital-card__meta">
                <span class="hospital-card__rating">"★ " {rating}</span>
                <span class="hospital-card__wait">{wait}</span>
                <span class="hospital-card__fees">{fees}</span>
            </div>
            <ul class="hospital-card__specialties">
                {specialties.into_iter().map(|name| view! { <li>{name}</li> }).collect::<Vec<_>>()}
            </ul>
        </a>
    }
}
