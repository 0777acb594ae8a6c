//! Hospital search results with specialty, emergency, and sort filters.
//!
//! DESIGN
//! ======
//! Filters live in local signals seeded from the query string; a specialty
//! picked through the symptom search takes precedence over the dropdown.
//! Every filter change issues a fresh request and a sequence number drops
//! responses that arrive after a newer request was sent.

#[cfg(test)]
#[path = "hospitals_test.rs"]
mod hospitals_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::hospital_card::HospitalCard;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::symptom_search::SymptomSearch;
use crate::net::types::{Hospital, HospitalQuery};
use crate::state::search::SearchState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HospitalSort {
    /// Server order.
    #[default]
    Relevance,
    Rating,
    WaitTime,
    Fees,
}

impl HospitalSort {
    pub const ALL: [Self; 4] = [Self::Relevance, Self::Rating, Self::WaitTime, Self::Fees];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Rating => "rating",
            Self::WaitTime => "waitTime",
            Self::Fees => "fees",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::Rating => "Rating",
            Self::WaitTime => "Wait Time",
            Self::Fees => "Fees",
        }
    }

    #[must_use]
    pub fn from_value(raw: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.value() == raw).unwrap_or_default()
    }
}

/// Order hospitals in place; ties keep server order.
pub fn sort_hospitals(hospitals: &mut [Hospital], sort: HospitalSort) {
    match sort {
        HospitalSort::Relevance => {}
        HospitalSort::Rating => hospitals.sort_by(|a, b| b.average_rating().total_cmp(&a.average_rating())),
        HospitalSort::WaitTime => hospitals.sort_by_key(|h| h.current_wait_time),
        HospitalSort::Fees => hospitals.sort_by_key(|h| h.fee_range().min),
    }
}

/// Combine the symptom-search specialty, dropdown specialty, and emergency flag.
#[must_use]
pub fn build_query(selected: Option<&str>, dropdown: &str, emergency: bool) -> HospitalQuery {
    let specialty = selected.filter(|s| !s.is_empty()).or(Some(dropdown).filter(|s| !s.is_empty()));
    HospitalQuery { specialty: specialty.map(str::to_owned), emergency, search: None }
}

/// Names for the specialty dropdown, in catalogue order, blanks skipped.
#[must_use]
pub fn specialty_options(search: &SearchState) -> Vec<String> {
    search
        .specialties
        .iter()
        .map(|sp| sp.name.clone())
        .filter(|name| !name.trim().is_empty())
        .collect()
}

#[must_use]
pub fn results_heading(count: usize) -> String {
    if count == 1 { "1 Hospital Found".to_owned() } else { format!("{count} Hospitals Found") }
}

#[component]
pub fn HospitalsPage() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let query = use_query_map();

    let specialty = RwSignal::new(query.with_untracked(|q| q.get("specialty").unwrap_or_default()));
    let emergency = RwSignal::new(query.with_untracked(|q| q.get("emergency").is_some_and(|v| v == "true")));
    let sort = RwSignal::new(HospitalSort::default());
    let hospitals = RwSignal::new(Vec::<Hospital>::new());
    let loading = RwSignal::new(true);
    let request_seq = RwSignal::new(0_u64);

    Effect::new(move || {
        let selected = search.with(|s| s.selected_specialty.clone());
        let request = build_query(selected.as_deref(), &specialty.get(), emergency.get());
        let seq = request_seq.get_untracked() + 1;
        request_seq.set(seq);
        loading.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::list_hospitals(&request).await;
            if request_seq.get_untracked() != seq {
                return;
            }
            match result {
                Ok(found) => hospitals.set(found),
                Err(e) => {
                    leptos::logging::warn!("hospital list failed: {e}");
                    hospitals.set(Vec::new());
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, hospitals);
    });

    let sorted = move || {
        let mut list = hospitals.get();
        sort_hospitals(&mut list, sort.get());
        list
    };

    let heading = move || match search.with(|s| s.selected_specialty.clone()) {
        Some(name) => format!("Showing {name} specialists near you"),
        None => "Discover the best healthcare facilities near you".to_owned(),
    };

    let clear_filters = move |_| {
        specialty.set(String::new());
        emergency.set(false);
        sort.set(HospitalSort::default());
        search.update(SearchState::clear);
    };

    view! {
        <div class="hospitals-page">
            <header class="hospitals-page__header">
                <h1>"Find Hospitals"</h1>
                <p>{heading}</p>
            </header>
            <SymptomSearch/>
            <div class="hospitals-page__body">
                <aside class="hospitals-page__filters">
                    <label class="filter">
                        "Specialty"
                        <select
                            class="filter__input"
                            prop:value=move || specialty.get()
                            on:change=move |ev| specialty.set(event_target_value(&ev))
                        >
                            <option value="">"All Specialties"</option>
                            {move || {
                                search
                                    .with(specialty_options)
                                    .into_iter()
                                    .map(|name| {
                                        let label = name.clone();
                                        view! { <option value=name>{label}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                    <label class="filter filter--checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || emergency.get()
                            on:change=move |ev| emergency.set(event_target_checked(&ev))
                        />
                        "24x7 Emergency Only"
                    </label>
                    <label class="filter">
                        "Sort By"
                        <select
                            class="filter__input"
                            prop:value=move || sort.get().value()
                            on:change=move |ev| sort.set(HospitalSort::from_value(&event_target_value(&ev)))
                        >
                            {HospitalSort::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.value()>{s.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </aside>
                <main class="hospitals-page__results">
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <LoadingSpinner message="Finding best hospitals for you..."/> }
                    >
                        <Show
                            when=move || !hospitals.with(Vec::is_empty)
                            fallback=move || {
                                view! {
                                    <div class="empty-state">
                                        <h3>"No Hospitals Found"</h3>
                                        <p>"Try adjusting your filters or search criteria"</p>
                                        <button class="btn" on:click=clear_filters>"Clear Filters"</button>
                                    </div>
                                }
                            }
                        >
                            <h2>{move || results_heading(hospitals.with(Vec::len))}</h2>
                            <div class="hospitals-page__grid">
                                {move || {
                                    sorted()
                                        .into_iter()
                                        .map(|hospital| view! { <HospitalCard hospital=hospital/> })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </Show>
                    </Show>
                </main>
            </div>
        </div>
    }
}
