//! Free-text symptom search resolving to a specialty.
//!
//! DESIGN
//! ======
//! Suggestions come from a fixed list of common complaints so typing never
//! waits on the network. Submitting asks the API which specialty treats the
//! symptom; if that call fails the loaded specialty catalogue is searched
//! locally instead.

#[cfg(test)]
#[path = "symptom_search_test.rs"]
mod symptom_search_test;

use leptos::prelude::*;

use crate::net::types::Specialty;
use crate::state::search::SearchState;

pub const COMMON_SYMPTOMS: [&str; 12] = [
    "Fever",
    "Headache",
    "Cough",
    "Cold",
    "Stomach Pain",
    "Chest Pain",
    "Joint Pain",
    "Tooth Pain",
    "Skin Rash",
    "Back Pain",
    "Breathing Problem",
    "Ear Pain",
];

/// Number of quick-pick symptom chips shown under the input.
const QUICK_PICKS: usize = 6;

/// Common symptoms containing `input`; needs at least two characters.
#[must_use]
pub fn symptom_suggestions(input: &str) -> Vec<&'static str> {
    let needle = input.trim().to_lowercase();
    if needle.chars().count() < 2 {
        return Vec::new();
    }
    COMMON_SYMPTOMS
        .into_iter()
        .filter(|symptom| symptom.to_lowercase().contains(&needle))
        .collect()
}

/// Specialty to filter by: the API's first match, else a local catalogue match.
#[must_use]
pub fn best_specialty(found: Option<Vec<Specialty>>, catalogue: &SearchState, symptom: &str) -> Option<String> {
    match found {
        Some(found) => found.into_iter().next().map(|s| s.name),
        None => catalogue.matching(symptom).first().map(|s| s.name.clone()),
    }
}

#[component]
pub fn SymptomSearch(#[prop(optional)] on_search: Option<Callback<String>>) -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let term = RwSignal::new(String::new());
    let show_suggestions = RwSignal::new(false);
    let suggestions = Memo::new(move |_| term.with(|t| symptom_suggestions(t)));

    let run_search = Callback::new(move |raw: String| {
        let symptom = raw.trim().to_owned();
        if symptom.is_empty() {
            return;
        }
        term.set(symptom.clone());
        show_suggestions.set(false);
        search.update(|s| s.select_symptom(&symptom));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let found = match crate::net::api::search_specialties_by_symptom(&symptom).await {
                Ok(found) => Some(found),
                Err(e) => {
                    leptos::logging::warn!("symptom search failed: {e}");
                    None
                }
            };
            let specialty = search.with_untracked(|s| best_specialty(found, s, &symptom));
            search.update(|s| s.select_specialty(specialty));
            if let Some(on_search) = on_search {
                on_search.run(symptom);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = on_search;
    });

    view! {
        <div class="symptom-search">
            <div class="symptom-search__row">
                <input
                    class="symptom-search__input"
                    type="text"
                    placeholder="Search by symptom (e.g., fever, headache, chest pain...)"
                    prop:value=move || term.get()
                    on:input=move |ev| {
                        term.set(event_target_value(&ev));
                        show_suggestions.set(true);
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            run_search.run(term.get_untracked());
                        }
                    }
                />
                <button class="btn btn--primary" on:click=move |_| run_search.run(term.get_untracked())>
                    "Search"
                </button>
            </div>
            <Show when=move || show_suggestions.get() && !suggestions.with(Vec::is_empty)>
                <ul class="symptom-search__suggestions">
                    {move || {
                        suggestions
                            .get()
                            .into_iter()
                            .map(|symptom| {
                                view! {
                                    <li>
                                        <button on:click=move |_| run_search.run(symptom.to_owned())>
                                            {symptom}
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
            <div class="symptom-search__chips">
                {COMMON_SYMPTOMS
                    .into_iter()
                    .take(QUICK_PICKS)
                    .map(|symptom| {
                        view! {
                            <button class="chip" on:click=move |_| run_search.run(symptom.to_owned())>
                                {symptom}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
