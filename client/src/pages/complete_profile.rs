//! Three-step patient profile wizard (personal, medical, confirm).
//!
//! SYSTEM CONTEXT
//! ==============
//! Patients land here until `is_profile_complete` is set. Saving the profile
//! flips that flag on the shared session, which the route guard observes,
//! so the rest of the app unlocks without a reload.

#[cfg(test)]
#[path = "complete_profile_test.rs"]
mod complete_profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use time::Date;

use crate::net::types::{Gender, NewPatientProfile};
use crate::routing::paths;
use crate::state::auth::AuthState;
use crate::util::age::{calculate_age, is_valid_date_of_birth, parse_date_of_birth};
use crate::util::validators::{format_phone_number, is_valid_indian_phone};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileStep {
    #[default]
    Personal,
    Medical,
    Confirm,
}

impl ProfileStep {
    pub const COUNT: u8 = 3;

    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::Personal => 1,
            Self::Medical => 2,
            Self::Confirm => 3,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Medical => "Medical",
            Self::Confirm => "Confirm",
        }
    }

    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Personal => "Let's set up your health profile",
            Self::Medical => "Medical basics",
            Self::Confirm => "Review & confirm",
        }
    }

    /// Following step; the last step stays put.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Personal => Self::Medical,
            Self::Medical | Self::Confirm => Self::Confirm,
        }
    }

    /// Preceding step; the first step stays put.
    #[must_use]
    pub fn back(self) -> Self {
        match self {
            Self::Personal | Self::Medical => Self::Personal,
            Self::Confirm => Self::Medical,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileInput {
    pub full_name: String,
    pub date_of_birth: String,
    pub gender: Option<Gender>,
    pub contact_number: String,
}

/// Check the fields owned by `step`.
///
/// # Errors
///
/// Returns the message for the first invalid field.
pub fn validate_step(step: ProfileStep, input: &ProfileInput, today: Date) -> Result<(), &'static str> {
    match step {
        ProfileStep::Personal => {
            if input.full_name.trim().is_empty() {
                return Err("Please enter your full name");
            }
            if input.date_of_birth.trim().is_empty() {
                return Err("Please select your date of birth");
            }
            if !is_valid_date_of_birth(&input.date_of_birth, today) {
                return Err("Please enter a valid date of birth");
            }
            Ok(())
        }
        ProfileStep::Medical => input.gender.map(|_| ()).ok_or("Please select your gender"),
        ProfileStep::Confirm => {
            let contact = input.contact_number.trim();
            if contact.is_empty() || is_valid_indian_phone(contact) {
                Ok(())
            } else {
                Err("Please enter a valid 10-digit mobile number")
            }
        }
    }
}

/// Validate every step and build the create request.
///
/// # Errors
///
/// Returns the message for the first invalid field.
pub fn build_profile(input: &ProfileInput, today: Date) -> Result<NewPatientProfile, &'static str> {
    for step in [ProfileStep::Personal, ProfileStep::Medical, ProfileStep::Confirm] {
        validate_step(step, input, today)?;
    }
    let gender = input.gender.ok_or("Please select your gender")?;
    let contact = input.contact_number.trim();
    Ok(NewPatientProfile {
        full_name: input.full_name.trim().to_owned(),
        date_of_birth: input.date_of_birth.trim().to_owned(),
        gender,
        contact_number: (!contact.is_empty()).then(|| format_phone_number(contact)),
        emergency_contact: None,
    })
}

#[component]
pub fn CompleteProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let step = RwSignal::new(ProfileStep::Personal);
    let input = RwSignal::new(ProfileInput::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let today = crate::util::age::today().unwrap_or(Date::MIN);

    let navigate_home = navigate.clone();
    Effect::new(move || {
        if auth.with(AuthState::is_profile_complete) {
            navigate_home(paths::HOME, NavigateOptions::default());
        }
    });

    let age = move || {
        input.with(|i| parse_date_of_birth(&i.date_of_birth).and_then(|dob| calculate_age(dob, today)))
    };

    let on_next = move |_| match input.with(|i| validate_step(step.get(), i, today)) {
        Ok(()) => {
            error.set(String::new());
            step.update(|s| *s = s.next());
        }
        Err(message) => error.set(message.to_owned()),
    };

    let on_submit = move |_| {
        if busy.get() {
            return;
        }
        let profile = match input.with(|i| build_profile(i, today)) {
            Ok(profile) => profile,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_patient_profile(&profile).await {
                    Ok(_) => {
                        let update = crate::net::types::UserUpdate {
                            is_profile_complete: Some(true),
                            ..crate::net::types::UserUpdate::default()
                        };
                        let saved =
                            auth.try_update(|a| a.update_user(&crate::util::storage::BrowserStorage, update));
                        if let Some(Err(e)) = saved {
                            leptos::logging::warn!("{e}");
                        }
                        navigate(paths::HOME, NavigateOptions::default());
                    }
                    Err(e) => error.set(e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (profile, &navigate);
    };

    let text_field = move |update: fn(&mut ProfileInput, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            input.update(|i| update(i, value));
        }
    };

    let personal = move || {
        view! {
            <label class="profile-form__label">
                "Email Address"
                <input
                    class="profile-form__input"
                    type="email"
                    readonly
                    prop:value=move || auth.with(|a| a.email().unwrap_or_default().to_owned())
                />
            </label>
            <label class="profile-form__label">
                "Full Name"
                <input
                    class="profile-form__input"
                    type="text"
                    placeholder="Enter your full name"
                    prop:value=move || input.with(|i| i.full_name.clone())
                    on:input=text_field(|i, v| i.full_name = v)
                />
            </label>
            <label class="profile-form__label">
                "Date of Birth"
                <input
                    class="profile-form__input"
                    type="date"
                    max=crate::util::age::iso_date(today)
                    prop:value=move || input.with(|i| i.date_of_birth.clone())
                    on:input=text_field(|i, v| i.date_of_birth = v)
                />
            </label>
            {move || age().map(|years| view! { <p class="profile-form__age">{format!("Age: {years} years")}</p> })}
        }
    };

    let medical = move || {
        view! {
            <div class="profile-form__genders">
                {Gender::ALL
                    .into_iter()
                    .map(|gender| {
                        view! {
                            <button
                                type="button"
                                class="gender-option"
                                class:gender-option--selected=move || input.with(|i| i.gender == Some(gender))
                                on:click=move |_| input.update(|i| i.gender = Some(gender))
                            >
                                {gender.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
    };

    let confirm = move || {
        let summary = input.get();
        view! {
            <label class="profile-form__label">
                "Contact Number (optional)"
                <input
                    class="profile-form__input"
                    type="tel"
                    placeholder="Enter your phone number"
                    prop:value=move || input.with(|i| i.contact_number.clone())
                    on:input=text_field(|i, v| i.contact_number = v)
                />
            </label>
            <dl class="profile-form__summary">
                <dt>"Name"</dt>
                <dd>{summary.full_name.trim().to_owned()}</dd>
                <dt>"Date of Birth"</dt>
                <dd>
                    {parse_date_of_birth(&summary.date_of_birth)
                        .map(crate::util::age::format_date)
                        .unwrap_or_default()}
                </dd>
                <dt>"Gender"</dt>
                <dd>{summary.gender.map(Gender::label).unwrap_or_default()}</dd>
            </dl>
        }
    };

    view! {
        <div class="profile-page">
            <div class="profile-card">
                <p class="profile-card__step">
                    {move || format!("Step {} of {} · {}", step.get().number(), ProfileStep::COUNT, step.get().label())}
                </p>
                <h1>{move || step.get().heading()}</h1>
                <div class="profile-form">
                    {move || match step.get() {
                        ProfileStep::Personal => personal().into_any(),
                        ProfileStep::Medical => medical().into_any(),
                        ProfileStep::Confirm => confirm().into_any(),
                    }}
                </div>
                <Show when=move || !error.get().is_empty()>
                    <p class="profile-form__error">{move || error.get()}</p>
                </Show>
                <div class="profile-card__actions">
                    <Show when=move || step.get() != ProfileStep::Personal>
                        <button class="btn" on:click=move |_| step.update(|s| *s = s.back())>
                            "Back"
                        </button>
                    </Show>
                    <Show
                        when=move || step.get() == ProfileStep::Confirm
                        fallback=move || view! { <button class="btn btn--primary" on:click=on_next>"Continue"</button> }
                    >
                        <button class="btn btn--primary" disabled=move || busy.get() on:click=on_submit.clone()>
                            {move || if busy.get() { "Saving..." } else { "Complete Profile" }}
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
