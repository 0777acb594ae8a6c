//! Login page: email one-time-code request and verification.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route that renders without a session. A verified code yields a
//! token and user record which go straight into the shared `AuthState`; the
//! page then sends the user where their role belongs. The route guard would
//! reach the same place, this just skips the intermediate hop.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::Role;
use crate::routing::paths;
use crate::state::auth::AuthState;
use crate::util::validators::{is_valid_email, is_valid_otp, sanitize_email_input, sanitize_otp_input};

/// Where a freshly signed-in user lands.
#[must_use]
pub fn post_login_path(role: Role) -> &'static str {
    match role {
        Role::None => paths::SELECT_ROLE,
        Role::Patient => paths::HOME,
        Role::HospitalAdmin => paths::HOSPITAL_DASHBOARD,
    }
}

/// # Errors
///
/// Returns the message to show under the email field.
pub fn validate_email_input(raw: &str) -> Result<String, &'static str> {
    let email = sanitize_email_input(raw);
    if is_valid_email(&email) { Ok(email) } else { Err("Please enter a valid email address") }
}

/// # Errors
///
/// Returns the message to show under the code field.
pub fn validate_otp_input(raw: &str) -> Result<String, &'static str> {
    let otp = raw.trim();
    if is_valid_otp(otp) { Ok(otp.to_owned()) } else { Err("Please enter a valid 6-digit OTP") }
}

/// Seconds a freshly sent code blocks another resend.
pub const RESEND_COOLDOWN_SECS: u32 = 30;

/// One second of the resend countdown; stops at zero.
#[must_use]
pub fn tick_countdown(remaining: u32) -> u32 {
    remaining.saturating_sub(1)
}

#[must_use]
pub fn can_resend(remaining: u32, busy: bool) -> bool {
    remaining == 0 && !busy
}

#[must_use]
pub fn resend_label(remaining: u32) -> String {
    if remaining == 0 { "Resend OTP".to_owned() } else { format!("Resend in {remaining}s") }
}

/// Restart the resend countdown. Each start bumps `generation`, which ends any
/// countdown still ticking from an earlier send.
#[cfg(feature = "hydrate")]
fn start_resend_countdown(resend_in: RwSignal<u32>, generation: RwSignal<u64>) {
    let run = generation.get_untracked().wrapping_add(1);
    generation.set(run);
    resend_in.set(RESEND_COOLDOWN_SECS);
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
            if generation.try_get_untracked() != Some(run) {
                break;
            }
            let Some(remaining) = resend_in.try_get_untracked() else {
                break;
            };
            let next = tick_countdown(remaining);
            resend_in.set(next);
            if next == 0 {
                break;
            }
        }
    });
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Email,
    Code,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = leptos_router::hooks::use_navigate();
    let email = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let step = RwSignal::new(Step::Email);
    let info = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let resend_in = RwSignal::new(0_u32);
    let resend_generation = RwSignal::new(0_u64);

    let request_code = move || {
        if busy.get_untracked() {
            return;
        }
        let email_value = match validate_email_input(&email.get_untracked()) {
            Ok(value) => value,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());
        info.set("Sending code...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::send_otp(&email_value).await {
                Ok(_) => {
                    otp.set(String::new());
                    step.set(Step::Code);
                    info.set("OTP sent successfully to your email!".to_owned());
                    start_resend_countdown(resend_in, resend_generation);
                }
                Err(e) => {
                    info.set(String::new());
                    error.set(e.to_string());
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, otp, step, resend_generation);
    };

    let on_request_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        request_code();
    };

    let on_verify_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let otp_value = match validate_otp_input(&otp.get()) {
            Ok(value) => value,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        let email_value = email.get();
        busy.set(true);
        error.set(String::new());
        info.set("Verifying code...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::verify_otp(&email_value, &otp_value).await {
                    Ok(response) => {
                        let role = response.user.role;
                        let saved = auth.try_update(|a| {
                            a.login(&crate::util::storage::BrowserStorage, response.token, response.user)
                        });
                        if let Some(Err(e)) = saved {
                            leptos::logging::warn!("{e}");
                        }
                        busy.set(false);
                        navigate(post_login_path(role), leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(String::new());
                        error.set(e.to_string());
                        otp.set(String::new());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, otp_value, auth, &navigate);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"HABS"</h1>
                <p class="login-card__subtitle">"Hospital Appointment Booking"</p>
                <Show
                    when=move || step.get() == Step::Code
                    fallback=move || {
                        view! {
                            <form class="login-form" on:submit=on_request_code>
                                <input
                                    class="login-input"
                                    type="email"
                                    placeholder="you@example.com"
                                    prop:value=move || email.get()
                                    on:input=move |ev| {
                                        email.set(sanitize_email_input(&event_target_value(&ev)));
                                        error.set(String::new());
                                    }
                                />
                                <button class="login-button" type="submit" disabled=move || busy.get()>
                                    {move || if busy.get() { "Sending..." } else { "Send OTP" }}
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="login-form" on:submit=on_verify_code.clone()>
                        <p class="login-card__hint">
                            "We've sent a 6-digit code to " <strong>{move || email.get()}</strong>
                        </p>
                        <input
                            class="login-input login-input--code"
                            type="text"
                            inputmode="numeric"
                            maxlength="6"
                            placeholder="123456"
                            prop:value=move || otp.get()
                            on:input=move |ev| {
                                otp.set(sanitize_otp_input(&event_target_value(&ev)));
                                error.set(String::new());
                            }
                        />
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            "Verify & Sign In"
                        </button>
                        <div class="login-form__links">
                            <button
                                class="login-link"
                                type="button"
                                disabled=move || !can_resend(resend_in.get(), busy.get())
                                on:click=move |_| {
                                    if can_resend(resend_in.get_untracked(), busy.get_untracked()) {
                                        request_code();
                                    }
                                }
                            >
                                {move || resend_label(resend_in.get())}
                            </button>
                            <button
                                class="login-link"
                                type="button"
                                on:click=move |_| {
                                    step.set(Step::Email);
                                    info.set(String::new());
                                    error.set(String::new());
                                }
                            >
                                "Change email"
                            </button>
                        </div>
                    </form>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
            </div>
        </div>
    }
}
