//! License and support contact page.
//!
//! Field values stay uncontrolled; they are read off the form element once,
//! at submit time. The page owns three pieces of state: the CAPTCHA token,
//! the submission lifecycle, and whatever errors the service reported.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlFormElement;

use crate::captcha::Recaptcha;
use crate::formspree::{
    self, ContactPayload, FieldError, SubmitError, SubmitState, field_error, submit_disabled,
};

#[component]
pub fn ContactPage() -> impl IntoView {
    let (state, set_state) = signal(SubmitState::Idle);
    let (captcha_token, set_captcha_token) = signal(String::new());
    let (errors, set_errors) = signal(Vec::<FieldError>::new());
    let (send_failed, set_send_failed) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submit_disabled(state.get(), &captcha_token.get()) {
            return;
        }
        let Some(form) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };
        let Some(payload) = ContactPayload::from_form(&form) else {
            return;
        };
        set_errors.set(Vec::new());
        set_send_failed.set(false);
        set_state.set(SubmitState::Submitting);
        spawn_local(async move {
            match formspree::submit(&payload).await {
                Ok(()) => set_state.set(SubmitState::Succeeded),
                Err(SubmitError::Validation(field_errors)) => {
                    set_errors.set(field_errors);
                    set_state.set(SubmitState::Idle);
                }
                Err(err) => {
                    web_sys::console::error_1(&JsValue::from_str(&format!(
                        "[contact] submission failed: {err}"
                    )));
                    set_send_failed.set(true);
                    set_state.set(SubmitState::Idle);
                }
            }
        });
    };

    view! {
        <Show
            when=move || state.get() != SubmitState::Succeeded
            fallback=|| view! { <SubmissionReceived /> }
        >
            <div class="contact">
                <div class="contact-inner">
                    <h1 class="contact-title">"License & Support"</h1>
                    <p class="contact-subtitle">
                        "Looking to purchase? Technical issue? Partnership inquiry? Let us know."
                    </p>
                    <p class="contact-trial">
                        <span class="trial-code">"FREE TRIAL: CYBER-DEMO-20"</span>
                    </p>

                    <form class="contact-form" on:submit=on_submit>
                        <input type="hidden" name="g-recaptcha-response" prop:value=captcha_token />

                        <div class="form-row">
                            <div class="form-field">
                                <label class="form-label" for="firstName">
                                    "First Name"
                                    <span class="form-required">"*"</span>
                                </label>
                                <input
                                    id="firstName"
                                    type="text"
                                    name="firstName"
                                    required
                                    class="form-input"
                                    placeholder="John"
                                />
                            </div>
                            <div class="form-field">
                                <label class="form-label" for="lastName">
                                    "Last Name"
                                    <span class="form-required">"*"</span>
                                </label>
                                <input
                                    id="lastName"
                                    type="text"
                                    name="lastName"
                                    required
                                    class="form-input"
                                    placeholder="Doe"
                                />
                            </div>
                        </div>

                        <div class="form-field">
                            <label class="form-label" for="email">
                                "Email Address"
                                <span class="form-required">"*"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                name="email"
                                required
                                class="form-input"
                                placeholder="you@example.com"
                            />
                            <FieldMessage errors=errors field="email" />
                        </div>

                        <div class="form-field">
                            <label class="form-label" for="hwid">"Hardware ID (HWID)"</label>
                            <input
                                id="hwid"
                                type="text"
                                name="hwid"
                                class="form-input form-input-optional"
                                placeholder="Found in App Settings (Required for License)"
                            />
                            <p class="form-hint">
                                "Only provide this if you are requesting a permanent license activation"
                            </p>
                        </div>

                        <div class="form-field">
                            <label class="form-label" for="subject">
                                "Subject"
                                <span class="form-required">"*"</span>
                            </label>
                            <input
                                id="subject"
                                type="text"
                                name="subject"
                                required
                                class="form-input"
                                placeholder="e.g. License Activation Issue"
                            />
                        </div>

                        <div class="form-field">
                            <label class="form-label" for="message">
                                "Message"
                                <span class="form-required">"*"</span>
                            </label>
                            <textarea
                                id="message"
                                name="message"
                                required
                                rows="5"
                                class="form-input"
                                placeholder="Describe your request..."
                            ></textarea>
                            <FieldMessage errors=errors field="message" />
                        </div>

                        <div class="form-captcha">
                            <Recaptcha on_token=move |token: String| set_captcha_token.set(token) />
                        </div>

                        <button
                            type="submit"
                            class="btn btn-primary btn-submit"
                            prop:disabled=move || submit_disabled(state.get(), &captcha_token.get())
                        >
                            {move || {
                                if state.get() == SubmitState::Submitting {
                                    "Sending..."
                                } else {
                                    "Send Message"
                                }
                            }}
                        </button>

                        <Show when=move || send_failed.get()>
                            <p class="form-failure">
                                "Error detected. Check connection and try again."
                            </p>
                        </Show>
                    </form>
                </div>
            </div>
        </Show>
    }
}

/// Inline validation message for one field, when the service rejected it.
#[component]
fn FieldMessage(errors: ReadSignal<Vec<FieldError>>, field: &'static str) -> impl IntoView {
    view! {
        {move || {
            field_error(&errors.get(), field)
                .map(|message| view! { <p class="form-field-error">{message.to_owned()}</p> })
        }}
    }
}

/// Rendered in place of the form once the service accepts a submission.
#[component]
fn SubmissionReceived() -> impl IntoView {
    view! {
        <div class="contact contact-received">
            <div class="received-mark">"✓"</div>
            <h2 class="received-title">"Message Sent!"</h2>
            <p class="received-text">"We'll get back to you via email shortly."</p>
            <a href="/" class="btn btn-secondary">"Return Home"</a>
        </div>
    }
}
