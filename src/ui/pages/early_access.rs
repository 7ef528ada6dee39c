//! Early access landing page
//!
//! A single card with:
//! - "Early Access Now Open" badge
//! - Headline and pitch
//! - Email signup form, replaced by a confirmation once the signup went through
//! - Feature grid

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{Meta, Title};

use crate::core::{
    EmailJsConfig, EmailJsDispatcher, SUCCESS_MESSAGE, SignupAttempt, dispatch_signup,
};
use crate::ui::alert::{Alert, AlertVariant, ErrorAlert};
use crate::ui::icon::{Icon, icons};
use crate::ui::spinner::Spinner;

const FEATURES: [&str; 4] = [
    "Personalized Learning Path",
    "Smart Study Schedules",
    "Enhanced Memory Retention",
    "Progress Tracking",
];

const PITCH: &str = "Revolutionizing science education with spaced retrieval learning. \
    Join our early access program to transform how you learn and retain knowledge.";

#[component]
pub fn EarlyAccessPage() -> impl IntoView {
    view! {
        <Title text="Early Access - Master Science Through Smart Learning"/>
        <Meta name="description" content=PITCH/>

        <div class="min-h-screen bg-[#4A2A5D] flex items-center justify-center px-4 py-12 sm:px-6 lg:px-8">
            <div class="w-full max-w-xl bg-white rounded-3xl p-8 sm:p-12 shadow-xl">
                <div class="text-center mb-8">
                    <span class="inline-block px-4 py-1.5 rounded-full bg-[#4A2A5D]/10 text-[#4A2A5D] text-sm font-medium">
                        "Early Access Now Open"
                    </span>
                </div>

                <div class="text-center space-y-4 mb-8">
                    <h1 class="text-4xl sm:text-5xl font-bold">
                        <span class="text-gray-900">"Master Science" <br/> "Through"</span>
                        <span class="block text-[#4A2A5D] mt-2">"Smart Learning"</span>
                    </h1>
                    <p class="text-lg text-gray-600">{PITCH}</p>
                </div>

                <div class="mb-8">
                    <SignupForm/>
                </div>

                <FeatureGrid/>
            </div>
        </div>
    }
}

/// Email form and its confirmation
#[component]
fn SignupForm() -> impl IntoView {
    let attempt = RwSignal::new(SignupAttempt::new());

    let loading = Memo::new(move |_| attempt.with(SignupAttempt::is_loading));
    let submitted = Memo::new(move |_| attempt.with(SignupAttempt::is_submitted));
    let error = Signal::derive(move || attempt.with(SignupAttempt::error_message));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Validation errors are recorded by begin_submit; nothing to send then
        let Some(email) = attempt.try_update(SignupAttempt::begin_submit).flatten() else {
            return;
        };

        spawn_local(async move {
            let dispatcher = EmailJsDispatcher::new(EmailJsConfig::from_page());
            let payload = dispatcher.payload(email, local_timestamp());
            let outcome = dispatch_signup(&dispatcher, &payload).await;
            attempt.update(|state| state.finish(outcome));
        });
    };

    view! {
        <Show
            when=move || !submitted.get()
            fallback=|| view! {
                <Alert variant=AlertVariant::Success>{SUCCESS_MESSAGE}</Alert>
            }
        >
            <form on:submit=on_submit novalidate=true>
                <div class="flex flex-col sm:flex-row gap-4 p-2 bg-white rounded-2xl shadow-sm border border-gray-100">
                    <div class="relative flex-grow">
                        <Icon name=icons::MAIL class="absolute left-3 top-3 h-5 w-5 text-gray-400"/>
                        <input
                            type="email"
                            name="email"
                            autocomplete="email"
                            placeholder="Enter your email"
                            class="block w-full rounded-xl border border-gray-200 pl-10 py-3 text-gray-900
                                   focus:ring-2 focus:ring-[#4A2A5D] focus:border-[#4A2A5D]"
                            prop:value=move || attempt.with(|state| state.email().to_string())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                attempt.update(|state| state.set_email(value));
                            }
                            disabled=move || loading.get()
                        />
                    </div>
                    <button
                        type="submit"
                        class="inline-flex items-center justify-center rounded-xl bg-[#4A2A5D] px-6 py-3
                               text-sm font-semibold text-white shadow-sm hover:bg-[#5d3574]
                               focus:outline-none focus:ring-2 focus:ring-[#4A2A5D] focus:ring-offset-2
                               transition-all duration-200 disabled:opacity-70 disabled:cursor-not-allowed"
                        disabled=move || loading.get()
                    >
                        {move || {
                            if loading.get() {
                                view! { <Spinner/> }.into_any()
                            } else {
                                view! {
                                    "Get Early Access"
                                    <Icon name=icons::ARROW_RIGHT class="ml-2 h-4 w-4"/>
                                }.into_any()
                            }
                        }}
                    </button>
                </div>
                <ErrorAlert error=error/>
            </form>
        </Show>
    }
}

#[component]
fn FeatureGrid() -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 gap-4 text-center">
            {FEATURES
                .iter()
                .map(|feature| view! {
                    <div class="p-4 rounded-xl bg-[#4A2A5D]/5 border border-[#4A2A5D]/10">
                        <Icon name=icons::CHECK_CIRCLE class="h-5 w-5 text-[#4A2A5D] mx-auto mb-2"/>
                        <span class="text-sm text-gray-700">{*feature}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

/// Browser-local time of the signup, e.g. "1/2/2025, 10:00:00 AM"
#[cfg(not(feature = "ssr"))]
fn local_timestamp() -> String {
    js_sys::Date::new_0()
        .to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

// Submissions only run in the browser
#[cfg(feature = "ssr")]
fn local_timestamp() -> String {
    String::new()
}
