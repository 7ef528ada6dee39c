//! Inline alert used for form errors and the signup confirmation

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Alert variants
#[derive(Clone, Copy, PartialEq, Default)]
pub enum AlertVariant {
    #[default]
    Default,
    Destructive,
    Success,
}

impl AlertVariant {
    fn class(&self) -> &'static str {
        match self {
            AlertVariant::Default => "bg-gray-50 border-gray-200 text-gray-800",
            AlertVariant::Destructive => "bg-red-50 border-red-200 text-red-800",
            AlertVariant::Success => "bg-purple-50 border-purple-200 text-purple-800",
        }
    }

    fn icon(&self) -> Option<(&'static str, &'static str)> {
        match self {
            AlertVariant::Default => None,
            AlertVariant::Destructive => Some((icons::ALERT_CIRCLE, "h-5 w-5 text-red-600 mr-2")),
            AlertVariant::Success => Some((icons::CHECK_CIRCLE, "h-5 w-5 text-purple-600 mr-2")),
        }
    }
}

#[component]
pub fn Alert(
    #[prop(default = AlertVariant::Default)]
    variant: AlertVariant,
    children: Children,
) -> impl IntoView {
    let class = format!("flex items-center p-4 rounded-lg border {}", variant.class());
    let role = if variant == AlertVariant::Destructive {
        "alert"
    } else {
        "status"
    };

    view! {
        <div class=class role=role>
            {variant.icon().map(|(name, class)| view! { <Icon name=name class=class/> })}
            <div>{children()}</div>
        </div>
    }
}

/// Destructive alert bound to an optional message; hidden when `None`
#[component]
pub fn ErrorAlert(
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="mt-4">
                <Alert variant=AlertVariant::Destructive>
                    {move || error.get().unwrap_or_default()}
                </Alert>
            </div>
        </Show>
    }
}
