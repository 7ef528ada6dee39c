use leptos::prelude::*;

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "w-4 h-4",
            SpinnerSize::Medium => "w-6 h-6",
        }
    }
}

/// Ring spinner shown inside buttons while a request is in flight
#[component]
pub fn Spinner(
    #[prop(default = SpinnerSize::Medium)]
    size: SpinnerSize,
    /// Border color classes
    #[prop(default = "border-white border-t-transparent")]
    color: &'static str,
) -> impl IntoView {
    let class = format!(
        "{} border-2 {} rounded-full animate-spin",
        size.class(),
        color
    );

    view! {
        <div class=class role="status" aria-live="polite">
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}
