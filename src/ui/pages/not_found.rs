//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found"/>

        <div class="min-h-screen bg-[#4A2A5D] flex flex-col items-center justify-center p-4">
            <div class="w-full max-w-xl bg-white rounded-3xl p-8 sm:p-12 shadow-xl text-center">
                <h1 class="text-6xl font-bold text-[#4A2A5D] mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-gray-900 mb-2">
                    "Page Not Found"
                </h2>

                <p class="text-gray-600 mb-8">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="inline-flex items-center justify-center rounded-xl bg-[#4A2A5D] px-6 py-3 text-sm font-semibold text-white hover:bg-[#5d3574] transition-colors"
                >
                    "Get Early Access"
                </A>
            </div>
        </div>
    }
}
