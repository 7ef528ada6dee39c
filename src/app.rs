use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::EmailJsConfig;
use crate::ui::pages::{EarlyAccessPage, NotFoundPage};

/// Document shell rendered on the server.
///
/// EmailJS settings are taken from the request context (see `main.rs`) and written
/// into `<meta>` tags so the hydrated page can read them back.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = use_context::<EmailJsConfig>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {config
                    .meta_entries()
                    .into_iter()
                    .map(|(name, content)| view! { <meta name=name content=content/> })
                    .collect_view()}
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/early-access.css"/>

        // default title, overridden by pages
        <Title text="Early Access"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=EarlyAccessPage/>
                </Routes>
            </main>
        </Router>
    }
}
