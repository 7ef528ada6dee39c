use leptos::prelude::*;

/// SVG icon served from `public/icons`
#[component]
pub fn Icon(
    /// Icon name (file name without the .svg extension)
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

pub mod icons {
    pub const MAIL: &str = "mail";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const ALERT_CIRCLE: &str = "alert-circle";
}
