use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon path data, one of [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            focusable="false"
        >
            <path d=name />
        </svg>
    }
}

/// Stroke paths on a 24x24 grid
pub mod icons {
    pub const CHECK: &str = "M5 12l5 5L20 7";
    pub const COPY: &str = "M9 9h11v11H9zM5 15H4V4h11v1";
    pub const MENU: &str = "M4 6h16M4 12h16M4 18h16";
    pub const X: &str = "M6 6l12 12M18 6L6 18";
    pub const ALERT_CIRCLE: &str = "M12 3a9 9 0 1 0 0 18a9 9 0 1 0 0-18zM12 8v4M12 16h.01";
    pub const ARROW_RIGHT: &str = "M5 12h14M13 6l6 6-6 6";
    pub const REPLAY: &str = "M4 4v6h6M4.5 15a8 8 0 1 0 1.9-8.3L4 10";
    pub const SHIELD: &str = "M12 3l8 3v6c0 5-3.5 8-8 9c-4.5-1-8-4-8-9V6z";
    pub const DOCUMENT_TEXT: &str = "M7 3h7l5 5v13H7zM14 3v5h5M10 13h6M10 17h6";
}
