//! `prefers-reduced-motion` as a reactive signal
//!
//! The server always renders the animated variant; the browser reads the
//! query before its first render and keeps following the OS setting.

use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Current value of the query
pub fn prefers_reduced_motion() -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        web_sys::window()
            .and_then(|window| window.match_media(REDUCED_MOTION_QUERY).ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }
    #[cfg(feature = "ssr")]
    {
        false
    }
}

/// Signal that tracks the media query for the lifetime of the page
pub fn use_prefers_reduced_motion() -> ReadSignal<bool> {
    let (reduced, set_reduced) = signal(prefers_reduced_motion());

    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            if let Some(window) = web_sys::window()
                && let Ok(Some(media_query)) = window.match_media(REDUCED_MOTION_QUERY)
            {
                let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                    move |e: web_sys::MediaQueryListEvent| {
                        // The owning component may already be gone
                        let _ = set_reduced.try_set(e.matches());
                    },
                );

                let _ = media_query
                    .add_event_listener_with_callback("change", handler.as_ref().unchecked_ref());

                // Keep the closure alive
                handler.forget();
            }
        });
    }
    #[cfg(feature = "ssr")]
    let _ = set_reduced;

    reduced
}
