//! Clipboard buttons with a short "copied" confirmation

use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Write `text` to the clipboard. Resolves to false when the browser refuses
/// (no permission, insecure context, no clipboard API).
pub async fn copy_to_clipboard(text: String) -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        let Some(window) = leptos::web_sys::window() else {
            return false;
        };
        let promise = window.navigator().clipboard().write_text(&text);
        wasm_bindgen_futures::JsFuture::from(promise).await.is_ok()
    }
    #[cfg(feature = "ssr")]
    {
        let _ = text;
        false
    }
}

/// Copy `text`, then raise `flag` for `feedback_ms`. Failures leave the flag
/// untouched, and a flag raised by a later copy is not lowered early.
pub fn copy_with_feedback<T>(text: String, flag: RwSignal<T>, on: T, off: T, feedback_ms: u32)
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    #[cfg(not(feature = "ssr"))]
    leptos::task::spawn_local(async move {
        if !copy_to_clipboard(text).await {
            return;
        }
        if flag.try_set(on.clone()).is_some() {
            return;
        }
        gloo_timers::future::TimeoutFuture::new(feedback_ms).await;
        let _ = flag.try_update(|current| lower_flag(current, &on, off));
    });
    #[cfg(feature = "ssr")]
    let _ = (text, flag, on, off, feedback_ms);
}

/// Set `flag` to `off` if it still holds the value this copy `raised`
#[cfg_attr(feature = "ssr", allow(dead_code))]
fn lower_flag<T: PartialEq>(flag: &mut T, raised: &T, off: T) {
    if flag == raised {
        *flag = off;
    }
}

/// Small labelled copy chip used on the code surfaces of the demo panel
#[component]
pub fn CopyChip(
    /// Text placed on the clipboard
    #[prop(into)]
    text: Signal<String>,
    /// Label shown until a copy succeeds
    #[prop(into)]
    label: Signal<String>,
    #[prop(default = crate::core::terminal::COPY_LINE_FEEDBACK_MS)]
    feedback_ms: u32,
) -> impl IntoView {
    let copied = RwSignal::new(false);

    view! {
        <button
            type="button"
            class="copy-chip"
            title=move || label.get()
            aria-live="polite"
            on:click=move |_| {
                copy_with_feedback(text.get_untracked(), copied, true, false, feedback_ms)
            }
        >
            <Icon name=icons::COPY class="w-3.5 h-3.5"/>
            {move || if copied.get() { "Copied".to_string() } else { label.get() }}
        </button>
    }
}
