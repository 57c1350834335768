//! Typewriter terminal for the quickstart page

use leptos::prelude::*;

use crate::core::terminal::{
    COPY_ALL_FEEDBACK_MS, COPY_LINE_FEEDBACK_MS, REVEAL_INTERVAL_MS, RevealState, TERMINAL_SCRIPT,
    all_commands,
};
use crate::ui::common::copy_with_feedback;
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::use_prefers_reduced_motion;

/// Reveals the scripted CLI session one line at a time
#[component]
pub fn Terminal() -> impl IntoView {
    let reduced = use_prefers_reduced_motion();
    let reveal = RwSignal::new(RevealState::new(reduced.get_untracked()));
    let copied_all = RwSignal::new(false);
    let copied_line = RwSignal::new(None::<usize>);

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::callback::Timeout;

        // At most one pending reveal; storing a new one drops (cancels) the old
        let ticker = StoredValue::new_local(None::<Timeout>);

        Effect::new(move |_| {
            let state = reveal.get();
            if reduced.get() {
                ticker.set_value(None);
                if !state.is_complete() {
                    reveal.update(RevealState::reveal_all);
                }
                return;
            }
            if state.is_complete() {
                ticker.set_value(None);
                return;
            }
            ticker.set_value(Some(Timeout::new(REVEAL_INTERVAL_MS, move || {
                let _ = reveal.try_update(|r| r.advance());
            })));
        });
    }
    #[cfg(feature = "ssr")]
    let _ = REVEAL_INTERVAL_MS;

    let replay = move |_| {
        copied_all.set(false);
        copied_line.set(None);
        reveal.update(RevealState::replay);
    };

    view! {
        <div class="terminal">
            <div class="terminal-titlebar">
                <div class="flex items-center gap-2">
                    <span class="terminal-dot bg-red-500"></span>
                    <span class="terminal-dot bg-yellow-500"></span>
                    <span class="terminal-dot bg-green-500"></span>
                </div>
                <div class="flex items-center gap-2">
                    <button
                        type="button"
                        class="terminal-action"
                        aria-label="Replay commands"
                        title="Replay"
                        on:click=replay
                    >
                        <Icon name=icons::REPLAY class="w-4 h-4"/>
                    </button>
                    <button
                        type="button"
                        class="terminal-action"
                        aria-label="Copy all commands"
                        title="Copy all"
                        on:click=move |_| {
                            copy_with_feedback(all_commands(), copied_all, true, false, COPY_ALL_FEEDBACK_MS)
                        }
                    >
                        {move || {
                            let name = if copied_all.get() { icons::CHECK } else { icons::COPY };
                            view! { <Icon name=name class="w-4 h-4"/> }
                        }}
                    </button>
                </div>
            </div>

            <div class="p-4">
                <div class="space-y-2" role="status" aria-live="polite">
                    {TERMINAL_SCRIPT
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            let command = step.command;
                            view! {
                                <div
                                    class="terminal-line group"
                                    class:terminal-line-hidden=move || !reveal.with(|r| r.is_visible(i))
                                >
                                    <span class="terminal-prompt">"$"</span>
                                    <pre class="whitespace-pre-wrap">{step.display()}</pre>
                                    <button
                                        type="button"
                                        class="terminal-line-copy"
                                        aria-label=format!("Copy command {}", i + 1)
                                        title="Copy"
                                        on:click=move |_| {
                                            copy_with_feedback(
                                                command.to_string(),
                                                copied_line,
                                                Some(i),
                                                None,
                                                COPY_LINE_FEEDBACK_MS,
                                            )
                                        }
                                    >
                                        {move || {
                                            let name = if copied_line.get() == Some(i) {
                                                icons::CHECK
                                            } else {
                                                icons::COPY
                                            };
                                            view! { <Icon name=name class="w-4 h-4"/> }
                                        }}
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
