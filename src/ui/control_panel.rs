//! Interactive control panel in the landing page hero
//!
//! The panel state lives in a [`TourOrchestrator`]; this module only wires
//! browser timers, DOM events and the `prefers-reduced-motion` query to it,
//! and mirrors its [`PanelState`] into a signal after every change.

use leptos::prelude::*;

use crate::core::panel::{MAX_CANARY_PERCENT, MIN_CANARY_PERCENT};
use crate::core::{PanelState, PanelTab, PolicyView, RunStatus, SdkLanguage, TourOrchestrator};
use crate::ui::common::CopyChip;
use crate::ui::motion::use_prefers_reduced_motion;

#[cfg(not(feature = "ssr"))]
mod host {
    use gloo_timers::callback::Timeout;
    use std::rc::Rc;

    use crate::core::{TimerHost, TourAction};

    pub type Storage = leptos::prelude::LocalStorage;

    /// `setTimeout` backed host; each handle owns its browser timeout
    pub struct PanelTimers {
        dispatch: Rc<dyn Fn(TourAction)>,
    }

    impl PanelTimers {
        pub fn new(dispatch: impl Fn(TourAction) + 'static) -> Self {
            Self {
                dispatch: Rc::new(dispatch),
            }
        }
    }

    impl TimerHost for PanelTimers {
        type Handle = Timeout;

        fn set_timeout(&mut self, delay_ms: u32, action: TourAction) -> Timeout {
            let dispatch = Rc::clone(&self.dispatch);
            Timeout::new(delay_ms, move || dispatch(action))
        }

        fn clear_timeout(&mut self, handle: Timeout) {
            // Dropping a Timeout clears it
            drop(handle);
        }
    }
}

#[cfg(feature = "ssr")]
mod host {
    use crate::core::{TimerHost, TourAction};

    pub type Storage = leptos::prelude::SyncStorage;

    /// Server render: one static frame, nothing is ever scheduled
    pub struct PanelTimers;

    impl TimerHost for PanelTimers {
        type Handle = ();

        fn set_timeout(&mut self, _delay_ms: u32, _action: TourAction) {}

        fn clear_timeout(&mut self, _handle: ()) {}
    }
}

use host::PanelTimers;

type TourHandle = StoredValue<Option<TourOrchestrator<PanelTimers>>, host::Storage>;

/// Run `f` against the orchestrator and publish the resulting state
fn drive(
    tour: TourHandle,
    panel: RwSignal<PanelState>,
    f: impl FnOnce(&mut TourOrchestrator<PanelTimers>),
) {
    let snapshot = tour
        .try_update_value(|slot| {
            slot.as_mut().map(|orchestrator| {
                f(orchestrator);
                orchestrator.state().clone()
            })
        })
        .flatten();

    if let Some(state) = snapshot {
        let _ = panel.try_set(state);
    }
}

/// Tabbed demo panel with the automated tour
#[component]
pub fn ControlPanel() -> impl IntoView {
    let panel = RwSignal::new(PanelState::new());
    let reduced = use_prefers_reduced_motion();
    let tour: TourHandle = StoredValue::new_with_storage(None);

    #[cfg(not(feature = "ssr"))]
    let timers = PanelTimers::new(move |action| drive(tour, panel, |t| t.fire(action)));
    #[cfg(feature = "ssr")]
    let timers = PanelTimers;

    tour.set_value(Some(TourOrchestrator::new(
        timers,
        crate::ui::motion::prefers_reduced_motion(),
    )));

    // Effects only run in the browser, so the tour never starts on the server
    Effect::new(move |_| drive(tour, panel, |t| t.start()));
    Effect::new(move |_| {
        let reduced = reduced.get();
        drive(tour, panel, |t| t.set_reduced_motion(reduced));
    });
    on_cleanup(move || drive(tour, panel, |t| t.shutdown()));

    let active_tab = Memo::new(move |_| panel.with(|p| p.tab));

    let on_tab_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let current = PanelTab::ALL
            .iter()
            .position(|tab| *tab == active_tab.get_untracked())
            .unwrap_or(0);
        let len = PanelTab::ALL.len();
        let next = match ev.key().as_str() {
            "ArrowRight" => (current + 1) % len,
            "ArrowLeft" => (current + len - 1) % len,
            "Home" => 0,
            "End" => len - 1,
            _ => return,
        };
        ev.prevent_default();
        drive(tour, panel, |t| t.select_tab(PanelTab::ALL[next]));
    };

    view! {
        <div class="control-panel" id="panel-certificate">
            <div
                class="control-panel-frame"
                on:pointerdown=move |_| drive(tour, panel, |t| t.interact())
                on:keydown=move |_| drive(tour, panel, |t| t.interact())
            >
                <div class="control-panel-header">
                    <div
                        class="flex gap-1"
                        role="tablist"
                        aria-label="Control panel tabs"
                        on:keydown=on_tab_keydown
                    >
                        {PanelTab::ALL
                            .into_iter()
                            .map(|tab| {
                                let active = move || active_tab.get() == tab;
                                view! {
                                    <button
                                        id=tab.tab_id()
                                        type="button"
                                        role="tab"
                                        class="panel-tab"
                                        class:active=active
                                        aria-selected=move || active().to_string()
                                        aria-controls=tab.panel_id()
                                        tabindex=move || if active() { "0" } else { "-1" }
                                        on:click=move |_| drive(tour, panel, |t| t.select_tab(tab))
                                    >
                                        {tab.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex items-center gap-2">
                        <span class="panel-badge hidden sm:inline-flex" title="Runtime environment">
                            "env"
                        </span>
                        <span class="panel-badge">"prod‑us‑1"</span>
                        <span class="panel-note">"pre‑approved in demo org"</span>
                    </div>
                </div>

                <div class="control-panel-body">
                    {move || match active_tab.get() {
                        PanelTab::Summary => view! { <SummaryTab tour=tour panel=panel/> }.into_any(),
                        PanelTab::Policy => view! { <PolicyTab tour=tour panel=panel/> }.into_any(),
                        PanelTab::Sdk => view! { <SdkTab tour=tour panel=panel/> }.into_any(),
                        PanelTab::Certificate => view! { <CertificateTab panel=panel/> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn SummaryTab(tour: TourHandle, panel: RwSignal<PanelState>) -> impl IntoView {
    let canary = move || panel.with(|p| p.canary);

    view! {
        <div
            id=PanelTab::Summary.panel_id()
            role="tabpanel"
            aria-labelledby=PanelTab::Summary.tab_id()
            class="panel-grid-summary"
        >
            <div class="grid grid-cols-2 gap-4">
                <SummaryTile title="Identity & Access" items=vec!["SSO (SAML) ✓".into(), "SCIM ✓".into(), "Roles: Operator, Approver".into()]/>
                <SummaryTile title="Audit" items=vec!["OpenTelemetry: on".into(), "Sink: Datadog".into(), "Retention: 365 days".into()]/>
                <SummaryTile title="Data boundaries" items=vec!["Residency: US/EU".into(), "BYOK / KMS: on".into(), "Egress: deny".into(), "PII: redact".into()]/>
                <SummaryTile title="Connectors" items=vec!["Snowflake (read‑first)".into(), "ServiceNow (write‑gated)".into(), "Slack, Datadog (read‑first)".into()]/>
                <div class="summary-tile">
                    <div class="summary-tile-title">"Guardrails"</div>
                    <ul>
                        <li>"Writes require approval"</li>
                        <li>"Approvers: Security, FinOps"</li>
                        <li>{move || format!("Canary: {}% + auto‑rollback", canary())}</li>
                    </ul>
                </div>
                <SummaryTile title="Budgets & SLOs" items=vec!["Budget: $25k/mo".into(), "RPS limit: 5".into(), "SLO: 99.9% • p95 1200ms".into()]/>
            </div>

            <div class="panel-controls">
                <div class="flex flex-wrap gap-2">
                    <span class="pill">"TTE ≤ 7d"</span>
                    <span class="pill">"TTC ≤ 7d"</span>
                    <span class="pill">"TTP ≤ 90d"</span>
                    <span class="pill">"MTTR < 5m"</span>
                </div>
                <div class="flex items-center gap-3">
                    <label
                        for="canary-slider"
                        class="panel-note"
                        title="Traffic routed through governed canary"
                    >
                        "Canary %"
                    </label>
                    <input
                        id="canary-slider"
                        type="range"
                        min=MIN_CANARY_PERCENT
                        max=MAX_CANARY_PERCENT
                        step="1"
                        class="canary-slider"
                        prop:value=move || canary().get().to_string()
                        aria-valuemin=MIN_CANARY_PERCENT
                        aria-valuemax=MAX_CANARY_PERCENT
                        aria-valuenow=move || canary().get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev).parse::<i64>().unwrap_or_default();
                            drive(tour, panel, |t| t.set_canary_percent(value));
                        }
                    />
                    <span class="w-8 text-center text-sm">{move || canary().get()}</span>
                    <button
                        type="button"
                        class="panel-button panel-button-primary"
                        on:click=move |_| drive(tour, panel, |t| t.run_canary())
                    >
                        "Start canary"
                    </button>
                    <button
                        type="button"
                        class="panel-button"
                        on:click=move |_| drive(tour, panel, |t| t.run_promotion())
                    >
                        {move || format!("Promote {}%", canary())}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SummaryTile(title: &'static str, items: Vec<String>) -> impl IntoView {
    view! {
        <div class="summary-tile">
            <div class="summary-tile-title">{title}</div>
            <ul>{items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}</ul>
        </div>
    }
}

#[component]
fn Chip(#[prop(into)] active: Signal<bool>, on_click: Callback<()>, label: &'static str) -> impl IntoView {
    view! {
        <button
            type="button"
            class="chip"
            class:active=move || active.get()
            aria-pressed=move || active.get().to_string()
            on:click=move |_| on_click.run(())
        >
            {label}
        </button>
    }
}

#[component]
fn PolicyTab(tour: TourHandle, panel: RwSignal<PanelState>) -> impl IntoView {
    let view_mode = move || panel.with(|p| p.policy_view);
    let source = Signal::derive(move || panel.with(PanelState::policy_source));

    view! {
        <div
            id=PanelTab::Policy.panel_id()
            role="tabpanel"
            aria-labelledby=PanelTab::Policy.tab_id()
            class="panel-grid-code"
        >
            <div class="panel-toolbar">
                <p class="panel-caption">
                    "Policy‑as‑code for GitOps. Compiles to OPA/Cedar; gates promotion and writes."
                </p>
                <div class="flex items-center gap-2 shrink-0">
                    {[PolicyView::Yaml, PolicyView::Cedar]
                        .into_iter()
                        .map(|mode| {
                            view! {
                                <Chip
                                    active=Signal::derive(move || view_mode() == mode)
                                    on_click=Callback::new(move |_| drive(tour, panel, |t| t.set_policy_view(mode)))
                                    label=mode.label()
                                />
                            }
                        })
                        .collect_view()}
                    <CopyChip text=source label=Signal::derive(move || format!("Copy {}", view_mode().label()))/>
                </div>
            </div>
            <pre class="code-surface">{move || source.get()}</pre>
        </div>
    }
}

#[component]
fn SdkTab(tour: TourHandle, panel: RwSignal<PanelState>) -> impl IntoView {
    let language = move || panel.with(|p| p.sdk_language);
    let snippet = Signal::derive(move || panel.with(PanelState::sdk_snippet));
    let status = move || panel.with(|p| p.status);

    view! {
        <div
            id=PanelTab::Sdk.panel_id()
            role="tabpanel"
            aria-labelledby=PanelTab::Sdk.tab_id()
            class="panel-grid-sdk"
        >
            <div class="panel-toolbar">
                <p class="panel-caption">"Drop‑in calls your teams use to move from canary → promote."</p>
                <div class="flex items-center gap-2 shrink-0">
                    {SdkLanguage::ALL
                        .into_iter()
                        .map(|lang| {
                            view! {
                                <Chip
                                    active=Signal::derive(move || language() == lang)
                                    on_click=Callback::new(move |_| drive(tour, panel, |t| t.set_sdk_language(lang)))
                                    label=lang.label()
                                />
                            }
                        })
                        .collect_view()}
                    <CopyChip text=snippet label="Copy SDK"/>
                </div>
            </div>

            <pre class="code-surface">{move || snippet.get()}</pre>

            <div class="sim-surface">
                <div class="progress-track" aria-hidden="true">
                    <div
                        class="progress-bar"
                        style:width=move || format!("{}%", panel.with(|p| p.progress))
                    ></div>
                </div>
                <div class="mt-2 flex gap-2 flex-wrap text-xs">
                    <span class="sim-tag" class:sim-canary=move || status() == RunStatus::Canary>"canary"</span>
                    <span class="sim-tag" class:sim-promoted=move || status() == RunStatus::Promoted>"promote"</span>
                    <span class="sim-tag">"audit: on"</span>
                    <span class="sim-tag">"trace: on"</span>
                </div>
            </div>

            <div class="events-surface">
                <div class="panel-note mb-1">"events"</div>
                <ul class="events-log" role="status" aria-live="polite">
                    {move || {
                        let events = panel.with(|p| p.events.clone());
                        if events.is_empty() {
                            view! { <li class="text-gray-400">"• ready."</li> }.into_any()
                        } else {
                            events
                                .into_iter()
                                .map(|event| view! { <li>{format!("• {event}")}</li> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </ul>
            </div>
        </div>
    }
}

#[component]
fn CertificateTab(panel: RwSignal<PanelState>) -> impl IntoView {
    let text = Signal::derive(move || panel.with(PanelState::certificate_text));

    view! {
        <div
            id=PanelTab::Certificate.panel_id()
            role="tabpanel"
            aria-labelledby=PanelTab::Certificate.tab_id()
            class="panel-grid-code"
        >
            <div class="panel-toolbar">
                <p class="panel-caption">
                    "Signed artifact minted on promotion; verifiable before any write side‑effects."
                </p>
                <CopyChip text=text label="Copy certificate"/>
            </div>
            <pre class="code-surface">{move || text.get()}</pre>
        </div>
    }
}
