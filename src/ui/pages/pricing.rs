//! Pricing page
//!
//! Server renders the fallback plan cards; the browser then swaps in the
//! live quotes from `GET /api/pricing`. Plan buttons post to
//! `/api/checkout`, which redirects to the payment provider.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::core::pricing::{PlanQuote, PricingView, format_usd};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::PageMeta;

/// Marketing copy for a self-serve plan, keyed by plan key
struct PlanCopy {
    key: &'static str,
    summary: &'static str,
    features: &'static [&'static str],
    outcomes: &'static [&'static str],
    included_actions: &'static str,
}

const PLAN_COPY: [PlanCopy; 2] = [
    PlanCopy {
        key: "build",
        summary: "Ship a governed canary on one workflow.",
        features: &[
            "SAML SSO + SCIM",
            "Read‑first connectors with dry‑run",
            "Policy‑as‑code (YAML → OPA/Cedar)",
            "Per‑action audit export (OTel)",
        ],
        outcomes: &["Governed canary in ≤ 7 days", "Evidence pack for Security review"],
        included_actions: "25k approved actions / month included",
    },
    PlanCopy {
        key: "operate",
        summary: "Certify production and scale across teams.",
        features: &[
            "Everything in Build",
            "Action Certificates on every write",
            "Approvals, rollback & safe‑mode",
            "Budgets, showback & SIEM streaming",
        ],
        outcomes: &["Certified production in ≤ 90 days", "Expansion to new workflows in days"],
        included_actions: "100k approved actions / month included",
    },
];

const VALUE_POINTS: [(&str, &str); 3] = [
    ("Time‑to‑live", "Pay for the path to production, not seats that sit idle."),
    ("Approve once", "Platform review is reused across every automation."),
    ("Your cloud", "Compute and data stay in your account."),
];

const COMPARISON: [(&str, &str, &str); 6] = [
    ("SSO / SCIM", "✓", "✓"),
    ("Read‑first connectors", "✓", "✓"),
    ("Policy‑as‑code", "✓", "✓"),
    ("Action Certificates", "—", "✓"),
    ("Approvals & rollback", "Basic", "Full"),
    ("Budgets & showback", "—", "✓"),
];

const OUTCOME_TILES: [(&str, &str); 3] = [
    ("≤ 7 days", "to a governed canary"),
    ("≤ 90 days", "to certified production"),
    ("$ / action", "cost per approved action, tracked"),
];

const FAQ: [(&str, &str); 5] = [
    (
        "How does the free trial work?",
        "Every self‑serve plan starts with a trial. Cancel any time before it ends and you are not charged.",
    ),
    (
        "What counts as an approved action?",
        "A write that passed policy and approval and received an Action Certificate. Reads and dry‑runs are free.",
    ),
    (
        "Can we switch between monthly and annual?",
        "Yes. Changes take effect at the next billing period; annual billing is discounted.",
    ),
    (
        "Do you support private deployments?",
        "Yes. TrustPlane runs in your VPC/cloud on every plan. Enterprise adds dedicated support and custom terms.",
    ),
    (
        "Is procurement paperwork available?",
        "SOC 2 program details, DPIA/LLM‑risk docs and a DPA are available on request.",
    ),
];

fn plan_copy(key: &str) -> Option<&'static PlanCopy> {
    PLAN_COPY.iter().find(|copy| copy.key == key)
}

/// Banner text for the `checkout` query parameter set by the checkout redirect
fn checkout_banner(status: Option<&str>) -> Option<&'static str> {
    match status? {
        "success" => Some("Thanks! Your trial has started. Check your inbox for next steps."),
        _ => None,
    }
}

/// Pricing page component
#[component]
pub fn PricingPage() -> impl IntoView {
    let query = use_query_map();
    let pricing = RwSignal::new(PricingView::fallback());

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        leptos::task::spawn_local(async move {
            use gloo_net::http::Request;

            match Request::get("/api/pricing").send().await {
                Ok(response) if response.ok() => {
                    if let Ok(view) = response.json::<PricingView>().await {
                        let _ = pricing.try_set(view);
                    }
                }
                // Keep the fallback cards
                _ => {}
            }
        });
    });

    let banner = move || query.with(|q| checkout_banner(q.get_str("checkout")));

    view! {
        <PageMeta
            title="Pricing"
            description="Self‑serve plans for governed canaries and certified production, with a free trial."
            path="/pricing"
        />

        <section class="hero">
            <div class="container text-center">
                <span class="eyebrow">"Pricing"</span>
                <h1 class="hero-title">"Pricing aligned to time‑to‑live"</h1>
                <p class="hero-lead mx-auto">
                    {move || {
                        format!(
                            "Start with a {}‑day free trial. Move from governed canary to certified production without re‑procurement.",
                            pricing.with(PricingView::max_trial_days),
                        )
                    }}
                </p>
                <div class="mt-6 flex flex-wrap justify-center gap-3">
                    <span class="pill">"Runs in your VPC/cloud"</span>
                    <span class="pill">"Cancel any time"</span>
                    <span class="pill">"No training on your data"</span>
                </div>
                {move || {
                    banner()
                        .map(|text| {
                            view! {
                                <div class="alert-success mt-6 mx-auto max-w-xl" role="status">
                                    {text}
                                </div>
                            }
                        })
                }}
            </div>
        </section>

        <section class="section">
            <div class="container grid md:grid-cols-3 gap-6 items-stretch">
                {move || {
                    pricing
                        .get()
                        .plans
                        .into_iter()
                        .map(|plan| view! { <PlanCard plan=plan/> })
                        .collect_view()
                }}
                <EnterpriseCard/>
            </div>
        </section>

        <section class="section-tight section-muted">
            <div class="container grid md:grid-cols-3 gap-6">
                {VALUE_POINTS
                    .into_iter()
                    .map(|(title, desc)| {
                        view! {
                            <div>
                                <div class="font-medium">{title}</div>
                                <div class="text-sm text-muted">{desc}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="section">
            <div class="container">
                <h2 class="subsection-title">"Compare plans"</h2>
                <div class="table-scroll mt-6">
                    <table class="compare-table">
                        <thead>
                            <tr>
                                <th scope="col">"Capability"</th>
                                <th scope="col">"Build"</th>
                                <th scope="col">"Operate"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {COMPARISON
                                .into_iter()
                                .map(|(capability, build, operate)| {
                                    view! {
                                        <tr>
                                            <th scope="row">{capability}</th>
                                            <td>{build}</td>
                                            <td>{operate}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
                <div class="mt-10 grid sm:grid-cols-3 gap-6">
                    {OUTCOME_TILES
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="stat">
                                    <div class="stat-value">{value}</div>
                                    <div class="stat-label">{label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="mt-6 text-sm text-muted">
                    "Want the math? See "
                    <A href="/pricing/unit-economics">"unit economics"</A>
                    "."
                </p>
            </div>
        </section>

        <section class="section section-muted">
            <div class="container max-w-3xl">
                <h2 class="subsection-title">"Pricing FAQ"</h2>
                <dl class="mt-6 space-y-6">
                    {FAQ
                        .into_iter()
                        .map(|(question, answer)| {
                            view! {
                                <div>
                                    <dt class="font-medium">{question}</dt>
                                    <dd class="mt-1 text-sm text-muted">{answer}</dd>
                                </div>
                            }
                        })
                        .collect_view()}
                </dl>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(plan: PlanQuote) -> impl IntoView {
    let copy = plan_copy(&plan.key);
    let monthly = format!("{} per builder / month", format_usd(plan.monthly_cents as f64));
    let yearly = plan.yearly_per_month_cents().map(|per_month| {
        let saving = plan
            .save_percent()
            .map(|save| format!(" — save {}%", save))
            .unwrap_or_default();
        format!(
            "or {} / builder / month (billed annually{})",
            format_usd(per_month),
            saving
        )
    });
    let annual_cta = plan.annual_cta();
    let contact_href = format!("/contact?topic=pricing&plan={}", plan.key);

    view! {
        <div class="plan-card" class:plan-card-highlight=plan.highlight>
            <div class="flex items-center justify-between">
                <h2 class="card-title">{plan.label.clone()}</h2>
                <span class="pill">{plan.badge.clone()}</span>
            </div>
            {copy.map(|c| view! { <p class="mt-2 text-sm text-muted">{c.summary}</p> })}
            <div class="plan-price mt-6">{monthly}</div>
            {yearly.map(|text| view! { <div class="mt-1 text-sm text-muted">{text}</div> })}
            <div class="mt-1 text-xs text-muted">{format!("{}‑day free trial", plan.trial_days)}</div>

            <div class="mt-6 flex flex-col gap-2">
                {match plan.monthly_price_id.clone() {
                    Some(price_id) => {
                        view! { <CheckoutButton price_id=price_id label="Start monthly".to_string() primary=true/> }
                            .into_any()
                    }
                    None => {
                        view! { <a href=contact_href class="btn-primary">"Talk to sales"</a> }.into_any()
                    }
                }}
                {plan
                    .yearly_price_id
                    .clone()
                    .map(|price_id| {
                        view! { <CheckoutButton price_id=price_id label=annual_cta primary=false/> }
                    })}
            </div>

            {copy
                .map(|c| {
                    view! {
                        <ul class="mt-6 space-y-2 text-sm">
                            {c
                                .features
                                .iter()
                                .map(|feature| {
                                    view! {
                                        <li class="flex items-start gap-2">
                                            <Icon name=icons::CHECK class="w-4 h-4 mt-0.5 text-accent"/>
                                            <span>{*feature}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <div class="mt-6 text-xs uppercase tracking-wide text-muted">"Outcomes"</div>
                        <ul class="mt-2 space-y-1 text-sm">
                            {c.outcomes.iter().map(|o| view! { <li>{format!("• {}", o)}</li> }).collect_view()}
                        </ul>
                        <div class="mt-4 text-xs text-muted">{c.included_actions}</div>
                    }
                })}
        </div>
    }
}

/// Native form post so checkout works before hydration
#[component]
fn CheckoutButton(price_id: String, label: String, primary: bool) -> impl IntoView {
    let class = if primary { "btn-primary w-full" } else { "btn-outline w-full" };

    view! {
        <form method="post" action="/api/checkout">
            <input type="hidden" name="priceId" value=price_id/>
            <button type="submit" class=class>{label}</button>
        </form>
    }
}

#[component]
fn EnterpriseCard() -> impl IntoView {
    view! {
        <div class="plan-card">
            <div class="flex items-center justify-between">
                <h2 class="card-title">"Enterprise"</h2>
                <span class="pill">"Custom"</span>
            </div>
            <p class="mt-2 text-sm text-muted">
                "Multiple lines of business, dedicated forward‑deployed engineers and custom terms."
            </p>
            <div class="plan-price mt-6">"Let’s talk"</div>
            <div class="mt-6">
                <A href="/contact?plan=enterprise" attr:class="btn-outline w-full">
                    "Contact sales"
                    <Icon name=icons::ARROW_RIGHT class="w-4 h-4 ml-2"/>
                </A>
            </div>
            <ul class="mt-6 space-y-2 text-sm">
                <li>"• Everything in Operate"</li>
                <li>"• Private transparency log"</li>
                <li>"• Data residency & BYOK options"</li>
                <li>"• Procurement & security review support"</li>
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pricing::PLANS;

    #[test]
    fn test_every_plan_has_copy() {
        for spec in PLANS {
            assert!(plan_copy(spec.key).is_some(), "missing copy for {}", spec.key);
        }
    }

    #[test]
    fn test_checkout_banner() {
        assert!(checkout_banner(Some("success")).is_some());
        assert_eq!(checkout_banner(Some("other")), None);
        assert_eq!(checkout_banner(None), None);
    }
}
