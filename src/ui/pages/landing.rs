//! Landing page
//!
//! Hero with the interactive control panel, followed by the product story:
//! problem, platform, Action Certificates, outcomes, pilot kits, buyer
//! roles, the 90-day plan, objections and a closing call to action.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use leptos_router::components::A;

use crate::app::{DEFAULT_TITLE, SITE_DESCRIPTION, SITE_URL};
use crate::ui::control_panel::ControlPanel;
use crate::ui::icon::{Icon, icons};

const HERO_POINTS: [&str; 6] = [
    "Runs in your VPC/cloud",
    "Writes require approval",
    "Action Certificates (attested writes)",
    "Read‑first by default",
    "No training on your data (unless you opt in)",
    "Approve‑once platform",
];

const FEATURES: [(&str, &str); 6] = [
    (
        "Approve‑once platform",
        "Centralize platform review for security, compliance, and vendor risk—reused across use cases.",
    ),
    (
        "Identity & provisioning",
        "SAML SSO (Okta, Microsoft Entra ID, Ping) and SCIM with least‑privilege defaults.",
    ),
    (
        "Read‑first connectors",
        "Scoped OAuth, dry‑run, and deterministic audit for Databricks, Snowflake, ServiceNow, Slack, Microsoft Teams, Splunk, and Datadog.",
    ),
    (
        "Observability, SIEM & cost",
        "OpenTelemetry/Datadog exports, per‑action traces, budget/rate guardrails, and cost/showback for FinOps.",
    ),
    (
        "Governance on by default",
        "RBAC/ABAC, DLP/PII controls, retention, human‑in‑the‑loop, and eDiscovery hooks.",
    ),
    (
        "Inside your cloud",
        "Runs in your account; compute and data stay put. No risk of outgrowing the platform.",
    ),
];

const CERTIFICATE_POINTS: [&str; 4] = [
    "COSE‑signed record of each approved action",
    "Portable across ServiceNow, Snowflake, Slack, Databricks, and more",
    "OTel export to Splunk/Datadog; eDiscovery & retention friendly",
    "Optional transparency log (append‑only) in your account",
];

const SECURITY_STRIP: [(&str, &str); 4] = [
    ("SSO / SAML / SCIM", "Okta, Microsoft Entra ID, Ping."),
    ("KMS & Secrets", "BYOK, Vault integration, data residency."),
    ("Audit & Compliance", "SOC 2 program, audit‑log streaming, DPIA/LLM‑risk docs."),
    ("Policy‑as‑code", "YAML → OPA/Cedar with unit‑tested gates."),
];

const OUTCOMES: [(&str, &str); 4] = [
    ("≤ 7 days", "Time‑to‑evidence (governed canary)"),
    ("≤ 90 days", "Pilot → certified production"),
    ("100%", "Per‑action audit coverage"),
    ("< 5 min", "Rollback MTTR (safe‑mode)"),
];

const KPIS: [(&str, &str); 6] = [
    ("1,240/day", "Approved actions"),
    ("82%", "Writes governed"),
    ("$0.12", "Cost per approved action"),
    ("99.9%", "SLO attainment"),
    ("On budget", "Budget adherence"),
    ("100%", "Audit coverage"),
];

const PILOT_KITS: [(&str, &str); 6] = [
    (
        "Claims triage & severity",
        "Automate first notice, damage assessment, and routing with auditability, HITL, and certificate‑verified writes.",
    ),
    (
        "AP / invoice matching",
        "Match, enrich, and post with deterministic write gates, approvals, and rollback safeguards.",
    ),
    (
        "Product attribution & tagging",
        "Tag/localize assets across DAM/CMS with per‑action lineage for eDiscovery.",
    ),
    (
        "KYC / AML screening",
        "Assist analysts with policy‑based approvals, retention, and SIEM exports.",
    ),
    (
        "KPI brief from data",
        "Generate monthly executive briefings from Snowflake/Databricks—no data leaves your cloud.",
    ),
    (
        "Customer support deflection",
        "RAG + tools with deterministic guardrails; escalate to human queues on policy triggers.",
    ),
];

const ROLES: [(&str, [&str; 3]); 4] = [
    (
        "VP Engineering",
        [
            "Approve once across identity, audit, and data boundaries",
            "One integration to your tools; automations inherit",
            "Forward‑deployed engineers for the last mile",
        ],
    ),
    (
        "Head of AI",
        [
            "Two use cases live quickly; expansion in days",
            "Read‑first connectors with dry‑run",
            "No training on your data (unless you opt in)",
        ],
    ),
    (
        "CFO / FinOps",
        [
            "Bring forward ROI by quarters",
            "Cost‑per‑approved‑action & per‑team showback",
            "Budget guardrails & spend controls",
        ],
    ),
    (
        "CISO / Security",
        [
            "SSO/SCIM, RBAC/ABAC, least‑privilege scopes",
            "Data residency & BYOK/KMS options",
            "Certificate‑verified writes; deterministic audit & eDiscovery",
        ],
    ),
];

const PLAN_STEPS: [(&str, &str, &str); 3] = [
    (
        "Weeks 0–2",
        "Trust & identity",
        "Stand up trust portal; SAML SSO + SCIM configured; baseline audit export.",
    ),
    (
        "Weeks 2–6",
        "Connectors & governance",
        "Read‑first connectors live; RBAC/ABAC and policy packs enabled; SIEM streaming & golden sets.",
    ),
    (
        "Weeks 6–12",
        "Canary → certify",
        "Approval workflows for writes; rollback/safe‑mode; production certification & runbooks.",
    ),
];

const OBJECTIONS: [(&str, &str); 4] = [
    (
        "Do you train on our data?",
        "No—unless you opt in. Private data remains isolated; model providers or open‑weights are selectable by policy.",
    ),
    (
        "Where does data live?",
        "Inside your cloud/VPC with BYOK/KMS and residency controls. Full audit export to your SIEM.",
    ),
    (
        "Are we locked in?",
        "Vendor‑neutral routing and standard connectors. Swap models/tools without redoing governance.",
    ),
    (
        "Security posture?",
        "SOC 2 program, DPIA/LLM‑risk docs, SSO/SCIM, RBAC/ABAC, and deterministic per‑action lineage for eDiscovery.",
    ),
];

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta/>

        // Hero
        <section class="hero">
            <div class="container grid lg:grid-cols-12 gap-10 items-center">
                <div class="lg:col-span-6">
                    <span class="eyebrow">"TrustPlane"</span>
                    <h1 class="hero-title">
                        "Approve once. " <span class="text-accent">"Governed canary"</span> " in ≤ 7 days. "
                        "Certified production in " <span class="text-accent">"≤ 90 days"</span> "."
                    </h1>
                    <p class="hero-lead">
                        "TrustPlane is the enterprise AI control plane that gets pilots to audited production "
                        "in your cloud. Approve identity, governance, and data boundaries once—then roll out "
                        "governed automations with action‑level attestations across Okta/Entra ID/Ping; "
                        "Databricks/Snowflake; AWS/Azure/GCP; ServiceNow/Jira; Splunk/Datadog; Slack/Teams."
                    </p>
                    <div class="mt-8 flex flex-wrap gap-3">
                        <A href="/contact" attr:class="btn-primary">
                            "Talk to engineering"
                            <Icon name=icons::ARROW_RIGHT class="w-5 h-5 ml-2"/>
                        </A>
                        <A href="/docs/quickstart" attr:class="btn-outline">"Quickstart"</A>
                        <A href="/security" attr:class="btn-outline">"Security brief"</A>
                    </div>
                    <ul class="mt-8 grid grid-cols-2 gap-4 text-sm">
                        {HERO_POINTS
                            .into_iter()
                            .map(|point| {
                                view! {
                                    <li class="flex items-center gap-2">
                                        <Icon name=icons::CHECK class="w-4 h-4 text-accent"/>
                                        {point}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="lg:col-span-6">
                    <ControlPanel/>
                </div>
            </div>
        </section>

        // Problem / why now
        <section class="section">
            <div class="container grid lg:grid-cols-2 gap-8">
                <Card title="The problem">
                    "Enterprises don’t struggle to start pilots—they struggle to clear security, compliance, "
                    "and integration gates to reach production. TPRM/InfoSec, SSO/SCIM, and app/data "
                    "write‑paths routinely add months and kill momentum."
                </Card>
                <Card title="Why now">
                    "CFOs need ROI this fiscal year. CISOs need evidence. TrustPlane ships identity, "
                    "governance, and connectors as a reusable control plane—so pilots reach governed "
                    "canary in days."
                </Card>
            </div>
        </section>

        // Platform
        <section class="section section-muted">
            <div class="container">
                <h2 class="section-title">"TrustPlane: the AI control plane that works with your stack"</h2>
                <p class="section-lead">
                    "Approve the platform once—identity, audit, and data boundaries—then reuse it for "
                    "multiple governed automations. We integrate with Databricks, Snowflake, AWS, Azure, "
                    "GCP; Okta, Microsoft Entra ID, Ping; ServiceNow, Jira; Splunk, Datadog; Slack, "
                    "Microsoft Teams."
                </p>
                <div class="mt-10 grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {FEATURES
                        .into_iter()
                        .map(|(title, desc)| view! { <Card title=title>{desc}</Card> })
                        .collect_view()}
                </div>
                <div class="mt-10 flex flex-wrap items-center gap-3">
                    <A href="/contact" attr:class="btn-primary">"Book a readiness consult"</A>
                    <A href="/docs/quickstart#policy" attr:class="btn-outline">"See a sample policy"</A>
                </div>
            </div>
        </section>

        // Action Certificates
        <section class="section section-bordered">
            <div class="container grid lg:grid-cols-2 gap-8 items-start">
                <div>
                    <h3 class="subsection-title">"Action Certificates (attested writes)"</h3>
                    <p class="mt-3 text-muted">
                        "Every sensitive write is accompanied by a signed, portable artifact—an Action "
                        "Certificate—containing policy versions, evaluation results, approver identities, "
                        "rollout scope, cost/SLO snapshots, and a COSE signature. Platforms can require a "
                        "valid certificate before any side‑effects."
                    </p>
                    <CheckList items=CERTIFICATE_POINTS.to_vec()/>
                    <div class="mt-6 flex gap-3">
                        <a href="#panel-certificate" class="btn-primary">"View sample certificate"</a>
                        <A href="/docs/action-certificates" attr:class="btn-outline">"How verification works"</A>
                    </div>
                </div>
                <div class="callout">
                    <div class="callout-title">"Evidence bundles (EU AI Act / NIST AI RMF)"</div>
                    <p class="mt-2 text-sm text-muted">
                        "TrustPlane maps identity, policy, audit, and certificates into evidence packs you "
                        "can hand to Security, Legal, and Audit. Export controls + artifacts without leaving "
                        "your VPC."
                    </p>
                    <ul class="mt-3 text-sm space-y-1">
                        <li>"• Control mappings with policy version hashes"</li>
                        <li>"• Per‑action lineage + certificate links"</li>
                        <li>"• DPIA/LLM‑risk templates & runbooks"</li>
                    </ul>
                </div>
            </div>
        </section>

        // Security strip
        <section class="section-tight">
            <div class="container grid sm:grid-cols-2 lg:grid-cols-4 gap-4">
                {SECURITY_STRIP
                    .into_iter()
                    .map(|(title, desc)| {
                        view! {
                            <div class="security-item">
                                <Icon name=icons::SHIELD class="w-5 h-5 text-accent"/>
                                <div>
                                    <div class="font-medium">{title}</div>
                                    <div class="text-sm text-muted">{desc}</div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        // Outcomes and KPIs
        <section class="section">
            <div class="container">
                <h3 class="subsection-title">"Enterprise outcomes"</h3>
                <StatGrid stats=OUTCOMES.to_vec()/>
                <p class="mt-4 text-xs text-muted">
                    "Targets reflect goals vs. your historical baseline and are not guarantees."
                </p>
                <h3 class="subsection-title mt-14">"KPIs that matter"</h3>
                <StatGrid stats=KPIS.to_vec()/>
            </div>
        </section>

        // Pilot kits
        <section class="section section-muted">
            <div class="container">
                <h3 class="subsection-title">"Start with a critical workflow"</h3>
                <p class="mt-2 text-muted max-w-3xl">
                    "Opinionated Pilot Kits include pre‑wired connectors, evals, and guardrails—so you can "
                    "launch governed canaries in days and scale wins across LoBs."
                </p>
                <div class="mt-6 grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {PILOT_KITS
                        .into_iter()
                        .map(|(title, desc)| view! { <Card title=title>{desc}</Card> })
                        .collect_view()}
                </div>
                <div class="mt-8 flex flex-wrap gap-3">
                    <A href="/contact" attr:class="btn-primary">"Plan a governed canary"</A>
                    <A href="/docs/case-studies/ap-invoice" attr:class="btn-outline">"AP / invoice case study"</A>
                </div>
            </div>
        </section>

        // Roles
        <section class="section">
            <div class="container">
                <h3 class="subsection-title">"Built for enterprise buyers"</h3>
                <div class="mt-6 grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {ROLES
                        .into_iter()
                        .map(|(title, bullets)| {
                            view! {
                                <div class="card">
                                    <div class="card-title">{title}</div>
                                    <CheckList items=bullets.to_vec()/>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        // Capabilities
        <section class="section">
            <div class="container">
                <h3 class="subsection-title">"Control plane capabilities"</h3>
                <div class="mt-6 grid md:grid-cols-3 gap-6">
                    <Card title="Identity & Access">
                        "SAML SSO (Okta, Microsoft Entra ID, Ping) plus SCIM user provisioning; "
                        "least‑privilege roles and policy packs."
                    </Card>
                    <Card title="Connectors (read‑first)">
                        "Databricks, Snowflake, ServiceNow, Slack, Microsoft Teams, Splunk, Datadog—scoped "
                        "OAuth, dry‑run, and auditable actions."
                    </Card>
                    <Card title="Governance & Observability">
                        "Audit‑log streaming, OpenTelemetry and Datadog exports, RBAC/ABAC, retention, and "
                        "policy‑based approvals."
                    </Card>
                </div>
                <p class="mt-10 text-muted">
                    "Roadmap: evaluation contracts as promotion gates, prompt & pipeline versioning, "
                    "workload‑aware autoscaling, and policy‑driven routing across heterogeneous fleets."
                </p>
            </div>
        </section>

        // 90-day plan
        <section class="section section-muted">
            <div class="container">
                <h3 class="subsection-title">"90‑day plan to production"</h3>
                <div class="mt-6 grid md:grid-cols-3 gap-6">
                    {PLAN_STEPS
                        .into_iter()
                        .map(|(step, title, desc)| {
                            view! {
                                <div class="card">
                                    <div class="text-xs font-semibold text-accent">{step}</div>
                                    <div class="card-title mt-1">{title}</div>
                                    <p class="mt-2 text-sm text-muted">{desc}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        // Objections
        <section class="section">
            <div class="container">
                <h3 class="subsection-title">"Answers to your first four objections"</h3>
                <div class="mt-6 grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {OBJECTIONS
                        .into_iter()
                        .map(|(title, answer)| view! { <Card title=title>{answer}</Card> })
                        .collect_view()}
                </div>
            </div>
        </section>

        // Glossary
        <section class="section-tight section-muted">
            <div class="container grid md:grid-cols-2 gap-6">
                <Card title="Governed canary">
                    "Limited rollout with read‑first access, explicit approvals for writes, full audit, "
                    "and instant rollback."
                </Card>
                <Card title="Governed automation">
                    "A named workload bound to an approved policy; inherits identity, scopes, budgets, "
                    "SLOs, and audit."
                </Card>
            </div>
        </section>

        // Final CTA
        <section class="section">
            <div class="container flex flex-col md:flex-row items-center justify-between gap-6">
                <div>
                    <h4 class="subsection-title">"Approve once. Go live fast. Scale in days."</h4>
                    <p class="mt-2 text-muted">
                        "Identity, governance, and connectors—built in. Your tools, your cloud, your controls."
                    </p>
                    <p class="mt-2 text-xs text-muted">
                        "Procurement & risk documents available on request (SOC 2, DPIA/LLM‑risk, DPA)."
                    </p>
                </div>
                <div class="flex gap-3">
                    <A href="/contact" attr:class="btn-primary">"Talk to engineering"</A>
                    <A href="/pricing" attr:class="btn-outline">"Request pricing"</A>
                </div>
            </div>
        </section>
    }
}

/// Landing page metadata; the other pages go through `PageMeta`
#[component]
fn SeoMeta() -> impl IntoView {
    let canonical = format!("{}/", SITE_URL);

    view! {
        <Title text=DEFAULT_TITLE/>
        <Meta name="description" content=SITE_DESCRIPTION/>
        <Link rel="canonical" href=canonical.clone()/>
        <Meta property="og:title" content=DEFAULT_TITLE/>
        <Meta property="og:url" content=canonical/>
        <Meta property="og:description" content=SITE_DESCRIPTION/>
        <Meta name="twitter:title" content=DEFAULT_TITLE/>
        <Meta name="twitter:description" content=SITE_DESCRIPTION/>
    }
}

#[component]
fn Card(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-title">{title}</div>
            <p class="mt-3 text-sm text-muted">{children()}</p>
        </div>
    }
}

#[component]
fn CheckList(items: Vec<&'static str>) -> impl IntoView {
    view! {
        <ul class="mt-4 space-y-2 text-sm">
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <li class="flex items-start gap-2">
                            <Icon name=icons::CHECK class="w-4 h-4 mt-0.5 text-accent"/>
                            <span>{item}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
fn StatGrid(stats: Vec<(&'static str, &'static str)>) -> impl IntoView {
    view! {
        <div class="mt-6 grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
            {stats
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
    }
}
