//! Team and partner ecosystem

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::layout::{PageHeader, PageMeta};

const ECOSYSTEM: [(&str, &[&str]); 5] = [
    ("Identity", &["Okta", "Microsoft Entra ID", "Ping Identity"]),
    ("Data platforms", &["Databricks", "Snowflake"]),
    ("Clouds", &["AWS", "Microsoft Azure", "Google Cloud"]),
    ("Work management", &["ServiceNow", "Jira", "Slack", "Microsoft Teams"]),
    ("Observability & SIEM", &["Splunk", "Datadog", "OpenTelemetry"]),
];

#[component]
pub fn TeamPage() -> impl IntoView {
    view! {
        <PageMeta
            title="Team"
            description="The team and ecosystem behind TrustPlane."
            path="/team"
        />
        <section class="section">
            <div class="container max-w-4xl">
                <PageHeader
                    eyebrow="Team"
                    title="Built by platform, security and ML engineers"
                    lead="We have shipped identity, governance and data infrastructure at enterprise scale. TrustPlane works with the stack you already run."
                />

                <div class="mt-10 grid md:grid-cols-2 gap-6">
                    {ECOSYSTEM
                        .into_iter()
                        .map(|(category, names)| {
                            view! {
                                <div class="card">
                                    <div class="card-title">{category}</div>
                                    <ul class="mt-3 flex flex-wrap gap-2">
                                        {names
                                            .iter()
                                            .map(|name| view! { <li class="pill">{*name}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="mt-10 flex flex-wrap items-center gap-4">
                    <A href="/contact?topic=partnership" attr:class="btn-primary">"Partner with us"</A>
                </div>
                <p class="mt-6 text-xs text-muted">
                    "Product names and trademarks belong to their respective owners and do not imply endorsement."
                </p>
            </div>
        </section>
    }
}
