//! Developer docs: quickstart, certificate verification and the AP case study

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::layout::{Article, PageMeta};
use crate::ui::terminal::Terminal;

const QUICKSTART: &str = include_str!("../../../content/quickstart.md");
const ACTION_CERTIFICATES: &str = include_str!("../../../content/action-certificates.md");
const CASE_STUDY_AP_INVOICE: &str = include_str!("../../../content/case-study-ap-invoice.md");

#[component]
pub fn QuickstartPage() -> impl IntoView {
    view! {
        <PageMeta
            title="Quickstart"
            description="Install the SDK, declare a policy, run a governed canary and promote with an Action Certificate."
            path="/docs/quickstart"
        />
        <section class="section-tight">
            <div class="container max-w-3xl">
                <Terminal/>
            </div>
        </section>
        <Article
            eyebrow="Docs"
            title="Quickstart"
            lead="From install to a certified write in five commands."
            content=QUICKSTART
        >
            <div class="mt-10 flex flex-wrap gap-3">
                <A href="/docs/action-certificates" attr:class="btn-outline">"How verification works"</A>
                <A href="/contact?topic=demo" attr:class="btn-primary">"Talk to engineering"</A>
            </div>
        </Article>
    }
}

#[component]
pub fn ActionCertificatesPage() -> impl IntoView {
    view! {
        <PageMeta
            title="Action Certificates"
            description="How TrustPlane signs, exports and verifies Action Certificates for every governed write."
            path="/docs/action-certificates"
        />
        <Article
            eyebrow="Action Certificates"
            title="How verification works"
            lead="A signed, portable record that a write was approved under a specific policy."
            content=ACTION_CERTIFICATES
        >
            <div class="mt-10">
                <a href="/#panel-certificate" class="btn-outline">"View sample certificate"</a>
            </div>
        </Article>
    }
}

#[component]
pub fn CaseStudyApInvoicePage() -> impl IntoView {
    view! {
        <PageMeta
            title="AP / invoice case study"
            description="AP / invoice matching and posting with certificate‑verified writes."
            path="/docs/case-studies/ap-invoice"
        />
        <Article
            eyebrow="Lighthouse workflow"
            title="AP / invoice matching & posting with certificate‑verified writes"
            lead="Match, enrich, and post invoices with deterministic write gates and rollback safeguards."
            content=CASE_STUDY_AP_INVOICE
        >
            <div class="mt-10">
                <A href="/contact?topic=demo" attr:class="btn-primary">"Plan this pilot"</A>
            </div>
        </Article>
    }
}
