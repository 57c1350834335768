//! Security brief

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::layout::{Article, PageMeta};

const SECURITY: &str = include_str!("../../../content/security.md");

#[component]
pub fn SecurityPage() -> impl IntoView {
    view! {
        <PageMeta
            title="Security"
            description="Architecture, identity, data handling and compliance posture of TrustPlane."
            path="/security"
        />
        <Article
            eyebrow="Security brief"
            title="Security & trust"
            lead="Runs in your cloud. Approve once. Every write carries proof."
            content=SECURITY
        >
            <div class="mt-10 callout">
                <div class="callout-title">"Need the full package?"</div>
                <p class="mt-2 text-sm text-muted">
                    "SOC 2 program details, DPIA/LLM‑risk templates and our DPA are shared under NDA."
                </p>
                <div class="mt-4">
                    <A href="/contact?topic=security" attr:class="btn-primary">"Request the security brief"</A>
                </div>
            </div>
        </Article>
    }
}
