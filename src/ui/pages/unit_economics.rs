use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::layout::{Article, PageMeta};

const UNIT_ECONOMICS: &str = include_str!("../../../content/unit-economics.md");

#[component]
pub fn UnitEconomicsPage() -> impl IntoView {
    view! {
        <PageMeta
            title="Unit economics"
            description="How TrustPlane pricing scales with approved actions instead of idle seats."
            path="/pricing/unit-economics"
        />
        <Article
            eyebrow="Pricing"
            title="Unit economics"
            lead="Pay for governed outcomes. Compute stays in your cloud."
            content=UNIT_ECONOMICS
        >
            <div class="mt-10 flex flex-wrap gap-3">
                <A href="/pricing" attr:class="btn-outline">"Back to pricing"</A>
                <A href="/contact?topic=pricing" attr:class="btn-primary">"Model your costs with us"</A>
            </div>
        </Article>
    }
}
