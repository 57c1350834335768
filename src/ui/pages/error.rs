//! Landing spot for failed checkouts and other server-side redirects

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};
use crate::ui::layout::PageMeta;

#[component]
pub fn ErrorPage() -> impl IntoView {
    view! {
        <PageMeta title="Something went wrong" path="/error"/>
        <section class="section">
            <div class="container text-center">
                <div class="status-icon">
                    <Icon name=icons::ALERT_CIRCLE class="w-12 h-12 text-muted"/>
                </div>
                <h1 class="page-title">"Something went wrong"</h1>
                <p class="mt-3 text-muted max-w-md mx-auto">
                    "We couldn’t complete your request. Nothing was charged. Please try again, or reach out and we’ll sort it out."
                </p>
                <div class="mt-8 flex flex-col sm:flex-row items-center justify-center gap-3">
                    <A href="/pricing" attr:class="btn-primary">"Back to pricing"</A>
                    <A href="/contact?topic=pricing" attr:class="btn-outline">"Contact support"</A>
                </div>
            </div>
        </section>
    }
}
