//! Not found page component
//!
//! Rendered for every unknown route, with a 404 status on the server.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};
use crate::ui::layout::PageMeta;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    view! {
        <PageMeta title="Page not found" path="/404"/>
        <section class="section">
            <div class="container text-center">
                <div class="status-icon">
                    <Icon name=icons::DOCUMENT_TEXT class="w-12 h-12 text-muted"/>
                </div>

                <h1 class="page-title">"Page not found"</h1>
                <p class="mt-3 text-muted max-w-md mx-auto">
                    "The page you’re looking for doesn’t exist or has moved."
                </p>

                <div class="mt-8 flex flex-col sm:flex-row items-center justify-center gap-3">
                    <A href="/" attr:class="btn-primary">"Go home"</A>
                    <A href="/docs/quickstart" attr:class="btn-outline">"Read the docs"</A>
                    <A href="/contact" attr:class="btn-outline">"Contact us"</A>
                </div>
            </div>
        </section>
    }
}
