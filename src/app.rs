use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::ui::SiteLayout;
use crate::ui::pages::{
    ActionCertificatesPage, CaseStudyApInvoicePage, ContactPage, ErrorPage, LandingPage,
    NotFoundPage, PricingPage, PrivacyPage, QuickstartPage, SecurityPage, TeamPage, TermsPage,
    UnitEconomicsPage,
};

/// Public origin baked into page metadata at build time
pub const SITE_URL: &str = match option_env!("SITE_URL") {
    Some(url) => url,
    None => "https://example.com",
};

pub const SITE_DESCRIPTION: &str = "Enterprise AI control plane: identity, governance, and connectors to get pilots to audited production in your cloud.";

/// Title used when a page does not set its own
pub const DEFAULT_TITLE: &str = "TrustPlane — Approve once. Governed canary in ≤ 7 days.";

/// Apply the `%s — TrustPlane` title template
pub fn format_title(text: &str) -> String {
    if text.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        format!("{} — TrustPlane", text)
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/trustplane.css"/>
        <Link rel="icon" type_="image/svg+xml" href="/favicon.svg"/>

        <Meta name="theme-color" content="#0b1220"/>
        <Meta property="og:site_name" content="TrustPlane"/>
        <Meta property="og:type" content="website"/>
        <Meta name="twitter:card" content="summary_large_image"/>

        <Router>
            <SiteLayout>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("pricing") view=PricingPage/>
                    <Route
                        path=(StaticSegment("pricing"), StaticSegment("unit-economics"))
                        view=UnitEconomicsPage
                    />
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("security") view=SecurityPage/>
                    <Route path=StaticSegment("privacy") view=PrivacyPage/>
                    <Route path=StaticSegment("terms") view=TermsPage/>
                    <Route path=StaticSegment("team") view=TeamPage/>
                    <Route path=StaticSegment("error") view=ErrorPage/>
                    <Route
                        path=(StaticSegment("docs"), StaticSegment("quickstart"))
                        view=QuickstartPage
                    />
                    <Route
                        path=(StaticSegment("docs"), StaticSegment("action-certificates"))
                        view=ActionCertificatesPage
                    />
                    <Route
                        path=(
                            StaticSegment("docs"),
                            StaticSegment("case-studies"),
                            StaticSegment("ap-invoice"),
                        )
                        view=CaseStudyApInvoicePage
                    />
                </Routes>
            </SiteLayout>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_template() {
        assert_eq!(format_title("Pricing"), "Pricing — TrustPlane");
    }

    #[test]
    fn test_empty_title_uses_default() {
        assert_eq!(format_title(""), DEFAULT_TITLE);
    }

    #[test]
    fn test_site_url_has_no_trailing_slash() {
        assert!(!SITE_URL.ends_with('/'));
    }
}
