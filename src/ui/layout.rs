//! Site chrome shared by every page: header, footer and page metadata

use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::app::{SITE_DESCRIPTION, SITE_URL, format_title};
use crate::ui::icon::{Icon, icons};
use crate::ui::markdown::Markdown;

/// Primary navigation, in display order
pub const PRIMARY_LINKS: [(&str, &str); 4] = [
    ("/docs/quickstart", "Docs"),
    ("/security", "Security"),
    ("/pricing", "Pricing"),
    ("/contact", "Contact"),
];

pub const FOOTER_LINKS: [(&str, &str); 4] = [
    ("/security", "Security"),
    ("/privacy", "Privacy"),
    ("/terms", "Terms"),
    ("/contact", "Contact"),
];

/// Title, description, canonical URL and social cards for one page
#[component]
pub fn PageMeta(
    /// Page title, before the site suffix is added
    title: &'static str,
    #[prop(default = SITE_DESCRIPTION)]
    description: &'static str,
    /// Path of the page, e.g. `/pricing`
    path: &'static str,
) -> impl IntoView {
    let url = format!("{}{}", SITE_URL, path);

    view! {
        <Title text=format_title(title)/>
        <Meta name="description" content=description/>
        <Link rel="canonical" href=url.clone()/>
        <Meta property="og:title" content=title/>
        <Meta property="og:description" content=description/>
        <Meta property="og:url" content=url/>
        <Meta name="twitter:title" content=title/>
        <Meta name="twitter:description" content=description/>
    }
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let mobile_open = RwSignal::new(false);
    let location = use_location();

    // Close the mobile sheet whenever the route changes
    Effect::new(move |_| {
        location.pathname.track();
        mobile_open.set(false);
    });

    view! {
        <header class="site-header">
            <a href="#main" class="skip-link">"Skip to content"</a>
            <div class="site-header-inner">
                <A href="/" attr:class="brand">
                    <Icon name=icons::SHIELD class="w-6 h-6 text-accent"/>
                    <span>"TrustPlane"</span>
                </A>

                <nav class="hidden md:flex items-center gap-6" aria-label="Main">
                    {PRIMARY_LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <A href=href attr:class="nav-link">{label}</A> })
                        .collect_view()}
                </nav>

                <button
                    type="button"
                    class="md:hidden menu-toggle"
                    aria-label="Toggle menu"
                    aria-controls="mobile-nav"
                    aria-expanded=move || mobile_open.get().to_string()
                    on:click=move |_| mobile_open.update(|open| *open = !*open)
                >
                    {move || {
                        let name = if mobile_open.get() { icons::X } else { icons::MENU };
                        view! { <Icon name=name class="w-6 h-6"/> }
                    }}
                </button>
            </div>

            <div id="mobile-nav" class="mobile-nav md:hidden" class:open=move || mobile_open.get()>
                <nav class="flex flex-col gap-3 px-4 py-4" aria-label="Mobile">
                    {PRIMARY_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <A href=href attr:class="nav-link" on:click=move |_| mobile_open.set(false)>
                                    {label}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="site-footer">
            <div class="site-footer-inner">
                <div class="text-sm text-muted">
                    {format!("© {} TrustPlane, Inc. All rights reserved.", year)}
                </div>
                <nav class="flex flex-wrap items-center gap-4 text-sm" aria-label="Footer">
                    {FOOTER_LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <A href=href attr:class="footer-link">{label}</A> })
                        .collect_view()}
                </nav>
            </div>
        </footer>
    }
}

/// Header, skip target and footer around a page body
#[component]
pub fn SiteLayout(children: Children) -> impl IntoView {
    view! {
        <div class="site">
            <SiteHeader/>
            <main id="main" tabindex="-1">{children()}</main>
            <SiteFooter/>
        </div>
    }
}

/// Heading block used at the top of content pages
#[component]
pub fn PageHeader(
    /// Small label above the title
    eyebrow: &'static str,
    title: &'static str,
    #[prop(optional)]
    lead: Option<&'static str>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <span class="eyebrow">{eyebrow}</span>
            <h1 class="page-title">{title}</h1>
            {lead.map(|lead| view! { <p class="page-lead">{lead}</p> })}
        </header>
    }
}

/// Long-form page: heading block followed by a Markdown body
#[component]
pub fn Article(
    eyebrow: &'static str,
    title: &'static str,
    #[prop(optional)]
    lead: Option<&'static str>,
    /// Markdown source
    content: &'static str,
    /// Extra content rendered after the body
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <article class="section">
            <div class="container max-w-3xl">
                {match lead {
                    Some(lead) => view! { <PageHeader eyebrow=eyebrow title=title lead=lead/> }.into_any(),
                    None => view! { <PageHeader eyebrow=eyebrow title=title/> }.into_any(),
                }}
                <div class="mt-10">
                    <Markdown content=content/>
                </div>
                {children.map(|children| children())}
            </div>
        </article>
    }
}
