use leptos::prelude::*;

use crate::ui::layout::{Article, PageMeta};

const PRIVACY: &str = include_str!("../../../content/privacy.md");
const TERMS: &str = include_str!("../../../content/terms.md");

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <PageMeta title="Privacy" description="How TrustPlane handles your data." path="/privacy"/>
        <Article eyebrow="Legal" title="Privacy" content=PRIVACY/>
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <PageMeta title="Terms" description="Terms governing your use of TrustPlane." path="/terms"/>
        <Article eyebrow="Legal" title="Terms" content=TERMS/>
    }
}
