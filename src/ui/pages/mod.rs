//! Site pages
//!
//! One component per route; shared chrome lives in `ui::layout`.

mod contact;
mod docs;
mod error;
mod landing;
mod legal;
mod not_found;
mod pricing;
mod security;
mod team;
mod unit_economics;

pub use contact::ContactPage;
pub use docs::{ActionCertificatesPage, CaseStudyApInvoicePage, QuickstartPage};
pub use error::ErrorPage;
pub use landing::LandingPage;
pub use legal::{PrivacyPage, TermsPage};
pub use not_found::NotFoundPage;
pub use pricing::PricingPage;
pub use security::SecurityPage;
pub use team::TeamPage;
pub use unit_economics::UnitEconomicsPage;
