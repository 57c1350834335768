//! Pricing: plan quotes from the Stripe catalog, with caching and checkout

pub mod catalog;

#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
pub mod cache;
#[cfg(feature = "ssr")]
pub mod stripe;

pub use catalog::{
    DEFAULT_TRIAL_DAYS, PLANS, PlanQuote, PlanSpec, Price, PriceCatalog, PricingView, Product,
    format_usd, save_percent,
};

#[cfg(feature = "ssr")]
pub use api::{PricingState, pricing_router};
#[cfg(feature = "ssr")]
pub use cache::PricingCache;
#[cfg(feature = "ssr")]
pub use stripe::{StripeClient, StripeError};
