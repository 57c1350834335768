//! Pricing REST endpoints
//!
//! - GET /api/pricing - Plan cards built from the cached catalog
//! - POST /api/checkout - Start a Stripe Checkout session for a plan price

use axum::{
    Form, Json, Router,
    extract::State,
    response::Redirect,
    routing::{get, post},
};
use serde::Deserialize;
use std::sync::Arc;

use super::cache::PricingCache;
use super::catalog::PricingView;
use super::stripe::{CheckoutUrls, StripeClient};

/// Where checkout sends visitors when self-serve billing is unavailable
pub const SALES_FALLBACK_PATH: &str = "/contact?topic=pricing";

/// Where checkout sends visitors when the provider fails
pub const ERROR_PATH: &str = "/error";

pub const PRICING_PATH: &str = "/pricing";

#[derive(Debug)]
pub struct PricingState {
    pub cache: PricingCache,
    pub stripe: Option<StripeClient>,
    pub checkout_urls: CheckoutUrls,
}

impl PricingState {
    pub fn new(stripe: Option<StripeClient>, cache: PricingCache, site_url: &str) -> Self {
        Self {
            cache,
            stripe,
            checkout_urls: CheckoutUrls::for_site(site_url),
        }
    }
}

/// Body of the plan card checkout forms
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    #[serde(rename = "priceId")]
    pub price_id: String,
}

/// Create the pricing API router
pub fn pricing_router(state: Arc<PricingState>) -> Router {
    Router::new()
        .route("/api/pricing", get(get_pricing))
        .route("/api/checkout", post(checkout))
        .with_state(state)
}

/// GET /api/pricing
async fn get_pricing(State(state): State<Arc<PricingState>>) -> Json<PricingView> {
    let catalog = state.cache.catalog().await;
    Json(PricingView::from_catalog(&catalog))
}

/// POST /api/checkout
async fn checkout(
    State(state): State<Arc<PricingState>>,
    Form(form): Form<CheckoutForm>,
) -> Redirect {
    let Some(stripe) = &state.stripe else {
        tracing::info!("Checkout requested without Stripe configured, sending to sales");
        return Redirect::to(SALES_FALLBACK_PATH);
    };

    let catalog = state.cache.catalog().await;
    if !catalog.sells(&form.price_id) {
        tracing::warn!(price_id = %form.price_id, "Checkout requested for unknown price");
        return Redirect::to(PRICING_PATH);
    }

    match stripe
        .create_checkout_session(&form.price_id, &state.checkout_urls)
        .await
    {
        Ok(url) => {
            tracing::info!(price_id = %form.price_id, "Checkout session created");
            Redirect::to(&url)
        }
        Err(e) => {
            tracing::error!("Checkout session failed: {}", e);
            Redirect::to(ERROR_PATH)
        }
    }
}
