//! Minimal Stripe REST client
//!
//! Only the calls the pricing page needs: list active recurring prices,
//! list active products, and create a subscription Checkout session.

use serde::Deserialize;
use std::time::Duration;

use super::catalog::{Price, PriceCatalog, Product};

pub const STRIPE_API_BASE: &str = "https://api.stripe.com/v1";

/// Upper bound for one Stripe call, connect included
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum StripeError {
    #[error("Stripe request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Stripe API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Stripe returned a checkout session without a URL")]
    MissingSessionUrl,
}

#[derive(Debug, Deserialize)]
struct List<T> {
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[derive(Debug, Deserialize)]
struct StripePrice {
    id: String,
    /// Product id, or the product object when expanded
    product: serde_json::Value,
    unit_amount: Option<u64>,
    recurring: Option<StripeRecurring>,
}

#[derive(Debug, Deserialize)]
struct StripeRecurring {
    interval: String,
    trial_period_days: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct StripeProduct {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct CheckoutSession {
    url: Option<String>,
}

impl From<StripePrice> for Price {
    fn from(price: StripePrice) -> Self {
        let product_id = match &price.product {
            serde_json::Value::String(id) => id.clone(),
            other => other["id"].as_str().unwrap_or_default().to_string(),
        };
        let (interval, trial_period_days) = match price.recurring {
            Some(r) => (r.interval, r.trial_period_days),
            None => (String::new(), None),
        };

        Price {
            id: price.id,
            product_id,
            unit_amount: price.unit_amount,
            interval,
            trial_period_days,
        }
    }
}

/// URLs Stripe sends the buyer back to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutUrls {
    pub success_url: String,
    pub cancel_url: String,
}

impl CheckoutUrls {
    pub fn for_site(site_url: &str) -> Self {
        let site = site_url.trim_end_matches('/');
        Self {
            success_url: format!("{}/pricing?checkout=success", site),
            cancel_url: format!("{}/pricing", site),
        }
    }
}

fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Falling back to default Stripe client: {}", e);
            reqwest::Client::new()
        })
}

#[derive(Debug, Clone)]
pub struct StripeClient {
    client: reqwest::Client,
    secret_key: String,
    api_base: String,
}

impl StripeClient {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self::with_base(secret_key, STRIPE_API_BASE)
    }

    /// Client against another API root (a local stand-in in tests)
    pub fn with_base(secret_key: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            client: http_client(REQUEST_TIMEOUT),
            secret_key: secret_key.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Replace the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = http_client(timeout);
        self
    }

    /// Active recurring prices
    pub async fn list_prices(&self) -> Result<Vec<Price>, StripeError> {
        let list: List<StripePrice> = self
            .get("/prices", &[("active", "true"), ("type", "recurring"), ("limit", "100")])
            .await?;
        Ok(list.data.into_iter().map(Price::from).collect())
    }

    /// Active products
    pub async fn list_products(&self) -> Result<Vec<Product>, StripeError> {
        let list: List<StripeProduct> = self
            .get("/products", &[("active", "true"), ("limit", "100")])
            .await?;
        Ok(list
            .data
            .into_iter()
            .map(|p| Product {
                id: p.id,
                name: p.name,
            })
            .collect())
    }

    /// Prices and products fetched concurrently
    pub async fn fetch_catalog(&self) -> Result<PriceCatalog, StripeError> {
        let (prices, products) = tokio::try_join!(self.list_prices(), self.list_products())?;
        Ok(PriceCatalog { prices, products })
    }

    /// Create a subscription Checkout session and return its hosted URL
    pub async fn create_checkout_session(
        &self,
        price_id: &str,
        urls: &CheckoutUrls,
    ) -> Result<String, StripeError> {
        let response = self
            .client
            .post(format!("{}/checkout/sessions", self.api_base))
            .bearer_auth(&self.secret_key)
            .form(&[
                ("mode", "subscription"),
                ("line_items[0][price]", price_id),
                ("line_items[0][quantity]", "1"),
                ("allow_promotion_codes", "true"),
                ("success_url", urls.success_url.as_str()),
                ("cancel_url", urls.cancel_url.as_str()),
            ])
            .send()
            .await?;

        let session: CheckoutSession = Self::parse(response).await?;
        session.url.ok_or(StripeError::MissingSessionUrl)
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, StripeError> {
        let response = self
            .client
            .get(format!("{}{}", self.api_base, path))
            .bearer_auth(&self.secret_key)
            .query(query)
            .send()
            .await?;

        Self::parse(response).await
    }

    async fn parse<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StripeError> {
        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ApiErrorBody>().await {
                Ok(body) => body.error.message,
                Err(_) => status.canonical_reason().unwrap_or("unknown").to_string(),
            };
            return Err(StripeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }
}
