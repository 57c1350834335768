//! Time-bounded cache of the price catalog
//!
//! Prices are refetched at most once per TTL (one hour by default). One
//! request refreshes at a time; while it waits on Stripe, other requests
//! keep getting the previous catalog. A failed refresh keeps serving what
//! was there (the empty catalog when nothing was fetched yet, so the plan
//! cards fall back to their built-in prices) and is retried after
//! `RETRY_AFTER_FAILURE`.

use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};

use super::catalog::PriceCatalog;
use super::stripe::StripeClient;

pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// Wait before asking Stripe again after a failed refresh
pub const RETRY_AFTER_FAILURE: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
struct Entry {
    catalog: PriceCatalog,
    expires_at: Instant,
}

impl Entry {
    fn is_fresh(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

#[derive(Debug)]
pub struct PricingCache {
    source: Option<StripeClient>,
    ttl: Duration,
    entry: RwLock<Option<Entry>>,
    refresh: Mutex<()>,
}

impl PricingCache {
    /// `source` of `None` means no payment provider is configured
    pub fn new(source: Option<StripeClient>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            entry: RwLock::new(None),
            refresh: Mutex::new(()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Current catalog, refreshed if expired
    pub async fn catalog(&self) -> PriceCatalog {
        let Some(source) = &self.source else {
            return PriceCatalog::default();
        };

        let stale = match self.entry.read().await.as_ref() {
            Some(entry) if entry.is_fresh() => return entry.catalog.clone(),
            Some(entry) => Some(entry.catalog.clone()),
            None => None,
        };

        // Someone else is refreshing: answer with what we have, or wait for
        // them when there is nothing yet
        let _refresh = match (self.refresh.try_lock(), stale) {
            (Ok(guard), _) => guard,
            (Err(_), Some(stale)) => return stale,
            (Err(_), None) => self.refresh.lock().await,
        };

        // The refresh we may have waited for could have succeeded
        if let Some(entry) = self.entry.read().await.as_ref()
            && entry.is_fresh()
        {
            return entry.catalog.clone();
        }

        let fetched = source.fetch_catalog().await;

        let mut slot = self.entry.write().await;
        match fetched {
            Ok(catalog) => {
                tracing::info!(
                    prices = catalog.prices.len(),
                    products = catalog.products.len(),
                    "Price catalog refreshed"
                );
                *slot = Some(Entry {
                    catalog: catalog.clone(),
                    expires_at: Instant::now() + self.ttl,
                });
                catalog
            }
            Err(e) => {
                tracing::warn!("Price catalog refresh failed: {}", e);
                let catalog = slot
                    .as_ref()
                    .map(|entry| entry.catalog.clone())
                    .unwrap_or_default();
                *slot = Some(Entry {
                    catalog: catalog.clone(),
                    expires_at: Instant::now() + self.ttl.min(RETRY_AFTER_FAILURE),
                });
                catalog
            }
        }
    }

    /// Forget the cached catalog
    pub async fn invalidate(&self) {
        *self.entry.write().await = None;
    }
}
