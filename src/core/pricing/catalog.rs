//! Plan prices derived from the payment provider's catalog
//!
//! The site sells two self-serve plans that map onto Stripe products:
//!
//! | Plan    | Stripe product | Fallback monthly |
//! |---------|----------------|------------------|
//! | Build   | `Base`         | $8               |
//! | Operate | `Plus`         | $12              |
//!
//! Whatever the catalog is missing is filled from the fallbacks, so a
//! failed or empty lookup still renders complete plan cards.

use serde::{Deserialize, Serialize};

/// Trial length when the catalog does not specify one
pub const DEFAULT_TRIAL_DAYS: u32 = 7;

pub const INTERVAL_MONTH: &str = "month";
pub const INTERVAL_YEAR: &str = "year";

/// A recurring price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub id: String,
    pub product_id: String,
    /// Amount in cents
    pub unit_amount: Option<u64>,
    pub interval: String,
    pub trial_period_days: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
}

/// Prices and products as fetched from the provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceCatalog {
    pub prices: Vec<Price>,
    pub products: Vec<Product>,
}

impl PriceCatalog {
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Price of the named product billed per `interval`
    pub fn find_price(&self, product_name: &str, interval: &str) -> Option<&Price> {
        let product = self.products.iter().find(|p| p.name == product_name)?;
        self.prices
            .iter()
            .find(|p| p.product_id == product.id && p.interval == interval)
    }

    /// Whether `price_id` belongs to one of the self-serve plans
    pub fn sells(&self, price_id: &str) -> bool {
        PLANS.iter().any(|plan| {
            [INTERVAL_MONTH, INTERVAL_YEAR].iter().any(|interval| {
                self.find_price(plan.stripe_product, interval)
                    .is_some_and(|p| p.id == price_id)
            })
        })
    }
}

/// Static description of a self-serve plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub stripe_product: &'static str,
    pub badge: &'static str,
    pub highlight: bool,
    pub fallback_monthly_cents: u64,
}

pub const PLANS: [PlanSpec; 2] = [
    PlanSpec {
        key: "build",
        label: "Build",
        stripe_product: "Base",
        badge: "Pilot & canary",
        highlight: false,
        fallback_monthly_cents: 800,
    },
    PlanSpec {
        key: "operate",
        label: "Operate",
        stripe_product: "Plus",
        badge: "Most popular",
        highlight: true,
        fallback_monthly_cents: 1_200,
    },
];

/// What a plan card shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanQuote {
    pub key: String,
    pub label: String,
    pub stripe_product: String,
    pub badge: String,
    pub highlight: bool,
    pub monthly_cents: u64,
    pub yearly_cents: Option<u64>,
    pub monthly_price_id: Option<String>,
    pub yearly_price_id: Option<String>,
    pub trial_days: u32,
}

impl PlanQuote {
    pub fn from_catalog(spec: &PlanSpec, catalog: &PriceCatalog) -> Self {
        let monthly = catalog.find_price(spec.stripe_product, INTERVAL_MONTH);
        let yearly = catalog.find_price(spec.stripe_product, INTERVAL_YEAR);

        let trial_days = monthly
            .and_then(|p| p.trial_period_days)
            .or_else(|| yearly.and_then(|p| p.trial_period_days))
            .unwrap_or(DEFAULT_TRIAL_DAYS);

        Self {
            key: spec.key.to_string(),
            label: spec.label.to_string(),
            stripe_product: spec.stripe_product.to_string(),
            badge: spec.badge.to_string(),
            highlight: spec.highlight,
            monthly_cents: monthly
                .and_then(|p| p.unit_amount)
                .unwrap_or(spec.fallback_monthly_cents),
            yearly_cents: yearly.and_then(|p| p.unit_amount),
            monthly_price_id: monthly.map(|p| p.id.clone()),
            yearly_price_id: yearly.map(|p| p.id.clone()),
            trial_days,
        }
    }

    /// Yearly price spread over twelve months, in cents
    pub fn yearly_per_month_cents(&self) -> Option<f64> {
        self.yearly_cents.map(|y| y as f64 / 12.0)
    }

    pub fn save_percent(&self) -> Option<u32> {
        save_percent(Some(self.monthly_cents), self.yearly_cents)
    }

    /// "Start annual", with the saving when there is one
    pub fn annual_cta(&self) -> String {
        match self.save_percent() {
            Some(save) => format!("Start annual — save {}%", save),
            None => "Start annual".to_string(),
        }
    }
}

/// Everything the pricing page needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingView {
    pub plans: Vec<PlanQuote>,
    /// Whether any price came from the live catalog
    pub live: bool,
}

impl PricingView {
    pub fn from_catalog(catalog: &PriceCatalog) -> Self {
        Self {
            plans: PLANS
                .iter()
                .map(|spec| PlanQuote::from_catalog(spec, catalog))
                .collect(),
            live: !catalog.is_empty(),
        }
    }

    /// Fallback prices only
    pub fn fallback() -> Self {
        Self::from_catalog(&PriceCatalog::default())
    }

    /// Longest trial across plans, shown in the hero
    pub fn max_trial_days(&self) -> u32 {
        self.plans
            .iter()
            .map(|p| p.trial_days)
            .max()
            .unwrap_or(DEFAULT_TRIAL_DAYS)
    }

    pub fn plan(&self, key: &str) -> Option<&PlanQuote> {
        self.plans.iter().find(|p| p.key == key)
    }
}

/// Whole US dollars, e.g. `$1,200`
pub fn format_usd(cents: f64) -> String {
    let dollars = (cents / 100.0).round().max(0.0) as u64;
    let digits = dollars.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("${}", grouped)
}

/// Saving of yearly billing over twelve monthly payments, rounded and
/// never negative. `None` when either amount is missing or zero.
pub fn save_percent(monthly_cents: Option<u64>, yearly_cents: Option<u64>) -> Option<u32> {
    let monthly = monthly_cents.filter(|&m| m > 0)?;
    let yearly = yearly_cents.filter(|&y| y > 0)?;

    let annual_at_monthly = (monthly * 12) as f64;
    let saving = ((1.0 - yearly as f64 / annual_at_monthly) * 100.0).round();
    Some(saving.max(0.0) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(id: &str, product: &str, cents: u64, interval: &str, trial: Option<u32>) -> Price {
        Price {
            id: id.to_string(),
            product_id: product.to_string(),
            unit_amount: Some(cents),
            interval: interval.to_string(),
            trial_period_days: trial,
        }
    }

    fn catalog() -> PriceCatalog {
        PriceCatalog {
            prices: vec![
                price("price_base_m", "prod_base", 900, INTERVAL_MONTH, Some(14)),
                price("price_base_y", "prod_base", 9_000, INTERVAL_YEAR, None),
                price("price_plus_m", "prod_plus", 1_500, INTERVAL_MONTH, None),
            ],
            products: vec![
                Product {
                    id: "prod_base".to_string(),
                    name: "Base".to_string(),
                },
                Product {
                    id: "prod_plus".to_string(),
                    name: "Plus".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_fallback_values_without_catalog() {
        let view = PricingView::fallback();

        assert!(!view.live);
        let build = view.plan("build").unwrap();
        assert_eq!(build.monthly_cents, 800);
        assert_eq!(build.trial_days, DEFAULT_TRIAL_DAYS);
        assert_eq!(build.monthly_price_id, None);
        assert_eq!(build.badge, "Pilot & canary");

        let operate = view.plan("operate").unwrap();
        assert_eq!(operate.monthly_cents, 1_200);
        assert!(operate.highlight);
        assert_eq!(operate.badge, "Most popular");
        assert_eq!(operate.save_percent(), None);
    }

    #[test]
    fn test_unmatched_products_use_fallbacks() {
        let catalog = PriceCatalog {
            prices: vec![price("price_x", "prod_x", 5_000, INTERVAL_MONTH, None)],
            products: vec![Product {
                id: "prod_x".to_string(),
                name: "Legacy".to_string(),
            }],
        };

        let view = PricingView::from_catalog(&catalog);
        assert_eq!(view.plan("build").unwrap().monthly_cents, 800);
        assert_eq!(view.plan("operate").unwrap().monthly_cents, 1_200);
    }

    #[test]
    fn test_live_catalog() {
        let view = PricingView::from_catalog(&catalog());

        assert!(view.live);
        let build = view.plan("build").unwrap();
        assert_eq!(build.monthly_cents, 900);
        assert_eq!(build.yearly_cents, Some(9_000));
        assert_eq!(build.monthly_price_id.as_deref(), Some("price_base_m"));
        assert_eq!(build.yearly_price_id.as_deref(), Some("price_base_y"));
        assert_eq!(build.trial_days, 14);
        assert_eq!(build.save_percent(), Some(17));
        assert_eq!(build.annual_cta(), "Start annual — save 17%");

        let operate = view.plan("operate").unwrap();
        assert_eq!(operate.monthly_cents, 1_500);
        assert_eq!(operate.trial_days, DEFAULT_TRIAL_DAYS);
        assert_eq!(operate.annual_cta(), "Start annual");

        assert_eq!(view.max_trial_days(), 14);
    }

    #[test]
    fn test_trial_falls_back_to_yearly() {
        let catalog = PriceCatalog {
            prices: vec![
                price("m", "prod_base", 900, INTERVAL_MONTH, None),
                price("y", "prod_base", 9_000, INTERVAL_YEAR, Some(30)),
            ],
            products: vec![Product {
                id: "prod_base".to_string(),
                name: "Base".to_string(),
            }],
        };
        assert_eq!(PricingView::from_catalog(&catalog).plan("build").unwrap().trial_days, 30);
    }

    #[test]
    fn test_sells() {
        let catalog = catalog();
        assert!(catalog.sells("price_base_m"));
        assert!(catalog.sells("price_plus_m"));
        assert!(!catalog.sells("price_other"));
        assert!(!PriceCatalog::default().sells("price_base_m"));
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(800.0), "$8");
        assert_eq!(format_usd(1_250.0), "$13");
        assert_eq!(format_usd(75_000.0), "$750");
        assert_eq!(format_usd(120_000.0), "$1,200");
        assert_eq!(format_usd(123_456_700.0), "$1,234,567");
        assert_eq!(format_usd(0.0), "$0");
    }

    #[test]
    fn test_save_percent() {
        assert_eq!(save_percent(Some(1_000), Some(10_000)), Some(17));
        assert_eq!(save_percent(Some(1_000), Some(12_000)), Some(0));
        assert_eq!(save_percent(Some(1_000), Some(15_000)), Some(0));
        assert_eq!(save_percent(None, Some(10_000)), None);
        assert_eq!(save_percent(Some(1_000), None), None);
        assert_eq!(save_percent(Some(0), Some(10_000)), None);
    }

    #[test]
    fn test_yearly_per_month() {
        let view = PricingView::from_catalog(&catalog());
        let build = view.plan("build").unwrap();
        assert_eq!(build.yearly_per_month_cents(), Some(750.0));
        assert_eq!(format_usd(build.yearly_per_month_cents().unwrap()), "$8");
    }

    #[test]
    fn test_view_json_is_camel_case() {
        let json = serde_json::to_value(PricingView::fallback()).unwrap();
        assert_eq!(json["plans"][0]["monthlyCents"], 800);
        assert_eq!(json["plans"][0]["trialDays"], 7);
        assert_eq!(json["live"], false);
    }
}
