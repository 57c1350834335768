//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::time::Duration;

/// Public origin used when no `SITE_URL` is set
pub const DEFAULT_SITE_URL: &str = "https://example.com";

/// Price catalog lifetime when no `PRICING_CACHE_TTL_SECS` is set
pub const DEFAULT_PRICING_CACHE_TTL_SECS: u64 = 3600;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Public origin of the site, used for checkout return URLs
    /// Example: https://trustplane.dev
    pub site_url: String,

    /// Slack/Teams compatible webhook receiving contact requests
    pub contact_webhook_url: Option<String>,

    /// Stripe secret key; without it pricing shows fallback prices
    pub stripe_secret_key: Option<String>,

    /// Reject gmail/yahoo/outlook/hotmail addresses on the contact form
    pub reject_personal_email: bool,

    /// How long a fetched price catalog stays fresh
    pub pricing_cache_ttl: Duration,

    /// Site runs behind a reverse proxy that appends `x-forwarded-for`;
    /// otherwise the TCP peer address identifies the client
    pub trust_proxy: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from any variable lookup
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        Self {
            site_url: non_empty("SITE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_SITE_URL.to_string()),
            contact_webhook_url: non_empty("CONTACT_WEBHOOK_URL"),
            stripe_secret_key: non_empty("STRIPE_SECRET_KEY"),
            reject_personal_email: non_empty("CONTACT_REJECT_PERSONAL_EMAIL")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
            pricing_cache_ttl: Duration::from_secs(
                non_empty("PRICING_CACHE_TTL_SECS")
                    .and_then(|v| v.trim().parse().ok())
                    .unwrap_or(DEFAULT_PRICING_CACHE_TTL_SECS),
            ),
            trust_proxy: non_empty("TRUST_PROXY")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }

    /// Check if the contact webhook is configured
    pub fn has_contact_webhook(&self) -> bool {
        self.contact_webhook_url.is_some()
    }

    /// Check if Stripe is configured
    pub fn has_stripe(&self) -> bool {
        self.stripe_secret_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Variable lookups are injected, so these tests never touch the process
    // environment and stay thread safe
    // ========================================================================

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = config_from(&[]);

        assert_eq!(config.site_url, DEFAULT_SITE_URL);
        assert!(config.contact_webhook_url.is_none());
        assert!(config.stripe_secret_key.is_none());
        assert!(config.reject_personal_email);
        assert_eq!(config.pricing_cache_ttl, Duration::from_secs(3600));
        assert!(!config.trust_proxy);
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = config_from(&[
            ("SITE_URL", "https://trustplane.dev/"),
            ("CONTACT_WEBHOOK_URL", "https://hooks.slack.com/services/T/B/X"),
            ("STRIPE_SECRET_KEY", "sk_test_abc"),
            ("CONTACT_REJECT_PERSONAL_EMAIL", "false"),
            ("PRICING_CACHE_TTL_SECS", "120"),
            ("TRUST_PROXY", "true"),
        ]);

        assert_eq!(config.site_url, "https://trustplane.dev");
        assert_eq!(
            config.contact_webhook_url.as_deref(),
            Some("https://hooks.slack.com/services/T/B/X")
        );
        assert_eq!(config.stripe_secret_key.as_deref(), Some("sk_test_abc"));
        assert!(!config.reject_personal_email);
        assert_eq!(config.pricing_cache_ttl, Duration::from_secs(120));
        assert!(config.trust_proxy);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = config_from(&[("CONTACT_WEBHOOK_URL", "  "), ("SITE_URL", "")]);

        assert!(!config.has_contact_webhook());
        assert_eq!(config.site_url, DEFAULT_SITE_URL);
    }

    #[test]
    fn test_invalid_ttl_uses_default() {
        let config = config_from(&[("PRICING_CACHE_TTL_SECS", "an hour")]);
        assert_eq!(
            config.pricing_cache_ttl,
            Duration::from_secs(DEFAULT_PRICING_CACHE_TTL_SECS)
        );
    }

    #[test]
    fn test_has_stripe() {
        assert!(config_from(&[("STRIPE_SECRET_KEY", "sk")]).has_stripe());
        assert!(!config_from(&[]).has_stripe());
    }

    #[test]
    fn test_parse_flag() {
        for off in ["0", "false", "FALSE", "no", "off", " Off "] {
            assert!(!parse_flag(off), "{off} should disable");
        }
        for on in ["1", "true", "yes", "on"] {
            assert!(parse_flag(on), "{on} should enable");
        }
    }
}
