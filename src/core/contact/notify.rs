//! Delivery of accepted contact requests
//!
//! With `CONTACT_WEBHOOK_URL` set, every accepted request is posted as a
//! Slack/Teams compatible `{"text": ...}` message. Without it the request is
//! written to the log. Delivery problems are logged and never reach the
//! visitor.

use axum::http::HeaderMap;
use serde::Serialize;
use std::net::IpAddr;
use std::time::Duration;

use super::form::ValidContact;

/// Shown in the webhook text for fields left empty
const EMPTY_FIELD: &str = "—";

/// Upper bound for one webhook call, connect included
pub const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("webhook answered with status {0}")]
    Status(u16),
}

/// Request metadata attached to the notification
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RequestMeta {
    /// Client address, also the rate limit key
    pub ip: String,
    pub user_agent: String,
    pub referer: String,
}

impl RequestMeta {
    /// `peer` is the TCP peer. With `trust_proxy` the hop our proxy appended
    /// to `x-forwarded-for` wins over it.
    pub fn from_request(headers: &HeaderMap, peer: IpAddr, trust_proxy: bool) -> Self {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .to_string()
        };

        let ip = trust_proxy
            .then(|| forwarded_client(&header("x-forwarded-for")))
            .flatten()
            .unwrap_or(peer);

        Self {
            ip: ip.to_string(),
            user_agent: header("user-agent"),
            referer: header("referer"),
        }
    }
}

/// Last hop of `x-forwarded-for`, the one appended by the nearest proxy.
/// Earlier hops are client supplied.
fn forwarded_client(forwarded_for: &str) -> Option<IpAddr> {
    forwarded_for
        .rsplit(',')
        .map(str::trim)
        .find(|hop| !hop.is_empty())
        .and_then(|hop| hop.parse().ok())
}

#[derive(Debug, Serialize)]
struct WebhookPayload {
    text: String,
}

/// Human readable summary posted to the webhook
pub fn webhook_text(contact: &ValidContact, meta: &RequestMeta) -> String {
    let or_dash = |value: &str| {
        if value.is_empty() {
            EMPTY_FIELD.to_string()
        } else {
            value.to_string()
        }
    };
    let plan = contact
        .plan
        .as_deref()
        .map(|p| format!(" (plan: {})", p))
        .unwrap_or_default();

    let mut text = format!(
        "New TrustPlane contact:\n\
         - Name: {}\n\
         - Email: {}\n\
         - Company: {}\n\
         - Role: {}\n\
         - Cloud(s): {}\n\
         - Topic: {}{}\n\
         - Message: {}\n\
         - Meta: ip={} ua={} ref={}",
        or_dash(&contact.name),
        contact.email,
        or_dash(&contact.company),
        or_dash(&contact.role),
        or_dash(&contact.cloud),
        contact.topic,
        plan,
        contact.message,
        meta.ip,
        meta.user_agent,
        meta.referer,
    );

    if !contact.utm.is_empty() {
        let utm = contact
            .utm
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(" ");
        text.push_str(&format!("\n- UTM: {}", utm));
    }

    text
}

/// Where an accepted request ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Webhook,
    Logged,
    Failed,
}

#[derive(Debug, Clone)]
pub struct ContactNotifier {
    client: reqwest::Client,
    webhook_url: Option<String>,
}

impl ContactNotifier {
    pub fn new(webhook_url: Option<String>) -> Self {
        Self::with_timeout(webhook_url, WEBHOOK_TIMEOUT)
    }

    pub fn with_timeout(webhook_url: Option<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default webhook client: {}", e);
                reqwest::Client::new()
            });

        Self {
            client,
            webhook_url: webhook_url.filter(|url| !url.trim().is_empty()),
        }
    }

    pub fn has_webhook(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// Deliver a request; never fails from the caller's point of view
    pub async fn deliver(&self, contact: &ValidContact, meta: &RequestMeta) -> Delivery {
        let Some(url) = self.webhook_url.as_deref() else {
            tracing::info!(
                topic = %contact.topic,
                email = %contact.email,
                company = %contact.company,
                plan = ?contact.plan,
                ip = %meta.ip,
                "Contact form submission: {:?}",
                contact
            );
            return Delivery::Logged;
        };

        match self.post_webhook(url, contact, meta).await {
            Ok(()) => {
                tracing::info!(topic = %contact.topic, "Contact request forwarded to webhook");
                Delivery::Webhook
            }
            Err(e) => {
                tracing::warn!("Contact webhook delivery failed: {}", e);
                Delivery::Failed
            }
        }
    }

    async fn post_webhook(
        &self,
        url: &str,
        contact: &ValidContact,
        meta: &RequestMeta,
    ) -> Result<(), NotifyError> {
        let payload = WebhookPayload {
            text: webhook_text(contact, meta),
        };

        let response = self.client.post(url).json(&payload).send().await?;

        if !response.status().is_success() {
            return Err(NotifyError::Status(response.status().as_u16()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contact::form::Topic;
    use axum::http::HeaderValue;
    use std::collections::BTreeMap;

    fn contact() -> ValidContact {
        ValidContact {
            name: "Grace Hopper".to_string(),
            email: "grace@navy.example".to_string(),
            company: String::new(),
            role: "CTO".to_string(),
            cloud: String::new(),
            topic: Topic::Pricing,
            message: "Interested in the Operate plan for 40 builders.".to_string(),
            plan: Some("operate".to_string()),
            utm: BTreeMap::new(),
        }
    }

    #[test]
    fn test_webhook_text_layout() {
        let meta = RequestMeta {
            ip: "203.0.113.9".to_string(),
            user_agent: "curl/8".to_string(),
            referer: "https://example.com/pricing".to_string(),
        };

        let text = webhook_text(&contact(), &meta);

        assert_eq!(
            text,
            "New TrustPlane contact:\n\
             - Name: Grace Hopper\n\
             - Email: grace@navy.example\n\
             - Company: —\n\
             - Role: CTO\n\
             - Cloud(s): —\n\
             - Topic: pricing (plan: operate)\n\
             - Message: Interested in the Operate plan for 40 builders.\n\
             - Meta: ip=203.0.113.9 ua=curl/8 ref=https://example.com/pricing"
        );
    }

    #[test]
    fn test_webhook_text_without_plan_but_with_utm() {
        let mut c = contact();
        c.plan = None;
        c.utm.insert("utm_source".to_string(), "newsletter".to_string());

        let text = webhook_text(&c, &RequestMeta::default());

        assert!(text.contains("- Topic: pricing\n"));
        assert!(text.ends_with("\n- UTM: utm_source=newsletter"));
    }

    const PEER: IpAddr = IpAddr::V4(std::net::Ipv4Addr::new(192, 0, 2, 7));

    fn forwarded(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static(value));
        headers.insert("user-agent", HeaderValue::from_static("Mozilla/5.0"));
        headers
    }

    #[test]
    fn test_request_meta_uses_peer_without_proxy() {
        let meta = RequestMeta::from_request(&forwarded("198.51.100.4"), PEER, false);

        assert_eq!(meta.ip, "192.0.2.7");
        assert_eq!(meta.user_agent, "Mozilla/5.0");
        assert_eq!(meta.referer, "");
    }

    #[test]
    fn test_request_meta_behind_trusted_proxy() {
        // The client wrote the first hop, the proxy appended the second
        let meta = RequestMeta::from_request(&forwarded("6.6.6.6, 198.51.100.4"), PEER, true);
        assert_eq!(meta.ip, "198.51.100.4");
    }

    #[test]
    fn test_request_meta_falls_back_to_peer() {
        let meta = RequestMeta::from_request(&HeaderMap::new(), PEER, true);
        assert_eq!(meta.ip, "192.0.2.7");

        let meta = RequestMeta::from_request(&forwarded("not-an-ip"), PEER, true);
        assert_eq!(meta.ip, "192.0.2.7");
    }

    #[test]
    fn test_forwarded_client_skips_empty_hops() {
        assert_eq!(
            forwarded_client("203.0.113.1, 2001:db8::1 , "),
            "2001:db8::1".parse().ok()
        );
        assert_eq!(forwarded_client(""), None);
    }

    #[test]
    fn test_blank_webhook_url_is_ignored() {
        assert!(!ContactNotifier::new(Some("  ".to_string())).has_webhook());
        assert!(!ContactNotifier::new(None).has_webhook());
        assert!(ContactNotifier::new(Some("http://hooks.local".to_string())).has_webhook());
    }

    #[tokio::test]
    async fn test_deliver_without_webhook_logs() {
        let notifier = ContactNotifier::new(None);
        let delivery = notifier.deliver(&contact(), &RequestMeta::default()).await;
        assert_eq!(delivery, Delivery::Logged);
    }

    #[tokio::test]
    async fn test_deliver_to_unreachable_webhook_fails_quietly() {
        // Port 9 (discard) on localhost is closed in test environments
        let notifier = ContactNotifier::new(Some("http://127.0.0.1:9/hook".to_string()));
        let delivery = notifier.deliver(&contact(), &RequestMeta::default()).await;
        assert_eq!(delivery, Delivery::Failed);
    }

    #[tokio::test]
    async fn test_slow_webhook_times_out() {
        use axum::{Router, routing::post};

        let app = Router::new().route(
            "/hook",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(120)).await;
                "late"
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let notifier = ContactNotifier::with_timeout(
            Some(format!("http://{}/hook", addr)),
            Duration::from_millis(200),
        );
        let delivery = tokio::time::timeout(
            Duration::from_secs(10),
            notifier.deliver(&contact(), &RequestMeta::default()),
        )
        .await
        .expect("delivery should give up on its own");

        assert_eq!(delivery, Delivery::Failed);
    }
}
