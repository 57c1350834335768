//! Contact form REST endpoint
//!
//! - POST /api/contact - Validate and deliver a contact request

use axum::{
    Json, Router,
    extract::{ConnectInfo, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    routing::post,
};
use std::net::SocketAddr;
use std::sync::Arc;

use super::form::{ContactResult, ContactSubmission, ValidationRules, validate};
use super::notify::{ContactNotifier, RequestMeta};
use super::rate_limiter::ClientRateLimiter;
use super::spam::screen;

/// Reply for clients over their submission budget
pub const RATE_LIMITED_MESSAGE: &str = "Too many requests. Please try again in a few minutes.";

/// Reply for bodies that are not a JSON contact submission
pub const INVALID_BODY_MESSAGE: &str = "Could not read the form. Please try again or email us.";

/// Shared state of the contact endpoint
#[derive(Debug)]
pub struct ContactState {
    pub notifier: ContactNotifier,
    pub limiter: ClientRateLimiter,
    pub rules: ValidationRules,
    /// Take the client address from `x-forwarded-for`
    pub trust_proxy: bool,
}

impl ContactState {
    pub fn new(notifier: ContactNotifier, rules: ValidationRules) -> Self {
        Self {
            notifier,
            limiter: ClientRateLimiter::default(),
            rules,
            trust_proxy: false,
        }
    }

    pub fn trusting_proxy(mut self, trust_proxy: bool) -> Self {
        self.trust_proxy = trust_proxy;
        self
    }

    pub fn with_limiter(mut self, limiter: ClientRateLimiter) -> Self {
        self.limiter = limiter;
        self
    }
}

/// Create the contact API router.
///
/// Serve it with `into_make_service_with_connect_info::<SocketAddr>()`;
/// the peer address keys the rate limiter.
pub fn contact_router(state: Arc<ContactState>) -> Router {
    Router::new()
        .route("/api/contact", post(submit_contact))
        .with_state(state)
}

/// POST /api/contact
async fn submit_contact(
    State(state): State<Arc<ContactState>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    submission: Result<Json<ContactSubmission>, JsonRejection>,
) -> (StatusCode, Json<ContactResult>) {
    let meta = RequestMeta::from_request(&headers, peer.ip(), state.trust_proxy);

    let client = meta.ip.as_str();
    if !state.limiter.check(client) {
        tracing::warn!(client = %client, "Contact submission rate limited");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ContactResult::failure(RATE_LIMITED_MESSAGE)),
        );
    }

    let submission = match submission {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            tracing::debug!(client = %client, "Unreadable contact submission: {}", rejection.body_text());
            return (
                rejection.status(),
                Json(ContactResult::failure(INVALID_BODY_MESSAGE)),
            );
        }
    };

    let verdict = screen(&submission, chrono::Utc::now().timestamp_millis());
    if verdict.is_spam() {
        tracing::info!(client = %client, verdict = ?verdict, "Contact submission dropped");
        return (StatusCode::OK, Json(ContactResult::success()));
    }

    let contact = match validate(&submission, state.rules) {
        Ok(contact) => contact,
        Err(field_errors) => {
            tracing::debug!(fields = ?field_errors.keys().collect::<Vec<_>>(), "Contact submission rejected");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ContactResult::invalid(field_errors)),
            );
        }
    };

    state.notifier.deliver(&contact, &meta).await;

    (StatusCode::OK, Json(ContactResult::success()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use std::time::Duration;
    use tokio::sync::mpsc;
    use tower::ServiceExt;

    fn state(notifier: ContactNotifier) -> Arc<ContactState> {
        Arc::new(ContactState::new(notifier, ValidationRules::default()))
    }

    fn body(started_ms_ago: i64, overrides: serde_json::Value) -> String {
        let mut json = serde_json::json!({
            "name": "Ada",
            "email": "ada@analytical.engines",
            "company": "Analytical Engines",
            "topic": "demo",
            "message": "Looking for a governed canary pilot.",
            "website": "",
            "form_started_at": chrono::Utc::now().timestamp_millis() - started_ms_ago,
        });
        if let (Some(base), Some(extra)) = (json.as_object_mut(), overrides.as_object()) {
            for (k, v) in extra {
                base.insert(k.clone(), v.clone());
            }
        }
        json.to_string()
    }

    const PEER: &str = "203.0.113.20:50000";

    fn request_from(peer: &str, content_type: &str, body: String) -> Request<Body> {
        let peer: SocketAddr = peer.parse().unwrap();
        let mut request = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header("content-type", content_type)
            .body(Body::from(body))
            .unwrap();
        request.extensions_mut().insert(ConnectInfo(peer));
        request
    }

    fn contact_request(body: String) -> Request<Body> {
        request_from(PEER, "application/json", body)
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, ContactResult) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    /// Local webhook receiver forwarding every `text` it gets
    async fn webhook_receiver() -> (String, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel::<String>();
        let app = Router::new().route(
            "/hook",
            post(move |Json(payload): Json<serde_json::Value>| {
                let tx = tx.clone();
                async move {
                    let _ = tx.send(payload["text"].as_str().unwrap_or_default().to_string());
                    StatusCode::OK
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}/hook", addr), rx)
    }

    #[tokio::test]
    async fn test_valid_submission_reaches_webhook() {
        let (url, mut rx) = webhook_receiver().await;
        let router = contact_router(state(ContactNotifier::new(Some(url))));

        let (status, result) = send(router, contact_request(body(10_000, serde_json::json!({})))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(result, ContactResult::success());

        let text = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert!(text.starts_with("New TrustPlane contact:"));
        assert!(text.contains("- Email: ada@analytical.engines"));
        assert!(text.contains("ip=203.0.113.20"));
    }

    #[tokio::test]
    async fn test_invalid_email_returns_field_error() {
        let router = contact_router(state(ContactNotifier::new(None)));

        let (status, result) = send(
            router,
            contact_request(body(10_000, serde_json::json!({ "email": "nope" }))),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(!result.ok);
        assert_eq!(result.error.as_deref(), Some("Please fix the highlighted fields."));
        assert_eq!(result.field_error("email"), Some("Enter a valid work email"));
    }

    #[tokio::test]
    async fn test_short_message_returns_field_error() {
        let router = contact_router(state(ContactNotifier::new(None)));

        let (_, result) = send(
            router,
            contact_request(body(10_000, serde_json::json!({ "message": "short" }))),
        )
        .await;

        assert!(!result.ok);
        assert!(result.field_error("message").is_some());
    }

    #[tokio::test]
    async fn test_honeypot_is_silently_accepted() {
        let (url, mut rx) = webhook_receiver().await;
        let router = contact_router(state(ContactNotifier::new(Some(url))));

        let (status, result) = send(
            router,
            contact_request(body(
                10_000,
                serde_json::json!({ "website": "http://spam.example", "email": "bad" }),
            )),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(result.ok);
        assert!(result.error.is_none());
        assert!(
            tokio::time::timeout(Duration::from_millis(300), rx.recv())
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_fast_submission_is_silently_accepted() {
        let (url, mut rx) = webhook_receiver().await;
        let router = contact_router(state(ContactNotifier::new(Some(url))));

        let (_, result) = send(router, contact_request(body(500, serde_json::json!({})))).await;

        assert!(result.ok);
        assert!(
            tokio::time::timeout(Duration::from_millis(300), rx.recv())
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_failing_webhook_still_succeeds() {
        let router = contact_router(state(ContactNotifier::new(Some(
            "http://127.0.0.1:9/hook".to_string(),
        ))));

        let (status, result) = send(router, contact_request(body(10_000, serde_json::json!({})))).await;

        assert_eq!(status, StatusCode::OK);
        assert!(result.ok);
    }

    #[tokio::test]
    async fn test_rate_limit() {
        let shared = Arc::new(
            ContactState::new(ContactNotifier::new(None), ValidationRules::default())
                .with_limiter(ClientRateLimiter::new(1, Duration::from_secs(60))),
        );

        let (first, _) = send(
            contact_router(shared.clone()),
            contact_request(body(10_000, serde_json::json!({}))),
        )
        .await;
        let (second, result) = send(
            contact_router(shared),
            contact_request(body(10_000, serde_json::json!({}))),
        )
        .await;

        assert_eq!(first, StatusCode::OK);
        assert_eq!(second, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(result.error.as_deref(), Some(RATE_LIMITED_MESSAGE));
    }

    #[tokio::test]
    async fn test_distinct_peers_have_separate_budgets() {
        let shared = state(ContactNotifier::new(None));

        for i in 1..=8 {
            let peer = format!("198.51.100.{}:40000", i);
            let (status, result) = send(
                contact_router(shared.clone()),
                request_from(&peer, "application/json", body(10_000, serde_json::json!({}))),
            )
            .await;
            assert_eq!(status, StatusCode::OK, "peer {} was limited", peer);
            assert!(result.ok);
        }
    }

    #[tokio::test]
    async fn test_forwarded_header_ignored_without_trusted_proxy() {
        let shared = Arc::new(
            ContactState::new(ContactNotifier::new(None), ValidationRules::default())
                .with_limiter(ClientRateLimiter::new(1, Duration::from_secs(60))),
        );

        let mut statuses = Vec::new();
        for hop in ["10.0.0.1", "10.0.0.2"] {
            let mut request = contact_request(body(10_000, serde_json::json!({})));
            request
                .headers_mut()
                .insert("x-forwarded-for", hop.parse().unwrap());
            let (status, _) = send(contact_router(shared.clone()), request).await;
            statuses.push(status);
        }

        assert_eq!(statuses, [StatusCode::OK, StatusCode::TOO_MANY_REQUESTS]);
    }

    #[tokio::test]
    async fn test_trusted_proxy_keys_on_forwarded_client() {
        let shared = Arc::new(
            ContactState::new(ContactNotifier::new(None), ValidationRules::default())
                .with_limiter(ClientRateLimiter::new(1, Duration::from_secs(60)))
                .trusting_proxy(true),
        );

        // Same proxy peer, two different visitors
        for client in ["198.51.100.1", "198.51.100.2"] {
            let mut request = contact_request(body(10_000, serde_json::json!({})));
            request
                .headers_mut()
                .insert("x-forwarded-for", client.parse().unwrap());
            let (status, _) = send(contact_router(shared.clone()), request).await;
            assert_eq!(status, StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn test_malformed_json_gets_structured_reply() {
        let router = contact_router(state(ContactNotifier::new(None)));

        let (status, result) = send(router, contact_request("{\"email\": ".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!result.ok);
        assert_eq!(result.error.as_deref(), Some(INVALID_BODY_MESSAGE));
    }

    #[tokio::test]
    async fn test_wrong_content_type_gets_structured_reply() {
        let router = contact_router(state(ContactNotifier::new(None)));

        let (status, result) = send(
            router,
            request_from(PEER, "text/plain", body(10_000, serde_json::json!({}))),
        )
        .await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(!result.ok);
        assert_eq!(result.error.as_deref(), Some(INVALID_BODY_MESSAGE));
    }

    #[tokio::test]
    async fn test_wrong_field_type_gets_structured_reply() {
        let router = contact_router(state(ContactNotifier::new(None)));

        let (status, result) = send(
            router,
            contact_request(body(10_000, serde_json::json!({ "name": 42 }))),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(!result.ok);
        assert_eq!(result.error.as_deref(), Some(INVALID_BODY_MESSAGE));
    }

    #[tokio::test]
    async fn test_string_timestamp_is_accepted() {
        let (url, mut rx) = webhook_receiver().await;
        let router = contact_router(state(ContactNotifier::new(Some(url))));
        let started = (chrono::Utc::now().timestamp_millis() - 10_000).to_string();

        let (status, result) = send(
            router,
            contact_request(body(0, serde_json::json!({ "form_started_at": started }))),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(result.ok);
        assert!(
            tokio::time::timeout(Duration::from_secs(5), rx.recv())
                .await
                .is_ok()
        );
    }
}
