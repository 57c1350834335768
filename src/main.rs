#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::net::SocketAddr;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::EnvFilter;
    use trustplane::app::*;
    use trustplane::core::config::Config;
    use trustplane::core::contact::{
        ContactNotifier, ContactState, ValidationRules, contact_router,
    };
    use trustplane::core::pricing::{PricingCache, PricingState, StripeClient, pricing_router};

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load application config from environment variables
    let config = Config::from_env();

    // Log config status (without revealing secrets)
    tracing::info!(
        "Config loaded: site_url={}, contact_webhook={}, stripe={}, reject_personal_email={}, trust_proxy={}",
        config.site_url,
        config.has_contact_webhook(),
        config.has_stripe(),
        config.reject_personal_email,
        config.trust_proxy
    );

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = match get_configuration(None) {
        Ok(conf) => conf,
        Err(e) => {
            tracing::error!("Failed to load leptos configuration: {}", e);
            return;
        }
    };
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let contact_state = Arc::new(
        ContactState::new(
            ContactNotifier::new(config.contact_webhook_url.clone()),
            ValidationRules {
                reject_personal_email: config.reject_personal_email,
            },
        )
        .trusting_proxy(config.trust_proxy),
    );

    let stripe = config.stripe_secret_key.clone().map(StripeClient::new);
    let pricing_state = Arc::new(PricingState::new(
        stripe.clone(),
        PricingCache::new(stripe, config.pricing_cache_ttl),
        &config.site_url,
    ));

    // Forget rate limit buckets that have fully refilled
    {
        let contact_state = contact_state.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(300));
            loop {
                interval.tick().await;
                contact_state.limiter.prune();
                tracing::debug!(
                    clients = contact_state.limiter.tracked_clients(),
                    "Pruned contact rate limiter"
                );
            }
        });
    }

    // Create ServeDir for pkg with pre-compressed file support
    // This serves .br (brotli) and .gz (gzip) files automatically
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    // Build the Leptos router
    let leptos_router = Router::new()
        // Serve pre-compressed static assets from /pkg
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    // Build the main application router with compression
    let app = Router::new()
        // POST /api/contact
        .merge(contact_router(contact_state))
        // GET /api/pricing, POST /api/checkout
        .merge(pricing_router(pricing_state))
        // Leptos pages plus the static file fallback
        .merge(leptos_router)
        // Add compression with Brotli priority (best compression for web)
        // Compresses responses > 1KB, skips already compressed formats
        .layer(
            CompressionLayer::new()
                .br(true) // Brotli - best compression ratio
                .gzip(true) // Gzip - wide support fallback
                .quality(CompressionLevel::Best),
        )
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on http://{}", &addr);
    tracing::info!("Contact API: http://{}/api/contact", &addr);
    tracing::info!("Pricing API: http://{}/api/pricing", &addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            return;
        }
    };

    // Peer addresses key the contact rate limiter
    let service = app.into_make_service_with_connect_info::<SocketAddr>();
    if let Err(e) = axum::serve(listener, service).await {
        tracing::error!("Server error: {}", e);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
