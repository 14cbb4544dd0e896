//! FunPoint Merchant Demo Server
//!
//! A local merchant integration against the FunPoint AIO checkout:
//! signs outbound orders, renders the auto-submit checkout form, and
//! verifies gateway callbacks.
//!
//! Usage:
//!   # Staging credentials (default)
//!   cargo run --package funpoint-server
//!
//!   # Production credentials
//!   FUNPOINT_MERCHANT_ID=... FUNPOINT_HASH_KEY=... FUNPOINT_HASH_IV=... \
//!     cargo run --package funpoint-server
//!
//! Test card: 4311-9522-2222-2222, CVV 222 (staging only).

mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use funpoint_core::SecretPair;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Gateway staging credentials, used when no environment overrides are set
const STAGING_MERCHANT_ID: &str = "1000031";
const STAGING_HASH_KEY: &str = "265fIDjIvesceXWM";
const STAGING_HASH_IV: &str = "pOOvhGd1V2pJbjfX";
const STAGING_CHECKOUT_URL: &str = "https://payment-stage.funpoint.com.tw/Cashier/AioCheckOut/V5";

/// Per-merchant configuration shared by every handler
pub struct GatewayConfig {
    pub merchant_id: String,
    pub secrets: SecretPair,
    pub checkout_url: String,
    pub base_url: String,
}

impl GatewayConfig {
    /// Load from the environment, falling back to staging credentials.
    ///
    /// Empty secrets abort startup: operating with an empty HashKey or
    /// HashIV produces a forgeable checksum.
    fn from_env() -> Self {
        let env_or = |name: &str, default: &str| {
            std::env::var(name).unwrap_or_else(|_| default.to_string())
        };

        let hash_key = env_or("FUNPOINT_HASH_KEY", STAGING_HASH_KEY);
        let hash_iv = env_or("FUNPOINT_HASH_IV", STAGING_HASH_IV);
        let secrets = match SecretPair::new(hash_key, hash_iv) {
            Ok(secrets) => secrets,
            Err(e) => {
                eprintln!("Fatal: {e}");
                std::process::exit(1);
            }
        };

        Self {
            merchant_id: env_or("FUNPOINT_MERCHANT_ID", STAGING_MERCHANT_ID),
            secrets,
            checkout_url: env_or("FUNPOINT_CHECKOUT_URL", STAGING_CHECKOUT_URL),
            base_url: env_or("FUNPOINT_BASE_URL", "http://localhost:8000"),
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "funpoint_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(GatewayConfig::from_env());
    tracing::info!(
        merchant_id = %config.merchant_id,
        checkout_url = %config.checkout_url,
        "Merchant configuration loaded"
    );

    // Build router
    let app = Router::new()
        // Outbound: browser-facing checkout redirects
        .route("/pay", get(handlers::pay))
        .route("/pay-recurring", get(handlers::pay_recurring))
        // Inbound: gateway callbacks
        .route("/notify", post(handlers::notify))
        .route("/period-notify", post(handlers::period_notify))
        // Browser-facing result page
        .route("/result", post(handlers::result))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .with_state(config);

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], 8000));
    tracing::info!("FunPoint merchant demo listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
