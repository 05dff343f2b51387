// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, CORS, and shared state. OPTIONS preflights are
//! answered by the CORS layer, matching what the browser front end sends
//! before every request.

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderName, Method, header},
    routing::{get, post},
};
use creditchat_config::model::ServerConfig;
use creditchat_core::CreditChatError;
use creditchat_engine::{ChatEngine, PaymentIssuer};
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// Chat pipeline orchestrator.
    pub engine: Arc<ChatEngine>,
    /// Payment intent issuer and confirmation handler.
    pub payments: Arc<PaymentIssuer>,
}

/// Builds the full application router.
pub fn router(state: GatewayState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ]);

    Router::new()
        .route("/v1/chat", post(handlers::post_chat))
        .route("/v1/payments/intent", post(handlers::post_payment_intent))
        .route("/v1/payments/confirm", post(handlers::post_payment_confirm))
        .route("/v1/history", get(handlers::get_history))
        .route("/v1/packages", get(handlers::get_packages))
        .route("/health", get(handlers::get_health))
        .with_state(state)
        .layer(cors)
}

/// Start the gateway HTTP server.
///
/// Binds to the configured host:port and serves until the process exits.
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), CreditChatError> {
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| CreditChatError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| CreditChatError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}
