// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `creditchat serve` command implementation.
//!
//! Wires the SQLite store, auth verifier, Gemini client, and (when
//! configured) the Stripe client into the chat engine, then starts the
//! HTTP gateway.

use std::sync::Arc;

use creditchat_config::CreditchatConfig;
use creditchat_core::error::CreditChatError;
use creditchat_core::{ConversationLog, CreditLedger, GenerationProvider, PaymentProcessor};
use creditchat_engine::{ChatEngine, PaymentIssuer};
use creditchat_gateway::{GatewayState, HttpIdentityVerifier, start_server};
use creditchat_gemini::GeminiClient;
use creditchat_storage::SqliteStore;
use creditchat_stripe::StripeClient;
use tracing::info;

/// Runs the `creditchat serve` command.
pub async fn run_serve(config: CreditchatConfig) -> Result<(), CreditChatError> {
    init_tracing(&config.service.log_level);

    info!("starting creditchat serve");

    let store = Arc::new(SqliteStore::new(config.storage.clone()));
    store.initialize().await?;

    let verifier = Arc::new(HttpIdentityVerifier::new(&config.auth)?);
    let provider: Arc<dyn GenerationProvider> = Arc::new(GeminiClient::new(&config.gemini)?);

    let processor: Option<Arc<dyn PaymentProcessor>> = if config.stripe.secret_key.is_some() {
        Some(Arc::new(StripeClient::new(&config.stripe)?))
    } else {
        info!("stripe.secret_key not configured, issuing placeholder payment intents");
        None
    };

    let ledger: Arc<dyn CreditLedger> = store.clone();
    let log: Arc<dyn ConversationLog> = store.clone();

    let engine = Arc::new(ChatEngine::new(
        verifier,
        ledger.clone(),
        log,
        provider,
        config.credits.cost_per_message,
        config.credits.history_limit,
    ));
    let payments = Arc::new(PaymentIssuer::new(
        ledger,
        processor,
        config.credits.unit_price_minor,
    ));

    let state = GatewayState { engine, payments };
    start_server(&config.server, state).await?;

    store.close().await?;
    Ok(())
}

/// Initializes the tracing subscriber from the configured log level,
/// overridable via RUST_LOG.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("creditchat={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
