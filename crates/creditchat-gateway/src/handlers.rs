// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the chat and payment endpoints.
//!
//! Status mapping is deliberately coarse: only the out-of-credits and
//! off-topic outcomes get dedicated statuses (402 and 400); every other
//! failure, including bad tokens, collapses to 500 with an `{error}`
//! body. The front end keys its UI off exactly these three shapes.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use creditchat_core::{CREDIT_PACKAGES, ChatExchange, CreditPackage};
use creditchat_engine::ChatError;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::server::GatewayState;

/// Request body for POST /v1/chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's message.
    pub message: String,
}

/// Response body for POST /v1/chat.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Generated assistant response.
    pub response: String,
    /// Balance after this turn.
    pub remaining_credits: i64,
}

/// Request body for POST /v1/payments/intent and /v1/payments/confirm.
#[derive(Debug, Deserialize)]
pub struct CreditsRequest {
    /// Credit quantity being purchased.
    pub credits: i64,
}

/// Response body for POST /v1/payments/intent.
#[derive(Debug, Serialize)]
pub struct IntentResponse {
    pub client_secret: String,
    pub payment_intent_id: String,
    /// Charge amount in minor currency units.
    pub amount: i64,
    pub credits: i64,
}

/// Response body for POST /v1/payments/confirm.
#[derive(Debug, Serialize)]
pub struct ConfirmResponse {
    pub credits_added: i64,
    pub remaining_credits: i64,
}

/// Response body for GET /v1/history.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    /// Recent exchanges, oldest first.
    pub messages: Vec<ChatExchange>,
}

/// Response body for GET /v1/packages.
#[derive(Debug, Serialize)]
pub struct PackagesResponse {
    /// The storefront package table.
    pub packages: Vec<CreditPackage>,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

/// Extracts the bearer token from the Authorization header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, Response> {
    let header = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            error_body(StatusCode::INTERNAL_SERVER_ERROR, "No authorization header")
        })?;
    Ok(header.strip_prefix("Bearer ").unwrap_or(header))
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Maps a pipeline error to its HTTP status and user-facing message.
fn map_chat_error(err: ChatError) -> Response {
    match err {
        ChatError::InsufficientCredits => error_body(
            StatusCode::PAYMENT_REQUIRED,
            "No credits left. Please purchase more credits to continue.",
        ),
        ChatError::OutOfScope => error_body(
            StatusCode::BAD_REQUEST,
            "This bot only answers Python & Machine Learning questions. Please ask about \
             Python programming, ML algorithms, data science, or related topics.",
        ),
        ChatError::Unauthorized => {
            error_body(StatusCode::INTERNAL_SERVER_ERROR, "Invalid token")
        }
        ChatError::InvalidInput(message) => {
            error_body(StatusCode::INTERNAL_SERVER_ERROR, &message)
        }
        ChatError::Generation(message) => {
            warn!(%message, "generation failed");
            error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate response",
            )
        }
        ChatError::Internal(message) => {
            warn!(%message, "request failed");
            error_body(StatusCode::INTERNAL_SERVER_ERROR, &message)
        }
    }
}

/// POST /v1/chat
pub async fn post_chat(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    Json(body): Json<ChatRequest>,
) -> Response {
    let token = match bearer_token(&headers) {
        Ok(token) => token,
        Err(response) => return response,
    };

    match state.engine.handle(token, &body.message).await {
        Ok(reply) => (
            StatusCode::OK,
            Json(ChatResponse {
                response: reply.response,
                remaining_credits: reply.remaining_credits,
            }),
        )
            .into_response(),
        Err(err) => map_chat_error(err),
    }
}

/// POST /v1/payments/intent
pub async fn post_payment_intent(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    Json(body): Json<CreditsRequest>,
) -> Response {
    let token = match bearer_token(&headers) {
        Ok(token) => token,
        Err(response) => return response,
    };

    let identity = match state.engine.authenticate(token).await {
        Ok(identity) => identity,
        Err(err) => return map_chat_error(err),
    };

    match state.payments.create_intent(&identity, body.credits).await {
        Ok(reply) => (
            StatusCode::OK,
            Json(IntentResponse {
                client_secret: reply.client_secret,
                payment_intent_id: reply.payment_intent_id,
                amount: reply.amount,
                credits: reply.credits,
            }),
        )
            .into_response(),
        Err(err) => map_chat_error(err),
    }
}

/// POST /v1/payments/confirm
pub async fn post_payment_confirm(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    Json(body): Json<CreditsRequest>,
) -> Response {
    let token = match bearer_token(&headers) {
        Ok(token) => token,
        Err(response) => return response,
    };

    let identity = match state.engine.authenticate(token).await {
        Ok(identity) => identity,
        Err(err) => return map_chat_error(err),
    };

    match state.payments.confirm(&identity, body.credits).await {
        Ok(reply) => (
            StatusCode::OK,
            Json(ConfirmResponse {
                credits_added: reply.credits_added,
                remaining_credits: reply.remaining_credits,
            }),
        )
            .into_response(),
        Err(err) => map_chat_error(err),
    }
}

/// GET /v1/history
pub async fn get_history(State(state): State<GatewayState>, headers: HeaderMap) -> Response {
    let token = match bearer_token(&headers) {
        Ok(token) => token,
        Err(response) => return response,
    };

    match state.engine.history(token).await {
        Ok(messages) => (StatusCode::OK, Json(HistoryResponse { messages })).into_response(),
        Err(err) => map_chat_error(err),
    }
}

/// GET /v1/packages
pub async fn get_packages() -> Json<PackagesResponse> {
    Json(PackagesResponse {
        packages: CREDIT_PACKAGES.to_vec(),
    })
}

/// GET /health
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
