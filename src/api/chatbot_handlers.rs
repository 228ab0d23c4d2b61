//! Chatbot demo handlers
//!
//! No model is called: both routes answer by interpolating the visitor's
//! message into a fixed sentence.

use crate::api::models::{ChatMessage, ChatResponse, EchoReply, EchoRequest};
use crate::error::{AppError, Result};
use crate::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::info;

const DEMO_PREFIX: &str =
    "This is a demo response. In production, this would connect to your actual chatbot. You said: ";

/// Canned demo reply for a visitor message
pub fn demo_reply(message: &str) -> String {
    format!("{}{}", DEMO_PREFIX, message)
}

/// Decode a JSON request body.
///
/// A body sent without a content type is still read as JSON; any other
/// declared type must be JSON (`application/json` or a `+json` suffix).
pub fn parse_json_body<T: DeserializeOwned>(headers: &HeaderMap, body: &[u8]) -> Result<T> {
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        let essence = content_type
            .to_str()
            .ok()
            .and_then(|value| value.split(';').next())
            .map(|value| value.trim().to_ascii_lowercase())
            .unwrap_or_default();

        if essence != "application/json" && !essence.ends_with("+json") {
            return Err(AppError::Validation(
                "Expected request with `Content-Type: application/json`".to_string(),
            ));
        }
    }

    serde_json::from_slice(body).map_err(|e| {
        AppError::Validation(format!("Failed to parse the request body as JSON: {}", e))
    })
}

/// Chatbot demo endpoint
#[utoipa::path(
    post,
    path = "/api/chatbot/demo",
    tag = "chatbot",
    request_body = ChatMessage,
    responses(
        (status = 200, description = "Demo reply", body = ChatResponse),
        (status = 422, description = "Missing or malformed message", body = ErrorResponse)
    )
)]
pub async fn chatbot_demo(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ChatResponse>> {
    let request: ChatMessage = parse_json_body(&headers, &body)?;

    info!(
        message_len = request.message.len(),
        chatbot_configured = state.settings.chatbot.is_configured(),
        "Received chatbot demo request"
    );

    Ok(Json(ChatResponse {
        response: demo_reply(&request.message),
    }))
}

/// Plain echo endpoint kept for clients of the earlier API
#[utoipa::path(
    post,
    path = "/api/chatbot",
    tag = "chatbot",
    request_body = EchoRequest,
    responses(
        (status = 200, description = "Echoed message", body = EchoReply),
        (status = 422, description = "Body is not JSON", body = ErrorResponse)
    )
)]
pub async fn chatbot_echo(headers: HeaderMap, body: Bytes) -> Result<Json<EchoReply>> {
    let request: EchoRequest = parse_json_body(&headers, &body)?;

    info!(message_len = request.message.len(), "Received chatbot echo request");

    Ok(Json(EchoReply {
        reply: format!("Echo: {}", request.message),
    }))
}
