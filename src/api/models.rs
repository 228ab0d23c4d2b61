//! API request and response models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Root status response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct StatusMessage {
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Chatbot demo request
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ChatMessage {
    /// Text sent by the visitor
    pub message: String,
}

/// Chatbot demo response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
}

/// Request accepted by the older echo route; `message` may be omitted
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct EchoRequest {
    #[serde(default)]
    pub message: String,
}

/// Response of the older echo route
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct EchoReply {
    pub reply: String,
}
