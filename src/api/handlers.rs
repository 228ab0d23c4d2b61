//! HTTP request handlers for the page endpoints

use crate::api::models::{HealthResponse, StatusMessage};
use crate::content::{AboutContent, HomeContent, Project};
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::debug;

/// Root status message
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "API is running", body = StatusMessage))
)]
pub async fn root() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: "Portfolio API is running".to_string(),
    })
}

/// Landing page content
#[utoipa::path(
    get,
    path = "/api/home",
    tag = "home",
    responses((status = 200, description = "Home page content", body = HomeContent))
)]
pub async fn get_home(State(state): State<Arc<AppState>>) -> Json<HomeContent> {
    debug!("Serving home content");
    Json(state.content.home.clone())
}

/// About page content
#[utoipa::path(
    get,
    path = "/api/about",
    tag = "about",
    responses((status = 200, description = "About page content", body = AboutContent))
)]
pub async fn get_about(State(state): State<Arc<AppState>>) -> Json<AboutContent> {
    debug!("Serving about content");
    Json(state.content.about.clone())
}

/// Showcased projects, in display order
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses((status = 200, description = "Project list", body = [Project]))
)]
pub async fn get_projects(State(state): State<Arc<AppState>>) -> Json<Vec<Project>> {
    debug!(count = state.content.projects.len(), "Serving projects");
    Json(state.content.projects.clone())
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
