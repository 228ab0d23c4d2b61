//! HTTP route definitions

use crate::api::models::*;
use crate::api::{chatbot_handlers, handlers};
use crate::content::{AboutContent, HomeContent, Project};
use crate::error::{ErrorDetail, ErrorResponse, Result};
use crate::middleware::cors::cors_layer;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Backend API for portfolio/freelance promotion website",
        license(name = "MIT"),
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        handlers::root,
        handlers::get_home,
        handlers::get_about,
        handlers::get_projects,
        handlers::health_check,
        chatbot_handlers::chatbot_demo,
        chatbot_handlers::chatbot_echo,
    ),
    components(schemas(
        StatusMessage,
        HealthResponse,
        HomeContent,
        AboutContent,
        Project,
        ChatMessage,
        ChatResponse,
        EchoRequest,
        EchoReply,
        ErrorResponse,
        ErrorDetail,
    )),
    tags(
        (name = "home", description = "Landing page content"),
        (name = "about", description = "About page content"),
        (name = "projects", description = "Project showcase"),
        (name = "chatbot", description = "Chatbot demo endpoints"),
        (name = "health", description = "Service status"),
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router(state: Arc<crate::AppState>) -> Result<Router> {
    let cors = cors_layer(&state.settings.cors)?;

    // Page resources also answer on their trailing-slash form
    let api_routes = Router::new()
        .route("/home", get(handlers::get_home))
        .route("/home/", get(handlers::get_home))
        .route("/about", get(handlers::get_about))
        .route("/about/", get(handlers::get_about))
        .route("/projects", get(handlers::get_projects))
        .route("/projects/", get(handlers::get_projects))
        .route("/health", get(handlers::health_check))
        .route("/chatbot", post(chatbot_handlers::chatbot_echo))
        .route("/chatbot/demo", post(chatbot_handlers::chatbot_demo));

    Ok(Router::new()
        .route("/", get(handlers::root))
        // Interactive docs
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}
