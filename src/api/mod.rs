//! API module - HTTP routes, handlers, and models

pub mod chatbot_handlers;
pub mod handlers;
pub mod models;
pub mod routes;
