//! Portfolio API
//!
//! Backend for a portfolio/freelance promotion website: static page content,
//! a project showcase, and a chatbot demo, served as JSON over HTTP.

pub mod api;
pub mod config;
pub mod content;
pub mod error;
pub mod middleware;

pub use error::{AppError, Result};

use content::PortfolioContent;

/// Application state shared across all handlers. Immutable once built.
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub content: PortfolioContent,
}

impl AppState {
    pub fn new(settings: config::Settings) -> Self {
        Self {
            settings,
            content: PortfolioContent::default(),
        }
    }
}
