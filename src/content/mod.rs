//! Static portfolio content served by the page endpoints
//!
//! Everything here is built once at startup and never mutated, so repeated
//! reads serialize to identical JSON.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Landing page copy
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct HomeContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

/// About page copy
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct AboutContent {
    pub bio: String,
    /// Skills in display order
    pub skills: Vec<String>,
    pub experience: String,
}

/// A showcased project
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Technologies in display order
    pub technologies: Vec<String>,
    #[serde(default)]
    pub link: String,
}

/// All page content, held in the application state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioContent {
    pub home: HomeContent,
    pub about: AboutContent,
    pub projects: Vec<Project>,
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            home: home(),
            about: about(),
            projects: projects(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn home() -> HomeContent {
    HomeContent {
        title: "Welcome to My Portfolio".to_string(),
        subtitle: "Chatbot Developer & AI Solutions Expert".to_string(),
        description: "I specialize in creating intelligent chatbots and AI-powered solutions"
            .to_string(),
    }
}

pub fn about() -> AboutContent {
    AboutContent {
        bio: "Experienced developer specializing in chatbot development and AI integration"
            .to_string(),
        skills: strings(&[
            "Python",
            "FastAPI",
            "React",
            "Machine Learning",
            "Natural Language Processing",
        ]),
        experience: "5+ years in software development".to_string(),
    }
}

/// Project ids are assigned by hand and must stay unique
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "AI Customer Support Chatbot".to_string(),
            description: "Intelligent chatbot for automated customer service".to_string(),
            technologies: strings(&["Python", "NLP", "FastAPI"]),
            link: "#".to_string(),
        },
        Project {
            id: 2,
            title: "Multi-language Chat Assistant".to_string(),
            description: "Chatbot supporting multiple languages with real-time translation"
                .to_string(),
            technologies: strings(&["Python", "Transformers", "Redis"]),
            link: "#".to_string(),
        },
    ]
}
