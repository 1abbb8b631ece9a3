//! GitHub framework explorer
//!
//! A thin proxy over the GitHub API: searches for the most popular Java
//! frameworks, enriches each result with a contributor count derived from
//! pagination metadata, and forwards star/unstar actions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::AppError;

pub use models::{
    ContributorSort, LicenseInfo, RepositoryResult, RepositoryResultAuthenticated, Stargazers,
    TopFrameworksQuery,
};

pub use services::{Auth, GitHubClient, GitHubError};

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub github: GitHubClient,
}
