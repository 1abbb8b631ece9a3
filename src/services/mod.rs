pub mod github;
pub mod pagination;
pub mod query;

pub use github::{Auth, GitHubClient, GitHubError};
