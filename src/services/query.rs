//! GraphQL payload assembly
//!
//! Builds the JSON payloads sent to GitHub's GraphQL endpoint from static
//! query templates compiled into the binary.

use serde_json::{json, Value};

/// Search query returning the top ten Java framework repositories by stars.
/// The page size is fixed in the template.
const SEARCH_QUERY: &str = include_str!("../../graphql/search_frameworks.graphql");

/// Mutation adding a star to a repository.
const ADD_STAR_MUTATION: &str = include_str!("../../graphql/add_star.graphql");

/// Mutation removing a star from a repository.
const REMOVE_STAR_MUTATION: &str = include_str!("../../graphql/remove_star.graphql");

/// Search filter: Java framework repositories, most-starred first.
const SEARCH_FILTER: &str = "language:java sort:stars-desc topic:framework";

/// Payload for the framework search.
pub fn search_payload() -> Value {
    json!({
        "query": SEARCH_QUERY,
        "variables": { "query": SEARCH_FILTER },
    })
}

/// Payload starring the repository with the given opaque id.
pub fn add_star_payload(repository_id: &str) -> Value {
    json!({
        "query": ADD_STAR_MUTATION,
        "variables": { "repositoryId": repository_id },
    })
}

/// Payload removing the star from the repository with the given opaque id.
pub fn remove_star_payload(repository_id: &str) -> Value {
    json!({
        "query": REMOVE_STAR_MUTATION,
        "variables": { "repositoryId": repository_id },
    })
}
