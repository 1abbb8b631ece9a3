//! GitHub API client
//!
//! Outbound calls to GitHub's GraphQL and REST endpoints. One client is
//! built from the configuration at startup and shared across requests; the
//! credential to use is a parameter on every call.

use reqwest::header::{AUTHORIZATION, LINK};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::models::RepositoryRecord;
use crate::services::pagination::contributors_from_link_header;
use crate::services::query;

/// User-Agent sent on every outbound call; GitHub rejects requests without one.
const USER_AGENT: &str = concat!("github-explorer/", env!("CARGO_PKG_VERSION"));

/// Errors from outbound GitHub calls
#[derive(Debug, Error)]
pub enum GitHubError {
    /// The GraphQL response could not be decoded into the expected shape
    #[error("Error while running query: {0}")]
    Query(String),

    /// GitHub answered with a non-success status
    #[error("GitHub responded with status {status}")]
    Upstream { status: u16, body: String },

    /// The request never produced a response
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A contributor lookup task was cancelled or panicked
    #[error("Contributor lookup failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Credential attached to an outbound call.
///
/// `Service` is the shared service-level token, used when the caller sent no
/// credentials of their own. `Caller` forwards the caller's Authorization
/// header value to GitHub verbatim.
#[derive(Debug, Clone)]
pub enum Auth {
    Service,
    Caller(String),
}

/// Client for the GitHub GraphQL and REST APIs
#[derive(Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
    service_token: String,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self, GitHubError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            base_url: config.github_api_url.clone(),
            service_token: config.github_service_token.clone(),
        })
    }

    fn authorization(&self, auth: &Auth) -> String {
        match auth {
            Auth::Service => format!("Bearer {}", self.service_token),
            Auth::Caller(token) => token.clone(),
        }
    }

    /// POST a GraphQL payload, returning the raw response body on success.
    async fn graphql(&self, auth: &Auth, payload: serde_json::Value) -> Result<String, GitHubError> {
        let response = self
            .http
            .post(format!("{}/graphql", self.base_url))
            .header(AUTHORIZATION, self.authorization(auth))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GitHubError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }

    /// Run the framework search and enrich every node with its contributor
    /// count. Generic over the anonymous and authenticated result variants,
    /// which deserialize from the same response.
    pub async fn search_frameworks<T>(&self, auth: Auth) -> Result<Vec<T>, GitHubError>
    where
        T: RepositoryRecord + DeserializeOwned,
    {
        let body = self.graphql(&auth, query::search_payload()).await?;
        let mut results: Vec<T> = decode_search_nodes(&body)?;

        // Fan the contributor lookups out; the batch waits for all of them
        // and fails if any call fails.
        let lookups: Vec<_> = results
            .iter()
            .map(|result| {
                let client = self.clone();
                let auth = auth.clone();
                let name_with_owner = result.name_with_owner().to_string();
                tokio::spawn(async move { client.contributor_count(&auth, &name_with_owner).await })
            })
            .collect();

        let counts = futures::future::join_all(lookups).await;
        for (result, joined) in results.iter_mut().zip(counts) {
            result.set_contributors_count(joined??);
        }

        Ok(results)
    }

    /// Count contributors through the pagination metadata of a one-per-page
    /// listing that includes anonymous contributors. A repository with a
    /// single contributor produces no `Link` header at all.
    pub async fn contributor_count(
        &self,
        auth: &Auth,
        name_with_owner: &str,
    ) -> Result<u32, GitHubError> {
        let response = self
            .http
            .get(format!("{}/repos/{}/contributors", self.base_url, name_with_owner))
            .query(&[("per_page", "1"), ("anon", "1")])
            .header(AUTHORIZATION, self.authorization(auth))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(GitHubError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let count = match response.headers().get(LINK) {
            None => 1,
            Some(link) => link
                .to_str()
                .map(contributors_from_link_header)
                .unwrap_or(0),
        };

        debug!(repository = name_with_owner, count, "contributor count resolved");
        Ok(count)
    }

    /// Star a repository by its opaque GraphQL id, discarding the response
    /// body on success.
    pub async fn star_repository(&self, token: &str, id: &str) -> Result<(), GitHubError> {
        self.graphql(&Auth::Caller(token.to_string()), query::add_star_payload(id))
            .await?;
        Ok(())
    }

    /// Remove the caller's star from a repository.
    pub async fn unstar_repository(&self, token: &str, id: &str) -> Result<(), GitHubError> {
        self.graphql(&Auth::Caller(token.to_string()), query::remove_star_payload(id))
            .await?;
        Ok(())
    }
}

/// Pull `data.search.nodes` out of a GraphQL response body and deserialize
/// the node list.
fn decode_search_nodes<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, GitHubError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| GitHubError::Query(format!("response is not valid JSON: {e}")))?;

    let nodes = value
        .pointer("/data/search/nodes")
        .ok_or_else(|| GitHubError::Query("response has no data.search.nodes".to_string()))?;

    serde_json::from_value(nodes.clone())
        .map_err(|e| GitHubError::Query(format!("unexpected search node shape: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RepositoryResult;
    use serde_json::json;

    #[test]
    fn decodes_nodes_from_a_search_response() {
        let body = json!({
            "data": {
                "search": {
                    "nodes": [{
                        "nameWithOwner": "acme/fw",
                        "name": "fw",
                        "description": null,
                        "url": "https://github.com/acme/fw",
                        "licenseInfo": null,
                        "stargazers": { "totalCount": 42 },
                        "viewerHasStarred": true
                    }]
                }
            }
        })
        .to_string();

        let results: Vec<RepositoryResult> = decode_search_nodes(&body).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name_with_owner, "acme/fw");
        assert!(results[0].contributors_count.is_none());
    }

    #[test]
    fn missing_nodes_is_a_query_error() {
        let body = json!({ "errors": [{ "message": "bad query" }] }).to_string();
        let err = decode_search_nodes::<RepositoryResult>(&body).unwrap_err();
        assert!(matches!(err, GitHubError::Query(_)));
    }

    #[test]
    fn invalid_json_is_a_query_error() {
        let err = decode_search_nodes::<RepositoryResult>("not json").unwrap_err();
        assert!(matches!(err, GitHubError::Query(_)));
    }
}
