//! Repository result models
//!
//! DTOs for the GraphQL search response, in two variants: the anonymous
//! shape, and the authenticated shape which adds the viewer's star state.
//! Both mirror the node shape GitHub returns, so they deserialize straight
//! from `data.search.nodes` and serialize back to the caller unchanged.

use serde::{Deserialize, Serialize};

/// Stargazer count as returned inside a search node
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stargazers {
    pub total_count: u32,
}

/// License information attached to a repository, when one is set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseInfo {
    pub name: String,
}

/// One search result, anonymous variant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryResult {
    /// Consumed by the contributor lookup, never serialized back
    #[serde(skip_serializing)]
    pub name_with_owner: String,
    pub name: String,
    pub description: Option<String>,
    pub license_info: Option<LicenseInfo>,
    pub url: String,
    pub stargazers: Stargazers,
    /// Absent until enrichment completes
    #[serde(default)]
    pub contributors_count: Option<u32>,
}

/// One search result, authenticated variant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryResultAuthenticated {
    /// Consumed by the contributor lookup, never serialized back
    #[serde(skip_serializing)]
    pub name_with_owner: String,
    pub name: String,
    pub description: Option<String>,
    pub license_info: Option<LicenseInfo>,
    pub url: String,
    pub stargazers: Stargazers,
    pub viewer_has_starred: bool,
    /// Absent until enrichment completes
    #[serde(default)]
    pub contributors_count: Option<u32>,
}

/// Access the enrichment and sort stages need from a result, independent of
/// which response variant it is.
pub trait RepositoryRecord {
    fn name_with_owner(&self) -> &str;
    fn contributors_count(&self) -> Option<u32>;
    fn set_contributors_count(&mut self, count: u32);
}

impl RepositoryRecord for RepositoryResult {
    fn name_with_owner(&self) -> &str {
        &self.name_with_owner
    }

    fn contributors_count(&self) -> Option<u32> {
        self.contributors_count
    }

    fn set_contributors_count(&mut self, count: u32) {
        self.contributors_count = Some(count);
    }
}

impl RepositoryRecord for RepositoryResultAuthenticated {
    fn name_with_owner(&self) -> &str {
        &self.name_with_owner
    }

    fn contributors_count(&self) -> Option<u32> {
        self.contributors_count
    }

    fn set_contributors_count(&mut self, count: u32) {
        self.contributors_count = Some(count);
    }
}

/// Query parameters for the framework listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TopFrameworksQuery {
    /// Contributor-count sort mode; unrecognized values leave order unchanged
    #[serde(rename = "sortByContributors")]
    pub sort_by_contributors: Option<String>,
}

/// Contributor-count sort mode from the `sortByContributors` query parameter.
///
/// The directions are inverted relative to their names: `desc` orders by
/// contributor count ascending and `asc` orders descending. This is the
/// long-standing public behavior of the endpoint and is pinned by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributorSort {
    Asc,
    Desc,
}

impl ContributorSort {
    /// Parse the query parameter; anything unrecognized means "leave the
    /// order unchanged".
    pub fn from_param(param: Option<&str>) -> Option<Self> {
        match param {
            Some("asc") => Some(Self::Asc),
            Some("desc") => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Sort an enriched batch in place. Must not run before every result has
/// its contributor count populated. The sort is stable for ties.
pub fn sort_by_contributors<T: RepositoryRecord>(results: &mut [T], mode: Option<ContributorSort>) {
    match mode {
        Some(ContributorSort::Desc) => {
            results.sort_by_key(|r| r.contributors_count().unwrap_or(0));
        }
        Some(ContributorSort::Asc) => {
            results.sort_by(|a, b| {
                b.contributors_count()
                    .unwrap_or(0)
                    .cmp(&a.contributors_count().unwrap_or(0))
            });
        }
        None => {}
    }
}
