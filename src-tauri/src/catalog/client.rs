//! Remote Catalog Client
//!
//! Read-only queries against the Jikan REST catalog. One request in, one
//! typed response or failure out: no retry, no backoff, no caching. A
//! non-success status surfaces as `CatalogError::Status` with the code.

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::CatalogConfig;
use crate::domain::{Anime, CharacterRole, Episode, Recommendation, StaffMember};

use super::types::{Envelope, Page};

/// Failure at the catalog boundary
#[derive(Debug)]
pub enum CatalogError {
    /// Non-success HTTP status from the catalog
    Status(u16),
    /// Transport or decode failure
    Request(reqwest::Error),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Status(code) => write!(f, "catalog responded with status {}", code),
            CatalogError::Request(err) => write!(f, "catalog request failed: {}", err),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Request(err)
    }
}

/// Stateless HTTP client for the catalog service
pub struct CatalogClient {
    http: Client,
    config: CatalogConfig,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.config.base_url, path);
        let response = self.http.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, code = status.as_u16(), "catalog returned non-success status");
            return Err(CatalogError::Status(status.as_u16()));
        }

        Ok(response.json::<T>().await?)
    }

    fn sfw_param(&self) -> Option<(&'static str, String)> {
        self.config.sfw_only.then(|| ("sfw", "true".to_string()))
    }

    /// Text search, best-scored first
    pub async fn search(&self, query: &str, page: u32) -> Result<Page<Anime>, CatalogError> {
        let mut params = vec![
            ("q", query.to_string()),
            ("page", page.to_string()),
            ("order_by", "score".to_string()),
            ("sort", "desc".to_string()),
        ];
        params.extend(self.sfw_param());
        self.get_json("/anime", &params).await
    }

    /// Full record for one title
    pub async fn full(&self, mal_id: u32) -> Result<Anime, CatalogError> {
        let body: Envelope<Anime> = self.get_json(&format!("/anime/{}/full", mal_id), &[]).await?;
        Ok(body.data)
    }

    pub async fn episodes(&self, mal_id: u32) -> Result<Vec<Episode>, CatalogError> {
        let body: Page<Episode> = self.get_json(&format!("/anime/{}/episodes", mal_id), &[]).await?;
        Ok(body.data)
    }

    pub async fn characters(&self, mal_id: u32) -> Result<Vec<CharacterRole>, CatalogError> {
        let body: Page<CharacterRole> =
            self.get_json(&format!("/anime/{}/characters", mal_id), &[]).await?;
        Ok(body.data)
    }

    pub async fn staff(&self, mal_id: u32) -> Result<Vec<StaffMember>, CatalogError> {
        let body: Page<StaffMember> = self.get_json(&format!("/anime/{}/staff", mal_id), &[]).await?;
        Ok(body.data)
    }

    pub async fn recommendations(&self, mal_id: u32) -> Result<Vec<Recommendation>, CatalogError> {
        let body: Page<Recommendation> =
            self.get_json(&format!("/anime/{}/recommendations", mal_id), &[]).await?;
        Ok(body.data)
    }

    /// Most-popular listing
    pub async fn popular(&self, page: u32) -> Result<Page<Anime>, CatalogError> {
        let mut params = vec![
            ("order_by", "popularity".to_string()),
            ("page", page.to_string()),
        ];
        params.extend(self.sfw_param());
        self.get_json("/anime", &params).await
    }

    /// Titles airing in the current season
    pub async fn season_now(&self) -> Result<Page<Anime>, CatalogError> {
        self.get_json("/seasons/now", &[]).await
    }

    /// Top-ranked listing
    pub async fn top(&self, page: u32) -> Result<Page<Anime>, CatalogError> {
        self.get_json("/top/anime", &[("page", page.to_string())]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_names_the_code() {
        let err = CatalogError::Status(429);
        assert_eq!(err.to_string(), "catalog responded with status 429");
    }

    #[test]
    fn test_sfw_param_follows_config() {
        let filtered = CatalogClient::new(CatalogConfig::default());
        assert_eq!(filtered.sfw_param(), Some(("sfw", "true".to_string())));

        let unfiltered = CatalogClient::new(CatalogConfig {
            sfw_only: false,
            ..Default::default()
        });
        assert_eq!(unfiltered.sfw_param(), None);
    }
}
