use std::fmt;
use std::time::Duration;

use reqwest::{Client, RequestBuilder};

use super::types::{OmdbDetailResponse, OmdbSearchResponse, Plot};
use crate::error::CatalogError;
use crate::traits::{CandidateSummary, ImdbId, MovieCatalog, MovieDetail};

pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// OMDb API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct OmdbClient {
    api_key: String,
    base_url: String,
    plot: Plot,
    http: Client,
}

impl OmdbClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            plot: Plot::default(),
            http: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_plot(mut self, plot: Plot) -> Self {
        self.plot = plot;
        self
    }

    /// Rebuild the HTTP client with a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, CatalogError> {
        self.http = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    fn search_request(&self, query: &str) -> RequestBuilder {
        self.http
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("s", query)])
    }

    fn detail_request(&self, id: &ImdbId) -> RequestBuilder {
        self.http.get(&self.base_url).query(&[
            ("apikey", self.api_key.as_str()),
            ("i", id.as_str()),
            ("plot", self.plot.as_query_value()),
        ])
    }

    /// Check the HTTP response for errors and return the body text on failure.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, CatalogError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "OMDb API error");
            Err(CatalogError::Api {
                status,
                message: body,
            })
        }
    }
}

impl fmt::Debug for OmdbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OmdbClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("plot", &self.plot)
            .finish()
    }
}

impl MovieCatalog for OmdbClient {
    async fn search_movies(&self, query: &str) -> Result<Vec<CandidateSummary>, CatalogError> {
        let resp = self.search_request(query).send().await?;

        let resp = Self::check_response(resp).await?;
        let search: OmdbSearchResponse = resp
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        search.into_candidates()
    }

    async fn movie_detail(&self, id: &ImdbId) -> Result<MovieDetail, CatalogError> {
        let resp = self.detail_request(id).send().await?;

        let resp = Self::check_response(resp).await?;
        let detail: OmdbDetailResponse = resp
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        detail.into_detail()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_pairs(builder: RequestBuilder) -> Vec<(String, String)> {
        let req = builder.build().unwrap();
        req.url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_search_query_is_sent_verbatim() {
        let client = OmdbClient::new("secret".into());
        let pairs = query_pairs(client.search_request("  Amélie & co?"));
        assert_eq!(
            pairs,
            vec![
                ("apikey".to_string(), "secret".to_string()),
                ("s".to_string(), "  Amélie & co?".to_string()),
            ]
        );
    }

    #[test]
    fn test_detail_request_carries_id_and_plot() {
        let client = OmdbClient::new("secret".into())
            .with_base_url("http://localhost:9999/")
            .with_plot(Plot::Full);
        let req = client
            .detail_request(&ImdbId::new("tt1375666"))
            .build()
            .unwrap();
        assert_eq!(req.url().host_str(), Some("localhost"));

        let pairs = query_pairs(client.detail_request(&ImdbId::new("tt1375666")));
        assert!(pairs.contains(&("i".to_string(), "tt1375666".to_string())));
        assert!(pairs.contains(&("plot".to_string(), "full".to_string())));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = OmdbClient::new("do-not-print".into());
        let dbg = format!("{client:?}");
        assert!(!dbg.contains("do-not-print"));
        assert!(dbg.contains("<redacted>"));
    }
}
