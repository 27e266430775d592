//! Catalog-agnostic movie types and the service trait.
//!
//! Sessions and the UI only depend on these, so tests can swap the OMDb
//! client for an in-memory catalog.

use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A movie catalog that can search by title and look up a single title.
pub trait MovieCatalog: Send + Sync {
    /// Search for movies by free-text title.
    fn search_movies(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<CandidateSummary>, CatalogError>> + Send;

    /// Fetch the full detail record for one identifier.
    fn movie_detail(
        &self,
        id: &ImdbId,
    ) -> impl Future<Output = Result<MovieDetail, CatalogError>> + Send;
}

/// An IMDb identifier such as `tt1375666`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImdbId(String);

impl ImdbId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImdbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImdbId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ImdbId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A search hit: the minimal record shown in the candidate list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSummary {
    pub id: ImdbId,
    pub title: String,
    pub year: String,
    pub poster_url: Option<String>,
    pub media_type: Option<String>,
}

/// The full record for a single title.
///
/// Numeric-looking fields (`runtime`, `imdb_rating`, `imdb_votes`) are kept
/// in the catalog's textual form; callers decide how to coerce them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: ImdbId,
    pub title: String,
    pub year: String,
    pub poster_url: Option<String>,
    pub rated: Option<String>,
    pub released: Option<String>,
    pub runtime: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub actors: Option<String>,
    pub plot: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub awards: Option<String>,
    pub imdb_rating: Option<String>,
    pub imdb_votes: Option<String>,
}
