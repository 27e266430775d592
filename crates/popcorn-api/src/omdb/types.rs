use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::traits::{CandidateSummary, ImdbId, MovieDetail};

/// Placeholder the catalog uses for missing values.
const NOT_AVAILABLE: &str = "N/A";

/// Length of the plot text requested from the detail endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plot {
    #[default]
    Short,
    Full,
}

impl Plot {
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Full => "full",
        }
    }
}

// ── Search responses ────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbSearchItem>,
    #[serde(rename = "totalResults")]
    pub total_results: Option<String>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OmdbSearchItem {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    #[serde(rename = "Type")]
    pub media_type: Option<String>,
}

// ── Detail responses ────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct OmdbDetailResponse {
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Rated")]
    pub rated: Option<String>,
    #[serde(rename = "Released")]
    pub released: Option<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "Actors")]
    pub actors: Option<String>,
    #[serde(rename = "Plot")]
    pub plot: Option<String>,
    #[serde(rename = "Language")]
    pub language: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Awards")]
    pub awards: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: Option<String>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

// ── Conversions to shared trait types ───────────────────────────

fn poster_url(poster: Option<String>) -> Option<String> {
    poster.filter(|p| !p.is_empty() && p != NOT_AVAILABLE)
}

fn is_success(response: &str) -> bool {
    response.eq_ignore_ascii_case("true")
}

fn catalog_error(error: Option<String>) -> CatalogError {
    CatalogError::NotFound(error.unwrap_or_else(|| "unknown catalog error".into()))
}

impl OmdbSearchItem {
    pub fn into_candidate(self) -> CandidateSummary {
        CandidateSummary {
            id: ImdbId::from(self.imdb_id),
            title: self.title,
            year: self.year,
            poster_url: poster_url(self.poster),
            media_type: self.media_type,
        }
    }
}

impl OmdbSearchResponse {
    /// Unwrap the `Response`/`Error` envelope into candidates.
    pub fn into_candidates(self) -> Result<Vec<CandidateSummary>, CatalogError> {
        if !is_success(&self.response) {
            return Err(catalog_error(self.error));
        }
        Ok(self
            .search
            .into_iter()
            .map(OmdbSearchItem::into_candidate)
            .collect())
    }
}

impl OmdbDetailResponse {
    /// Unwrap the `Response`/`Error` envelope into a detail record.
    pub fn into_detail(self) -> Result<MovieDetail, CatalogError> {
        if !is_success(&self.response) {
            return Err(catalog_error(self.error));
        }
        let id = self
            .imdb_id
            .ok_or_else(|| CatalogError::Parse("detail response without imdbID".into()))?;
        Ok(MovieDetail {
            id: ImdbId::from(id),
            title: self.title.unwrap_or_default(),
            year: self.year.unwrap_or_default(),
            poster_url: poster_url(self.poster),
            rated: self.rated,
            released: self.released,
            runtime: self.runtime,
            genre: self.genre,
            director: self.director,
            actors: self.actors,
            plot: self.plot,
            language: self.language,
            country: self.country,
            awards: self.awards,
            imdb_rating: self.imdb_rating,
            imdb_votes: self.imdb_votes,
        })
    }
}
