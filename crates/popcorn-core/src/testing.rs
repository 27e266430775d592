//! In-memory catalog and fixtures shared by the unit tests.

use std::collections::HashMap;
use std::time::Duration;

use popcorn_api::{CandidateSummary, CatalogError, ImdbId, MovieCatalog, MovieDetail};

pub fn candidate(id: &str, title: &str) -> CandidateSummary {
    CandidateSummary {
        id: ImdbId::new(id),
        title: title.to_string(),
        year: "2010".into(),
        poster_url: Some(format!("https://img.example/{id}.jpg")),
        media_type: Some("movie".into()),
    }
}

pub fn detail(id: &str, title: &str) -> MovieDetail {
    MovieDetail {
        id: ImdbId::new(id),
        title: title.to_string(),
        year: "2010".into(),
        poster_url: Some(format!("https://img.example/{id}.jpg")),
        rated: Some("PG-13".into()),
        released: Some("16 Jul 2010".into()),
        runtime: Some("148 min".into()),
        genre: Some("Action, Sci-Fi".into()),
        director: Some("Christopher Nolan".into()),
        actors: Some("Leonardo DiCaprio, Elliot Page".into()),
        plot: Some("A thief who steals corporate secrets.".into()),
        language: Some("English".into()),
        country: Some("United States".into()),
        awards: None,
        imdb_rating: Some("8.8".into()),
        imdb_votes: Some("2,600,000".into()),
    }
}

/// A catalog that answers from memory after a configurable delay.
#[derive(Debug, Default)]
pub struct FakeCatalog {
    searches: HashMap<String, Vec<CandidateSummary>>,
    details: HashMap<ImdbId, MovieDetail>,
    delays: HashMap<String, Duration>,
    offline: bool,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: &str, results: Vec<CandidateSummary>) -> Self {
        self.searches.insert(query.to_string(), results);
        self
    }

    pub fn with_detail(mut self, detail: MovieDetail) -> Self {
        self.details.insert(detail.id.clone(), detail);
        self
    }

    /// Delay the answer for a query text or an identifier.
    pub fn with_delay(mut self, key: &str, delay: Duration) -> Self {
        self.delays.insert(key.to_string(), delay);
        self
    }

    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    async fn wait(&self, key: &str) -> Result<(), CatalogError> {
        if let Some(delay) = self.delays.get(key) {
            tokio::time::sleep(*delay).await;
        }
        if self.offline {
            return Err(CatalogError::Api {
                status: 503,
                message: "service unavailable".into(),
            });
        }
        Ok(())
    }
}

impl MovieCatalog for FakeCatalog {
    async fn search_movies(&self, query: &str) -> Result<Vec<CandidateSummary>, CatalogError> {
        self.wait(query).await?;
        self.searches
            .get(query)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound("Movie not found!".into()))
    }

    async fn movie_detail(&self, id: &ImdbId) -> Result<MovieDetail, CatalogError> {
        self.wait(id.as_str()).await?;
        self.details
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound("Incorrect IMDb ID.".into()))
    }
}
