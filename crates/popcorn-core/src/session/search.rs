use popcorn_api::CandidateSummary;

use super::fetch::SearchResponse;
use super::{FetchError, FetchStatus, Generation, Settled};

/// Ticket for one in-flight catalog search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub generation: Generation,
    pub query: String,
}

/// Query text and the candidate list it resolved to.
#[derive(Debug, Default)]
pub struct SearchSession {
    query: String,
    results: Vec<CandidateSummary>,
    status: FetchStatus,
    settled_status: FetchStatus,
    generation: Generation,
    last_error: Option<String>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[CandidateSummary] {
        &self.results
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replace the query and start a new lookup.
    ///
    /// An empty query clears the list without a round-trip and returns `None`.
    pub fn set_query(&mut self, query: impl Into<String>) -> Option<SearchRequest> {
        self.query = query.into();
        self.generation = self.generation.next();

        if self.query.is_empty() {
            self.results.clear();
            self.last_error = None;
            self.settle_status(FetchStatus::Idle);
            return None;
        }

        self.status = FetchStatus::Loading;
        tracing::debug!(query = %self.query, generation = ?self.generation, "search issued");
        Some(SearchRequest {
            generation: self.generation,
            query: self.query.clone(),
        })
    }

    /// Apply a finished lookup if it is still the latest one.
    pub fn settle(&mut self, response: SearchResponse) -> Settled {
        let SearchResponse { request, result } = response;
        if request.generation != self.generation {
            tracing::warn!(query = %request.query, "dropping stale search result");
            return Settled::Stale;
        }

        match result {
            Ok(candidates) => {
                tracing::debug!(query = %request.query, count = candidates.len(), "search settled");
                self.results = candidates;
                self.last_error = None;
                self.settle_status(FetchStatus::Ready);
            }
            // "Movie not found!" and friends are an empty answer, not a failure.
            Err(FetchError::Catalog(message)) => {
                tracing::debug!(query = %request.query, %message, "search returned no matches");
                self.results.clear();
                self.last_error = None;
                self.settle_status(FetchStatus::Ready);
            }
            Err(FetchError::Network(message)) => {
                tracing::warn!(query = %request.query, error = %message, "search failed");
                self.last_error = Some(message);
                self.settle_status(FetchStatus::Failed);
            }
        }
        Settled::Applied
    }

    /// Invalidate any in-flight lookup and leave the loading state.
    pub fn cancel(&mut self) {
        self.generation = self.generation.next();
        if self.status.is_loading() {
            self.status = self.settled_status;
        }
    }

    fn settle_status(&mut self, status: FetchStatus) {
        self.status = status;
        self.settled_status = status;
    }
}
