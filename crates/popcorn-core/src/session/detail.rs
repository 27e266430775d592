use popcorn_api::{ImdbId, MovieDetail};

use super::fetch::DetailResponse;
use super::{FetchError, FetchStatus, Generation, Settled};
use crate::error::AddWatchedError;
use crate::models::{Rating, WatchedCollection, WatchedRecord, WatchedStats};

/// Ticket for one in-flight detail lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub generation: Generation,
    pub id: ImdbId,
}

/// The movie under inspection plus the user's watched list.
#[derive(Debug)]
pub struct DetailSession {
    selected: Option<ImdbId>,
    detail: Option<MovieDetail>,
    status: FetchStatus,
    generation: Generation,
    last_error: Option<String>,
    user_rating: Option<Rating>,
    max_rating: u8,
    watched: WatchedCollection,
}

impl DetailSession {
    pub fn new(max_rating: u8) -> Self {
        Self {
            selected: None,
            detail: None,
            status: FetchStatus::Idle,
            generation: Generation::default(),
            last_error: None,
            user_rating: None,
            max_rating,
            watched: WatchedCollection::new(),
        }
    }

    pub fn selected(&self) -> Option<&ImdbId> {
        self.selected.as_ref()
    }

    pub fn detail(&self) -> Option<&MovieDetail> {
        self.detail.as_ref()
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn max_rating(&self) -> u8 {
        self.max_rating
    }

    pub fn user_rating(&self) -> Option<Rating> {
        self.user_rating
    }

    pub fn watched(&self) -> &WatchedCollection {
        &self.watched
    }

    pub fn stats(&self) -> WatchedStats {
        self.watched.stats()
    }

    pub fn is_watched(&self, id: &ImdbId) -> bool {
        self.watched.contains(id)
    }

    /// The rating given to an already-watched movie.
    pub fn watched_rating(&self, id: &ImdbId) -> Option<Rating> {
        self.watched.get(id).map(|r| r.user_rating)
    }

    /// Inspect a new movie. Always re-enters `Loading`, whatever the prior state.
    pub fn select(&mut self, id: ImdbId) -> DetailRequest {
        self.generation = self.generation.next();
        self.selected = Some(id.clone());
        self.detail = None;
        self.last_error = None;
        self.user_rating = None;
        self.status = FetchStatus::Loading;
        tracing::debug!(%id, generation = ?self.generation, "detail issued");
        DetailRequest {
            generation: self.generation,
            id,
        }
    }

    /// Apply a finished lookup if it belongs to the current selection.
    pub fn settle(&mut self, response: DetailResponse) -> Settled {
        let DetailResponse { request, result } = response;
        if request.generation != self.generation {
            tracing::warn!(id = %request.id, "dropping stale detail result");
            return Settled::Stale;
        }

        match result {
            Ok(detail) => {
                tracing::debug!(id = %request.id, title = %detail.title, "detail settled");
                self.detail = Some(detail);
                self.status = FetchStatus::Ready;
            }
            Err(err) => {
                let message = match err {
                    FetchError::Catalog(m) | FetchError::Network(m) => m,
                };
                tracing::warn!(id = %request.id, error = %message, "detail lookup failed");
                self.last_error = Some(message);
                self.status = FetchStatus::Failed;
            }
        }
        Settled::Applied
    }

    /// Leave the detail view: cancels any in-flight lookup and returns to `Idle`.
    pub fn close(&mut self) {
        self.generation = self.generation.next();
        self.selected = None;
        self.detail = None;
        self.last_error = None;
        self.user_rating = None;
        self.status = FetchStatus::Idle;
    }

    pub fn set_user_rating(&mut self, rating: Rating) {
        self.user_rating = Some(rating);
    }

    /// Validate a raw widget value against `max_rating` and store it.
    /// Zero or out-of-range values clear the pending rating.
    pub fn rate(&mut self, value: u8) -> Option<Rating> {
        self.user_rating = Rating::new(value, self.max_rating);
        self.user_rating
    }

    /// Add the inspected movie to the watched list with the pending rating.
    ///
    /// Leaves the collection untouched on any error.
    pub fn confirm_rating(&mut self) -> Result<&WatchedRecord, AddWatchedError> {
        let detail = self.detail.as_ref().ok_or(AddWatchedError::NoDetail)?;
        let rating = self.user_rating.ok_or(AddWatchedError::NoRating)?;
        if self.watched.contains(&detail.id) {
            return Err(AddWatchedError::AlreadyWatched);
        }

        let record = WatchedRecord::from_detail(detail, rating);
        tracing::info!(id = %record.id, title = %record.title, rating = %rating, "added to watched");
        self.user_rating = None;
        Ok(self.watched.push(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::fetch_detail;
    use crate::testing::{detail, FakeCatalog};
    use std::time::Duration;

    fn loaded(session: &mut DetailSession, id: &str, title: &str) {
        let request = session.select(ImdbId::new(id));
        session.settle(DetailResponse {
            request,
            result: Ok(detail(id, title)),
        });
    }

    #[test]
    fn test_select_enters_loading_from_any_state() {
        let mut session = DetailSession::new(10);
        assert_eq!(session.status(), FetchStatus::Idle);

        loaded(&mut session, "tt1", "One");
        assert_eq!(session.status(), FetchStatus::Ready);
        session.select(ImdbId::new("tt2"));
        assert_eq!(session.status(), FetchStatus::Loading);
        assert!(session.detail().is_none());

        let request = session.select(ImdbId::new("tt3"));
        session.settle(DetailResponse {
            request,
            result: Err(FetchError::Network("timeout".into())),
        });
        assert_eq!(session.status(), FetchStatus::Failed);
        session.select(ImdbId::new("tt4"));
        assert_eq!(session.status(), FetchStatus::Loading);
    }

    #[test]
    fn test_catalog_error_fails_detail() {
        let mut session = DetailSession::new(10);
        let request = session.select(ImdbId::new("tt0"));
        session.settle(DetailResponse {
            request,
            result: Err(FetchError::Catalog("Incorrect IMDb ID.".into())),
        });
        assert_eq!(session.status(), FetchStatus::Failed);
        assert_eq!(session.last_error(), Some("Incorrect IMDb ID."));
        assert!(session.detail().is_none());
    }

    #[test]
    fn test_close_cancels_and_clears_loading() {
        let mut session = DetailSession::new(10);
        let request = session.select(ImdbId::new("tt1"));
        session.close();
        assert_eq!(session.status(), FetchStatus::Idle);

        let outcome = session.settle(DetailResponse {
            request,
            result: Ok(detail("tt1", "One")),
        });
        assert_eq!(outcome, Settled::Stale);
        assert!(session.detail().is_none());
        assert_eq!(session.status(), FetchStatus::Idle);
    }

    #[test]
    fn test_confirm_without_rating_is_noop() {
        let mut session = DetailSession::new(10);
        loaded(&mut session, "tt1375666", "Inception");

        assert_eq!(session.rate(0), None);
        assert_eq!(session.confirm_rating(), Err(AddWatchedError::NoRating));
        assert!(session.watched().is_empty());
    }

    #[test]
    fn test_confirm_without_detail_is_noop() {
        let mut session = DetailSession::new(10);
        session.select(ImdbId::new("tt1"));
        session.rate(8);
        assert_eq!(session.confirm_rating(), Err(AddWatchedError::NoDetail));
        assert!(session.watched().is_empty());
    }

    #[test]
    fn test_rate_rejects_above_max() {
        let mut session = DetailSession::new(5);
        assert_eq!(session.rate(6), None);
        assert_eq!(session.rate(5).map(Rating::value), Some(5));
    }

    #[test]
    fn test_confirm_appends_record() {
        let mut session = DetailSession::new(10);
        loaded(&mut session, "tt1375666", "Inception");
        session.rate(9);

        let record = session.confirm_rating().unwrap().clone();
        assert_eq!(record.title, "Inception");
        assert_eq!(record.runtime, 148);
        assert_eq!(record.imdb_rating, 8.8);
        assert_eq!(record.user_rating.value(), 9);
        assert_eq!(session.watched().len(), 1);
        assert!(session.user_rating().is_none());

        let stats = session.stats();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.avg_user_rating, 9.0);
    }

    #[test]
    fn test_confirm_twice_is_rejected() {
        let mut session = DetailSession::new(10);
        loaded(&mut session, "tt1375666", "Inception");
        session.rate(9);
        session.confirm_rating().unwrap();

        session.rate(4);
        assert_eq!(
            session.confirm_rating(),
            Err(AddWatchedError::AlreadyWatched)
        );
        assert_eq!(session.watched().len(), 1);
        assert_eq!(
            session.watched_rating(&ImdbId::new("tt1375666")).map(Rating::value),
            Some(9)
        );
    }

    #[test]
    fn test_selection_resets_pending_rating() {
        let mut session = DetailSession::new(10);
        loaded(&mut session, "tt1", "One");
        session.rate(7);
        session.select(ImdbId::new("tt2"));
        assert!(session.user_rating().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_later_selection_wins_regardless_of_arrival() {
        let catalog = FakeCatalog::new()
            .with_detail(detail("tt0000001", "A"))
            .with_detail(detail("tt0000002", "B"))
            .with_delay("tt0000001", Duration::from_millis(300))
            .with_delay("tt0000002", Duration::from_millis(10));

        let mut session = DetailSession::new(10);
        let request_a = session.select(ImdbId::new("tt0000001"));
        let request_b = session.select(ImdbId::new("tt0000002"));

        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let tx_a = tx.clone();
        let tx_b = tx;
        let catalog_ref = &catalog;
        tokio::join!(
            async move {
                let _ = tx_a.send(fetch_detail(catalog_ref, request_a).await);
            },
            async move {
                let _ = tx_b.send(fetch_detail(catalog_ref, request_b).await);
            },
        );

        let mut arrivals = Vec::new();
        while let Some(response) = rx.recv().await {
            arrivals.push(response);
        }
        assert_eq!(arrivals.len(), 2);
        assert_eq!(arrivals[0].request.id.as_str(), "tt0000002");

        for response in arrivals {
            session.settle(response);
        }
        assert_eq!(session.status(), FetchStatus::Ready);
        assert_eq!(session.detail().map(|d| d.title.as_str()), Some("B"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_later_selection_wins_when_it_arrives_last() {
        let catalog = FakeCatalog::new()
            .with_detail(detail("tt0000001", "A"))
            .with_detail(detail("tt0000002", "B"))
            .with_delay("tt0000001", Duration::from_millis(10))
            .with_delay("tt0000002", Duration::from_millis(300));

        let mut session = DetailSession::new(10);
        let request_a = session.select(ImdbId::new("tt0000001"));
        let request_b = session.select(ImdbId::new("tt0000002"));

        let response_a = fetch_detail(&catalog, request_a).await;
        assert_eq!(session.settle(response_a), Settled::Stale);
        assert_eq!(session.status(), FetchStatus::Loading);

        let response_b = fetch_detail(&catalog, request_b).await;
        assert_eq!(session.settle(response_b), Settled::Applied);
        assert_eq!(session.detail().map(|d| d.title.as_str()), Some("B"));
    }
}
