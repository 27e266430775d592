//! Stateless async drivers: run one catalog call for a ticket and pair the
//! outcome with that ticket, ready to be settled on the UI side.

use popcorn_api::{CandidateSummary, MovieCatalog, MovieDetail};

use super::detail::DetailRequest;
use super::search::SearchRequest;
use super::FetchError;

#[derive(Debug, Clone)]
pub struct SearchResponse {
    pub request: SearchRequest,
    pub result: Result<Vec<CandidateSummary>, FetchError>,
}

#[derive(Debug, Clone)]
pub struct DetailResponse {
    pub request: DetailRequest,
    pub result: Result<MovieDetail, FetchError>,
}

pub async fn fetch_search<C: MovieCatalog>(catalog: &C, request: SearchRequest) -> SearchResponse {
    let result = catalog
        .search_movies(&request.query)
        .await
        .map_err(FetchError::from);
    SearchResponse { request, result }
}

pub async fn fetch_detail<C: MovieCatalog>(catalog: &C, request: DetailRequest) -> DetailResponse {
    let result = catalog
        .movie_detail(&request.id)
        .await
        .map_err(FetchError::from);
    DetailResponse { request, result }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{DetailSession, FetchStatus, SearchSession};
    use crate::testing::{candidate, detail, FakeCatalog};
    use popcorn_api::ImdbId;

    #[tokio::test]
    async fn test_network_error_maps_to_network() {
        let catalog = FakeCatalog::new().offline();
        let mut session = SearchSession::new();
        let request = session.set_query("Inception").unwrap();
        let response = fetch_search(&catalog, request).await;
        assert!(matches!(response.result, Err(FetchError::Network(_))));
    }

    #[tokio::test]
    async fn test_unknown_id_maps_to_catalog() {
        let catalog = FakeCatalog::new();
        let mut session = DetailSession::new(10);
        let request = session.select(ImdbId::new("tt9999999"));
        let response = fetch_detail(&catalog, request).await;
        assert!(matches!(response.result, Err(FetchError::Catalog(_))));
    }

    #[tokio::test]
    async fn test_search_then_select_end_to_end() {
        let catalog = FakeCatalog::new()
            .with_search(
                "Inception",
                vec![
                    candidate("tt1375666", "Inception"),
                    candidate("tt5295894", "Inception: The Cobol Job"),
                ],
            )
            .with_detail(detail("tt1375666", "Inception"));

        let mut search = SearchSession::new();
        let request = search.set_query("Inception").unwrap();
        search.settle(fetch_search(&catalog, request).await);

        let hit = search
            .results()
            .iter()
            .find(|c| c.title == "Inception")
            .expect("Inception in results")
            .clone();

        let mut details = DetailSession::new(10);
        assert_eq!(details.status(), FetchStatus::Idle);
        let request = details.select(hit.id.clone());
        assert_eq!(details.status(), FetchStatus::Loading);
        details.settle(fetch_detail(&catalog, request).await);
        assert_eq!(details.status(), FetchStatus::Ready);

        let movie = details.detail().expect("detail loaded");
        assert_eq!(movie.id, hit.id);
        assert!(movie.plot.is_some());
        assert_eq!(movie.director.as_deref(), Some("Christopher Nolan"));
    }
}
