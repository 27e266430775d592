//! Fetch lifecycles for the search list and the detail panel.
//!
//! Each session owns its state and a [`Generation`] counter. Starting a
//! request bumps the counter and hands out a ticket; a result is only applied
//! if its ticket is still current when it settles, so responses that arrive
//! out of order can never overwrite newer state.

mod detail;
mod fetch;
mod search;

pub use detail::{DetailRequest, DetailSession};
pub use fetch::{fetch_detail, fetch_search, DetailResponse, SearchResponse};
pub use search::{SearchRequest, SearchSession};

use popcorn_api::CatalogError;

/// Readiness of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

impl FetchStatus {
    pub fn is_loading(self) -> bool {
        self == Self::Loading
    }
}

/// Request counter stamped on every ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// What `settle` did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Applied,
    /// A newer request was issued (or the session was cancelled) first.
    Stale,
}

/// Clonable summary of a [`CatalogError`], suitable for UI messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The catalog answered with an explicit error payload.
    #[error("{0}")]
    Catalog(String),

    /// The request failed or the reply was unreadable.
    #[error("{0}")]
    Network(String),
}

impl From<CatalogError> for FetchError {
    fn from(err: CatalogError) -> Self {
        if err.is_catalog_reply() {
            Self::Catalog(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
