//! Movie catalog client.
//!
//! The [`traits::MovieCatalog`] trait is what the rest of the workspace talks
//! to; [`omdb::OmdbClient`] is the production implementation backed by the
//! OMDb HTTP API.

pub mod error;
pub mod omdb;
pub mod traits;

pub use error::CatalogError;
pub use omdb::OmdbClient;
pub use traits::{CandidateSummary, ImdbId, MovieCatalog, MovieDetail};
