use thiserror::Error;

/// Errors from the movie catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The catalog answered, but with an explicit error payload
    /// (e.g. "Movie not found!").
    #[error("catalog error: {0}")]
    NotFound(String),

    #[error("parse error: {0}")]
    Parse(String),
}

impl CatalogError {
    /// Whether the catalog itself reported the failure, as opposed to the
    /// request never completing.
    pub fn is_catalog_reply(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
