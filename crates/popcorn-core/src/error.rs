use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no OMDb API key: set OMDB_API_KEY or catalog.api_key in {0}")]
    MissingApiKey(String),

    #[error("config parse error: {0}")]
    Parse(String),

    #[error("catalog client error: {0}")]
    Client(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a confirm-rating request did not add anything to the watched list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddWatchedError {
    #[error("no movie is loaded")]
    NoDetail,

    #[error("no rating selected")]
    NoRating,

    #[error("movie is already in the watched list")]
    AlreadyWatched,
}
