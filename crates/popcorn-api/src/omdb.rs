pub mod client;
pub mod types;

pub use client::OmdbClient;
pub use types::Plot;
