mod rating;
mod stats;
mod watched;

pub use rating::{parse_imdb_rating, parse_runtime_minutes, Rating};
pub use stats::{average, WatchedStats};
pub use watched::{WatchedCollection, WatchedRecord};
