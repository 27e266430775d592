use serde::{Deserialize, Serialize};

use popcorn_api::{ImdbId, MovieDetail};

use super::rating::{parse_imdb_rating, parse_runtime_minutes, Rating};
use super::stats::WatchedStats;

/// A movie the user has rated. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedRecord {
    pub id: ImdbId,
    pub title: String,
    pub year: String,
    pub poster_url: Option<String>,
    pub imdb_rating: f64,
    /// Minutes.
    pub runtime: u32,
    pub user_rating: Rating,
}

impl WatchedRecord {
    /// Build a record from a catalog detail, coercing the textual rating and
    /// runtime. Values the catalog reports as unavailable become 0.
    pub fn from_detail(detail: &MovieDetail, user_rating: Rating) -> Self {
        let imdb_rating = detail
            .imdb_rating
            .as_deref()
            .and_then(parse_imdb_rating)
            .unwrap_or(0.0);
        let runtime = detail
            .runtime
            .as_deref()
            .and_then(parse_runtime_minutes)
            .unwrap_or(0);

        Self {
            id: detail.id.clone(),
            title: detail.title.clone(),
            year: detail.year.clone(),
            poster_url: detail.poster_url.clone(),
            imdb_rating,
            runtime,
            user_rating,
        }
    }
}

/// Append-only list of watched records, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct WatchedCollection {
    records: Vec<WatchedRecord>,
}

impl WatchedCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return a reference to it.
    pub fn push(&mut self, record: WatchedRecord) -> &WatchedRecord {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    pub fn get(&self, id: &ImdbId) -> Option<&WatchedRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn contains(&self, id: &ImdbId) -> bool {
        self.get(id).is_some()
    }

    pub fn as_slice(&self) -> &[WatchedRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WatchedRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stats(&self) -> WatchedStats {
        WatchedStats::from_records(&self.records)
    }
}

impl<'a> IntoIterator for &'a WatchedCollection {
    type Item = &'a WatchedRecord;
    type IntoIter = std::slice::Iter<'a, WatchedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
