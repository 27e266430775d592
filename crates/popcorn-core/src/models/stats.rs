use super::watched::WatchedRecord;

/// Arithmetic mean; an empty input averages to 0.
pub fn average(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Aggregates shown in the watched summary.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WatchedStats {
    pub count: usize,
    pub avg_imdb_rating: f64,
    pub avg_user_rating: f64,
    pub avg_runtime: f64,
    pub total_runtime: u64,
}

impl WatchedStats {
    pub fn from_records(records: &[WatchedRecord]) -> Self {
        Self {
            count: records.len(),
            avg_imdb_rating: average(records.iter().map(|r| r.imdb_rating)),
            avg_user_rating: average(records.iter().map(|r| f64::from(r.user_rating.value()))),
            avg_runtime: average(records.iter().map(|r| f64::from(r.runtime))),
            total_runtime: records.iter().map(|r| u64::from(r.runtime)).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rating;
    use popcorn_api::ImdbId;

    fn record(id: &str, imdb: f64, runtime: u32, user: u8) -> WatchedRecord {
        WatchedRecord {
            id: ImdbId::new(id),
            title: id.to_string(),
            year: "2000".into(),
            poster_url: None,
            imdb_rating: imdb,
            runtime,
            user_rating: Rating::new(user, 10).unwrap(),
        }
    }

    #[test]
    fn test_average_of_empty_is_zero() {
        assert_eq!(average(Vec::new()), 0.0);
        assert!(!average(std::iter::empty()).is_nan());
    }

    #[test]
    fn test_average_basic() {
        assert_eq!(average([2.0, 4.0, 9.0]), 5.0);
    }

    #[test]
    fn test_empty_stats() {
        let stats = WatchedStats::from_records(&[]);
        assert_eq!(stats, WatchedStats::default());
    }

    #[test]
    fn test_means_lie_between_min_and_max() {
        let records = vec![
            record("tt1", 8.8, 148, 9),
            record("tt2", 6.1, 95, 4),
            record("tt3", 7.4, 120, 7),
            record("tt4", 9.0, 201, 10),
        ];
        let stats = WatchedStats::from_records(&records);

        let check = |mean: f64, values: Vec<f64>| {
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            assert!(mean >= min && mean <= max, "{mean} not in [{min}, {max}]");
        };
        check(
            stats.avg_imdb_rating,
            records.iter().map(|r| r.imdb_rating).collect(),
        );
        check(
            stats.avg_user_rating,
            records
                .iter()
                .map(|r| f64::from(r.user_rating.value()))
                .collect(),
        );
        check(
            stats.avg_runtime,
            records.iter().map(|r| f64::from(r.runtime)).collect(),
        );
        assert_eq!(stats.count, 4);
        assert_eq!(stats.total_runtime, 564);
    }

    #[test]
    fn test_single_record_stats_equal_record() {
        let stats = WatchedStats::from_records(&[record("tt1", 8.8, 148, 9)]);
        assert_eq!(stats.avg_imdb_rating, 8.8);
        assert_eq!(stats.avg_user_rating, 9.0);
        assert_eq!(stats.avg_runtime, 148.0);
    }
}
