//! Display formatting helpers for movie metadata and watched aggregates.

/// Placeholder shown for fields the catalog left empty.
pub const NOT_AVAILABLE: &str = "N/A";

pub fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

pub fn result_count(count: usize) -> String {
    match count {
        1 => "Found 1 result".into(),
        n => format!("Found {n} results"),
    }
}

pub fn movie_count(count: usize) -> String {
    match count {
        1 => "1 movie".into(),
        n => format!("{n} movies"),
    }
}

/// Averages are shown with at most two decimals, trailing zeros dropped.
pub fn average(value: f64) -> String {
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

pub fn minutes(value: f64) -> String {
    format!("{} min", average(value))
}

pub fn user_rating(value: u8) -> String {
    format!("You rated this movie {value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_trims_trailing_zeros() {
        assert_eq!(average(0.0), "0");
        assert_eq!(average(8.5), "8.5");
        assert_eq!(average(7.25), "7.25");
        assert_eq!(average(7.0 / 3.0), "2.33");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(minutes(148.0), "148 min");
        assert_eq!(minutes(0.0), "0 min");
    }

    #[test]
    fn test_result_count_pluralizes() {
        assert_eq!(result_count(0), "Found 0 results");
        assert_eq!(result_count(1), "Found 1 result");
        assert_eq!(result_count(10), "Found 10 results");
    }

    #[test]
    fn test_or_na() {
        assert_eq!(or_na(None), "N/A");
        assert_eq!(or_na(Some("PG-13")), "PG-13");
    }
}
