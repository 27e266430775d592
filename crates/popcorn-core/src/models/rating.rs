use serde::{Deserialize, Serialize};

/// A user rating in `1..=max`. Zero ("unset") cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Returns `None` for 0 or for values above `max`.
    pub fn new(value: u8, max: u8) -> Option<Self> {
        (1..=max).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    /// Only the lower bound is known without a configured maximum.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value, u8::MAX).ok_or_else(|| format!("rating must be at least 1, got {value}"))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Minutes from a catalog runtime such as `"142 min"`.
///
/// Takes the leading run of digits, so a bare `"142"` works too.
/// Returns `None` for `"N/A"` and other non-numeric text.
pub fn parse_runtime_minutes(raw: &str) -> Option<u32> {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Decimal rating from the catalog's textual form (`"8.8"`).
pub fn parse_imdb_rating(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert_eq!(Rating::new(0, 10), None);
        assert_eq!(Rating::new(1, 10).map(Rating::value), Some(1));
        assert_eq!(Rating::new(10, 10).map(Rating::value), Some(10));
        assert_eq!(Rating::new(11, 10), None);
        assert_eq!(Rating::new(6, 5), None);
    }

    #[test]
    fn test_deserialize_rejects_zero() {
        let zero: Result<Rating, _> = serde_json::from_str("0");
        assert!(zero.is_err());

        let seven: Rating = serde_json::from_str("7").unwrap();
        assert_eq!(seven.value(), 7);
        assert_eq!(serde_json::to_string(&seven).unwrap(), "7");
    }

    #[test]
    fn test_runtime_with_unit() {
        assert_eq!(parse_runtime_minutes("142 min"), Some(142));
    }

    #[test]
    fn test_runtime_without_unit() {
        assert_eq!(parse_runtime_minutes("142"), Some(142));
        assert_eq!(parse_runtime_minutes("  98min"), Some(98));
    }

    #[test]
    fn test_runtime_not_available() {
        assert_eq!(parse_runtime_minutes("N/A"), None);
        assert_eq!(parse_runtime_minutes(""), None);
    }

    #[test]
    fn test_imdb_rating() {
        assert_eq!(parse_imdb_rating("8.8"), Some(8.8));
        assert_eq!(parse_imdb_rating(" 7 "), Some(7.0));
        assert_eq!(parse_imdb_rating("N/A"), None);
        assert_eq!(parse_imdb_rating("NaN"), None);
    }
}
