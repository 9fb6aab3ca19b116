//! Groupmate ratings

use super::{Group, User};
use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest rating a groupmate can receive
pub const MAX_STARS: u8 = 10;

/// A star count in `0..=10`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Stars(u8);

impl Stars {
    /// Validate a raw star count
    pub fn new(value: i64) -> CliResult<Self> {
        Self::try_from(value).map_err(CliError::Validation)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Stars {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..=i64::from(MAX_STARS)).contains(&value) {
            Ok(Stars(value as u8))
        } else {
            Err(format!(
                "stars must be between 0 and {MAX_STARS}, got {value}"
            ))
        }
    }
}

impl From<Stars> for i64 {
    fn from(stars: Stars) -> Self {
        i64::from(stars.0)
    }
}

impl fmt::Display for Stars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single rating as embedded in users and groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    pub id: i64,
    pub stars: Stars,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// Mean star count, `None` when nothing has been rated
pub fn average_rating(rates: &[Rate]) -> Option<f64> {
    if rates.is_empty() {
        return None;
    }
    let total: u32 = rates.iter().map(|r| u32::from(r.stars.get())).sum();
    Some(f64::from(total) / rates.len() as f64)
}

/// Render an average for display: `N/A` or two decimals
pub fn format_rating(rates: &[Rate]) -> String {
    match average_rating(rates) {
        Some(avg) => format!("{avg:.2}"),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rate(id: i64, stars: i64) -> Rate {
        Rate {
            id,
            stars: Stars::new(stars).unwrap(),
            users: vec![],
            groups: vec![],
        }
    }

    #[test]
    fn test_stars_bounds() {
        assert!(Stars::new(0).is_ok());
        assert!(Stars::new(10).is_ok());
        assert!(Stars::new(-1).is_err());
        assert!(Stars::new(11).is_err());
    }

    #[test]
    fn test_stars_out_of_range_is_validation_error() {
        assert!(matches!(Stars::new(42), Err(CliError::Validation(_))));
    }

    #[test]
    fn test_average_empty_is_na() {
        assert_eq!(average_rating(&[]), None);
        assert_eq!(format_rating(&[]), "N/A");
    }

    #[test]
    fn test_average_two_ratings() {
        let rates = vec![rate(1, 5), rate(2, 7)];
        assert_eq!(average_rating(&rates), Some(6.0));
        assert_eq!(format_rating(&rates), "6.00");
    }

    #[test]
    fn test_average_keeps_fraction() {
        let rates = vec![rate(1, 5), rate(2, 8), rate(3, 9)];
        assert_eq!(format_rating(&rates), "7.33");
    }

    #[test]
    fn test_decode_rejects_out_of_range_stars() {
        let result: Result<Rate, _> = serde_json::from_value(json!({"id": 1, "stars": 12}));
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_defaults_collections() {
        let rate: Rate = serde_json::from_value(json!({"id": 1, "stars": 9})).unwrap();
        assert_eq!(rate.stars.get(), 9);
        assert!(rate.users.is_empty());
        assert!(rate.groups.is_empty());
    }
}
