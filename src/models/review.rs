// src/models/review.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FryError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReviewId(pub u64);

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fish rating, always within 1..=5.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Out-of-range input degrades to the nearest valid rating.
    pub fn clamped(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = FryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(FryError::RatingOutOfRange(value))
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(3)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Crispiness {
    Soggy,
    #[default]
    Decent,
    Crunchy,
    Perfect,
}

impl Crispiness {
    pub const ALL: [Crispiness; 4] = [
        Crispiness::Soggy,
        Crispiness::Decent,
        Crispiness::Crunchy,
        Crispiness::Perfect,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Crispiness::Soggy => "Soggy",
            Crispiness::Decent => "Decent",
            Crispiness::Crunchy => "Crunchy",
            Crispiness::Perfect => "Perfect",
        }
    }
}

impl fmt::Display for Crispiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Crispiness {
    type Err = FryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Crispiness::ALL
            .into_iter()
            .find(|c| c.label() == s.trim())
            .ok_or_else(|| FryError::UnknownCrispiness(s.to_string()))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: ReviewId,              // Unique within the store
    pub user_name: String,         // Author display name
    pub user_avatar: String,       // Author avatar URL
    pub venue: String,             // Where the fish was eaten
    pub location: String,          // Town, state
    pub rating: Rating,
    pub crispiness: Crispiness,
    pub tartar: String,            // Tartar sauce verdict, free text
    pub note: String,
    pub date_label: String,        // Display only, e.g. "Oct 12" or "Just now"
    pub photo: Option<String>,     // Photo URL, if one was attached
    pub tagged: Vec<String>,       // Friends along for the meal
    pub toasts: u32,
    pub comments: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_rejects_and_clamps_out_of_range() {
        assert_eq!(Rating::new(0), None);
        assert_eq!(Rating::new(6), None);
        assert_eq!(Rating::new(4).map(Rating::value), Some(4));
        assert_eq!(Rating::clamped(0).value(), 1);
        assert_eq!(Rating::clamped(9).value(), 5);
        assert_eq!(Rating::default().value(), 3);
    }

    #[test]
    fn rating_json_outside_the_scale_is_rejected() {
        assert!(serde_json::from_str::<Rating>("0").is_err());
        assert!(serde_json::from_str::<Rating>("9").is_err());
        assert_eq!(serde_json::from_str::<Rating>("4").unwrap().value(), 4);
        assert_eq!(serde_json::to_string(&Rating::clamped(5)).unwrap(), "5");
        assert_eq!(Rating::try_from(6), Err(FryError::RatingOutOfRange(6)));
    }

    #[test]
    fn crispiness_parses_its_labels() {
        for c in Crispiness::ALL {
            assert_eq!(c.label().parse::<Crispiness>(), Ok(c));
        }
        assert_eq!(Crispiness::default(), Crispiness::Decent);
        assert_eq!(
            "Burnt".parse::<Crispiness>(),
            Err(FryError::UnknownCrispiness("Burnt".into()))
        );
    }
}
