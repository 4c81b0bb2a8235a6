//! Shelter matching for donations

use crate::models::food::{MatchQuery, ShelterMatch};

/// Ranks shelters for a donation, nearest first
pub trait ShelterMatcher: Send + Sync {
    fn find_matches(&self, query: &MatchQuery) -> Vec<ShelterMatch>;
}

/// Matcher that always returns the same two shelters
#[derive(Debug, Clone, Default)]
pub struct MockShelterMatcher;

impl ShelterMatcher for MockShelterMatcher {
    fn find_matches(&self, _query: &MatchQuery) -> Vec<ShelterMatch> {
        vec![
            ShelterMatch {
                shelter: "Sunrise Shelter".to_string(),
                distance: "1.2 km".to_string(),
            },
            ShelterMatch {
                shelter: "Community Kitchen".to_string(),
                distance: "2.5 km".to_string(),
            },
        ]
    }
}
