//! In-memory review store backing the feed.
//! Most recent check-ins come first; ids come from a counter the store owns.

use leptos::logging::log;
use serde::{Deserialize, Serialize};

use crate::models::review::{Review, ReviewId};
use crate::seed;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewStore {
    reviews: Vec<Review>,
    next_id: u64,
}

impl ReviewStore {
    pub fn new(reviews: Vec<Review>) -> Self {
        let next_id = reviews.iter().map(|r| r.id.0).max().unwrap_or(0).saturating_add(1);
        Self { reviews, next_id }
    }

    pub fn seeded() -> Self {
        Self::new(seed::initial_reviews())
    }

    /// Hands out an id no record in this store has used.
    pub fn next_id(&mut self) -> ReviewId {
        let id = ReviewId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    pub fn add(&mut self, review: Review) {
        log!("[STORE] Adding review {} for {}", review.id, review.venue);
        // Keep the counter ahead of ids minted elsewhere.
        self.next_id = self.next_id.max(review.id.0.saturating_add(1));
        self.reviews.insert(0, review);
    }

    /// Removing an id that is not present is a no-op.
    pub fn remove(&mut self, id: ReviewId) -> Option<Review> {
        let index = self.reviews.iter().position(|r| r.id == id)?;
        log!("[STORE] Removing review {}", id);
        Some(self.reviews.remove(index))
    }

    pub fn list(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

impl Default for ReviewStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::review::{Crispiness, Rating};

    pub(crate) fn review(id: u64, rating: u8) -> Review {
        Review {
            id: ReviewId(id),
            user_name: "Party Marty".into(),
            user_avatar: "avatar".into(),
            venue: format!("Venue {id}"),
            location: "Milwaukee, WI".into(),
            rating: Rating::clamped(rating),
            crispiness: Crispiness::Decent,
            tartar: "Good".into(),
            note: String::new(),
            date_label: "Just now".into(),
            photo: None,
            tagged: vec![],
            toasts: 0,
            comments: 0,
        }
    }

    #[test]
    fn add_puts_the_record_first() {
        let mut store = ReviewStore::new(vec![review(1, 5), review(2, 3)]);
        store.add(review(7, 4));

        assert_eq!(store.len(), 3);
        assert_eq!(store.list()[0].id, ReviewId(7));
        assert_eq!(store.list()[1].id, ReviewId(1));
    }

    #[test]
    fn remove_drops_only_the_matching_id() {
        let mut store = ReviewStore::new(vec![review(1, 5), review(2, 3)]);

        let removed = store.remove(ReviewId(1));
        assert_eq!(removed.map(|r| r.id), Some(ReviewId(1)));
        assert_eq!(store.list(), &[review(2, 3)]);
        assert!(store.list().iter().all(|r| r.id != ReviewId(1)));
    }

    #[test]
    fn remove_of_missing_id_is_a_no_op() {
        let mut store = ReviewStore::new(vec![review(1, 5)]);
        assert!(store.remove(ReviewId(42)).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn ids_keep_increasing() {
        let mut store = ReviewStore::seeded();
        let first = store.next_id();
        assert_eq!(first, ReviewId(4));

        store.add(review(10, 3));
        let next = store.next_id();
        assert!(next > ReviewId(10));
        assert!(store.list().iter().all(|r| r.id != next));
    }

    #[test]
    fn add_with_the_largest_id_does_not_overflow() {
        let mut store = ReviewStore::default();
        store.add(review(u64::MAX, 4));

        assert_eq!(store.list()[0].id, ReviewId(u64::MAX));
        assert_eq!(store.next_id(), ReviewId(u64::MAX));
        assert_eq!(store.next_id(), ReviewId(u64::MAX));

        let seeded = ReviewStore::new(vec![review(u64::MAX, 2)]);
        assert_eq!(seeded.len(), 1);
    }

    #[test]
    fn empty_store_starts_at_one() {
        let mut store = ReviewStore::default();
        assert!(store.is_empty());
        assert_eq!(store.next_id(), ReviewId(1));
    }
}
