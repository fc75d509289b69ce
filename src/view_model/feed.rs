use serde::Serialize;

use crate::models::review::{Rating, Review, ReviewId};

/// Room left under the last card so the check-in button never covers it.
pub const TRAILING_SPACER: u16 = 80;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Fish,
    Bone,
}

impl Glyph {
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Fish => "🐟",
            Glyph::Bone => "🦴",
        }
    }
}

pub fn rating_glyphs(rating: Rating) -> [Glyph; 5] {
    std::array::from_fn(|i| {
        if i < rating.value() as usize {
            Glyph::Fish
        } else {
            Glyph::Bone
        }
    })
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReviewCardView {
    pub id: ReviewId,
    pub avatar: String,
    pub author: String,
    pub venue: String,
    pub location: String,
    pub quote: String,
    pub crispiness: &'static str,
    pub glyphs: [Glyph; 5],
    pub photo: Option<String>,
    pub toasts: String,
    pub comments: String,
}

impl ReviewCardView {
    fn from_review(review: &Review) -> Self {
        let location = if review.location.trim().is_empty() {
            "Unknown".to_string()
        } else {
            review.location.clone()
        };
        Self {
            id: review.id,
            avatar: review.user_avatar.clone(),
            author: review.user_name.clone(),
            venue: review.venue.clone(),
            location,
            quote: format!("\"{}\"", review.note),
            crispiness: review.crispiness.label(),
            glyphs: rating_glyphs(review.rating),
            photo: review.photo.clone(),
            toasts: format!("Toast ({})", review.toasts),
            comments: format!("Comment ({})", review.comments),
        }
    }

    pub fn filled(&self) -> usize {
        self.glyphs.iter().filter(|g| **g == Glyph::Fish).count()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub enum FeedItem {
    Card(ReviewCardView),
    Spacer { height: u16 },
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FeedView {
    pub title: &'static str,
    pub items: Vec<FeedItem>,
}

impl FeedView {
    pub fn cards(&self) -> impl Iterator<Item = &ReviewCardView> {
        self.items.iter().filter_map(|item| match item {
            FeedItem::Card(card) => Some(card),
            FeedItem::Spacer { .. } => None,
        })
    }
}

/// One card per review in store order, then the spacer. No paging.
pub fn build_feed(reviews: &[Review]) -> FeedView {
    let mut items: Vec<FeedItem> = reviews
        .iter()
        .map(|r| FeedItem::Card(ReviewCardView::from_review(r)))
        .collect();
    items.push(FeedItem::Spacer {
        height: TRAILING_SPACER,
    });
    FeedView {
        title: "Nearby Activity",
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::store::tests::review;

    #[test]
    fn glyphs_fill_below_the_rating() {
        use Glyph::*;
        assert_eq!(rating_glyphs(Rating::clamped(3)), [Fish, Fish, Fish, Bone, Bone]);
        assert_eq!(rating_glyphs(Rating::clamped(1)), [Fish, Bone, Bone, Bone, Bone]);
        assert_eq!(rating_glyphs(Rating::clamped(5)), [Fish; 5]);
    }

    #[test]
    fn n_reviews_make_n_cards_and_a_spacer() {
        let reviews = seed::initial_reviews();
        let feed = build_feed(&reviews);

        assert_eq!(feed.items.len(), reviews.len() + 1);
        assert_eq!(
            feed.items.last(),
            Some(&FeedItem::Spacer { height: TRAILING_SPACER })
        );
        let ids: Vec<_> = feed.cards().map(|c| c.id).collect();
        let expected: Vec<_> = reviews.iter().map(|r| r.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn empty_store_is_just_the_spacer() {
        let feed = build_feed(&[]);
        assert_eq!(feed.items, vec![FeedItem::Spacer { height: TRAILING_SPACER }]);
    }

    #[test]
    fn card_text_matches_the_review() {
        let reviews = seed::initial_reviews();
        let feed = build_feed(&reviews);
        let card = feed.cards().next().unwrap();

        assert_eq!(card.author, "Party Marty");
        assert_eq!(card.venue, "St. Stan's Social Hall");
        assert_eq!(card.quote, "\"The polka band was on fire! Best cod in the county.\"");
        assert_eq!(card.crispiness, "Perfect");
        assert_eq!(card.toasts, "Toast (12)");
        assert_eq!(card.comments, "Comment (3)");
        assert!(card.photo.is_some());
    }

    #[test]
    fn blank_location_reads_unknown() {
        let mut r = review(1, 2);
        r.location = String::new();
        let feed = build_feed(&[r]);
        assert_eq!(feed.cards().next().unwrap().location, "Unknown");
    }

    #[test]
    fn building_twice_gives_the_same_tree() {
        let reviews = seed::initial_reviews();
        assert_eq!(build_feed(&reviews), build_feed(&reviews));
    }
}
