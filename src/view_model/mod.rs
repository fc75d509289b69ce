//! Pure projections from application state to display trees.
//!
//! Builders borrow what they read and return owned nodes; nothing here keeps a
//! reference to the store between rebuilds.

pub mod feed;
pub mod map;
pub mod profile;

use serde::Serialize;

use crate::checkin::CheckInDraft;
use crate::models::review::{Crispiness, Review};
use crate::navigation::Tab;
use crate::seed::{BADGES, CURRENT_USER, NEARBY_SPOTS};

pub use feed::{build_feed, FeedItem, FeedView, Glyph, ReviewCardView};
pub use map::{build_map, MapView, SpotRow};
pub use profile::{build_profile, ProfileView, Stat};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub enum ViewTree {
    Feed(FeedView),
    Map(MapView),
    Profile(ProfileView),
}

impl ViewTree {
    pub fn build(tab: Tab, reviews: &[Review]) -> Self {
        match tab {
            Tab::Feed => ViewTree::Feed(build_feed(reviews)),
            Tab::Map => ViewTree::Map(build_map(&NEARBY_SPOTS)),
            Tab::Profile => ViewTree::Profile(build_profile(&CURRENT_USER, &BADGES)),
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            ViewTree::Feed(_) => Tab::Feed,
            ViewTree::Map(_) => Tab::Map,
            ViewTree::Profile(_) => Tab::Profile,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CheckInView {
    pub venue: String,
    pub location: String,
    pub note: String,
    pub rating: u8,
    pub rating_label: String,
    pub crispiness: Option<&'static str>,
    pub crispiness_options: Vec<&'static str>,
    pub photo_label: &'static str,
    pub photo_attached: bool,
}

impl From<&CheckInDraft> for CheckInView {
    fn from(draft: &CheckInDraft) -> Self {
        Self {
            venue: draft.venue.clone(),
            location: draft.location.clone(),
            note: draft.note.clone(),
            rating: draft.rating.value(),
            rating_label: draft.rating_label(),
            crispiness: draft.crispiness.map(Crispiness::label),
            crispiness_options: Crispiness::ALL.iter().map(|c| c.label()).collect(),
            photo_label: draft.photo_label(),
            photo_attached: draft.photo_attached,
        }
    }
}

/// Everything on screen after one event: the visible view and the dialog, if open.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Screen {
    pub tab: Tab,
    pub body: ViewTree,
    pub dialog: Option<CheckInView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn each_tab_builds_its_own_tree() {
        let reviews = seed::initial_reviews();
        for tab in Tab::ALL {
            assert_eq!(ViewTree::build(tab, &reviews).tab(), tab);
        }
    }

    #[test]
    fn dialog_view_mirrors_the_draft() {
        let draft = CheckInDraft {
            crispiness: Some(Crispiness::Crunchy),
            ..CheckInDraft::default()
        };
        let view = CheckInView::from(&draft);
        assert_eq!(view.crispiness, Some("Crunchy"));
        assert_eq!(view.crispiness_options, ["Soggy", "Decent", "Crunchy", "Perfect"]);
        assert_eq!(view.rating, 3);
        assert_eq!(view.location, "Current Location");
    }
}
