//! Mock data the prototype starts with: the signed-in user, the opening feed,
//! nearby venues and badges.

use crate::models::review::{Crispiness, Rating, Review, ReviewId};
use crate::models::venue::{Badge, Venue};

pub struct CurrentUser {
    pub name: &'static str,
    pub avatar: &'static str,
    pub home: &'static str,
}

pub const CURRENT_USER: CurrentUser = CurrentUser {
    name: "Party Marty",
    avatar: "https://loremflickr.com/100/100/man,smile",
    home: "Milwaukee, WI",
};

/// Stands in for a GPS fix when a check-in is confirmed.
pub const MOCK_GPS_LOCATION: &str = "Milwaukee, WI";
pub const CHECK_IN_PHOTO: &str = "https://loremflickr.com/320/240/fish,chips";
pub const MAP_BANNER: &str = "https://loremflickr.com/400/200/map,city";

pub const NEARBY_SPOTS: [Venue; 4] = [
    Venue { name: "The Walleye Wagon", distance: "0.8 mi", rating: 4.8 },
    Venue { name: "Betty's Breading Barn", distance: "1.2 mi", rating: 4.2 },
    Venue { name: "VFW Post #209", distance: "2.5 mi", rating: 5.0 },
    Venue { name: "Captain Mike's", distance: "3.1 mi", rating: 3.5 },
];

pub const BADGES: [Badge; 4] = [
    Badge { name: "Cod Commander", icon: "👑", description: "Rated 10 places" },
    Badge { name: "Tartar Titan", icon: "🥒", description: "Found the perfect sauce" },
    Badge { name: "Friday Fanatic", icon: "📅", description: "4 weeks in a row" },
    Badge { name: "Polka Pro", icon: "🪗", description: "Danced at dinner" },
];

pub fn initial_reviews() -> Vec<Review> {
    vec![
        Review {
            id: ReviewId(1),
            user_name: CURRENT_USER.name.into(),
            user_avatar: CURRENT_USER.avatar.into(),
            venue: "St. Stan's Social Hall".into(),
            location: "Milwaukee, WI".into(),
            rating: Rating::clamped(5),
            crispiness: Crispiness::Perfect,
            tartar: "Tangy".into(),
            note: "The polka band was on fire! Best cod in the county.".into(),
            date_label: "Oct 12".into(),
            photo: Some("https://loremflickr.com/320/240/fish,food".into()),
            tagged: vec!["Big Tony".into(), "Cousin Sal".into()],
            toasts: 12,
            comments: 3,
        },
        Review {
            id: ReviewId(2),
            user_name: CURRENT_USER.name.into(),
            user_avatar: CURRENT_USER.avatar.into(),
            venue: "Joe's Lakeside Pub".into(),
            location: "Madison, WI".into(),
            rating: Rating::clamped(3),
            crispiness: Crispiness::Soggy,
            tartar: "Bland".into(),
            note: "Good beer, but the fish needs work. Cole slaw was watery.".into(),
            date_label: "Oct 19".into(),
            photo: None,
            tagged: vec![],
            toasts: 2,
            comments: 0,
        },
        Review {
            id: ReviewId(3),
            user_name: "Cousin Sal".into(),
            user_avatar: "https://loremflickr.com/100/100/boy,smile".into(),
            venue: "The Walleye Wagon".into(),
            location: "Green Bay, WI".into(),
            rating: Rating::clamped(4),
            crispiness: Crispiness::Crunchy,
            tartar: "Good".into(),
            note: "Solid choice for a Friday night.".into(),
            date_label: "Oct 20".into(),
            photo: None,
            tagged: vec![CURRENT_USER.name.into()],
            toasts: 5,
            comments: 1,
        },
    ]
}
