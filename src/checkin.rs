//! Check-in dialog state.
//! The form is either closed or holds a draft; confirming turns the draft into a
//! review at the front of the store.

use leptos::logging::log;
use serde::{Deserialize, Serialize};

use crate::error::FryError;
use crate::models::review::{Crispiness, Rating, Review, ReviewId};
use crate::seed::{CHECK_IN_PHOTO, CURRENT_USER, MOCK_GPS_LOCATION};
use crate::store::ReviewStore;

pub const DEFAULT_LOCATION: &str = "Current Location";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CheckInDraft {
    pub venue: String,
    pub location: String,
    pub note: String,
    pub rating: Rating,
    pub crispiness: Option<Crispiness>,
    pub photo_attached: bool,
}

impl Default for CheckInDraft {
    fn default() -> Self {
        Self {
            venue: String::new(),
            location: DEFAULT_LOCATION.into(),
            note: String::new(),
            rating: Rating::default(),
            crispiness: None,
            photo_attached: false,
        }
    }
}

impl CheckInDraft {
    pub fn rating_label(&self) -> String {
        let n = self.rating.value();
        format!("Rating: {n} Fish {}", "🐟".repeat(n as usize))
    }

    pub fn photo_label(&self) -> &'static str {
        if self.photo_attached {
            "Photo Attached!"
        } else {
            "Add Photo"
        }
    }

    fn into_review(self, id: ReviewId) -> Review {
        Review {
            id,
            user_name: CURRENT_USER.name.into(),
            user_avatar: CURRENT_USER.avatar.into(),
            venue: self.venue,
            location: MOCK_GPS_LOCATION.into(),
            rating: self.rating,
            crispiness: self.crispiness.unwrap_or_default(),
            tartar: "Good".into(),
            note: self.note,
            date_label: "Just now".into(),
            photo: self.photo_attached.then(|| CHECK_IN_PHOTO.to_string()),
            tagged: vec![],
            toasts: 0,
            comments: 0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub enum CheckInForm {
    #[default]
    Closed,
    Open(CheckInDraft),
}

impl CheckInForm {
    pub fn is_open(&self) -> bool {
        matches!(self, CheckInForm::Open(_))
    }

    pub fn draft(&self) -> Option<&CheckInDraft> {
        match self {
            CheckInForm::Open(draft) => Some(draft),
            CheckInForm::Closed => None,
        }
    }

    /// Always starts from a blank draft, even if one was already open.
    pub fn open(&mut self) {
        log!("[CHECKIN] Opening check-in form");
        *self = CheckInForm::Open(CheckInDraft::default());
    }

    pub fn edit(&mut self, f: impl FnOnce(&mut CheckInDraft)) -> Result<(), FryError> {
        match self {
            CheckInForm::Open(draft) => {
                f(draft);
                Ok(())
            }
            CheckInForm::Closed => Err(FryError::FormClosed),
        }
    }

    pub fn set_venue(&mut self, venue: String) -> Result<(), FryError> {
        self.edit(|d| d.venue = venue)
    }

    pub fn set_location(&mut self, location: String) -> Result<(), FryError> {
        self.edit(|d| d.location = location)
    }

    pub fn set_note(&mut self, note: String) -> Result<(), FryError> {
        self.edit(|d| d.note = note)
    }

    pub fn set_rating(&mut self, value: u8) -> Result<(), FryError> {
        self.edit(|d| d.rating = Rating::clamped(value))
    }

    pub fn set_crispiness(&mut self, crispiness: Crispiness) -> Result<(), FryError> {
        self.edit(|d| d.crispiness = Some(crispiness))
    }

    pub fn attach_photo(&mut self) -> Result<(), FryError> {
        self.edit(|d| d.photo_attached = true)
    }

    /// On an empty venue the form stays open with the draft untouched.
    pub fn confirm(&mut self, store: &mut ReviewStore) -> Result<ReviewId, FryError> {
        let venue_missing = self.draft().ok_or(FryError::FormClosed)?.venue.is_empty();
        if venue_missing {
            return Err(FryError::EmptyVenue);
        }
        let CheckInForm::Open(draft) = std::mem::take(self) else {
            return Err(FryError::FormClosed);
        };

        let id = store.next_id();
        let review = draft.into_review(id);
        log!(
            "[CHECKIN] Confirmed check-in: {}",
            serde_json::to_string(&review).unwrap_or_default()
        );
        store.add(review);
        Ok(id)
    }

    pub fn dismiss(&mut self) {
        if self.is_open() {
            log!("[CHECKIN] Check-in dismissed");
        }
        *self = CheckInForm::Closed;
    }
}
