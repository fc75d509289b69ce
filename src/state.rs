//! Application state for one session and the messages that change it.
//! UI callbacks never touch the store directly: they send an `Action`, and the
//! screen is re-projected from scratch afterwards.

use leptos::logging::{log, warn};
use serde::{Deserialize, Serialize};

use crate::checkin::CheckInForm;
use crate::error::FryError;
use crate::models::review::{Crispiness, ReviewId};
use crate::navigation::Navigator;
use crate::store::ReviewStore;
use crate::view_model::{CheckInView, Screen, ViewTree};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(usize),
    OpenCheckIn,
    EditVenue(String),
    EditLocation(String),
    EditNote(String),
    SetRating(u8),
    SetCrispiness(String),
    AttachPhoto,
    ConfirmCheckIn,
    DismissCheckIn,
    DeleteReview(ReviewId),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub store: ReviewStore,
    pub navigator: Navigator,
    pub check_in: CheckInForm,
}

impl AppState {
    pub fn seeded() -> Self {
        Self {
            store: ReviewStore::seeded(),
            ..Self::default()
        }
    }

    pub fn apply(&mut self, action: Action) -> Result<(), FryError> {
        match action {
            Action::Navigate(index) => self.navigator.select(index).map(|_| ()),
            Action::OpenCheckIn => {
                self.check_in.open();
                Ok(())
            }
            Action::EditVenue(venue) => self.check_in.set_venue(venue),
            Action::EditLocation(location) => self.check_in.set_location(location),
            Action::EditNote(note) => self.check_in.set_note(note),
            Action::SetRating(value) => self.check_in.set_rating(value),
            Action::SetCrispiness(label) => {
                let crispiness: Crispiness = label.parse()?;
                self.check_in.set_crispiness(crispiness)
            }
            Action::AttachPhoto => self.check_in.attach_photo(),
            Action::ConfirmCheckIn => self.check_in.confirm(&mut self.store).map(|_| ()),
            Action::DismissCheckIn => {
                self.check_in.dismiss();
                Ok(())
            }
            Action::DeleteReview(id) => {
                if self.store.remove(id).is_none() {
                    log!("[APP] Review {} already gone", id);
                }
                Ok(())
            }
        }
    }

    /// Like `apply`, but every rejected action is logged and dropped. This is
    /// what the UI uses: an empty venue on confirm simply does nothing.
    pub fn dispatch(&mut self, action: Action) {
        let label = format!("{action:?}");
        match self.apply(action) {
            Ok(()) => {}
            Err(FryError::EmptyVenue) => log!("[APP] {label} ignored: venue is empty"),
            Err(err) => warn!("[APP] {label} ignored: {err}"),
        }
    }

    pub fn project(&self) -> Screen {
        let tab = self.navigator.selected();
        Screen {
            tab,
            body: ViewTree::build(tab, self.store.list()),
            dialog: self.check_in.draft().map(CheckInView::from),
        }
    }
}
