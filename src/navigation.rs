use leptos::logging::log;
use serde::{Deserialize, Serialize};

use crate::error::FryError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Feed,
    Map,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Feed, Tab::Map, Tab::Profile];

    pub fn index(self) -> usize {
        match self {
            Tab::Feed => 0,
            Tab::Map => 1,
            Tab::Profile => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Feed => "Feed",
            Tab::Map => "Map",
            Tab::Profile => "Profile",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Feed => "dynamic_feed",
            Tab::Map => "map",
            Tab::Profile => "person",
        }
    }
}

impl TryFrom<usize> for Tab {
    type Error = FryError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Tab::ALL
            .get(index)
            .copied()
            .ok_or(FryError::TabOutOfRange(index))
    }
}

/// Tracks which of the three views is on screen. No history is kept.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    selected: Tab,
}

impl Navigator {
    pub fn selected(&self) -> Tab {
        self.selected
    }

    pub fn select(&mut self, index: usize) -> Result<Tab, FryError> {
        let tab = Tab::try_from(index)?;
        log!("[NAV] Switching to {}", tab.label());
        self.selected = tab;
        Ok(tab)
    }
}
