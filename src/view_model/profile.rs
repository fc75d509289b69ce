use serde::Serialize;

use crate::models::venue::Badge;
use crate::seed::CurrentUser;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Stat {
    pub value: u32,
    pub label: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProfileView {
    pub name: &'static str,
    pub home: &'static str,
    pub avatar: &'static str,
    pub stats: Vec<Stat>,
    pub badges: Vec<Badge>,
    pub activity_placeholder: &'static str,
}

// Counters are fixed mock values, not derived from the store.
const STATS: [(u32, &str); 4] = [(124, "TOTAL"), (48, "UNIQUE"), (12, "BADGES"), (85, "FRIENDS")];

pub fn build_profile(user: &CurrentUser, badges: &[Badge]) -> ProfileView {
    ProfileView {
        name: user.name,
        home: user.home,
        avatar: user.avatar,
        stats: STATS
            .iter()
            .map(|&(value, label)| Stat { value, label })
            .collect(),
        badges: badges.to_vec(),
        activity_placeholder: "Displaying recent check-ins...",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{BADGES, CURRENT_USER};

    #[test]
    fn shows_user_counters_and_badges() {
        let profile = build_profile(&CURRENT_USER, &BADGES);
        assert_eq!(profile.name, "Party Marty");
        assert_eq!(profile.home, "Milwaukee, WI");
        let labels: Vec<_> = profile.stats.iter().map(|s| (s.value, s.label)).collect();
        assert_eq!(labels, [(124, "TOTAL"), (48, "UNIQUE"), (12, "BADGES"), (85, "FRIENDS")]);
        assert_eq!(profile.badges.len(), 4);
        assert_eq!(profile.badges[0].name, "Cod Commander");
    }
}
