use serde::Serialize;

use crate::models::venue::Venue;
use crate::seed::MAP_BANNER;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SpotRow {
    pub name: &'static str,
    pub subtitle: &'static str,
    pub distance: String,
    pub rating: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MapView {
    pub title: &'static str,
    pub banner: &'static str,
    pub spots: Vec<SpotRow>,
}

/// Venues are listed as given; distances are labels, not computed.
pub fn build_map(venues: &[Venue]) -> MapView {
    MapView {
        title: "Verified Venues",
        banner: MAP_BANNER,
        spots: venues
            .iter()
            .map(|v| SpotRow {
                name: v.name,
                subtitle: "Fried Fish • American",
                distance: format!("{} away", v.distance),
                rating: format!("{:.1}", v.rating),
            })
            .collect(),
    }
}
