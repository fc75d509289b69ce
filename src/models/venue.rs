use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Venue {
    pub name: &'static str,
    pub distance: &'static str, // Pre-baked, e.g. "0.8 mi"
    pub rating: f32,            // Average fish rating
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Badge {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}
