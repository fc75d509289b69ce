#![cfg(feature = "ssr")]

use leptos::*;
use leptos::logging::log;
use fryfinder::app::FryFinder;
use fryfinder::components::map_page::MapPage;
use fryfinder::components::profile_page::ProfilePage;
use fryfinder::seed::{BADGES, CURRENT_USER, NEARBY_SPOTS};
use fryfinder::view_model::{build_map, build_profile};

#[test]
fn test_feed_renders_seeded_cards() {
    log!("[TEST] Rendering the feed on the server");
    let html = leptos::ssr::render_to_string(|| view! { <FryFinder /> }).to_string();

    assert_eq!(html.matches("class=\"review-card\"").count(), 3);
    assert!(html.contains("Nearby Activity"));
    assert!(html.contains("is eating fish at"));
    assert!(html.contains("Social Hall"));
    assert!(html.contains("The Walleye Wagon"));
    assert!(html.contains("Toast (12)"));
    assert!(html.contains("CHECK-IN"));
    assert!(!html.contains("Confirm Check-In"), "dialog starts closed");
    for label in ["Feed", "Map", "Profile"] {
        assert!(html.contains(label), "nav bar should offer {label}");
    }
}

#[test]
fn test_map_page_lists_venues() {
    let html = leptos::ssr::render_to_string(|| {
        let map = build_map(&NEARBY_SPOTS);
        view! { <MapPage map=map /> }
    })
    .to_string();

    assert_eq!(html.matches("class=\"spot\"").count(), 4);
    assert!(html.contains("Verified Venues"));
    assert!(html.contains("0.8 mi away"));
    assert!(html.contains("5.0"));
}

#[test]
fn test_profile_page_shows_badges() {
    let html = leptos::ssr::render_to_string(|| {
        let profile = build_profile(&CURRENT_USER, &BADGES);
        view! { <ProfilePage profile=profile /> }
    })
    .to_string();

    assert_eq!(html.matches("class=\"badge\"").count(), 4);
    assert!(html.contains("Cod Commander"));
    assert!(html.contains("FRIENDS"));
    assert!(html.contains("Displaying recent check-ins..."));
}
