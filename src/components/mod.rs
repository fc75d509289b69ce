pub mod checkin_dialog;
pub mod feed_page;
pub mod map_page;
pub mod nav_bar;
pub mod profile_page;
pub mod review_card;
