//! Main application entry point for Fry Finder.
//! Owns the session state, re-projects it after every action and swaps the
//! visible page underneath the navigation bar.

use leptos::*;
use leptos::logging::log;
use leptos_meta::*;
use leptos_router::*;
use crate::components::{
    checkin_dialog::CheckInDialog,
    feed_page::{FeedActions, FeedPage},
    map_page::MapPage,
    nav_bar::NavBar,
    profile_page::ProfilePage,
};
use crate::models::review::ReviewId;
use crate::state::{Action, AppState};
use crate::view_model::ViewTree;

pub const PAGE_TITLE: &str = "Party Marty's Fry Finder";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/fryfinder.css" />
        <Link rel="stylesheet" href="https://fonts.googleapis.com/icon?family=Material+Icons" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />
        <Title text=PAGE_TITLE />
        <Router>
            <Routes>
                <Route path="" view=FryFinder />
            </Routes>
        </Router>
    }
}

#[component]
pub fn FryFinder() -> impl IntoView {
    log!("[APP] Starting Party Marty's App...");

    // Signal holding the whole session: store, selected tab and check-in form.
    let state = create_rw_signal(AppState::seeded());
    let dispatch = Callback::new(move |action: Action| {
        state.update(|s| s.dispatch(action));
    });

    provide_context(FeedActions {
        delete: Callback::new(move |id: ReviewId| dispatch.call(Action::DeleteReview(id))),
    });

    // Memos only notify when their projection changes, so typing in the dialog
    // leaves the feed DOM alone.
    let screen = create_memo(move |_| state.with(AppState::project));
    let body = create_memo(move |_| screen.with(|s| s.body.clone()));
    let tab = create_memo(move |_| screen.with(|s| s.tab));
    let dialog = create_memo(move |_| screen.with(|s| s.dialog.clone()));
    let dialog_open = move || dialog.with(Option::is_some);

    view! {
        <div class="app">
            <div class="app-body">
                {move || match body.get() {
                    ViewTree::Feed(feed) => view! { <FeedPage feed=feed dispatch=dispatch /> }.into_view(),
                    ViewTree::Map(map) => view! { <MapPage map=map /> }.into_view(),
                    ViewTree::Profile(profile) => view! { <ProfilePage profile=profile /> }.into_view(),
                }}
            </div>
            <Show when=dialog_open>
                <CheckInDialog dialog=dialog dispatch=dispatch />
            </Show>
            <NavBar selected=tab dispatch=dispatch />
        </div>
    }
}
