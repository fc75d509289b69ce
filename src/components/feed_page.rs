//! Activity feed: header, the review cards, and the floating check-in button.

use leptos::*;
use crate::components::review_card::ReviewCard;
use crate::models::review::ReviewId;
use crate::state::Action;
use crate::view_model::{FeedItem, FeedView};

/// Card-level operations made available to anything rendered inside the feed.
/// Nothing binds `delete` to a control yet.
#[derive(Clone, Copy)]
pub struct FeedActions {
    pub delete: Callback<ReviewId>,
}

#[component]
pub fn FeedPage(feed: FeedView, dispatch: Callback<Action>) -> impl IntoView {
    let items = feed
        .items
        .into_iter()
        .map(|item| match item {
            FeedItem::Card(card) => view! { <ReviewCard card=card /> }.into_view(),
            FeedItem::Spacer { height } => view! {
                <div class="spacer" style=format!("height: {height}px")></div>
            }
            .into_view(),
        })
        .collect::<Vec<_>>();

    view! {
        <div class="page feed-page">
            <header class="top-bar">
                <span class="title">{ feed.title }</span>
                <span class="material-icons">{ "notifications" }</span>
            </header>
            <div class="review-list">{ items }</div>
            <button class="check-in-button" on:click=move |_| dispatch.call(Action::OpenCheckIn)>
                <span class="material-icons">{ "add" }</span>
                { "CHECK-IN" }
            </button>
        </div>
    }
}
