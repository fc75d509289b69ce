//! One check-in in the feed: who ate where, what they thought, and the fish scale.

use leptos::*;
use crate::view_model::{Glyph, ReviewCardView};

#[component]
pub fn ReviewCard(card: ReviewCardView) -> impl IntoView {
    let glyphs = card
        .glyphs
        .iter()
        .map(|glyph| {
            let class = match glyph {
                Glyph::Fish => "glyph fish",
                Glyph::Bone => "glyph bone",
            };
            view! { <span class=class>{ glyph.symbol() }</span> }
        })
        .collect::<Vec<_>>();

    view! {
        <article class="review-card" data-review-id=card.id.to_string()>
            <div class="card-header">
                <img class="avatar" src=card.avatar alt="" />
                <div class="headline">
                    <div>
                        <span class="author">{ card.author }</span>
                        { " is eating fish at" }
                    </div>
                    <div class="venue">{ card.venue }</div>
                    <div class="location">{ card.location }</div>
                </div>
                <span class="material-icons menu">{ "more_horiz" }</span>
            </div>
            <div class="card-body">
                <p class="note">{ card.quote }</p>
                <div class="attributes">
                    <span class="crispiness">
                        { "Crispiness: " }
                        <strong>{ card.crispiness }</strong>
                    </span>
                    <span class="fish-rating">{ glyphs }</span>
                </div>
                { card.photo.map(|src| view! {
                    <div class="photo">
                        <img src=src alt="" />
                    </div>
                }) }
                <hr />
                <div class="action-bar">
                    <span class="toast">
                        <span class="material-icons">{ "local_bar" }</span>
                        { card.toasts }
                    </span>
                    <span class="comment">
                        <span class="material-icons">{ "chat_bubble_outline" }</span>
                        { card.comments }
                    </span>
                </div>
            </div>
        </article>
    }
}
