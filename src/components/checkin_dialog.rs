//! Modal check-in form.
//! Field values are read back from the projected draft so the inputs always show
//! what the form handler holds; every change goes out as an `Action`.

use leptos::*;
use crate::models::review::Crispiness;
use crate::state::Action;
use crate::view_model::CheckInView;

fn picked_files(ev: &ev::Event) -> bool {
    event_target::<web_sys::HtmlInputElement>(ev)
        .files()
        .map(|files| files.length() > 0)
        .unwrap_or(false)
}

fn draft_field(
    dialog: Memo<Option<CheckInView>>,
    read: fn(&CheckInView) -> String,
) -> impl Fn() -> String + Copy + 'static {
    move || dialog.with(|d| d.as_ref().map(read).unwrap_or_default())
}

#[component]
pub fn CheckInDialog(dialog: Memo<Option<CheckInView>>, dispatch: Callback<Action>) -> impl IntoView {
    let photo_attached = move || dialog.with(|d| d.as_ref().is_some_and(|d| d.photo_attached));
    let chosen = move || dialog.with(|d| d.as_ref().and_then(|d| d.crispiness));

    let on_rating = move |ev: ev::Event| {
        if let Ok(value) = event_target_value(&ev).parse::<u8>() {
            dispatch.call(Action::SetRating(value));
        }
    };
    let on_photo = move |ev: ev::Event| {
        if picked_files(&ev) {
            dispatch.call(Action::AttachPhoto);
        }
    };

    view! {
        <div class="dialog-backdrop">
            <div class="dialog" role="dialog" aria-label="Check-In">
                <header class="dialog-header">
                    <h2>{ "Check-In" }</h2>
                    <button class="dialog-close" on:click=move |_| dispatch.call(Action::DismissCheckIn)>
                        <span class="material-icons">{ "close" }</span>
                    </button>
                </header>
                <div class="dialog-content">
                    <input
                        type="search"
                        class="venue-input"
                        placeholder="Where are you eating?"
                        prop:value=draft_field(dialog, |d| d.venue.clone())
                        on:input=move |ev| dispatch.call(Action::EditVenue(event_target_value(&ev)))
                    />
                    <div class="location-row">
                        <span class="material-icons">{ "location_on" }</span>
                        <input
                            type="text"
                            class="location-input"
                            prop:value=draft_field(dialog, |d| d.location.clone())
                            on:input=move |ev| dispatch.call(Action::EditLocation(event_target_value(&ev)))
                        />
                    </div>
                    <hr />
                    <textarea
                        class="note-input"
                        placeholder="What did you think?"
                        rows="3"
                        prop:value=draft_field(dialog, |d| d.note.clone())
                        on:input=move |ev| dispatch.call(Action::EditNote(event_target_value(&ev)))
                    />
                    <div class="rating-label">{ draft_field(dialog, |d| d.rating_label.clone()) }</div>
                    <input
                        type="range"
                        class="rating-slider"
                        min="1"
                        max="5"
                        step="1"
                        prop:value=draft_field(dialog, |d| d.rating.to_string())
                        on:input=on_rating
                    />
                    <label class="photo-picker">
                        <span class="material-icons">{ "camera_alt" }</span>
                        <input type="file" accept="image/*" on:change=on_photo />
                        <span class="photo-label" class:attached=photo_attached>
                            { draft_field(dialog, |d| d.photo_label.to_string()) }
                        </span>
                    </label>
                    <select
                        class="crispiness-select"
                        on:change=move |ev| dispatch.call(Action::SetCrispiness(event_target_value(&ev)))
                    >
                        <option value="" disabled=true prop:selected=move || chosen().is_none()>
                            { "Crispiness" }
                        </option>
                        {Crispiness::ALL.into_iter().map(|c| {
                            let label = c.label();
                            view! {
                                <option value=label prop:selected=move || chosen() == Some(label)>
                                    { label }
                                </option>
                            }
                        }).collect::<Vec<_>>()}
                    </select>
                </div>
                <footer class="dialog-actions">
                    <button class="confirm-button" on:click=move |_| dispatch.call(Action::ConfirmCheckIn)>
                        { "Confirm Check-In" }
                    </button>
                </footer>
            </div>
        </div>
    }
}
