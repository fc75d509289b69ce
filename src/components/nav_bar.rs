use leptos::*;
use crate::navigation::Tab;
use crate::state::Action;

#[component]
pub fn NavBar(#[prop(into)] selected: Signal<Tab>, dispatch: Callback<Action>) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            {Tab::ALL.into_iter().map(|tab| view! {
                <button
                    class="nav-destination"
                    class:selected=move || selected.get() == tab
                    on:click=move |_| dispatch.call(Action::Navigate(tab.index()))
                >
                    <span class="material-icons">{ tab.icon() }</span>
                    <span class="nav-label">{ tab.label() }</span>
                </button>
            }).collect::<Vec<_>>()}
        </nav>
    }
}
