use leptos::*;
use crate::view_model::MapView;

#[component]
pub fn MapPage(map: MapView) -> impl IntoView {
    view! {
        <div class="page map-page">
            <header class="top-bar">
                <span class="title">{ map.title }</span>
            </header>
            <div class="map-banner">
                <img src=map.banner alt="Map of nearby venues" />
            </div>
            <ul class="spots">
                {map.spots.into_iter().map(|spot| view! {
                    <li class="spot">
                        <div class="spot-info">
                            <div class="spot-name">{ spot.name }</div>
                            <div class="spot-subtitle">{ spot.subtitle }</div>
                            <div class="spot-distance">{ spot.distance }</div>
                        </div>
                        <div class="spot-rating">{ spot.rating }</div>
                    </li>
                }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
