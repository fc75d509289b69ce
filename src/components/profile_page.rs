use leptos::*;
use crate::view_model::ProfileView;

#[component]
pub fn ProfilePage(profile: ProfileView) -> impl IntoView {
    view! {
        <div class="page profile-page">
            <div class="profile-banner">
                <div class="banner-color"></div>
                <div class="profile-identity">
                    <img class="profile-avatar" src=profile.avatar alt="" />
                    <h2 class="profile-name">{ profile.name }</h2>
                    <div class="profile-home">{ profile.home }</div>
                </div>
            </div>
            <div class="stats">
                {profile.stats.into_iter().map(|stat| view! {
                    <div class="stat">
                        <strong>{ stat.value }</strong>
                        <span class="stat-label">{ stat.label }</span>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
            <hr />
            <h3>{ "Recent Badges" }</h3>
            <div class="badges">
                {profile.badges.into_iter().map(|badge| view! {
                    <div class="badge" title=badge.description>
                        <div class="badge-icon">{ badge.icon }</div>
                        <div class="badge-name">{ badge.name }</div>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
            <hr />
            <h3>{ "Recent Activity" }</h3>
            <p class="placeholder">{ profile.activity_placeholder }</p>
        </div>
    }
}
