//! Profile header and detail card for the signed-in user.
//!
//! DESIGN
//! ======
//! Row labels and values come from `profile_rows` so the dashboard layout and
//! its tests read the same list.

#[cfg(test)]
#[path = "profile_card_test.rs"]
mod profile_card_test;

use leptos::prelude::*;

use crate::net::types::User;

/// `(label, value)` pairs shown in the detail card, in display order.
pub fn profile_rows(user: &User) -> Vec<(&'static str, String)> {
    vec![
        ("Full Name", user.full_name()),
        ("Email Address", user.email.clone()),
        ("Phone Number", user.phone.clone()),
        ("Age", user.age_label()),
        ("Address", user.address_line()),
    ]
}

/// Avatar, name, email, and city for the dashboard header.
#[component]
pub fn ProfileHeader(user: User) -> impl IntoView {
    let alt = user.display_name();
    view! {
        <div class="profile-header">
            <img class="profile-header__avatar" src=user.picture.medium.clone() alt=alt.clone()/>
            <div class="profile-header__details">
                <h2 class="profile-header__name">{alt}</h2>
                <p class="profile-header__email">{user.email.clone()}</p>
                <p class="profile-header__location">{user.city_line()}</p>
            </div>
        </div>
    }
}

/// "User Information" card listing every profile row.
#[component]
pub fn ProfileCard(user: User) -> impl IntoView {
    view! {
        <section class="profile-card">
            <header class="profile-card__header">
                <h3>"User Information"</h3>
                <span class="profile-card__badge">"Active"</span>
            </header>
            <dl class="profile-card__rows">
                {profile_rows(&user)
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="profile-card__row">
                                <dt class="profile-card__label">{label}</dt>
                                <dd class="profile-card__value">{value}</dd>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </dl>
        </section>
    }
}
