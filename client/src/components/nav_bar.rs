//! Top navigation for authenticated views.
//!
//! Links to the three main views plus the preference toggles and logout.
//! Logging out only clears the session; the route guard does the redirect.

use leptos::prelude::*;
use leptos_router::components::A;

use super::pref_toggles::PrefToggles;
use crate::state::prefs::Preferences;
use crate::state::session::Session;
use crate::util::i18n::{Text, t};
use crate::util::storage::LocalStorage;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let prefs = expect_context::<RwSignal<Preferences>>();
    let lang = move || prefs.get().lang;

    let on_logout = move |_| session.update(|s| s.logout(&LocalStorage));

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__title">{move || t(lang(), Text::AppTitle)}</span>
            <A href="/">{move || t(lang(), Text::Home)}</A>
            <A href="/discover">{move || t(lang(), Text::Discover)}</A>
            <A href="/profile">{move || t(lang(), Text::Profile)}</A>
            <span class="nav-bar__user">{move || session.with(|s| s.profile.display_name())}</span>
            <PrefToggles/>
            <button class="nav-bar__logout" on:click=on_logout>
                {move || t(lang(), Text::Logout)}
            </button>
        </nav>
    }
}
