//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    discover::DiscoverPage, home::HomePage, login::LoginPage, profile::ProfilePage, register::RegisterPage,
};
use crate::state::prefs::Preferences;
use crate::state::session::Session;
use crate::util::i18n::{Text, t};
use crate::util::storage::LocalStorage;
use crate::util::theme;

/// Root application component.
///
/// Restores session and preferences from `localStorage`, provides them as
/// context, and keeps `<html data-theme lang>` in sync with preferences.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::restore(&LocalStorage));
    let prefs = RwSignal::new(Preferences::load(&LocalStorage));
    provide_context(session);
    provide_context(prefs);

    Effect::new(move || {
        let current = prefs.get();
        theme::apply(current.theme, current.lang);
    });

    view! {
        <Title text=move || t(prefs.get().lang, Text::AppTitle)/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("discover") view=DiscoverPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
    }
}
