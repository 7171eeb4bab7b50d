//! Discovery feed: ads chosen by the user's personalization category.
//!
//! The category is fetched once per visit from `/v1/get_ads`; the ad copy
//! comes from the static catalog in `state::ads`. A failed fetch shows the
//! error and an empty feed; a rejected token ends the session.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::state::ads::{AdsState, category_label};
use crate::state::prefs::Preferences;
use crate::state::session::Session;
use crate::util::guard::{RouteKind, install_guard};
use crate::util::i18n::{Text, t};

#[component]
pub fn DiscoverPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let prefs = expect_context::<RwSignal<Preferences>>();
    install_guard(session, RouteKind::Protected, use_navigate());
    let lang = move || prefs.get().lang;

    let ads = RwSignal::new(AdsState::default());
    if let Some(bearer) = session.with_untracked(Session::bearer) {
        ads.update(AdsState::begin);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::get_ads(&bearer).await;
            if let Err(e) = &result {
                log::warn!("get_ads failed: {e}");
                session.update(|s| {
                    s.handle_request_error(&crate::util::storage::LocalStorage, e);
                });
            }
            ads.update(|a| a.finish(result.map_err(|e| e.to_string())));
        });
        #[cfg(not(feature = "csr"))]
        let _ = bearer;
    }

    let category = move || ads.with(|a| a.category).map(|c| category_label(c, lang()));
    let feed = move || {
        ads.with(AdsState::ads)
            .iter()
            .map(|ad| {
                view! {
                    <article class="ad-card">
                        <img class="ad-card__image" src=ad.image alt=ad.title/>
                        <h3>{ad.title}</h3>
                        <p>{ad.description}</p>
                    </article>
                }
            })
            .collect_view()
    };

    view! {
        <NavBar/>
        <main class="discover-page">
            <h1>{move || t(lang(), Text::DiscoverTitle)}</h1>
            <Show when=move || ads.with(|a| a.loading)>
                <p>{move || t(lang(), Text::Loading)}</p>
            </Show>
            <Show when=move || category().is_some()>
                <p class="discover-page__category">
                    {move || t(lang(), Text::YourCategory)}
                    ": "
                    {move || category().unwrap_or_default()}
                </p>
            </Show>
            <Show when=move || ads.with(|a| a.error.is_some())>
                <p class="discover-page__error">{move || ads.with(|a| a.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || ads.with(|a| !a.loading && a.ads().is_empty())>
                <p>{move || t(lang(), Text::NoAds)}</p>
            </Show>
            <div class="ad-feed">{feed}</div>
        </main>
    }
}
