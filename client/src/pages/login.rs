//! Login page.
//!
//! On success the session flips to authenticated and the auth-only guard
//! sends the user to `/`. A `?registered=1` query shows the post-registration
//! notice.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::pref_toggles::PrefToggles;
use crate::state::prefs::Preferences;
use crate::state::session::Session;
use crate::util::guard::{RouteKind, install_guard};
use crate::util::i18n::{Text, t};

/// Trim the username and require both fields. The password is sent as typed.
pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<(String, String), Text> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(Text::MissingCredentials);
    }
    Ok((username.to_owned(), password.to_owned()))
}

pub(crate) fn is_registered_flag(raw: Option<&str>) -> bool {
    matches!(raw, Some("1" | "true"))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let prefs = expect_context::<RwSignal<Preferences>>();
    install_guard(session, RouteKind::AuthOnly, use_navigate());

    let query = use_query_map();
    let just_registered = move || is_registered_flag(query.get().get("registered").as_deref());

    let username = RwSignal::new(session.with_untracked(|s| s.profile.username.clone()));
    let password = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<Text>);
    let lang = move || prefs.get().lang;
    let pending = move || session.with(|s| s.pending);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (user, pass) = match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(fields) => fields,
            Err(text) => {
                notice.set(Some(text));
                return;
            }
        };
        notice.set(None);
        if !session.try_update(Session::begin_login).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::login(&user, &pass).await;
            session.update(|s| match result {
                Ok(response) => {
                    s.complete_login(&crate::util::storage::LocalStorage, response, &pass);
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    s.fail_login(e);
                }
            });
        });
        #[cfg(not(feature = "csr"))]
        let _ = (user, pass);
    };

    let error_text = move || {
        notice
            .get()
            .map(|text| t(lang(), text).to_owned())
            .or_else(|| session.with(|s| s.error.clone()))
    };

    view! {
        <div class="auth-page">
            <PrefToggles/>
            <form class="auth-form" on:submit=on_submit>
                <h1>{move || t(lang(), Text::LoginTitle)}</h1>
                <Show when=just_registered>
                    <p class="auth-notice">{move || t(lang(), Text::RegisterSuccess)}</p>
                </Show>
                <input
                    class="auth-input"
                    type="text"
                    autocomplete="username"
                    placeholder=move || t(lang(), Text::Username)
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    autocomplete="current-password"
                    placeholder=move || t(lang(), Text::Password)
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=pending>
                    {move || if pending() { t(lang(), Text::LoggingIn) } else { t(lang(), Text::LoginButton) }}
                </button>
                <Show when=move || error_text().is_some()>
                    <p class="auth-error">{move || error_text().unwrap_or_default()}</p>
                </Show>
                <A href="/register">{move || t(lang(), Text::GoToRegister)}</A>
            </form>
        </div>
    }
}
