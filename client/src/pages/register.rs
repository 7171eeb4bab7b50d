//! Registration page.
//!
//! A successful registration does not log in. The submitted fields are
//! cached so the login view can prefill the username, then the user is sent
//! to `/login?registered=1`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::RegisterRequest;
use crate::components::pref_toggles::PrefToggles;
use crate::state::prefs::Preferences;
use crate::state::session::Session;
use crate::util::guard::{RouteKind, install_guard};
use crate::util::i18n::{Text, t};

/// Trim the text fields and require all five. The password is kept as typed.
pub(crate) fn normalize_registration(form: &RegisterRequest) -> Result<RegisterRequest, Text> {
    let request = RegisterRequest {
        first_name: form.first_name.trim().to_owned(),
        last_name: form.last_name.trim().to_owned(),
        email: form.email.trim().to_owned(),
        username: form.username.trim().to_owned(),
        password: form.password.clone(),
    };
    let missing = [
        &request.first_name,
        &request.last_name,
        &request.email,
        &request.username,
        &request.password,
    ]
    .iter()
    .any(|field| field.is_empty());
    if missing {
        return Err(Text::MissingFields);
    }
    Ok(request)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let prefs = expect_context::<RwSignal<Preferences>>();
    let navigate = use_navigate();
    install_guard(session, RouteKind::AuthOnly, navigate.clone());

    let form = RwSignal::new(RegisterRequest::default());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let lang = move || prefs.get().lang;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match form.with_untracked(normalize_registration) {
            Ok(request) => request,
            Err(text) => {
                message.set(Some(t(prefs.get_untracked().lang, text).to_owned()));
                return;
            }
        };
        message.set(None);
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&request).await {
                    Ok(confirmation) => {
                        log::info!("{confirmation}");
                        session.update(|s| s.complete_register(&crate::util::storage::LocalStorage, &request));
                        busy.set(false);
                        navigate("/login?registered=1", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        message.set(Some(e));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (request, &navigate);
    };

    view! {
        <div class="auth-page">
            <PrefToggles/>
            <form class="auth-form" on:submit=on_submit>
                <h1>{move || t(lang(), Text::RegisterTitle)}</h1>
                <input
                    class="auth-input"
                    type="text"
                    placeholder=move || t(lang(), Text::FirstName)
                    prop:value=move || form.with(|f| f.first_name.clone())
                    on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="text"
                    placeholder=move || t(lang(), Text::LastName)
                    prop:value=move || form.with(|f| f.last_name.clone())
                    on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="email"
                    placeholder=move || t(lang(), Text::Email)
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="text"
                    autocomplete="username"
                    placeholder=move || t(lang(), Text::Username)
                    prop:value=move || form.with(|f| f.username.clone())
                    on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    autocomplete="new-password"
                    placeholder=move || t(lang(), Text::Password)
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    {move || t(lang(), Text::RegisterButton)}
                </button>
                <Show when=move || message.get().is_some()>
                    <p class="auth-error">{move || message.get().unwrap_or_default()}</p>
                </Show>
                <A href="/login">{move || t(lang(), Text::GoToLogin)}</A>
            </form>
        </div>
    }
}
