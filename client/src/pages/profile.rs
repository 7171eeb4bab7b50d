//! Profile and settings view.
//!
//! DESIGN
//! ======
//! Fields are read-only until the edit gate unlocks them via the password
//! modal. Unlocking seeds a draft from the cached profile; Save commits the
//! draft and locks again, Cancel discards it.
//!
//! The same view hosts the change-password form and account deletion.
//! Deletion asks for an inline confirmation first; on success the session is
//! cleared and the route guard redirects to `/login`.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::password_modal::PasswordModal;
use crate::state::prefs::Preferences;
use crate::state::profile::{CachedProfile, EditGate, ProfileDraft, check_password_change};
use crate::state::session::Session;
use crate::util::guard::{RouteKind, install_guard};
use crate::util::i18n::{Text, password_change_error, t};
use crate::util::storage::LocalStorage;

/// Label/value pairs for the read-only profile view.
pub(crate) fn profile_rows(profile: &CachedProfile) -> [(Text, String); 4] {
    [
        (Text::FirstName, profile.first_name.clone()),
        (Text::LastName, profile.last_name.clone()),
        (Text::Email, profile.email.clone()),
        (Text::Username, profile.username.clone()),
    ]
}

#[component]
#[allow(clippy::too_many_lines)]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let prefs = expect_context::<RwSignal<Preferences>>();
    install_guard(session, RouteKind::Protected, use_navigate());
    let lang = move || prefs.get().lang;

    // ---- edit gate ----

    let gate = RwSignal::new(EditGate::default());
    let draft = RwSignal::new(ProfileDraft::default());

    Effect::new(move || {
        if gate.with(EditGate::is_editable) {
            draft.set(session.with_untracked(|s| ProfileDraft::from(&s.profile)));
        }
    });

    let on_edit = move |_| gate.update(EditGate::request_edit);
    let on_cancel_edit = move |_| gate.update(EditGate::cancel);
    let on_save = move |_| {
        let next = draft.get_untracked();
        let mut profile = session.with_untracked(|s| s.profile.clone());
        if let Some(Ok(())) = gate.try_update(|g| g.save(&LocalStorage, &mut profile, next)) {
            session.update(|s| s.profile = profile);
        }
    };

    // ---- change password ----

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let password_message = RwSignal::new(None::<String>);
    let password_busy = RwSignal::new(false);

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if password_busy.get_untracked() {
            return;
        }
        let old = old_password.get_untracked();
        let new = new_password.get_untracked();
        if let Err(e) = session.with_untracked(|s| check_password_change(&s.profile, &old, &new)) {
            password_message.set(Some(password_change_error(prefs.get_untracked().lang, e).to_owned()));
            return;
        }
        let Some(bearer) = session.with_untracked(Session::bearer) else {
            return;
        };
        password_message.set(None);
        password_busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_password(&bearer, &old, &new).await {
                Ok(_) => {
                    session.update(|s| {
                        s.profile.set_password(&new);
                        s.profile.save(&LocalStorage);
                    });
                    old_password.set(String::new());
                    new_password.set(String::new());
                    password_message.set(Some(t(prefs.get_untracked().lang, Text::PasswordChanged).to_owned()));
                }
                Err(e) => {
                    password_message.set(Some(e.to_string()));
                    password_busy.set(false);
                    session.update(|s| {
                        s.handle_request_error(&LocalStorage, &e);
                    });
                    return;
                }
            }
            password_busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        let _ = (bearer, old, new);
    };

    // ---- delete account ----

    let confirming_delete = RwSignal::new(false);
    let deleting = RwSignal::new(false);

    let on_delete = move |_| confirming_delete.set(true);
    let on_cancel_delete = move |_| confirming_delete.set(false);
    let on_confirm_delete = move |_| {
        if deleting.get_untracked() {
            return;
        }
        let Some(bearer) = session.with_untracked(Session::bearer) else {
            return;
        };
        deleting.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_account(&bearer).await;
            deleting.set(false);
            confirming_delete.set(false);
            if session.try_update(|s| s.complete_delete(&LocalStorage, result)).unwrap_or(false) {
                log::info!("account deleted");
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = bearer;
    };

    let read_only = move || {
        session.with(|s| profile_rows(&s.profile)).into_iter().map(|(label, value)| {
            view! {
                <div class="profile-row">
                    <span class="profile-row__label">{move || t(lang(), label)}</span>
                    <span class="profile-row__value">{value}</span>
                </div>
            }
        })
        .collect_view()
    };

    view! {
        <NavBar/>
        <main class="profile-page">
            <section class="card">
                <h2>{move || t(lang(), Text::Profile)}</h2>
                <Show
                    when=move || gate.with(EditGate::is_editable)
                    fallback=move || view! {
                        {read_only}
                        <button on:click=on_edit>{move || t(lang(), Text::EditProfile)}</button>
                    }
                >
                    <input
                        class="profile-input"
                        type="text"
                        placeholder=move || t(lang(), Text::FirstName)
                        prop:value=move || draft.with(|d| d.first_name.clone())
                        on:input=move |ev| draft.update(|d| d.first_name = event_target_value(&ev))
                    />
                    <input
                        class="profile-input"
                        type="text"
                        placeholder=move || t(lang(), Text::LastName)
                        prop:value=move || draft.with(|d| d.last_name.clone())
                        on:input=move |ev| draft.update(|d| d.last_name = event_target_value(&ev))
                    />
                    <input
                        class="profile-input"
                        type="email"
                        placeholder=move || t(lang(), Text::Email)
                        prop:value=move || draft.with(|d| d.email.clone())
                        on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                    />
                    <button on:click=on_save>{move || t(lang(), Text::Save)}</button>
                    <button on:click=on_cancel_edit>{move || t(lang(), Text::Cancel)}</button>
                </Show>
                <PasswordModal gate=gate/>
            </section>

            <section class="card">
                <h2>{move || t(lang(), Text::ChangePassword)}</h2>
                <form on:submit=on_change_password>
                    <input
                        class="profile-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder=move || t(lang(), Text::OldPassword)
                        prop:value=move || old_password.get()
                        on:input=move |ev| old_password.set(event_target_value(&ev))
                    />
                    <input
                        class="profile-input"
                        type="password"
                        autocomplete="new-password"
                        placeholder=move || t(lang(), Text::NewPassword)
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || password_busy.get()>
                        {move || t(lang(), Text::ChangePassword)}
                    </button>
                </form>
                <Show when=move || password_message.get().is_some()>
                    <p class="profile-message">{move || password_message.get().unwrap_or_default()}</p>
                </Show>
            </section>

            <section class="card card--danger">
                <Show
                    when=move || confirming_delete.get()
                    fallback=move || view! {
                        <button on:click=on_delete>{move || t(lang(), Text::DeleteAccount)}</button>
                    }
                >
                    <p>{move || t(lang(), Text::ConfirmDelete)}</p>
                    <button on:click=on_confirm_delete disabled=move || deleting.get()>
                        {move || t(lang(), Text::Confirm)}
                    </button>
                    <button on:click=on_cancel_delete>{move || t(lang(), Text::Cancel)}</button>
                </Show>
                <Show when=move || session.with(|s| s.error.is_some())>
                    <p class="profile-message">{move || session.with(|s| s.error.clone().unwrap_or_default())}</p>
                </Show>
            </section>
        </main>
    }
}
