//! Password re-entry dialog for the profile edit gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shown while the gate is `Prompting`. The typed password is checked
//! locally against the cached digest; nothing is sent to the server. A wrong
//! or empty entry keeps the dialog open with the matching message.

use leptos::prelude::*;

use crate::state::prefs::Preferences;
use crate::state::profile::EditGate;
use crate::state::session::Session;
use crate::util::i18n::{Text, gate_error, t};

#[component]
pub fn PasswordModal(gate: RwSignal<EditGate>) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let prefs = expect_context::<RwSignal<Preferences>>();
    let input = RwSignal::new(String::new());
    let lang = move || prefs.get().lang;

    let on_confirm = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let typed = input.get_untracked();
        let profile = session.with_untracked(|s| s.profile.clone());
        if let Some(Ok(())) = gate.try_update(|g| g.confirm(&typed, &profile)) {
            input.set(String::new());
        }
    };
    let on_cancel = move |_| {
        input.set(String::new());
        gate.update(EditGate::cancel);
    };
    let error_text = move || gate.get().error().and_then(|e| gate_error(lang(), e));

    view! {
        <Show when=move || gate.get().is_prompting()>
            <div class="modal-backdrop">
                <form class="modal" on:submit=on_confirm>
                    <p class="modal__prompt">{move || t(lang(), Text::EnterPasswordPrompt)}</p>
                    <input
                        class="modal__input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                    />
                    <Show when=move || error_text().is_some()>
                        <p class="modal__error">{move || error_text().unwrap_or_default()}</p>
                    </Show>
                    <div class="modal__actions">
                        <button type="submit">{move || t(lang(), Text::Confirm)}</button>
                        <button type="button" on:click=on_cancel>
                            {move || t(lang(), Text::Cancel)}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
