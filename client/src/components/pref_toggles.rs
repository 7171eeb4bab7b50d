//! Theme and language toggle buttons.
//!
//! Rendered in the nav bar and on the signed-out auth views. Each click
//! persists immediately; `App` re-applies the `<html>` attributes.

#[cfg(test)]
#[path = "pref_toggles_test.rs"]
mod pref_toggles_test;

use leptos::prelude::*;

use crate::state::prefs::Preferences;
use crate::util::i18n::{Text, t};
use crate::util::storage::{LocalStorage, Storage};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PrefToggle {
    Theme,
    Lang,
}

/// Flip one preference and persist both. Works without a session.
pub(crate) fn apply_toggle(prefs: &mut Preferences, storage: &dyn Storage, toggle: PrefToggle) {
    match toggle {
        PrefToggle::Theme => {
            let theme = prefs.toggle_theme(storage);
            log::debug!("theme -> {}", theme.as_str());
        }
        PrefToggle::Lang => {
            let lang = prefs.toggle_lang(storage);
            log::debug!("lang -> {}", lang.as_str());
        }
    }
}

#[component]
pub fn PrefToggles() -> impl IntoView {
    let prefs = expect_context::<RwSignal<Preferences>>();
    let lang = move || prefs.get().lang;

    let on_theme = move |_| prefs.update(|p| apply_toggle(p, &LocalStorage, PrefToggle::Theme));
    let on_lang = move |_| prefs.update(|p| apply_toggle(p, &LocalStorage, PrefToggle::Lang));

    view! {
        <span class="pref-toggles">
            <button class="pref-toggles__theme" on:click=on_theme>
                {move || t(lang(), Text::ToggleTheme)}
            </button>
            <button class="pref-toggles__lang" on:click=on_lang>
                {move || t(lang(), Text::ToggleLang)}
            </button>
        </span>
    }
}
