//! Theme and language preferences.
//!
//! DESIGN
//! ======
//! Both values persist as plain strings (`current_theme`, `lang`) so they
//! survive reloads and stay readable in devtools. Missing or unknown values
//! fall back to light theme and Romanian.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use crate::util::storage::{LANG_KEY, Storage, THEME_KEY};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    Ro,
    En,
}

impl Lang {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ro => "RO",
            Self::En => "EN",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "RO" => Some(Self::Ro),
            "EN" => Some(Self::En),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ro => Self::En,
            Self::En => Self::Ro,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub lang: Lang,
}

impl Preferences {
    #[must_use]
    pub fn load(storage: &dyn Storage) -> Self {
        let theme = storage
            .get(THEME_KEY)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default();
        let lang = storage
            .get(LANG_KEY)
            .and_then(|raw| Lang::parse(&raw))
            .unwrap_or_default();
        Self { theme, lang }
    }

    pub fn save(&self, storage: &dyn Storage) {
        storage.set(THEME_KEY, self.theme.as_str());
        storage.set(LANG_KEY, self.lang.as_str());
    }

    /// Flip the theme and persist it. Returns the new theme.
    pub fn toggle_theme(&mut self, storage: &dyn Storage) -> Theme {
        self.theme = self.theme.toggled();
        self.save(storage);
        self.theme
    }

    /// Flip the language and persist it. Returns the new language.
    pub fn toggle_lang(&mut self, storage: &dyn Storage) -> Lang {
        self.lang = self.lang.toggled();
        self.save(storage);
        self.lang
    }
}
