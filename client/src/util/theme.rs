//! Apply preferences to the document.
//!
//! Sets `data-theme` and `lang` on the `<html>` element. Requires a browser
//! environment; native builds no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::prefs::{Lang, Theme};

/// Value for the `<html lang>` attribute.
#[must_use]
pub fn html_lang(lang: Lang) -> &'static str {
    match lang {
        Lang::Ro => "ro",
        Lang::En => "en",
    }
}

pub fn apply(theme: Theme, lang: Lang) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", theme.as_str());
            let _ = el.set_attribute("lang", html_lang(lang));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (theme, lang);
    }
}
