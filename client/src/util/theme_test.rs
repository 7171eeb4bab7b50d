#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn html_lang_is_lowercase_code() {
    assert_eq!(html_lang(Lang::Ro), "ro");
    assert_eq!(html_lang(Lang::En), "en");
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Dark, Lang::En);
    apply(Theme::Light, Lang::Ro);
}
