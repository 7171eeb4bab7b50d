use super::*;
use crate::state::prefs::{Lang, Theme};
use crate::state::session::Session;
use crate::util::storage::MemoryStorage;

#[test]
fn toggles_persist_while_signed_out() {
    let storage = MemoryStorage::new();
    assert!(!Session::restore(&storage).is_authenticated());

    let mut prefs = Preferences::load(&storage);
    apply_toggle(&mut prefs, &storage, PrefToggle::Theme);
    apply_toggle(&mut prefs, &storage, PrefToggle::Lang);

    assert_eq!(prefs, Preferences { theme: Theme::Dark, lang: Lang::En });
    assert_eq!(Preferences::load(&storage), prefs);
}

#[test]
fn each_toggle_touches_only_its_preference() {
    let storage = MemoryStorage::new();
    let mut prefs = Preferences::default();

    apply_toggle(&mut prefs, &storage, PrefToggle::Lang);
    assert_eq!(prefs.theme, Theme::Light);
    apply_toggle(&mut prefs, &storage, PrefToggle::Lang);
    assert_eq!(prefs.lang, Lang::Ro);
    assert_eq!(prefs.theme, Theme::Light);
}
