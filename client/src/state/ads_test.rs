use super::*;

#[test]
fn every_known_category_has_three_ads() {
    for category in 0..=3 {
        let ads = ads_for(category);
        assert_eq!(ads.len(), 3, "category {category}");
        for ad in ads {
            assert!(!ad.title.is_empty());
            assert!(ad.image.starts_with("images/ads/"));
        }
    }
}

#[test]
fn unknown_category_is_empty() {
    assert!(ads_for(-1).is_empty());
    assert!(ads_for(4).is_empty());
}

#[test]
fn default_category_gets_digital_account_ads() {
    assert_eq!(ads_for(2)[0].title, "George te poate ajuta");
}

#[test]
fn labels_cover_both_languages() {
    assert_eq!(category_label(0, Lang::En), "Saver");
    assert_eq!(category_label(3, Lang::Ro), "Tânăr");
    assert_eq!(category_label(9, Lang::En), "Unknown");
}

#[test]
fn ads_state_applies_results() {
    let mut state = AdsState::default();
    assert!(state.ads().is_empty());

    state.begin();
    assert!(state.loading);
    state.finish(Ok(1));
    assert!(!state.loading);
    assert_eq!(state.ads().len(), 3);

    state.begin();
    state.finish(Err("request failed: 500".into()));
    assert_eq!(state.category, Some(1), "error keeps last category");
    assert_eq!(state.error.as_deref(), Some("request failed: 500"));
}
