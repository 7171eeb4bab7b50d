use std::collections::HashSet;

use super::*;

#[test]
fn every_text_is_translated() {
    for text in ALL_TEXTS {
        assert!(!t(Lang::Ro, text).is_empty(), "{text:?} missing RO");
        assert!(!t(Lang::En, text).is_empty(), "{text:?} missing EN");
    }
}

#[test]
fn all_texts_has_no_duplicates() {
    let unique: HashSet<_> = ALL_TEXTS.iter().map(|t| format!("{t:?}")).collect();
    assert_eq!(unique.len(), ALL_TEXTS.len());
}

#[test]
fn edit_gate_messages_match_modal_copy() {
    assert_eq!(gate_error(Lang::En, GateError::EmptyPassword), Some("Please enter a password."));
    assert_eq!(
        gate_error(Lang::En, GateError::WrongPassword),
        Some("Wrong password. Please try again.")
    );
    assert_eq!(gate_error(Lang::Ro, GateError::NotPrompting), None);
}

#[test]
fn languages_differ_for_user_facing_copy() {
    assert_ne!(t(Lang::Ro, Text::LoginTitle), t(Lang::En, Text::LoginTitle));
    assert_ne!(
        password_change_error(Lang::Ro, PasswordChangeError::SamePassword),
        password_change_error(Lang::En, PasswordChangeError::SamePassword)
    );
}
