use super::*;
use crate::util::storage::MemoryStorage;

fn profile() -> CachedProfile {
    CachedProfile {
        first_name: "Ana".into(),
        last_name: "Popescu".into(),
        email: "ana@example.com".into(),
        username: "ana_p".into(),
        password_digest: password_digest("Secret123!"),
    }
}

// =============================================================
// Digest / cached profile
// =============================================================

#[test]
fn digest_is_hex_sha256() {
    assert_eq!(
        password_digest("abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn profile_never_stores_plaintext() {
    let storage = MemoryStorage::new();
    profile().save(&storage);
    let raw = storage.get(USER_DATA_KEY).unwrap();
    assert!(!raw.contains("Secret123!"));
    assert_eq!(CachedProfile::load(&storage), profile());
}

#[test]
fn empty_digest_matches_nothing() {
    let p = CachedProfile::default();
    assert!(!p.password_matches(""));
    assert!(!p.password_matches("anything"));
}

#[test]
fn display_name_trims_missing_parts() {
    let mut p = profile();
    assert_eq!(p.display_name(), "Ana Popescu");
    p.last_name.clear();
    assert_eq!(p.display_name(), "Ana");
}

// =============================================================
// Edit gate
// =============================================================

#[test]
fn gate_starts_locked() {
    let gate = EditGate::default();
    assert!(!gate.is_editable());
    assert!(!gate.is_prompting());
}

#[test]
fn correct_password_unlocks() {
    let mut gate = EditGate::default();
    gate.request_edit();
    assert!(gate.is_prompting());
    assert_eq!(gate.confirm("Secret123!", &profile()), Ok(()));
    assert!(gate.is_editable());
}

#[test]
fn wrong_password_keeps_prompt_and_allows_retry() {
    let mut gate = EditGate::default();
    gate.request_edit();
    assert_eq!(gate.confirm("nope", &profile()), Err(GateError::WrongPassword));
    assert!(!gate.is_editable());
    assert_eq!(gate.error(), Some(GateError::WrongPassword));

    assert_eq!(gate.confirm("Secret123!", &profile()), Ok(()));
    assert!(gate.is_editable());
    assert_eq!(gate.error(), None);
}

#[test]
fn empty_password_reports_empty() {
    let mut gate = EditGate::default();
    gate.request_edit();
    assert_eq!(gate.confirm("", &profile()), Err(GateError::EmptyPassword));
    assert!(gate.is_prompting());
}

#[test]
fn confirm_without_prompt_is_rejected() {
    let mut gate = EditGate::default();
    assert_eq!(gate.confirm("Secret123!", &profile()), Err(GateError::NotPrompting));
    assert_eq!(gate, EditGate::Locked);
}

#[test]
fn cancel_returns_to_locked() {
    let mut gate = EditGate::default();
    gate.request_edit();
    gate.cancel();
    assert_eq!(gate, EditGate::Locked);
}

#[test]
fn request_edit_while_unlocked_is_noop() {
    let mut gate = EditGate::Unlocked;
    gate.request_edit();
    assert!(gate.is_editable());
}

#[test]
fn save_commits_draft_persists_and_locks() {
    let storage = MemoryStorage::new();
    let mut p = profile();
    let mut gate = EditGate::default();
    gate.request_edit();
    gate.confirm("Secret123!", &p).unwrap();

    let draft = ProfileDraft { first_name: " Ioana ".into(), ..ProfileDraft::from(&p) };
    gate.save(&storage, &mut p, draft).unwrap();

    assert_eq!(p.first_name, "Ioana");
    assert_eq!(gate, EditGate::Locked);
    assert_eq!(CachedProfile::load(&storage).first_name, "Ioana");
}

#[test]
fn save_while_locked_is_rejected() {
    let storage = MemoryStorage::new();
    let mut p = profile();
    let draft = ProfileDraft { first_name: "X".into(), ..ProfileDraft::from(&p) };
    assert_eq!(EditGate::default().save(&storage, &mut p, draft), Err(GateError::NotUnlocked));
    assert_eq!(p.first_name, "Ana");
    assert!(storage.is_empty());
}

// =============================================================
// Password change checks
// =============================================================

#[test]
fn password_change_checks_in_order() {
    let p = profile();
    assert_eq!(check_password_change(&p, "", "x"), Err(PasswordChangeError::EmptyOld));
    assert_eq!(check_password_change(&p, "bad", "x"), Err(PasswordChangeError::WrongOld));
    assert_eq!(check_password_change(&p, "Secret123!", ""), Err(PasswordChangeError::EmptyNew));
    assert_eq!(
        check_password_change(&p, "Secret123!", "Secret123!"),
        Err(PasswordChangeError::SamePassword)
    );
    assert_eq!(check_password_change(&p, "Secret123!", "NewSecret456!"), Ok(()));
}

#[test]
fn set_password_updates_digest() {
    let mut p = profile();
    p.set_password("NewSecret456!");
    assert!(p.password_matches("NewSecret456!"));
    assert!(!p.password_matches("Secret123!"));
}
