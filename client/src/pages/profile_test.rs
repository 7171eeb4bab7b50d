use super::*;

#[test]
fn profile_rows_follow_form_order() {
    let profile = CachedProfile {
        first_name: "Ana".to_owned(),
        last_name: "Pop".to_owned(),
        email: "ana@example.com".to_owned(),
        username: "ana".to_owned(),
        ..CachedProfile::default()
    };
    let rows = profile_rows(&profile);
    let labels: Vec<Text> = rows.iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, vec![Text::FirstName, Text::LastName, Text::Email, Text::Username]);
    assert_eq!(rows[2].1, "ana@example.com");
}

#[test]
fn profile_rows_never_expose_password_digest() {
    let mut profile = CachedProfile::default();
    profile.set_password("hunter22");
    assert!(profile_rows(&profile).iter().all(|(_, value)| value.is_empty()));
}
