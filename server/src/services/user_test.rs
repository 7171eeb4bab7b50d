use super::*;

fn new_user() -> NewUser {
    NewUser {
        first_name: "Ana".into(),
        last_name: "Popescu".into(),
        email: "ana@example.com".into(),
        username: "ana_p".into(),
        password: "Secret123!".into(),
    }
}

// =============================================================================
// Category
// =============================================================================

#[test]
fn category_ids_match_clusters() {
    assert_eq!(Category::Saver.id(), 0);
    assert_eq!(Category::Spender.id(), 1);
    assert_eq!(Category::AntiUser.id(), 2);
    assert_eq!(Category::Young.id(), 3);
}

#[test]
fn category_default_is_anti_user() {
    assert_eq!(Category::DEFAULT, Category::AntiUser);
}

#[test]
fn category_rejects_unknown_id() {
    assert!(Category::try_from(7).is_err());
    assert!(Category::try_from(-1).is_err());
}

#[test]
fn category_serializes_as_integer() {
    let json = serde_json::to_string(&Category::Young).unwrap();
    assert_eq!(json, "3");
    let parsed: Category = serde_json::from_str("1").unwrap();
    assert_eq!(parsed, Category::Spender);
}

// =============================================================================
// username
// =============================================================================

#[test]
fn username_bounds() {
    assert_eq!(validate_username(""), Err(ValidationError::Missing("username")));
    assert_eq!(validate_username("ab"), Err(ValidationError::UsernameLength));
    assert!(validate_username("abc").is_ok());
    assert!(validate_username(&"a".repeat(20)).is_ok());
    assert_eq!(validate_username(&"a".repeat(21)), Err(ValidationError::UsernameLength));
}

#[test]
fn username_rejects_spaces_and_symbols() {
    assert_eq!(validate_username("bad name"), Err(ValidationError::UsernameCharacters));
    assert_eq!(validate_username("bad@name"), Err(ValidationError::UsernameCharacters));
    assert!(validate_username("good-name_1").is_ok());
}

// =============================================================================
// password
// =============================================================================

#[test]
fn password_bounds() {
    assert_eq!(validate_password(""), Err(ValidationError::Missing("password")));
    assert_eq!(validate_password("1234567"), Err(ValidationError::PasswordTooShort));
    assert!(validate_password("12345678").is_ok());
    assert!(validate_password(&"x".repeat(128)).is_ok());
    assert_eq!(validate_password(&"x".repeat(129)), Err(ValidationError::PasswordTooLong));
}

// =============================================================================
// email
// =============================================================================

#[test]
fn email_accepts_simple_address() {
    assert!(validate_email("a@b.ro").is_ok());
}

#[test]
fn email_rejects_malformed_addresses() {
    for bad in ["not-an-email", "@bank.ro", "user@", "a@b@c", "us er@bank.ro", "u@.ro", "u@bank."] {
        assert_eq!(validate_email(bad), Err(ValidationError::Email), "expected rejection for {bad:?}");
    }
}

#[test]
fn email_rejects_overlong_address() {
    let long = format!("{}@bank.ro", "a".repeat(250));
    assert_eq!(validate_email(&long), Err(ValidationError::Email));
}

// =============================================================================
// NewUser
// =============================================================================

#[test]
fn new_user_valid() {
    assert!(new_user().validate().is_ok());
}

#[test]
fn new_user_requires_names() {
    let mut user = new_user();
    user.first_name = "   ".into();
    assert_eq!(user.validate(), Err(ValidationError::Missing("first_name")));
}

#[test]
fn new_user_normalized_trims_identity_fields_only() {
    let user = NewUser {
        first_name: " Ana ".into(),
        last_name: " Pop ".into(),
        email: " ana@example.com ".into(),
        username: " ana_p ".into(),
        password: " pass word ".into(),
    }
    .normalized();
    assert_eq!(user.first_name, "Ana");
    assert_eq!(user.email, "ana@example.com");
    assert_eq!(user.username, "ana_p");
    assert_eq!(user.password, " pass word ");
}

#[test]
fn profile_projection_drops_hash() {
    let user = User {
        id: Uuid::nil(),
        username: "ana_p".into(),
        password_hash: "$2b$hash".into(),
        email: "ana@example.com".into(),
        first_name: "Ana".into(),
        last_name: "Popescu".into(),
        category: Category::Saver,
    };
    let profile = Profile::from(&user);
    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["username"], "ana_p");
    assert!(json.get("password_hash").is_none());
}
