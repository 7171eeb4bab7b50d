use std::time::Duration;

use super::*;
use crate::services::repo::MemoryUserRepo;

const PASSWORD: &str = "Secret123!";

fn service() -> (AccountService, MemoryUserRepo) {
    let repo = MemoryUserRepo::new();
    let svc = AccountService::new(
        Arc::new(repo.clone()),
        UserCache::new(Duration::from_secs(60)),
        TokenManager::new(b"test-secret", Duration::from_secs(900)),
        Metrics::new(),
        4,
    );
    (svc, repo)
}

fn new_user(username: &str) -> NewUser {
    NewUser {
        first_name: "Ana".into(),
        last_name: "Popescu".into(),
        email: format!("{username}@example.com"),
        username: username.into(),
        password: PASSWORD.into(),
    }
}

// =============================================================================
// register
// =============================================================================

#[tokio::test]
async fn register_stores_hashed_user_with_default_category() {
    let (svc, repo) = service();
    let profile = svc.register(new_user("ana_p")).await.unwrap();
    assert_eq!(profile.username, "ana_p");

    let stored = repo.find("ana_p").await.unwrap().unwrap();
    assert_ne!(stored.password_hash, PASSWORD);
    assert!(password::verify(PASSWORD, &stored.password_hash));
    assert_eq!(stored.category, Category::DEFAULT);
    assert!(svc.cache().contains("ana_p"));
}

#[tokio::test]
async fn register_duplicate_is_rejected() {
    let (svc, _) = service();
    svc.register(new_user("ana_p")).await.unwrap();
    assert!(matches!(svc.register(new_user("ANA_P")).await, Err(AccountError::UsernameTaken)));
}

#[tokio::test]
async fn register_duplicate_detected_after_cache_eviction() {
    let (svc, _) = service();
    svc.register(new_user("ana_p")).await.unwrap();
    svc.cache().remove("ana_p");
    assert!(matches!(svc.register(new_user("ana_p")).await, Err(AccountError::UsernameTaken)));
}

#[tokio::test]
async fn register_rejects_invalid_input() {
    let (svc, repo) = service();
    let mut bad = new_user("ana_p");
    bad.email = "not-an-email".into();
    assert!(matches!(
        svc.register(bad).await,
        Err(AccountError::Validation(ValidationError::Email))
    ));
    let mut weak = new_user("ana_p");
    weak.password = "123".into();
    assert!(matches!(
        svc.register(weak).await,
        Err(AccountError::Validation(ValidationError::PasswordTooShort))
    ));
    assert_eq!(repo.count().await.unwrap(), 0);
}

// =============================================================================
// login
// =============================================================================

#[tokio::test]
async fn login_returns_valid_token_and_profile() {
    let (svc, _) = service();
    svc.register(new_user("ana_p")).await.unwrap();
    let outcome = svc.login("ana_p", PASSWORD).await.unwrap();
    assert_eq!(outcome.profile.first_name, "Ana");
    assert_eq!(outcome.profile.email, "ana_p@example.com");
    let claims = svc.tokens().validate(&outcome.token).unwrap();
    assert_eq!(claims.username, "ana_p");
}

#[tokio::test]
async fn login_falls_back_to_repository_on_cache_miss() {
    let (svc, _) = service();
    svc.register(new_user("ana_p")).await.unwrap();
    svc.cache().remove("ana_p");
    assert!(svc.login("ana_p", PASSWORD).await.is_ok());
    assert!(svc.cache().contains("ana_p"));
}

#[tokio::test]
async fn login_wrong_password_and_unknown_user_look_identical() {
    let (svc, _) = service();
    svc.register(new_user("ana_p")).await.unwrap();
    assert!(matches!(svc.login("ana_p", "wrong-pass").await, Err(AccountError::InvalidCredentials)));
    assert!(matches!(svc.login("ghost", PASSWORD).await, Err(AccountError::InvalidCredentials)));
}

#[tokio::test]
async fn login_requires_both_fields() {
    let (svc, _) = service();
    assert!(matches!(
        svc.login("  ", PASSWORD).await,
        Err(AccountError::Validation(ValidationError::Missing("username")))
    ));
    assert!(matches!(
        svc.login("ana_p", "").await,
        Err(AccountError::Validation(ValidationError::Missing("password")))
    ));
}

// =============================================================================
// update_password
// =============================================================================

#[tokio::test]
async fn update_password_switches_credentials() {
    let (svc, _) = service();
    svc.register(new_user("ana_p")).await.unwrap();
    svc.update_password("ana_p", PASSWORD, "NewSecret456!").await.unwrap();
    assert!(matches!(svc.login("ana_p", PASSWORD).await, Err(AccountError::InvalidCredentials)));
    assert!(svc.login("ana_p", "NewSecret456!").await.is_ok());
}

#[tokio::test]
async fn update_password_rejects_same_password() {
    let (svc, _) = service();
    svc.register(new_user("ana_p")).await.unwrap();
    assert!(matches!(
        svc.update_password("ana_p", PASSWORD, PASSWORD).await,
        Err(AccountError::SamePassword)
    ));
}

#[tokio::test]
async fn update_password_requires_correct_old_password() {
    let (svc, _) = service();
    svc.register(new_user("ana_p")).await.unwrap();
    assert!(matches!(
        svc.update_password("ana_p", "wrong-pass", "NewSecret456!").await,
        Err(AccountError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn update_password_validates_new_password() {
    let (svc, _) = service();
    svc.register(new_user("ana_p")).await.unwrap();
    assert!(matches!(
        svc.update_password("ana_p", PASSWORD, "short").await,
        Err(AccountError::Validation(ValidationError::PasswordTooShort))
    ));
    assert!(matches!(
        svc.update_password("ana_p", PASSWORD, "").await,
        Err(AccountError::Validation(ValidationError::Missing("new_password")))
    ));
}

// =============================================================================
// delete / category
// =============================================================================

#[tokio::test]
async fn delete_removes_user_and_cache_entry() {
    let (svc, repo) = service();
    svc.register(new_user("ana_p")).await.unwrap();
    svc.delete("ana_p").await.unwrap();
    assert!(repo.find("ana_p").await.unwrap().is_none());
    assert!(!svc.cache().contains("ana_p"));
    assert!(matches!(svc.login("ana_p", PASSWORD).await, Err(AccountError::InvalidCredentials)));
}

#[tokio::test]
async fn delete_unknown_user_is_not_found() {
    let (svc, _) = service();
    assert!(matches!(svc.delete("ghost").await, Err(AccountError::NotFound)));
}

#[tokio::test]
async fn category_reads_stored_value() {
    let (svc, _) = service();
    svc.register(new_user("ana_p")).await.unwrap();
    assert_eq!(svc.category("ana_p").await.unwrap(), Category::AntiUser);
    assert!(matches!(svc.category("ghost").await, Err(AccountError::NotFound)));
}

#[tokio::test]
async fn repository_operations_are_counted() {
    let repo = MemoryUserRepo::new();
    let metrics = Metrics::new();
    let svc = AccountService::new(
        Arc::new(repo),
        UserCache::new(Duration::from_secs(60)),
        TokenManager::new(b"test-secret", Duration::from_secs(900)),
        metrics.clone(),
        4,
    );
    svc.register(new_user("ana_p")).await.unwrap();
    let snap = metrics.snapshot();
    assert_eq!(snap.db_operations["find ok"], 1);
    assert_eq!(snap.db_operations["insert ok"], 1);
}
