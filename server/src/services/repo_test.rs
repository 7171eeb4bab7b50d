use super::*;
use uuid::Uuid;

fn user(username: &str) -> User {
    User {
        id: Uuid::new_v4(),
        username: username.into(),
        password_hash: "$2b$04$hash".into(),
        email: format!("{username}@example.com"),
        first_name: "Ana".into(),
        last_name: "Pop".into(),
        category: Category::DEFAULT,
    }
}

// =============================================================================
// MemoryUserRepo
// =============================================================================

#[tokio::test]
async fn memory_insert_then_find() {
    let repo = MemoryUserRepo::new();
    let u = user("ana_p");
    repo.insert(&u).await.unwrap();
    assert_eq!(repo.find("ana_p").await.unwrap(), Some(u));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn memory_find_is_case_insensitive() {
    let repo = MemoryUserRepo::new();
    repo.insert(&user("Ana_P")).await.unwrap();
    assert!(repo.find("ana_p").await.unwrap().is_some());
}

#[tokio::test]
async fn memory_duplicate_insert_conflicts() {
    let repo = MemoryUserRepo::new();
    repo.insert(&user("ana_p")).await.unwrap();
    assert!(matches!(repo.insert(&user("ANA_P")).await, Err(RepoError::Conflict)));
}

#[tokio::test]
async fn memory_update_password_replaces_hash() {
    let repo = MemoryUserRepo::new();
    repo.insert(&user("ana_p")).await.unwrap();
    repo.update_password("ana_p", "$2b$04$new").await.unwrap();
    let stored = repo.find("ana_p").await.unwrap().unwrap();
    assert_eq!(stored.password_hash, "$2b$04$new");
}

#[tokio::test]
async fn memory_update_missing_user_is_not_found() {
    let repo = MemoryUserRepo::new();
    assert!(matches!(repo.update_password("ghost", "x").await, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn memory_delete_then_missing() {
    let repo = MemoryUserRepo::new();
    repo.insert(&user("ana_p")).await.unwrap();
    repo.delete("ana_p").await.unwrap();
    assert!(repo.find("ana_p").await.unwrap().is_none());
    assert!(matches!(repo.delete("ana_p").await, Err(RepoError::NotFound)));
}

#[test]
fn backend_labels() {
    assert_eq!(MemoryUserRepo::new().backend(), "memory");
}

// =============================================================================
// PgUserRepo (requires a live database)
// =============================================================================

#[cfg(feature = "live-db-tests")]
#[tokio::test]
async fn postgres_round_trip() {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL required for live-db-tests");
    let pool = crate::db::init_pool(&url, 2).await.expect("pool init");
    let repo = PgUserRepo::new(pool);
    let name = format!("t{}", &Uuid::new_v4().simple().to_string()[..12]);
    let u = user(&name);
    repo.insert(&u).await.unwrap();
    assert!(matches!(repo.insert(&u).await, Err(RepoError::Conflict)));
    assert_eq!(repo.find(&name.to_uppercase()).await.unwrap(), Some(u));
    repo.delete(&name).await.unwrap();
    assert!(repo.find(&name).await.unwrap().is_none());
}
