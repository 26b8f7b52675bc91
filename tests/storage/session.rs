use admindash::repositories::SessionRepository;
use admindash::storage::LocalStorage;

#[tokio::test]
async fn test_missing_key_is_none() {
    let storage = LocalStorage::in_memory().await.unwrap();
    assert_eq!(SessionRepository::get(&storage.conn, "token").await.unwrap(), None);
}

#[tokio::test]
async fn test_set_replaces_existing_value() {
    let storage = LocalStorage::in_memory().await.unwrap();

    SessionRepository::set(&storage.conn, "token", "first").await.unwrap();
    SessionRepository::set(&storage.conn, "token", "second").await.unwrap();

    assert_eq!(
        SessionRepository::get(&storage.conn, "token").await.unwrap().as_deref(),
        Some("second")
    );
}

#[tokio::test]
async fn test_delete_reports_whether_entry_existed() {
    let storage = LocalStorage::in_memory().await.unwrap();
    SessionRepository::set(&storage.conn, "token", "abc").await.unwrap();

    assert!(SessionRepository::delete(&storage.conn, "token").await.unwrap());
    assert!(!SessionRepository::delete(&storage.conn, "token").await.unwrap());
    assert_eq!(SessionRepository::get(&storage.conn, "token").await.unwrap(), None);
}

#[tokio::test]
async fn test_database_file_survives_reopen() {
    let dir = std::env::temp_dir().join(format!("admindash_storage_{}", std::process::id()));
    let path = dir.join("nested").join("session.db");
    let _ = std::fs::remove_dir_all(&dir);

    {
        let storage = LocalStorage::open(&path).await.unwrap();
        SessionRepository::set(&storage.conn, "token", "persisted").await.unwrap();
    }

    let storage = LocalStorage::open(&path).await.unwrap();
    assert_eq!(
        SessionRepository::get(&storage.conn, "token").await.unwrap().as_deref(),
        Some("persisted")
    );

    let _ = std::fs::remove_dir_all(&dir);
}
