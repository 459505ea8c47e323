use chrono::Utc;
use spomix::management::{FileTokenStore, MemoryTokenStore, TokenStore};
use spomix::types::Credential;
use tempfile::TempDir;

// Helper function to create a credential that is still usable
fn create_valid_credential() -> Credential {
    Credential {
        access_token: "BQCaccess".to_string(),
        refresh_token: Some("AQCrefresh".to_string()),
        expires_at: Utc::now().timestamp() + 3600,
    }
}

// Helper function to create a credential whose lifetime has passed
fn create_expired_credential() -> Credential {
    Credential {
        access_token: "BQCstale".to_string(),
        refresh_token: Some("AQCrefresh".to_string()),
        expires_at: Utc::now().timestamp() - 60,
    }
}

#[tokio::test]
async fn test_file_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::with_path(dir.path().join("token.json"));

    let credential = create_valid_credential();
    store.save(&credential).await.unwrap();

    // The reloaded copy is identical to what was saved
    let loaded = store.load().await.unwrap();
    assert_eq!(loaded, Some(credential));
}

#[tokio::test]
async fn test_file_store_load_without_save_returns_none() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::with_path(dir.path().join("token.json"));

    assert_eq!(store.load().await.unwrap(), None);
}

#[tokio::test]
async fn test_file_store_creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::with_path(dir.path().join("nested/cache/token.json"));

    store.save(&create_valid_credential()).await.unwrap();

    assert!(store.load().await.unwrap().is_some());
}

#[tokio::test]
async fn test_file_store_save_overwrites_previous_credential() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::with_path(dir.path().join("token.json"));

    store.save(&create_valid_credential()).await.unwrap();

    let replacement = Credential {
        access_token: "BQCreplacement".to_string(),
        refresh_token: None,
        expires_at: Utc::now().timestamp() + 7200,
    };
    store.save(&replacement).await.unwrap();

    let loaded = store.load().await.unwrap().unwrap();
    assert_eq!(loaded.access_token, "BQCreplacement");
    assert!(loaded.refresh_token.is_none());
}

#[tokio::test]
async fn test_file_store_clear_removes_credential() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::with_path(dir.path().join("token.json"));

    store.save(&create_valid_credential()).await.unwrap();
    store.clear().await.unwrap();

    assert_eq!(store.load().await.unwrap(), None);
}

#[tokio::test]
async fn test_file_store_clear_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::with_path(dir.path().join("token.json"));

    // Clearing an empty store succeeds, as does clearing twice
    store.clear().await.unwrap();
    store.save(&create_valid_credential()).await.unwrap();
    store.clear().await.unwrap();
    store.clear().await.unwrap();
}

#[tokio::test]
async fn test_load_valid_filters_expired_credential() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::with_path(dir.path().join("token.json"));

    store.save(&create_expired_credential()).await.unwrap();

    // Validity filtering hides the credential without deleting it
    assert!(store.load_valid().await.unwrap().is_none());
    assert!(store.load().await.unwrap().is_some());
}

#[tokio::test]
async fn test_load_valid_passes_live_credential_through() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::with_path(dir.path().join("token.json"));

    let credential = create_valid_credential();
    store.save(&credential).await.unwrap();

    assert_eq!(store.load_valid().await.unwrap(), Some(credential));
}

#[tokio::test]
async fn test_memory_store_round_trip_and_clear() {
    let store = MemoryTokenStore::new();

    assert_eq!(store.load().await.unwrap(), None);

    let credential = create_valid_credential();
    store.save(&credential).await.unwrap();
    assert_eq!(store.load().await.unwrap(), Some(credential));

    store.clear().await.unwrap();
    assert_eq!(store.load().await.unwrap(), None);
}

#[tokio::test]
async fn test_memory_store_clones_share_one_slot() {
    let store = MemoryTokenStore::new();
    let other = store.clone();

    store.save(&create_valid_credential()).await.unwrap();

    // A write through one clone is visible through the other
    assert!(other.load().await.unwrap().is_some());

    other.clear().await.unwrap();
    assert!(store.load().await.unwrap().is_none());
}
