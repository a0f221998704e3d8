use memoria_store::{FileSessionCache, MemorySessionCache, SessionCache};
use memoria_types::{Session, TokenRecord};
use pretty_assertions::assert_eq;

fn session(tag: &str) -> Session {
    let mut record = TokenRecord::pending(tag);
    record.status = memoria_types::TokenStatus::Active;
    record.passphrase = "secret1".to_string();
    Session::new(record)
}

#[tokio::test]
async fn memory_cache_save_load_clear() {
    let cache = MemorySessionCache::new();
    assert!(cache.load().await.unwrap().is_none());

    let s = session("RM-ALPHA-01");
    cache.save(&s).await.unwrap();
    assert_eq!(cache.load().await.unwrap(), Some(s));

    cache.clear().await.unwrap();
    assert!(cache.load().await.unwrap().is_none());
}

#[tokio::test]
async fn memory_cache_holds_one_slot() {
    let cache = MemorySessionCache::new();
    cache.save(&session("RM-ALPHA-01")).await.unwrap();
    let second = session("RM-BETA-02");
    cache.save(&second).await.unwrap();
    assert_eq!(cache.load().await.unwrap(), Some(second));
}

#[tokio::test]
async fn file_cache_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let s = session("RM-ALPHA-01");
    FileSessionCache::new(&path).save(&s).await.unwrap();

    let reopened = FileSessionCache::new(&path);
    assert_eq!(reopened.load().await.unwrap(), Some(s));
}

#[tokio::test]
async fn file_cache_clear_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let cache = FileSessionCache::new(dir.path().join("session.json"));
    cache.clear().await.unwrap();
    cache.save(&session("RM-ALPHA-01")).await.unwrap();
    cache.clear().await.unwrap();
    cache.clear().await.unwrap();
    assert!(cache.load().await.unwrap().is_none());
}

#[tokio::test]
async fn file_cache_tolerates_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, b"{ not json").unwrap();

    let cache = FileSessionCache::new(&path);
    assert!(cache.load().await.unwrap().is_none());
}

#[tokio::test]
async fn file_cache_missing_file_loads_none() {
    let dir = tempfile::tempdir().unwrap();
    let cache = FileSessionCache::new(dir.path().join("absent.json"));
    assert!(cache.load().await.unwrap().is_none());
}
