use std::fs;
use std::sync::Arc;

use nexora_core::{
    CommunityPost, ItemSource, PostKind, Priority, RoadmapItem, RoadmapStatus,
    COMMUNITY_STORAGE_KEY,
};
use nexora_engine::{
    ensure_data_dir, AtomicFileWriter, CommunityStore, FileKvStore, KvStore, PersistError,
    PersistedTokenStore, RoadmapStore, TokenStore, TOKEN_STORAGE_KEY,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn item(id: &str) -> RoadmapItem {
    RoadmapItem {
        id: id.to_string(),
        title: "Learn SQL".to_string(),
        description: "Joins and indexes".to_string(),
        status: RoadmapStatus::InProgress,
        priority: Priority::Medium,
        estimated_time: "2 weeks".to_string(),
        skills: vec!["SQL".to_string()],
        resources: vec![],
        created_at: "2026-01-01T00:00:00Z".to_string(),
        source: ItemSource::UserAdded,
    }
}

#[test]
fn creates_missing_data_dir() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("nexora");
    ensure_data_dir(&dir).unwrap();
    assert!(dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("career-roadmap", "[]").unwrap();
    let second = writer.write("career-roadmap", "[1]").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "[1]");
}

#[test]
fn data_dir_that_is_a_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let result = AtomicFileWriter::new(file_path.clone()).write("auth-token", "t");
    assert!(matches!(result, Err(PersistError::DataDir(_))));
}

#[test]
fn kv_store_get_set_remove() {
    let temp = TempDir::new().unwrap();
    let store = FileKvStore::new(temp.path());

    assert_eq!(store.get("auth-token").unwrap(), None);
    store.set("auth-token", "abc").unwrap();
    assert_eq!(store.get("auth-token").unwrap().as_deref(), Some("abc"));
    store.remove("auth-token").unwrap();
    assert_eq!(store.get("auth-token").unwrap(), None);
    // removing twice is fine
    store.remove("auth-token").unwrap();
}

#[test]
fn kv_store_rejects_path_like_keys() {
    let temp = TempDir::new().unwrap();
    let store = FileKvStore::new(temp.path());
    assert!(matches!(
        store.set("../escape", "x"),
        Err(PersistError::InvalidKey(_))
    ));
    assert!(matches!(store.get(""), Err(PersistError::InvalidKey(_))));
}

#[test]
fn roadmap_survives_reload() {
    let temp = TempDir::new().unwrap();
    let items = vec![item("1"), item("2")];

    RoadmapStore::new(FileKvStore::new(temp.path()))
        .save(&items)
        .unwrap();
    let loaded = RoadmapStore::new(FileKvStore::new(temp.path())).load();
    assert_eq!(loaded, items);

    let text = fs::read_to_string(temp.path().join("career-roadmap")).unwrap();
    assert!(text.contains("\"estimatedTime\":\"2 weeks\""));
    assert!(text.contains("\"status\":\"in-progress\""));
}

#[test]
fn corrupt_roadmap_loads_empty() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("career-roadmap"), "{not json").unwrap();
    let loaded = RoadmapStore::new(FileKvStore::new(temp.path())).load();
    assert!(loaded.is_empty());
}

#[test]
fn community_store_is_empty_until_saved() {
    let temp = TempDir::new().unwrap();
    let store = CommunityStore::new(FileKvStore::new(temp.path()));
    assert_eq!(store.load(), None);

    let posts = vec![CommunityPost {
        id: "1".to_string(),
        author: "Alex Thompson".to_string(),
        title: "How I landed my first job".to_string(),
        content: String::new(),
        likes: 46,
        comments: 12,
        tags: vec!["career".to_string()],
        created_at: "2024-01-15T10:30:00Z".to_string(),
        kind: PostKind::SuccessStory,
    }];
    store.save(&posts).unwrap();

    assert_eq!(store.load(), Some(posts));
    let text = fs::read_to_string(temp.path().join(COMMUNITY_STORAGE_KEY)).unwrap();
    assert!(text.contains("\"type\":\"success-story\""));
}

#[test]
fn corrupt_community_store_loads_nothing() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(COMMUNITY_STORAGE_KEY), "[{").unwrap();
    assert_eq!(CommunityStore::new(FileKvStore::new(temp.path())).load(), None);
}

#[test]
fn persisted_token_round_trip() {
    let temp = TempDir::new().unwrap();
    let kv: Arc<dyn KvStore> = Arc::new(FileKvStore::new(temp.path()));
    let tokens = PersistedTokenStore::new(kv.clone());

    assert_eq!(tokens.get(), None);
    tokens.set("jwt");
    assert_eq!(kv.get(TOKEN_STORAGE_KEY).unwrap().as_deref(), Some("jwt"));
    assert_eq!(PersistedTokenStore::new(kv.clone()).get().as_deref(), Some("jwt"));
    tokens.clear();
    assert_eq!(tokens.get(), None);
}
