// Bookmark store tests.
//
// Every test points the store at its own temp directory, so the persisted
// document starts absent and tests can inspect the raw file freely.

use anyhow::Result;
use std::fs;
use streamtape::bookmark::{BookmarkCollection, BookmarkStore, NamePrompt};
use streamtape::recording::RecordingRequest;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> BookmarkStore {
    BookmarkStore::new(dir.path().join("quickstreams.json"))
}

fn request(channel: &str) -> RecordingRequest {
    RecordingRequest {
        channel: channel.to_string(),
        start_time: "18:00".to_string(),
        filename: None,
        quality: None,
        reconnect: None,
        shutdown: false,
        bookmark: None,
    }
}

fn bookmarked(channel: &str, name: &str) -> RecordingRequest {
    RecordingRequest {
        bookmark: Some(name.to_string()),
        ..request(channel)
    }
}

/// Feeds a fixed sequence of replacement names; indexing past the script
/// fails the test.
struct ScriptedPrompt {
    names: Vec<&'static str>,
    asked: usize,
}

impl ScriptedPrompt {
    fn with(names: Vec<&'static str>) -> Self {
        Self { names, asked: 0 }
    }

    fn never() -> Self {
        Self::with(Vec::new())
    }
}

impl NamePrompt for ScriptedPrompt {
    fn next_name(&mut self) -> Result<String> {
        let name = self.names[self.asked];
        self.asked += 1;
        Ok(name.to_string())
    }
}

#[test]
fn missing_file_reads_as_empty_collection() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    assert!(store.read().is_empty());
}

#[test]
fn corrupt_file_reads_as_empty_collection() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quickstreams.json");
    fs::write(&path, "not json {{{").unwrap();

    let store = BookmarkStore::new(path);
    assert!(store.read().is_empty());
}

#[test]
fn save_then_read_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let collection = BookmarkCollection::from([
        ("a".to_string(), request("channel_a")),
        ("b".to_string(), request("channel_b")),
    ]);
    store.save(&collection).unwrap();

    assert_eq!(store.read(), collection);
}

#[test]
fn saving_a_fresh_read_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quickstreams.json");
    let store = BookmarkStore::new(&path);

    let collection = BookmarkCollection::from([
        ("a".to_string(), request("channel_a")),
        ("b".to_string(), request("channel_b")),
    ]);
    store.save(&collection).unwrap();

    let before = fs::read_to_string(&path).unwrap();
    store.save(&store.read()).unwrap();
    let after = fs::read_to_string(&path).unwrap();

    assert_eq!(before, after);
}

#[test]
fn unknown_fields_are_tolerated_on_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quickstreams.json");
    fs::write(
        &path,
        r#"{"evening": {"channel": "chess", "start_time": "18:00", "colour": "red"}}"#,
    )
    .unwrap();

    let store = BookmarkStore::new(path);
    let collection = store.read();

    assert_eq!(collection.len(), 1);
    assert_eq!(collection["evening"].channel, "chess");
    assert_eq!(collection["evening"].filename, None);
}

#[test]
fn create_with_unused_name_stores_without_prompting() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let mut prompt = ScriptedPrompt::never();

    let name = store
        .create(&bookmarked("chess", "evening"), &mut prompt)
        .unwrap();

    assert_eq!(name, "evening");
    assert_eq!(prompt.asked, 0);

    let stored = store.load("evening").unwrap();
    assert_eq!(stored.channel, "chess");
    assert_eq!(stored.bookmark, None, "stored copy must not re-bookmark");
}

#[test]
fn create_lowercases_the_stored_name() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let name = store
        .create(&bookmarked("chess", "Evening"), &mut ScriptedPrompt::never())
        .unwrap();

    assert_eq!(name, "evening");
    assert!(store.load("evening").is_some());
}

#[test]
fn create_with_blank_name_prompts_for_another() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let mut prompt = ScriptedPrompt::with(vec!["fresh"]);

    let name = store.create(&bookmarked("chess", ""), &mut prompt).unwrap();

    assert_eq!(name, "fresh");
    assert_eq!(prompt.asked, 1);
}

#[test]
fn create_collision_prompts_until_an_unused_name_arrives() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store
        .create(&bookmarked("other", "used"), &mut ScriptedPrompt::never())
        .unwrap();

    let mut prompt = ScriptedPrompt::with(vec!["used", "USED", "fresh"]);
    let name = store.create(&bookmarked("chess", "used"), &mut prompt).unwrap();

    assert_eq!(name, "fresh");
    assert_eq!(prompt.asked, 3);

    let collection = store.read();
    assert_eq!(collection.len(), 2);
    assert_eq!(collection["used"].channel, "other");
    assert_eq!(collection["fresh"].channel, "chess");
}

#[test]
fn create_collision_check_uses_the_normalized_name() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store
        .create(&bookmarked("other", "taken"), &mut ScriptedPrompt::never())
        .unwrap();

    // "TAKEN" normalizes to an existing key, so a prompt is required.
    let mut prompt = ScriptedPrompt::with(vec!["fresh"]);
    store.create(&bookmarked("chess", "TAKEN"), &mut prompt).unwrap();

    assert_eq!(prompt.asked, 1);
    assert_eq!(store.read().len(), 2);
}

#[test]
fn delete_removes_exactly_the_named_entry() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store
        .save(&BookmarkCollection::from([
            ("a".to_string(), request("channel_a")),
            ("b".to_string(), request("channel_b")),
        ]))
        .unwrap();

    assert!(store.delete("a").unwrap());

    let remaining = store.read();
    assert_eq!(
        remaining,
        BookmarkCollection::from([("b".to_string(), request("channel_b"))])
    );
}

#[test]
fn delete_of_absent_name_mutates_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quickstreams.json");
    let store = BookmarkStore::new(&path);
    store
        .save(&BookmarkCollection::from([(
            "a".to_string(),
            request("channel_a"),
        )]))
        .unwrap();

    let before = fs::read_to_string(&path).unwrap();
    assert!(!store.delete("missing").unwrap());
    let after = fs::read_to_string(&path).unwrap();

    assert_eq!(before, after);
}

#[test]
fn load_returns_the_stored_request() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store
        .create(&bookmarked("chess", "evening"), &mut ScriptedPrompt::never())
        .unwrap();

    let loaded = store.load("evening").unwrap();
    assert_eq!(loaded.channel, "chess");
    assert_eq!(loaded.start_time, "18:00");
}

#[test]
fn load_of_absent_name_returns_none() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    assert!(store.load("missing").is_none());
}

#[test]
fn list_returns_the_full_collection() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let collection = BookmarkCollection::from([
        ("a".to_string(), request("channel_a")),
        ("b".to_string(), request("channel_b")),
    ]);
    store.save(&collection).unwrap();

    assert_eq!(store.list(), collection);
}
