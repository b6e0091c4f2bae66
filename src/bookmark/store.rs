use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::warn;

use crate::recording::RecordingRequest;

/// Named Quickstream bookmarks, keyed by lower-cased name.
pub type BookmarkCollection = BTreeMap<String, RecordingRequest>;

/// Supplies replacement bookmark names when the requested one is blank or
/// already taken.
///
/// A capability trait so the interactive prompt can be swapped for a
/// scripted sequence in tests.
pub trait NamePrompt {
    fn next_name(&mut self) -> Result<String>;
}

/// Interactive prompt on stdin.
pub struct StdinPrompt;

impl NamePrompt for StdinPrompt {
    fn next_name(&mut self) -> Result<String> {
        print!("Name in use or blank, enter another: ");
        io::stdout().flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        io::stdin()
            .read_line(&mut line)
            .context("Failed to read bookmark name")?;

        Ok(line.trim().to_string())
    }
}

/// Persisted store of Quickstream bookmarks.
///
/// The JSON document on disk is the single source of truth; every
/// operation re-reads it, so separate invocations never see a stale
/// in-memory copy.
pub struct BookmarkStore {
    path: PathBuf,
}

impl BookmarkStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the collection. A missing or unparsable file degrades to an
    /// empty collection rather than an error.
    pub fn read(&self) -> BookmarkCollection {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return BookmarkCollection::new(),
        };

        match serde_json::from_str(&raw) {
            Ok(collection) => collection,
            Err(e) => {
                warn!(
                    "Ignoring unparsable bookmark file {}: {}",
                    self.path.display(),
                    e
                );
                BookmarkCollection::new()
            }
        }
    }

    /// Replace the persisted collection wholesale. The document is written
    /// to a sibling temp file first and renamed over the target, so a
    /// crash mid-write cannot leave a half-written store.
    pub fn save(&self, collection: &BookmarkCollection) -> Result<()> {
        let json =
            serde_json::to_string_pretty(collection).context("Failed to serialize bookmarks")?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)
            .with_context(|| format!("Failed to write bookmark file {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace bookmark file {}", self.path.display()))?;

        Ok(())
    }

    /// Store `request` under its requested bookmark name, asking `prompt`
    /// for a replacement while the name is blank or taken. Returns the
    /// lower-cased name the bookmark was stored under.
    pub fn create(
        &self,
        request: &RecordingRequest,
        prompt: &mut dyn NamePrompt,
    ) -> Result<String> {
        let mut collection = self.read();

        let mut name = request.bookmark.clone().unwrap_or_default().to_lowercase();
        while name.is_empty() || collection.contains_key(&name) {
            name = prompt.next_name()?.to_lowercase();
        }

        // The stored copy never carries the bookmark name, so loading it
        // later cannot trigger another create.
        let mut stored = request.clone();
        stored.bookmark = None;

        collection.insert(name.clone(), stored);
        self.save(&collection)?;

        Ok(name)
    }

    /// Remove `name` if present and persist. Returns whether anything was
    /// deleted; an absent name leaves the store untouched.
    pub fn delete(&self, name: &str) -> Result<bool> {
        let mut collection = self.read();
        if collection.remove(name).is_none() {
            return Ok(false);
        }

        self.save(&collection)?;
        Ok(true)
    }

    /// Fetch a stored request by name.
    pub fn load(&self, name: &str) -> Option<RecordingRequest> {
        self.read().remove(name)
    }

    /// The full collection, for display by the caller.
    pub fn list(&self) -> BookmarkCollection {
        self.read()
    }
}
