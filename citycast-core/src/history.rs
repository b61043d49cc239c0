//! Recently searched cities.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tokio::{fs, sync::Mutex};
use tracing::debug;
use uuid::Uuid;

/// One stored search. Duplicate names are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub name: String,
}

impl HistoryEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
        }
    }
}

#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append `name` and return the stored entry.
    async fn add_city(&self, name: &str) -> Result<HistoryEntry>;

    /// All entries in insertion order.
    async fn list_cities(&self) -> Result<Vec<HistoryEntry>>;

    /// Delete by id, returning the removed entry or `None` if absent.
    async fn remove_city(&self, id: &str) -> Result<Option<HistoryEntry>>;
}

/// History kept as a JSON array in a single file.
#[derive(Debug)]
pub struct JsonHistoryStore {
    path: PathBuf,
    // serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl JsonHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Vec<HistoryEntry>> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read history file: {}", self.path.display())
                });
            }
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse history file: {}", self.path.display()))
    }

    async fn write(&self, entries: &[HistoryEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create history directory: {}", parent.display())
            })?;
        }

        let json =
            serde_json::to_string_pretty(entries).context("Failed to serialize search history")?;

        fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write history file: {}", self.path.display()))
    }
}

#[async_trait]
impl HistoryStore for JsonHistoryStore {
    async fn add_city(&self, name: &str) -> Result<HistoryEntry> {
        let _guard = self.lock.lock().await;

        let mut entries = self.read().await?;
        let entry = HistoryEntry::new(name);
        entries.push(entry.clone());
        self.write(&entries).await?;

        debug!("Added {} to history as {}", entry.name, entry.id);
        Ok(entry)
    }

    async fn list_cities(&self) -> Result<Vec<HistoryEntry>> {
        let _guard = self.lock.lock().await;
        self.read().await
    }

    async fn remove_city(&self, id: &str) -> Result<Option<HistoryEntry>> {
        let _guard = self.lock.lock().await;

        let mut entries = self.read().await?;
        let Some(pos) = entries.iter().position(|e| e.id == id) else {
            return Ok(None);
        };

        let removed = entries.remove(pos);
        self.write(&entries).await?;

        debug!("Removed {} ({}) from history", removed.name, removed.id);
        Ok(Some(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonHistoryStore {
        JsonHistoryStore::new(dir.path().join("nested").join("history.json"))
    }

    #[tokio::test]
    async fn missing_file_lists_empty() {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);

        assert!(store.list_cities().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn blank_file_lists_empty() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("history.json");
        std::fs::write(&path, "  \n").expect("write");

        let store = JsonHistoryStore::new(path.clone());
        assert!(store.list_cities().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn add_keeps_insertion_order_and_duplicates() {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);

        let first = store.add_city("Boston").await.expect("add");
        let second = store.add_city("Denver").await.expect("add");
        let third = store.add_city("Boston").await.expect("add");

        let listed = store.list_cities().await.expect("list");
        assert_eq!(listed, vec![first.clone(), second, third.clone()]);
        assert_ne!(first.id, third.id);
    }

    #[tokio::test]
    async fn entries_survive_a_new_store_instance() {
        let dir = TempDir::new().expect("tempdir");
        let added = store_in(&dir).add_city("Austin").await.expect("add");

        let listed = store_in(&dir).list_cities().await.expect("list");
        assert_eq!(listed, vec![added]);
    }

    #[tokio::test]
    async fn remove_returns_deleted_entry() {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);
        let boston = store.add_city("Boston").await.expect("add");
        let denver = store.add_city("Denver").await.expect("add");

        let removed = store.remove_city(&boston.id).await.expect("remove");

        assert_eq!(removed, Some(boston));
        assert_eq!(store.list_cities().await.expect("list"), vec![denver]);
    }

    #[tokio::test]
    async fn remove_unknown_id_is_none() {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);
        store.add_city("Boston").await.expect("add");

        let removed = store.remove_city("no-such-id").await.expect("remove");

        assert_eq!(removed, None);
        assert_eq!(store.list_cities().await.expect("list").len(), 1);
    }

    #[tokio::test]
    async fn corrupt_file_is_reported() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("history.json");
        std::fs::write(&path, "{not json").expect("write");

        let err = JsonHistoryStore::new(path.clone()).list_cities().await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse history file"));
    }
}
