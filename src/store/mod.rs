// src/store/mod.rs
//! Flat-file credential store.
//!
//! Credentials live in memory as a plain `Vec` and are mirrored to a single
//! pretty-printed JSON file on every mutation. Writes go through a temp file
//! in the target directory followed by a rename, so a crash mid-write leaves
//! the previous file intact.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::crypto;
use crate::models::CredentialRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("index {index} is out of range for {len} stored credentials")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("failed to serialize credentials: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write credential file: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Append-ordered credential store backed by one JSON file.
///
/// The file is the source of truth between runs; within a run the in-memory
/// list is authoritative and every successful mutation rewrites the file.
/// A mutation whose write fails is undone in memory, so the two views never
/// drift apart.
#[derive(Debug)]
pub struct CredentialStore {
    path: PathBuf,
    records: Vec<CredentialRecord>,
}

impl CredentialStore {
    /// Open the store at `path`, loading any records already on disk.
    ///
    /// A missing, unreadable or malformed file yields an empty store; the
    /// next successful mutation rewrites it.
    pub fn open<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let records = load_records(&path);
        Self { path, records }
    }

    /// Append a credential for `service` and `username`.
    ///
    /// The password itself is never stored; the record carries its SHA-256
    /// hex digest. Returns the record as persisted.
    pub fn append(
        &mut self,
        service: &str,
        username: &str,
        password: &str,
    ) -> Result<CredentialRecord> {
        let record = CredentialRecord {
            service: service.to_string(),
            username: username.to_string(),
            password_hash: crypto::sha256_hex(password),
            created_at: Utc::now(),
        };
        self.records.push(record.clone());
        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }
        Ok(record)
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[CredentialRecord] {
        &self.records
    }

    /// Case-insensitive substring match over the service field.
    pub fn search(&self, query: &str) -> Vec<CredentialRecord> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.service.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Remove and return the record at `index` (zero-based, insertion order).
    pub fn delete_at(&mut self, index: usize) -> Result<CredentialRecord> {
        if index >= self.records.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        let record = self.records.remove(index);
        if let Err(e) = self.persist() {
            self.records.insert(index, record);
            return Err(e);
        }
        Ok(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the backing file to match memory.
    ///
    /// The JSON lands in a temp file in the same directory and is renamed
    /// over the target, so readers never observe a half-written store.
    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.records)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

fn load_records(path: &Path) -> Vec<CredentialRecord> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            log::debug!("no credential file at {}: {}", path.display(), e);
            return Vec::new();
        }
    };
    match serde_json::from_str(&text) {
        Ok(records) => records,
        Err(e) => {
            log::warn!(
                "ignoring malformed credential file at {}: {}",
                path.display(),
                e
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn store_path(dir: &TempDir) -> PathBuf {
        dir.path().join("passwords.json")
    }

    #[test]
    fn open_without_a_file_yields_an_empty_store() {
        let dir = tempdir().unwrap();
        let store = CredentialStore::open(store_path(&dir));
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn append_persists_and_survives_reopen() {
        let dir = tempdir().unwrap();
        let mut store = CredentialStore::open(store_path(&dir));
        let stored = store.append("example.com", "alice", "p@ss").unwrap();
        assert_eq!(stored.service, "example.com");
        assert_eq!(stored.username, "alice");
        assert_eq!(
            stored.password_hash,
            "a4048cba70dad0be0b01a8bb00027c775386c3f6194943ad3bf37204781edbc5"
        );

        let reopened = CredentialStore::open(store_path(&dir));
        assert_eq!(reopened.list(), store.list());
    }

    #[test]
    fn file_holds_pretty_json_and_no_plaintext() {
        let dir = tempdir().unwrap();
        let mut store = CredentialStore::open(store_path(&dir));
        store.append("example.com", "alice", "hunter2").unwrap();

        let text = fs::read_to_string(store_path(&dir)).unwrap();
        assert!(text.starts_with("[\n"));
        assert!(text.contains("\"service\": \"example.com\""));
        assert!(!text.contains("hunter2"));
    }

    #[test]
    fn list_preserves_insertion_order() {
        let dir = tempdir().unwrap();
        let mut store = CredentialStore::open(store_path(&dir));
        store.append("first", "a", "pw1").unwrap();
        store.append("second", "b", "pw2").unwrap();
        store.append("third", "c", "pw3").unwrap();

        let services: Vec<&str> = store.list().iter().map(|r| r.service.as_str()).collect();
        assert_eq!(services, vec!["first", "second", "third"]);
    }

    #[test]
    fn search_matches_the_service_field_case_insensitively() {
        let dir = tempdir().unwrap();
        let mut store = CredentialStore::open(store_path(&dir));
        store.append("GitHub", "octocat", "pw").unwrap();
        store.append("GitLab", "alice", "pw").unwrap();
        store.append("Mailbox", "bob", "pw").unwrap();

        assert_eq!(store.search("git").len(), 2);
        assert_eq!(store.search("MAIL").len(), 1);
        assert_eq!(store.search("MAIL")[0].service, "Mailbox");
        // Usernames are not part of the match
        assert!(store.search("alice").is_empty());
        assert!(store.search("zzz").is_empty());
    }

    #[test]
    fn empty_query_matches_everything() {
        let dir = tempdir().unwrap();
        let mut store = CredentialStore::open(store_path(&dir));
        store.append("one", "a", "pw").unwrap();
        store.append("two", "b", "pw").unwrap();

        assert_eq!(store.search("").len(), 2);
    }

    #[test]
    fn delete_at_removes_and_rewrites_the_file() {
        let dir = tempdir().unwrap();
        let mut store = CredentialStore::open(store_path(&dir));
        store.append("keep", "a", "pw").unwrap();
        store.append("drop", "b", "pw").unwrap();

        let removed = store.delete_at(1).unwrap();
        assert_eq!(removed.service, "drop");
        assert_eq!(store.len(), 1);

        let reopened = CredentialStore::open(store_path(&dir));
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.list()[0].service, "keep");
    }

    #[test]
    fn delete_at_rejects_an_out_of_range_index() {
        let dir = tempdir().unwrap();
        let mut store = CredentialStore::open(store_path(&dir));
        store.append("only", "a", "pw").unwrap();

        let err = store.delete_at(1).unwrap_err();
        assert!(matches!(
            err,
            StoreError::IndexOutOfRange { index: 1, len: 1 }
        ));
        assert_eq!(store.len(), 1);

        let mut empty = CredentialStore::open(dir.path().join("empty.json"));
        let err = empty.delete_at(0).unwrap_err();
        assert!(matches!(
            err,
            StoreError::IndexOutOfRange { index: 0, len: 0 }
        ));
    }

    #[test]
    fn failed_append_leaves_the_store_unchanged() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing").join("passwords.json");
        let mut store = CredentialStore::open(missing);

        let err = store.append("svc", "user", "pw").unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn failed_delete_keeps_the_record() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("store");
        fs::create_dir(&sub).unwrap();
        let mut store = CredentialStore::open(sub.join("passwords.json"));
        store.append("svc", "user", "pw").unwrap();

        fs::remove_dir_all(&sub).unwrap();
        let err = store.delete_at(0).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].service, "svc");
    }

    #[test]
    fn malformed_file_loads_as_an_empty_store() {
        let dir = tempdir().unwrap();
        let path = store_path(&dir);
        fs::write(&path, "not json").unwrap();

        let mut store = CredentialStore::open(&path);
        assert!(store.is_empty());

        store.append("svc", "user", "pw").unwrap();
        let reopened = CredentialStore::open(&path);
        assert_eq!(reopened.len(), 1);
    }

    #[test]
    fn identical_passwords_share_a_digest() {
        let dir = tempdir().unwrap();
        let mut store = CredentialStore::open(store_path(&dir));
        store.append("first", "a", "same-password").unwrap();
        store.append("second", "b", "same-password").unwrap();

        let records = store.list();
        assert_eq!(records[0].password_hash, records[1].password_hash);
    }
}
