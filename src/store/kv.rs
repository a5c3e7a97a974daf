// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wavecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wavecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::model::IdError;

/// JSON list of user accounts.
pub const USER_ACCOUNTS_KEY: &str = "userAccounts";
/// `"true"` while a user is logged in; absent otherwise.
pub const LOGGED_IN_KEY: &str = "isLoggedIn";
pub const USER_NAME_KEY: &str = "userName";
pub const USER_EMAIL_KEY: &str = "userEmail";
/// JSON list of published episodes, newest first.
pub const PUBLISHED_EPISODES_KEY: &str = "publishedEpisodes";

/// The process-wide, synchronous string-keyed persistent store.
///
/// Each key is read and written independently; there is no atomicity across
/// keys. A failed `set` must leave the previous value for the key intact.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        key: String,
        source: serde_json::Error,
    },
    QuotaExceeded {
        key: String,
        attempted: usize,
        quota: usize,
    },
    InvalidKey {
        key: String,
    },
    InvalidId {
        key: String,
        value: String,
        source: IdError,
    },
    SymlinkRefused {
        path: PathBuf,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { key, source } => write!(f, "json error for key {key:?}: {source}"),
            Self::QuotaExceeded { key, attempted, quota } => write!(
                f,
                "storage quota exceeded writing key {key:?} ({attempted} bytes, quota {quota})"
            ),
            Self::InvalidKey { key } => write!(f, "invalid store key {key:?}"),
            Self::InvalidId { key, value, source } => {
                write!(f, "invalid episode id {value:?} under key {key:?}: {source}")
            }
            Self::SymlinkRefused { path } => {
                write!(f, "refusing to write through symlink at {path:?}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidId { source, .. } => Some(source),
            Self::QuotaExceeded { .. } | Self::InvalidKey { .. } | Self::SymlinkRefused { .. } => {
                None
            }
        }
    }
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey { key: key.to_owned() })
    }
}

/// In-memory store, primarily for tests and the `--demo` flow.
///
/// An optional quota caps the total byte size of stored values, so storage
/// failure paths can be exercised; an over-quota `set` fails without touching
/// the previous value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self { entries: Mutex::new(BTreeMap::new()), quota: Some(quota) }
    }

    pub fn keys(&self) -> Vec<String> {
        let entries = self.entries.lock().expect("memory store lock poisoned");
        entries.keys().cloned().collect()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        validate_key(key)?;
        let entries = self.entries.lock().expect("memory store lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        let mut entries = self.entries.lock().expect("memory store lock poisoned");
        if let Some(quota) = self.quota {
            let existing = entries.get(key).map(String::len).unwrap_or(0);
            let current: usize = entries.values().map(String::len).sum();
            let attempted = current - existing + value.len();
            if attempted > quota {
                return Err(StoreError::QuotaExceeded { key: key.to_owned(), attempted, quota });
            }
        }
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Fast, best-effort persistence vs. slower fsync-backed writes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Writes a temp file and renames atomically into place; no per-file
    /// fsync.
    #[default]
    BestEffort,

    /// Additionally flushes file contents and the containing directory to
    /// stable storage where the platform supports it.
    Durable,
}

/// On-disk store: one file per key under a root folder.
///
/// Values are written via temp-file-then-rename, so the previous value for a
/// key survives any failed write.
#[derive(Debug, Clone)]
pub struct StoreFolder {
    root: PathBuf,
    durability: WriteDurability,
}

impl StoreFolder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), durability: WriteDurability::default() }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.kv"))
    }
}

impl KeyValueStore for StoreFolder {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        validate_key(key)?;
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        fs::create_dir_all(&self.root)
            .map_err(|source| StoreError::Io { path: self.root.clone(), source })?;

        let path = self.key_path(key);
        match fs::symlink_metadata(&path) {
            Ok(md) if md.file_type().is_symlink() => {
                return Err(StoreError::SymlinkRefused { path });
            }
            Ok(_) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(source) => return Err(StoreError::Io { path, source }),
        }

        let nanos =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let tmp_path = self.root.join(format!(".wavecast.tmp.{key}.{nanos}"));

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
            .map_err(|source| StoreError::Io { path: tmp_path.clone(), source })?;

        file.write_all(value.as_bytes())
            .map_err(|source| StoreError::Io { path: tmp_path.clone(), source })?;

        if self.durability == WriteDurability::Durable {
            file.sync_all()
                .map_err(|source| StoreError::Io { path: tmp_path.clone(), source })?;
        }
        drop(file);

        if let Err(source) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(StoreError::Io { path, source });
        }

        if self.durability == WriteDurability::Durable {
            #[cfg(unix)]
            {
                let dir = fs::File::open(&self.root)
                    .map_err(|source| StoreError::Io { path: self.root.clone(), source })?;
                dir.sync_all()
                    .map_err(|source| StoreError::Io { path: self.root.clone(), source })?;
            }
        }

        tracing::debug!(key, bytes = value.len(), "store write");
        Ok(())
    }
}
