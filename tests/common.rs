#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use coffeeconnect::config::Config;
use coffeeconnect::store::{RemoteError, RemoteStore};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn cc() -> Command {
    cargo_bin_cmd!("coffeeconnect")
}

/// Create a unique fallback directory path inside the system temp dir and
/// remove any leftovers from a previous run
pub fn setup_fallback_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_coffeeconnect", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    dir
}

/// Read a fallback CSV file as raw text ("" if absent)
pub fn read_fallback(dir: &str, file: &str) -> String {
    let mut path = PathBuf::from(dir);
    path.push(file);
    fs::read_to_string(&path).unwrap_or_default()
}

/// Config pointing at a private fallback dir, remote disabled unless the
/// test flips it on
pub fn test_config(fallback_dir: &str) -> Config {
    Config {
        remote_enabled: false,
        workbook_id: String::new(),
        fallback_dir: fallback_dir.to_string(),
    }
}

/// In-memory remote workbook. Clones share the same collections, so a test
/// can hand one clone to the recorder and inspect the other afterwards.
#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<Mutex<BTreeMap<String, Vec<Vec<String>>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self, collection: &str) -> Vec<Vec<String>> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn collection_names(&self) -> Vec<String> {
        self.collections.lock().unwrap().keys().cloned().collect()
    }
}

impl RemoteStore for MemoryStore {
    fn lookup(&self, collection: &str) -> Result<(), RemoteError> {
        if self.collections.lock().unwrap().contains_key(collection) {
            Ok(())
        } else {
            Err(RemoteError::NotFound {
                collection: collection.to_string(),
            })
        }
    }

    fn create(&self, collection: &str, _columns: usize) -> Result<(), RemoteError> {
        self.collections
            .lock()
            .unwrap()
            .insert(collection.to_string(), Vec::new());
        Ok(())
    }

    fn append(&self, collection: &str, row: &[String]) -> Result<(), RemoteError> {
        let mut map = self.collections.lock().unwrap();
        match map.get_mut(collection) {
            Some(rows) => {
                rows.push(row.to_vec());
                Ok(())
            }
            None => Err(RemoteError::NotFound {
                collection: collection.to_string(),
            }),
        }
    }
}

/// Remote store that fails every call, counting how often it was hit
#[derive(Clone, Default)]
pub struct FailingStore {
    calls: Arc<AtomicUsize>,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RemoteStore for FailingStore {
    fn lookup(&self, _collection: &str) -> Result<(), RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RemoteError::Service("quota exceeded".to_string()))
    }

    fn create(&self, _collection: &str, _columns: usize) -> Result<(), RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RemoteError::Service("quota exceeded".to_string()))
    }

    fn append(&self, _collection: &str, _row: &[String]) -> Result<(), RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RemoteError::Service("quota exceeded".to_string()))
    }
}
