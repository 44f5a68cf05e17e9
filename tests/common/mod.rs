#![allow(dead_code)]

use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono::{Local, TimeZone};
use finance_profiles::{
    core::clock::FixedClock,
    storage::{JsonFileStorage, MemoryStorage},
    ProfileStore,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

pub const KEY: &str = "financeProfiles";

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a unique directory that outlives the calling test.
pub fn temp_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

pub fn fixed_clock() -> Box<FixedClock> {
    let at = Local
        .with_ymd_and_hms(2025, 1, 5, 9, 30, 0)
        .single()
        .expect("unambiguous local time");
    Box::new(FixedClock(at))
}

/// A store over shared in-memory storage; keep the returned handle to inspect writes.
pub fn memory_store() -> (ProfileStore, MemoryStorage) {
    let storage = MemoryStorage::new();
    let store = ProfileStore::load_with_clock(Box::new(storage.clone()), KEY, fixed_clock());
    (store, storage)
}

/// Opens a store over JSON files under `dir`, as a fresh session would.
pub fn file_store(dir: &Path) -> ProfileStore {
    let storage = JsonFileStorage::new(dir).expect("create json storage");
    ProfileStore::load_with_clock(Box::new(storage), KEY, fixed_clock())
}
