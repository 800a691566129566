use std::path::PathBuf;
use std::sync::Mutex;

use cashbook::{cli::Session, config::Config, storage::JsonDatabase};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Reserves a fresh scratch directory for one test.
pub fn scratch_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// Builds a session over a fresh database file in its own scratch directory.
pub fn fresh_session() -> Session {
    let db = JsonDatabase::new(scratch_dir().join("users.json"));
    let store = db.init().expect("init user database");
    Session::new(store, db, Config::default(), true)
}
