use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{errors::StoreError, ledger::LedgerStore};

const EMPTY_SNAPSHOT: &str = "{}";

/// File-backed snapshot of the user database.
pub struct JsonDatabase {
    path: PathBuf,
}

impl JsonDatabase {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the snapshot, creating an empty document when the file does not
    /// exist. An unreadable or malformed file is an error, never a silently
    /// emptied store.
    pub fn init(&self) -> Result<LedgerStore, StoreError> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "user database missing, creating an empty one");
            write_atomic(&self.path, EMPTY_SNAPSHOT)?;
            return Ok(LedgerStore::new());
        }
        let data = fs::read_to_string(&self.path)?;
        LedgerStore::from_json_str(&data)
    }

    /// Writes the full snapshot atomically.
    pub fn save(&self, store: &LedgerStore) -> Result<(), StoreError> {
        write_atomic(&self.path, &store.to_json_string())?;
        tracing::info!(path = %self.path.display(), users = store.len(), "user database saved");
        Ok(())
    }
}

/// Stages to a temporary file and renames so readers never observe half a snapshot.
fn write_atomic(path: &Path, data: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, data)?;
    fs::rename(tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Account, DEPOSIT};
    use tempfile::TempDir;

    #[test]
    fn init_creates_an_empty_snapshot_when_missing() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("users.json");
        let db = JsonDatabase::new(&path);

        let store = db.init().expect("init");
        assert!(store.is_empty());
        assert_eq!(fs::read_to_string(&path).expect("snapshot"), "{}");
    }

    #[test]
    fn save_then_init_round_trips() {
        let temp = TempDir::new().expect("temp dir");
        let db = JsonDatabase::new(temp.path().join("users.json"));

        let mut store = db.init().expect("init");
        let mut account = Account::new("alice", "pw");
        account.credit(DEPOSIT, 42.0);
        store.add(account);
        db.save(&store).expect("save");

        let loaded = db.init().expect("reload");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get("alice").expect("alice").balance(), 42.0);
    }

    #[test]
    fn init_fails_closed_on_corrupt_snapshots() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("users.json");
        fs::write(&path, "{ broken").expect("write");

        let db = JsonDatabase::new(&path);
        assert!(db.init().is_err());
        assert_eq!(fs::read_to_string(&path).expect("snapshot"), "{ broken");
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("nested").join("users.json");
        let db = JsonDatabase::new(&path);

        db.save(&LedgerStore::new()).expect("save");
        assert!(path.exists());
    }
}
