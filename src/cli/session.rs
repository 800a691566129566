use crate::{
    config::Config,
    errors::StoreError,
    ledger::{Account, LedgerStore},
    storage::JsonDatabase,
};

/// Mutable runtime state threaded through every screen cycle.
pub struct Session {
    pub store: LedgerStore,
    pub config: Config,
    /// Login of the most recently authenticated user. Survives a logout; the
    /// next successful login overwrites it.
    pub current_user: Option<String>,
    /// False when the startup load failed; the session then runs degraded.
    pub store_ok: bool,
    db: JsonDatabase,
}

impl Session {
    pub fn new(store: LedgerStore, db: JsonDatabase, config: Config, store_ok: bool) -> Self {
        Self {
            store,
            config,
            current_user: None,
            store_ok,
            db,
        }
    }

    /// Writes the store snapshot. Skipped while degraded so a broken database
    /// file stays on disk untouched.
    pub fn persist(&self) -> Result<(), StoreError> {
        if !self.store_ok {
            tracing::warn!("skipping save, user database was never loaded");
            return Ok(());
        }
        self.db.save(&self.store)
    }

    pub fn authenticate(&mut self, login: impl Into<String>) {
        let login = login.into();
        tracing::info!(%login, "user authenticated");
        self.current_user = Some(login);
    }

    /// The authenticated account. Only reachable from screens behind the
    /// login flow; anything else is a routing bug.
    pub fn active_account(&self) -> &Account {
        let login = self
            .current_user
            .as_deref()
            .expect("no authenticated user in session");
        self.store
            .get(login)
            .unwrap_or_else(|| panic!("authenticated user `{login}` missing from the store"))
    }

    pub fn active_account_mut(&mut self) -> &mut Account {
        let login = self
            .current_user
            .clone()
            .expect("no authenticated user in session");
        self.store
            .get_mut(&login)
            .unwrap_or_else(|| panic!("authenticated user `{login}` missing from the store"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn session_with_alice() -> Session {
        let mut store = LedgerStore::new();
        store.add(Account::new("alice", "pw"));
        let db = JsonDatabase::new("unused.json");
        let mut session = Session::new(store, db, Config::default(), true);
        session.authenticate("alice");
        session
    }

    #[test]
    fn active_account_returns_the_authenticated_user() {
        let session = session_with_alice();
        assert_eq!(session.active_account().login(), "alice");
    }

    #[test]
    #[should_panic(expected = "no authenticated user")]
    fn active_account_panics_without_a_login() {
        let db = JsonDatabase::new("unused.json");
        let session = Session::new(LedgerStore::new(), db, Config::default(), true);
        session.active_account();
    }

    #[test]
    fn persist_is_skipped_while_degraded() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("users.json");
        let db = JsonDatabase::new(&path);
        let session = Session::new(LedgerStore::new(), db, Config::default(), false);

        session.persist().expect("skip");
        assert!(!path.exists());
    }
}
