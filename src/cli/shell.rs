use std::{env, path::PathBuf};

use crate::{
    config::{default_database_file, Config, ConfigManager},
    errors::CliError,
    ledger::LedgerStore,
    storage::JsonDatabase,
};

use super::{
    console::Console,
    router::{LoopControl, Router},
    session::Session,
};

const DB_ENV_VAR: &str = "CASHBOOK_DB";

/// Wires configuration and storage, then drives the screens until the user
/// leaves. A database that fails to load starts the session degraded instead
/// of aborting, leaving the broken file in place.
pub fn run_cli(console: &mut dyn Console) -> Result<(), CliError> {
    let config = ConfigManager::new()?.load()?;
    let db = JsonDatabase::new(database_path(&config));

    let (store, store_ok) = match db.init() {
        Ok(store) => (store, true),
        Err(err) => {
            tracing::warn!(error = %err, "user database unavailable, running degraded");
            console.error(&format!("Failed to load the user database: {err}"));
            (LedgerStore::new(), false)
        }
    };

    let mut session = Session::new(store, db, config, store_ok);
    run_session(&mut session, console)
}

/// Runs the screen loop over an already wired session.
pub fn run_session(session: &mut Session, console: &mut dyn Console) -> Result<(), CliError> {
    let mut router = Router::new();
    loop {
        match router.run_cycle(session, console)? {
            LoopControl::Continue => {}
            LoopControl::Exit => break,
        }
    }
    console.info("Application closed.");
    Ok(())
}

/// Database location precedence: env override, configured path, default file.
fn database_path(config: &Config) -> PathBuf {
    if let Some(custom) = env::var_os(DB_ENV_VAR) {
        return PathBuf::from(custom);
    }
    if let Some(path) = &config.database_file {
        return path.clone();
    }
    default_database_file()
}
