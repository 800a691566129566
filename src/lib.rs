#![doc(test(attr(deny(warnings))))]

//! Cashbook is a menu-driven personal cash tracker: users register, record
//! income against named categories, and the whole ledger persists as a single
//! JSON snapshot.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("cashbook=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Cashbook tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
