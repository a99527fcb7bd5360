//! App-lock service: the PIN lifecycle on top of the encrypted store.
//! Callers hand plaintext PINs to [`AppLock`]; everything below this
//! crate only ever sees ciphertext.

pub mod config;
pub mod lock;

pub use config::Config;
pub use lock::{AppLock, LockStatus, UnlockOutcome};

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use wizardlydo_db::{Database, PinStore};

/// Open (or create) the database at `path` and build an [`AppLock`] over it.
pub fn open(path: &Path, key: [u8; 32]) -> Result<AppLock> {
    let db = Database::open(path)?;
    let store = PinStore::new(Arc::new(db));
    Ok(AppLock::new(store, key))
}

/// Install the process-wide tracing subscriber. Call once at startup.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wizardlydo=debug".into()),
        )
        .init();
}
