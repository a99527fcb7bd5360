use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::warn;

use wizardlydo_crypto::keys;

/// Runtime settings, read once at startup.
pub struct Config {
    pub db_path: PathBuf,
    pub lock_key: [u8; 32],
}

impl Config {
    /// Read settings from the environment.
    ///
    /// `WIZARDLYDO_LOCK_KEY` must hold a base64 32-byte key. Without one a
    /// fresh key is generated for this process, which leaves any PIN stored
    /// under an earlier key undecryptable.
    pub fn from_env() -> Result<Self> {
        // Load .env if present
        let _ = dotenvy::dotenv();

        let db_path =
            std::env::var("WIZARDLYDO_DB_PATH").unwrap_or_else(|_| "wizardlydo.db".into());

        let lock_key = match std::env::var("WIZARDLYDO_LOCK_KEY") {
            Ok(raw) => keys::key_from_base64(&raw)
                .context("WIZARDLYDO_LOCK_KEY is not a base64 32-byte key")?,
            Err(_) => {
                warn!("WIZARDLYDO_LOCK_KEY not set, generating an ephemeral key");
                keys::generate_lock_key()
            }
        };

        Ok(Self {
            db_path: PathBuf::from(db_path),
            lock_key,
        })
    }
}
