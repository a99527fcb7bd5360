use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use wizardlydo_crypto::pin::{decrypt_pin, encrypt_pin};
use wizardlydo_db::PinStore;

/// What checking a candidate PIN found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnlockOutcome {
    /// No PIN has been set up. The shell should skip the lock screen,
    /// not treat this as a failed attempt.
    NotConfigured,
    Accepted,
    Rejected,
}

/// Snapshot of the lock for settings screens.
#[derive(Debug, Clone, Serialize)]
pub struct LockStatus {
    pub enabled: bool,
    pub changed_at: Option<DateTime<Utc>>,
}

/// PIN lifecycle over the store. Plaintext PINs exist only inside these
/// methods; the store below sees ciphertext.
#[derive(Clone)]
pub struct AppLock {
    store: PinStore,
    key: [u8; 32],
}

impl AppLock {
    pub fn new(store: PinStore, key: [u8; 32]) -> Self {
        Self { store, key }
    }

    /// Turn the lock on, replacing any PIN already stored.
    pub async fn enable(&self, pin: &str) -> Result<()> {
        let encrypted = encrypt_pin(&self.key, pin)?;

        // Run blocking DB work off the async runtime
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.set(&encrypted))
            .await
            .context("PIN store task failed")??;

        info!("App lock enabled");
        Ok(())
    }

    /// Check a candidate PIN against the stored one.
    pub async fn verify(&self, pin: &str) -> Result<UnlockOutcome> {
        let store = self.store.clone();
        let row = tokio::task::spawn_blocking(move || store.get())
            .await
            .context("PIN store task failed")??;

        let Some(row) = row else {
            return Ok(UnlockOutcome::NotConfigured);
        };

        let stored = decrypt_pin(&self.key, &row.encrypted_pin)
            .context("stored PIN cannot be decrypted under the configured lock key")?;

        if stored == pin {
            Ok(UnlockOutcome::Accepted)
        } else {
            Ok(UnlockOutcome::Rejected)
        }
    }

    /// Replace an existing PIN. Quietly does nothing when the lock was
    /// never enabled; first-time setup goes through [`enable`](Self::enable).
    pub async fn change(&self, pin: &str) -> Result<()> {
        let encrypted = encrypt_pin(&self.key, pin)?;

        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.update(&encrypted))
            .await
            .context("PIN store task failed")??;
        Ok(())
    }

    /// Turn the lock off. Safe to call when it is already off.
    pub async fn disable(&self) -> Result<()> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.clear())
            .await
            .context("PIN store task failed")??;

        info!("App lock disabled");
        Ok(())
    }

    pub async fn is_enabled(&self) -> Result<bool> {
        let store = self.store.clone();
        let count = tokio::task::spawn_blocking(move || store.count())
            .await
            .context("PIN store task failed")??;
        Ok(count > 0)
    }

    /// Current lock state plus when the PIN last changed.
    pub async fn status(&self) -> Result<LockStatus> {
        let store = self.store.clone();
        let row = tokio::task::spawn_blocking(move || store.get())
            .await
            .context("PIN store task failed")??;

        Ok(match row {
            Some(row) => LockStatus {
                enabled: true,
                changed_at: parse_sqlite_datetime(&row.updated_at),
            },
            None => LockStatus {
                enabled: false,
                changed_at: None,
            },
        })
    }
}

fn parse_sqlite_datetime(raw: &str) -> Option<DateTime<Utc>> {
    raw.parse::<DateTime<Utc>>()
        .or_else(|_| {
            // SQLite stores timestamps as "YYYY-MM-DD HH:MM:SS" without timezone.
            // Parse as naive UTC and convert.
            chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .map_err(|e| warn!("Corrupt timestamp '{}' on security_pins row: {}", raw, e))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_timestamps_parse() {
        let parsed = parse_sqlite_datetime("2024-06-01 12:30:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-06-01T12:30:00+00:00");

        assert!(parse_sqlite_datetime("2024-06-01T12:30:00Z").is_some());
        assert!(parse_sqlite_datetime("last tuesday").is_none());
    }
}
