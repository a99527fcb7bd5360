use tempfile::TempDir;
use wizardlydo_applock::{AppLock, UnlockOutcome};
use wizardlydo_crypto::keys::generate_lock_key;

fn lock_in(dir: &TempDir) -> AppLock {
    wizardlydo_applock::open(&dir.path().join("lock.db"), generate_lock_key()).unwrap()
}

#[tokio::test]
async fn verify_without_a_pin_reports_not_configured() {
    let dir = TempDir::new().unwrap();
    let lock = lock_in(&dir);

    assert_eq!(
        lock.verify("1234").await.unwrap(),
        UnlockOutcome::NotConfigured
    );
    assert!(!lock.is_enabled().await.unwrap());
}

#[tokio::test]
async fn enable_then_verify() {
    let dir = TempDir::new().unwrap();
    let lock = lock_in(&dir);

    lock.enable("4921").await.unwrap();

    assert!(lock.is_enabled().await.unwrap());
    assert_eq!(lock.verify("4921").await.unwrap(), UnlockOutcome::Accepted);
    assert_eq!(lock.verify("0000").await.unwrap(), UnlockOutcome::Rejected);

    let status = lock.status().await.unwrap();
    assert!(status.enabled);
    assert!(status.changed_at.is_some());
}

#[tokio::test]
async fn disable_is_idempotent_and_resets_state() {
    let dir = TempDir::new().unwrap();
    let lock = lock_in(&dir);

    // Disabling a lock that was never enabled is fine.
    lock.disable().await.unwrap();

    lock.enable("4921").await.unwrap();
    lock.disable().await.unwrap();
    lock.disable().await.unwrap();

    assert!(!lock.is_enabled().await.unwrap());
    assert_eq!(
        lock.verify("4921").await.unwrap(),
        UnlockOutcome::NotConfigured
    );

    let status = lock.status().await.unwrap();
    assert!(!status.enabled);
    assert!(status.changed_at.is_none());
}

#[tokio::test]
async fn change_requires_an_existing_pin() {
    let dir = TempDir::new().unwrap();
    let lock = lock_in(&dir);

    // Change before enable must not create a PIN out of thin air.
    lock.change("9999").await.unwrap();
    assert!(!lock.is_enabled().await.unwrap());

    lock.enable("1234").await.unwrap();
    lock.change("9999").await.unwrap();

    assert_eq!(lock.verify("1234").await.unwrap(), UnlockOutcome::Rejected);
    assert_eq!(lock.verify("9999").await.unwrap(), UnlockOutcome::Accepted);
}

#[tokio::test]
async fn wrong_key_material_surfaces_as_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lock.db");

    let lock = wizardlydo_applock::open(&path, generate_lock_key()).unwrap();
    lock.enable("4921").await.unwrap();
    drop(lock);

    // Same database, different key: the stored PIN can't be decrypted,
    // and that's an error rather than a quiet rejection.
    let other = wizardlydo_applock::open(&path, generate_lock_key()).unwrap();
    assert!(other.verify("4921").await.is_err());
}
