use aes_gcm::{
    Aes256Gcm, Key, Nonce,
    aead::{Aead, KeyInit, OsRng, rand_core::RngCore},
};
use anyhow::{Result, anyhow};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// AES-GCM nonce size in bytes.
const NONCE_LEN: usize = 12;

/// Encrypt a PIN into an opaque storage token: base64 of nonce || ciphertext.
/// A fresh nonce every call, so equal PINs produce distinct tokens.
pub fn encrypt_pin(key: &[u8; 32], pin: &str) -> Result<String> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));

    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, pin.as_bytes())
        .map_err(|e| anyhow!("PIN encryption failed: {}", e))?;

    let mut token = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    token.extend_from_slice(&nonce_bytes);
    token.extend_from_slice(&ciphertext);
    Ok(BASE64.encode(token))
}

/// Decrypt a storage token back to the PIN. Fails on a wrong key or a
/// token that was tampered with or truncated.
pub fn decrypt_pin(key: &[u8; 32], token: &str) -> Result<String> {
    let raw = BASE64.decode(token)?;
    if raw.len() <= NONCE_LEN {
        return Err(anyhow!("PIN token too short: {} bytes", raw.len()));
    }
    let (nonce_bytes, ciphertext) = raw.split_at(NONCE_LEN);

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|e| anyhow!("PIN decryption failed: {}", e))?;

    String::from_utf8(plaintext).map_err(|_| anyhow!("decrypted PIN is not UTF-8"))
}
