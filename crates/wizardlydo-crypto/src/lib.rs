//! PIN encryption for the app lock.
//!
//! The persistence layer only ever stores the opaque tokens produced here;
//! plaintext PINs never leave the calling service.

pub mod keys;
pub mod pin;
