//! Seed derivation from a validated mnemonic.
//!
//! The mnemonic is revalidated through the full decode path before any
//! derivation happens; no seed is ever produced for an invalid phrase.

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Bip39Error, Result};
use crate::mnemonic::validate_mnemonic;
use crate::words::WordList;

/// BIP-39 salt prefix.
pub const PASSWORD_PREFIX: &str = "mnemonic";
/// PBKDF2 iteration count.
pub const ITERATIONS: u32 = 2048;
/// Derived seed length in bytes.
pub const SEED_LENGTH: usize = 64;

/// A 64-byte seed suitable for key derivation. Opaque key material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed(pub [u8; SEED_LENGTH]);

impl Seed {
    pub fn as_bytes(&self) -> &[u8; SEED_LENGTH] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Derives the seed for `mnemonic` and `passphrase`.
///
/// The phrase is validated against `list` first; a validation failure is
/// returned wrapped in [`Bip39Error::SeedDerivation`]. On success the
/// seed is PBKDF2-HMAC-SHA512 over the NFKD-normalized space-joined
/// phrase, salted with `"mnemonic"` plus the NFKD-normalized passphrase.
/// An empty passphrase is valid and yields the standard seed.
pub fn extract_seed<S: AsRef<str>>(
    mnemonic: &[S],
    list: &WordList,
    passphrase: &str,
) -> Result<Seed> {
    validate_mnemonic(mnemonic, list)
        .map_err(|err| Bip39Error::SeedDerivation(Box::new(err)))?;

    let phrase = mnemonic
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");
    let password: String = phrase.nfkd().collect();
    let salt: String = format!("{PASSWORD_PREFIX}{passphrase}").nfkd().collect();

    let mut seed = [0u8; SEED_LENGTH];
    pbkdf2::<Hmac<Sha512>>(password.as_bytes(), salt.as_bytes(), ITERATIONS, &mut seed);
    Ok(Seed(seed))
}
