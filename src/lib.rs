//! # bip39-rs
//!
//! A pure Rust implementation of BIP-39: deterministic, checksummed
//! encoding of entropy into mnemonic phrases and derivation of binary
//! seeds from a phrase plus an optional passphrase.
//!
//! ## Quick Start
//!
//! ```rust
//! use bip39_rs::{extract_entropy, extract_mnemonic, extract_seed, new_entropy, words};
//!
//! fn main() -> bip39_rs::Result<()> {
//!     let list = words::english();
//!
//!     // Draw fresh entropy and encode it as a 24-word phrase.
//!     let entropy = new_entropy(256)?;
//!     let mnemonic = extract_mnemonic(&entropy, list)?;
//!     assert_eq!(mnemonic.len(), 24);
//!
//!     // The phrase decodes back to the same entropy.
//!     assert_eq!(extract_entropy(&mnemonic, list)?, entropy);
//!
//!     // Derive the 64-byte seed (empty passphrase is valid).
//!     let seed = extract_seed(&mnemonic, list, "")?;
//!     assert_eq!(seed.as_bytes().len(), 64);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture Overview
//!
//! - [`bits`]: arbitrary-precision bit arithmetic — the checksummed bit
//!   stream is never byte-aligned, so bit lengths are tracked explicitly
//! - [`words`]: 2048-word per-language dictionaries with an integrity
//!   check and a normalization-tolerant reverse lookup
//! - [`entropy`]: entropy generation and checksum packing/splitting
//! - [`mnemonic`]: entropy ↔ word-sequence conversion with checksum
//!   validation
//! - [`seed`]: PBKDF2-HMAC-SHA512 seed derivation, gated on validation
//!
//! ## Error Handling
//!
//! All public operations return [`Result<T, Bip39Error>`](error::Bip39Error)
//! with one variant per failure kind; there is no partial or best-effort
//! output.
//!
//! ## Thread Safety
//!
//! Every operation is pure and synchronous. The only shared state is the
//! process-wide English wordlist, which is built once (including its
//! integrity check) before publication and read-only afterwards.

pub mod bits;
pub mod entropy;
pub mod error;
pub mod mnemonic;
pub mod seed;
pub mod words;

pub use entropy::{new_entropy, Checksum, ChecksumEntropy, Entropy};
pub use error::{Bip39Error, Result};
pub use mnemonic::{extract_entropy, extract_mnemonic, normalize_mnemonic, validate_mnemonic};
pub use seed::{extract_seed, Seed};
pub use words::WordList;
