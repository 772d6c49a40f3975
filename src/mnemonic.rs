//! Encoding and decoding between entropy and mnemonic word sequences.
//!
//! Encoding walks the checksummed bit stream from its least-significant
//! 11-bit group upward, filling the phrase from its last word backward so
//! the final order is most-significant-group first. Decoding folds the
//! word indices back into one value, re-pads it to the exact bit length,
//! and only releases the entropy once the embedded checksum verifies.

use unicode_normalization::UnicodeNormalization;

use crate::bits::BitVector;
use crate::entropy::{ChecksumEntropy, Entropy, GROUP_BITLEN};
use crate::error::{Bip39Error, Result};
use crate::words::WordList;

/// Minimum mnemonic word count.
pub const MIN_LENGTH: usize = 12;
/// Maximum mnemonic word count.
pub const MAX_LENGTH: usize = 24;
/// Mnemonic word-count divisor.
pub const LENGTH_DIVISOR: usize = 3;

/// Encodes `entropy` into a mnemonic phrase over `list`.
pub fn extract_mnemonic(entropy: &Entropy, list: &WordList) -> Result<Vec<String>> {
    let checksum_entropy = entropy.add_checksum();
    let length = checksum_entropy.bitlen() / GROUP_BITLEN;

    let mut mnemonic = vec![String::new(); length];
    let mut value = checksum_entropy.into_bits();
    for slot in mnemonic.iter_mut().rev() {
        let index = value.mask_low(GROUP_BITLEN).to_u64() as usize;
        value = value.shr(GROUP_BITLEN);
        // Indices are below 2048 for well-formed checksum entropy, but a
        // lookup failure is still propagated rather than assumed away.
        *slot = list.at(index)?.to_string();
    }

    Ok(mnemonic)
}

/// Decodes a mnemonic phrase back into the entropy it encodes, verifying
/// the embedded checksum.
pub fn extract_entropy<S: AsRef<str>>(mnemonic: &[S], list: &WordList) -> Result<Entropy> {
    if !is_valid_mnemonic_length(mnemonic.len()) {
        return Err(Bip39Error::InvalidMnemonicLength(mnemonic.len()));
    }

    let mut value = BitVector::zero();
    for word in mnemonic {
        let index = list.index_of(word.as_ref())?;
        value.append_low(GROUP_BITLEN, index as u64);
    }

    let checksum_entropy = ChecksumEntropy::from_bits(value)?;
    let (entropy, checksum) = checksum_entropy.remove_checksum();

    if !entropy.is_valid_checksum(&checksum) {
        log::debug!("checksum mismatch decoding {}-word mnemonic", mnemonic.len());
        return Err(Bip39Error::InvalidChecksum);
    }

    Ok(entropy)
}

/// NFKD-normalizes every word. Mnemonic text may arrive in a different
/// Unicode normalization form than the wordlist's stored one.
pub fn normalize_mnemonic<S: AsRef<str>>(mnemonic: &[S]) -> Vec<String> {
    mnemonic.iter().map(|word| word.as_ref().nfkd().collect()).collect()
}

/// Normalizes and fully decodes `mnemonic`, discarding the recovered
/// entropy. Any decode failure is the validation failure.
pub fn validate_mnemonic<S: AsRef<str>>(mnemonic: &[S], list: &WordList) -> Result<()> {
    extract_entropy(&normalize_mnemonic(mnemonic), list).map(drop)
}

fn is_valid_mnemonic_length(length: usize) -> bool {
    (MIN_LENGTH..=MAX_LENGTH).contains(&length) && length % LENGTH_DIVISOR == 0
}
