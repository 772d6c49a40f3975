//! Entropy generation and checksum packing.
//!
//! A checksum is the top `bitlen / 32` bits of SHA-256 over the raw
//! entropy, appended below the entropy bits. The combined length
//! (132, 165, 198, 231 or 264 bits) is always divisible by 11, which is
//! what makes the word-group extraction in [`crate::mnemonic`] exact.

use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::bits::BitVector;
use crate::error::{Bip39Error, Result};

/// Minimum entropy bit length allowed by BIP-39.
pub const MIN_BITLEN: usize = 128;
/// Maximum entropy bit length allowed by BIP-39.
pub const MAX_BITLEN: usize = 256;
/// Entropy bitlen divisor; `bitlen / 32` is the checksum bit length.
pub const BITLEN_DIVISOR: usize = 32;
/// Width of one word group in the checksummed bit stream.
pub const GROUP_BITLEN: usize = 11;

/// Generates new random entropy of `bitlen` bits from the OS
/// cryptographic RNG. RNG failure is propagated, never retried.
pub fn new_entropy(bitlen: usize) -> Result<Entropy> {
    if !is_valid_bitlen(bitlen) {
        return Err(Bip39Error::InvalidEntropyBitlen(bitlen));
    }

    let mut bytes = vec![0u8; bitlen / 8];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(Entropy(bytes))
}

/// Raw entropy of a legal BIP-39 bit length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entropy(Vec<u8>);

impl Entropy {
    /// Wraps caller-supplied entropy, gating the bit length the same way
    /// [`new_entropy`] does.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let bitlen = bytes.len() * 8;
        if !is_valid_bitlen(bitlen) {
            return Err(Bip39Error::InvalidEntropyBitlen(bitlen));
        }
        Ok(Self(bytes))
    }

    pub fn bitlen(&self) -> usize {
        self.0.len() * 8
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Packs the checksum below the entropy bits.
    pub fn add_checksum(&self) -> ChecksumEntropy {
        let checksum_bitlen = self.bitlen() / BITLEN_DIVISOR;
        let digest = Sha256::digest(&self.0);
        let checksum = digest[0] >> (8 - checksum_bitlen);

        let mut bits = BitVector::from_bytes(&self.0, self.bitlen());
        bits.append_low(checksum_bitlen, checksum as u64);
        ChecksumEntropy(bits)
    }

    /// Recomputes the checksum over this entropy and compares it against
    /// `checksum` as equal-length bit vectors. Comparing raw buffers of
    /// different padded lengths would accept mismatches; both sides are
    /// canonicalized to `checksum_bitlen` bits first.
    pub fn is_valid_checksum(&self, checksum: &Checksum) -> bool {
        let checksum_bitlen = self.bitlen() / BITLEN_DIVISOR;
        if checksum.bitlen() != checksum_bitlen {
            return false;
        }
        let digest = Sha256::digest(&self.0);
        let expected = digest[0] >> (8 - checksum_bitlen);
        BitVector::from_bytes(&[expected], checksum_bitlen) == checksum.0
    }
}

/// Entropy with its checksum packed below it. Bit length is tracked
/// explicitly; the byte representation is left-padded to the ceiling
/// byte count with zero high bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumEntropy(BitVector);

impl ChecksumEntropy {
    /// Reassembles checksummed entropy from decoded word-index bits.
    pub(crate) fn from_bits(bits: BitVector) -> Result<Self> {
        let entropy_bitlen = bits.bitlen() * BITLEN_DIVISOR / (BITLEN_DIVISOR + 1);
        if bits.bitlen() % GROUP_BITLEN != 0 || !is_valid_bitlen(entropy_bitlen) {
            // The public decode path gates word count before building
            // bits, so this is unreachable from there.
            return Err(Bip39Error::InvalidMnemonicLength(bits.bitlen() / GROUP_BITLEN));
        }
        Ok(Self(bits))
    }

    pub fn bitlen(&self) -> usize {
        self.0.bitlen()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub(crate) fn into_bits(self) -> BitVector {
        self.0
    }

    /// Splits back into the entropy and the checksum packed below it.
    pub fn remove_checksum(&self) -> (Entropy, Checksum) {
        let entropy_bitlen = self.bitlen() * BITLEN_DIVISOR / (BITLEN_DIVISOR + 1);
        let checksum_bitlen = self.bitlen() - entropy_bitlen;

        let entropy = self.0.shr(checksum_bitlen).pad_left(entropy_bitlen);
        let checksum = self.0.mask_low(checksum_bitlen);
        (Entropy(entropy.into_bytes()), Checksum(checksum))
    }
}

/// Checksum bits recovered from a [`ChecksumEntropy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksum(BitVector);

impl Checksum {
    pub fn bitlen(&self) -> usize {
        self.0.bitlen()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

fn is_valid_bitlen(bitlen: usize) -> bool {
    (MIN_BITLEN..=MAX_BITLEN).contains(&bitlen) && bitlen % BITLEN_DIVISOR == 0
}
