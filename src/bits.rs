//! Arbitrary-precision bit arithmetic over big-endian byte buffers.
//!
//! BIP-39 packs entropy and checksum into a bit stream whose length is
//! never a multiple of 8 (the checksum is `entropy_bitlen / 32` bits),
//! so every intermediate value here carries an explicit logical bit
//! length that is authoritative over the minimal byte encoding. A value
//! is always stored canonically: exactly `ceil(bitlen / 8)` bytes, with
//! the unused most-significant padding bits zero.

/// An unsigned integer of known bit length over a big-endian byte buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitVector {
    bytes: Vec<u8>,
    bitlen: usize,
}

impl BitVector {
    /// The zero-length value.
    pub fn zero() -> Self {
        Self { bytes: Vec::new(), bitlen: 0 }
    }

    /// Interprets `bytes` as a big-endian unsigned integer of logical
    /// length `bitlen`. A short encoding is zero-extended on the left; a
    /// long one is trimmed and its excess high bits masked to zero, so
    /// the result is canonical either way.
    pub fn from_bytes(bytes: &[u8], bitlen: usize) -> Self {
        let bytelen = Self::bytelen(bitlen);
        let mut out = vec![0u8; bytelen];
        if bytes.len() >= bytelen {
            out.copy_from_slice(&bytes[bytes.len() - bytelen..]);
        } else {
            out[bytelen - bytes.len()..].copy_from_slice(bytes);
        }
        if bitlen % 8 != 0 {
            out[0] &= 0xff >> (8 - bitlen % 8);
        }
        Self { bytes: out, bitlen }
    }

    /// Bytes needed to hold `bitlen` bits.
    pub fn bytelen(bitlen: usize) -> usize {
        (bitlen + 7) / 8
    }

    pub fn bitlen(&self) -> usize {
        self.bitlen
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// `self = (self << width) | value`. `value` must fit in `width` bits.
    pub fn append_low(&mut self, width: usize, value: u64) {
        debug_assert!(width >= 64 || value >> width == 0);

        let new_bitlen = self.bitlen + width;
        let out_len = Self::bytelen(new_bitlen);
        let mut out = vec![0u8; out_len];

        // Place each old byte `width` bits higher; one byte lands across
        // at most two output bytes.
        for (i, &b) in self.bytes.iter().rev().enumerate() {
            let bitpos = i * 8 + width;
            let byte_idx = bitpos / 8;
            let shifted = (b as u16) << (bitpos % 8);
            out[out_len - 1 - byte_idx] |= (shifted & 0xff) as u8;
            let high = (shifted >> 8) as u8;
            if high != 0 {
                out[out_len - 2 - byte_idx] |= high;
            }
        }

        let mut v = value;
        for slot in out.iter_mut().rev() {
            if v == 0 {
                break;
            }
            *slot |= (v & 0xff) as u8;
            v >>= 8;
        }

        self.bytes = out;
        self.bitlen = new_bitlen;
    }

    /// Logical right shift by `n` bits.
    pub fn shr(&self, n: usize) -> Self {
        if n >= self.bitlen {
            return Self::zero();
        }
        let new_bitlen = self.bitlen - n;
        let src = &self.bytes[..self.bytes.len() - n / 8];
        let mut out = vec![0u8; src.len()];
        let bit_shift = n % 8;
        if bit_shift == 0 {
            out.copy_from_slice(src);
        } else {
            let mut carry = 0u8;
            for (slot, &b) in out.iter_mut().zip(src) {
                *slot = (b >> bit_shift) | carry;
                carry = b << (8 - bit_shift);
            }
        }
        Self::from_bytes(&out, new_bitlen)
    }

    /// The low `n` bits as a canonical value of bit length `n`.
    pub fn mask_low(&self, n: usize) -> Self {
        debug_assert!(n <= self.bitlen);
        let keep = Self::bytelen(n).min(self.bytes.len());
        Self::from_bytes(&self.bytes[self.bytes.len() - keep..], n)
    }

    /// Re-pads the value to a caller's target bit length by inserting
    /// leading zero bits. The numeric value is unchanged.
    pub fn pad_left(self, bitlen: usize) -> Self {
        debug_assert!(bitlen >= self.bitlen);
        Self::from_bytes(&self.bytes, bitlen)
    }

    /// Numeric value of a vector no wider than 64 bits.
    pub fn to_u64(&self) -> u64 {
        debug_assert!(self.bitlen <= 64);
        self.bytes.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_zero_extends_short_encodings() {
        let v = BitVector::from_bytes(&[0x03], 132);
        assert_eq!(v.bitlen(), 132);
        assert_eq!(v.as_bytes().len(), 17);
        assert_eq!(v.as_bytes()[16], 0x03);
        assert!(v.as_bytes()[..16].iter().all(|&b| b == 0));
    }

    #[test]
    fn from_bytes_masks_excess_high_bits() {
        let v = BitVector::from_bytes(&[0xff, 0xff], 11);
        assert_eq!(v.as_bytes(), &[0x07, 0xff]);
        assert_eq!(v.to_u64(), 0x7ff);
    }

    #[test]
    fn append_low_concatenates_groups() {
        let mut v = BitVector::zero();
        v.append_low(11, 0x7ff);
        v.append_low(11, 0);
        v.append_low(11, 0x2aa);
        assert_eq!(v.bitlen(), 33);
        let expected = (0x7ffu64 << 22) | 0x2aa;
        assert_eq!(v.to_u64(), expected);
    }

    #[test]
    fn append_low_preserves_leading_zero_groups() {
        // A value starting with a zero group must keep its full bit length.
        let mut v = BitVector::zero();
        v.append_low(11, 0);
        v.append_low(11, 42);
        assert_eq!(v.bitlen(), 22);
        assert_eq!(v.as_bytes().len(), 3);
        assert_eq!(v.to_u64(), 42);
    }

    #[test]
    fn shr_discards_low_bits() {
        let mut v = BitVector::zero();
        v.append_low(16, 0xabcd);
        let shifted = v.shr(4);
        assert_eq!(shifted.bitlen(), 12);
        assert_eq!(shifted.to_u64(), 0xabc);
    }

    #[test]
    fn shr_past_bitlen_is_zero() {
        let mut v = BitVector::zero();
        v.append_low(11, 100);
        let shifted = v.shr(11);
        assert_eq!(shifted.bitlen(), 0);
        assert_eq!(shifted.as_bytes(), &[] as &[u8]);
    }

    #[test]
    fn mask_low_keeps_only_low_bits() {
        let mut v = BitVector::zero();
        v.append_low(22, 0x2aaaaa);
        let low = v.mask_low(11);
        assert_eq!(low.bitlen(), 11);
        assert_eq!(low.to_u64(), 0x2aa);
    }

    #[test]
    fn pad_left_keeps_value() {
        let v = BitVector::from_bytes(&[0x01], 8).pad_left(128);
        assert_eq!(v.bitlen(), 128);
        assert_eq!(v.as_bytes().len(), 16);
        assert_eq!(v.as_bytes()[15], 0x01);
    }

    #[test]
    fn shift_roundtrip_across_byte_boundaries() {
        let mut v = BitVector::zero();
        for i in 0..12u64 {
            v.append_low(11, (i * 89) & 0x7ff);
        }
        assert_eq!(v.bitlen(), 132);
        let mut w = v.clone();
        let mut groups = Vec::new();
        for _ in 0..12 {
            groups.push(w.mask_low(11).to_u64());
            w = w.shr(11);
        }
        groups.reverse();
        let expected: Vec<u64> = (0..12).map(|i| (i * 89) & 0x7ff).collect();
        assert_eq!(groups, expected);
    }
}
