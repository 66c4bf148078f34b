//! Signed-digit encodings.

use crate::Vint;
use alloc::vec::Vec;

impl Vint {
    /// Non-adjacent form of `|self|`, most significant digit first.
    ///
    /// Digits are in `{-1, 0, 1}` and no two adjacent digits are non-zero.
    /// Zero encodes as an empty vector.
    pub fn naf(&self) -> Vec<i8> {
        let mut k = self.abs();
        let mut digits = Vec::with_capacity(k.bit_len() + 1);
        while !k.is_zero() {
            let d = if k.is_odd() {
                let d = 2 - (k.low_limb() & 3) as i8;
                k -= d as i64;
                d
            } else {
                0
            };
            digits.push(d);
            k >>= 1;
        }
        digits.reverse();
        digits
    }

    /// Binary digits of `|self|`, most significant first.
    pub fn binary_digits(&self) -> Vec<i8> {
        if self.is_zero() {
            return Vec::new();
        }
        (0..self.bit_len())
            .rev()
            .map(|i| self.test_bit(i) as i8)
            .collect()
    }

    /// Sparsest signed-digit encoding of `|self|`, most significant first.
    ///
    /// Returns the NAF and `true` when it has strictly fewer non-zero digits
    /// than the binary expansion, otherwise the binary digits and `false`.
    pub fn signed_digits(&self) -> (Vec<i8>, bool) {
        let naf = self.naf();
        let bin = self.binary_digits();
        let weight = |v: &[i8]| v.iter().filter(|&&d| d != 0).count();
        if weight(&naf) < weight(&bin) {
            (naf, true)
        } else {
            (bin, false)
        }
    }
}
