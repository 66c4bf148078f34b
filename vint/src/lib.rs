#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod limb;

mod arith;
mod error;
mod naf;
mod number;
mod string;

pub use crate::error::{Error, Result};
pub use crate::limb::{LIMB_BITS, Limb};
pub use rand_core;
pub use zeroize;

use alloc::{vec, vec::Vec};
use core::{cmp::Ordering, fmt};
use zeroize::Zeroize;

/// Variable-length signed integer.
///
/// Stored as little-endian [`Limb`]s plus a sign flag. The magnitude never has
/// high zero limbs, zero is a single zero limb, and zero is never negative, so
/// the derived equality and hashing are value comparisons.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Vint {
    mag: Vec<Limb>,
    neg: bool,
}

impl Vint {
    /// Returns zero.
    pub fn zero() -> Self {
        Self {
            mag: vec![0],
            neg: false,
        }
    }

    /// Returns one.
    pub fn one() -> Self {
        Self::from(1u64)
    }

    /// Builds a value from a magnitude and sign, restoring the normal form.
    pub(crate) fn from_parts(mut mag: Vec<Limb>, neg: bool) -> Self {
        while mag.len() > 1 && mag[mag.len() - 1] == 0 {
            mag.pop();
        }
        if mag.is_empty() {
            mag.push(0);
        }
        let neg = neg && !(mag.len() == 1 && mag[0] == 0);
        Self { mag, neg }
    }

    /// Non-negative value from little-endian limbs.
    pub fn from_limbs(limbs: &[Limb]) -> Self {
        Self::from_parts(limbs.to_vec(), false)
    }

    /// Non-negative value from little-endian 32-bit words.
    pub fn from_u32_limbs(words: &[u32]) -> Self {
        let mag = words
            .chunks(2)
            .map(|c| c[0] as Limb | (c.get(1).copied().unwrap_or(0) as Limb) << 32)
            .collect();
        Self::from_parts(mag, false)
    }

    /// Little-endian limbs of the magnitude.
    pub fn limbs(&self) -> &[Limb] {
        &self.mag
    }

    /// Returns `true` if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.mag.len() == 1 && self.mag[0] == 0
    }

    /// Returns `true` if the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.neg
    }

    /// Returns `true` if the magnitude is odd.
    pub fn is_odd(&self) -> bool {
        self.mag[0] & 1 == 1
    }

    /// Returns `true` if the magnitude is even.
    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            mag: self.mag.clone(),
            neg: false,
        }
    }

    /// Number of significant bits of the magnitude. Zero reports one bit.
    pub fn bit_len(&self) -> usize {
        let top = self.mag[self.mag.len() - 1];
        if self.mag.len() == 1 && top == 0 {
            return 1;
        }
        (self.mag.len() - 1) * LIMB_BITS + (LIMB_BITS - top.leading_zeros() as usize)
    }

    /// Returns bit `i` of the magnitude.
    pub fn test_bit(&self, i: usize) -> bool {
        let q = i / LIMB_BITS;
        q < self.mag.len() && (self.mag[q] >> (i % LIMB_BITS)) & 1 == 1
    }

    /// Lowest limb of the magnitude.
    pub fn low_limb(&self) -> Limb {
        self.mag[0]
    }

    /// Magnitude as a `u64`, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        match (self.neg, self.mag.len()) {
            (false, 1) => Some(self.mag[0]),
            _ => None,
        }
    }

    /// Compares magnitudes, ignoring signs.
    pub fn cmp_abs(&self, other: &Self) -> Ordering {
        arith::cmp_mag(&self.mag, &other.mag)
    }
}

impl Default for Vint {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for Vint {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.neg, other.neg) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_abs(other),
            (true, true) => other.cmp_abs(self),
        }
    }
}

impl PartialOrd for Vint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<i64> for Vint {
    fn eq(&self, other: &i64) -> bool {
        *self == Vint::from(*other)
    }
}

impl PartialEq<i32> for Vint {
    fn eq(&self, other: &i32) -> bool {
        *self == Vint::from(*other)
    }
}

impl From<u64> for Vint {
    fn from(v: u64) -> Self {
        Self {
            mag: vec![v],
            neg: false,
        }
    }
}

impl From<i64> for Vint {
    fn from(v: i64) -> Self {
        Self::from_parts(vec![v.unsigned_abs()], v < 0)
    }
}

impl From<u32> for Vint {
    fn from(v: u32) -> Self {
        Self::from(v as u64)
    }
}

impl From<i32> for Vint {
    fn from(v: i32) -> Self {
        Self::from(v as i64)
    }
}

impl From<usize> for Vint {
    fn from(v: usize) -> Self {
        Self::from(v as u64)
    }
}

impl From<u128> for Vint {
    fn from(v: u128) -> Self {
        Self::from_parts(vec![v as Limb, (v >> LIMB_BITS) as Limb], false)
    }
}

impl fmt::Debug for Vint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vint({:#x})", self)
    }
}

impl Zeroize for Vint {
    fn zeroize(&mut self) {
        self.mag.zeroize();
        self.mag.clear();
        self.mag.push(0);
        self.neg.zeroize();
    }
}
