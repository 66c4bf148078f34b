//! Number-theoretic primitives.

use crate::{Error, LIMB_BITS, Limb, Result, Vint};
use alloc::vec::Vec;
use rand_core::RngCore;

/// Odd primes below 1000, used for trial division and as Miller-Rabin bases.
const SMALL_PRIMES: [u16; 167] = [
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293, 307,
    311, 313, 317, 331, 337, 347, 349, 353, 359, 367, 373, 379, 383, 389, 397, 401, 409, 419, 421,
    431, 433, 439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503, 509, 521, 523, 541, 547,
    557, 563, 569, 571, 577, 587, 593, 599, 601, 607, 613, 617, 619, 631, 641, 643, 647, 653, 659,
    661, 673, 677, 683, 691, 701, 709, 719, 727, 733, 739, 743, 751, 757, 761, 769, 773, 787, 797,
    809, 811, 821, 823, 827, 829, 839, 853, 857, 859, 863, 877, 881, 883, 887, 907, 911, 919, 929,
    937, 941, 947, 953, 967, 971, 977, 983, 991, 997,
];

/// Number of Miller-Rabin rounds; the bases are the first odd primes.
const MILLER_RABIN_ROUNDS: usize = 32;

impl Vint {
    /// `self^e`.
    pub fn pow(&self, e: u64) -> Vint {
        let mut acc = Vint::one();
        for i in (0..64 - e.leading_zeros()).rev() {
            acc = &acc * &acc;
            if (e >> i) & 1 == 1 {
                acc = acc * self;
            }
        }
        acc
    }

    /// `self^e` for a non-negative integer `e`.
    pub fn pow_vint(&self, e: &Vint) -> Result<Vint> {
        if e.is_negative() {
            return Err(Error::NegativeExponent);
        }
        let mut acc = Vint::one();
        for i in (0..e.bit_len()).rev() {
            acc = &acc * &acc;
            if e.test_bit(i) {
                acc = acc * self;
            }
        }
        Ok(acc)
    }

    /// `self^e mod m` for `e >= 0` and `m > 0`, as a non-negative residue.
    pub fn pow_mod(&self, e: &Vint, m: &Vint) -> Result<Vint> {
        if e.is_negative() {
            return Err(Error::NegativeExponent);
        }
        let base = self.modulo(m)?;
        let mut acc = Vint::one().modulo(m)?;
        for i in (0..e.bit_len()).rev() {
            acc = (&acc * &acc).modulo(m)?;
            if e.test_bit(i) {
                acc = (acc * &base).modulo(m)?;
            }
        }
        Ok(acc)
    }

    /// Inverse of `self` modulo a positive `m` by the extended Euclidean
    /// algorithm.
    pub fn inv_mod(&self, m: &Vint) -> Result<Vint> {
        let a = self.modulo(m)?;
        let (mut r0, mut r1) = (a, m.clone());
        let (mut s0, mut s1) = (Vint::one(), Vint::zero());
        while !r1.is_zero() {
            let (q, r) = r0.quot_rem(&r1)?;
            let s = &s0 - &(&q * &s1);
            r0 = core::mem::replace(&mut r1, r);
            s0 = core::mem::replace(&mut s1, s);
        }
        if r0 != Vint::one() {
            return Err(Error::NotInvertible);
        }
        s0.modulo(m)
    }

    /// Greatest common divisor of the magnitudes. `gcd(0, 0) == 0`.
    pub fn gcd(&self, other: &Vint) -> Vint {
        let (mut a, mut b) = (self.abs(), other.abs());
        while !b.is_zero() {
            let r = &a % &b;
            a = core::mem::replace(&mut b, r);
        }
        a
    }

    /// Least common multiple of the magnitudes. Zero if either operand is zero.
    pub fn lcm(&self, other: &Vint) -> Vint {
        if self.is_zero() || other.is_zero() {
            return Vint::zero();
        }
        let g = self.gcd(other);
        (self.abs() / g) * other.abs()
    }

    /// Probabilistic primality test: trial division by the primes below 1000
    /// followed by Miller-Rabin with fixed prime bases.
    ///
    /// Negative numbers, zero and one are not prime.
    pub fn is_prime(&self) -> bool {
        if self.is_negative() || self.cmp_abs(&Vint::from(2u64)).is_lt() {
            return false;
        }
        if *self == Vint::from(2u64) {
            return true;
        }
        if self.is_even() {
            return false;
        }
        for &sp in SMALL_PRIMES.iter() {
            let sp = sp as Limb;
            if let Some(v) = self.to_u64() {
                if v == sp {
                    return true;
                }
                if v < sp * sp {
                    return true;
                }
            }
            match self.div_rem_limb(sp) {
                Ok((_, 0)) => return false,
                Ok(_) => {}
                Err(_) => return false,
            }
        }
        self.miller_rabin()
    }

    fn miller_rabin(&self) -> bool {
        let one = Vint::one();
        let n_minus_1 = self - &one;
        let s = trailing_zeros(&n_minus_1);
        let d = &n_minus_1 >> s;

        SMALL_PRIMES.iter().take(MILLER_RABIN_ROUNDS).all(|&a| {
            let a = Vint::from(a as u64);
            let mut x = match a.pow_mod(&d, self) {
                Ok(x) => x,
                Err(_) => return false,
            };
            if x == one || x == n_minus_1 {
                return true;
            }
            for _ in 1..s {
                x = match (&x * &x).modulo(self) {
                    Ok(x) => x,
                    Err(_) => return false,
                };
                if x == n_minus_1 {
                    return true;
                }
                if x == one {
                    return false;
                }
            }
            false
        })
    }

    /// Jacobi symbol `(m / n)` for a positive odd `n`.
    pub fn jacobi(m: &Vint, n: &Vint) -> Result<i32> {
        if n.is_negative() || n.is_zero() || n.is_even() {
            return Err(Error::InvalidModulus);
        }
        let mut a = m.modulo(n)?;
        let mut n = n.clone();
        let mut t = 1;
        while !a.is_zero() {
            let z = trailing_zeros(&a);
            a = &a >> z;
            let n8 = n.low_limb() & 7;
            if z & 1 == 1 && (n8 == 3 || n8 == 5) {
                t = -t;
            }
            // reciprocity
            if a.low_limb() & 3 == 3 && n.low_limb() & 3 == 3 {
                t = -t;
            }
            let r = n.modulo(&a)?;
            n = a;
            a = r;
        }
        Ok(if n == Vint::one() { t } else { 0 })
    }

    /// Bitwise AND of two non-negative values.
    pub fn bit_and(&self, other: &Vint) -> Result<Vint> {
        if self.is_negative() || other.is_negative() {
            return Err(Error::NegativeOperand);
        }
        let mag = self
            .limbs()
            .iter()
            .zip(other.limbs())
            .map(|(a, b)| a & b)
            .collect();
        Ok(Vint::from_parts(mag, false))
    }

    /// Bitwise OR of two non-negative values.
    pub fn bit_or(&self, other: &Vint) -> Result<Vint> {
        if self.is_negative() || other.is_negative() {
            return Err(Error::NegativeOperand);
        }
        let (long, short) = if self.limbs().len() >= other.limbs().len() {
            (self.limbs(), other.limbs())
        } else {
            (other.limbs(), self.limbs())
        };
        let mut mag = long.to_vec();
        for (m, s) in mag.iter_mut().zip(short) {
            *m |= s;
        }
        Ok(Vint::from_parts(mag, false))
    }

    /// Uniformly random value in `[0, 2^bits)`.
    pub fn random_bits<R: RngCore + ?Sized>(rng: &mut R, bits: usize) -> Vint {
        let n = bits.div_ceil(LIMB_BITS);
        let mut mag: Vec<Limb> = (0..n).map(|_| rng.next_u64()).collect();
        let extra = n * LIMB_BITS - bits;
        if extra > 0 {
            if let Some(top) = mag.last_mut() {
                *top >>= extra;
            }
        }
        Vint::from_parts(mag, false)
    }

    /// Uniformly random value in `[0, bound)` by rejection sampling.
    pub fn random_below<R: RngCore + ?Sized>(rng: &mut R, bound: &Vint) -> Result<Vint> {
        if bound.is_negative() || bound.is_zero() {
            return Err(Error::InvalidModulus);
        }
        let bits = bound.bit_len();
        loop {
            let v = Vint::random_bits(rng, bits);
            if v < *bound {
                return Ok(v);
            }
        }
    }
}

/// Number of trailing zero bits of a non-zero magnitude.
fn trailing_zeros(x: &Vint) -> usize {
    let mut count = 0;
    for &l in x.limbs() {
        if l == 0 {
            count += LIMB_BITS;
        } else {
            return count + l.trailing_zeros() as usize;
        }
    }
    count
}
