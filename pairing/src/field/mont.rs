//! Prime field context in Montgomery representation.

use super::backend::{Backend, Limbs, MAX_LIMBS, Mode, Modulus, Wide};
use crate::{Error, Result};
use rand_core::RngCore;
use subtle::{Choice, ConstantTimeEq, CtOption};
use vint::{LIMB_BITS, Limb, Vint};

/// Arithmetic context of a prime field `Z / pZ`.
///
/// Holds the modulus and its Montgomery constants along with the kernel table
/// selected for its width. Elements of the field ([`Fp`](crate::Fp),
/// [`Fr`](crate::Fr)) borrow this context.
#[derive(Clone, Debug)]
pub struct MontField {
    modulus: Vint,
    m: Modulus,
    /// `R mod p`, the Montgomery form of one.
    one: Limbs,
    /// `R^2 mod p`.
    r2: Limbs,
    p_minus_2: Vint,
    /// `(p + 1) / 4`, a square root exponent when `p = 3 mod 4`.
    sqrt_exp: Vint,
    backend: Backend,
    mode: Mode,
}

impl MontField {
    /// Creates the context for an odd prime modulus.
    ///
    /// Primality is the caller's responsibility; moduli wider than
    /// [`MAX_LIMBS`] limbs are rejected.
    pub fn new(modulus: &Vint, mode: Mode) -> Result<Self> {
        if modulus.is_negative() || modulus.is_even() || *modulus <= Vint::from(3u64) {
            return Err(Error::InvalidParameter("field modulus must be an odd prime above 3"));
        }
        let n = modulus.limbs().len();
        if n > MAX_LIMBS {
            return Err(Error::ModulusTooLarge);
        }

        let r = Vint::one() << (n * LIMB_BITS);
        Ok(Self {
            modulus: modulus.clone(),
            m: Modulus::new(modulus.limbs()),
            one: to_limbs(&(&r % modulus)),
            r2: to_limbs(&((&r * &r) % modulus)),
            p_minus_2: modulus - 2,
            sqrt_exp: (modulus + 1) >> 2,
            backend: Backend::select(mode, n),
            mode,
        })
    }

    /// The modulus.
    pub fn modulus(&self) -> &Vint {
        &self.modulus
    }

    /// Width of the modulus in limbs.
    pub fn limb_count(&self) -> usize {
        self.m.n
    }

    /// Width of the modulus in bits.
    pub fn bit_len(&self) -> usize {
        self.modulus.bit_len()
    }

    /// Backend mode this field was created with.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Name of the selected kernel set.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name
    }

    pub(crate) fn zero(&self) -> Limbs {
        [0; MAX_LIMBS]
    }

    pub(crate) fn one(&self) -> Limbs {
        self.one
    }

    #[inline]
    pub(crate) fn add(&self, x: &Limbs, y: &Limbs) -> Limbs {
        (self.backend.add)(x, y, &self.m)
    }

    #[inline]
    pub(crate) fn sub(&self, x: &Limbs, y: &Limbs) -> Limbs {
        (self.backend.sub)(x, y, &self.m)
    }

    #[inline]
    pub(crate) fn neg(&self, x: &Limbs) -> Limbs {
        self.sub(&self.zero(), x)
    }

    #[inline]
    pub(crate) fn double(&self, x: &Limbs) -> Limbs {
        self.add(x, x)
    }

    /// `x / 2`: add `p` to odd values, then shift.
    pub(crate) fn half(&self, x: &Limbs) -> Limbs {
        let n = self.m.n;
        let mask = (x[0] & 1).wrapping_neg();
        let mut t = [0; MAX_LIMBS + 1];
        let mut carry = 0;
        for i in 0..n {
            (t[i], carry) = vint::limb::adc(x[i], self.m.p[i] & mask, carry);
        }
        t[n] = carry;

        let mut z = [0; MAX_LIMBS];
        for i in 0..n {
            z[i] = (t[i] >> 1) | (t[i + 1] << (LIMB_BITS - 1));
        }
        z
    }

    #[inline]
    pub(crate) fn mul(&self, x: &Limbs, y: &Limbs) -> Limbs {
        self.reduce(&self.mul_pre(x, y))
    }

    #[inline]
    pub(crate) fn square(&self, x: &Limbs) -> Limbs {
        self.mul(x, x)
    }

    #[inline]
    pub(crate) fn mul_pre(&self, x: &Limbs, y: &Limbs) -> Wide {
        (self.backend.mul_pre)(x, y, &self.m)
    }

    #[inline]
    pub(crate) fn reduce(&self, t: &Wide) -> Limbs {
        (self.backend.mont_red)(t, &self.m)
    }

    #[inline]
    pub(crate) fn dbl_add(&self, x: &Wide, y: &Wide) -> Wide {
        (self.backend.dbl_add)(x, y, &self.m)
    }

    #[inline]
    pub(crate) fn dbl_sub(&self, x: &Wide, y: &Wide) -> Wide {
        (self.backend.dbl_sub)(x, y, &self.m)
    }

    /// Montgomery form of `v mod p`, for any sign of `v`.
    pub(crate) fn to_mont(&self, v: &Vint) -> Limbs {
        let mut r = v % &self.modulus;
        if r.is_negative() {
            r += &self.modulus;
        }
        self.mul(&to_limbs(&r), &self.r2)
    }

    pub(crate) fn from_u64(&self, v: u64) -> Limbs {
        self.to_mont(&Vint::from(v))
    }

    /// Canonical integer value of a Montgomery-form element.
    pub(crate) fn from_mont(&self, x: &Limbs) -> Vint {
        let mut w = [0; 2 * MAX_LIMBS];
        w[..MAX_LIMBS].copy_from_slice(x);
        Vint::from_limbs(&self.reduce(&w)[..self.m.n])
    }

    /// `x^e` for `e >= 0`, scanning the bits of `|e|`.
    pub(crate) fn pow(&self, x: &Limbs, e: &Vint) -> Limbs {
        let mut acc = self.one;
        for i in (0..e.bit_len()).rev() {
            acc = self.square(&acc);
            if e.test_bit(i) {
                acc = self.mul(&acc, x);
            }
        }
        acc
    }

    pub(crate) fn invert(&self, x: &Limbs) -> CtOption<Limbs> {
        CtOption::new(self.pow(x, &self.p_minus_2), !self.is_zero(x))
    }

    /// Square root by a single exponentiation, `None` for non-residues.
    ///
    /// Only valid for `p = 3 mod 4`, which every curve base field satisfies.
    pub(crate) fn sqrt(&self, x: &Limbs) -> CtOption<Limbs> {
        debug_assert_eq!(self.modulus.low_limb() & 3, 3);
        let root = self.pow(x, &self.sqrt_exp);
        CtOption::new(root, self.square(&root).ct_eq(x))
    }

    pub(crate) fn is_zero(&self, x: &Limbs) -> Choice {
        x.ct_eq(&self.zero())
    }

    /// Uniform element, sampled by rejection.
    pub(crate) fn random<R: RngCore + ?Sized>(&self, rng: &mut R) -> Limbs {
        loop {
            let mut limbs = [0; MAX_LIMBS];
            for limb in limbs.iter_mut().take(self.m.n) {
                *limb = rng.next_u64();
            }
            let excess = self.m.n * LIMB_BITS - self.bit_len();
            limbs[self.m.n - 1] &= Limb::MAX >> excess;
            if Vint::from_limbs(&limbs) < self.modulus {
                return self.mul(&limbs, &self.r2);
            }
        }
    }
}

/// Copies a non-negative value below `2^(64 * MAX_LIMBS)` into fixed storage.
pub(crate) fn to_limbs(v: &Vint) -> Limbs {
    let mut out = [0; MAX_LIMBS];
    let len = v.limbs().len().min(MAX_LIMBS);
    out[..len].copy_from_slice(&v.limbs()[..len]);
    out
}
