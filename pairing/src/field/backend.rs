//! Montgomery limb kernels and the per-field backend table.
//!
//! Every kernel exists in two shapes: a fixed-width instance for moduli of
//! exactly 4, 6 or 8 limbs, and a generic instance that reads the limb count
//! at runtime. A [`Backend`] bundles one set of kernels and is selected once
//! when a field is created.

use vint::limb::{Limb, adc, mac, sbb};

/// Largest supported modulus width, in limbs.
pub const MAX_LIMBS: usize = 8;

/// Single-width field element storage. Limbs at and above the modulus width
/// are always zero.
pub(crate) type Limbs = [Limb; MAX_LIMBS];

/// Double-width storage for unreduced products.
pub(crate) type Wide = [Limb; 2 * MAX_LIMBS];

/// Limb backend selection.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Mode {
    /// Fixed-width kernels for 4, 6 and 8 limb moduli, generic kernels for
    /// every other width.
    #[default]
    Auto,

    /// Generic kernels for every modulus width.
    Generic,
}

/// Modulus data the kernels operate on.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Modulus {
    /// Little-endian modulus limbs.
    pub(crate) p: Limbs,

    /// Number of significant limbs.
    pub(crate) n: usize,

    /// `-p^-1 mod 2^64`.
    pub(crate) rp: Limb,
}

impl Modulus {
    pub(crate) fn new(p: &[Limb]) -> Self {
        let mut limbs = [0; MAX_LIMBS];
        limbs[..p.len()].copy_from_slice(p);
        Self {
            p: limbs,
            n: p.len(),
            rp: neg_inv(p[0]),
        }
    }
}

/// `-x^-1 mod 2^64` for odd `x`, by Newton iteration.
const fn neg_inv(x: Limb) -> Limb {
    let mut inv: Limb = 1;
    let mut i = 0;
    while i < 6 {
        inv = inv.wrapping_mul(2u64.wrapping_sub(x.wrapping_mul(inv)));
        i += 1;
    }
    inv.wrapping_neg()
}

pub(crate) type AddFn = fn(&Limbs, &Limbs, &Modulus) -> Limbs;
pub(crate) type MulPreFn = fn(&Limbs, &Limbs, &Modulus) -> Wide;
pub(crate) type MontRedFn = fn(&Wide, &Modulus) -> Limbs;
pub(crate) type DblFn = fn(&Wide, &Wide, &Modulus) -> Wide;

/// Kernel table for one field.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Backend {
    pub(crate) name: &'static str,
    pub(crate) add: AddFn,
    pub(crate) sub: AddFn,
    pub(crate) mul_pre: MulPreFn,
    pub(crate) mont_red: MontRedFn,
    pub(crate) dbl_add: DblFn,
    pub(crate) dbl_sub: DblFn,
}

impl Backend {
    /// Picks the kernel set for a modulus of `n` limbs.
    pub(crate) fn select(mode: Mode, n: usize) -> Self {
        match (mode, n) {
            (Mode::Auto, 4) => Self::fixed::<4>("fixed-4"),
            (Mode::Auto, 6) => Self::fixed::<6>("fixed-6"),
            (Mode::Auto, 8) => Self::fixed::<8>("fixed-8"),
            _ => Self::generic(),
        }
    }

    fn fixed<const N: usize>(name: &'static str) -> Self {
        Self {
            name,
            add: |x, y, m| add_impl(x, y, m, N),
            sub: |x, y, m| sub_impl(x, y, m, N),
            mul_pre: |x, y, _| mul_pre_impl(x, y, N),
            mont_red: |t, m| mont_red_impl(t, m, N),
            dbl_add: |x, y, m| dbl_add_impl(x, y, m, N),
            dbl_sub: |x, y, m| dbl_sub_impl(x, y, m, N),
        }
    }

    fn generic() -> Self {
        Self {
            name: "generic",
            add: |x, y, m| add_impl(x, y, m, m.n),
            sub: |x, y, m| sub_impl(x, y, m, m.n),
            mul_pre: |x, y, m| mul_pre_impl(x, y, m.n),
            mont_red: |t, m| mont_red_impl(t, m, m.n),
            dbl_add: |x, y, m| dbl_add_impl(x, y, m, m.n),
            dbl_sub: |x, y, m| dbl_sub_impl(x, y, m, m.n),
        }
    }
}

/// Selects `a` where `mask` is all ones and `b` where it is zero.
#[inline(always)]
fn select(a: Limb, b: Limb, mask: Limb) -> Limb {
    (a & mask) | (b & !mask)
}

/// `x + y mod p`.
#[inline(always)]
fn add_impl(x: &Limbs, y: &Limbs, m: &Modulus, n: usize) -> Limbs {
    let mut z = [0; MAX_LIMBS];
    let mut carry = 0;
    for i in 0..n {
        (z[i], carry) = adc(x[i], y[i], carry);
    }

    let mut t = [0; MAX_LIMBS];
    let mut borrow = 0;
    for i in 0..n {
        (t[i], borrow) = sbb(z[i], m.p[i], borrow);
    }

    // keep the unreduced sum only if it did not overflow and is below p
    let keep = (borrow & (carry ^ 1)).wrapping_neg();
    for i in 0..n {
        z[i] = select(z[i], t[i], keep);
    }
    z
}

/// `x - y mod p`.
#[inline(always)]
fn sub_impl(x: &Limbs, y: &Limbs, m: &Modulus, n: usize) -> Limbs {
    let mut z = [0; MAX_LIMBS];
    let mut borrow = 0;
    for i in 0..n {
        (z[i], borrow) = sbb(x[i], y[i], borrow);
    }

    let mask = borrow.wrapping_neg();
    let mut carry = 0;
    for i in 0..n {
        (z[i], carry) = adc(z[i], m.p[i] & mask, carry);
    }
    z
}

/// Schoolbook `x * y` without reduction.
#[inline(always)]
fn mul_pre_impl(x: &Limbs, y: &Limbs, n: usize) -> Wide {
    let mut w = [0; 2 * MAX_LIMBS];
    for i in 0..n {
        let mut carry = 0;
        for j in 0..n {
            (w[i + j], carry) = mac(w[i + j], x[i], y[j], carry);
        }
        w[i + n] = carry;
    }
    w
}

/// Montgomery reduction `t * R^-1 mod p` for `t < p * R`.
#[inline(always)]
fn mont_red_impl(t: &Wide, m: &Modulus, n: usize) -> Limbs {
    let mut t = *t;
    let mut hi = 0;
    for i in 0..n {
        let q = t[i].wrapping_mul(m.rp);
        let mut carry = 0;
        for j in 0..n {
            (t[i + j], carry) = mac(t[i + j], q, m.p[j], carry);
        }
        (t[i + n], hi) = adc(t[i + n], carry, hi);
    }

    let mut z = [0; MAX_LIMBS];
    z[..n].copy_from_slice(&t[n..2 * n]);

    let mut s = [0; MAX_LIMBS];
    let mut borrow = 0;
    for i in 0..n {
        (s[i], borrow) = sbb(z[i], m.p[i], borrow);
    }
    let keep = (borrow & (hi ^ 1)).wrapping_neg();
    for i in 0..n {
        z[i] = select(z[i], s[i], keep);
    }
    z
}

/// `x + y mod p * R` on double-width values.
#[inline(always)]
fn dbl_add_impl(x: &Wide, y: &Wide, m: &Modulus, n: usize) -> Wide {
    let mut z = [0; 2 * MAX_LIMBS];
    let mut carry = 0;
    for i in 0..2 * n {
        (z[i], carry) = adc(x[i], y[i], carry);
    }

    // p * R only has limbs in the upper half
    let mut t = [0; MAX_LIMBS];
    let mut borrow = 0;
    for i in 0..n {
        (t[i], borrow) = sbb(z[n + i], m.p[i], borrow);
    }
    let keep = (borrow & (carry ^ 1)).wrapping_neg();
    for i in 0..n {
        z[n + i] = select(z[n + i], t[i], keep);
    }
    z
}

/// `x - y mod p * R` on double-width values.
#[inline(always)]
fn dbl_sub_impl(x: &Wide, y: &Wide, m: &Modulus, n: usize) -> Wide {
    let mut z = [0; 2 * MAX_LIMBS];
    let mut borrow = 0;
    for i in 0..2 * n {
        (z[i], borrow) = sbb(x[i], y[i], borrow);
    }

    let mask = borrow.wrapping_neg();
    let mut carry = 0;
    for i in 0..n {
        (z[n + i], carry) = adc(z[n + i], m.p[i] & mask, carry);
    }
    z
}

#[cfg(test)]
mod tests {
    use super::{Backend, Limbs, MAX_LIMBS, Mode, Modulus, neg_inv};
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;
    use vint::Vint;

    const BN254_P: &str =
        "16798108731015832284940804142231733909889187121439069848933715426072753864723";

    fn to_limbs(v: &Vint) -> Limbs {
        let mut out = [0; MAX_LIMBS];
        out[..v.limbs().len()].copy_from_slice(v.limbs());
        out
    }

    #[test]
    fn montgomery_inverse() {
        for x in [1u64, 3, 0xffff_ffff_ffff_ffff, 0x9ffffcd300000001] {
            assert_eq!(x.wrapping_mul(neg_inv(x)), u64::MAX);
        }
    }

    #[test]
    fn selection() {
        assert_eq!(Backend::select(Mode::Auto, 4).name, "fixed-4");
        assert_eq!(Backend::select(Mode::Auto, 6).name, "fixed-6");
        assert_eq!(Backend::select(Mode::Auto, 8).name, "fixed-8");
        assert_eq!(Backend::select(Mode::Auto, 5).name, "generic");
        assert_eq!(Backend::select(Mode::Generic, 4).name, "generic");
    }

    #[test]
    fn fixed_and_generic_agree() {
        let p: Vint = BN254_P.parse().unwrap();
        let m = Modulus::new(p.limbs());
        let r = Vint::one() << 256;
        let r_inv = r.inv_mod(&p).unwrap();
        let fixed = Backend::select(Mode::Auto, m.n);
        let generic = Backend::select(Mode::Generic, m.n);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for _ in 0..32 {
            let a = Vint::random_below(&mut rng, &p).unwrap();
            let b = Vint::random_below(&mut rng, &p).unwrap();
            let (x, y) = (to_limbs(&a), to_limbs(&b));

            for backend in [fixed, generic] {
                let sum = (backend.add)(&x, &y, &m);
                assert_eq!(Vint::from_limbs(&sum), (&a + &b) % &p);

                let diff = (backend.sub)(&x, &y, &m);
                assert_eq!(Vint::from_limbs(&diff), (&a - &b).modulo(&p).unwrap());

                let prod = (backend.mont_red)(&(backend.mul_pre)(&x, &y, &m), &m);
                assert_eq!(Vint::from_limbs(&prod), (&a * &b * &r_inv) % &p);

                let wa = (backend.mul_pre)(&x, &x, &m);
                let wb = (backend.mul_pre)(&y, &y, &m);
                let pr = &p * &r;
                let s = (backend.dbl_add)(&wa, &wb, &m);
                assert_eq!(Vint::from_limbs(&s), (&a * &a + &b * &b) % &pr);
                let d = (backend.dbl_sub)(&wa, &wb, &m);
                assert_eq!(
                    Vint::from_limbs(&d),
                    (&a * &a - &b * &b).modulo(&pr).unwrap()
                );
            }
        }
    }
}
