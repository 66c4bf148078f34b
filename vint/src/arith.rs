//! Signed arithmetic, division and shifts.

use crate::{
    Error, Result, Vint,
    limb::{self, LIMB_BITS, Limb, WideLimb},
};
use alloc::{vec, vec::Vec};
use core::{
    cmp::Ordering,
    ops::{
        Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr,
        ShrAssign, Sub, SubAssign,
    },
};

/// Compares two normalized magnitudes.
pub(crate) fn cmp_mag(x: &[Limb], y: &[Limb]) -> Ordering {
    x.len().cmp(&y.len()).then_with(|| limb::cmp_n(x, y))
}

fn add_mag(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    let (x, y) = if x.len() >= y.len() { (x, y) } else { (y, x) };
    let mut z = vec![0; x.len() + 1];
    let n = y.len();
    let carry = limb::add_n(&mut z[..n], &x[..n], y);
    let top = x.len();
    z[top] = limb::add_1(&mut z[n..top], &x[n..], carry);
    z
}

/// `x - y` for `|x| >= |y|`.
fn sub_mag(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    debug_assert!(cmp_mag(x, y) != Ordering::Less);
    let mut z = vec![0; x.len()];
    let n = y.len();
    let borrow = limb::sub_n(&mut z[..n], &x[..n], y);
    let borrow = limb::sub_1(&mut z[n..], &x[n..], borrow);
    debug_assert_eq!(borrow, 0);
    z
}

fn mul_mag(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    let mut z = vec![0; x.len() + y.len()];
    limb::mul_n(&mut z, x, y);
    z
}

/// Quotient and remainder of magnitudes (Knuth, TAOCP vol. 2, 4.3.1 algorithm D).
fn div_rem_mag(x: &[Limb], y: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    debug_assert!(!limb::is_zero_n(y));
    if cmp_mag(x, y) == Ordering::Less {
        return (vec![0], x.to_vec());
    }
    if y.len() == 1 {
        let mut q = vec![0; x.len()];
        let r = limb::div_1(&mut q, x, y[0]);
        return (q, vec![r]);
    }

    let n = y.len();
    let m = x.len() - n;
    let s = y[n - 1].leading_zeros() as usize;

    // normalize so that the top divisor limb has its high bit set
    let mut v = vec![0; n];
    let mut u = vec![0; x.len() + 1];
    if s > 0 {
        limb::shl_bits(&mut v, y, s);
        u[x.len()] = limb::shl_bits(&mut u[..x.len()], x, s);
    } else {
        v.copy_from_slice(y);
        u[..x.len()].copy_from_slice(x);
    }

    let base = Limb::MAX as WideLimb;
    let vtop = v[n - 1] as WideLimb;
    let vnext = v[n - 2] as WideLimb;
    let mut q = vec![0; m + 1];

    for j in (0..=m).rev() {
        let num = ((u[j + n] as WideLimb) << LIMB_BITS) | u[j + n - 1] as WideLimb;
        let mut qhat = num / vtop;
        let mut rhat = num % vtop;
        while qhat > base || qhat * vnext > ((rhat << LIMB_BITS) | u[j + n - 2] as WideLimb) {
            qhat -= 1;
            rhat += vtop;
            if rhat > base {
                break;
            }
        }

        // u[j..=j+n] -= qhat * v
        let mut borrow: i128 = 0;
        for i in 0..n {
            let p = qhat * v[i] as WideLimb;
            let t = u[i + j] as i128 - borrow - (p & base) as i128;
            u[i + j] = t as Limb;
            borrow = (p >> LIMB_BITS) as i128 - (t >> LIMB_BITS);
        }
        let t = u[j + n] as i128 - borrow;
        u[j + n] = t as Limb;

        if t < 0 {
            qhat -= 1;
            let carry = limb::add_assign_n(&mut u[j..j + n], &v);
            u[j + n] = u[j + n].wrapping_add(carry);
        }
        q[j] = qhat as Limb;
    }

    let mut r = vec![0; n];
    if s > 0 {
        limb::shr_bits(&mut r, &u[..n], s, u[n]);
    } else {
        r.copy_from_slice(&u[..n]);
    }
    (q, r)
}

fn shl_mag(x: &[Limb], bits: usize) -> Vec<Limb> {
    let q = bits / LIMB_BITS;
    let s = bits % LIMB_BITS;
    let mut z = vec![0; x.len() + q + 1];
    if s == 0 {
        z[q..q + x.len()].copy_from_slice(x);
    } else {
        let top = q + x.len();
        z[top] = limb::shl_bits(&mut z[q..top], x, s);
    }
    z
}

fn shr_mag(x: &[Limb], bits: usize) -> Vec<Limb> {
    let q = bits / LIMB_BITS;
    if q >= x.len() {
        return vec![0];
    }
    let s = bits % LIMB_BITS;
    let src = &x[q..];
    let mut z = vec![0; src.len()];
    if s == 0 {
        z.copy_from_slice(src);
    } else {
        limb::shr_bits(&mut z, src, s, 0);
    }
    z
}

fn add_signed(x: &[Limb], xneg: bool, y: &[Limb], yneg: bool) -> Vint {
    if xneg == yneg {
        return Vint::from_parts(add_mag(x, y), xneg);
    }
    match cmp_mag(x, y) {
        Ordering::Less => Vint::from_parts(sub_mag(y, x), yneg),
        _ => Vint::from_parts(sub_mag(x, y), xneg),
    }
}

pub(crate) fn add(x: &Vint, y: &Vint) -> Vint {
    add_signed(&x.mag, x.neg, &y.mag, y.neg)
}

pub(crate) fn sub(x: &Vint, y: &Vint) -> Vint {
    add_signed(&x.mag, x.neg, &y.mag, !y.neg)
}

pub(crate) fn mul(x: &Vint, y: &Vint) -> Vint {
    Vint::from_parts(mul_mag(&x.mag, &y.mag), x.neg != y.neg)
}

fn div_op(x: &Vint, y: &Vint) -> Vint {
    match x.quot_rem(y) {
        Ok((q, _)) => q,
        Err(_) => panic!("attempt to divide by zero"),
    }
}

fn rem_op(x: &Vint, y: &Vint) -> Vint {
    match x.quot_rem(y) {
        Ok((_, r)) => r,
        Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
    }
}

impl Vint {
    /// Truncating division: `self = q * y + r` with `|r| < |y|` and `r`
    /// carrying the sign of `self` (C semantics, `-13 / 5 == -2` rem `-3`).
    pub fn quot_rem(&self, y: &Vint) -> Result<(Vint, Vint)> {
        if y.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (q, r) = div_rem_mag(&self.mag, &y.mag);
        Ok((
            Vint::from_parts(q, self.neg != y.neg),
            Vint::from_parts(r, self.neg),
        ))
    }

    /// Floored division: the remainder takes the sign of the divisor
    /// (`-13 / 5 == -3` rem `2`).
    pub fn div_mod_floor(&self, y: &Vint) -> Result<(Vint, Vint)> {
        let (q, r) = self.quot_rem(y)?;
        if !r.is_zero() && r.neg != y.neg {
            Ok((q - 1, r + y))
        } else {
            Ok((q, r))
        }
    }

    /// Truncating quotient.
    pub fn checked_div(&self, y: &Vint) -> Result<Vint> {
        self.quot_rem(y).map(|(q, _)| q)
    }

    /// Truncating remainder, with the sign of `self`.
    pub fn checked_rem(&self, y: &Vint) -> Result<Vint> {
        self.quot_rem(y).map(|(_, r)| r)
    }

    /// Non-negative residue of `self` modulo a positive `m`.
    pub fn modulo(&self, m: &Vint) -> Result<Vint> {
        if m.neg || m.is_zero() {
            return Err(Error::InvalidModulus);
        }
        let r = self.checked_rem(m)?;
        Ok(if r.neg { r + m } else { r })
    }

    /// Divides the magnitude by a single limb.
    ///
    /// The quotient is truncated and carries the sign of `self`; the returned
    /// remainder is that of the magnitude.
    pub fn div_rem_limb(&self, d: Limb) -> Result<(Vint, Limb)> {
        if d == 0 {
            return Err(Error::DivisionByZero);
        }
        let mut q = vec![0; self.mag.len()];
        let r = limb::div_1(&mut q, &self.mag, d);
        Ok((Vint::from_parts(q, self.neg), r))
    }
}

fn shl(x: &Vint, bits: usize) -> Vint {
    Vint::from_parts(shl_mag(&x.mag, bits), x.neg)
}

/// Shifts the magnitude and keeps the sign, truncating toward zero.
fn shr(x: &Vint, bits: usize) -> Vint {
    Vint::from_parts(shr_mag(&x.mag, bits), x.neg)
}

macro_rules! impl_binop {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $func:path) => {
        impl $op<&Vint> for &Vint {
            type Output = Vint;

            fn $op_fn(self, rhs: &Vint) -> Vint {
                $func(self, rhs)
            }
        }

        impl $op<Vint> for &Vint {
            type Output = Vint;

            fn $op_fn(self, rhs: Vint) -> Vint {
                $func(self, &rhs)
            }
        }

        impl $op<&Vint> for Vint {
            type Output = Vint;

            fn $op_fn(self, rhs: &Vint) -> Vint {
                $func(&self, rhs)
            }
        }

        impl $op<Vint> for Vint {
            type Output = Vint;

            fn $op_fn(self, rhs: Vint) -> Vint {
                $func(&self, &rhs)
            }
        }

        impl $op<i64> for &Vint {
            type Output = Vint;

            fn $op_fn(self, rhs: i64) -> Vint {
                $func(self, &Vint::from(rhs))
            }
        }

        impl $op<i64> for Vint {
            type Output = Vint;

            fn $op_fn(self, rhs: i64) -> Vint {
                $func(&self, &Vint::from(rhs))
            }
        }

        impl $assign<&Vint> for Vint {
            fn $assign_fn(&mut self, rhs: &Vint) {
                *self = $func(self, rhs);
            }
        }

        impl $assign<Vint> for Vint {
            fn $assign_fn(&mut self, rhs: Vint) {
                *self = $func(self, &rhs);
            }
        }

        impl $assign<i64> for Vint {
            fn $assign_fn(&mut self, rhs: i64) {
                *self = $func(self, &Vint::from(rhs));
            }
        }
    };
}

impl_binop!(Add, add, AddAssign, add_assign, add);
impl_binop!(Sub, sub, SubAssign, sub_assign, sub);
impl_binop!(Mul, mul, MulAssign, mul_assign, mul);
impl_binop!(Div, div, DivAssign, div_assign, div_op);
impl_binop!(Rem, rem, RemAssign, rem_assign, rem_op);

impl Neg for Vint {
    type Output = Vint;

    fn neg(self) -> Vint {
        let neg = !self.neg;
        Vint::from_parts(self.mag, neg)
    }
}

impl Neg for &Vint {
    type Output = Vint;

    fn neg(self) -> Vint {
        -self.clone()
    }
}

impl Shl<usize> for &Vint {
    type Output = Vint;

    fn shl(self, bits: usize) -> Vint {
        shl(self, bits)
    }
}

impl Shl<usize> for Vint {
    type Output = Vint;

    fn shl(self, bits: usize) -> Vint {
        shl(&self, bits)
    }
}

impl ShlAssign<usize> for Vint {
    fn shl_assign(&mut self, bits: usize) {
        *self = shl(self, bits);
    }
}

impl Shr<usize> for &Vint {
    type Output = Vint;

    fn shr(self, bits: usize) -> Vint {
        shr(self, bits)
    }
}

impl Shr<usize> for Vint {
    type Output = Vint;

    fn shr(self, bits: usize) -> Vint {
        shr(&self, bits)
    }
}

impl ShrAssign<usize> for Vint {
    fn shr_assign(&mut self, bits: usize) {
        *self = shr(self, bits);
    }
}
