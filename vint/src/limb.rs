//! Limb-level kernels.
//!
//! Carry-propagating operations on single 64-bit words and on equal-length
//! limb slices. Every multi-precision routine in this workspace bottoms out
//! here; output slices never alias inputs.

use core::cmp::Ordering;

/// Single machine word of a multi-precision integer.
pub type Limb = u64;

/// Twice the width of a [`Limb`].
pub type WideLimb = u128;

/// Number of bits in a [`Limb`].
pub const LIMB_BITS: usize = 64;

/// Computes `a + b + carry`, returning the result along with the new carry.
#[inline(always)]
pub const fn adc(a: Limb, b: Limb, carry: Limb) -> (Limb, Limb) {
    let ret = (a as WideLimb) + (b as WideLimb) + (carry as WideLimb);
    (ret as Limb, (ret >> LIMB_BITS) as Limb)
}

/// Computes `a - (b + borrow)`, returning the result along with the new borrow
/// (`0` or `1`).
#[inline(always)]
pub const fn sbb(a: Limb, b: Limb, borrow: Limb) -> (Limb, Limb) {
    let ret = (a as WideLimb).wrapping_sub((b as WideLimb) + (borrow as WideLimb));
    (ret as Limb, (ret >> (2 * LIMB_BITS - 1)) as Limb)
}

/// Computes `a + (b * c) + carry`, returning the result along with the new carry.
#[inline(always)]
pub const fn mac(a: Limb, b: Limb, c: Limb, carry: Limb) -> (Limb, Limb) {
    let ret = (a as WideLimb) + (b as WideLimb) * (c as WideLimb) + (carry as WideLimb);
    (ret as Limb, (ret >> LIMB_BITS) as Limb)
}

/// `z = x + y`, returning the carry out of the top limb.
pub fn add_n(z: &mut [Limb], x: &[Limb], y: &[Limb]) -> Limb {
    debug_assert!(z.len() == x.len() && x.len() == y.len());
    let mut carry = 0;
    for i in 0..z.len() {
        (z[i], carry) = adc(x[i], y[i], carry);
    }
    carry
}

/// `z = x - y`, returning the borrow out of the top limb.
pub fn sub_n(z: &mut [Limb], x: &[Limb], y: &[Limb]) -> Limb {
    debug_assert!(z.len() == x.len() && x.len() == y.len());
    let mut borrow = 0;
    for i in 0..z.len() {
        (z[i], borrow) = sbb(x[i], y[i], borrow);
    }
    borrow
}

/// `z += y`, returning the carry out of the top limb.
pub fn add_assign_n(z: &mut [Limb], y: &[Limb]) -> Limb {
    debug_assert_eq!(z.len(), y.len());
    let mut carry = 0;
    for i in 0..z.len() {
        (z[i], carry) = adc(z[i], y[i], carry);
    }
    carry
}

/// `z = x + y` for a single-limb `y`, returning the carry.
pub fn add_1(z: &mut [Limb], x: &[Limb], y: Limb) -> Limb {
    debug_assert_eq!(z.len(), x.len());
    let mut carry = y;
    for i in 0..z.len() {
        (z[i], carry) = adc(x[i], 0, carry);
    }
    carry
}

/// `z = x - y` for a single-limb `y`, returning the borrow.
pub fn sub_1(z: &mut [Limb], x: &[Limb], y: Limb) -> Limb {
    debug_assert_eq!(z.len(), x.len());
    let mut borrow = 0;
    let mut rhs = y;
    for i in 0..z.len() {
        (z[i], borrow) = sbb(x[i], rhs, borrow);
        rhs = 0;
    }
    borrow
}

/// `z = x * y`, returning the high limb of the product.
pub fn mul_1(z: &mut [Limb], x: &[Limb], y: Limb) -> Limb {
    debug_assert_eq!(z.len(), x.len());
    let mut carry = 0;
    for i in 0..z.len() {
        (z[i], carry) = mac(0, x[i], y, carry);
    }
    carry
}

/// `z += x * y`, returning the carry out of the top limb.
pub fn addmul_1(z: &mut [Limb], x: &[Limb], y: Limb) -> Limb {
    debug_assert_eq!(z.len(), x.len());
    let mut carry = 0;
    for i in 0..z.len() {
        (z[i], carry) = mac(z[i], x[i], y, carry);
    }
    carry
}

/// Schoolbook product `z = x * y` where `z.len() == x.len() + y.len()`.
pub fn mul_n(z: &mut [Limb], x: &[Limb], y: &[Limb]) {
    debug_assert_eq!(z.len(), x.len() + y.len());
    z.fill(0);
    for (i, &yi) in y.iter().enumerate() {
        let carry = addmul_1(&mut z[i..i + x.len()], x, yi);
        z[i + x.len()] = carry;
    }
}

/// `q = x / d`, returning the remainder. `d` must be non-zero.
pub fn div_1(q: &mut [Limb], x: &[Limb], d: Limb) -> Limb {
    debug_assert_eq!(q.len(), x.len());
    debug_assert_ne!(d, 0);
    let d = d as WideLimb;
    let mut rem: WideLimb = 0;
    for i in (0..x.len()).rev() {
        let num = (rem << LIMB_BITS) | x[i] as WideLimb;
        q[i] = (num / d) as Limb;
        rem = num % d;
    }
    rem as Limb
}

/// `z = x << s` for `0 < s < LIMB_BITS`, returning the bits shifted out.
pub fn shl_bits(z: &mut [Limb], x: &[Limb], s: usize) -> Limb {
    debug_assert_eq!(z.len(), x.len());
    debug_assert!(0 < s && s < LIMB_BITS);
    let mut prev = 0;
    for i in 0..z.len() {
        let v = x[i];
        z[i] = (v << s) | prev;
        prev = v >> (LIMB_BITS - s);
    }
    prev
}

/// `z = x >> s` for `0 < s < LIMB_BITS`, filling the top with `high`'s low bits.
pub fn shr_bits(z: &mut [Limb], x: &[Limb], s: usize, high: Limb) {
    debug_assert_eq!(z.len(), x.len());
    debug_assert!(0 < s && s < LIMB_BITS);
    let n = z.len();
    for i in 0..n {
        let next = if i + 1 < n { x[i + 1] } else { high };
        z[i] = (x[i] >> s) | (next << (LIMB_BITS - s));
    }
}

/// Compares two equal-length limb slices as unsigned integers.
pub fn cmp_n(x: &[Limb], y: &[Limb]) -> Ordering {
    debug_assert_eq!(x.len(), y.len());
    for i in (0..x.len()).rev() {
        match x[i].cmp(&y[i]) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Returns `true` when every limb is zero.
pub fn is_zero_n(x: &[Limb]) -> bool {
    x.iter().all(|&v| v == 0)
}
