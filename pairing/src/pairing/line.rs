//! Line functions of the Miller loop.
//!
//! A line is stored as three `Fp2` coefficients `(a, b, c)` in an [`Fp6`]
//! before it is evaluated at a G1 point. The point-independent part is what
//! [`Pairing::precompute_g2`](crate::Pairing::precompute_g2) records.

use crate::field::{Fp, Fp6};
use crate::group::G2;

/// Doubles `t` in place and returns the tangent line at the old `t`.
///
/// The line is meant to be evaluated at `(3 xP, -yP)`.
pub(crate) fn dbl_line_without_p<'a>(t: &mut G2<'a>) -> Fp6<'a> {
    let (x, y, z) = (t.x, t.y, t.z);

    let zz = z.square();
    let xy_half = (x * y).half();
    let yy = y.square();
    let yy_zz = zz + yy;

    // 3 b' Z^2
    let t2 = (zz.double() + zz).mul_twist_b();
    let xx = x.square();
    let t3 = t2.double() + t2;

    let x3 = (yy - t3) * xy_half;
    let t3 = (t3 + yy).half();
    let t2_sq = t2.square();
    let y3 = t3.square() - t2_sq.double() - t2_sq;
    let yz2 = (y + z).square() - yy_zz;
    let z3 = yy * yz2;

    t.x = x3;
    t.y = y3;
    t.z = z3;
    Fp6::new(t2 - yy, yz2, xx)
}

/// Replaces `r` with `r + q` and returns the line through them.
///
/// `q` must be affine. The line is meant to be evaluated at `(xP, yP)`.
pub(crate) fn add_line_without_p<'a>(r: &mut G2<'a>, q: &G2<'a>) -> Fp6<'a> {
    let (rx, ry, rz) = (r.x, r.y, r.z);

    let t1 = rx - rz * q.x;
    let t2 = ry - rz * q.y;
    let t1_sq = t1.square();
    let x_t1_sq = t1_sq * rx;
    let t1_cube = t1_sq * t1;
    let t4 = t2.square() * rz + t1_cube - x_t1_sq.double();
    let y3 = t2 * (x_t1_sq - t4) - t1_cube * ry;

    r.x = t1 * t4;
    r.y = y3;
    r.z = t1_cube * rz;
    Fp6::new(t2 * q.x - t1 * q.y, t1, -t2)
}

/// Evaluates a line at an affine G1 point: `(a, b yP, c xP)`.
pub(crate) fn update_line<'a>(l: &Fp6<'a>, p: &(Fp<'a>, Fp<'a>)) -> Fp6<'a> {
    Fp6::new(l.c0, l.c1.mul_fp(&p.1), l.c2.mul_fp(&p.0))
}

/// The point a doubling line is evaluated at.
pub(crate) fn adjusted<'a>(p: &(Fp<'a>, Fp<'a>)) -> (Fp<'a>, Fp<'a>) {
    (p.0.mul_u64(3), -p.1)
}
