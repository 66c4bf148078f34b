//! Multiplication by evaluated lines.
//!
//! An evaluated line `(a, b, c)` embeds into `Fp12` with three non-zero
//! coefficients whose positions depend on the twist:
//! `[a, c, 0, 0, b, 0]` for an M-type twist and `[b, 0, 0, c, a, 0]` for a
//! D-type twist, in [`Fp12::to_flat`] order.

use super::Pairing;
use crate::curve_param::Twist;
use crate::field::{Fp2, Fp6, Fp12};

impl Pairing {
    /// Embeds an evaluated line into `Fp12`.
    pub fn convert_line<'a>(&'a self, l: &Fp6<'a>) -> Fp12<'a> {
        let zero = Fp2::zero(&self.cfg);
        match self.cfg.twist() {
            Twist::M => Fp12::from_flat([l.c0, l.c2, zero, zero, l.c1, zero]),
            Twist::D => Fp12::from_flat([l.c1, zero, zero, l.c2, l.c0, zero]),
        }
    }

    /// Returns `f * l` for an evaluated line `l`.
    pub fn mul_sparse<'a>(&'a self, f: &Fp12<'a>, l: &Fp6<'a>) -> Fp12<'a> {
        match self.cfg.twist() {
            Twist::M => mul_041(f, l),
            Twist::D => mul_403(f, l),
        }
    }

    /// Returns the product of two evaluated lines.
    pub fn mul_sparse2<'a>(&'a self, x: &Fp6<'a>, y: &Fp6<'a>) -> Fp12<'a> {
        self.mul_sparse(&self.convert_line(x), y)
    }
}

/// `f * ((a + c v) + b v w)`.
fn mul_041<'a>(f: &Fp12<'a>, l: &Fp6<'a>) -> Fp12<'a> {
    let (a, b, c) = (&l.c0, &l.c1, &l.c2);
    let (z0, z1) = (&f.c0, &f.c1);

    // z1 * b v
    let z1b = Fp6::new((z1.c2 * b).mul_xi(), z1.c0 * b, z1.c1 * b);
    let z0x0 = z0.mul_01(a, c);
    let t0 = (z0 + z1).mul_01(a, &(b + c));

    Fp12::new(z0x0 + z1b.mul_v(), t0 - z0x0 - z1b)
}

/// `f * (b + (c + a v) w)`.
fn mul_403<'a>(f: &Fp12<'a>, l: &Fp6<'a>) -> Fp12<'a> {
    let (a, b, c) = (&l.c0, &l.c1, &l.c2);
    let (z0, z1) = (&f.c0, &f.c1);

    let z0b = z0.mul_fp2(b);
    let z1x1 = z1.mul_01(c, a);
    let t0 = (z0 + z1).mul_01(&(b + c), a);

    Fp12::new(z0b + z1x1.mul_v(), t0 - z0b - z1x1)
}

#[cfg(test)]
mod tests {
    use crate::field::{Fp2, Fp6, Fp12};
    use crate::{CurveId, Mode, Pairing};
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    #[test]
    fn sparse_products_match_full_multiplication() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        // one M-type and one D-type curve
        for id in [CurveId::Bls12_381, CurveId::Fp254BNb] {
            let e = Pairing::new(id, Mode::Auto).unwrap();
            let cfg = e.config();
            let f = Fp12::new(
                Fp6::new(
                    Fp2::random(cfg, &mut rng),
                    Fp2::random(cfg, &mut rng),
                    Fp2::random(cfg, &mut rng),
                ),
                Fp6::new(
                    Fp2::random(cfg, &mut rng),
                    Fp2::random(cfg, &mut rng),
                    Fp2::random(cfg, &mut rng),
                ),
            );
            let l = Fp6::new(
                Fp2::random(cfg, &mut rng),
                Fp2::random(cfg, &mut rng),
                Fp2::random(cfg, &mut rng),
            );
            let m = Fp6::new(
                Fp2::random(cfg, &mut rng),
                Fp2::random(cfg, &mut rng),
                Fp2::random(cfg, &mut rng),
            );

            assert_eq!(e.mul_sparse(&f, &l), f * e.convert_line(&l));
            assert_eq!(
                e.mul_sparse2(&l, &m),
                e.convert_line(&l) * e.convert_line(&m)
            );
        }
    }
}
