//! Hashing to `Fp` and try-and-increment maps onto G1 and G2.

use crate::field::{Fp, Fp2};
use crate::group::{Ec, EcField, G1, G2};
use crate::{CurveConfig, Pairing};
use sha2::{Digest, Sha256, Sha512};
use vint::Vint;

impl Pairing {
    /// Hashes a message to `Fp`: SHA-256 when `p` fits in 256 bits, SHA-512
    /// otherwise, read as a big-endian integer and reduced modulo `p`.
    pub fn hash_to_fp<'a>(&'a self, msg: &[u8]) -> Fp<'a> {
        let digest = if self.config().fp().bit_len() <= 256 {
            Vint::from_be_bytes(&Sha256::digest(msg))
        } else {
            Vint::from_be_bytes(&Sha512::digest(msg))
        };
        Fp::from_vint(self.config(), &digest)
    }

    /// Maps `t` to G1: the first `x >= t` with `x^3 + b` a square gives a
    /// curve point, which is then multiplied by the G1 cofactor.
    ///
    /// Deterministic but not constant time.
    pub fn map_to_g1<'a>(&'a self, t: &Fp<'a>) -> G1<'a> {
        map_to_g1_with(self.config(), t, &self.params().g1_cofactor)
    }

    /// Maps `t` to G2 in the same way as [`Pairing::map_to_g1`], on the
    /// twist and with the G2 cofactor.
    pub fn map_to_g2<'a>(&'a self, t: &Fp2<'a>) -> G2<'a> {
        map_to_g2_with(self.config(), t, &self.params().g2_cofactor)
    }

    /// [`Pairing::hash_to_fp`] followed by [`Pairing::map_to_g1`].
    pub fn hash_and_map_to_g1<'a>(&'a self, msg: &[u8]) -> G1<'a> {
        self.map_to_g1(&self.hash_to_fp(msg))
    }

    /// [`Pairing::hash_to_fp`] embedded in `Fp2`, followed by
    /// [`Pairing::map_to_g2`].
    pub fn hash_and_map_to_g2<'a>(&'a self, msg: &[u8]) -> G2<'a> {
        self.map_to_g2(&Fp2::from_fp(self.hash_to_fp(msg)))
    }
}

pub(crate) fn map_to_g1_with<'a>(cfg: &'a CurveConfig, t: &Fp<'a>, cofactor: &Vint) -> G1<'a> {
    try_and_increment(cfg, *t, |x| x.sqrt().into(), cofactor)
}

pub(crate) fn map_to_g2_with<'a>(cfg: &'a CurveConfig, t: &Fp2<'a>, cofactor: &Vint) -> G2<'a> {
    try_and_increment(cfg, *t, |x| x.sqrt().into(), cofactor)
}

fn try_and_increment<'a, F, S>(cfg: &'a CurveConfig, mut x: F, sqrt: S, cofactor: &Vint) -> Ec<F>
where
    F: EcField<'a>,
    S: Fn(&F) -> Option<F>,
{
    let b = F::curve_b(cfg);
    let one = F::one(cfg);
    let mut tries = 0u32;
    let y = loop {
        if let Some(y) = sqrt(&(x.square() * x + b)) {
            break y;
        }
        x = x + one;
        tries += 1;
    };
    log::trace!("try-and-increment found a point after {tries} increments");

    let point = Ec::new_unchecked(x, y, one);
    if *cofactor == 1 {
        point
    } else {
        point.mul_vint(cofactor)
    }
}

#[cfg(test)]
mod tests {
    use crate::field::{Fp, Fp2};
    use crate::{CurveId, Mode, Pairing};

    #[test]
    fn maps_reproduce_the_generators() {
        for id in [CurveId::Fp254BNb, CurveId::Bls12_381] {
            let e = Pairing::new(id, Mode::Auto).unwrap();
            let cfg = e.config();
            assert_eq!(e.map_to_g1(&Fp::one(cfg)), e.g1_generator(), "{id}");
            assert_eq!(e.map_to_g2(&Fp2::one(cfg)), e.g2_generator(), "{id}");
        }
    }

    #[test]
    fn hashed_points_clear_the_cofactor() {
        let e = Pairing::new(CurveId::Bls12_381, Mode::Auto).unwrap();
        let t = e.hash_to_fp(b"cofactor");
        assert_eq!(e.hash_and_map_to_g1(b"cofactor"), e.map_to_g1(&t));
        assert_eq!(e.hash_and_map_to_g2(b"cofactor"), e.map_to_g2(&Fp2::from_fp(t)));

        let p = e.hash_and_map_to_g1(b"cofactor");
        let q = e.hash_and_map_to_g2(b"cofactor");
        assert!(bool::from(p.mul_vint(&e.params().r).is_identity()));
        assert!(bool::from(q.mul_vint(&e.params().r).is_identity()));
    }
}
