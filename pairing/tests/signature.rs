//! BLS-style signatures: `sigma = H(m) sk`, `pk = Q sk`, and the check
//! `e(sigma, Q) == e(H(m), pk)`.

use ate_pairing::{CurveId, Fr, G1, G2, Mode, Pairing};
use proptest::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use std::sync::LazyLock;

const MSG: &[u8] = b"hello pairing";

static ENGINES: LazyLock<[Pairing; 2]> = LazyLock::new(|| {
    [
        Pairing::new(CurveId::Fp254BNb, Mode::Auto).unwrap(),
        Pairing::new(CurveId::Bls12_381, Mode::Auto).unwrap(),
    ]
});

fn sign<'a>(e: &'a Pairing, sk: &Fr<'a>, msg: &[u8]) -> G1<'a> {
    e.hash_and_map_to_g1(msg) * sk
}

fn public_key<'a>(e: &'a Pairing, sk: &Fr<'a>) -> G2<'a> {
    e.g2_generator() * sk
}

fn verify<'a>(e: &'a Pairing, pk: &G2<'a>, msg: &[u8], sig: &G1<'a>) -> bool {
    let q = e.g2_generator();
    e.pairing(sig, &q) == e.pairing(&e.hash_and_map_to_g1(msg), pk)
}

/// Same check as [`verify`] with one dual Miller loop and a single final
/// exponentiation: `e(sigma, -Q) e(H(m), pk) == 1`.
fn verify_dual<'a>(e: &'a Pairing, pk: &G2<'a>, msg: &[u8], sig: &G1<'a>) -> bool {
    let neg_q = e.precompute_g2(&-e.g2_generator());
    let pk = e.precompute_g2(pk);
    let h = e.hash_and_map_to_g1(msg);
    let f = e.precomputed_miller_loop2(sig, &neg_q, &h, &pk).unwrap();
    bool::from(e.final_exp(&f).is_one())
}

#[test]
fn sign_and_verify() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for e in ENGINES.iter() {
        let sk = e.random_scalar(&mut rng);
        let pk = public_key(e, &sk);
        let sig = sign(e, &sk, MSG);

        assert!(verify(e, &pk, MSG, &sig));
        assert!(verify_dual(e, &pk, MSG, &sig));
        assert!(!verify(e, &pk, b"other message", &sig));

        let other = public_key(e, &e.random_scalar(&mut rng));
        assert!(!verify(e, &other, MSG, &sig));
    }
}

#[test]
fn aggregate_signatures() {
    let mut rng = ChaCha8Rng::seed_from_u64(43);
    for e in ENGINES.iter() {
        let keys: Vec<Fr<'_>> = (0..3).map(|_| e.random_scalar(&mut rng)).collect();
        let sig = keys
            .iter()
            .map(|sk| sign(e, sk, MSG))
            .fold(G1::identity(e.config()), |acc, s| acc + s);
        let pk = keys
            .iter()
            .map(|sk| public_key(e, sk))
            .fold(G2::identity(e.config()), |acc, p| acc + p);
        assert!(verify(e, &pk, MSG, &sig));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn reject_corrupted_signature(seed in any::<u64>(), tweak in 1u64..1000) {
        let e = &ENGINES[0];
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let sk = e.random_scalar(&mut rng);
        let pk = public_key(e, &sk);
        let sig = sign(e, &sk, MSG);

        // move the signature to a different point of G1
        let bad = sig + e.g1_generator().mul_vint(&tweak.into());
        prop_assert!(!verify(e, &pk, MSG, &bad));
        prop_assert!(!verify_dual(e, &pk, MSG, &bad));
    }
}
