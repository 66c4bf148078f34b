//! Number theory, text conversion and sampling tests.

use proptest::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use vint::{Error, Vint};

fn v(s: &str) -> Vint {
    s.parse().unwrap()
}

const PRIMES_BELOW_1000: [u64; 168] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293,
    307, 311, 313, 317, 331, 337, 347, 349, 353, 359, 367, 373, 379, 383, 389, 397, 401, 409, 419,
    421, 431, 433, 439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503, 509, 521, 523, 541,
    547, 557, 563, 569, 571, 577, 587, 593, 599, 601, 607, 613, 617, 619, 631, 641, 643, 647, 653,
    659, 661, 673, 677, 683, 691, 701, 709, 719, 727, 733, 739, 743, 751, 757, 761, 769, 773, 787,
    797, 809, 811, 821, 823, 827, 829, 839, 853, 857, 859, 863, 877, 881, 883, 887, 907, 911, 919,
    929, 937, 941, 947, 953, 967, 971, 977, 983, 991, 997,
];

#[test]
fn primality_below_1000() {
    for n in 0..1000u64 {
        assert_eq!(
            Vint::from(n).is_prime(),
            PRIMES_BELOW_1000.contains(&n),
            "n = {n}"
        );
    }
}

#[test]
fn primality_vectors() {
    let table = [
        ("65537", true),
        ("449065", false),
        ("488881", false),
        ("512461", false),
        ("18446744073709551629", true),
        ("18446744073709551631", false),
        ("0x10000000000000000000000000000000000000007", true),
        ("0x10000000000000000000000000000000000000009", false),
        ("0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f", true),
        ("0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2d", false),
    ];
    for (n, expected) in table {
        assert_eq!(v(n).is_prime(), expected, "n = {n}");
    }
    assert!(!v("-7").is_prime());
}

#[test]
fn modular_inverse() {
    let m = v("100000000000000000039");
    for i in 1..100i64 {
        let x = Vint::from(i);
        let y = x.inv_mod(&m).unwrap();
        assert_eq!((y * &x) % &m, 1);
    }
    assert_eq!(
        Vint::from(6u64).inv_mod(&Vint::from(9u64)),
        Err(Error::NotInvertible)
    );
    assert_eq!(Vint::from(-3i64).inv_mod(&Vint::from(7u64)).unwrap(), 2);
}

#[test]
fn gcd_lcm() {
    let x = Vint::from(12u64);
    let y = Vint::from(18u64);
    assert_eq!(x.gcd(&y), 6);
    assert_eq!(x.lcm(&y), 36);
    let x = x.lcm(&y);
    assert_eq!(x.lcm(&x), 36);
    assert_eq!(Vint::zero().gcd(&Vint::zero()), 0);
    assert_eq!(Vint::from(-12i64).gcd(&y), 6);
}

#[test]
fn jacobi_symbol() {
    let table = [
        ("0", "1", 1),
        ("1", "1", 1),
        ("123", "1", 1),
        ("45", "77", -1),
        ("60", "121", 1),
        ("12345672342342342342428", "923423423424753211", 1),
        ("12345672342342342342428", "34592342234235424753211", -1),
    ];
    for (m, n, expected) in table {
        assert_eq!(Vint::jacobi(&v(m), &v(n)).unwrap(), expected);
    }
    assert_eq!(
        Vint::jacobi(&Vint::one(), &Vint::from(10u64)),
        Err(Error::InvalidModulus)
    );
}

#[test]
fn text_formats() {
    let table: [(&[u32], &str, &str, &str); 5] = [
        (&[], "0", "0x0", "0b0"),
        (&[12345], "12345", "0x3039", "0b11000000111001"),
        (
            &[0xffff_ffff],
            "4294967295",
            "0xffffffff",
            "0b11111111111111111111111111111111",
        ),
        (
            &[0, 1],
            "4294967296",
            "0x100000000",
            "0b100000000000000000000000000000000",
        ),
        (
            &[0, 0, 0, 0, 1],
            "340282366920938463463374607431768211456",
            "0x100000000000000000000000000000000",
            "0b100000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
        ),
    ];
    for (words, dec, hex, bin) in table {
        let x = Vint::from_u32_limbs(words);
        assert_eq!(x.to_string(), dec);
        assert_eq!(format!("{x:#x}"), hex);
        assert_eq!(format!("{x:#b}"), bin);
        assert_eq!(v(dec), x);
        assert_eq!(v(hex), x);
        assert_eq!(v(bin), x);
    }

    assert_eq!(format!("{:#x}", v("-255")), "-0xff");
    assert_eq!(v("-0xff"), -Vint::from(255u64));
    assert_eq!(v("0XFF"), 255);
    assert_eq!(Vint::from(35u64).to_str_radix(36).unwrap(), "z");
    assert_eq!(Vint::from_str_radix("-zz", 36).unwrap(), -1295);
}

#[test]
fn text_errors() {
    assert_eq!("".parse::<Vint>(), Err(Error::EmptyString));
    assert_eq!("-".parse::<Vint>(), Err(Error::EmptyString));
    assert_eq!("0x".parse::<Vint>(), Err(Error::EmptyString));
    assert_eq!("12a".parse::<Vint>(), Err(Error::InvalidDigit));
    assert_eq!("0b102".parse::<Vint>(), Err(Error::InvalidDigit));
    assert_eq!("--1".parse::<Vint>(), Err(Error::InvalidDigit));
    assert_eq!(Vint::from_str_radix("1", 37), Err(Error::UnsupportedRadix));
}

#[test]
fn whitespace_separated_stream() {
    let x = v("12345678901232342424242423423429922");
    let y = v("-23423423452424242343");
    let s = format!("{x} {y}");
    let parsed: Vec<Vint> = s.split(' ').map(v).collect();
    assert_eq!(parsed, [x, y]);
}

#[test]
fn byte_conversion() {
    let x = v("0x0102030405060708090a");
    assert_eq!(
        x.to_be_bytes(),
        [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
    );
    assert_eq!(Vint::from_be_bytes(&[0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]), x);
    assert_eq!(Vint::zero().to_be_bytes(), [0]);
    assert!(Vint::from_be_bytes(&[]).is_zero());
}

#[test]
fn random_sampling_stays_below_bound() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let bound = v("0x1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab");
    for _ in 0..64 {
        let x = Vint::random_below(&mut rng, &bound).unwrap();
        assert!(!x.is_negative() && x < bound);
    }
    assert!(Vint::random_bits(&mut rng, 70).bit_len() <= 70);
    assert_eq!(
        Vint::random_below(&mut rng, &Vint::zero()),
        Err(Error::InvalidModulus)
    );
}

proptest! {
    #[test]
    fn string_round_trip(a in any::<[u64; 4]>(), neg in any::<bool>()) {
        let mut x = Vint::from_limbs(&a);
        if neg { x = -x; }
        for radix in [2u32, 10, 16] {
            let s = x.to_str_radix(radix).unwrap();
            let y = Vint::from_str_radix(&s, radix).unwrap();
            prop_assert_eq!(y.to_str_radix(radix).unwrap(), s);
            prop_assert_eq!(&y, &x);
        }
        prop_assert_eq!(v(&format!("{x:#x}")), x.clone());
        prop_assert_eq!(v(&format!("{x:#b}")), x.clone());
        prop_assert_eq!(v(&x.to_string()), x);
    }

    #[test]
    fn inverse_times_value_is_one(a in 1u64..u64::MAX) {
        let m = v("0x10000000000000000000000000000000000000007");
        let x = Vint::from(a);
        let y = x.inv_mod(&m).unwrap();
        prop_assert_eq!((y * &x) % &m, Vint::one());
    }
}
