//! Arithmetic tests.

use proptest::prelude::*;
use vint::{Error, LIMB_BITS, Vint};

fn v(s: &str) -> Vint {
    s.parse().unwrap()
}

fn w(words: &[u32]) -> Vint {
    Vint::from_u32_limbs(words)
}

#[test]
fn add_sub_carry_chains() {
    let m = 0xffff_ffff;
    let table: &[(&[u32], &[u32], &[u32])] = &[
        (&[123], &[456], &[579]),
        (&[m], &[3], &[2, 1]),
        (&[m, 1, m], &[1, 0xffff_fffe], &[0, 0, 0, 1]),
        (&[m, 5, m], &[1, 0xffff_fffe], &[0, 4, 0, 1]),
        (&[m, 5, m], &[1], &[0, 6, m]),
        (&[1, m, 1], &[m, 0, 1], &[0, 0, 3]),
        (&[1], &[m, m, m], &[0, 0, 0, 1]),
        (&[m, m], &[m, m], &[0xffff_fffe, m, 1]),
        (&[m, m, m, m, m], &[m, m, m, m, m], &[0xffff_fffe, m, m, m, m, 1]),
        (&[m; 7], &[m; 7], &[0xffff_fffe, m, m, m, m, m, m, 1]),
        // zero high word on one side
        (&[m; 7], &[m, m, m, m, m, m, m, 0], &[0xffff_fffe, m, m, m, m, m, m, 1]),
        (&[m; 13], &[m; 13], &[0xffff_fffe, m, m, m, m, m, m, m, m, m, m, m, m, 1]),
    ];
    for &(a, b, c) in table {
        let (x, y, z) = (w(a), w(b), w(c));
        assert_eq!(&x + &y, z);
        assert_eq!(&y + &x, z);
        assert_eq!(&z - &x, y);
    }
}

#[test]
fn self_aliased_add_sub() {
    let mut x = w(&[0xffff_ffff, 0xffff_ffff]);
    x = &x + &x;
    assert_eq!(x, w(&[0xffff_fffe, 0xffff_ffff, 1]));
    x -= x.clone();
    assert!(x.is_zero());

    let t0 = w(&[1, 2]);
    let t1 = w(&[3, 4, 5]);
    let t2 = w(&[4, 6, 5]);
    let mut x = t0.clone();
    x += &t1;
    assert_eq!(x, t2);
    let mut y = t1.clone();
    y += &t0;
    assert_eq!(y, t2);
}

#[test]
fn mul_by_single_and_multi_limb() {
    assert_eq!(w(&[12]) * 5, w(&[60]));
    assert_eq!(w(&[1234567]) * w(&[89012345]), w(&[0x27F6EDCF, 0x63F2]));
    assert_eq!(
        w(&[0xffff_ffff, 0xffff_ffff, 0xffff_ffff]) * w(&[0xffff_ffff]),
        w(&[0x0000_0001, 0xffff_ffff, 0xffff_ffff, 0xffff_fffe])
    );
    let x = v("123423424918471928374192874198274981274918274918274918243");
    assert_eq!(&x * &x, x.pow(2));
}

#[test]
fn divide_by_single_limb() {
    let table: &[(&[u32], u64, u64, &[u32])] = &[
        (&[100], 1, 0, &[100]),
        (&[100], 100, 0, &[1]),
        (&[100], 101, 100, &[0]),
        (&[100], 2, 0, &[50]),
        (&[100], 3, 1, &[33]),
        (&[0xffff_ffff, 0xffff_ffff], 1, 0, &[0xffff_ffff, 0xffff_ffff]),
        (&[0xffff_ffff, 0xffff_ffff], 123, 15, &[0x4d0214d0, 0x214d021]),
    ];
    for &(a, d, r, q) in table {
        let (quot, rem) = w(a).div_rem_limb(d).unwrap();
        assert_eq!(quot, w(q));
        assert_eq!(rem, r);
    }
    assert_eq!(Vint::one().div_rem_limb(0), Err(Error::DivisionByZero));
}

#[test]
fn quot_rem_identity() {
    let x = Vint::from(2u64).pow(250);
    let y = Vint::from(250u64);
    let (q, r) = x.quot_rem(&y).unwrap();
    assert_eq!(&q * &y + &r, x);
    assert_eq!(&x / &y, q);
    assert_eq!(&x % &y, r);

    let x = v("12345678901234567890");
    let (q, r) = x.quot_rem(&x).unwrap();
    assert_eq!(q, 1);
    assert!(r.is_zero());
}

#[test]
fn remainder_vectors() {
    let y = "82434016654300679721217353503190038836571781811386228921167322412819029493183";
    let table = [
        (
            "1448106640508192452750709206294683535529268965445799785581837640324321797831381715960812126274894517677713278300997728292641936248881345120394299128611830",
            y,
            "72416512377294697540770834088766459385112079195086911762075702918882982361282",
        ),
        (
            "97086308670107713719105336221824613370040805954034005192338040686500414395543303807941158656814978071549225072789349941064484974666540443679601226744652",
            y,
            "41854959563040430269871677548536437787164514279279911478858426970427834388586",
        ),
        (
            "726838724295606887174238120788791626017347752989142414466410919788841485181240131619880050064495352797213258935807786970844241989010252",
            y,
            "81378967132566843036693176764684783485107373533583677681931133755003929106966",
        ),
        (
            "85319207237201203511459960875801690195851794174784746933408178697267695525099750",
            y,
            "82434016654300679721217353503190038836571781811386228921167322412819029148528",
        ),
        (
            "0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            "0x100000000000000000000000000000000000000000000000001",
            "1606938044258990275541962092341162602522202993782724115824640",
        ),
        (
            "0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            "0x1000000000000000000000000000000000000000000000000000000000000000000000000000000001",
            "34175792574734561318320347298712833833643272357332299899995954578095372295314880347335474659983360",
        ),
        (
            "0xfffffffffffff000000000000000000000000000000000000000000000000000000000000000000",
            "0x100000000000000000000000000000000000000000000000000000000000000000001",
            "7558907585412001237250713901367146624661464598973016020495791084036551510708977665",
        ),
        (
            "0xfffffffffffff000000000000000000000000000000000000000000000000000000000000000000",
            "0xfffffffffffff0000000000000000000000000000000000000000000000000000000000000001",
            "521481209941628322292632858916605385658190900090571826892867289394157573281830188869820088065",
        ),
    ];
    for (x, y, r) in table {
        let mut x = v(x);
        x %= v(y);
        assert_eq!(x, v(r));
    }
}

#[test]
fn signed_division_truncates() {
    // a, b, a+b, a-b, a*b, q, r (truncating), q, r (floored)
    let table: [(i64, i64, i64, i64, i64, i64, i64, i64, i64); 8] = [
        (13, 5, 18, 8, 65, 2, 3, 2, 3),
        (13, -5, 8, 18, -65, -2, 3, -3, -2),
        (-13, 5, -8, -18, -65, -2, -3, -3, 2),
        (-13, -5, -18, -8, 65, 2, -3, 2, -3),
        (5, 13, 18, -8, 65, 0, 5, 0, 5),
        (5, -13, -8, 18, -65, 0, 5, -1, -8),
        (-5, 13, 8, -18, -65, 0, -5, -1, 8),
        (-5, -13, -18, 8, 65, 0, -5, 0, -5),
    ];
    for (a, b, add, sub, mul, q, r, fq, fr) in table {
        let (a, b) = (Vint::from(a), Vint::from(b));
        assert_eq!(&a + &b, add);
        assert_eq!(&a - &b, sub);
        assert_eq!(&a * &b, mul);
        assert_eq!(&a / &b, q);
        assert_eq!(&a % &b, r);
        assert_eq!((&a / &b) * &b + (&a % &b), a);
        let (q2, r2) = a.div_mod_floor(&b).unwrap();
        assert_eq!(q2, fq);
        assert_eq!(r2, fr);
        assert_eq!(q2 * &b + r2, a);
    }

    for (x, y, q) in [("15", "3", "5"), ("15", "-3", "-5"), ("-15", "3", "-5"), ("-15", "-3", "5")] {
        assert_eq!(v(x) / v(y), v(q));
        assert!((v(x) % v(y)).is_zero());
    }
}

#[test]
fn negative_zero() {
    assert_eq!(v("-0") + v("-3"), v("-3"));
    assert_eq!(v("-0") - v("-3"), v("3"));
    assert_eq!(v("-3") + v("-0"), v("-3"));
    assert_eq!(v("3") - v("-0"), v("3"));
    assert_eq!(v("0"), v("-0"));
    assert!(!v("-0").is_negative());

    assert!(v("2") < v("3"));
    assert!(v("-2") < v("3"));
    assert!(v("-5") < v("-3"));
    assert!(v("-0") < v("1"));
    assert!(v("-1") < v("-0"));
    assert!(v("-2") > v("-3"));
    assert!(v("3") > v("-0"));
}

#[test]
fn division_by_zero() {
    let x = Vint::from(7u64);
    assert_eq!(x.quot_rem(&Vint::zero()), Err(Error::DivisionByZero));
    assert_eq!(x.checked_div(&Vint::zero()), Err(Error::DivisionByZero));
    assert_eq!(x.modulo(&Vint::zero()), Err(Error::InvalidModulus));
}

#[test]
#[should_panic(expected = "divide by zero")]
fn division_operator_panics_on_zero() {
    let _ = Vint::one() / Vint::zero();
}

#[test]
fn with_small_ints() {
    let mut x = Vint::from(15u64);
    x += 3;
    assert_eq!(x, 18);
    x -= 2;
    assert_eq!(x, 16);
    x *= 2;
    assert_eq!(x, 32);
    x /= 3;
    assert_eq!(x, 10);
    x = -x;
    assert_eq!(x, -10);
    x += 1;
    assert_eq!(x, -9);
    x -= 2;
    assert_eq!(x, -11);
    x *= 2;
    assert_eq!(x, -22);
    x /= 5;
    assert_eq!(x, -4);
    x = Vint::from(-22i64);
    x %= 5;
    assert_eq!(x, -2);
    x = Vint::from(3u64);
    x += -2;
    assert_eq!(x, 1);
    x += -5;
    assert_eq!(x, -4);
    x -= -7;
    assert_eq!(x, 3);
    x *= -1;
    assert_eq!(x, -3);
    x /= -1;
    assert_eq!(x, 3);
}

#[test]
fn large_cancellation() {
    let x = v("2416089439321382744001761632872637936198961520379024187947524965775137204955564426500438089001375107581766516460437532995850581062940399321788596606850");
    let y = v("2416089439321382743300544243711595219403446085161565705825288050160594425031420687263897209379984490503106207071010949258995096347962762372787916800000");
    let z = v("701217389161042716795515435217458482122236915614542779924143739236540879621390617078660309389426583736855484714977636949000679806850");
    assert_eq!(&x - &y, z);
    assert_eq!(-x + y, -z);
}

#[test]
fn shifts() {
    let x = v("123423424918471928374192874198274981274918274918274918243");
    for i in 0..100usize {
        let s = Vint::from(2u64).pow(i as u64);
        assert_eq!(&x << i, &x * &s);
        assert_eq!(&x >> i, &x / &s);
        let mut y = x.clone();
        y <<= i;
        assert_eq!(y, &x * &s);
    }
    for i in 0..4 {
        let k = i * LIMB_BITS;
        let s = Vint::from(2u64).pow(k as u64);
        assert_eq!(&x << k, &x * &s);
        assert_eq!(&x >> k, &x / &s);
    }
    let mut zero = Vint::zero();
    zero <<= LIMB_BITS;
    assert!(zero.is_zero());

    let table: [(&str, usize, i64, i64); 6] = [
        ("0", 1, 0, 0),
        ("-0", 1, 0, 0),
        ("1", 1, 2, 0),
        ("-1", 1, -2, 0),
        ("12345", 3, 98760, 1543),
        ("-12345", 3, -98760, -1543),
    ];
    for (s, by, shl, shr) in table {
        assert_eq!(v(s) << by, shl);
        assert_eq!(v(s) >> by, shr);
    }
}

#[test]
fn bit_len_and_bits() {
    assert_eq!(Vint::zero().bit_len(), 1);
    assert_eq!((Vint::zero() << 63).bit_len(), 1);
    assert_eq!(Vint::from(1u64).bit_len(), 1);
    assert_eq!(Vint::from(3u64).bit_len(), 2);
    assert_eq!(Vint::from(4u64).bit_len(), 3);

    let mut a = Vint::from(5u64);
    for i in 1..=3 {
        a <<= 100;
        assert_eq!(a.bit_len(), 3 + 100 * i);
    }
    for i in 1..=6 {
        a >>= 50;
        assert_eq!(a.bit_len(), 303 - 50 * i);
    }
    a >>= 100;
    assert!(a.is_zero());

    let a = v("0x1234567890abcdef");
    let bits = [
        1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 0, 0, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0,
        0, 1, 0, 0, 0, 1, 1, 1, 1, 0, 0, 1, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 1, 0, 0,
        1,
    ];
    assert_eq!(a.bit_len(), bits.len());
    for (i, &b) in bits.iter().enumerate() {
        assert_eq!(a.test_bit(i), b == 1);
    }
}

#[test]
fn pow_and_pow_mod() {
    assert_eq!(Vint::from(2u64).pow(3), 8);
    assert_eq!(Vint::from(-2i64).pow(3), -8);
    assert_eq!(
        Vint::from(2u64).pow_vint(&Vint::from(-2i64)),
        Err(Error::NegativeExponent)
    );

    let m = Vint::from(65537u64);
    let x = Vint::from(7u64);
    assert_eq!(x.pow_mod(&Vint::from(20u64), &m).unwrap(), 55277);
    assert_eq!(x.pow_mod(&(&m - 1), &m).unwrap(), 1);
}

#[test]
fn bitwise_and_or() {
    let x = v("1223480928420984209849242");
    let y = v("29348220482094820948208420984209482048204289482");
    assert_eq!(x.bit_and(&y).unwrap(), v("1209221003550923564822922"));
    assert_eq!(
        x.bit_or(&y).unwrap(),
        v("29348220482094820948208435244134352108849315802")
    );
    assert_eq!(v("-2").bit_or(&v("5")), Err(Error::NegativeOperand));
    assert_eq!(v("-2").bit_and(&v("5")), Err(Error::NegativeOperand));
    assert_eq!(Vint::from(8u64).bit_or(&Vint::from(7u64)).unwrap(), 15);
    assert!(Vint::from(8u64).bit_and(&Vint::from(65536u64)).unwrap().is_zero());
}

proptest! {
    #[test]
    fn quot_rem_reconstructs(a in any::<[u64; 5]>(), b in any::<[u64; 3]>(), neg_a in any::<bool>(), neg_b in any::<bool>()) {
        let mut x = Vint::from_limbs(&a);
        let mut y = Vint::from_limbs(&b);
        prop_assume!(!y.is_zero());
        if neg_a { x = -x; }
        if neg_b { y = -y; }
        let (q, r) = x.quot_rem(&y).unwrap();
        prop_assert_eq!(&q * &y + &r, x.clone());
        prop_assert!(r.cmp_abs(&y).is_lt());
        prop_assert!(r.is_zero() || r.is_negative() == x.is_negative());
    }

    #[test]
    fn add_mul_commute(a in any::<[u64; 4]>(), b in any::<[u64; 2]>()) {
        let x = Vint::from_limbs(&a);
        let y = -Vint::from_limbs(&b);
        prop_assert_eq!(&x + &y, &y + &x);
        prop_assert_eq!(&x * &y, &y * &x);
        prop_assert_eq!(&x + &x, &x * 2);
    }

    #[test]
    fn shifts_match_powers_of_two(a in any::<[u64; 3]>(), k in 0usize..300) {
        let x = Vint::from_limbs(&a);
        let p = Vint::from(2u64).pow(k as u64);
        prop_assert_eq!(&x << k, &x * &p);
        prop_assert_eq!(&x >> k, &x / &p);
    }
}
