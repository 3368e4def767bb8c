use posit::{from_bits, from_double, mul, posit16, PositContext};

/// `size`-bit two's complement, reimplemented locally since `posit::bits` is
/// a private module and this file is compiled as a separate crate.
fn twos_complement(bits: u128, size: usize) -> u128 {
    let mask = if size >= 128 { u128::MAX } else { (1u128 << size) - 1 };
    (!bits).wrapping_add(1) & mask
}

#[test]
fn round_trip_every_8_bit_word_for_every_es() {
    for es in 0..8 {
        for word in 0u128..256 {
            let p = from_bits(word, 8, es).unwrap();
            assert_eq!(p.bit_repr(), word, "es={es} word={word:#04x}");
        }
    }
}

#[test]
fn round_trip_every_16_bit_word_at_es1() {
    for word in 0u128..(1 << 16) {
        let p = from_bits(word, 16, 1).unwrap();
        assert_eq!(p.bit_repr(), word);
    }
}

#[test]
fn sign_symmetry_of_eval() {
    for es in 0..3 {
        for word in 1u128..256 {
            let p = from_bits(word, 8, es).unwrap();
            if p.is_special() {
                continue;
            }
            let negated = from_bits((1u128 << 8) - word, 8, es).unwrap();
            assert_eq!(p.eval(), -negated.eval(), "es={es} word={word:#04x}");
        }
    }
}

#[test]
fn sign_symmetry_of_from_double() {
    // spec.md §8's sign-symmetry law stated directly on bit patterns,
    // checked for all of `N ∈ {8, 16, 32}`: from_double(-x) must be the
    // two's complement of from_double(x), not merely eval()-equal to its
    // negation.
    let samples = [1.0, 0.5, 2.0, 3.1, 7.25, 0.001, 100.0, 1e10, 1e-10];
    for &(size, es) in &[(8usize, 0usize), (8, 2), (16, 1), (16, 3), (32, 2)] {
        for &x in &samples {
            let p = from_double(x, size, es).unwrap();
            let n = from_double(-x, size, es).unwrap();
            assert_eq!(
                n.bit_repr(),
                twos_complement(p.bit_repr(), size),
                "size={size} es={es} x={x}"
            );
        }
    }
}

#[test]
fn round_trip_spot_checks_at_32_bits() {
    // exhaustive round-trip loops only run at N in {8, 16}; N=32 gets spot
    // checks instead, per spec.md §8, including the regime-saturation
    // boundary words where the unary regime run consumes the whole field.
    let es = 2usize;
    let size = 32usize;
    let words = [
        0u128,
        1,
        2,
        (1u128 << 31) - 1,
        1u128 << 31,
        (1u128 << 31) + 1,
        (1u128 << 32) - 1,
        0x7FFF_FFFF,
        0x8000_0001,
        0xAAAA_AAAA,
        0x5555_5555,
    ];
    for &word in &words {
        let p = from_bits(word, size, es).unwrap();
        assert_eq!(p.bit_repr(), word, "word={word:#010x}");
    }
}

#[test]
fn regime_saturation_boundary_at_32_bits() {
    // a magnitude far beyond the format's dynamic range saturates the
    // regime to its maximum run length; the result must still decode to a
    // finite, correctly-signed value rather than panicking or wrapping.
    let size = 32usize;
    let es = 2usize;
    let huge = from_double(1e300, size, es).unwrap();
    assert!(!huge.is_special());
    assert!(huge.eval().is_finite());
    assert!(huge.eval() > 0.0);

    let tiny = from_double(1e-300, size, es).unwrap();
    assert!(!tiny.is_special());
    assert!(tiny.eval().is_finite());
    assert!(tiny.eval() > 0.0);

    let neg_huge = from_double(-1e300, size, es).unwrap();
    assert_eq!(neg_huge.bit_repr(), twos_complement(huge.bit_repr(), size));
}

#[test]
fn from_double_round_trips_through_bit_repr() {
    for &x in &[0.0, 1.0, -1.0, 0.5, 2.0, 3.1, -3.1, 100.0, -0.001] {
        let p = from_double(x, 16, 1).unwrap();
        let q = from_bits(p.bit_repr(), 16, 1).unwrap();
        assert_eq!(p, q);
    }
}

#[test]
fn one_is_the_fixed_point_of_self_multiplication() {
    let one = from_double(1.0, 16, 1).unwrap();
    assert_eq!(mul(&one, &one).bit_repr(), one.bit_repr());
}

#[test]
fn multiplication_is_commutative_on_a_16_bit_sample() {
    let samples = [0.5, -0.5, 2.0, -2.0, 7.25, -7.25, 0.001, -100.0];
    for &a in &samples {
        for &b in &samples {
            let pa = from_double(a, 16, 1).unwrap();
            let pb = from_double(b, 16, 1).unwrap();
            assert_eq!(mul(&pa, &pb).bit_repr(), mul(&pb, &pa).bit_repr());
        }
    }
}

#[test]
fn multiplication_sign_is_the_xor_of_operand_signs() {
    let pos = from_double(3.0, 16, 1).unwrap();
    let neg = from_double(-3.0, 16, 1).unwrap();
    assert!(mul(&pos, &pos).eval() > 0.0);
    assert!(mul(&neg, &neg).eval() > 0.0);
    assert!(mul(&pos, &neg).eval() < 0.0);
}

#[test]
fn concrete_n16_es1_bit_patterns() {
    assert_eq!(from_double(0.0, 16, 1).unwrap().bit_repr(), 0x0000);
    let one = from_double(1.0, 16, 1).unwrap();
    assert_eq!(one.bit_repr(), 0x4000);
    assert_eq!(one.eval(), 1.0);
    let two = from_double(2.0, 16, 1).unwrap();
    assert_eq!(two.bit_repr(), 0x5000);
    assert_eq!(two.eval(), 2.0);
    assert_eq!(from_double(-1.0, 16, 1).unwrap().bit_repr(), 0xC000);
    assert_eq!(from_bits(0x3000, 16, 1).unwrap().eval(), 0.5);
}

#[test]
fn concrete_n16_es1_scenarios() {
    // zero and NaR are their own fixed points under multiplication.
    let zero = from_bits(0, 16, 1).unwrap();
    let nar = from_bits(1 << 15, 16, 1).unwrap();
    assert!(mul(&zero, &zero).is_special());
    assert_eq!(mul(&zero, &zero).eval(), 0.0);
    assert!(mul(&nar, &nar).is_special());
    assert_eq!(mul(&nar, &nar).eval(), f64::INFINITY);

    // zero times a finite value is zero, signed NaR otherwise.
    let x = from_double(5.0, 16, 1).unwrap();
    assert_eq!(mul(&zero, &x).bit_repr(), 0);
    assert_eq!(mul(&nar, &x).bit_repr(), 1 << 15);

    // the largest finite magnitude stays bounded (or saturates to NaR)
    // under squaring.
    let ctx = PositContext::new(16, 1).unwrap();
    let maxval = ctx.maxval();
    let squared_max = mul(&maxval, &maxval);
    assert!(squared_max.eval().abs() <= maxval.eval().abs() || squared_max.eval().is_infinite());

    // the posit16 preset agrees with a direct from_double call.
    assert_eq!(posit16(1.5).unwrap(), from_double(1.5, 16, 1).unwrap());
}

#[test]
fn squaring_a_randomized_f64_sample_is_deterministic_and_reencodable() {
    // Grounded on the hardware cross-check in the original controller's
    // test harness (`mu * mu` against a DUT): with no hardware to compare
    // against here, this instead checks the oracle's own determinism and
    // re-encodability, which is the property the hardware test actually
    // depends on this library providing.
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    let mut next_f64 = || {
        state ^= state >> 12;
        state ^= state << 25;
        state ^= state >> 27;
        let r = state.wrapping_mul(0x2545_F491_4F6C_DD1D);
        let unit = (r >> 11) as f64 / (1u64 << 53) as f64;
        unit * 20.0 - 10.0
    };

    for _ in 0..200 {
        let x = next_f64();
        let p = from_double(x, 16, 1).unwrap();
        let squared_a = mul(&p, &p);
        let squared_b = mul(&p, &p);
        assert_eq!(squared_a.bit_repr(), squared_b.bit_repr(), "mul is not deterministic for x={x}");

        let reencoded = from_bits(squared_a.bit_repr(), 16, 1).unwrap();
        assert_eq!(squared_a, reencoded);
    }
}
