//! Property-based and unit tests.
//!
//! Mirrors the grounding crate's mix of `#[quickcheck]` properties checked
//! against a native reference type, plus plain `#[test]`s for fixed cases
//! that don't have a natural property form (refcount bookkeeping, the
//! documented `not` quirk, the concrete end-to-end scenarios).

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use crate::*;

/// Small random-length, random-sign `BigInt`s so quickcheck can shrink
/// `BigInt`-typed properties directly, the same role `Arbitrary` plays for
/// the primitive types the grounding crate checks against.
impl Arbitrary for BigInt {
    fn arbitrary(g: &mut Gen) -> Self {
        let v = i64::arbitrary(g) % 1_000_000_000_000i64;
        BigInt::from_i64(v)
    }
}

fn big(v: i64) -> BigInt {
    BigInt::from_i64(v)
}

// ============================================================================
// Round trips
// ============================================================================

#[quickcheck]
fn i64_roundtrip(v: i64) -> bool {
    big(v).to_i64() == Some(v)
}

#[quickcheck]
fn string_roundtrip_base10(v: i64) -> bool {
    let x = big(v);
    BigInt::from_str_radix(&x.to_string_radix(10), 10).unwrap() == x
}

#[quickcheck]
fn string_roundtrip_all_bases(v: i32) -> bool {
    let x = BigInt::from_i32(v);
    (2..=36).all(|base| BigInt::from_str_radix(&x.to_string_radix(base), base).unwrap() == x)
}

// ============================================================================
// Addition
// ============================================================================

#[quickcheck]
fn add_matches_native(a: i64, b: i64) -> bool {
    match a.checked_add(b) {
        Some(expected) => add(&big(a), &big(b)).to_i64() == Some(expected),
        None => true,
    }
}

#[quickcheck]
fn add_commutative(a: i64, b: i64) -> bool {
    add(&big(a), &big(b)) == add(&big(b), &big(a))
}

#[quickcheck]
fn add_associative(a: i32, b: i32, c: i32) -> bool {
    let (a, b, c) = (big(a as i64), big(b as i64), big(c as i64));
    add(&add(&a, &b), &c) == add(&a, &add(&b, &c))
}

#[quickcheck]
fn additive_identity(a: i64) -> bool {
    add(&big(a), &BigInt::zero()) == big(a)
}

#[quickcheck]
fn additive_inverse(a: i64) -> bool {
    add(&big(a), &negate(&big(a))).is_zero()
}

// ============================================================================
// Subtraction / negation
// ============================================================================

#[quickcheck]
fn sub_matches_native(a: i64, b: i64) -> bool {
    match a.checked_sub(b) {
        Some(expected) => sub(&big(a), &big(b)).to_i64() == Some(expected),
        None => true,
    }
}

#[quickcheck]
fn double_negate_is_identity(a: i64) -> bool {
    negate(&negate(&big(a))) == big(a)
}

// ============================================================================
// Multiplication
// ============================================================================

#[quickcheck]
fn mul_matches_native(a: i32, b: i32) -> bool {
    let expected = a as i64 * b as i64;
    mul(&BigInt::from_i32(a), &BigInt::from_i32(b)).to_i64() == Some(expected)
}

#[quickcheck]
fn mul_commutative(a: i32, b: i32) -> bool {
    let (a, b) = (BigInt::from_i32(a), BigInt::from_i32(b));
    mul(&a, &b) == mul(&b, &a)
}

#[quickcheck]
fn mul_associative(a: i16, b: i16, c: i16) -> bool {
    let (a, b, c) = (big(a as i64), big(b as i64), big(c as i64));
    mul(&mul(&a, &b), &c) == mul(&a, &mul(&b, &c))
}

#[quickcheck]
fn mul_identity_and_absorbing(a: i64) -> bool {
    mul(&big(a), &BigInt::one()) == big(a) && mul(&big(a), &BigInt::zero()).is_zero()
}

#[quickcheck]
fn distributivity(a: i16, b: i16, c: i16) -> bool {
    let (a, b, c) = (big(a as i64), big(b as i64), big(c as i64));
    mul(&a, &add(&b, &c)) == add(&mul(&a, &b), &mul(&a, &c))
}

#[quickcheck]
fn mul_sign_is_xor_unless_zero(a: i32, b: i32) -> bool {
    let product = mul(&BigInt::from_i32(a), &BigInt::from_i32(b));
    if product.is_zero() {
        return true;
    }
    product.is_negative() == ((a < 0) ^ (b < 0))
}

// ============================================================================
// Division
// ============================================================================

#[quickcheck]
fn division_identity(a: i32, b: i32) -> bool {
    if b == 0 {
        return true;
    }
    let (a, b) = (big(a as i64), big(b as i64));
    let q = divide(&a, &b);
    let r = modulo(&a, &b);
    add(&mul(&q, &b), &r) == a && (r.is_zero() || r.is_negative() == a.is_negative())
}

#[quickcheck]
fn division_matches_native_truncation(a: i32, b: i32) -> bool {
    if b == 0 {
        return true;
    }
    let expected_q = a as i64 / b as i64;
    let expected_r = a as i64 % b as i64;
    let (a, b) = (big(a as i64), big(b as i64));
    divide(&a, &b).to_i64() == Some(expected_q) && modulo(&a, &b).to_i64() == Some(expected_r)
}

#[test]
#[should_panic(expected = "division by zero")]
fn division_by_zero_panics() {
    divide(&big(1), &big(0));
}

// ============================================================================
// Shifts
// ============================================================================

#[quickcheck]
fn shift_left_matches_power_of_two(v: u32, k: u8) -> bool {
    let k = (k % 40) as u32;
    let x = BigInt::from_u32(v);
    shift_left(&x, k) == mul(&x, &pow(&BigInt::from_u32(2), k))
}

#[quickcheck]
fn shift_round_trip(v: u32, k: u8) -> bool {
    let k = (k % 20) as u32;
    let x = BigInt::from_u32(v);
    shift_right(&shift_left(&x, k), k) == x
}

// ============================================================================
// Bitwise
// ============================================================================

#[quickcheck]
fn bitand_matches_native(a: u32, b: u32) -> bool {
    and(&BigInt::from_u32(a), &BigInt::from_u32(b)).to_u32() == Some(a & b)
}

#[quickcheck]
fn bitor_matches_native(a: u32, b: u32) -> bool {
    or(&BigInt::from_u32(a), &BigInt::from_u32(b)).to_u32() == Some(a | b)
}

#[quickcheck]
fn bitxor_matches_native(a: u32, b: u32) -> bool {
    xor(&BigInt::from_u32(a), &BigInt::from_u32(b)).to_u32() == Some(a ^ b)
}

#[test]
fn not_extends_by_one_limb_and_is_not_involutive() {
    // The extra all-ones limb means `not(not(x))` is not `x` in general.
    let x = BigInt::from_u32(5);
    let nx = not(&x);
    assert_ne!(not(&nx), x);
}

// ============================================================================
// Comparison
// ============================================================================

#[quickcheck]
fn compare_matches_native(a: i64, b: i64) -> bool {
    compare(&big(a), &big(b)) as i64 == (a.cmp(&b) as i64)
}

// ============================================================================
// Number theory
// ============================================================================

#[quickcheck]
fn gcd_divides_both(a: i32, b: i32) -> bool {
    if a == 0 && b == 0 {
        return true;
    }
    let (a, b) = (big(a as i64), big(b as i64));
    let g = gcd(&a, &b);
    modulo(&a, &g).is_zero() && modulo(&b, &g).is_zero()
}

#[quickcheck]
fn gcd_zero_is_abs(a: i32) -> bool {
    gcd(&big(a as i64), &BigInt::zero()) == crate::arith::abs(&big(a as i64))
}

#[quickcheck]
fn gcd_lcm_identity(a: i16, b: i16) -> bool {
    if a == 0 || b == 0 {
        return true;
    }
    let (a, b) = (big(a as i64), big(b as i64));
    mul(&gcd(&a, &b), &lcm(&a, &b)) == crate::arith::abs(&mul(&a, &b))
}

#[quickcheck]
fn extended_gcd_identity(a: i32, b: i32) -> bool {
    if a == 0 && b == 0 {
        return true;
    }
    let (a, b) = (big(a as i64), big(b as i64));
    let (g, x, y) = extended_gcd(&a, &b);
    add(&mul(&a, &x), &mul(&b, &y)) == g
}

#[quickcheck]
fn sqrt_bounds(n: u32) -> bool {
    let n = big(n as i64);
    let s = sqrt(&n);
    let s_sq = mul(&s, &s);
    let next_sq = mul(&add(&s, &BigInt::one()), &add(&s, &BigInt::one()));
    s_sq.less_equal(&n) && n.less(&next_sq)
}

#[quickcheck]
fn mod_pow_matches_direct(base: u8, exp: u8, m: u8) -> bool {
    if m == 0 {
        return true;
    }
    let m32 = m as u64;
    if m32 == 1 {
        return mod_pow(&big(base as i64), &big(exp as i64), &big(m as i64)).is_zero();
    }
    let mut expected: u64 = 1;
    let mut b = base as u64 % m32;
    let mut e = exp as u32;
    while e > 0 {
        if e & 1 == 1 {
            expected = (expected * b) % m32;
        }
        b = (b * b) % m32;
        e >>= 1;
    }
    mod_pow(&big(base as i64), &big(exp as i64), &big(m as i64)).to_u64() == Some(expected)
}

#[test]
fn primality_matches_trial_division_small_range() {
    fn trial_divide_is_prime(n: u32) -> bool {
        if n < 2 {
            return false;
        }
        let mut i = 2;
        while i * i <= n {
            if n % i == 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    for n in 0..2000u32 {
        assert_eq!(
            is_prime(&BigInt::from_u32(n), 0),
            trial_divide_is_prime(n),
            "mismatch at {n}"
        );
    }
}

#[quickcheck]
fn next_prime_is_prime_and_nothing_smaller_is(n: u8) -> bool {
    let n = big(n as i64);
    let next = next_prime(&n);
    if next.less(&n) {
        return false;
    }
    if !is_prime(&next, 0) {
        return false;
    }
    let mut i = add(&n, &BigInt::one());
    while i.less(&next) {
        if is_prime(&i, 0) {
            return false;
        }
        i = add(&i, &BigInt::one());
    }
    true
}

// ============================================================================
// Value identity
// ============================================================================

#[test]
fn refcount_after_retains_and_releases() {
    let x = BigInt::from_i32(42);
    assert_eq!(x.ref_count(), 1);

    let mut handles: Vec<Option<BigInt>> = Vec::new();
    for _ in 0..3 {
        handles.push(Some(x.retain()));
    }
    assert_eq!(x.ref_count(), 4);

    for h in handles.iter_mut() {
        crate::release(h);
    }
    assert_eq!(x.ref_count(), 1);
}

#[test]
fn release_on_null_handle_is_a_no_op() {
    let mut handle: Option<BigInt> = None;
    crate::release(&mut handle);
    assert!(handle.is_none());
}

#[test]
fn deep_copy_is_independent_and_resets_ref_count() {
    let x = BigInt::from_i32(7);
    let _also_x = x.retain();
    assert_eq!(x.ref_count(), 2);

    let y = x.deep_copy();
    assert_eq!(y.ref_count(), 1);
    assert_eq!(x, y);
}

// ============================================================================
// Conversion out-of-range
// ============================================================================

#[test]
fn to_i32_rejects_out_of_range() {
    assert_eq!(BigInt::from_i64(i64::from(i32::MAX) + 1).to_i32(), None);
    assert_eq!(BigInt::from_i32(i32::MAX).to_i32(), Some(i32::MAX));
    assert_eq!(BigInt::from_i32(i32::MIN).to_i32(), Some(i32::MIN));
}

#[test]
fn from_str_radix_rejects_empty_digit_sequence() {
    assert!(BigInt::from_str_radix("", 10).is_none());
    assert!(BigInt::from_str_radix("   ", 10).is_none());
    assert!(BigInt::from_str_radix("-", 16).is_none());
}

#[test]
fn from_str_radix_accepts_prefix() {
    // Prefix acceptance: trailing garbage terminates parsing at the first
    // invalid character rather than failing the whole parse.
    assert_eq!(
        BigInt::from_str_radix("123abc", 10),
        Some(BigInt::from_i32(123))
    );
    assert_eq!(
        BigInt::from_str_radix("-42xyz", 10),
        Some(BigInt::from_i32(-42))
    );
}

#[test]
fn from_str_radix_case_insensitive_letters() {
    assert_eq!(
        BigInt::from_str_radix("ff", 16),
        BigInt::from_str_radix("FF", 16)
    );
}

// ============================================================================
// Random
// ============================================================================

#[test]
fn random_has_requested_bit_length_or_less() {
    for bits in [1, 8, 31, 32, 33, 64, 200] {
        let r = random(bits);
        assert!(r.bit_length() <= bits, "bits={bits} got {}", r.bit_length());
    }
}

#[test]
fn random_range_stays_in_bounds() {
    let min = BigInt::from_i32(10);
    let max = BigInt::from_i32(20);
    for _ in 0..200 {
        let r = random_range(&min, &max).expect("should not exhaust retry budget");
        assert!(r.greater_equal(&min) && r.less(&max));
    }
}

// ============================================================================
// Concrete end-to-end scenarios
// ============================================================================

#[test]
fn scenario_large_multiply() {
    let a = BigInt::from_str_radix("999999999999999999", 10).unwrap();
    let b = BigInt::from_str_radix("888888888888888888", 10).unwrap();
    assert_eq!(
        mul(&a, &b).to_string_radix(10),
        "888888888888888887111111111111111112"
    );
}

#[test]
fn scenario_large_divide() {
    let a =
        BigInt::from_str_radix("999999999999999999888888888888888888", 10).unwrap();
    let b = BigInt::from_str_radix("999999999999999999", 10).unwrap();
    assert_eq!(divide(&a, &b).to_string_radix(10), "1000000000000000000");
}

#[test]
fn scenario_large_modulo() {
    let a = BigInt::from_str_radix("999999999999999999999999999", 10).unwrap();
    let b = BigInt::from_i32(123456789);
    assert_eq!(modulo(&a, &b).to_string_radix(10), "93951369");
}

#[test]
fn scenario_factorial_30() {
    assert_eq!(
        factorial(30).to_string_radix(10),
        "265252859812191058636308480000000"
    );
}

#[test]
fn scenario_mod_pow() {
    let result = mod_pow(&BigInt::from_i32(2), &BigInt::from_i32(8), &BigInt::from_i32(100));
    assert_eq!(result.to_i32(), Some(56));
}

#[test]
fn scenario_gcd_then_lcm() {
    assert_eq!(
        gcd(&BigInt::from_i32(48), &BigInt::from_i32(18)).to_i32(),
        Some(6)
    );
    assert_eq!(
        lcm(&BigInt::from_i32(12), &BigInt::from_i32(18)).to_i32(),
        Some(36)
    );
}

#[test]
fn scenario_sqrt() {
    assert_eq!(sqrt(&BigInt::from_i32(144)).to_i32(), Some(12));
    assert_eq!(sqrt(&BigInt::from_i32(10)).to_i32(), Some(3));
}
