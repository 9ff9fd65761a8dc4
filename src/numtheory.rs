//! Number theory: gcd, lcm, extended gcd, integer square root, factorial,
//! modular exponentiation, primality, next prime.
//!
//! These are free functions over `&BigInt` rather than inherent methods —
//! they are compositions over the arithmetic primitives rather than
//! primitive operations on the type itself.

use crate::arith::{abs, add, add_i32, divide, mul, modulo, negate, sub};
use crate::bitwise::shift_right;
use crate::repr::BigInt;

/// Euclidean GCD on magnitudes; `gcd(0, x) == |x|`.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut x = abs(a);
    let mut y = abs(b);
    while !y.is_zero() {
        let r = modulo(&x, &y);
        x = y;
        y = r;
    }
    x
}

/// `|a * b| / gcd(a, b)`; zero if either operand is zero.
pub fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() || b.is_zero() {
        return BigInt::zero();
    }
    let g = gcd(a, b);
    divide(&abs(&mul(a, b)), &g)
}

/// Iterative extended Euclidean algorithm: `(g, x, y)` with `a*x + b*y == g`
/// and `g >= 0`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = divide(&old_r, &r);
        let new_r = sub(&old_r, &mul(&q, &r));
        old_r = std::mem::replace(&mut r, new_r);
        let new_s = sub(&old_s, &mul(&q, &s));
        old_s = std::mem::replace(&mut s, new_s);
        let new_t = sub(&old_t, &mul(&q, &t));
        old_t = std::mem::replace(&mut t, new_t);
    }

    if old_r.is_negative() {
        (negate(&old_r), negate(&old_s), negate(&old_t))
    } else {
        (old_r, old_s, old_t)
    }
}

/// `floor(sqrt(n))` via Newton's iteration. `n` must be non-negative
/// (precondition violation otherwise — fail-fast).
pub fn sqrt(n: &BigInt) -> BigInt {
    assert!(!n.is_negative(), "sqrt: negative input");

    if n.is_zero() {
        return BigInt::zero();
    }

    let two = BigInt::from_u32(2);
    let mut x = divide(n, &two);
    if x.is_zero() {
        x = BigInt::one();
    }

    loop {
        let candidate = divide(&add(&x, &divide(n, &x)), &two);
        if !candidate.less(&x) {
            break;
        }
        x = candidate;
    }
    x
}

/// `n!`, `0! == 1! == 1`.
pub fn factorial(n: u32) -> BigInt {
    let mut result = BigInt::one();
    for i in 2..=n {
        result = mul(&result, &BigInt::from_u32(i));
    }
    result
}

/// Right-to-left binary modular exponentiation. `m > 0`; `m == 1` returns
/// zero; `exp` must be non-negative (precondition violations, fail-fast).
pub fn mod_pow(base: &BigInt, exp: &BigInt, m: &BigInt) -> BigInt {
    assert!(m.is_positive(), "mod_pow: modulus must be positive");
    assert!(!exp.is_negative(), "mod_pow: negative exponent");

    if m.equal(&BigInt::one()) {
        return BigInt::zero();
    }

    let mut b = modulo(base, m);
    if b.is_negative() {
        b = add(&b, m);
    }

    let two = BigInt::from_u32(2);
    let mut result = BigInt::one();
    let mut e = exp.clone();
    while !e.is_zero() {
        if !modulo(&e, &two).is_zero() {
            result = modulo(&mul(&result, &b), m);
        }
        b = modulo(&mul(&b, &b), m);
        e = shift_right(&e, 1);
    }
    result
}

/// Deterministic trial division up to `floor(sqrt(n))`. `certainty` is
/// accepted for interface compatibility with probabilistic primality
/// testers and ignored.
pub fn is_prime(n: &BigInt, _certainty: u32) -> bool {
    let two = BigInt::from_u32(2);
    let three = BigInt::from_u32(3);

    if n.less(&two) {
        return false;
    }
    if n.equal(&two) || n.equal(&three) {
        return true;
    }
    if modulo(n, &two).is_zero() {
        return false;
    }

    let limit = sqrt(n);
    let mut i = three;
    while i.less_equal(&limit) {
        if modulo(n, &i).is_zero() {
            return false;
        }
        i = add_i32(&i, 2);
    }
    true
}

/// Smallest prime `>= n` reachable by starting at `n` (bumped to odd if
/// even) and stepping by two.
pub fn next_prime(n: &BigInt) -> BigInt {
    let two = BigInt::from_u32(2);
    let mut candidate = if modulo(n, &two).is_zero() {
        add_i32(n, 1)
    } else {
        n.clone()
    };
    while !is_prime(&candidate, 0) {
        candidate = add_i32(&candidate, 2);
    }
    candidate
}
