//! Core arithmetic: add, subtract, negate, absolute value, schoolbook
//! multiplication, long division with remainder.

use crate::limb::{
    add_magnitude, bit_length, cmp_magnitude, get_bit, set_bit, shl1, sub_magnitude, trim,
    DoubleLimb, Limb, Sign, LIMB_BITS,
};
use crate::repr::BigInt;
use std::cmp::Ordering;
use std::ops;

/// `a + b`.
///
/// Same-sign operands: magnitude add, keep the common sign. Opposite-sign
/// operands: subtract the smaller magnitude from the larger and take the
/// larger operand's sign (normalize then forces zero to non-negative).
pub fn add(a: &BigInt, b: &BigInt) -> BigInt {
    if a.sign() == b.sign() {
        return BigInt::from_repr(a.sign(), add_magnitude(a.limbs(), b.limbs()));
    }
    match cmp_magnitude(a.limbs(), b.limbs()) {
        Ordering::Equal => BigInt::zero(),
        Ordering::Greater => {
            BigInt::from_repr(a.sign(), sub_magnitude(a.limbs(), b.limbs()))
        }
        Ordering::Less => {
            BigInt::from_repr(b.sign(), sub_magnitude(b.limbs(), a.limbs()))
        }
    }
}

/// `a - b`, defined as `a + (-b)`.
pub fn sub(a: &BigInt, b: &BigInt) -> BigInt {
    add(a, &negate(b))
}

/// Flip the sign; zero remains non-negative via normalization.
pub fn negate(a: &BigInt) -> BigInt {
    BigInt::from_repr(a.sign().flip(), a.limbs().to_vec())
}

/// Clear the sign.
pub fn abs(a: &BigInt) -> BigInt {
    BigInt::from_repr(Sign::NonNegative, a.limbs().to_vec())
}

/// Schoolbook `O(n*m)` multiplication. Result sign is the XOR of operand
/// signs; a zero product normalizes to non-negative.
pub fn mul(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() || b.is_zero() {
        return BigInt::zero();
    }
    let al = a.limbs();
    let bl = b.limbs();
    let mut result = vec![0 as Limb; al.len() + bl.len()];
    for i in 0..al.len() {
        let mut carry: DoubleLimb = 0;
        for j in 0..bl.len() {
            let acc = al[i] as DoubleLimb * bl[j] as DoubleLimb
                + result[i + j] as DoubleLimb
                + carry;
            result[i + j] = acc as Limb;
            carry = acc >> LIMB_BITS;
        }
        result[i + bl.len()] = (result[i + bl.len()] as DoubleLimb + carry) as Limb;
    }
    trim(&mut result);
    BigInt::from_repr(a.sign().xor(b.sign()), result)
}

/// Long division with remainder (bit-at-a-time shift-subtract over
/// magnitudes). Truncated-toward-zero quotient: quotient sign is XOR of
/// operand signs, remainder takes the dividend's sign. `b == 0` is a
/// precondition violation (fail-fast).
///
/// `divide` and `mod` both funnel through here so the work is done once.
pub(crate) fn div_rem(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    assert!(!b.is_zero(), "division by zero");

    if a.is_zero() {
        return (BigInt::zero(), BigInt::zero());
    }

    let (q_mag, r_mag) = div_rem_magnitude(a.limbs(), b.limbs());

    let q_sign = a.sign().xor(b.sign());
    let quotient = BigInt::from_repr(q_sign, q_mag);
    let remainder = BigInt::from_repr(a.sign(), r_mag);
    (quotient, remainder)
}

pub fn divide(a: &BigInt, b: &BigInt) -> BigInt {
    div_rem(a, b).0
}

pub fn modulo(a: &BigInt, b: &BigInt) -> BigInt {
    div_rem(a, b).1
}

/// Bit-at-a-time long division on bare magnitudes.
fn div_rem_magnitude(a: &[Limb], b: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    if cmp_magnitude(a, b) == Ordering::Less {
        return (Vec::new(), a.to_vec());
    }

    let total_bits = bit_length(a);
    let mut quotient: Vec<Limb> = Vec::new();
    let mut remainder: Vec<Limb> = Vec::new();

    for i in (0..total_bits).rev() {
        remainder = shl1(&remainder);
        if get_bit(a, i) {
            if remainder.is_empty() {
                remainder.push(1);
            } else {
                remainder[0] |= 1;
            }
        }
        if cmp_magnitude(&remainder, b) != Ordering::Less {
            remainder = sub_magnitude(&remainder, b);
            trim(&mut remainder);
            set_bit(&mut quotient, i);
        }
    }

    trim(&mut quotient);
    (quotient, remainder)
}

/// `base^exp` by plain repeated squaring (no modulus).
pub fn pow(base: &BigInt, exp: u32) -> BigInt {
    let mut result = BigInt::one();
    let mut b = base.clone();
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            result = mul(&result, &b);
        }
        b = mul(&b, &b);
        e >>= 1;
    }
    result
}

pub fn add_i32(a: &BigInt, b: i32) -> BigInt {
    add(a, &BigInt::from_i32(b))
}

pub fn sub_i32(a: &BigInt, b: i32) -> BigInt {
    sub(a, &BigInt::from_i32(b))
}

pub fn mul_i32(a: &BigInt, b: i32) -> BigInt {
    mul(a, &BigInt::from_i32(b))
}

// ----------------------------------------------------------------------
// Operator traits
// ----------------------------------------------------------------------

impl ops::Add for &BigInt {
    type Output = BigInt;
    fn add(self, rhs: &BigInt) -> BigInt {
        add(self, rhs)
    }
}

impl ops::Add for BigInt {
    type Output = BigInt;
    fn add(self, rhs: BigInt) -> BigInt {
        add(&self, &rhs)
    }
}

impl ops::Sub for &BigInt {
    type Output = BigInt;
    fn sub(self, rhs: &BigInt) -> BigInt {
        sub(self, rhs)
    }
}

impl ops::Sub for BigInt {
    type Output = BigInt;
    fn sub(self, rhs: BigInt) -> BigInt {
        sub(&self, &rhs)
    }
}

impl ops::Mul for &BigInt {
    type Output = BigInt;
    fn mul(self, rhs: &BigInt) -> BigInt {
        mul(self, rhs)
    }
}

impl ops::Mul for BigInt {
    type Output = BigInt;
    fn mul(self, rhs: BigInt) -> BigInt {
        mul(&self, &rhs)
    }
}

impl ops::Div for &BigInt {
    type Output = BigInt;
    fn div(self, rhs: &BigInt) -> BigInt {
        divide(self, rhs)
    }
}

impl ops::Div for BigInt {
    type Output = BigInt;
    fn div(self, rhs: BigInt) -> BigInt {
        divide(&self, &rhs)
    }
}

impl ops::Rem for &BigInt {
    type Output = BigInt;
    fn rem(self, rhs: &BigInt) -> BigInt {
        modulo(self, rhs)
    }
}

impl ops::Rem for BigInt {
    type Output = BigInt;
    fn rem(self, rhs: BigInt) -> BigInt {
        modulo(&self, &rhs)
    }
}

impl ops::Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        negate(self)
    }
}

impl ops::Neg for BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        negate(&self)
    }
}
