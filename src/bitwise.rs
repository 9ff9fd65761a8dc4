//! Bitwise operations and shifts.
//!
//! AND/OR/XOR/NOT operate on magnitude only and always produce a
//! non-negative result — this type does not implement two's-complement
//! extension for negative operands. Shifts are logical shifts on the
//! magnitude; the original sign is carried through unchanged (this is *not*
//! an arithmetic shift in two's-complement sense).

use crate::limb::{bit_length, trim, DoubleLimb, Limb, Sign, LIMB_BITS};
use crate::repr::BigInt;
use std::ops;

pub fn and(a: &BigInt, b: &BigInt) -> BigInt {
    bitwise(a, b, |x, y| x & y)
}

pub fn or(a: &BigInt, b: &BigInt) -> BigInt {
    bitwise(a, b, |x, y| x | y)
}

pub fn xor(a: &BigInt, b: &BigInt) -> BigInt {
    bitwise(a, b, |x, y| x ^ y)
}

fn bitwise(a: &BigInt, b: &BigInt, op: impl Fn(Limb, Limb) -> Limb) -> BigInt {
    let al = a.limbs();
    let bl = b.limbs();
    let len = al.len().max(bl.len());
    let mut result = Vec::with_capacity(len);
    for i in 0..len {
        let x = *al.get(i).unwrap_or(&0);
        let y = *bl.get(i).unwrap_or(&0);
        result.push(op(x, y));
    }
    trim(&mut result);
    BigInt::from_repr(Sign::NonNegative, result)
}

/// Flips every bit of every magnitude limb and appends one extra all-ones
/// limb (`~x` over a fixed-width extension by one limb). A known quirk: the
/// extra limb means `not(not(x)) != x` in general. Callers wanting
/// two's-complement semantics must re-derive them on top.
pub fn not(a: &BigInt) -> BigInt {
    let mut result: Vec<Limb> = a.limbs().iter().map(|&l| !l).collect();
    result.push(!(0 as Limb));
    trim(&mut result);
    BigInt::from_repr(Sign::NonNegative, result)
}

/// Shift the magnitude left by `k` bits; sign preserved.
pub fn shift_left(a: &BigInt, k: u32) -> BigInt {
    if a.is_zero() || k == 0 {
        return a.clone();
    }
    let whole = (k / LIMB_BITS) as usize;
    let bits = k % LIMB_BITS;
    let src = a.limbs();
    let mut result = vec![0 as Limb; src.len() + whole + 1];

    if bits == 0 {
        result[whole..whole + src.len()].copy_from_slice(src);
    } else {
        for (i, &limb) in src.iter().enumerate() {
            let wide = (limb as DoubleLimb) << bits;
            result[whole + i] |= wide as Limb;
            result[whole + i + 1] |= (wide >> LIMB_BITS) as Limb;
        }
    }

    trim(&mut result);
    BigInt::from_repr(a.sign(), result)
}

/// Shift the magnitude right by `k` bits; sign preserved. Result is zero if
/// `k` is at least the magnitude's bit length.
pub fn shift_right(a: &BigInt, k: u32) -> BigInt {
    let total_bits = bit_length(a.limbs());
    if k >= total_bits {
        return BigInt::zero();
    }
    if k == 0 {
        return a.clone();
    }

    let whole = (k / LIMB_BITS) as usize;
    let bits = k % LIMB_BITS;
    let src = &a.limbs()[whole..];
    let mut result = vec![0 as Limb; src.len()];

    if bits == 0 {
        result.copy_from_slice(src);
    } else {
        for i in 0..src.len() {
            let mut v = (src[i] as DoubleLimb) >> bits;
            if i + 1 < src.len() {
                v |= (src[i + 1] as DoubleLimb) << (LIMB_BITS - bits);
            }
            result[i] = v as Limb;
        }
    }

    trim(&mut result);
    BigInt::from_repr(a.sign(), result)
}

impl ops::BitAnd for &BigInt {
    type Output = BigInt;
    fn bitand(self, rhs: &BigInt) -> BigInt {
        and(self, rhs)
    }
}

impl ops::BitOr for &BigInt {
    type Output = BigInt;
    fn bitor(self, rhs: &BigInt) -> BigInt {
        or(self, rhs)
    }
}

impl ops::BitXor for &BigInt {
    type Output = BigInt;
    fn bitxor(self, rhs: &BigInt) -> BigInt {
        xor(self, rhs)
    }
}

impl ops::Not for &BigInt {
    type Output = BigInt;
    fn not(self) -> BigInt {
        not(self)
    }
}

impl ops::Shl<u32> for &BigInt {
    type Output = BigInt;
    fn shl(self, k: u32) -> BigInt {
        shift_left(self, k)
    }
}

impl ops::Shr<u32> for &BigInt {
    type Output = BigInt;
    fn shr(self, k: u32) -> BigInt {
        shift_right(self, k)
    }
}
