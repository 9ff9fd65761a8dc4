//! Construction and conversion: fixed-width integers, strings in bases
//! 2-36, and `f64`.

use crate::limb::{DoubleLimb, Limb, Sign, LIMB_BITS};
use crate::repr::BigInt;

impl BigInt {
    /// The value zero (empty magnitude, non-negative).
    pub fn zero() -> Self {
        BigInt::from_repr(Sign::NonNegative, Vec::new())
    }

    /// The value one.
    pub fn one() -> Self {
        BigInt::from_repr(Sign::NonNegative, vec![1])
    }

    /// Construct from a signed 32-bit value.
    ///
    /// The most-negative input is handled in unsigned space so that
    /// `i32::MIN`'s magnitude (`i32::MAX + 1`) is represented exactly.
    pub fn from_i32(v: i32) -> Self {
        if v == 0 {
            return BigInt::zero();
        }
        let sign = if v < 0 { Sign::Negative } else { Sign::NonNegative };
        let mag = v.unsigned_abs();
        BigInt::from_repr(sign, limbs_from_u64(mag as u64))
    }

    /// Construct from a signed 64-bit value.
    pub fn from_i64(v: i64) -> Self {
        if v == 0 {
            return BigInt::zero();
        }
        let sign = if v < 0 { Sign::Negative } else { Sign::NonNegative };
        let mag = v.unsigned_abs();
        BigInt::from_repr(sign, limbs_from_u64(mag))
    }

    /// Construct from an unsigned 32-bit value.
    pub fn from_u32(v: u32) -> Self {
        BigInt::from_repr(Sign::NonNegative, limbs_from_u64(v as u64))
    }

    /// Construct from an unsigned 64-bit value.
    pub fn from_u64(v: u64) -> Self {
        BigInt::from_repr(Sign::NonNegative, limbs_from_u64(v))
    }

    /// Parse a signed integer in the given base (2-36).
    ///
    /// Accepts optional leading whitespace, an optional `+`/`-` sign, then
    /// one or more base-`base` digits (letters case-insensitive for bases
    /// above 10), converted with Horner's method. Parsing stops at the first
    /// invalid character and succeeds as long as at least one valid digit
    /// was consumed. Returns `None` if no valid digit appears before the
    /// first invalid character or the end of the string.
    pub fn from_str_radix(s: &str, base: u32) -> Option<Self> {
        assert!((2..=36).contains(&base), "base must be between 2 and 36");

        let trimmed = s.trim_start();
        let mut chars = trimmed.chars().peekable();

        let negative = match chars.peek() {
            Some('+') => {
                chars.next();
                false
            }
            Some('-') => {
                chars.next();
                true
            }
            _ => false,
        };

        let mut acc = BigInt::zero();
        let base_big = BigInt::from_u32(base);
        let mut digit_count = 0usize;

        for c in chars {
            let digit = match c.to_digit(36) {
                Some(d) if d < base => d,
                _ => break,
            };
            acc = crate::arith::mul(&acc, &base_big);
            acc = crate::arith::add(&acc, &BigInt::from_u32(digit));
            digit_count += 1;
        }

        if digit_count == 0 {
            return None;
        }

        if negative {
            Some(crate::arith::negate(&acc))
        } else {
            Some(acc)
        }
    }

    /// Convert to a signed 32-bit value if the magnitude and sign both fit.
    pub fn to_i32(&self) -> Option<i32> {
        let mag = self.to_u64_magnitude()?;
        if self.is_negative() {
            if mag <= (i32::MAX as u64) + 1 {
                Some((mag as i64).wrapping_neg() as i32)
            } else {
                None
            }
        } else if mag <= i32::MAX as u64 {
            Some(mag as i32)
        } else {
            None
        }
    }

    /// Convert to a signed 64-bit value if the magnitude and sign both fit.
    pub fn to_i64(&self) -> Option<i64> {
        let mag = self.to_u64_magnitude()?;
        if self.is_negative() {
            if mag <= (i64::MAX as u64) + 1 {
                Some((mag as i128).wrapping_neg() as i64)
            } else {
                None
            }
        } else if mag <= i64::MAX as u64 {
            Some(mag as i64)
        } else {
            None
        }
    }

    /// Convert to an unsigned 32-bit value if non-negative and it fits.
    pub fn to_u32(&self) -> Option<u32> {
        if self.is_negative() {
            return None;
        }
        let mag = self.to_u64_magnitude()?;
        u32::try_from(mag).ok()
    }

    /// Convert to an unsigned 64-bit value if non-negative and it fits.
    pub fn to_u64(&self) -> Option<u64> {
        if self.is_negative() {
            return None;
        }
        self.to_u64_magnitude()
    }

    fn to_u64_magnitude(&self) -> Option<u64> {
        let limbs = self.limbs();
        let limbs_per_u64 = (64 / LIMB_BITS) as usize;
        if limbs.len() > limbs_per_u64 {
            return None;
        }
        let mut v: u64 = 0;
        for (i, &limb) in limbs.iter().enumerate() {
            v |= (limb as u64) << (i as u32 * LIMB_BITS);
        }
        Some(v)
    }

    /// Convert to a `f64` by accumulating limbs least-to-most significant.
    ///
    /// No rounding guarantees beyond IEEE 754 double accumulation.
    pub fn to_f64(&self) -> f64 {
        let mut acc = 0.0f64;
        let mut base = 1.0f64;
        let scale = 2f64.powi(LIMB_BITS as i32);
        for &limb in self.limbs() {
            acc += (limb as f64) * base;
            base *= scale;
        }
        if self.is_negative() {
            -acc
        } else {
            acc
        }
    }

    /// Render to a string in the given base (2-36), repeated-division
    /// conversion (exact, no floating-point involved).
    pub fn to_string_radix(&self, base: u32) -> String {
        assert!((2..=36).contains(&base), "base must be between 2 and 36");

        if self.is_zero() {
            return "0".to_string();
        }

        let mut limbs = self.limbs().to_vec();
        let mut digits = Vec::new();
        while !limbs.is_empty() {
            let mut rem: DoubleLimb = 0;
            for limb in limbs.iter_mut().rev() {
                let cur = (rem << LIMB_BITS) | (*limb as DoubleLimb);
                *limb = (cur / base as DoubleLimb) as Limb;
                rem = cur % base as DoubleLimb;
            }
            while matches!(limbs.last(), Some(0)) {
                limbs.pop();
            }
            digits.push(std::char::from_digit(rem as u32, base).unwrap());
        }

        if self.is_negative() {
            digits.push('-');
        }
        digits.iter().rev().collect()
    }
}

impl std::str::FromStr for BigInt {
    type Err = crate::error::ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::from_str_radix(s, 10).ok_or(crate::error::ParseBigIntError)
    }
}

impl std::fmt::Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_string_radix(10))
    }
}

/// Split a `u64` magnitude into the configured limb width.
fn limbs_from_u64(v: u64) -> Vec<Limb> {
    if v == 0 {
        return Vec::new();
    }
    let mut limbs = Vec::new();
    let mut rem = v;
    while rem != 0 {
        limbs.push(rem as Limb);
        rem >>= LIMB_BITS;
    }
    limbs
}
