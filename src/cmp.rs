//! Comparison: a total order on signed integers, sign- and magnitude-aware.

use crate::limb::{cmp_magnitude, Sign};
use crate::repr::BigInt;
use std::cmp::Ordering;

/// Three-way compare returning `-1`/`0`/`1`, used by the `Ord`/`Eq` impls on
/// `BigInt` and by the number-theory routines.
pub fn compare(a: &BigInt, b: &BigInt) -> i32 {
    if a.is_zero() && b.is_zero() {
        return 0;
    }
    match (a.sign(), b.sign()) {
        (Sign::Negative, Sign::NonNegative) => -1,
        (Sign::NonNegative, Sign::Negative) => 1,
        (Sign::NonNegative, Sign::NonNegative) => ordering_to_i32(cmp_magnitude(a.limbs(), b.limbs())),
        (Sign::Negative, Sign::Negative) => ordering_to_i32(cmp_magnitude(b.limbs(), a.limbs())),
    }
}

fn ordering_to_i32(ord: Ordering) -> i32 {
    match ord {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

impl BigInt {
    pub fn equal(&self, other: &BigInt) -> bool {
        compare(self, other) == 0
    }

    pub fn less(&self, other: &BigInt) -> bool {
        compare(self, other) < 0
    }

    pub fn less_equal(&self, other: &BigInt) -> bool {
        compare(self, other) <= 0
    }

    pub fn greater(&self, other: &BigInt) -> bool {
        compare(self, other) > 0
    }

    pub fn greater_equal(&self, other: &BigInt) -> bool {
        compare(self, other) >= 0
    }
}
