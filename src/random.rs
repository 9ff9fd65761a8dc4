//! Random generation. Non-cryptographic: backed by `rand`'s default
//! thread-local generator, the same crate the rest of this example pack
//! reaches for when it needs non-cryptographic randomness.

use crate::arith::{add, divide, mul, sub};
use crate::bitwise::shift_left;
use crate::limb::{trim, Limb, Sign, LIMB_BITS};
use crate::repr::BigInt;
use rand::Rng;

/// Rejection-sampling retry budget for `random_range`.
const RANDOM_RANGE_RETRY_BUDGET: u32 = 100;

/// Uniformly random non-negative value with exactly `bits` bits of
/// magnitude (the top limb is masked so no extra high bits leak in).
pub fn random(bits: u32) -> BigInt {
    if bits == 0 {
        return BigInt::zero();
    }

    let limb_count = bits.div_ceil(LIMB_BITS) as usize;
    let mut rng = rand::thread_rng();
    let mut limbs: Vec<Limb> = (0..limb_count).map(|_| rng.gen::<Limb>()).collect();

    let top_bits = bits - (limb_count as u32 - 1) * LIMB_BITS;
    if top_bits < LIMB_BITS {
        let mask: Limb = ((1 as u64) << top_bits) as Limb - 1;
        let last = limbs.len() - 1;
        limbs[last] &= mask;
    }

    trim(&mut limbs);
    BigInt::from_repr(Sign::NonNegative, limbs)
}

/// Uniform random value in `[min, max)` via rejection sampling: draw
/// `bit_length(range) + 8` bits (the `+8` slack bounds modular bias to
/// `2^-8`), keep only draws below the largest exact multiple of `range` that
/// fits in that many bits, and reduce the accepted draw modulo `range`.
/// Gives up and returns `None` after `RANDOM_RANGE_RETRY_BUDGET` rejections.
pub fn random_range(min: &BigInt, max: &BigInt) -> Option<BigInt> {
    assert!(min.less(max), "random_range: min must be less than max");

    let range = sub(max, min);
    let bits = range.bit_length() + 8;
    let two_pow_bits = shift_left(&BigInt::one(), bits);
    let threshold = mul(&divide(&two_pow_bits, &range), &range);

    for _ in 0..RANDOM_RANGE_RETRY_BUDGET {
        let r = random(bits);
        if r.less(&threshold) {
            let candidate = crate::arith::modulo(&r, &range);
            return Some(add(min, &candidate));
        }
    }
    None
}
