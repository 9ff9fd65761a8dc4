//! Arbitrary-precision signed integers.
//!
//! [`BigInt`] is a sign-magnitude value backed by a little-endian vector of
//! machine-word limbs. Values are immutable once constructed — every
//! operation takes `&BigInt` inputs and returns a fresh, normalized result —
//! and are shared cheaply via reference counting (`retain`/`Clone`, an `Rc`
//! bump) rather than copied, with `deep_copy` available when independent
//! storage is actually needed.
//!
//! Limb width is a compile-time choice: the `limb16` Cargo feature selects
//! 16-bit limbs, 32-bit is the default.

mod arith;
mod bitwise;
mod cmp;
mod construct;
mod error;
mod limb;
mod numtheory;
mod overflow;
mod random;
mod repr;

#[cfg(test)]
mod tests;

pub use arith::{abs, add, add_i32, divide, modulo, mul, mul_i32, negate, pow, sub, sub_i32};
pub use bitwise::{and, not, or, shift_left, shift_right, xor};
pub use cmp::compare;
pub use error::ParseBigIntError;
pub use limb::{DoubleLimb, Limb, LIMB_BITS};
pub use numtheory::{extended_gcd, factorial, gcd, is_prime, lcm, mod_pow, next_prime, sqrt};
pub use overflow::{
    add_overflow_i32, add_overflow_i64, mul_overflow_i32, mul_overflow_i64, sub_overflow_i32,
    sub_overflow_i64,
};
pub use random::{random, random_range};
pub use repr::{release, BigInt};
