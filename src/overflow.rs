//! Fixed-width overflow helpers.
//!
//! A trivial, self-contained collaborator, separate from the arbitrary-
//! precision core. Each function reports `Some(result)` iff the exact
//! mathematical result fits in the target width, `None` otherwise.

pub fn add_overflow_i32(a: i32, b: i32) -> Option<i32> {
    a.checked_add(b)
}

pub fn add_overflow_i64(a: i64, b: i64) -> Option<i64> {
    a.checked_add(b)
}

pub fn sub_overflow_i32(a: i32, b: i32) -> Option<i32> {
    a.checked_sub(b)
}

pub fn sub_overflow_i64(a: i64, b: i64) -> Option<i64> {
    a.checked_sub(b)
}

pub fn mul_overflow_i32(a: i32, b: i32) -> Option<i32> {
    a.checked_mul(b)
}

pub fn mul_overflow_i64(a: i64, b: i64) -> Option<i64> {
    a.checked_mul(b)
}
