//! The `BigInt` value type and its shared-ownership contract.

use std::cmp::Ordering;
use std::rc::Rc;

use crate::limb::{normalize, Limb, Sign};

pub(crate) struct Repr {
    pub(crate) sign: Sign,
    pub(crate) limbs: Vec<Limb>,
}

impl Repr {
    pub(crate) fn new(sign: Sign, mut limbs: Vec<Limb>) -> Self {
        let mut sign = sign;
        normalize(&mut limbs, &mut sign);
        Repr { sign, limbs }
    }
}

impl Clone for Repr {
    fn clone(&self) -> Self {
        Repr {
            sign: self.sign,
            limbs: self.limbs.clone(),
        }
    }
}

/// An arbitrary-precision signed integer.
///
/// Values are immutable once constructed: every arithmetic operation takes
/// `&BigInt` inputs and returns a freshly normalized `BigInt`. Sharing a
/// value between owners is cheap (`retain`/`Clone`, an `Rc` bump); an
/// independent copy is available via `deep_copy` when one is genuinely
/// needed.
#[derive(Clone)]
pub struct BigInt(pub(crate) Rc<Repr>);

impl BigInt {
    pub(crate) fn from_repr(sign: Sign, limbs: Vec<Limb>) -> Self {
        BigInt(Rc::new(Repr::new(sign, limbs)))
    }

    pub(crate) fn sign(&self) -> Sign {
        self.0.sign
    }

    pub(crate) fn limbs(&self) -> &[Limb] {
        &self.0.limbs
    }

    /// `true` iff the magnitude is the empty limb sequence (invariant 1).
    pub fn is_zero(&self) -> bool {
        self.0.limbs.is_empty()
    }

    /// `true` iff the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        matches!(self.0.sign, Sign::Negative) && !self.is_zero()
    }

    /// `true` iff the value is strictly positive.
    pub fn is_positive(&self) -> bool {
        matches!(self.0.sign, Sign::NonNegative) && !self.is_zero()
    }

    /// Number of limbs in the canonical magnitude (zero has `limb_count() == 0`).
    pub fn limb_count(&self) -> usize {
        self.0.limbs.len()
    }

    /// Number of bits needed to represent the magnitude (`0` for zero).
    pub fn bit_length(&self) -> u32 {
        crate::limb::bit_length(&self.0.limbs)
    }

    // ------------------------------------------------------------------
    // Shared ownership
    // ------------------------------------------------------------------

    /// Acquire another reference to the same underlying value (refcount bump).
    ///
    /// Identical to `Clone::clone`; provided under this name for callers
    /// translating directly from a reference-counted C-style API.
    pub fn retain(&self) -> Self {
        self.clone()
    }

    /// Current number of outstanding owners of the underlying value.
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// Produce an independent value with its own limb buffer and `ref_count() == 1`.
    pub fn deep_copy(&self) -> Self {
        BigInt(Rc::new((*self.0).clone()))
    }
}

/// Release an owned handle: drops this owner's reference, freeing the
/// underlying value once the last owner releases it. No-op if `handle` is
/// already `None`.
pub fn release(handle: &mut Option<BigInt>) {
    *handle = None;
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        crate::cmp::compare(self, other) == 0
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match crate::cmp::compare(self, other) {
            v if v < 0 => Ordering::Less,
            0 => Ordering::Equal,
            _ => Ordering::Greater,
        }
    }
}

impl std::fmt::Debug for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BigInt")
            .field("sign", &self.0.sign)
            .field("limbs", &self.0.limbs)
            .finish()
    }
}
