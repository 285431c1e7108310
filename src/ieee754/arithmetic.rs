/*
    Arithmetic
*/

use std::cmp::Ordering;

use num_integer::Integer;
use tracing::trace;

use crate::Number;

use super::*;

// Operand handling
impl<const E: usize, const N: usize> Float<E, N> {
    // Returns `(sign, exp, c)` such that this `Float` is `(-1)^s * c * 2^exp`
    // or `None` if it is not a finite, non-zero number.
    fn unpack_finite(&self) -> Option<(bool, i64, u64)> {
        match self.num {
            FloatNum::Subnormal(s, c) => Some((s, Self::EXPMIN, c)),
            FloatNum::Normal(s, exp, c) => Some((s, exp, c)),
            _ => None,
        }
    }

    // Like `unpack_finite`, but shifts subnormal significands
    // so that their leading 1 is at position `M`.
    fn unpack_normalized(&self) -> Option<(bool, i64, u64)> {
        let (s, exp, c) = self.unpack_finite()?;
        let lz = Self::PREC - bit_length(c as u128);
        Some((s, exp - lz as i64, c << lz))
    }

    // If either operand is NaN, returns the quieted NaN to propagate,
    // preferring the first operand. Raises `invalid` if either is signaling.
    fn propagate_nan(&self, other: &Self) -> Option<Self> {
        let (s, payload) = match (self.num, other.num) {
            (FloatNum::Nan(s, _, payload), _) => (s, payload),
            (_, FloatNum::Nan(s, _, payload)) => (s, payload),
            _ => return None,
        };

        let signaling = self.is_signaling_nan() == Some(true) || other.is_signaling_nan() == Some(true);
        let flags = Exceptions::default().with_invalid(signaling);
        Some(Self::nan(s, false, payload).with_flags(flags))
    }

    // Result of an operation with no useful definable result.
    fn invalid_operation(op: &'static str) -> Self {
        trace!(op, format = N, "invalid operation");
        let flags = Exceptions::default().with_invalid(true);
        Self::default_nan().with_flags(flags)
    }
}

// Arithmetic
impl<const E: usize, const N: usize> Float<E, N> {
    /// Returns this `Float` with its sign flipped.
    /// This operation is exact and raises no flags.
    pub fn neg(&self) -> Self {
        let num = match self.num {
            FloatNum::Zero(s) => FloatNum::Zero(!s),
            FloatNum::Subnormal(s, c) => FloatNum::Subnormal(!s, c),
            FloatNum::Normal(s, exp, c) => FloatNum::Normal(!s, exp, c),
            FloatNum::Infinity(s) => FloatNum::Infinity(!s),
            FloatNum::Nan(s, signal, payload) => FloatNum::Nan(!s, signal, payload),
        };

        Self {
            num,
            flags: Exceptions::default(),
        }
    }

    /// Returns this `Float` with its sign cleared.
    /// This operation is exact and raises no flags.
    pub fn abs(&self) -> Self {
        if self.sign() {
            self.neg()
        } else {
            Self {
                num: self.num,
                flags: Exceptions::default(),
            }
        }
    }

    /// Adds this `Float` and another, rounding the result
    /// according to the provided context.
    pub fn add(&self, other: &Self, ctx: &IEEEContext) -> Self {
        if let Some(nan) = self.propagate_nan(other) {
            return nan;
        }

        match (self.num, other.num) {
            (FloatNum::Infinity(s1), FloatNum::Infinity(s2)) => {
                if s1 == s2 {
                    Self::infinity(s1)
                } else {
                    // +inf + -inf => invalid
                    Self::invalid_operation("add")
                }
            }
            (FloatNum::Infinity(s), _) | (_, FloatNum::Infinity(s)) => Self::infinity(s),
            (FloatNum::Zero(s1), FloatNum::Zero(s2)) => {
                if s1 == s2 {
                    Self::zero(s1)
                } else {
                    Self::zero(ctx.rm == RoundingMode::ToNegative)
                }
            }
            (FloatNum::Zero(_), _) => other.reround(ctx),
            (_, FloatNum::Zero(_)) => self.reround(ctx),
            _ => self.add_finite(other, ctx),
        }
    }

    // Passes a finite number through the rounding pipeline.
    // The value itself is representable, so only `ftz` can change it.
    fn reround(&self, ctx: &IEEEContext) -> Self {
        match self.unpack_finite() {
            Some((s, exp, c)) => Self::round_finite(s, exp, c as u128, false, ctx),
            None => *self,
        }
    }

    // Adds two finite, non-zero numbers.
    fn add_finite(&self, other: &Self, ctx: &IEEEContext) -> Self {
        let (Some(a), Some(b)) = (self.unpack_finite(), other.unpack_finite()) else {
            unreachable!("add_finite called on a non-finite or zero operand")
        };

        // order operands so that `e1 >= e2`
        let ((s1, e1, c1), (s2, e2, c2)) = if a.1 >= b.1 { (a, b) } else { (b, a) };

        // Align the significands. If the exponent gap is small, shifting the
        // first significand is exact. Otherwise, the second operand lies
        // entirely below the rounding bits of the first and is shifted right
        // into a sticky bit instead.
        let limit = Self::PREC + 4;
        let gap = (e1 - e2) as u64;
        let (exp, hi, lo, sticky_bit) = if gap <= limit as u64 {
            (e2, (c1 as u128) << gap, c2 as u128, false)
        } else {
            let (lo, lost) = shift_right_accum(c2 as u128, gap as usize - limit);
            (e1 - limit as i64, (c1 as u128) << limit, lo, lost)
        };

        if s1 == s2 {
            return Self::round_finite(s1, exp, hi + lo, sticky_bit, ctx);
        }

        match hi.cmp(&lo) {
            Ordering::Greater => {
                // `hi - (lo + d)` is `(hi - lo - 1) + (1 - d)`
                // when a fraction `d` was shifted out
                let c = hi - lo - sticky_bit as u128;
                Self::round_finite(s1, exp, c, sticky_bit, ctx)
            }
            Ordering::Less => {
                debug_assert!(!sticky_bit, "unaligned subtraction with a larger second operand");
                Self::round_finite(s2, exp, lo - hi, false, ctx)
            }
            Ordering::Equal => {
                // exact cancellation: +0 except when rounding toward -infinity
                Self::zero(ctx.rm == RoundingMode::ToNegative)
            }
        }
    }

    /// Subtracts another `Float` from this one, rounding the result
    /// according to the provided context.
    pub fn sub(&self, other: &Self, ctx: &IEEEContext) -> Self {
        if let Some(nan) = self.propagate_nan(other) {
            return nan;
        }

        self.add(&other.neg(), ctx)
    }

    /// Multiplies this `Float` with another, rounding the result
    /// according to the provided context.
    pub fn mul(&self, other: &Self, ctx: &IEEEContext) -> Self {
        if let Some(nan) = self.propagate_nan(other) {
            return nan;
        }

        let sign = self.sign() != other.sign();
        match (self.num, other.num) {
            (FloatNum::Infinity(_), FloatNum::Zero(_)) | (FloatNum::Zero(_), FloatNum::Infinity(_)) => {
                // +/- infinity * +/- 0 => invalid
                Self::invalid_operation("mul")
            }
            (FloatNum::Infinity(_), _) | (_, FloatNum::Infinity(_)) => Self::infinity(sign),
            (FloatNum::Zero(_), _) | (_, FloatNum::Zero(_)) => Self::zero(sign),
            _ => {
                let (Some((_, e1, c1)), Some((_, e2, c2))) =
                    (self.unpack_finite(), other.unpack_finite())
                else {
                    unreachable!("multiplying a non-finite or zero operand")
                };

                // the product of two significands is exact in 128 bits
                let c = (c1 as u128) * (c2 as u128);
                Self::round_finite(sign, e1 + e2, c, false, ctx)
            }
        }
    }

    /// Divides this `Float` by another, rounding the result
    /// according to the provided context.
    pub fn div(&self, other: &Self, ctx: &IEEEContext) -> Self {
        if let Some(nan) = self.propagate_nan(other) {
            return nan;
        }

        let sign = self.sign() != other.sign();
        match (self.num, other.num) {
            (FloatNum::Infinity(_), FloatNum::Infinity(_)) | (FloatNum::Zero(_), FloatNum::Zero(_)) => {
                // +/- infinity / +/- infinity => invalid
                // +/- 0 / +/- 0 => invalid
                Self::invalid_operation("div")
            }
            (FloatNum::Infinity(_), _) => Self::infinity(sign),
            (_, FloatNum::Infinity(_)) => Self::zero(sign),
            (FloatNum::Zero(_), _) => Self::zero(sign),
            (_, FloatNum::Zero(_)) => {
                trace!(format = N, "division by zero");
                let flags = Exceptions::default().with_div_by_zero(true);
                Self::infinity(sign).with_flags(flags)
            }
            _ => {
                let (Some((_, e1, c1)), Some((_, e2, c2))) =
                    (self.unpack_normalized(), other.unpack_normalized())
                else {
                    unreachable!("dividing a non-finite or zero operand")
                };

                // With both significands normalized to `PREC` bits, the
                // quotient carries at least `PREC + 4` bits; a nonzero
                // remainder becomes the sticky bit.
                let shift = Self::PREC + 4;
                let (q, r) = ((c1 as u128) << shift).div_rem(&(c2 as u128));
                Self::round_finite(sign, e1 - e2 - shift as i64, q, r != 0, ctx)
            }
        }
    }
}

// Implementing `Number` for `Float`
impl<const E: usize, const N: usize> Number for Float<E, N> {
    type Ctx = IEEEContext;

    fn is_zero(&self) -> bool {
        Float::is_zero(self)
    }

    fn is_infinity(&self) -> bool {
        Float::is_infinity(self)
    }

    fn is_nan(&self) -> bool {
        Float::is_nan(self)
    }

    fn is_finite(&self) -> bool {
        Float::is_finite(self)
    }

    fn neg(&self, _ctx: &Self::Ctx) -> Self {
        Float::neg(self)
    }

    fn abs(&self, _ctx: &Self::Ctx) -> Self {
        Float::abs(self)
    }

    fn add(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        Float::add(self, other, ctx)
    }

    fn sub(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        Float::sub(self, other, ctx)
    }

    fn mul(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        Float::mul(self, other, ctx)
    }

    fn div(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        Float::div(self, other, ctx)
    }
}
