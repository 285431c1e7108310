/*
    Defines a number
*/

use crate::Context;

/// The number type.
///
/// A `Number` encodes a number with some exceptions, say NaN from IEEE-754.
/// Every arithmetic operation is rounded according to an explicit
/// rounding context rather than any ambient state.
pub trait Number: Clone + Default {
    /// The rounding context associated with this `Number`.
    type Ctx: Context;

    /// Returns true if this `Number` encodes a zero.
    fn is_zero(&self) -> bool;

    /// Returns true if this `Number` encodes an infinity.
    fn is_infinity(&self) -> bool;

    /// Returns true if this `Number` does not encode a number.
    fn is_nan(&self) -> bool;

    /// Returns true if this `Number` encodes a finite number.
    fn is_finite(&self) -> bool;

    /// Negates this `Number`, rounding the result according
    /// to the provided context.
    fn neg(&self, ctx: &Self::Ctx) -> Self;

    /// Takes the absolute value for `Number`, rounding the
    /// result according to the provided context.
    fn abs(&self, ctx: &Self::Ctx) -> Self;

    /// Adds this `Number` and another, rounding the result
    /// according to the provided context.
    fn add(&self, other: &Self, ctx: &Self::Ctx) -> Self;

    /// Subtracts another `Number` from this one, rounding the result
    /// according to the provided context.
    fn sub(&self, other: &Self, ctx: &Self::Ctx) -> Self;

    /// Multiplies this `Number` and another, rounding the result
    /// according to the provided context.
    fn mul(&self, other: &Self, ctx: &Self::Ctx) -> Self;

    /// Divides this `Number` by another, rounding the result
    /// according to the provided context.
    fn div(&self, other: &Self, ctx: &Self::Ctx) -> Self;
}
