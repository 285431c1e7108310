/*
    IEEE-754 binary floating-point numbers
*/

//! An integer soft-float model of IEEE-754 binary formats.
//!
//! [`Float<E, N>`] is a binary interchange format with `E` exponent bits
//! and `N` bits overall. Arithmetic on it is exact up to a single final
//! rounding step that honors the rounding mode of an [`IEEEContext`],
//! and every result carries the IEEE-754 exception flags it raised.
//! No global state is read or written.
//!
//! ```
//! use directed_float::ieee754::*;
//! use directed_float::RoundingMode;
//!
//! let x = Double::from(1.0);
//! let y = Double::from(3.0);
//! let down = x.div(&y, &IEEEContext::new().rounding_mode(RoundingMode::ToNegative));
//! let up = x.div(&y, &IEEEContext::new().rounding_mode(RoundingMode::ToPositive));
//!
//! assert!(down.inexact_flag());
//! assert!(f64::from(down) < f64::from(up));
//! assert_eq!(f64::from(down), 1.0 / 3.0);
//! ```

mod arithmetic;
mod convert;
mod exceptions;
mod number;
mod round;
mod util;

pub use crate::{RoundingDirection, RoundingMode};

use util::*;

// Floating-point encoding grouped by classification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FloatNum {
    // signed zero
    // => (sign)
    Zero(bool),
    // subnormal number `(-1)^s * c * 2^EXPMIN`
    // => (sign, significand)
    Subnormal(bool, u64),
    // normal number `(-1)^s * c * 2^exp`
    // => (sign, exponent, significand)
    Normal(bool, i64, u64),
    // infinity (+/-)
    // => (sign)
    Infinity(bool),
    // not-a-number
    // => (sign, signaling, payload)
    Nan(bool, bool, u64),
}

/** Exception flags as specified by the IEEE-754 standard.
 *
 * Besides returning a (possibly) numerical result, any computation with
 * floating-point numbers may also raise exceptions depending on certain conditions.
 * These exceptions include:
 *
 *  - invalid: no useful definable result;
 *  - division by zero: an infinite result for finite arguments;
 *  - overflow: result exceeded in magnitude what would have been the rounded result
 *      had the exponent range been unbounded;
 *  - underflow: non-zero result that would lie strictly between
 *      `-b^emin` and `+b^emin` had the exponent range and precision been unbounded,
 *      and that is also inexact;
 *  - inexact: result would be different had both the exponent range and precision been unbounded.
 *
 */
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Exceptions {
    invalid: bool,
    div_by_zero: bool,
    overflow: bool,
    underflow: bool,
    inexact: bool,
}

/// Rounding context for `Float` arithmetic.
///
/// Built with [`IEEEContext::new`] and the builder methods
/// [`IEEEContext::rounding_mode`] and [`IEEEContext::flush_subnormals`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IEEEContext {
    rm: RoundingMode,
    ftz: bool,
}

/** A floating-point number as specified by the IEEE-754 standard.
 *
 * The generics `E` and `N` specify the number of bits in the
 * exponent field and in the entire float overall.
 * Formats must satisfy `2 <= E <= 15`, `N <= 64` and `2 <= N - E <= 60`.
 *
 */
#[derive(Copy, Clone, Debug)]
pub struct Float<const E: usize, const N: usize> {
    num: FloatNum,     // number encoding
    flags: Exceptions, // exceptions
}

/// Alias for `Float<11, 64>` (double-precision number)
pub type Double = Float<11, 64>;
/// Alias for `Float<8, 32>` (single-precision number)
pub type Single = Float<8, 32>;
/// Alias for `Float<8, 16>` (bfloat16 number)
pub type BFloat16 = Float<8, 16>;
/// Alias for `Float<5, 16>` (half-precision number)
pub type Half = Float<5, 16>;
