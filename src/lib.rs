/*
    Top-level
*/

//! Directed-rounding floating-point arithmetic.
//!
//! Addition, subtraction, multiplication and division over `f32` and `f64`,
//! each in the four IEEE-754 rounding directions:
//!
//! | Tag | Mode | Example |
//! |-----|------|---------|
//! | `rn` | to nearest, ties to even | [`fadd_rn`], [`ddiv_rn`] |
//! | `rz` | toward zero | [`fadd_rz`] |
//! | `ru` | toward +infinity | [`dmul_ru`] |
//! | `rd` | toward -infinity | [`fsub_rd`] |
//!
//! Every operation is a pure function: none of them touch the floating-point
//! environment of the calling thread, so ordinary arithmetic performed before
//! or after a call keeps rounding to nearest.
//!
//! ```
//! use directed_float::*;
//!
//! let tiny = f32::powi(2.0, -25);
//! assert_eq!(fadd_rd(1.0, tiny), 1.0);
//! assert_eq!(fadd_ru(1.0, tiny), 1.0 + f32::EPSILON);
//!
//! // the same operation through the generic interface
//! assert_eq!(add::<Rd, f64>(1.0, 0.1), dadd_rd(1.0, 0.1));
//! assert_eq!(add_ru(1.0f32, tiny), fadd_ru(1.0, tiny));
//! ```
//!
//! The `f` family only accepts single precision, the `d` family only
//! double precision:
//!
//! ```compile_fail
//! let _ = directed_float::fadd_rz(1.0f64, 2.0f64);
//! ```
//!
//! The generic entry points never mix precisions either:
//!
//! ```compile_fail
//! let _ = directed_float::add_rz(1.0f32, 2.0f64);
//! ```
//!
//! Results are computed by a rounding-kernel provider (see [`Kernel`]).
//! The free functions use [`DefaultKernel`]; [`Directed`] accepts any
//! provider.

#[cfg(all(feature = "link-imf", feature = "export-imf"))]
compile_error!("features `link-imf` and `export-imf` are mutually exclusive");

#[macro_use]
mod macros;

mod dispatch;
mod error;
mod number;
mod precision;
mod round;

#[cfg(feature = "export-imf")]
mod export;

pub mod ieee754;
pub mod kernel;

pub use dispatch::*;
pub use error::*;
pub use kernel::{DefaultKernel, Kernel};
pub use number::*;
pub use precision::*;
pub use round::*;
