/*
    Rounding modes
*/

use std::fmt;
use std::str::FromStr;

use crate::{Kernel, ParseModeError};

/// A specification for rounding behavior.
///
/// For any computer number system, most mathematical operators
/// can be decomposed into two operations:
///  - a real number operation: `R^n -> R`, and
///  - a rounding operation: `R -> R`.
/// A `Context` describes the second operation, the rounding behavior that
/// should be used to apply a "fit-to-representation" on a real number output.
pub trait Context: Sized {}

/// The four IEEE-754 rounding-direction attributes for binary formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round to nearest, ties to even (`rn`).
    #[default]
    NearestEven,
    /// Round toward +infinity (`ru`).
    ToPositive,
    /// Round toward -infinity (`rd`).
    ToNegative,
    /// Round toward zero (`rz`).
    ToZero,
}

/// Rounding behavior once the sign of the unrounded value is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundingDirection {
    ToEven,
    ToZero,
    AwayZero,
}

impl RoundingMode {
    /// All rounding modes, in entry point order.
    pub const ALL: [RoundingMode; 4] = [
        RoundingMode::ToNegative,
        RoundingMode::NearestEven,
        RoundingMode::ToPositive,
        RoundingMode::ToZero,
    ];

    /// Translates a `RoundingMode` and sign bit to a `RoundingDirection`
    /// and a boolean indicating if the direction only specifies tie-breaking behavior.
    pub fn direction(&self, sign: bool) -> (bool, RoundingDirection) {
        match (self, sign) {
            (RoundingMode::NearestEven, _) => (true, RoundingDirection::ToEven),
            (RoundingMode::ToPositive, false) => (false, RoundingDirection::AwayZero),
            (RoundingMode::ToPositive, true) => (false, RoundingDirection::ToZero),
            (RoundingMode::ToNegative, false) => (false, RoundingDirection::ToZero),
            (RoundingMode::ToNegative, true) => (false, RoundingDirection::AwayZero),
            (RoundingMode::ToZero, _) => (false, RoundingDirection::ToZero),
        }
    }

    /// The two-letter tag used in entry point names.
    pub const fn tag(&self) -> &'static str {
        match self {
            RoundingMode::NearestEven => "rn",
            RoundingMode::ToPositive => "ru",
            RoundingMode::ToNegative => "rd",
            RoundingMode::ToZero => "rz",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for RoundingMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rn" | "nearest" => Ok(RoundingMode::NearestEven),
            "ru" | "up" => Ok(RoundingMode::ToPositive),
            "rd" | "down" => Ok(RoundingMode::ToNegative),
            "rz" | "zero" => Ok(RoundingMode::ToZero),
            "" => Err(ParseModeError::Empty),
            _ => Err(ParseModeError::Unknown(s.trim().to_string())),
        }
    }
}

/// A rounding mode selected at compile time.
///
/// Implemented only by the tags [`Rd`], [`Rn`], [`Ru`] and [`Rz`].
/// Each method routes one (operator, precision) pair of this mode
/// to the matching kernel entry point.
pub trait Mode: private::Sealed + Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// The rounding mode this tag stands for.
    const RM: RoundingMode;

    fn fadd<K: Kernel>(x: f32, y: f32) -> f32;
    fn fsub<K: Kernel>(x: f32, y: f32) -> f32;
    fn fmul<K: Kernel>(x: f32, y: f32) -> f32;
    fn fdiv<K: Kernel>(x: f32, y: f32) -> f32;
    fn dadd<K: Kernel>(x: f64, y: f64) -> f64;
    fn dsub<K: Kernel>(x: f64, y: f64) -> f64;
    fn dmul<K: Kernel>(x: f64, y: f64) -> f64;
    fn ddiv<K: Kernel>(x: f64, y: f64) -> f64;
}

mod private {
    pub trait Sealed {}
}

macro_rules! mode_tag {
    (
        $(#[$doc:meta])*
        $tag:ident => $rm:ident,
        [$fadd:ident, $fsub:ident, $fmul:ident, $fdiv:ident,
         $dadd:ident, $dsub:ident, $dmul:ident, $ddiv:ident]
    ) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $tag;

        impl private::Sealed for $tag {}

        impl Mode for $tag {
            const RM: RoundingMode = RoundingMode::$rm;

            #[inline(always)]
            fn fadd<K: Kernel>(x: f32, y: f32) -> f32 { K::$fadd(x, y) }
            #[inline(always)]
            fn fsub<K: Kernel>(x: f32, y: f32) -> f32 { K::$fsub(x, y) }
            #[inline(always)]
            fn fmul<K: Kernel>(x: f32, y: f32) -> f32 { K::$fmul(x, y) }
            #[inline(always)]
            fn fdiv<K: Kernel>(x: f32, y: f32) -> f32 { K::$fdiv(x, y) }
            #[inline(always)]
            fn dadd<K: Kernel>(x: f64, y: f64) -> f64 { K::$dadd(x, y) }
            #[inline(always)]
            fn dsub<K: Kernel>(x: f64, y: f64) -> f64 { K::$dsub(x, y) }
            #[inline(always)]
            fn dmul<K: Kernel>(x: f64, y: f64) -> f64 { K::$dmul(x, y) }
            #[inline(always)]
            fn ddiv<K: Kernel>(x: f64, y: f64) -> f64 { K::$ddiv(x, y) }
        }
    };
}

mode_tag! {
    /// Round toward -infinity.
    Rd => ToNegative,
    [fadd_rd, fsub_rd, fmul_rd, fdiv_rd, dadd_rd, dsub_rd, dmul_rd, ddiv_rd]
}

mode_tag! {
    /// Round to nearest, ties to even.
    Rn => NearestEven,
    [fadd_rn, fsub_rn, fmul_rn, fdiv_rn, dadd_rn, dsub_rn, dmul_rn, ddiv_rn]
}

mode_tag! {
    /// Round toward +infinity.
    Ru => ToPositive,
    [fadd_ru, fsub_ru, fmul_ru, fdiv_ru, dadd_ru, dsub_ru, dmul_ru, ddiv_ru]
}

mode_tag! {
    /// Round toward zero.
    Rz => ToZero,
    [fadd_rz, fsub_rz, fmul_rz, fdiv_rz, dadd_rz, dsub_rz, dmul_rz, ddiv_rz]
}
