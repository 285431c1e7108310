/*
    Native precisions
*/

use std::fmt::Debug;

use crate::ieee754::{Double, IEEEContext, Single};
use crate::{Kernel, Mode, Number};

/// A native floating-point precision accepted by the generic entry points.
///
/// Implemented for `f32` and `f64` only. The associated constants describe
/// the binary interchange format in the integer-significand form
/// `(-1)^s * c * 2^exp` used throughout the crate.
pub trait Precision:
    num_traits::Float + Default + Debug + Send + Sync + 'static + private::Sealed
{
    /// The soft-float format with the same encoding.
    type Soft: From<Self> + Into<Self> + Number<Ctx = IEEEContext> + Copy;

    /// Bitwidth of the exponent field.
    const E: u32;

    /// Bitwidth of the mantissa field.
    const M: u32;

    /// The exponent field bias.
    const BIAS: i64;

    /// Exponent of the least significant significand bit
    /// of the smallest normal (and every subnormal) value.
    const EXPMIN: i64;

    /// Precision tag used in entry point names (`f` or `d`).
    const TAG: &'static str;

    /// Returns the raw encoding, zero-extended to 64 bits.
    fn to_raw(self) -> u64;

    /// Builds a value from its raw encoding held in the low bits.
    fn from_raw(bits: u64) -> Self;

    /// Routes an addition in mode `M` to the matching entry point of `K`.
    fn route_add<K: Kernel, M: Mode>(x: Self, y: Self) -> Self;

    /// Routes a subtraction in mode `M` to the matching entry point of `K`.
    fn route_sub<K: Kernel, M: Mode>(x: Self, y: Self) -> Self;

    /// Routes a multiplication in mode `M` to the matching entry point of `K`.
    fn route_mul<K: Kernel, M: Mode>(x: Self, y: Self) -> Self;

    /// Routes a division in mode `M` to the matching entry point of `K`.
    fn route_div<K: Kernel, M: Mode>(x: Self, y: Self) -> Self;
}

mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

impl Precision for f32 {
    type Soft = Single;

    const E: u32 = Single::E as u32;
    const M: u32 = Single::M as u32;
    const BIAS: i64 = Single::BIAS;
    const EXPMIN: i64 = Single::EXPMIN;
    const TAG: &'static str = "f";

    #[inline]
    fn to_raw(self) -> u64 {
        self.to_bits() as u64
    }

    #[inline]
    fn from_raw(bits: u64) -> Self {
        f32::from_bits(bits as u32)
    }

    #[inline(always)]
    fn route_add<K: Kernel, M: Mode>(x: Self, y: Self) -> Self {
        M::fadd::<K>(x, y)
    }

    #[inline(always)]
    fn route_sub<K: Kernel, M: Mode>(x: Self, y: Self) -> Self {
        M::fsub::<K>(x, y)
    }

    #[inline(always)]
    fn route_mul<K: Kernel, M: Mode>(x: Self, y: Self) -> Self {
        M::fmul::<K>(x, y)
    }

    #[inline(always)]
    fn route_div<K: Kernel, M: Mode>(x: Self, y: Self) -> Self {
        M::fdiv::<K>(x, y)
    }
}

impl Precision for f64 {
    type Soft = Double;

    const E: u32 = Double::E as u32;
    const M: u32 = Double::M as u32;
    const BIAS: i64 = Double::BIAS;
    const EXPMIN: i64 = Double::EXPMIN;
    const TAG: &'static str = "d";

    #[inline]
    fn to_raw(self) -> u64 {
        self.to_bits()
    }

    #[inline]
    fn from_raw(bits: u64) -> Self {
        f64::from_bits(bits)
    }

    #[inline(always)]
    fn route_add<K: Kernel, M: Mode>(x: Self, y: Self) -> Self {
        M::dadd::<K>(x, y)
    }

    #[inline(always)]
    fn route_sub<K: Kernel, M: Mode>(x: Self, y: Self) -> Self {
        M::dsub::<K>(x, y)
    }

    #[inline(always)]
    fn route_mul<K: Kernel, M: Mode>(x: Self, y: Self) -> Self {
        M::dmul::<K>(x, y)
    }

    #[inline(always)]
    fn route_div<K: Kernel, M: Mode>(x: Self, y: Self) -> Self {
        M::ddiv::<K>(x, y)
    }
}
