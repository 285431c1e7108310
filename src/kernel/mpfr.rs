/*
    MPFR kernel
*/

/// A kernel backed by MPFR through `rug`.
///
/// Each operation is evaluated at the operand precision with the requested
/// rounding, then subnormalized with the ternary value of the first rounding
/// so no double rounding takes place.
#[derive(Clone, Copy, Debug, Default)]
pub struct MpfrKernel;

pub(crate) mod ops {
    use std::cmp::Ordering;

    use rug::float::Round;
    use rug::Float as BigFloat;

    use crate::{Mode, Precision, RoundingMode};

    // Conversions between a native precision and MPFR values
    pub(crate) trait MpfrPrecision: Precision {
        const PREC: u32;

        fn to_big(self) -> BigFloat;

        fn from_big(f: &BigFloat, round: Round) -> Self;
    }

    impl MpfrPrecision for f32 {
        const PREC: u32 = f32::MANTISSA_DIGITS;

        fn to_big(self) -> BigFloat {
            BigFloat::with_val(Self::PREC, self)
        }

        fn from_big(f: &BigFloat, round: Round) -> Self {
            f.to_f32_round(round)
        }
    }

    impl MpfrPrecision for f64 {
        const PREC: u32 = f64::MANTISSA_DIGITS;

        fn to_big(self) -> BigFloat {
            BigFloat::with_val(Self::PREC, self)
        }

        fn from_big(f: &BigFloat, round: Round) -> Self {
            f.to_f64_round(round)
        }
    }

    fn round_of(rm: RoundingMode) -> Round {
        match rm {
            RoundingMode::NearestEven => Round::Nearest,
            RoundingMode::ToPositive => Round::Up,
            RoundingMode::ToNegative => Round::Down,
            RoundingMode::ToZero => Round::Zero,
        }
    }

    // Brings a rounded result into the subnormal range of `T` and converts it.
    fn finish<T: MpfrPrecision>(mut f: BigFloat, dir: Ordering, round: Round) -> T {
        f.subnormalize_ieee_round(dir, round);
        T::from_big(&f, round)
    }

    pub(crate) fn add<T: MpfrPrecision, M: Mode>(x: T, y: T) -> T {
        let (a, b, round) = (x.to_big(), y.to_big(), round_of(M::RM));
        let (f, dir) = BigFloat::with_val_round(T::PREC, &a + &b, round);
        finish(f, dir, round)
    }

    pub(crate) fn sub<T: MpfrPrecision, M: Mode>(x: T, y: T) -> T {
        let (a, b, round) = (x.to_big(), y.to_big(), round_of(M::RM));
        let (f, dir) = BigFloat::with_val_round(T::PREC, &a - &b, round);
        finish(f, dir, round)
    }

    pub(crate) fn mul<T: MpfrPrecision, M: Mode>(x: T, y: T) -> T {
        let (a, b, round) = (x.to_big(), y.to_big(), round_of(M::RM));
        let (f, dir) = BigFloat::with_val_round(T::PREC, &a * &b, round);
        finish(f, dir, round)
    }

    pub(crate) fn div<T: MpfrPrecision, M: Mode>(x: T, y: T) -> T {
        let (a, b, round) = (x.to_big(), y.to_big(), round_of(M::RM));
        let (f, dir) = BigFloat::with_val_round(T::PREC, &a / &b, round);
        finish(f, dir, round)
    }
}

for_each_entry!(impl_kernel, MpfrKernel, ops);
