/*
    Compensated kernel
*/

/// A kernel that corrects the hardware result with an exact error term.
///
/// The round-to-nearest result `r` of `x op y` is computed natively, then
/// the sign of the rounding error `(x op y) - r` is recovered exactly:
///
/// - add/sub: 2Sum, `err = small - (r - big)` with `|big| >= |small|`;
/// - mul: the FMA residual `x * y - r`;
/// - div: the FMA remainder `x - r * y`, whose sign times the sign of `y`
///   is the sign of the error.
///
/// If the error points away from the requested direction, `r` is moved
/// by one unit in the last place. Zero and non-finite results, and
/// operands whose error term could underflow, are handed to
/// [`SoftKernel`](super::SoftKernel).
#[derive(Clone, Copy, Debug, Default)]
pub struct CompensatedKernel;

pub(crate) mod ops {
    use tracing::trace;

    use crate::kernel::soft;
    use crate::{Mode, Precision, RoundingMode};

    // Exponent of the least significant bit of `v` (finite).
    #[inline]
    fn ulp_exp<T: Precision>(v: T) -> i64 {
        let field = (v.to_raw() >> T::M) & ((1 << T::E) - 1);
        if field == 0 {
            T::EXPMIN
        } else {
            field as i64 - T::BIAS - T::M as i64
        }
    }

    // Next value toward +infinity of a finite, non-zero `v`.
    #[inline]
    fn next_up<T: Precision>(v: T) -> T {
        let bits = v.to_raw();
        if v.is_sign_positive() {
            T::from_raw(bits + 1)
        } else {
            T::from_raw(bits - 1)
        }
    }

    // Next value toward -infinity of a finite, non-zero `v`.
    #[inline]
    fn next_down<T: Precision>(v: T) -> T {
        let bits = v.to_raw();
        if v.is_sign_positive() {
            T::from_raw(bits - 1)
        } else {
            T::from_raw(bits + 1)
        }
    }

    // Moves the round-to-nearest result `v` in the direction of `M`
    // given the sign of the rounding error.
    #[inline]
    fn adjust<T: Precision, M: Mode>(v: T, err: T) -> T {
        let zero = T::zero();
        match M::RM {
            RoundingMode::NearestEven => v,
            RoundingMode::ToNegative if err < zero => next_down(v),
            RoundingMode::ToPositive if err > zero => next_up(v),
            RoundingMode::ToZero if v > zero && err < zero => next_down(v),
            RoundingMode::ToZero if v < zero && err > zero => next_up(v),
            _ => v,
        }
    }

    // True when `r` can be corrected in place.
    #[inline]
    fn is_regular<T: Precision>(r: T) -> bool {
        r.is_finite() && !r.is_zero()
    }

    #[cold]
    fn leave_fast_path<T: Precision, M: Mode>(op: &'static str) {
        trace!(op, mode = M::RM.tag(), precision = T::TAG, "falling back to soft-float");
    }

    pub(crate) fn add<T: Precision, M: Mode>(x: T, y: T) -> T {
        let r = x + y;
        if M::RM == RoundingMode::NearestEven {
            return r;
        }
        if !is_regular(r) {
            leave_fast_path::<T, M>("add");
            return soft::ops::add::<T, M>(x, y);
        }

        let (big, small) = if x.abs() >= y.abs() { (x, y) } else { (y, x) };
        let err = small - (r - big);
        adjust::<T, M>(r, err)
    }

    pub(crate) fn sub<T: Precision, M: Mode>(x: T, y: T) -> T {
        let r = x - y;
        if M::RM == RoundingMode::NearestEven {
            return r;
        }
        if !is_regular(r) {
            leave_fast_path::<T, M>("sub");
            return soft::ops::sub::<T, M>(x, y);
        }

        let (big, small) = if x.abs() >= y.abs() { (x, -y) } else { (-y, x) };
        let err = small - (r - big);
        adjust::<T, M>(r, err)
    }

    pub(crate) fn mul<T: Precision, M: Mode>(x: T, y: T) -> T {
        let r = x * y;
        if M::RM == RoundingMode::NearestEven {
            return r;
        }
        // the residual is a multiple of 2^(ulp(x) + ulp(y))
        if !is_regular(r) || ulp_exp(x) + ulp_exp(y) < T::EXPMIN {
            leave_fast_path::<T, M>("mul");
            return soft::ops::mul::<T, M>(x, y);
        }

        let err = x.mul_add(y, -r);
        adjust::<T, M>(r, err)
    }

    pub(crate) fn div<T: Precision, M: Mode>(x: T, y: T) -> T {
        let r = x / y;
        if M::RM == RoundingMode::NearestEven {
            return r;
        }
        // the remainder is a multiple of 2^min(ulp(x), ulp(r) + ulp(y))
        if !is_regular(r) || ulp_exp(r) + ulp_exp(y) < T::EXPMIN {
            leave_fast_path::<T, M>("div");
            return soft::ops::div::<T, M>(x, y);
        }

        let rem = (-r).mul_add(y, x);
        let err = if y.is_sign_negative() { -rem } else { rem };
        adjust::<T, M>(r, err)
    }
}

for_each_entry!(impl_kernel, CompensatedKernel, ops);
