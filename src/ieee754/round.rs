/*
    Rounding
*/

use crate::Context;

use super::*;

// Implementing IEEEContext
impl IEEEContext {
    /// Creates a new rounding context for `Float`s
    /// with `rm` set to `RoundingMode::NearestEven`
    /// and `ftz` set to false.
    pub const fn new() -> Self {
        Self {
            rm: RoundingMode::NearestEven,
            ftz: false,
        }
    }

    /// Sets the rounding mode.
    pub fn rounding_mode(mut self, rm: RoundingMode) -> Self {
        self.rm = rm;
        self
    }

    /// Sets the flush-to-zero option: subnormal results
    /// are replaced by a zero of the same sign.
    pub fn flush_subnormals(mut self, ftz: bool) -> Self {
        self.ftz = ftz;
        self
    }

    /// Returns the rounding mode.
    pub fn rm(&self) -> RoundingMode {
        self.rm
    }

    /// Returns the flush-to-zero option.
    pub fn ftz(&self) -> bool {
        self.ftz
    }
}

impl Context for IEEEContext {}

impl Default for IEEEContext {
    fn default() -> Self {
        Self::new()
    }
}

// Rounding utilities
impl<const E: usize, const N: usize> Float<E, N> {
    // Rounds the finite number `(-1)^s * (c + d) * 2^exp`, where `d` is
    // zero when `sticky_bit` is false and strictly between 0 and 1 otherwise.
    // A set `sticky_bit` requires `c` to carry at least `PREC + 3` bits.
    pub(crate) fn round_finite(
        s: bool,
        mut exp: i64,
        mut c: u128,
        mut sticky_bit: bool,
        ctx: &IEEEContext,
    ) -> Self {
        if c == 0 {
            // The exceptional case: exact zero
            // Return zero, no exception flags are raised
            debug_assert!(!sticky_bit, "sticky bit set below a zero significand");
            return Self::zero(s);
        }

        // Normalize `c` to exactly `PREC + 3` digits:
        // the output significand followed by three rounding bits
        let width = Self::PREC + 3;
        let len = bit_length(c);
        if len < width {
            debug_assert!(!sticky_bit, "sticky bit set below a short significand");
            c <<= width - len;
            exp -= (width - len) as i64;
        } else if len > width {
            let (high, lost) = shift_right_accum(c, len - width);
            c = high;
            sticky_bit |= lost;
            exp += (len - width) as i64;
        }

        // `exp` now refers to the output significand
        exp += 3;

        // tininess is detected before rounding: shift the value
        // into the subnormal range, collecting lost bits
        let tiny = exp < Self::EXPMIN;
        if tiny {
            let shift = (Self::EXPMIN - exp).min(u128::BITS as i64) as usize;
            let (high, lost) = shift_right_accum(c, shift);
            c = high;
            sticky_bit |= lost;
            exp = Self::EXPMIN;
        }

        // `c_new` - highest `PREC` bits
        // `half_bit` - unrounded value is at least half way to the next representable float
        // `quarter_bit` - unrounded value is either 1/4 or 3/4 of the way
        //  to the next representable float (depending on `half_bit`)
        // `sticky_bit` - any remaining bit is set
        let c_new = (c >> 3) as u64;
        let half_bit = c & 0b100 != 0;
        let quarter_bit = c & 0b010 != 0;
        sticky_bit |= c & 0b001 != 0;

        // finish the rounding process with all the rounding information
        Self::round_finalize(s, exp, c_new, half_bit, quarter_bit, sticky_bit, tiny, ctx)
    }

    // Returns true if the rounding information implies the mantissa,
    // as viewed as integer, should be incremented by 1. Unlike `round_finalize`
    // we only need the `half_bit` a sticky bit.
    fn round_requires_increment(
        sign: bool,
        lsb: bool,
        half_bit: bool,
        sticky_bit: bool,
        rm: RoundingMode,
    ) -> bool {
        match rm.direction(sign) {
            (true, RoundingDirection::ToEven) => {
                // no half bit => truncate
                // half bit and sticky bit => increment
                // tie => increment if lsb since we want it to be 0
                half_bit && (sticky_bit || lsb)
            }
            (true, RoundingDirection::AwayZero) => {
                // (unused)
                // tie => increment
                half_bit
            }
            (true, RoundingDirection::ToZero) => {
                // (unused)
                // tie => truncate
                half_bit && sticky_bit
            }
            (false, RoundingDirection::AwayZero) => {
                // increment if not exact
                half_bit || sticky_bit
            }
            (false, RoundingDirection::ToZero) => {
                // always truncate
                false
            }
            (false, RoundingDirection::ToEven) => {
                // (unused)
                // LSB of the mantissa needs to be 0
                lsb
            }
        }
    }

    // Assuming overflow has occured, return true if
    // the result should be rounded to +/- infinity
    // (rather than +/- MAX_FLOAT).
    fn overflow_to_infinity(sign: bool, rm: RoundingMode) -> bool {
        match rm.direction(sign) {
            // nearest carries all overflows to infinity
            (true, _) => true,
            // away from zero carries all overflows to infinity
            (_, RoundingDirection::AwayZero) => true,
            // carry all overflows to MAX_FLOAT
            (_, RoundingDirection::ToZero) => false,
            // MAX_FLOAT has an odd lsb
            (_, RoundingDirection::ToEven) => true,
        }
    }

    // Constructs a new `Float` based on rounding information.
    // Requires a sign, mantissa, exponent, half bit, and sticky bit
    // The inputs must encode a non-zero, finite number.
    #[allow(clippy::too_many_arguments)]
    fn round_finalize(
        s: bool,
        mut exp: i64,
        mut c: u64,
        half_bit: bool,
        quarter_bit: bool,
        sticky_bit: bool,
        tiny: bool,
        ctx: &IEEEContext,
    ) -> Self {
        // First, we check if we need to round away from zero.
        // We use the sign, rounding mode, LSB of the mantissa, and the rounding bits.
        let qs_bit = quarter_bit || sticky_bit;
        let increment = Self::round_requires_increment(s, c & 1 != 0, half_bit, qs_bit, ctx.rm);
        if increment {
            // increment the mantissa
            // possibly need to adjust exponent (the exponent is unbounded)
            c += 1;
            if c > Self::MAX_SIG {
                c >>= 1;
                exp += 1;
            }
        }

        // The inexact flag is just if any of the rounding bits are high
        let inexact = half_bit || quarter_bit || sticky_bit;

        // Next, we check if overflow occured and alter the result if it has.
        if exp > Self::EXPMAX {
            let flags = Exceptions::default()
                .with_overflow(true)
                .with_inexact(true);
            return if Self::overflow_to_infinity(s, ctx.rm) {
                Self::infinity(s).with_flags(flags)
            } else {
                Self::max_finite(s).with_flags(flags)
            };
        }

        // Some sanity checking
        assert!(
            c <= Self::MAX_SIG,
            "unexpected mantissa after rounding: {:#x}, expected at most {} bits",
            c,
            Self::PREC
        );
        assert!(
            (exp >= Self::EXPMIN) && (exp <= Self::EXPMAX),
            "unexpected exponent after rounding: {} [{}, {}]",
            exp,
            Self::EXPMIN,
            Self::EXPMAX
        );

        let flags = Exceptions::default()
            .with_underflow(tiny && inexact)
            .with_inexact(inexact);

        // construct the number
        let num = if c == 0 {
            FloatNum::Zero(s)
        } else if c < Self::HIDDEN {
            debug_assert_eq!(exp, Self::EXPMIN);
            if ctx.ftz {
                // flushed subnormals are always inexact
                let flags = Exceptions::default()
                    .with_underflow(true)
                    .with_inexact(true);
                return Self::zero(s).with_flags(flags);
            }
            FloatNum::Subnormal(s, c)
        } else {
            FloatNum::Normal(s, exp, c)
        };

        Self { num, flags }
    }
}
