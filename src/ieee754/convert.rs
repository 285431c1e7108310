/*
    Conversions to and from `Float<E, N>`
*/

use super::number::assert_valid_format;
use super::*;

// Utility
impl<const E: usize, const N: usize> Float<E, N> {
    // All ones in the exponent field: infinities and NaNs.
    const EXP_FIELD_MAX: u64 = (1 << E) - 1;

    // Splices a packed floating-point representation into
    // the sign, exponent, and mantissa field.
    // Does not check if `bits` has the correct number of bits.
    #[inline]
    fn split_packed(bits: u64) -> (bool, u64, u64) {
        (
            Self::packed_sign(bits),
            Self::packed_exponent(bits),
            Self::packed_mantissa(bits),
        )
    }

    #[inline]
    fn pack_components(s: bool, e: u64, m: u64) -> u64 {
        assert!(
            e <= Self::EXP_FIELD_MAX,
            "trying to pack a float with exponent field: {:#x}, expected at most {} bits",
            e,
            E
        );
        assert!(
            m >> Self::M == 0,
            "trying to pack a float with mantissa field: {:#x}, expected at most {} bits",
            m,
            Self::M
        );

        ((s as u64) << (N - 1)) | (e << Self::M) | m
    }

    // Returns the sign field from a packed floating-point representation.
    #[inline]
    fn packed_sign(bits: u64) -> bool {
        (bits >> (N - 1)) & 1 != 0
    }

    // Returns the exponent field from a packed floating-point representation.
    #[inline]
    fn packed_exponent(bits: u64) -> u64 {
        (bits >> Self::M) & Self::EXP_FIELD_MAX
    }

    // Returns the mantissa field from a packed floating-point representation.
    #[inline]
    fn packed_mantissa(bits: u64) -> u64 {
        bits & (Self::HIDDEN - 1)
    }

    /// Decodes the packed `N`-bit interchange encoding held in the
    /// low bits of `bits`.
    pub fn from_bits(bits: u64) -> Self {
        assert_valid_format!(E, N);
        assert!(
            bits.checked_shr(N as u32).unwrap_or(0) == 0,
            "expected an encoding of at most {} bits, received {:#x}",
            N,
            bits
        );

        // split fields
        let (s, e, m) = Self::split_packed(bits);

        // branch on exponent
        if e == Self::EXP_FIELD_MAX {
            if m == 0 {
                // infinity
                Self::infinity(s)
            } else {
                // NaN: the top mantissa bit is the quiet bit,
                // the rest is the payload
                let quiet = (m >> (Self::M - 1)) & 1 != 0;
                let payload = m & ((1 << Self::NAN_PAYLOAD_SIZE) - 1);
                Self::nan(s, !quiet, payload)
            }
        } else if e == 0 {
            if m == 0 {
                Self::zero(s)
            } else {
                Self {
                    num: FloatNum::Subnormal(s, m),
                    flags: Exceptions::default(),
                }
            }
        } else {
            // normal: restore the leading 1
            let exp = e as i64 - Self::BIAS - Self::M as i64;
            Self {
                num: FloatNum::Normal(s, exp, m | Self::HIDDEN),
                flags: Exceptions::default(),
            }
        }
    }

    /// Encodes this `Float` in the packed `N`-bit interchange format.
    pub fn to_bits(&self) -> u64 {
        match self.num {
            FloatNum::Zero(s) => Self::pack_components(s, 0, 0),
            FloatNum::Subnormal(s, c) => Self::pack_components(s, 0, c),
            FloatNum::Normal(s, exp, c) => {
                let e = exp + Self::BIAS + Self::M as i64;
                Self::pack_components(s, e as u64, c & (Self::HIDDEN - 1))
            }
            FloatNum::Infinity(s) => Self::pack_components(s, Self::EXP_FIELD_MAX, 0),
            FloatNum::Nan(s, signaling, payload) => {
                // a signaling NaN needs a nonzero payload to stay distinct from infinity
                let payload = if signaling && payload == 0 { 1 } else { payload };
                let quiet = (!signaling as u64) << (Self::M - 1);
                Self::pack_components(s, Self::EXP_FIELD_MAX, quiet | payload)
            }
        }
    }
}

// Implementing `From<f32>` for `Float<8, 32>`
impl From<f32> for Float<8, 32> {
    fn from(f: f32) -> Self {
        Self::from_bits(f.to_bits() as u64)
    }
}

// Implementing `From<f64>` for `Float<11, 64>`
impl From<f64> for Float<11, 64> {
    fn from(f: f64) -> Self {
        Self::from_bits(f.to_bits())
    }
}

// Implementing `From<Float<8, 32>>` for `f32`
impl From<Float<8, 32>> for f32 {
    fn from(f: Float<8, 32>) -> Self {
        f32::from_bits(f.to_bits() as u32)
    }
}

// Implementing `From<Float<11, 64>>` for `f64`
impl From<Float<11, 64>> for f64 {
    fn from(f: Float<11, 64>) -> Self {
        f64::from_bits(f.to_bits())
    }
}
