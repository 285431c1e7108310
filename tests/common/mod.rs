/*
    Shared test utilities: an exact rational reference
*/

#![allow(dead_code)]

use std::cmp::Ordering;

use directed_float::*;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

/// The four operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

pub const OPS: [Op; 4] = [Op::Add, Op::Sub, Op::Mul, Op::Div];

/// A native precision as seen by the reference.
pub trait Native: Precision {
    const PREC: u32;
    const EXP_BITS: u32;

    fn raw(self) -> u64 {
        self.to_raw()
    }

    fn mant_bits() -> u32 {
        Self::PREC - 1
    }

    fn bias() -> i64 {
        (1 << (Self::EXP_BITS - 1)) - 1
    }

    // exponent of the least significant bit of the smallest normal
    fn expmin() -> i64 {
        1 - Self::bias() - Self::mant_bits() as i64
    }

    // exponent of the least significant bit of the largest finite
    fn expmax() -> i64 {
        Self::bias() - Self::mant_bits() as i64
    }

    fn sign_bit() -> u64 {
        1 << (Self::EXP_BITS + Self::mant_bits())
    }
}

impl Native for f32 {
    const PREC: u32 = 24;
    const EXP_BITS: u32 = 8;
}

impl Native for f64 {
    const PREC: u32 = 53;
    const EXP_BITS: u32 = 11;
}

/// Runs `op` in mode `rm` on the kernel `K`.
pub fn run<K: Kernel, T: Precision>(op: Op, rm: RoundingMode, x: T, y: T) -> T {
    fn with_mode<K: Kernel, M: Mode, T: Precision>(op: Op, x: T, y: T) -> T {
        match op {
            Op::Add => Directed::<K>::add::<M, T>(x, y),
            Op::Sub => Directed::<K>::sub::<M, T>(x, y),
            Op::Mul => Directed::<K>::mul::<M, T>(x, y),
            Op::Div => Directed::<K>::div::<M, T>(x, y),
        }
    }

    match rm {
        RoundingMode::ToNegative => with_mode::<K, Rd, T>(op, x, y),
        RoundingMode::NearestEven => with_mode::<K, Rn, T>(op, x, y),
        RoundingMode::ToPositive => with_mode::<K, Ru, T>(op, x, y),
        RoundingMode::ToZero => with_mode::<K, Rz, T>(op, x, y),
    }
}

// Decodes a finite value as `(sign, c, exp)` with value `(-1)^sign * c * 2^exp`.
fn decode<T: Native>(x: T) -> Option<(bool, BigInt, i64)> {
    let bits = x.raw();
    let m = T::mant_bits();
    let sign = bits & T::sign_bit() != 0;
    let field = (bits >> m) & ((1 << T::EXP_BITS) - 1);
    let frac = bits & ((1 << m) - 1);
    if field == (1 << T::EXP_BITS) - 1 {
        None
    } else if field == 0 {
        Some((sign, BigInt::from(frac), T::expmin()))
    } else {
        let exp = field as i64 - 1 + T::expmin();
        Some((sign, BigInt::from(frac | (1 << m)), exp))
    }
}

fn encode<T: Native>(sign: bool, c: u64, q: i64) -> T {
    let m = T::mant_bits();
    let bits = if c < 1 << m {
        c
    } else {
        let field = (q - T::expmin() + 1) as u64;
        (field << m) | (c - (1 << m))
    };
    T::from_raw(bits | if sign { T::sign_bit() } else { 0 })
}

fn infinity<T: Native>(sign: bool) -> T {
    if sign {
        T::neg_infinity()
    } else {
        T::infinity()
    }
}

fn max_finite<T: Native>(sign: bool) -> T {
    if sign {
        -T::max_value()
    } else {
        T::max_value()
    }
}

// `num / den * 2^exp` with `num >= 0` and `den > 0`
struct Exact {
    neg: bool,
    num: BigInt,
    den: BigInt,
    exp: i64,
}

fn shl(v: &BigInt, by: i64) -> BigInt {
    v << (by as usize)
}

// Rounds a non-zero exact value to `T`.
fn round<T: Native>(v: &Exact, rm: RoundingMode) -> T {
    let m = T::mant_bits() as i64;

    // 2^e <= num / den < 2^(e + 1)
    let mut e = v.num.bits() as i64 - v.den.bits() as i64;
    let ge = if e >= 0 {
        v.num >= shl(&v.den, e)
    } else {
        shl(&v.num, -e) >= v.den
    };
    if !ge {
        e -= 1;
    }

    // quantum of the result
    let mut q = (e + v.exp - m).max(T::expmin());
    let s = v.exp - q;
    let (n, d) = if s >= 0 {
        (shl(&v.num, s), v.den.clone())
    } else {
        (v.num.clone(), shl(&v.den, -s))
    };
    let (i, r) = n.div_rem(&d);

    let increment = match rm {
        RoundingMode::NearestEven => match (&r << 1usize).cmp(&d) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => i.is_odd(),
        },
        RoundingMode::ToPositive => !r.is_zero() && !v.neg,
        RoundingMode::ToNegative => !r.is_zero() && v.neg,
        RoundingMode::ToZero => false,
    };

    let mut c = i.to_u64().expect("significand fits in 64 bits") + increment as u64;
    if c == 1 << (m + 1) {
        c >>= 1;
        q += 1;
    }

    if q > T::expmax() {
        return match rm {
            RoundingMode::NearestEven => infinity(v.neg),
            RoundingMode::ToPositive if !v.neg => infinity(false),
            RoundingMode::ToNegative if v.neg => infinity(true),
            _ => max_finite(v.neg),
        };
    }

    encode(v.neg, c, q)
}

/// The correctly rounded result of `x op y` in mode `rm`,
/// or `None` if the result is NaN.
pub fn reference<T: Native>(op: Op, rm: RoundingMode, x: T, y: T) -> Option<T> {
    if x.is_nan() || y.is_nan() {
        return None;
    }

    let (Some((sx, cx, ex)), Some((sy, cy, ey))) = (decode(x), decode(y)) else {
        return special(op, x, y);
    };

    let zero = |sign: bool| if sign { -T::zero() } else { T::zero() };

    let exact = match op {
        Op::Add | Op::Sub => {
            let sy = if op == Op::Sub { !sy } else { sy };
            let e = ex.min(ey);
            let vx = shl(&cx, ex - e) * if sx { -1 } else { 1 };
            let vy = shl(&cy, ey - e) * if sy { -1 } else { 1 };
            let sum: BigInt = vx + vy;
            if sum.is_zero() {
                let sign = if sx == sy { sx } else { rm == RoundingMode::ToNegative };
                return Some(zero(sign));
            }
            Exact {
                neg: sum.is_negative(),
                num: sum.abs(),
                den: BigInt::from(1),
                exp: e,
            }
        }
        Op::Mul => {
            if cx.is_zero() || cy.is_zero() {
                return Some(zero(sx != sy));
            }
            Exact {
                neg: sx != sy,
                num: cx * cy,
                den: BigInt::from(1),
                exp: ex + ey,
            }
        }
        Op::Div => {
            match (cx.is_zero(), cy.is_zero()) {
                (true, true) => return None,
                (true, false) => return Some(zero(sx != sy)),
                (false, true) => return Some(infinity(sx != sy)),
                (false, false) => {}
            }
            Exact {
                neg: sx != sy,
                num: cx,
                den: cy,
                exp: ex - ey,
            }
        }
    };

    Some(round(&exact, rm))
}

// Results with at least one infinite operand.
fn special<T: Native>(op: Op, x: T, y: T) -> Option<T> {
    let r = match op {
        Op::Add => x + y,
        Op::Sub => x - y,
        Op::Mul => x * y,
        Op::Div => x / y,
    };
    if r.is_nan() {
        None
    } else {
        Some(r)
    }
}

/// Compares bit patterns, treating every NaN as equal.
pub fn same<T: Native>(a: T, b: T) -> bool {
    (a.is_nan() && b.is_nan()) || a.raw() == b.raw()
}
