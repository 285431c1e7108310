mod common;

use common::*;
use directed_float::kernel::{CompensatedKernel, SoftKernel};
use directed_float::*;
use proptest::prelude::*;

// Finite doubles with exponents clustered around 1.0
fn f64_near_one() -> impl Strategy<Value = f64> {
    (any::<bool>(), 0x3a0u64..0x460, any::<u64>()).prop_map(|(s, e, m)| {
        f64::from_bits(((s as u64) << 63) | (e << 52) | (m & ((1 << 52) - 1)))
    })
}

// Singles with exponents clustered around 1.0
fn f32_near_one() -> impl Strategy<Value = f32> {
    (any::<bool>(), 0x60u32..0xa0, any::<u32>()).prop_map(|(s, e, m)| {
        f32::from_bits(((s as u32) << 31) | (e << 23) | (m & ((1 << 23) - 1)))
    })
}

// Subnormal and barely normal doubles
fn f64_tiny() -> impl Strategy<Value = f64> {
    (any::<bool>(), 0u64..3, any::<u64>()).prop_map(|(s, e, m)| {
        f64::from_bits(((s as u64) << 63) | (e << 52) | (m & ((1 << 52) - 1)))
    })
}

fn check<K: Kernel, T: Native>(x: T, y: T) -> Result<(), TestCaseError> {
    for op in OPS {
        for rm in RoundingMode::ALL {
            let got = run::<K, T>(op, rm, x, y);
            match reference(op, rm, x, y) {
                Some(expected) => prop_assert!(
                    same(got, expected),
                    "{:?} {} {:?} {:?}: got {:?}, expected {:?}",
                    op,
                    rm,
                    x,
                    y,
                    got,
                    expected
                ),
                None => prop_assert!(got.is_nan(), "{:?} {} {:?} {:?}: got {:?}", op, rm, x, y, got),
            }
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn soft_f64_matches_reference(x in any::<u64>(), y in any::<u64>()) {
        check::<SoftKernel, f64>(f64::from_bits(x), f64::from_bits(y))?;
    }

    #[test]
    fn soft_f32_matches_reference(x in any::<u32>(), y in any::<u32>()) {
        check::<SoftKernel, f32>(f32::from_bits(x), f32::from_bits(y))?;
    }

    #[test]
    fn compensated_f64_matches_reference(x in any::<u64>(), y in any::<u64>()) {
        check::<CompensatedKernel, f64>(f64::from_bits(x), f64::from_bits(y))?;
    }

    #[test]
    fn compensated_f32_matches_reference(x in any::<u32>(), y in any::<u32>()) {
        check::<CompensatedKernel, f32>(f32::from_bits(x), f32::from_bits(y))?;
    }

    #[test]
    fn kernels_agree_near_one_f64(x in f64_near_one(), y in f64_near_one()) {
        check::<SoftKernel, f64>(x, y)?;
        check::<CompensatedKernel, f64>(x, y)?;
    }

    #[test]
    fn kernels_agree_near_one_f32(x in f32_near_one(), y in f32_near_one()) {
        check::<SoftKernel, f32>(x, y)?;
        check::<CompensatedKernel, f32>(x, y)?;
    }

    #[test]
    fn kernels_agree_on_subnormals(x in f64_tiny(), y in f64_tiny()) {
        check::<SoftKernel, f64>(x, y)?;
        check::<CompensatedKernel, f64>(x, y)?;
    }

    #[test]
    fn kernels_agree_on_tiny_products(x in f64_tiny(), y in f64_near_one()) {
        // products and quotients landing in the subnormal range
        check::<SoftKernel, f64>(x, y)?;
        check::<CompensatedKernel, f64>(x, y)?;
        check::<CompensatedKernel, f64>(y, x)?;
    }
}

#[test]
fn cancellation() {
    // 1 + 2^-52 - 1 is exact; 1 - (1 - 2^-53) as well
    let eps = f64::EPSILON;
    for rm in RoundingMode::ALL {
        assert_eq!(run::<SoftKernel, f64>(Op::Sub, rm, 1.0 + eps, 1.0), eps);
        assert_eq!(run::<CompensatedKernel, f64>(Op::Sub, rm, 1.0 + eps, 1.0), eps);
        assert_eq!(run::<SoftKernel, f64>(Op::Sub, rm, 1.0, 1.0 - eps / 2.0), eps / 2.0);
    }
}

#[test]
fn far_apart_operands() {
    // the smaller operand only contributes a sticky bit
    let x = 1.0f64;
    let y = 1e-300f64;
    assert_eq!(Directed::<SoftKernel>::dadd_rd(x, y), 1.0);
    assert_eq!(Directed::<SoftKernel>::dadd_ru(x, y), 1.0 + f64::EPSILON);
    assert_eq!(Directed::<SoftKernel>::dsub_rd(x, y), 1.0 - f64::EPSILON / 2.0);
    assert_eq!(Directed::<SoftKernel>::dsub_rz(x, y), 1.0 - f64::EPSILON / 2.0);
    assert_eq!(Directed::<SoftKernel>::dsub_ru(x, y), 1.0);
    assert_eq!(Directed::<SoftKernel>::dsub_rn(x, y), 1.0);
}

#[test]
fn overflow_per_direction() {
    let max = f32::MAX;
    assert_eq!(Directed::<SoftKernel>::fmul_rn(max, 2.0), f32::INFINITY);
    assert_eq!(Directed::<SoftKernel>::fmul_ru(max, 2.0), f32::INFINITY);
    assert_eq!(Directed::<SoftKernel>::fmul_rd(max, 2.0), f32::MAX);
    assert_eq!(Directed::<SoftKernel>::fmul_rz(max, 2.0), f32::MAX);
    assert_eq!(Directed::<SoftKernel>::fmul_rd(-max, 2.0), f32::NEG_INFINITY);
    assert_eq!(Directed::<SoftKernel>::fmul_ru(-max, 2.0), -f32::MAX);

    assert_eq!(Directed::<CompensatedKernel>::dadd_ru(f64::MAX, 1.0), f64::INFINITY);
    assert_eq!(Directed::<CompensatedKernel>::dadd_rd(f64::MAX, 1.0), f64::MAX);
    assert_eq!(Directed::<CompensatedKernel>::dadd_rn(f64::MAX, 1.0), f64::MAX);
}

#[test]
fn underflow_per_direction() {
    let tiny = f64::from_bits(1);
    assert_eq!(Directed::<CompensatedKernel>::dmul_rd(tiny, 0.5), 0.0);
    assert_eq!(Directed::<CompensatedKernel>::dmul_ru(tiny, 0.5), tiny);
    assert!(Directed::<CompensatedKernel>::dmul_rz(-tiny, 0.5).is_sign_negative());
    assert_eq!(Directed::<CompensatedKernel>::dmul_rd(-tiny, 0.5), -tiny);
    assert_eq!(Directed::<SoftKernel>::ddiv_ru(tiny, 3.0), tiny);
    assert_eq!(Directed::<SoftKernel>::ddiv_rd(tiny, 3.0), 0.0);
}
