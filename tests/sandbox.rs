/*
    The sandbox
*/

use directed_float::{ieee754::*, *};

fn mul<N: Number>(x: N, y: N, ctx: N::Ctx) -> N {
    x.mul(&y, &ctx)
}

fn fma_free_dot<N: Number>(xs: &[N], ys: &[N], ctx: &N::Ctx) -> N {
    xs.iter()
        .zip(ys)
        .fold(N::default(), |acc, (x, y)| acc.add(&x.mul(y, ctx), ctx))
}

#[test]
fn sandbox() {
    type N = Float<11, 64>;

    let a = N::from(2.0);
    let b = N::from(3.0);
    let ctx = IEEEContext::default();
    let c = mul(a, b, ctx);
    assert_eq!(f64::from(c), 6.0);
}

#[test]
fn dot_product_bounds() {
    type N = Float<8, 32>;

    let xs: Vec<N> = [0.1f32, 0.2, 0.3].into_iter().map(N::from).collect();
    let ys: Vec<N> = [0.7f32, 0.11, 0.13].into_iter().map(N::from).collect();

    let down = IEEEContext::new().rounding_mode(RoundingMode::ToNegative);
    let up = IEEEContext::new().rounding_mode(RoundingMode::ToPositive);
    let lo = f32::from(fma_free_dot(&xs, &ys, &down));
    let hi = f32::from(fma_free_dot(&xs, &ys, &up));

    // the exact dot product of the stored values lies in [lo, hi]
    let exact: f64 = [0.1f32, 0.2, 0.3]
        .iter()
        .zip([0.7f32, 0.11, 0.13])
        .map(|(&x, y)| x as f64 * y as f64)
        .sum();
    assert!(lo < hi);
    assert!((lo as f64) <= exact && exact <= hi as f64);
}
