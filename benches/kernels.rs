use directed_float::kernel::{CompensatedKernel, SoftKernel};
use directed_float::*;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn inputs() -> Vec<(f64, f64)> {
    (1..1024)
        .map(|i| (1.0 / i as f64, (i as f64).sqrt() - 0.5))
        .collect()
}

fn sweep<K: Kernel, M: Mode>(xs: &[(f64, f64)]) -> f64 {
    let mut acc = 0.0;
    for &(x, y) in xs {
        acc += Directed::<K>::add::<M, f64>(x, y);
        acc += Directed::<K>::mul::<M, f64>(x, y);
        acc += Directed::<K>::div::<M, f64>(x, y);
    }
    acc
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let xs = inputs();
    c.bench_function("native_rn", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &(x, y) in black_box(&xs) {
                acc += x + y;
                acc += x * y;
                acc += x / y;
            }
            acc
        })
    });
    c.bench_function("compensated_rn", |b| b.iter(|| sweep::<CompensatedKernel, Rn>(black_box(&xs))));
    c.bench_function("compensated_rd", |b| b.iter(|| sweep::<CompensatedKernel, Rd>(black_box(&xs))));
    c.bench_function("compensated_rz", |b| b.iter(|| sweep::<CompensatedKernel, Rz>(black_box(&xs))));
    c.bench_function("soft_rn", |b| b.iter(|| sweep::<SoftKernel, Rn>(black_box(&xs))));
    c.bench_function("soft_rd", |b| b.iter(|| sweep::<SoftKernel, Rd>(black_box(&xs))));
    c.bench_function("soft_rz", |b| b.iter(|| sweep::<SoftKernel, Rz>(black_box(&xs))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
