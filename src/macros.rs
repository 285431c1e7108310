/*
    Entry point table
*/

// Expands `$m!` over every (operator, mode, precision) entry point.
//
// Each row is `(name, symbol, precision, operator, mode)` where `symbol`
// is the C name of the externally linked kernel. Extra arguments are
// forwarded to `$m!` inside the leading brackets.
macro_rules! for_each_entry {
    ($m:ident $(, $arg:tt)*) => {
        $m! {
            [$($arg)*]
            (fadd_rd, __imf_fadd_rd, f32, add, Rd),
            (fadd_rn, __imf_fadd_rn, f32, add, Rn),
            (fadd_ru, __imf_fadd_ru, f32, add, Ru),
            (fadd_rz, __imf_fadd_rz, f32, add, Rz),
            (fsub_rd, __imf_fsub_rd, f32, sub, Rd),
            (fsub_rn, __imf_fsub_rn, f32, sub, Rn),
            (fsub_ru, __imf_fsub_ru, f32, sub, Ru),
            (fsub_rz, __imf_fsub_rz, f32, sub, Rz),
            (fmul_rd, __imf_fmul_rd, f32, mul, Rd),
            (fmul_rn, __imf_fmul_rn, f32, mul, Rn),
            (fmul_ru, __imf_fmul_ru, f32, mul, Ru),
            (fmul_rz, __imf_fmul_rz, f32, mul, Rz),
            (fdiv_rd, __imf_fdiv_rd, f32, div, Rd),
            (fdiv_rn, __imf_fdiv_rn, f32, div, Rn),
            (fdiv_ru, __imf_fdiv_ru, f32, div, Ru),
            (fdiv_rz, __imf_fdiv_rz, f32, div, Rz),
            (dadd_rd, __imf_dadd_rd, f64, add, Rd),
            (dadd_rn, __imf_dadd_rn, f64, add, Rn),
            (dadd_ru, __imf_dadd_ru, f64, add, Ru),
            (dadd_rz, __imf_dadd_rz, f64, add, Rz),
            (dsub_rd, __imf_dsub_rd, f64, sub, Rd),
            (dsub_rn, __imf_dsub_rn, f64, sub, Rn),
            (dsub_ru, __imf_dsub_ru, f64, sub, Ru),
            (dsub_rz, __imf_dsub_rz, f64, sub, Rz),
            (dmul_rd, __imf_dmul_rd, f64, mul, Rd),
            (dmul_rn, __imf_dmul_rn, f64, mul, Rn),
            (dmul_ru, __imf_dmul_ru, f64, mul, Ru),
            (dmul_rz, __imf_dmul_rz, f64, mul, Rz),
            (ddiv_rd, __imf_ddiv_rd, f64, div, Rd),
            (ddiv_rn, __imf_ddiv_rn, f64, div, Rn),
            (ddiv_ru, __imf_ddiv_ru, f64, div, Ru),
            (ddiv_rz, __imf_ddiv_rz, f64, div, Rz),
        }
    };
}

// Implements `Kernel` for a provider whose arithmetic is written once,
// generically over precision and mode, in the module `$ops` as
// `$ops::{add, sub, mul, div}::<T, M>(x, y)`.
macro_rules! impl_kernel {
    (
        [$provider:ident $ops:ident]
        $(($name:ident, $sym:ident, $t:ty, $op:ident, $mode:ident)),* $(,)?
    ) => {
        impl $crate::Kernel for $provider {
            $(
                #[inline]
                fn $name(x: $t, y: $t) -> $t {
                    $ops::$op::<$t, $crate::$mode>(x, y)
                }
            )*
        }
    };
}
