/*
    Externally linked kernel
*/

/// A kernel that forwards every call to an externally provided
/// `__imf_{f|d}{add|sub|mul|div}_{rd|rn|ru|rz}` symbol with C linkage.
///
/// The linked provider is trusted to honor the [`Kernel`](crate::Kernel)
/// contract, in particular to leave the floating-point environment alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImfKernel;

macro_rules! link_imf {
    (
        []
        $(($name:ident, $sym:ident, $t:ty, $op:ident, $mode:ident)),* $(,)?
    ) => {
        extern "C" {
            $(fn $sym(x: $t, y: $t) -> $t;)*
        }

        impl crate::Kernel for ImfKernel {
            $(
                #[inline]
                fn $name(x: $t, y: $t) -> $t {
                    // SAFETY: plain-data arguments and result; the symbol
                    // is a pure function of its operands.
                    unsafe { $sym(x, y) }
                }
            )*
        }
    };
}

for_each_entry!(link_imf);
