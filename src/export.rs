/*
    Exported kernel symbols
*/

// Exports the 32 `__imf_*` entry points with C linkage,
// each backed by `DefaultKernel`.

use crate::{DefaultKernel, Kernel};

macro_rules! export_imf {
    (
        []
        $(($name:ident, $sym:ident, $t:ty, $op:ident, $mode:ident)),* $(,)?
    ) => {
        $(
            #[no_mangle]
            pub extern "C" fn $sym(x: $t, y: $t) -> $t {
                <DefaultKernel as Kernel>::$name(x, y)
            }
        )*
    };
}

for_each_entry!(export_imf);
