/*
    Rounding-kernel providers
*/

//! Rounding-kernel providers.
//!
//! A [`Kernel`] supplies one function per (operator, mode, precision)
//! triple. The dispatcher only ever calls these functions; how the
//! correctly rounded result is obtained is up to the provider:
//!
//! - [`SoftKernel`] runs the integer soft-float engine in [`crate::ieee754`];
//! - [`CompensatedKernel`] corrects the hardware round-to-nearest result
//!   with an exact error term, deferring to [`SoftKernel`] on edge cases;
//! - `MpfrKernel` (feature `mpfr`) evaluates with MPFR;
//! - `ImfKernel` (feature `link-imf`) calls externally linked
//!   `__imf_*` symbols.
//!
//! None of them touch the floating-point environment.

mod compensated;
mod soft;

#[cfg(feature = "mpfr")]
mod mpfr;

#[cfg(feature = "link-imf")]
mod imf;

pub use compensated::CompensatedKernel;
pub use soft::SoftKernel;

#[cfg(feature = "mpfr")]
pub use mpfr::MpfrKernel;

#[cfg(feature = "link-imf")]
pub use imf::ImfKernel;

/// The provider behind the crate-level free functions.
#[cfg(not(feature = "soft-default"))]
pub type DefaultKernel = CompensatedKernel;

/// The provider behind the crate-level free functions.
#[cfg(feature = "soft-default")]
pub type DefaultKernel = SoftKernel;

macro_rules! declare_kernel {
    (
        []
        $(($name:ident, $sym:ident, $t:ty, $op:ident, $mode:ident)),* $(,)?
    ) => {
        /// A rounding-kernel provider.
        ///
        /// Each function returns the exact result of the operation rounded
        /// to the operand precision in the direction named by its suffix,
        /// following the IEEE-754 rules for NaNs, infinities and signed zeros.
        /// Implementations must be pure: no global state may be read or
        /// modified, including the rounding mode of the calling thread.
        pub trait Kernel: 'static {
            $(
                #[doc = concat!(
                    "`x ", stringify!($op), " y` on `", stringify!($t),
                    "`, rounded as [`", stringify!($mode), "`](crate::", stringify!($mode), ")."
                )]
                fn $name(x: $t, y: $t) -> $t;
            )*
        }
    };
}

for_each_entry!(declare_kernel);
