/*
    Directed arithmetic dispatcher
*/

use std::fmt;
use std::marker::PhantomData;

use crate::{DefaultKernel, Kernel, Mode, Precision, Rd, Rn, Ru, Rz};

/// The directed arithmetic dispatcher over a kernel provider `K`.
///
/// Exposes, as associated functions:
///  - the 32 fixed entry points `fadd_rd` ... `ddiv_rz`,
///  - 16 entry points `add_rd::<T>` ... `div_rz::<T>` generic over precision,
///  - `add::<M, T>`, `sub`, `mul` and `div`, generic over mode and precision.
///
/// ```
/// use directed_float::{kernel::SoftKernel, Directed, Ru};
///
/// type Soft = Directed<SoftKernel>;
/// assert_eq!(Soft::fdiv_ru(1.0, 3.0), Soft::div::<Ru, f32>(1.0, 3.0));
/// assert!(Soft::ddiv_rd(1.0, 3.0) < Soft::ddiv_ru(1.0, 3.0));
/// ```
pub struct Directed<K: Kernel = DefaultKernel>(PhantomData<fn() -> K>);

impl<K: Kernel> Directed<K> {
    /// Adds two values in the rounding mode `M`.
    #[inline]
    pub fn add<M: Mode, T: Precision>(x: T, y: T) -> T {
        T::route_add::<K, M>(x, y)
    }

    /// Subtracts `y` from `x` in the rounding mode `M`.
    #[inline]
    pub fn sub<M: Mode, T: Precision>(x: T, y: T) -> T {
        T::route_sub::<K, M>(x, y)
    }

    /// Multiplies two values in the rounding mode `M`.
    #[inline]
    pub fn mul<M: Mode, T: Precision>(x: T, y: T) -> T {
        T::route_mul::<K, M>(x, y)
    }

    /// Divides `x` by `y` in the rounding mode `M`.
    #[inline]
    pub fn div<M: Mode, T: Precision>(x: T, y: T) -> T {
        T::route_div::<K, M>(x, y)
    }
}

impl<K: Kernel> Clone for Directed<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Kernel> Copy for Directed<K> {}

impl<K: Kernel> Default for Directed<K> {
    fn default() -> Self {
        Directed(PhantomData)
    }
}

impl<K: Kernel> fmt::Debug for Directed<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Directed<{}>", std::any::type_name::<K>())
    }
}

// Fixed entry points
macro_rules! fixed_entries {
    (
        [$kernel:ty]
        $(($name:ident, $sym:ident, $t:ty, $op:ident, $mode:ident)),* $(,)?
    ) => {
        $(
            #[doc = concat!(
                "`x ", stringify!($op), " y` on `", stringify!($t),
                "`, rounded as [`", stringify!($mode), "`]."
            )]
            #[inline]
            pub fn $name(x: $t, y: $t) -> $t {
                <$kernel as Kernel>::$name(x, y)
            }
        )*
    };
}

// Entry points generic over precision
macro_rules! generic_entries {
    ([$kernel:ty]) => {
        generic_entries! {
            [$kernel]
            (add_rd, route_add, Rd), (add_rn, route_add, Rn), (add_ru, route_add, Ru), (add_rz, route_add, Rz),
            (sub_rd, route_sub, Rd), (sub_rn, route_sub, Rn), (sub_ru, route_sub, Ru), (sub_rz, route_sub, Rz),
            (mul_rd, route_mul, Rd), (mul_rn, route_mul, Rn), (mul_ru, route_mul, Ru), (mul_rz, route_mul, Rz),
            (div_rd, route_div, Rd), (div_rn, route_div, Rn), (div_ru, route_div, Ru), (div_rz, route_div, Rz),
        }
    };
    (
        [$kernel:ty]
        $(($name:ident, $route:ident, $mode:ident)),* $(,)?
    ) => {
        $(
            #[doc = concat!(
                "`", stringify!($name), "` at the precision of the operands, rounded as [`",
                stringify!($mode), "`]."
            )]
            #[inline]
            pub fn $name<T: Precision>(x: T, y: T) -> T {
                T::$route::<$kernel, $mode>(x, y)
            }
        )*
    };
}

impl<K: Kernel> Directed<K> {
    for_each_entry!(fixed_entries, K);
    generic_entries!([K]);
}

for_each_entry!(fixed_entries, DefaultKernel);
generic_entries!([DefaultKernel]);

/// Adds two values in the rounding mode `M` using [`DefaultKernel`].
#[inline]
pub fn add<M: Mode, T: Precision>(x: T, y: T) -> T {
    Directed::<DefaultKernel>::add::<M, T>(x, y)
}

/// Subtracts `y` from `x` in the rounding mode `M` using [`DefaultKernel`].
#[inline]
pub fn sub<M: Mode, T: Precision>(x: T, y: T) -> T {
    Directed::<DefaultKernel>::sub::<M, T>(x, y)
}

/// Multiplies two values in the rounding mode `M` using [`DefaultKernel`].
#[inline]
pub fn mul<M: Mode, T: Precision>(x: T, y: T) -> T {
    Directed::<DefaultKernel>::mul::<M, T>(x, y)
}

/// Divides `x` by `y` in the rounding mode `M` using [`DefaultKernel`].
#[inline]
pub fn div<M: Mode, T: Precision>(x: T, y: T) -> T {
    Directed::<DefaultKernel>::div::<M, T>(x, y)
}
