/*
    Soft-float kernel
*/

/// A kernel backed by the integer soft-float engine in [`crate::ieee754`].
///
/// Operands are decoded into the matching `Float<E, N>` format, combined
/// exactly and rounded once.
#[derive(Clone, Copy, Debug, Default)]
pub struct SoftKernel;

pub(crate) mod ops {
    use crate::ieee754::IEEEContext;
    use crate::{Mode, Number, Precision};

    #[inline]
    fn context<M: Mode>() -> IEEEContext {
        IEEEContext::new().rounding_mode(M::RM)
    }

    pub(crate) fn add<T: Precision, M: Mode>(x: T, y: T) -> T {
        T::Soft::from(x).add(&T::Soft::from(y), &context::<M>()).into()
    }

    pub(crate) fn sub<T: Precision, M: Mode>(x: T, y: T) -> T {
        T::Soft::from(x).sub(&T::Soft::from(y), &context::<M>()).into()
    }

    pub(crate) fn mul<T: Precision, M: Mode>(x: T, y: T) -> T {
        T::Soft::from(x).mul(&T::Soft::from(y), &context::<M>()).into()
    }

    pub(crate) fn div<T: Precision, M: Mode>(x: T, y: T) -> T {
        T::Soft::from(x).div(&T::Soft::from(y), &context::<M>()).into()
    }
}

for_each_entry!(impl_kernel, SoftKernel, ops);
