use std::ops::Add;

use super::algebra::{Accumulate, KernelMul};

/// Validity-tagged pixel.
///
/// Carries a payload plus a flag saying whether the payload is defined.
/// Arithmetic computes on the payload and ANDs the flags: any invalid operand
/// poisons the result. `Default` is an **invalid** zero; the accumulator
/// [`validate`](Accumulate::validate) step exists exactly so sums over masked
/// pixels start from a valid zero instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Masked<P> {
    pub value: P,
    pub valid: bool,
}

impl<P> Masked<P> {
    #[inline]
    pub fn valid(value: P) -> Self {
        Self { value, valid: true }
    }

    #[inline]
    pub fn invalid(value: P) -> Self {
        Self {
            value,
            valid: false,
        }
    }
}

impl<P: Default> Default for Masked<P> {
    #[inline]
    fn default() -> Self {
        Self {
            value: P::default(),
            valid: false,
        }
    }
}

impl<P: Add<Output = P>> Add for Masked<P> {
    type Output = Masked<P>;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            value: self.value + rhs.value,
            valid: self.valid && rhs.valid,
        }
    }
}

impl<A: Accumulate> Accumulate for Masked<A> {
    #[inline]
    fn validate(&mut self) {
        self.value.validate();
        self.valid = true;
    }
}

impl<P, K> KernelMul<K> for Masked<P>
where
    P: KernelMul<K>,
    K: Copy,
{
    type Output = Masked<P::Output>;

    #[inline]
    fn kernel_mul(self, weight: K) -> Self::Output {
        Masked {
            value: self.value.kernel_mul(weight),
            valid: self.valid,
        }
    }

    #[inline]
    fn promote(self) -> Self::Output {
        Masked {
            value: self.value.promote(),
            valid: self.valid,
        }
    }
}
