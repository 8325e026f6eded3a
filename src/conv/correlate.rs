//! Weighted-sum primitives.
//!
//! Pure numeric routines with no knowledge of boundaries or laziness. Both
//! start from a default-constructed accumulator that is explicitly validated
//! before the first addition: some element types (see
//! [`Masked`](crate::pixel::Masked)) distinguish a default bit-pattern from
//! a numerically valid zero, and summation must start from the latter.
//!
//! Summation order is part of the contract: ascending index for the 1D
//! primitive, row-major (rows outer, columns inner) for the 2D primitive.
//! Floating-point sums are order-dependent, and reproducibility across the
//! fast and slow evaluation paths requires the order to match exactly.
use crate::image::Sample;
use crate::kernel::KernelGrid;
use crate::pixel::{Accumulate, KernelMul};

/// Σ taps[i] · samples[i] over `taps.len()` consecutive samples.
#[inline]
pub fn correlate_1d<P, K>(samples: &[P], taps: &[K]) -> P::Output
where
    P: KernelMul<K>,
    K: Copy,
{
    debug_assert!(samples.len() >= taps.len(), "sample window shorter than taps");
    let mut acc = P::Output::default();
    acc.validate();
    for (&s, &k) in samples.iter().zip(taps.iter()) {
        acc = acc + s.kernel_mul(k);
    }
    acc
}

/// Rectangular weighted sum: the kernel laid over `src` with its top-left
/// tap at (x0, y0).
#[inline]
pub fn correlate_2d<S, G>(
    src: &S,
    x0: isize,
    y0: isize,
    plane: usize,
    kernel: &G,
) -> <S::Pixel as KernelMul<G::Weight>>::Output
where
    S: Sample,
    G: KernelGrid,
    S::Pixel: KernelMul<G::Weight>,
{
    let mut acc = <S::Pixel as KernelMul<G::Weight>>::Output::default();
    acc.validate();
    for j in 0..kernel.height() {
        let sy = y0 + j as isize;
        for i in 0..kernel.width() {
            acc = acc + src.at(x0 + i as isize, sy, plane).kernel_mul(kernel.weight(i, j));
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{Direct, ImageBuffer};
    use crate::kernel::Kernel2;

    #[test]
    fn one_dimensional_dot_product() {
        let samples = [1.0f32, 2.0, 3.0, 4.0];
        let taps = [10.0f32, 20.0, 30.0];
        assert_eq!(correlate_1d(&samples[..3], &taps), 10.0 + 40.0 + 90.0);
        assert_eq!(correlate_1d(&samples[1..], &taps), 20.0 + 60.0 + 120.0);
    }

    #[test]
    fn two_dimensional_window() {
        let img = ImageBuffer::from_vec(3, 3, vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let k = Kernel2::from([[1.0f32, 0.0], [0.0, 1.0]]);
        // window at (1,1): 5·1 + 6·0 + 8·0 + 9·1
        assert_eq!(correlate_2d(&Direct(&img), 1, 1, 0, &k), 14.0);
    }

    #[test]
    fn promoted_accumulation() {
        let samples = [10u8, 20u8];
        let taps = [0.5f32, 0.25];
        let acc: f32 = correlate_1d(&samples, &taps);
        assert_eq!(acc, 10.0);
    }
}
