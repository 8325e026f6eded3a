//! Standard tap sequences and kernel constructors, plus one-call filtering
//! helpers. The views themselves never choose kernels; everything here is a
//! convenience layered on top of them.
use crate::conv::{ConvolveView, RasterView, SeparableView};
use crate::edge::EdgeMode;
use crate::image::{ImageBuffer, ImageView};
use crate::kernel::Kernel2;
use crate::pixel::{Accumulate, KernelMul};

/// Normalised 5-tap binomial blur `[1, 4, 6, 4, 1] / 16`.
pub const GAUSSIAN_5: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];

/// Sampled Gaussian taps of length `2·radius + 1`, normalised to sum 1.
pub fn gaussian_taps(sigma: f32, radius: usize) -> Vec<f32> {
    assert!(sigma > 0.0, "sigma must be positive");
    let denom = 2.0 * sigma * sigma;
    let mut taps: Vec<f32> = (0..=2 * radius)
        .map(|i| {
            let d = i as f32 - radius as f32;
            (-d * d / denom).exp()
        })
        .collect();
    let sum: f32 = taps.iter().sum();
    for t in &mut taps {
        *t /= sum;
    }
    taps
}

/// Uniform averaging taps of the given length.
pub fn box_taps(len: usize) -> Vec<f32> {
    assert!(len > 0, "box filter needs at least one tap");
    vec![1.0 / len as f32; len]
}

/// Horizontal Sobel derivative kernel.
pub fn sobel_x() -> Kernel2<f32> {
    Kernel2::from([[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]])
}

/// Vertical Sobel derivative kernel.
pub fn sobel_y() -> Kernel2<f32> {
    Kernel2::from([[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]])
}

/// Convolve an image with a 2D kernel and materialize the result.
pub fn convolve<I, K, A>(
    image: I,
    kernel: Kernel2<K>,
    edge: EdgeMode<I::Pixel>,
) -> ImageBuffer<A>
where
    I: ImageView,
    K: Copy,
    I::Pixel: KernelMul<K, Output = A>,
    A: Accumulate,
{
    ConvolveView::new(image, kernel, edge).materialize()
}

/// Convolve an image with a separable kernel (two 1D passes) and materialize
/// the result.
pub fn separable_convolve<I, K, A>(
    image: I,
    row_taps: Vec<K>,
    col_taps: Vec<K>,
    edge: EdgeMode<I::Pixel>,
) -> ImageBuffer<A>
where
    I: ImageView,
    K: Copy + num_traits::One,
    I::Pixel: KernelMul<K, Output = A>,
    A: Accumulate + KernelMul<K, Output = A>,
{
    SeparableView::new(image, row_taps, col_taps, edge).materialize()
}

/// Gaussian blur with sampled taps of the given sigma and radius.
pub fn gaussian_blur<I, A>(
    image: I,
    sigma: f32,
    radius: usize,
    edge: EdgeMode<I::Pixel>,
) -> ImageBuffer<A>
where
    I: ImageView,
    I::Pixel: KernelMul<f32, Output = A>,
    A: Accumulate + KernelMul<f32, Output = A>,
{
    let taps = gaussian_taps(sigma, radius);
    separable_convolve(image, taps.clone(), taps, edge)
}
