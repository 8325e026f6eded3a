//! Pixel algebra: the numeric contract between images and kernels.
//!
//! Convolution multiplies image pixels by kernel weights and sums the
//! products. The element type of that sum is not the pixel type (a `u8`
//! image filtered with `f32` taps accumulates in `f32`), so the two sides of
//! the multiplication and the promoted result are tied together by
//! [`KernelMul`], and the accumulator contract itself by [`Accumulate`].
//!
//! The concrete instantiation is resolved once per view construction; the
//! per-pixel hot path is monomorphized with no runtime dispatch.

pub mod algebra;
pub mod masked;

pub use self::algebra::{Accumulate, KernelMul};
pub use self::masked::Masked;
