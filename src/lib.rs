#![doc = include_str!("../README.md")]

// Core: lazy convolution views and their numeric primitives.
pub mod conv;
pub mod edge;
pub mod kernel;
pub mod pixel;

// Supporting collaborators: images, kernels-as-data, drivers, tools.
pub mod config;
pub mod filters;
pub mod image;
pub mod raster;
pub mod types;

// --- High-level re-exports -------------------------------------------------

pub use crate::conv::{ConvolveView, RasterView, SeparableView};
pub use crate::edge::EdgeMode;
pub use crate::image::{ImageBuffer, ImageF32};
pub use crate::kernel::Kernel2;
pub use crate::types::Rect;

/// Small prelude for quick experiments.
///
/// ```
/// use lazy_conv::prelude::*;
///
/// let mut img = ImageBuffer::<f32>::new(4, 4);
/// img.set(1, 1, 1.0);
/// let blur = SeparableView::new(img, vec![0.25f32, 0.5, 0.25], vec![], EdgeMode::Clamp);
/// assert_eq!(blur.value(1, 1, 0), 0.5);
/// ```
pub mod prelude {
    pub use crate::conv::{ConvolveView, RasterView, SeparableView};
    pub use crate::edge::EdgeMode;
    pub use crate::image::{ImageBuffer, ImageF32, ImageView};
    pub use crate::kernel::Kernel2;
    pub use crate::pixel::Masked;
    pub use crate::types::Rect;
}
