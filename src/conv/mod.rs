//! Lazily-evaluated convolution views.
//!
//! A view is an immutable, cheaply clonable descriptor of a filtering
//! computation, not a materialized buffer. Pixels can be probed one at a
//! time through [`RasterView::value`], or whole rectangles rasterized
//! through [`RasterView::rasterize`], which pays the boundary policy once up
//! front and then runs a boundary-free interior loop.

pub mod convolve;
pub mod correlate;
pub mod separable;

pub use self::convolve::ConvolveView;
pub use self::correlate::{correlate_1d, correlate_2d};
pub use self::separable::SeparableView;

use crate::edge::EdgeExtendView;
use crate::image::{ImageBuffer, ImageView, Sample};
use crate::pixel::KernelMul;
use crate::types::Rect;

/// The lazy-view contract: extents, random pixel access, and a tiled
/// rasterization entry point.
pub trait RasterView {
    type Pixel: Copy + Default;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn planes(&self) -> usize;

    /// Compute the pixel at (x, y) in the given plane. Coordinates must be
    /// within the view extents.
    fn value(&self, x: usize, y: usize, plane: usize) -> Self::Pixel;

    /// Fill `dest` with the view's values over `rect`, which must lie within
    /// the view extents; `dest` must be sized `rect.w × rect.h` with the
    /// view's plane count.
    fn rasterize(&self, dest: &mut ImageBuffer<Self::Pixel>, rect: Rect);

    /// Allocate and fill a buffer covering `rect`.
    fn rasterize_to(&self, rect: Rect) -> ImageBuffer<Self::Pixel> {
        let mut dest = ImageBuffer::with_planes(rect.w, rect.h, self.planes());
        self.rasterize(&mut dest, rect);
        dest
    }

    /// Rasterize the whole view.
    fn materialize(&self) -> ImageBuffer<Self::Pixel> {
        self.rasterize_to(Rect::of_extent(self.width(), self.height()))
    }
}

/// Identity pass-through: promote source pixels over `rect` into `dest`,
/// resolving anything out of range through the edge policy. Shared by both
/// views for degenerate (identity) kernels.
pub(crate) fn identity_fill<I, K>(
    edge: &EdgeExtendView<'_, I>,
    dest: &mut ImageBuffer<<I::Pixel as KernelMul<K>>::Output>,
    rect: Rect,
) where
    I: ImageView,
    I::Pixel: KernelMul<K>,
    K: Copy,
{
    for p in 0..dest.planes {
        for y in 0..rect.h {
            let sy = rect.y0 + y as isize;
            let drow = dest.row_mut(y, p);
            for (x, d) in drow.iter_mut().enumerate() {
                *d = edge.at(rect.x0 + x as isize, sy, p).promote();
            }
        }
    }
}
