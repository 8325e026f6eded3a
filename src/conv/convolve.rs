//! Full 2D convolution view.
use super::correlate::correlate_2d;
use super::{identity_fill, RasterView};
use crate::edge::{EdgeExtendView, EdgeMode};
use crate::image::{Direct, ImageBuffer, ImageView};
use crate::kernel::{Flip180, Kernel2, KernelGrid};
use crate::pixel::KernelMul;
use crate::types::Rect;

/// Convolution of an image with an arbitrary 2D kernel.
///
/// The view owns its image, kernel and edge policy; evaluation happens on
/// demand. The kernel is held behind [`Flip180`], so the correlation
/// primitive computes true mathematical convolution. The kernel origin
/// (ci, cj) is the kernel coordinate aligned with the output pixel; it
/// defaults to the geometric center.
#[derive(Clone)]
pub struct ConvolveView<I: ImageView, K> {
    image: I,
    edge: EdgeMode<I::Pixel>,
    kernel: Flip180<Kernel2<K>>,
    ci: usize,
    cj: usize,
}

impl<I, K> ConvolveView<I, K>
where
    I: ImageView,
    K: Copy,
{
    /// View with the kernel origin at the kernel's geometric center.
    pub fn new(image: I, kernel: Kernel2<K>, edge: EdgeMode<I::Pixel>) -> Self {
        let origin = kernel.center();
        Self::with_origin(image, kernel, origin, edge)
    }

    /// View with an explicit kernel origin. The origin must lie within the
    /// kernel extents.
    pub fn with_origin(
        image: I,
        kernel: Kernel2<K>,
        origin: (usize, usize),
        edge: EdgeMode<I::Pixel>,
    ) -> Self {
        let (ci, cj) = origin;
        assert!(
            kernel.is_empty() || (ci < kernel.width() && cj < kernel.height()),
            "kernel origin ({ci}, {cj}) outside kernel extents"
        );
        Self {
            image,
            edge,
            kernel: Flip180::new(kernel),
            ci,
            cj,
        }
    }

    /// The unflipped kernel this view was built with.
    pub fn kernel(&self) -> &Kernel2<K> {
        self.kernel.inner()
    }

    pub fn origin(&self) -> (usize, usize) {
        (self.ci, self.cj)
    }

    /// Interior margins of the flipped kernel: how far the footprint reaches
    /// left/up from the output pixel.
    #[inline]
    fn margins(&self) -> (usize, usize) {
        (
            self.kernel.width() - 1 - self.ci,
            self.kernel.height() - 1 - self.cj,
        )
    }
}

impl<I, K> RasterView for ConvolveView<I, K>
where
    I: ImageView,
    K: Copy,
    I::Pixel: KernelMul<K>,
{
    type Pixel = <I::Pixel as KernelMul<K>>::Output;

    fn width(&self) -> usize {
        self.image.width()
    }
    fn height(&self) -> usize {
        self.image.height()
    }
    fn planes(&self) -> usize {
        self.image.planes()
    }

    fn value(&self, x: usize, y: usize, plane: usize) -> Self::Pixel {
        let kc = self.kernel.width();
        let kr = self.kernel.height();
        if kc == 0 || kr == 0 {
            return self.image.pixel(x, y, plane).promote();
        }
        let (ci, cj) = self.margins();
        let x0 = x as isize - ci as isize;
        let y0 = y as isize - cj as isize;
        let interior = x >= ci
            && y >= cj
            && x + kc <= self.image.width() + ci
            && y + kr <= self.image.height() + cj;
        if interior {
            correlate_2d(&Direct(&self.image), x0, y0, plane, &self.kernel)
        } else {
            correlate_2d(
                &EdgeExtendView::new(&self.image, self.edge),
                x0,
                y0,
                plane,
                &self.kernel,
            )
        }
    }

    fn rasterize(&self, dest: &mut ImageBuffer<Self::Pixel>, rect: Rect) {
        debug_assert!(rect.x0 >= 0 && rect.y0 >= 0 && rect.x1() <= self.width() as isize
            && rect.y1() <= self.height() as isize, "rasterize rect outside view extents");
        debug_assert_eq!((dest.w, dest.h, dest.planes), (rect.w, rect.h, self.planes()));
        let kc = self.kernel.width();
        let kr = self.kernel.height();
        let edge = EdgeExtendView::new(&self.image, self.edge);
        if kc == 0 || kr == 0 {
            identity_fill::<_, K>(&edge, dest, rect);
            return;
        }
        let (ci, cj) = self.margins();
        // Halo: (kc-1, kr-1) total padding, split by the origin margins.
        let src_rect = rect.expand(ci, cj, self.ci, self.cj);
        let padded = edge.materialize(src_rect);
        log::debug!(
            "ConvolveView::rasterize rect {}x{} at ({}, {}), padded {}x{}",
            rect.w, rect.h, rect.x0, rect.y0, padded.w, padded.h
        );
        // Over the padded buffer every requested pixel is interior, so the
        // no-extension view below never consults a boundary policy.
        let inner = ConvolveView::with_origin(
            &padded,
            self.kernel.inner().clone(),
            (self.ci, self.cj),
            EdgeMode::NoExtend,
        );
        for p in 0..dest.planes {
            for y in 0..rect.h {
                let drow = dest.row_mut(y, p);
                for (x, d) in drow.iter_mut().enumerate() {
                    *d = inner.value(x + ci, y + cj, p);
                }
            }
        }
    }
}
