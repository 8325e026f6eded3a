//! Separable convolution view: two sequential 1D passes.
use std::sync::OnceLock;

use num_traits::One;

use super::correlate::{correlate_1d, correlate_2d};
use super::{identity_fill, RasterView};
use crate::edge::{EdgeExtendView, EdgeMode};
use crate::image::{Direct, ImageBuffer, ImageView};
use crate::kernel::{Kernel2, KernelGrid};
use crate::pixel::{Accumulate, KernelMul};
use crate::types::Rect;

/// Convolution of an image with a separable 2D kernel, given as independent
/// row factors (horizontal taps) and column factors (vertical taps).
///
/// Either factor sequence may be empty, meaning no filtering along that
/// axis. Tiled rasterization runs as two 1D passes (O(n) per pixel per axis
/// instead of O(n²)), while single-pixel queries go through a memoized 2D
/// kernel: separability is a rasterization optimization, not a
/// point-evaluation one.
#[derive(Clone)]
pub struct SeparableView<I: ImageView, K> {
    image: I,
    row_taps: Vec<K>,
    col_taps: Vec<K>,
    ci: usize,
    cj: usize,
    edge: EdgeMode<I::Pixel>,
    /// Flipped outer product of the factor sequences, built on first point
    /// query and reused thereafter.
    kernel2d: OnceLock<Kernel2<K>>,
}

impl<I, K> SeparableView<I, K>
where
    I: ImageView,
    K: Copy,
{
    /// View with per-axis origins at the factor centers (floor division).
    pub fn new(image: I, row_taps: Vec<K>, col_taps: Vec<K>, edge: EdgeMode<I::Pixel>) -> Self {
        let ci = row_taps.len().saturating_sub(1) / 2;
        let cj = col_taps.len().saturating_sub(1) / 2;
        Self::with_origin(image, row_taps, col_taps, (ci, cj), edge)
    }

    /// View with explicit per-axis origins; each origin is only meaningful
    /// (and only validated) when its axis has taps.
    pub fn with_origin(
        image: I,
        row_taps: Vec<K>,
        col_taps: Vec<K>,
        origin: (usize, usize),
        edge: EdgeMode<I::Pixel>,
    ) -> Self {
        let (ci, cj) = origin;
        assert!(
            row_taps.is_empty() || ci < row_taps.len(),
            "row origin {ci} outside {} taps",
            row_taps.len()
        );
        assert!(
            col_taps.is_empty() || cj < col_taps.len(),
            "column origin {cj} outside {} taps",
            col_taps.len()
        );
        Self {
            image,
            row_taps,
            col_taps,
            ci,
            cj,
            edge,
            kernel2d: OnceLock::new(),
        }
    }

    pub fn row_taps(&self) -> &[K] {
        &self.row_taps
    }

    pub fn col_taps(&self) -> &[K] {
        &self.col_taps
    }

    /// Interior margins per axis; an inactive axis contributes none.
    #[inline]
    fn margins(&self) -> (usize, usize) {
        let ni = self.row_taps.len();
        let nj = self.col_taps.len();
        (
            if ni > 0 { ni - 1 - self.ci } else { 0 },
            if nj > 0 { nj - 1 - self.cj } else { 0 },
        )
    }
}

impl<I, K> SeparableView<I, K>
where
    I: ImageView,
    K: Copy + One,
{
    /// The materialized 2D kernel: flipped outer product of the factor
    /// sequences, an empty axis contributing the identity weight. Equal to
    /// the true mathematical convolution kernel, so point evaluation uses it
    /// without further reorientation.
    fn kernel2d(&self) -> &Kernel2<K> {
        self.kernel2d.get_or_init(|| {
            let ni = self.row_taps.len().max(1);
            let nj = self.col_taps.len().max(1);
            let mut data = vec![K::one(); ni * nj];
            for j in 0..nj {
                let wj = self.col_taps.get(j).copied().unwrap_or_else(K::one);
                for i in 0..ni {
                    let wi = self.row_taps.get(i).copied().unwrap_or_else(K::one);
                    data[(nj - 1 - j) * ni + (ni - 1 - i)] = wi * wj;
                }
            }
            Kernel2::new(ni, nj, data)
        })
    }
}

impl<I, K, A> RasterView for SeparableView<I, K>
where
    I: ImageView,
    K: Copy + One,
    I::Pixel: KernelMul<K, Output = A>,
    A: Accumulate + KernelMul<K, Output = A>,
{
    type Pixel = A;

    fn width(&self) -> usize {
        self.image.width()
    }
    fn height(&self) -> usize {
        self.image.height()
    }
    fn planes(&self) -> usize {
        self.image.planes()
    }

    fn value(&self, x: usize, y: usize, plane: usize) -> A {
        let kernel = self.kernel2d();
        let (ci, cj) = self.margins();
        let x0 = x as isize - ci as isize;
        let y0 = y as isize - cj as isize;
        let interior = x >= ci
            && y >= cj
            && x + kernel.width() <= self.image.width() + ci
            && y + kernel.height() <= self.image.height() + cj;
        if interior {
            correlate_2d(&Direct(&self.image), x0, y0, plane, kernel)
        } else {
            correlate_2d(
                &EdgeExtendView::new(&self.image, self.edge),
                x0,
                y0,
                plane,
                kernel,
            )
        }
    }

    fn rasterize(&self, dest: &mut ImageBuffer<A>, rect: Rect) {
        debug_assert!(rect.x0 >= 0 && rect.y0 >= 0 && rect.x1() <= self.width() as isize
            && rect.y1() <= self.height() as isize, "rasterize rect outside view extents");
        debug_assert_eq!((dest.w, dest.h, dest.planes), (rect.w, rect.h, self.planes()));
        let ni = self.row_taps.len();
        let nj = self.col_taps.len();
        let edge = EdgeExtendView::new(&self.image, self.edge);
        if ni == 0 && nj == 0 {
            identity_fill::<_, K>(&edge, dest, rect);
            return;
        }
        // Halo per active axis only.
        let (lx, rx) = if ni > 0 { (ni - 1 - self.ci, self.ci) } else { (0, 0) };
        let (ly, ry) = if nj > 0 { (nj - 1 - self.cj, self.cj) } else { (0, 0) };
        let src = edge.materialize(rect.expand(lx, ly, rx, ry));
        log::debug!(
            "SeparableView::rasterize rect {}x{} at ({}, {}), padded {}x{}, taps {}/{}",
            rect.w, rect.h, rect.x0, rect.y0, src.w, src.h, ni, nj
        );
        // Convolution orientation: the passes consume taps back to front.
        let rev_i: Vec<K> = self.row_taps.iter().rev().copied().collect();
        let rev_j: Vec<K> = self.col_taps.iter().rev().copied().collect();
        if ni > 0 && nj > 0 {
            let mut work = ImageBuffer::with_planes(rect.w, src.h, src.planes);
            pass_rows(&src, &mut work, &rev_i);
            // The source buffer is dead after the row pass; freeing it now
            // bounds peak memory to about one and a half buffers, not two.
            drop(src);
            pass_cols(&work, dest, &rev_j);
        } else if ni > 0 {
            pass_rows(&src, dest, &rev_i);
        } else {
            pass_cols(&src, dest, &rev_j);
        }
    }
}

/// Horizontal 1D pass: `dst(x, y) = Σ taps[i] · src(x+i, y)`.
/// `src` must be `taps.len() - 1` wider than `dst`, equal height.
fn pass_rows<P, K, A>(src: &ImageBuffer<P>, dst: &mut ImageBuffer<A>, taps: &[K])
where
    P: Copy + Default + KernelMul<K, Output = A>,
    K: Copy,
    A: Accumulate,
{
    let n = taps.len();
    debug_assert_eq!(src.w, dst.w + n - 1);
    debug_assert_eq!(src.h, dst.h);
    for p in 0..dst.planes {
        for y in 0..dst.h {
            let srow = src.row(y, p);
            let drow = dst.row_mut(y, p);
            for (x, d) in drow.iter_mut().enumerate() {
                *d = correlate_1d(&srow[x..x + n], taps);
            }
        }
    }
}

/// Vertical 1D pass: `dst(x, y) = Σ taps[j] · src(x, y+j)`, swept row-by-row
/// so the inner loop stays on contiguous slices. Per-pixel tap order matches
/// `pass_rows`.
fn pass_cols<P, K, A>(src: &ImageBuffer<P>, dst: &mut ImageBuffer<A>, taps: &[K])
where
    P: Copy + Default + KernelMul<K, Output = A>,
    K: Copy,
    A: Accumulate,
{
    let n = taps.len();
    debug_assert_eq!(src.h, dst.h + n - 1);
    debug_assert_eq!(src.w, dst.w);
    for p in 0..dst.planes {
        for y in 0..dst.h {
            let drow = dst.row_mut(y, p);
            for d in drow.iter_mut() {
                let mut acc = A::default();
                acc.validate();
                *d = acc;
            }
            for (j, &t) in taps.iter().enumerate() {
                let srow = src.row(y + j, p);
                for (d, &s) in drow.iter_mut().zip(srow.iter()) {
                    *d = *d + s.kernel_mul(t);
                }
            }
        }
    }
}
