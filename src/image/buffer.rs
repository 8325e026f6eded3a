//! Owned planar image buffer in row-major layout (stride == width).
//!
//! Planes are stored back to back: element (x, y, p) lives at
//! `(p * h + y) * stride + x`. Suited for numeric processing; provides row
//! access per plane and direct element get/set.
use super::traits::ImageView;

#[derive(Clone, Debug, PartialEq)]
pub struct ImageBuffer<P> {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of planes (1 for grayscale)
    pub planes: usize,
    /// Elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage, plane-major then row-major
    pub data: Vec<P>,
}

/// Single-channel float buffer, the workhorse element type.
pub type ImageF32 = ImageBuffer<f32>;

impl<P: Copy + Default> ImageBuffer<P> {
    /// Construct a default-initialized single-plane buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::with_planes(w, h, 1)
    }

    /// Construct a default-initialized buffer with `planes` planes.
    pub fn with_planes(w: usize, h: usize, planes: usize) -> Self {
        Self {
            w,
            h,
            planes,
            stride: w,
            data: vec![P::default(); w * h * planes],
        }
    }

    /// Wrap existing single-plane data; `data.len()` must equal `w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<P>) -> Self {
        assert_eq!(data.len(), w * h, "buffer data does not match extents");
        Self {
            w,
            h,
            planes: 1,
            stride: w,
            data,
        }
    }

    #[inline]
    /// Convert (x, y, plane) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize, plane: usize) -> usize {
        (plane * self.h + y) * self.stride + x
    }

    #[inline]
    /// Get the element at (x, y) on plane 0.
    pub fn get(&self, x: usize, y: usize) -> P {
        self.data[self.idx(x, y, 0)]
    }

    #[inline]
    /// Set the element at (x, y) on plane 0.
    pub fn set(&mut self, x: usize, y: usize, v: P) {
        let i = self.idx(x, y, 0);
        self.data[i] = v;
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize, plane: usize) -> &mut [P] {
        let start = (plane * self.h + y) * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

impl<P: Copy + Default> ImageView for ImageBuffer<P> {
    type Pixel = P;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn planes(&self) -> usize {
        self.planes
    }
    #[inline]
    fn row(&self, y: usize, plane: usize) -> &[P] {
        let start = (plane * self.h + y) * self.stride;
        &self.data[start..start + self.w]
    }
}

/// Convert an 8-bit grayscale view into a float buffer in `[0, 1]`.
pub fn gray_to_f32<I>(gray: &I) -> ImageF32
where
    I: ImageView<Pixel = u8>,
{
    let mut out = ImageF32::new(gray.width(), gray.height());
    for y in 0..gray.height() {
        let src = gray.row(y, 0);
        let dst = out.row_mut(y, 0);
        for x in 0..src.len() {
            dst[x] = src[x] as f32 / 255.0;
        }
    }
    out
}
