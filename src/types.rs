/// Axis-aligned rectangle with a signed origin.
///
/// Rasterization requests address a region of a view in its own coordinates;
/// halo expansion can push the source rectangle past the image bounds, so the
/// origin is signed while the extent stays unsigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x0: isize,
    pub y0: isize,
    pub w: usize,
    pub h: usize,
}

impl Rect {
    #[inline]
    pub fn new(x0: isize, y0: isize, w: usize, h: usize) -> Self {
        Self { x0, y0, w, h }
    }

    /// Rectangle covering a full `w × h` image.
    #[inline]
    pub fn of_extent(w: usize, h: usize) -> Self {
        Self { x0: 0, y0: 0, w, h }
    }

    /// Exclusive right edge.
    #[inline]
    pub fn x1(&self) -> isize {
        self.x0 + self.w as isize
    }

    /// Exclusive bottom edge.
    #[inline]
    pub fn y1(&self) -> isize {
        self.y0 + self.h as isize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Grow by `left`/`top` toward the origin and `right`/`bottom` away from
    /// it. Used to attach a kernel halo to a requested rectangle.
    #[inline]
    pub fn expand(&self, left: usize, top: usize, right: usize, bottom: usize) -> Self {
        Self {
            x0: self.x0 - left as isize,
            y0: self.y0 - top as isize,
            w: self.w + left + right,
            h: self.h + top + bottom,
        }
    }
}
