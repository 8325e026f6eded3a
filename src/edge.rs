//! Edge extension: defined pixel values for out-of-range coordinates.
//!
//! Every lazy view carries one [`EdgeMode`]; the policy is consulted on the
//! slow point-evaluation path and exactly once per rasterization, when the
//! halo rectangle is materialized into a working buffer.
use crate::image::{ImageBuffer, ImageView, Sample};
use crate::types::Rect;

/// Boundary policy for coordinates outside an image's extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeMode<P> {
    /// Out-of-range samples read as the pixel type's default value.
    /// For `Masked` pixels the default is an invalid zero.
    Zero,
    /// Out-of-range samples read as a fixed value.
    Value(P),
    /// Replicate the nearest edge sample.
    Clamp,
    /// Mirror about the edge sample without repeating it (`-1 → 1`).
    Reflect,
    /// Wrap around the image extents.
    Periodic,
    /// No extension: the caller guarantees every sample is in range.
    /// Used over pre-padded buffers where the boundary cost is already paid.
    NoExtend,
}

/// An image plus an [`EdgeMode`], sampled at arbitrary signed coordinates.
#[derive(Clone, Copy)]
pub struct EdgeExtendView<'a, I: ImageView> {
    image: &'a I,
    mode: EdgeMode<I::Pixel>,
}

impl<'a, I: ImageView> EdgeExtendView<'a, I> {
    pub fn new(image: &'a I, mode: EdgeMode<I::Pixel>) -> Self {
        Self { image, mode }
    }

    /// Copy `rect` (in image coordinates, possibly out of range) into a
    /// fresh buffer, resolving every out-of-range sample through the policy.
    /// This is the single upfront halo materialization of the tiled
    /// rasterization contract.
    pub fn materialize(&self, rect: Rect) -> ImageBuffer<I::Pixel> {
        let planes = self.image.planes();
        let mut out = ImageBuffer::with_planes(rect.w, rect.h, planes);
        for p in 0..planes {
            for y in 0..rect.h {
                let sy = rect.y0 + y as isize;
                let dst = out.row_mut(y, p);
                for (x, d) in dst.iter_mut().enumerate() {
                    *d = self.at(rect.x0 + x as isize, sy, p);
                }
            }
        }
        out
    }
}

impl<I: ImageView> Sample for EdgeExtendView<'_, I> {
    type Pixel = I::Pixel;

    fn at(&self, x: isize, y: isize, plane: usize) -> I::Pixel {
        let w = self.image.width();
        let h = self.image.height();
        let inside =
            x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h;
        if inside {
            return self.image.pixel(x as usize, y as usize, plane);
        }
        match self.mode {
            EdgeMode::Zero => I::Pixel::default(),
            EdgeMode::Value(v) => v,
            EdgeMode::Clamp => self.image.pixel(clamp_index(x, w), clamp_index(y, h), plane),
            EdgeMode::Reflect => {
                self.image
                    .pixel(reflect_index(x, w), reflect_index(y, h), plane)
            }
            EdgeMode::Periodic => {
                self.image
                    .pixel(periodic_index(x, w), periodic_index(y, h), plane)
            }
            EdgeMode::NoExtend => {
                debug_assert!(false, "out-of-range sample ({x}, {y}) without edge extension");
                self.image.pixel(clamp_index(x, w), clamp_index(y, h), plane)
            }
        }
    }
}

#[inline]
fn clamp_index(i: isize, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    i.clamp(0, n as isize - 1) as usize
}

#[inline]
fn reflect_index(i: isize, n: usize) -> usize {
    if n <= 1 {
        return 0;
    }
    let period = 2 * (n as isize - 1);
    let m = i.rem_euclid(period);
    if (m as usize) < n {
        m as usize
    } else {
        (period - m) as usize
    }
}

#[inline]
fn periodic_index(i: isize, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    i.rem_euclid(n as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageBuffer;

    fn ramp() -> ImageBuffer<f32> {
        ImageBuffer::from_vec(4, 1, vec![10.0, 20.0, 30.0, 40.0])
    }

    #[test]
    fn reflect_mirrors_without_repeating_the_edge() {
        assert_eq!(reflect_index(-1, 4), 1);
        assert_eq!(reflect_index(-2, 4), 2);
        assert_eq!(reflect_index(4, 4), 2);
        assert_eq!(reflect_index(5, 4), 1);
        assert_eq!(reflect_index(-1, 1), 0);
    }

    #[test]
    fn periodic_wraps_both_directions() {
        assert_eq!(periodic_index(-1, 4), 3);
        assert_eq!(periodic_index(4, 4), 0);
        assert_eq!(periodic_index(9, 4), 1);
    }

    #[test]
    fn clamp_saturates() {
        assert_eq!(clamp_index(-7, 4), 0);
        assert_eq!(clamp_index(11, 4), 3);
    }

    #[test]
    fn policies_resolve_samples() {
        let img = ramp();
        let zero = EdgeExtendView::new(&img, EdgeMode::Zero);
        assert_eq!(zero.at(-1, 0, 0), 0.0);
        assert_eq!(zero.at(1, 0, 0), 20.0);

        let value = EdgeExtendView::new(&img, EdgeMode::Value(5.0));
        assert_eq!(value.at(4, 0, 0), 5.0);

        let clamp = EdgeExtendView::new(&img, EdgeMode::Clamp);
        assert_eq!(clamp.at(-3, 0, 0), 10.0);
        assert_eq!(clamp.at(6, 0, 0), 40.0);

        let reflect = EdgeExtendView::new(&img, EdgeMode::Reflect);
        assert_eq!(reflect.at(-1, 0, 0), 20.0);

        let periodic = EdgeExtendView::new(&img, EdgeMode::Periodic);
        assert_eq!(periodic.at(-1, 0, 0), 40.0);
    }

    #[test]
    fn materialize_pads_the_halo() {
        let img = ramp();
        let view = EdgeExtendView::new(&img, EdgeMode::Zero);
        let buf = view.materialize(Rect::new(-1, 0, 6, 1));
        assert_eq!(buf.data, vec![0.0, 10.0, 20.0, 30.0, 40.0, 0.0]);
    }
}
