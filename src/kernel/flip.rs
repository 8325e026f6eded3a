use super::KernelGrid;

/// Reversed-order view of a kernel: both axes flipped.
///
/// Traversing a `Flip180` in forward order yields the underlying weights in
/// reverse order along rows and columns, so a correlation primitive fed this
/// view computes mathematical convolution. The flip is an index remap, not a
/// copy.
#[derive(Clone, Copy, Debug)]
pub struct Flip180<G> {
    inner: G,
}

impl<G: KernelGrid> Flip180<G> {
    #[inline]
    pub fn new(inner: G) -> Self {
        Self { inner }
    }

    /// The unflipped kernel.
    #[inline]
    pub fn inner(&self) -> &G {
        &self.inner
    }
}

impl<G: KernelGrid> KernelGrid for Flip180<G> {
    type Weight = G::Weight;

    #[inline]
    fn width(&self) -> usize {
        self.inner.width()
    }
    #[inline]
    fn height(&self) -> usize {
        self.inner.height()
    }
    #[inline]
    fn weight(&self, i: usize, j: usize) -> G::Weight {
        self.inner
            .weight(self.inner.width() - 1 - i, self.inner.height() - 1 - j)
    }
}
