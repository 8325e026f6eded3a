//! Band-parallel rasterization driver.
//!
//! A view is immutable and every rasterization call allocates its own
//! temporaries, so disjoint destination regions of one view can be filled
//! concurrently. The driver splits the destination into horizontal bands,
//! rasterizes them on the rayon pool, and stitches the results; band
//! boundaries are invisible in the output because each band carries its own
//! halo.
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

use crate::conv::RasterView;
use crate::image::{ImageBuffer, ImageView};
use crate::types::Rect;

/// Timing/shape summary of one driver run.
#[derive(Clone, Debug, Serialize)]
pub struct RasterReport {
    pub width: usize,
    pub height: usize,
    pub planes: usize,
    pub tiles: usize,
    pub elapsed_ms: f64,
}

/// Rasterize a full view in horizontal bands of `band_rows` rows each,
/// in parallel.
pub fn rasterize_tiled<V>(view: &V, band_rows: usize) -> (ImageBuffer<V::Pixel>, RasterReport)
where
    V: RasterView + Sync,
    V::Pixel: Send,
{
    assert!(band_rows >= 1, "band height must be at least one row");
    let start = Instant::now();
    let (w, h, planes) = (view.width(), view.height(), view.planes());

    let bands: Vec<Rect> = (0..h)
        .step_by(band_rows)
        .map(|y0| Rect::new(0, y0 as isize, w, band_rows.min(h - y0)))
        .collect();
    let filled: Vec<(Rect, ImageBuffer<V::Pixel>)> = bands
        .par_iter()
        .map(|&rect| (rect, view.rasterize_to(rect)))
        .collect();

    let mut out = ImageBuffer::with_planes(w, h, planes);
    for (rect, band) in &filled {
        for p in 0..planes {
            for y in 0..rect.h {
                let dy = rect.y0 as usize + y;
                out.row_mut(dy, p).copy_from_slice(band.row(y, p));
            }
        }
    }

    let report = RasterReport {
        width: w,
        height: h,
        planes,
        tiles: filled.len(),
        elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
    };
    log::debug!(
        "rasterize_tiled {}x{} in {} bands, {:.3} ms",
        report.width, report.height, report.tiles, report.elapsed_ms
    );
    (out, report)
}
