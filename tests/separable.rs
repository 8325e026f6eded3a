mod common;

use common::synthetic::{constant_f32, ramp_f32};
use lazy_conv::conv::{ConvolveView, RasterView, SeparableView};
use lazy_conv::edge::EdgeMode;
use lazy_conv::image::{ImageBuffer, ImageView};
use lazy_conv::kernel::Kernel2;
use lazy_conv::raster::rasterize_tiled;
use lazy_conv::types::Rect;

const EDGE_MODES: [EdgeMode<f32>; 5] = [
    EdgeMode::Zero,
    EdgeMode::Value(3.0),
    EdgeMode::Clamp,
    EdgeMode::Reflect,
    EdgeMode::Periodic,
];

/// Unflipped outer product with row-major layout: k(i, j) = row[i] · col[j].
fn outer_product(row: &[f32], col: &[f32]) -> Kernel2<f32> {
    let mut data = Vec::with_capacity(row.len() * col.len());
    for &cj in col {
        for &ci in row {
            data.push(ci * cj);
        }
    }
    Kernel2::new(row.len(), col.len(), data)
}

#[test]
fn separable_matches_full_2d_everywhere() {
    let _ = env_logger::builder().is_test(true).try_init();
    // Integer taps and image keep every sum exact, so the two-pass result
    // must equal the 2D-kernel result bit for bit despite the different
    // summation nesting.
    let img = ramp_f32(8, 6);
    let row = vec![1.0f32, 2.0, 3.0];
    let col = vec![4.0f32, 5.0];
    for edge in EDGE_MODES {
        let sep = SeparableView::new(img.clone(), row.clone(), col.clone(), edge);
        let full = ConvolveView::new(img.clone(), outer_product(&row, &col), edge);
        let sep_out = sep.materialize();
        let full_out = full.materialize();
        for y in 0..6 {
            for x in 0..8 {
                assert_eq!(
                    sep.value(x, y, 0),
                    full.value(x, y, 0),
                    "{edge:?} point at ({x}, {y})"
                );
                assert_eq!(
                    sep_out.get(x, y),
                    full_out.get(x, y),
                    "{edge:?} raster at ({x}, {y})"
                );
            }
        }
    }
}

#[test]
fn separable_box_reproduces_the_full_scenario() {
    // Row and column factors [1, 1, 1] on a 5×5 image of ones with zero
    // padding must give the same map as the full 3×3 box kernel.
    let img = constant_f32(5, 5, 1.0);
    let view = SeparableView::new(img, vec![1.0f32; 3], vec![1.0f32; 3], EdgeMode::Zero);
    let expected = [
        [4.0, 6.0, 6.0, 6.0, 4.0],
        [6.0, 9.0, 9.0, 9.0, 6.0],
        [6.0, 9.0, 9.0, 9.0, 6.0],
        [6.0, 9.0, 9.0, 9.0, 6.0],
        [4.0, 6.0, 6.0, 6.0, 4.0],
    ];
    let out = view.materialize();
    for y in 0..5 {
        for x in 0..5 {
            assert_eq!(view.value(x, y, 0), expected[y][x], "value at ({x}, {y})");
            assert_eq!(out.get(x, y), expected[y][x], "raster at ({x}, {y})");
        }
    }
}

#[test]
fn empty_row_axis_leaves_columns_unfiltered() {
    let img = ramp_f32(6, 5);
    // Only the vertical axis filters; each output is a weighted sum of the
    // pixel and its vertical neighbors, horizontally untouched.
    let view = SeparableView::new(img.clone(), vec![], vec![1.0f32, 2.0, 1.0], EdgeMode::Clamp);
    let out = view.materialize();
    for y in 0..5 {
        for x in 0..6 {
            let above = img.get(x, y.saturating_sub(1));
            let below = img.get(x, (y + 1).min(4));
            let expected = above + 2.0 * img.get(x, y) + below;
            assert_eq!(out.get(x, y), expected, "at ({x}, {y})");
            assert_eq!(view.value(x, y, 0), expected, "point at ({x}, {y})");
        }
    }
}

#[test]
fn single_identity_tap_reproduces_the_source() {
    let img = ramp_f32(4, 4);
    let view = SeparableView::new(img.clone(), vec![], vec![1.0f32], EdgeMode::Zero);
    let out = view.materialize();
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(out.get(x, y), img.get(x, y));
        }
    }
}

#[test]
fn both_axes_empty_is_identity_under_any_policy() {
    let img = ramp_f32(5, 4);
    for edge in EDGE_MODES {
        let view = SeparableView::new(img.clone(), vec![], vec![], edge);
        let out = view.materialize();
        for y in 0..4 {
            for x in 0..5 {
                assert_eq!(out.get(x, y), img.get(x, y), "{edge:?} at ({x}, {y})");
                assert_eq!(view.value(x, y, 0), img.get(x, y), "{edge:?} point at ({x}, {y})");
            }
        }
    }
}

#[test]
fn adjacent_tiles_reproduce_one_shot_rasterization() {
    let img = ramp_f32(10, 9);
    let row = vec![1.0f32, 2.0, 3.0, 4.0];
    let col = vec![2.0f32, 5.0, 2.0];
    for edge in EDGE_MODES {
        let view = SeparableView::new(img.clone(), row.clone(), col.clone(), edge);
        let full = view.materialize();
        let top = view.rasterize_to(Rect::new(0, 0, 10, 4));
        let bottom = view.rasterize_to(Rect::new(0, 4, 10, 5));
        for y in 0..9 {
            for x in 0..10 {
                let tiled = if y < 4 {
                    top.get(x, y)
                } else {
                    bottom.get(x, y - 4)
                };
                assert_eq!(tiled, full.get(x, y), "{edge:?} at ({x}, {y})");
            }
        }
    }
}

#[test]
fn band_parallel_driver_matches_sequential() {
    let img = ramp_f32(12, 11);
    let view = SeparableView::new(img, vec![1.0f32, 1.0, 1.0], vec![1.0f32, 1.0], EdgeMode::Clamp);
    let full = view.materialize();
    let (tiled, report) = rasterize_tiled(&view, 3);
    assert_eq!(report.tiles, 4);
    assert_eq!(tiled.data, full.data);
}

#[test]
fn planes_filter_independently() {
    let mut img = ImageBuffer::<f32>::with_planes(6, 5, 2);
    for y in 0..5 {
        for x in 0..6 {
            let v = (1 + x + 10 * y) as f32;
            img.row_mut(y, 0)[x] = v;
            img.row_mut(y, 1)[x] = 2.0 * v;
        }
    }
    let view = SeparableView::new(img, vec![1.0f32, 2.0, 1.0], vec![1.0f32, 1.0], EdgeMode::Reflect);
    let out = view.materialize();
    assert_eq!(out.planes, 2);
    for y in 0..5 {
        for x in 0..6 {
            assert_eq!(
                out.pixel(x, y, 1),
                2.0 * out.pixel(x, y, 0),
                "linearity across planes at ({x}, {y})"
            );
        }
    }
}

#[test]
fn asymmetric_taps_keep_convolution_orientation() {
    // Impulse response of a separable filter is the flipped-outer-product
    // kernel laid over the impulse; with per-axis origins (1, 0) tap (i, j)
    // lands at (x0 - 1 + i, y0 + j).
    let mut img = ImageBuffer::<f32>::new(7, 5);
    img.set(3, 2, 1.0);
    let view = SeparableView::new(img, vec![1.0f32, 2.0, 3.0], vec![4.0f32, 5.0], EdgeMode::Zero);
    for (j, &cj) in [4.0f32, 5.0].iter().enumerate() {
        for (i, &ci) in [1.0f32, 2.0, 3.0].iter().enumerate() {
            assert_eq!(
                view.value(2 + i, 2 + j, 0),
                ci * cj,
                "tap ({i}, {j})"
            );
        }
    }
}
