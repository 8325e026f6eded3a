use lazy_conv::image::ImageF32;

/// Image with every pixel set to `v`.
pub fn constant_f32(width: usize, height: usize, v: f32) -> ImageF32 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = ImageF32::new(width, height);
    img.data.fill(v);
    img
}

/// All-zero image with a single unit pixel at (x, y).
pub fn impulse_f32(width: usize, height: usize, x: usize, y: usize) -> ImageF32 {
    assert!(x < width && y < height, "impulse must lie inside the image");
    let mut img = ImageF32::new(width, height);
    img.set(x, y, 1.0);
    img
}

/// Deterministic small-integer image: pixel (x, y) = 1 + x + 10·y.
/// Integer-valued so convolutions with integer taps stay exact in f32.
pub fn ramp_f32(width: usize, height: usize) -> ImageF32 {
    let mut img = ImageF32::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.set(x, y, (1 + x + 10 * y) as f32);
        }
    }
    img
}
