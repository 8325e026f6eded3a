use lazy_conv::config::load_config;
use lazy_conv::conv::SeparableView;
use lazy_conv::filters::gaussian_taps;
use lazy_conv::image::io::{load_gray, save_gray_f32, write_json_file};
use lazy_conv::image::gray_to_f32;
use lazy_conv::raster::rasterize_tiled;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn usage() -> String {
    "Usage: blur_demo <config.json>".to_string()
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_gray(&config.input)?;
    let input = gray_to_f32(&gray);

    let taps = gaussian_taps(config.sigma, config.radius);
    let view = SeparableView::new(input, taps.clone(), taps, config.edge.mode());
    let (blurred, report) = rasterize_tiled(&view, config.band_rows);

    if let Some(path) = &config.output.image_out {
        save_gray_f32(&blurred, path)?;
    }
    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
    }
    println!(
        "blurred {}x{} in {} bands ({:.3} ms)",
        report.width, report.height, report.tiles, report.elapsed_ms
    );
    Ok(())
}
