use image::Rgba;

use super::*;
use crate::foundation::core::Size;

fn solid(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba([10, 200, 30, 255]))
}

#[test]
fn inside_region_fills_the_output() {
    let out = draw_region(&solid(100, 150), Rect::new(10.0, 10.0, 50.0, 70.0), 60, 90);
    assert_eq!(out.dimensions(), (60, 90));
    assert_eq!(out.get_pixel(0, 0).0[3], 255);
    assert_eq!(out.get_pixel(59, 89).0[3], 255);
}

#[test]
fn outside_part_stays_transparent() {
    // Left half of the request lies outside the image.
    let out = draw_region(&solid(100, 150), Rect::new(-50.0, 0.0, 50.0, 150.0), 60, 90);
    assert_eq!(out.get_pixel(5, 45).0[3], 0);
    assert_eq!(out.get_pixel(55, 45).0, [10, 200, 30, 255]);
}

#[test]
fn fully_outside_region_is_blank() {
    let out = draw_region(&solid(10, 10), Rect::new(20.0, 20.0, 40.0, 50.0), 6, 9);
    assert!(out.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn export_writes_fixed_size_png() {
    let mut tool = CropTool::new();
    tool.load_image(Size::new(800.0, 600.0), Size::new(1600.0, 900.0)).unwrap();
    let out = tool.export(&solid(1600, 900)).unwrap();
    assert_eq!(out.file_name, CROP_FILE_NAME);
    assert_eq!((out.width, out.height), (CROP_OUTPUT_WIDTH, CROP_OUTPUT_HEIGHT));
    let decoded = image::load_from_memory(&out.png).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (600, 900));
}

#[test]
fn export_without_image_fails() {
    let err = CropTool::new().export(&solid(4, 4));
    assert!(matches!(err, Err(crate::foundation::error::ForgeError::Crop(_))));
}
