mod common;

use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgba, RgbaImage};
use std::io::Cursor;

use imenh_core::error::EnhanceError;
use imenh_core::io::codec::{
    decode, encode, encode_original, read_dimensions, EncodeFormat, EncodeSettings,
};
use imenh_core::io::input::{check_extension, InputMode, InputSource};

use common::{gradient, jpeg_with_orientation, mean_abs_diff, png_bytes, solid};

fn encode_dynamic(img: DynamicImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("write png");
    bytes
}

// ---------------------------------------------------------------------------
// decode / encode
// ---------------------------------------------------------------------------

#[test]
fn test_png_is_lossless() {
    let frame = gradient(21, 34);
    let decoded = decode(&png_bytes(&frame)).unwrap();
    assert_eq!(decoded, frame);
}

#[test]
fn test_jpeg_high_quality_is_close() {
    let frame = gradient(32, 48);
    let out = encode(&frame, EncodeSettings::Jpeg { quality: 100 }).unwrap();
    assert_eq!(out.format, EncodeFormat::Jpeg);
    assert_eq!(out.quality, Some(100));
    assert_eq!(&out.bytes[..2], &[0xFF, 0xD8]);

    let decoded = decode(&out.bytes).unwrap();
    assert_eq!(decoded.dimensions(), (48, 32));
    assert!(mean_abs_diff(&frame, &decoded) < 3.0);
}

#[test]
fn test_jpeg_quality_zero_is_accepted() {
    let frame = gradient(16, 16);
    let out = encode(&frame, EncodeSettings::Jpeg { quality: 0 }).unwrap();
    assert_eq!(out.quality, Some(0));
    assert_eq!(decode(&out.bytes).unwrap().dimensions(), (16, 16));
}

#[test]
fn test_lower_quality_is_smaller() {
    let frame = gradient(64, 64);
    let high = encode(&frame, EncodeSettings::Jpeg { quality: 95 }).unwrap();
    let low = encode(&frame, EncodeSettings::Jpeg { quality: 10 }).unwrap();
    assert!(low.bytes.len() < high.bytes.len());
}

#[test]
fn test_png_signature_and_metadata() {
    let out = encode(&gradient(4, 4), EncodeSettings::Png).unwrap();
    assert_eq!(out.format, EncodeFormat::Png);
    assert_eq!(out.quality, None);
    assert_eq!(&out.bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn test_encode_original_is_jpeg_95() {
    let out = encode_original(&gradient(8, 8)).unwrap();
    assert_eq!(out.format, EncodeFormat::Jpeg);
    assert_eq!(out.quality, Some(95));
}

#[test]
fn test_decode_drops_alpha() {
    let rgba = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 0]));
    let frame = decode(&encode_dynamic(DynamicImage::ImageRgba8(rgba))).unwrap();
    assert_eq!(frame.data.dim(), (2, 3, 3));
    assert_eq!(frame.pixel(1, 2), [10, 20, 30]);
}

#[test]
fn test_decode_expands_grayscale() {
    let gray = GrayImage::from_pixel(5, 4, Luma([77]));
    let frame = decode(&encode_dynamic(DynamicImage::ImageLuma8(gray))).unwrap();
    assert_eq!(frame.data.dim(), (4, 5, 3));
    assert_eq!(frame.pixel(0, 0), [77, 77, 77]);
}

/// 40x20 frame: left half red, right half blue.
fn split_red_blue() -> imenh_core::frame::ColorFrame {
    let mut frame = solid(20, 40, [255, 0, 0]);
    frame
        .data
        .slice_mut(ndarray::s![.., 20.., ..])
        .assign(&ndarray::arr1(&[0u8, 0, 255]));
    frame
}

#[test]
fn test_decode_applies_exif_rotation() {
    // Orientation 6: the stored image must be turned 90 degrees clockwise,
    // so the left (red) half ends up on top.
    let bytes = jpeg_with_orientation(&split_red_blue(), 6);
    let frame = decode(&bytes).unwrap();
    assert_eq!(frame.dimensions(), (20, 40));

    let top = frame.pixel(5, 10);
    let bottom = frame.pixel(35, 10);
    assert!(top[0] > 200 && top[2] < 60, "top = {top:?}");
    assert!(bottom[2] > 200 && bottom[0] < 60, "bottom = {bottom:?}");
}

#[test]
fn test_decode_without_rotation_keeps_layout() {
    let bytes = jpeg_with_orientation(&split_red_blue(), 1);
    let frame = decode(&bytes).unwrap();
    assert_eq!(frame.dimensions(), (40, 20));
    assert!(frame.pixel(10, 5)[0] > 200);
}

#[test]
fn test_read_dimensions_follows_orientation() {
    let frame = split_red_blue();
    assert_eq!(read_dimensions(&png_bytes(&frame)).unwrap(), (40, 20));
    assert_eq!(read_dimensions(&jpeg_with_orientation(&frame, 6)).unwrap(), (20, 40));
    assert_eq!(read_dimensions(&jpeg_with_orientation(&frame, 3)).unwrap(), (40, 20));

    let source = InputSource::camera(jpeg_with_orientation(&frame, 8));
    assert_eq!(source.dimensions().unwrap(), (20, 40));
    assert!(read_dimensions(b"nope").is_err());
}

#[test]
fn test_decode_garbage_fails() {
    let err = decode(b"definitely not an image").unwrap_err();
    assert!(matches!(err, EnhanceError::Decode(_)));
}

#[test]
fn test_format_names() {
    assert_eq!(EncodeFormat::Png.extension(), "png");
    assert_eq!(EncodeFormat::Jpeg.extension(), "jpg");
    assert_eq!(EncodeFormat::Jpeg.to_string(), "JPEG");
    assert_eq!(EncodeSettings::default(), EncodeSettings::Png);
}

// ---------------------------------------------------------------------------
// InputSource
// ---------------------------------------------------------------------------

#[test]
fn test_upload_extension_check() {
    assert!(check_extension("photo.png").is_ok());
    assert!(check_extension("photo.jpg").is_ok());
    assert!(check_extension("PHOTO.PNG").is_ok());
    assert!(check_extension("Photo.Jpg").is_ok());

    for bad in ["photo.gif", "photo.jpeg", "photo", "png", ""] {
        let err = check_extension(bad).unwrap_err();
        assert!(matches!(err, EnhanceError::UnsupportedFormat(_)), "{bad}");
    }
}

#[test]
fn test_upload_rejects_before_decoding() {
    let bytes = png_bytes(&gradient(4, 4));
    let err = InputSource::upload("image.gif", bytes).unwrap_err();
    assert!(matches!(err, EnhanceError::UnsupportedFormat(ref name) if name == "image.gif"));
}

#[test]
fn test_camera_bypasses_extension_check() {
    let frame = gradient(6, 6);
    let source = InputSource::camera(png_bytes(&frame));
    assert_eq!(source.mode(), InputMode::Camera);
    assert_eq!(source.label(), "camera snapshot");
    assert_eq!(source.decode().unwrap(), frame);
}

#[test]
fn test_upload_label_and_decode() {
    let frame = gradient(5, 9);
    let source = InputSource::upload("scene.PNG", png_bytes(&frame)).unwrap();
    assert_eq!(source.mode(), InputMode::FileUpload);
    assert_eq!(source.label(), "scene.PNG");
    assert_eq!(source.decode().unwrap().dimensions(), (9, 5));
}

#[test]
fn test_upload_with_png_name_but_garbage_bytes() {
    let source = InputSource::upload("broken.png", vec![1, 2, 3, 4]).unwrap();
    assert!(matches!(source.decode(), Err(EnhanceError::Decode(_))));
}

#[test]
fn test_open_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.png");
    let frame = gradient(7, 3);
    std::fs::write(&path, png_bytes(&frame)).unwrap();

    let source = InputSource::open(&path).unwrap();
    assert_eq!(source.label(), "input.png");
    assert_eq!(source.decode().unwrap(), frame);
}

#[test]
fn test_open_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = InputSource::open(&dir.path().join("missing.jpg")).unwrap_err();
    assert!(matches!(err, EnhanceError::Io(_)));
}

#[test]
fn test_input_mode_labels() {
    assert_eq!(InputMode::default(), InputMode::Camera);
    assert_eq!(InputMode::FileUpload.to_string(), "File upload");
    assert_eq!(InputMode::ALL.len(), 2);
}

// ---------------------------------------------------------------------------
// Raw frame buffers
// ---------------------------------------------------------------------------

#[test]
fn test_gray_image_conversion_keeps_layout() {
    let plane = common::gray_plane(2, 3, vec![1, 2, 3, 4, 5, 6]);
    let img = plane.to_gray_image();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.get_pixel(2, 1)[0], 6);
    assert_eq!(imenh_core::frame::GrayFrame::from_gray_image(&img), plane);
}

#[test]
fn test_from_raw_rgb() {
    let frame = imenh_core::frame::ColorFrame::from_raw_rgb(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(frame.pixel(0, 1), [4, 5, 6]);

    let short = imenh_core::frame::ColorFrame::from_raw_rgb(2, 2, vec![0; 6]);
    assert!(matches!(short, Err(EnhanceError::InvalidDimensions { width: 2, height: 2 })));

    let empty = imenh_core::frame::ColorFrame::from_raw_rgb(0, 5, Vec::new());
    assert!(matches!(empty, Err(EnhanceError::InvalidDimensions { .. })));
}
