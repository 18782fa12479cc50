#![allow(dead_code)]

use ndarray::{Array2, Array3};

use imenh_core::frame::{ColorFrame, GrayFrame};
use imenh_core::io::codec::{encode, EncodeSettings};

/// Uniform color frame.
pub fn solid(h: usize, w: usize, rgb: [u8; 3]) -> ColorFrame {
    ColorFrame::filled(h, w, rgb)
}

/// Smooth color gradient: red grows along columns, green along rows,
/// blue is their mix.
pub fn gradient(h: usize, w: usize) -> ColorFrame {
    let data = Array3::from_shape_fn((h, w, 3), |(row, col, ch)| {
        let r = col * 255 / (w - 1).max(1);
        let g = row * 255 / (h - 1).max(1);
        match ch {
            0 => r as u8,
            1 => g as u8,
            _ => ((r + g) / 2) as u8,
        }
    });
    ColorFrame::new(data)
}

/// Gray image of `value` with a dark vertical band of `band` columns
/// centred on `center_col`.
pub fn gray_with_dark_band(h: usize, w: usize, value: u8, center_col: usize, band: usize) -> ColorFrame {
    let half = band / 2;
    let data = Array3::from_shape_fn((h, w, 3), |(_, col, _)| {
        if col + half >= center_col && col <= center_col + half {
            0
        } else {
            value
        }
    });
    ColorFrame::new(data)
}

pub fn gray_plane(h: usize, w: usize, values: Vec<u8>) -> GrayFrame {
    GrayFrame::new(Array2::from_shape_vec((h, w), values).expect("shape matches values"))
}

/// Encoded PNG bytes of a frame.
pub fn png_bytes(frame: &ColorFrame) -> Vec<u8> {
    encode(frame, EncodeSettings::Png).expect("encode png").bytes
}

/// JPEG bytes of `frame` with an EXIF APP1 segment carrying `orientation`.
pub fn jpeg_with_orientation(frame: &ColorFrame, orientation: u8) -> Vec<u8> {
    let jpeg = encode(frame, EncodeSettings::Jpeg { quality: 95 })
        .expect("encode jpeg")
        .bytes;

    #[rustfmt::skip]
    let app1: Vec<u8> = vec![
        0xFF, 0xE1, 0x00, 0x22,
        b'E', b'x', b'i', b'f', 0x00, 0x00,
        // Big-endian TIFF header, IFD0 at offset 8
        b'M', b'M', 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08,
        // One entry: Orientation (0x0112), SHORT, count 1
        0x00, 0x01,
        0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01, 0x00, orientation, 0x00, 0x00,
        // No next IFD
        0x00, 0x00, 0x00, 0x00,
    ];

    // After SOI and the JFIF APP0 segment, if present.
    let mut at = 2;
    if jpeg[2..4] == [0xFF, 0xE0] {
        at += 2 + u16::from_be_bytes([jpeg[4], jpeg[5]]) as usize;
    }
    let mut out = Vec::with_capacity(jpeg.len() + app1.len());
    out.extend_from_slice(&jpeg[..at]);
    out.extend_from_slice(&app1);
    out.extend_from_slice(&jpeg[at..]);
    out
}

pub fn max_abs_diff(a: &ColorFrame, b: &ColorFrame) -> u8 {
    a.data
        .iter()
        .zip(b.data.iter())
        .map(|(&x, &y)| x.abs_diff(y))
        .max()
        .unwrap_or(0)
}

pub fn mean_abs_diff(a: &ColorFrame, b: &ColorFrame) -> f64 {
    let total: u64 = a
        .data
        .iter()
        .zip(b.data.iter())
        .map(|(&x, &y)| x.abs_diff(y) as u64)
        .sum();
    total as f64 / a.data.len() as f64
}
