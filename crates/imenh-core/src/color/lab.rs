//! sRGB <-> CIE L*a*b* (D65) packed into 8-bit channels.
//!
//! Encoding: `L` is scaled from 0..100 to 0..255, `a` and `b` are offset by
//! 128. Neutral grays therefore sit at `a = b = 128`.

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::filters::collect_rows;
use crate::frame::ColorFrame;

/// D65 reference white.
const WHITE_X: f64 = 0.950456;
const WHITE_Z: f64 = 1.088754;

/// Linear sRGB to XYZ (D65).
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.412453, 0.357580, 0.180423],
    [0.212671, 0.715160, 0.072169],
    [0.019334, 0.119193, 0.950227],
];

/// XYZ (D65) to linear sRGB.
const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.240479, -1.537150, -0.498535],
    [-0.969256, 1.875991, 0.041556],
    [0.055648, -0.204043, 1.057311],
];

const LAB_EPSILON: f64 = 0.008856;
const LAB_KAPPA_SLOPE: f64 = 7.787;
const LAB_F_OFFSET: f64 = 16.0 / 116.0;
const LAB_F_THRESHOLD: f64 = 6.0 / 29.0;

fn srgb_to_linear(v: u8) -> f64 {
    let v = v as f64 / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(v: f64) -> u8 {
    let v = v.clamp(0.0, 1.0);
    let encoded = if v <= 0.003_130_8 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    };
    saturate(encoded * 255.0)
}

fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_KAPPA_SLOPE * t + LAB_F_OFFSET
    }
}

fn lab_f_inv(f: f64) -> f64 {
    if f > LAB_F_THRESHOLD {
        f * f * f
    } else {
        (f - LAB_F_OFFSET) / LAB_KAPPA_SLOPE
    }
}

#[inline]
fn saturate(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Convert one RGB pixel to packed 8-bit L*a*b*.
pub fn rgb_to_lab8(rgb: [u8; 3]) -> [u8; 3] {
    let lin = rgb.map(srgb_to_linear);
    let dot = |row: &[f64; 3]| row[0] * lin[0] + row[1] * lin[1] + row[2] * lin[2];

    let x = dot(&RGB_TO_XYZ[0]) / WHITE_X;
    let y = dot(&RGB_TO_XYZ[1]);
    let z = dot(&RGB_TO_XYZ[2]) / WHITE_Z;

    let (fx, fy, fz) = (lab_f(x), lab_f(y), lab_f(z));
    let l = 116.0 * fy - 16.0;
    let a = 500.0 * (fx - fy);
    let b = 200.0 * (fy - fz);

    [
        saturate(l * 255.0 / 100.0),
        saturate(a + 128.0),
        saturate(b + 128.0),
    ]
}

/// Convert one packed 8-bit L*a*b* pixel back to RGB.
pub fn lab8_to_rgb(lab: [u8; 3]) -> [u8; 3] {
    let l = lab[0] as f64 * 100.0 / 255.0;
    let a = lab[1] as f64 - 128.0;
    let b = lab[2] as f64 - 128.0;

    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    let xyz = [
        lab_f_inv(fx) * WHITE_X,
        lab_f_inv(fy),
        lab_f_inv(fz) * WHITE_Z,
    ];
    let dot = |row: &[f64; 3]| row[0] * xyz[0] + row[1] * xyz[1] + row[2] * xyz[2];

    [
        linear_to_srgb(dot(&XYZ_TO_RGB[0])),
        linear_to_srgb(dot(&XYZ_TO_RGB[1])),
        linear_to_srgb(dot(&XYZ_TO_RGB[2])),
    ]
}

/// Convert an RGB frame to packed L*a*b*; channel 0 is L, 1 is a, 2 is b.
pub fn to_lab(frame: &ColorFrame) -> ColorFrame {
    map_pixels(frame, rgb_to_lab8)
}

/// Convert a packed L*a*b* frame back to RGB.
pub fn from_lab(frame: &ColorFrame) -> ColorFrame {
    map_pixels(frame, lab8_to_rgb)
}

fn map_pixels(frame: &ColorFrame, convert: fn([u8; 3]) -> [u8; 3]) -> ColorFrame {
    let (h, w, c) = frame.data.dim();
    let data = collect_rows(h, w, c, |row| {
        let mut out = Vec::with_capacity(w * COLOR_CHANNEL_COUNT);
        for col in 0..w {
            out.extend_from_slice(&convert(frame.pixel(row, col)));
        }
        out
    });
    ColorFrame::new(data)
}
