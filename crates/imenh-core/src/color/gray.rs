use ndarray::{Array2, Array3, Axis};

use crate::consts::{COLOR_CHANNEL_COUNT, GRAY_B, GRAY_G, GRAY_R, GRAY_SHIFT};
use crate::frame::{ColorFrame, GrayFrame};

/// BT.601 luma of one RGB pixel in 14-bit fixed point, rounded.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let weighted = r as u32 * GRAY_R + g as u32 * GRAY_G + b as u32 * GRAY_B;
    ((weighted + (1 << (GRAY_SHIFT - 1))) >> GRAY_SHIFT) as u8
}

/// Convert a color frame to a single luminance channel.
pub fn to_gray(frame: &ColorFrame) -> GrayFrame {
    let data = Array2::from_shape_fn((frame.height(), frame.width()), |(row, col)| {
        let [r, g, b] = frame.pixel(row, col);
        luma(r, g, b)
    });
    GrayFrame::new(data)
}

/// Replicate a gray frame into three identical channels.
pub fn gray_to_color(gray: &GrayFrame) -> ColorFrame {
    let data = Array3::from_shape_fn(
        (gray.height(), gray.width(), COLOR_CHANNEL_COUNT),
        |(row, col, _)| gray.data[[row, col]],
    );
    ColorFrame::new(data)
}

/// Extract one channel of a color frame as its own plane.
pub fn split_channel(frame: &ColorFrame, channel: usize) -> GrayFrame {
    GrayFrame::new(frame.data.index_axis(Axis(2), channel).to_owned())
}

/// Interleave three planes of equal size into a color frame.
pub fn merge_channels(planes: [&GrayFrame; 3]) -> ColorFrame {
    let (h, w) = planes[0].data.dim();
    let data = Array3::from_shape_fn((h, w, COLOR_CHANNEL_COUNT), |(row, col, ch)| {
        planes[ch].data[[row, col]]
    });
    ColorFrame::new(data)
}
