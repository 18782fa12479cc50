use imageproc::filter::median_filter;
use ndarray::{Array3, Axis, Zip};

use crate::color::gray::to_gray;
use crate::consts::{
    CARTOON_BILATERAL_DIAMETER, CARTOON_BILATERAL_SIGMA, CARTOON_MEDIAN_RADIUS,
    CARTOON_THRESHOLD_BLOCK, CARTOON_THRESHOLD_OFFSET,
};
use crate::filters::bilateral::bilateral_filter;
use crate::filters::threshold::adaptive_mean_threshold;
use crate::frame::{ColorFrame, GrayFrame};

/// Cartoon stylization: flat bilateral-smoothed color with black edge lines.
pub(super) fn cartoonize(frame: &ColorFrame) -> ColorFrame {
    let mask = edge_mask(frame);
    let color = bilateral_filter(
        frame,
        CARTOON_BILATERAL_DIAMETER,
        CARTOON_BILATERAL_SIGMA,
        CARTOON_BILATERAL_SIGMA,
    );
    apply_mask(&color, &mask)
}

/// 255 where a pixel is kept, 0 on edge lines (pixels darker than their
/// median-smoothed local mean by more than the threshold offset).
pub fn edge_mask(frame: &ColorFrame) -> GrayFrame {
    let gray = to_gray(frame).to_gray_image();
    let smoothed = GrayFrame::from_gray_image(&median_filter(
        &gray,
        CARTOON_MEDIAN_RADIUS,
        CARTOON_MEDIAN_RADIUS,
    ));
    adaptive_mean_threshold(
        &smoothed,
        u8::MAX,
        CARTOON_THRESHOLD_BLOCK,
        CARTOON_THRESHOLD_OFFSET,
    )
}

/// Keep `color` where `mask` is non-zero, black elsewhere.
fn apply_mask(color: &ColorFrame, mask: &GrayFrame) -> ColorFrame {
    let mut data: Array3<u8> = color.data.clone();
    Zip::from(data.lanes_mut(Axis(2)))
        .and(&mask.data)
        .for_each(|mut pixel, &m| {
            if m == 0 {
                pixel.fill(0);
            }
        });
    ColorFrame::new(data)
}
