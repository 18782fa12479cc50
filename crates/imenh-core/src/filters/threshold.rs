use ndarray::Zip;

use crate::frame::GrayFrame;

use super::border::BorderMode;
use super::box_blur::box_blur_gray;

/// Adaptive mean thresholding (binary).
///
/// The local threshold is the `block_size` x `block_size` mean (replicate
/// borders, rounded to 8 bits) minus `offset`. Pixels strictly above it get
/// `max_value`; the rest become 0. Fractional offsets are rounded up.
pub fn adaptive_mean_threshold(
    frame: &GrayFrame,
    max_value: u8,
    block_size: usize,
    offset: f32,
) -> GrayFrame {
    let local_mean = box_blur_gray(frame, block_size, BorderMode::Replicate);
    let delta = offset.ceil() as i32;

    let data = Zip::from(&frame.data)
        .and(&local_mean.data)
        .map_collect(|&pixel, &mean| {
            if pixel as i32 > mean as i32 - delta {
                max_value
            } else {
                0
            }
        });

    GrayFrame::new(data)
}
