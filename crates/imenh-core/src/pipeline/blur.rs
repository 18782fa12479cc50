use tracing::debug;

use crate::consts::BLUR_BILATERAL_SIGMA;
use crate::filters::bilateral::bilateral_filter;
use crate::filters::border::BorderMode;
use crate::filters::box_blur::box_blur;
use crate::frame::ColorFrame;

use super::config::BlurType;

/// Blur stage. Returns `None` when no blur is configured so the caller can
/// keep borrowing the input instead of copying it.
pub(super) fn apply_blur(frame: &ColorFrame, blur: BlurType, ksize: u32) -> Option<ColorFrame> {
    match blur {
        BlurType::None => None,
        BlurType::Averaging => {
            debug!(ksize, "Averaging blur");
            Some(box_blur(frame, ksize as usize, BorderMode::Reflect101))
        }
        BlurType::Bilateral => {
            debug!(diameter = ksize, sigma = BLUR_BILATERAL_SIGMA, "Bilateral blur");
            Some(bilateral_filter(
                frame,
                ksize,
                BLUR_BILATERAL_SIGMA,
                BLUR_BILATERAL_SIGMA,
            ))
        }
    }
}
