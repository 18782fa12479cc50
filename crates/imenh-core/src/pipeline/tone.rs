use crate::color::adjust::{affine, offset, scale};
use crate::color::gray::{gray_to_color, merge_channels, split_channel, to_gray};
use crate::color::lab::{from_lab, to_lab};
use crate::frame::ColorFrame;

use super::config::EnhanceParams;

/// Tone stage: exactly one of the two branches runs.
pub(super) fn apply_tone(frame: &ColorFrame, params: &EnhanceParams) -> ColorFrame {
    if params.enhance_grayscale {
        grayscale_tone(frame, params.contrast, params.brightness)
    } else {
        color_tone(frame, params.contrast, params.brightness, params.color_balance)
    }
}

/// Luma, then `contrast * v + brightness` rounded once, expanded back to 3 channels.
fn grayscale_tone(frame: &ColorFrame, contrast: f32, brightness: i32) -> ColorFrame {
    let gray = to_gray(frame);
    let adjusted = affine(&gray, contrast, brightness as f32);
    gray_to_color(&adjusted)
}

/// L*a*b* adjustment. L is scaled and then shifted, saturating after each
/// step; a and b are shifted by the same color balance.
fn color_tone(frame: &ColorFrame, contrast: f32, brightness: i32, color_balance: i32) -> ColorFrame {
    let lab = to_lab(frame);

    let l = offset(&scale(&split_channel(&lab, 0), contrast), brightness);
    let a = offset(&split_channel(&lab, 1), color_balance);
    let b = offset(&split_channel(&lab, 2), color_balance);

    from_lab(&merge_channels([&l, &a, &b]))
}
