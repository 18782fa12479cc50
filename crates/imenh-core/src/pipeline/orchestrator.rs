use tracing::info;

use crate::frame::ColorFrame;

use super::blur::apply_blur;
use super::cartoon::cartoonize;
use super::config::{BlurType, EnhanceParams};
use super::tone::apply_tone;
use super::types::{NoOpReporter, PipelineStage, ProgressReporter};

/// Run the enhancement pipeline with a progress reporter.
///
/// Stages run strictly in order: blur (optional), tone, cartoonize
/// (optional, terminal). The output always has the input's dimensions and
/// three channels.
pub fn enhance_reported(
    frame: &ColorFrame,
    params: &EnhanceParams,
    reporter: &dyn ProgressReporter,
) -> ColorFrame {
    info!(
        width = frame.width(),
        height = frame.height(),
        blur = %params.blur,
        grayscale = params.enhance_grayscale,
        cartoonize = params.cartoonize,
        "Enhancing image"
    );

    let blurred = if params.blur == BlurType::None {
        None
    } else {
        reporter.begin_stage(PipelineStage::Blur);
        let blurred = apply_blur(frame, params.blur, params.blur_kernel_size);
        reporter.finish_stage();
        blurred
    };
    let source = blurred.as_ref().unwrap_or(frame);

    reporter.begin_stage(PipelineStage::Tone);
    let toned = apply_tone(source, params);
    reporter.finish_stage();

    if !params.cartoonize {
        return toned;
    }

    reporter.begin_stage(PipelineStage::Cartoonize);
    let cartoon = cartoonize(&toned);
    reporter.finish_stage();
    cartoon
}

/// Run the enhancement pipeline.
pub fn enhance(frame: &ColorFrame, params: &EnhanceParams) -> ColorFrame {
    enhance_reported(frame, params, &NoOpReporter)
}
