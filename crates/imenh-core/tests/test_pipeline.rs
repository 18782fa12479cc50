mod common;

use std::cell::RefCell;

use imenh_core::color::lab::rgb_to_lab8;
use imenh_core::pipeline::config::{BlurType, EnhanceParams};
use imenh_core::pipeline::{edge_mask, enhance, enhance_reported, PipelineStage, ProgressReporter};

use common::{gradient, gray_with_dark_band, max_abs_diff, solid};

#[derive(Default)]
struct RecordingReporter {
    stages: RefCell<Vec<PipelineStage>>,
}

impl ProgressReporter for RecordingReporter {
    fn begin_stage(&self, stage: PipelineStage) {
        self.stages.borrow_mut().push(stage);
    }
}

// ---------------------------------------------------------------------------
// Shape and defaults
// ---------------------------------------------------------------------------

#[test]
fn test_enhance_preserves_dimensions_for_every_mode() {
    let frame = gradient(23, 37);
    for blur in BlurType::ALL {
        for enhance_grayscale in [false, true] {
            for cartoonize in [false, true] {
                let params = EnhanceParams {
                    blur: *blur,
                    blur_kernel_size: 5,
                    enhance_grayscale,
                    cartoonize,
                    ..Default::default()
                };
                let out = enhance(&frame, &params);
                assert_eq!(out.data.dim(), (23, 37, 3));
            }
        }
    }
}

#[test]
fn test_default_params_nearly_identity() {
    // Only the L*a*b* round trip touches the pixels.
    let frame = solid(12, 12, [120, 100, 80]);
    let out = enhance(&frame, &EnhanceParams::default());
    assert!(max_abs_diff(&frame, &out) <= 3);
}

#[test]
fn test_enhance_is_deterministic() {
    let frame = gradient(40, 40);
    let params = EnhanceParams {
        blur: BlurType::Bilateral,
        blur_kernel_size: 7,
        contrast: 1.4,
        brightness: 12,
        color_balance: -8,
        cartoonize: true,
        ..Default::default()
    };
    assert_eq!(enhance(&frame, &params), enhance(&frame, &params));
}

// ---------------------------------------------------------------------------
// Blur stage
// ---------------------------------------------------------------------------

#[test]
fn test_averaging_kernel_one_matches_no_blur() {
    let frame = gradient(30, 20);
    let plain = enhance(&frame, &EnhanceParams::default());
    let averaged = enhance(
        &frame,
        &EnhanceParams {
            blur: BlurType::Averaging,
            blur_kernel_size: 1,
            ..Default::default()
        },
    );
    assert_eq!(plain, averaged);
}

#[test]
fn test_kernel_size_ignored_without_blur() {
    let frame = gradient(16, 16);
    let a = enhance(
        &frame,
        &EnhanceParams {
            blur_kernel_size: 3,
            ..Default::default()
        },
    );
    let b = enhance(
        &frame,
        &EnhanceParams {
            blur_kernel_size: 90,
            ..Default::default()
        },
    );
    assert_eq!(a, b);
}

#[test]
fn test_averaging_softens_band() {
    let frame = gray_with_dark_band(20, 20, 200, 10, 1);
    let out = enhance(
        &frame,
        &EnhanceParams {
            blur: BlurType::Averaging,
            blur_kernel_size: 5,
            enhance_grayscale: true,
            ..Default::default()
        },
    );
    let centre = out.pixel(10, 10)[0];
    assert!(centre > 100 && centre < 200, "got {centre}");
}

// ---------------------------------------------------------------------------
// Tone stage
// ---------------------------------------------------------------------------

#[test]
fn test_grayscale_affine() {
    let frame = solid(10, 10, [100, 100, 100]);
    let params = EnhanceParams {
        contrast: 1.5,
        brightness: -20,
        enhance_grayscale: true,
        ..Default::default()
    };
    let out = enhance(&frame, &params);
    assert!(out.data.iter().all(|&v| v == 130));
}

#[test]
fn test_grayscale_output_channels_equal() {
    let out = enhance(
        &gradient(15, 15),
        &EnhanceParams {
            enhance_grayscale: true,
            ..Default::default()
        },
    );
    for row in 0..15 {
        for col in 0..15 {
            let [r, g, b] = out.pixel(row, col);
            assert!(r == g && g == b);
        }
    }
}

#[test]
fn test_color_balance_inert_in_grayscale() {
    let frame = gradient(12, 12);
    let base = EnhanceParams {
        enhance_grayscale: true,
        ..Default::default()
    };
    let shifted = EnhanceParams {
        color_balance: 60,
        ..base.clone()
    };
    assert_eq!(enhance(&frame, &base), enhance(&frame, &shifted));
}

#[test]
fn test_contrast_saturates_to_white() {
    let frame = solid(100, 100, [128, 128, 128]);
    let out = enhance(
        &frame,
        &EnhanceParams {
            contrast: 2.0,
            ..Default::default()
        },
    );
    for row in [0, 50, 99] {
        for col in [0, 50, 99] {
            let px = out.pixel(row, col);
            assert_eq!(px, [255, 255, 255]);
            assert_eq!(rgb_to_lab8(px), [255, 128, 128]);
        }
    }
}

#[test]
fn test_brightness_lightens_and_darkens() {
    let frame = solid(8, 8, [100, 110, 120]);
    let brighter = enhance(
        &frame,
        &EnhanceParams {
            brightness: 40,
            ..Default::default()
        },
    );
    let darker = enhance(
        &frame,
        &EnhanceParams {
            brightness: -40,
            ..Default::default()
        },
    );
    let l = |px: [u8; 3]| rgb_to_lab8(px)[0];
    assert!(l(brighter.pixel(4, 4)) > l(frame.pixel(4, 4)));
    assert!(l(darker.pixel(4, 4)) < l(frame.pixel(4, 4)));
}

#[test]
fn test_color_balance_shifts_both_chroma_channels() {
    let frame = solid(8, 8, [128, 128, 128]);
    let out = enhance(
        &frame,
        &EnhanceParams {
            color_balance: 20,
            ..Default::default()
        },
    );
    let [_, a, b] = rgb_to_lab8(out.pixel(0, 0));
    assert!(a > 138, "a = {a}");
    assert!(b > 138, "b = {b}");
}

// ---------------------------------------------------------------------------
// Cartoonize stage
// ---------------------------------------------------------------------------

#[test]
fn test_edge_mask_flags_dark_band() {
    let frame = gray_with_dark_band(30, 30, 200, 15, 5);
    let mask = edge_mask(&frame);
    assert_eq!(mask.data[[15, 15]], 0);
    assert_eq!(mask.data[[15, 2]], 255);
    assert_eq!(mask.data[[15, 27]], 255);
}

#[test]
fn test_edge_mask_ignores_isolated_dark_specks() {
    // A lone dark pixel sits far below its local mean, but the 7x7 median
    // removes it before thresholding.
    let mut frame = solid(20, 20, [200, 200, 200]);
    for (r, c) in [(10, 10), (3, 15), (0, 0)] {
        for ch in 0..3 {
            frame.data[[r, c, ch]] = 0;
        }
    }
    let mask = edge_mask(&frame);
    assert!(mask.data.iter().all(|&v| v == 255));
}

#[test]
fn test_edge_mask_median_window_is_seven_wide() {
    // 3 dark columns are a minority in every 7x7 window; 5 are not.
    let thin = edge_mask(&gray_with_dark_band(12, 20, 180, 10, 3));
    assert!(thin.data.iter().all(|&v| v == 255));

    let wide = edge_mask(&gray_with_dark_band(12, 20, 180, 10, 5));
    assert_eq!(wide.data[[6, 10]], 0);
    assert_eq!(wide.data[[6, 7]], 255);
}

#[test]
fn test_cartoon_draws_black_edges() {
    let frame = gray_with_dark_band(30, 30, 200, 15, 5);
    let out = enhance(
        &frame,
        &EnhanceParams {
            cartoonize: true,
            ..Default::default()
        },
    );
    assert_eq!(out.pixel(15, 15), [0, 0, 0]);
    assert_ne!(out.pixel(15, 2), [0, 0, 0]);
}

#[test]
fn test_cartoon_uses_tone_output() {
    let frame = solid(20, 20, [100, 100, 100]);
    let plain = enhance(
        &frame,
        &EnhanceParams {
            cartoonize: true,
            ..Default::default()
        },
    );
    let contrasted = enhance(
        &frame,
        &EnhanceParams {
            contrast: 1.5,
            cartoonize: true,
            ..Default::default()
        },
    );
    assert_ne!(plain, contrasted);
}

#[test]
fn test_cartoon_uniform_image_has_no_edges() {
    let frame = solid(16, 16, [90, 150, 60]);
    let toned = enhance(&frame, &EnhanceParams::default());
    let cartoon = enhance(
        &frame,
        &EnhanceParams {
            cartoonize: true,
            ..Default::default()
        },
    );
    assert_eq!(toned, cartoon);
}

// ---------------------------------------------------------------------------
// Progress reporting
// ---------------------------------------------------------------------------

#[test]
fn test_reporter_sees_only_executed_stages() {
    let frame = gradient(10, 10);

    let reporter = RecordingReporter::default();
    enhance_reported(&frame, &EnhanceParams::default(), &reporter);
    assert_eq!(*reporter.stages.borrow(), vec![PipelineStage::Tone]);

    let reporter = RecordingReporter::default();
    let params = EnhanceParams {
        blur: BlurType::Averaging,
        blur_kernel_size: 3,
        cartoonize: true,
        ..Default::default()
    };
    enhance_reported(&frame, &params, &reporter);
    assert_eq!(
        *reporter.stages.borrow(),
        vec![
            PipelineStage::Blur,
            PipelineStage::Tone,
            PipelineStage::Cartoonize
        ]
    );
}
