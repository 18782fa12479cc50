use crate::frame::GrayFrame;

/// Round to nearest (ties to even) and clamp into the 8-bit range.
#[inline]
pub fn saturate_u8(v: f64) -> u8 {
    v.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Multiply every value by `factor`, saturating.
pub fn scale(plane: &GrayFrame, factor: f32) -> GrayFrame {
    let factor = factor as f64;
    GrayFrame::new(plane.data.mapv(|v| saturate_u8(v as f64 * factor)))
}

/// Add `delta` to every value, saturating.
pub fn offset(plane: &GrayFrame, delta: i32) -> GrayFrame {
    GrayFrame::new(plane.data.mapv(|v| (v as i32 + delta).clamp(0, 255) as u8))
}

/// `alpha * v + beta` in a single rounding step, saturating.
pub fn affine(plane: &GrayFrame, alpha: f32, beta: f32) -> GrayFrame {
    let (alpha, beta) = (alpha as f64, beta as f64);
    GrayFrame::new(plane.data.mapv(|v| saturate_u8(alpha * v as f64 + beta)))
}
