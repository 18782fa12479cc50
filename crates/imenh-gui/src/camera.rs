//! Single-frame camera capture, available with the `camera` feature.

use anyhow::Result;

/// Grab one frame from the first camera and return it as PNG bytes.
#[cfg(feature = "camera")]
pub fn capture_snapshot() -> Result<Vec<u8>> {
    use anyhow::Context;
    use imenh_core::frame::ColorFrame;
    use imenh_core::io::codec::{encode, EncodeSettings};
    use nokhwa::pixel_format::RgbFormat;
    use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
    use nokhwa::Camera;

    let format = RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution);
    let mut camera = Camera::new(CameraIndex::Index(0), format).context("No camera available")?;
    camera.open_stream().context("Failed to start camera stream")?;

    let buffer = camera.frame().context("Failed to capture camera frame");
    if let Err(e) = camera.stop_stream() {
        tracing::warn!("camera stop stream failed: {e}");
    }
    let rgb = buffer?
        .decode_image::<RgbFormat>()
        .context("Failed to decode camera frame")?;

    let (width, height) = (rgb.width(), rgb.height());
    tracing::info!(width, height, "Captured camera frame");
    let frame = ColorFrame::from_raw_rgb(width, height, rgb.into_raw())?;
    Ok(encode(&frame, EncodeSettings::Png)?.bytes)
}

#[cfg(not(feature = "camera"))]
pub fn capture_snapshot() -> Result<Vec<u8>> {
    anyhow::bail!("Camera support is unavailable (build imenh-gui with the `camera` feature)")
}

pub fn is_available() -> bool {
    cfg!(feature = "camera")
}
