/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Number of channels in a color frame (R, G, B).
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// Fixed-point shift used by the BT.601 grayscale conversion.
pub const GRAY_SHIFT: u32 = 14;

/// ITU-R BT.601 luminance coefficient for red, scaled by 2^14.
pub const GRAY_R: u32 = 4899;

/// ITU-R BT.601 luminance coefficient for green, scaled by 2^14.
pub const GRAY_G: u32 = 9617;

/// ITU-R BT.601 luminance coefficient for blue, scaled by 2^14.
pub const GRAY_B: u32 = 1868;

/// Color and spatial sigma of the user-selectable bilateral blur.
pub const BLUR_BILATERAL_SIGMA: f32 = 75.0;

/// Median window radius used before edge detection in the cartoon stage (7x7).
pub const CARTOON_MEDIAN_RADIUS: u32 = 3;

/// Adaptive threshold block side for the cartoon edge mask.
pub const CARTOON_THRESHOLD_BLOCK: usize = 9;

/// Offset subtracted from the local mean for the cartoon edge mask.
pub const CARTOON_THRESHOLD_OFFSET: f32 = 5.0;

/// Bilateral diameter for the cartoon color layer.
pub const CARTOON_BILATERAL_DIAMETER: u32 = 9;

/// Color and spatial sigma for the cartoon color layer.
pub const CARTOON_BILATERAL_SIGMA: f32 = 250.0;

/// JPEG quality used when re-encoding the original image.
pub const ORIGINAL_JPEG_QUALITY: u8 = 95;

/// Default JPEG quality offered for the processed image.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Default kernel size shown when a blur type is first selected.
pub const DEFAULT_BLUR_KERNEL_SIZE: u32 = 10;

/// Allowed contrast range.
pub const CONTRAST_RANGE: (f32, f32) = (0.1, 3.0);

/// Allowed brightness and color balance range.
pub const OFFSET_RANGE: (i32, i32) = (-100, 100);

/// Allowed blur kernel size range.
pub const KERNEL_SIZE_RANGE: (u32, u32) = (1, 100);

/// File extensions accepted for uploaded images.
pub const UPLOAD_EXTENSIONS: [&str; 2] = ["png", "jpg"];

/// File name of the re-encoded original download.
pub const ORIGINAL_FILE_NAME: &str = "original.jpg";
