pub mod bilateral;
pub mod border;
pub mod box_blur;
pub mod threshold;

use ndarray::Array3;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// Build a (height, width, channels) array one row at a time.
///
/// `row_fn` returns the interleaved values of a single row. Rows are computed
/// on the Rayon pool once the image is large enough to pay for it.
pub(crate) fn collect_rows<T, F>(height: usize, width: usize, channels: usize, row_fn: F) -> Array3<T>
where
    T: Copy + Send,
    F: Fn(usize) -> Vec<T> + Sync,
{
    let rows: Vec<Vec<T>> = if height * width >= PARALLEL_PIXEL_THRESHOLD {
        (0..height).into_par_iter().map(&row_fn).collect()
    } else {
        (0..height).map(&row_fn).collect()
    };

    Array3::from_shape_fn((height, width, channels), |(row, col, ch)| {
        rows[row][col * channels + ch]
    })
}
