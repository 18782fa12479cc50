use ndarray::{Array3, ArrayView3, Axis};

use crate::frame::{ColorFrame, GrayFrame};

use super::border::BorderMode;
use super::collect_rows;

/// Normalized box blur ("averaging") of a color frame.
///
/// The kernel is `ksize` x `ksize` with its anchor at `ksize / 2`, so even
/// sizes reach one pixel further up/left than down/right. `ksize <= 1` is the
/// identity.
pub fn box_blur(frame: &ColorFrame, ksize: usize, border: BorderMode) -> ColorFrame {
    ColorFrame::new(box_blur_array(frame.data.view(), ksize, border))
}

/// Normalized box blur of a gray frame.
pub fn box_blur_gray(frame: &GrayFrame, ksize: usize, border: BorderMode) -> GrayFrame {
    let blurred = box_blur_array(frame.data.view().insert_axis(Axis(2)), ksize, border);
    GrayFrame::new(blurred.index_axis_move(Axis(2), 0))
}

/// Box blur of an interleaved (height, width, channels) array.
///
/// Both passes keep exact integer window sums, so the only rounding happens
/// once at the end when dividing by the kernel area (ties go to even).
pub fn box_blur_array(data: ArrayView3<u8>, ksize: usize, border: BorderMode) -> Array3<u8> {
    if ksize <= 1 {
        return data.to_owned();
    }
    let (h, w, c) = data.dim();

    let row_pass = sliding_row_sums(data, ksize, border);
    // Column pass = row pass over the transposed sums; result is (w, h, c).
    let col_pass = sliding_row_sums(row_pass.view().permuted_axes([1, 0, 2]), ksize, border);

    let area = (ksize * ksize) as u32;
    Array3::from_shape_fn((h, w, c), |(row, col, ch)| {
        div_round_even(col_pass[[col, row, ch]], area) as u8
    })
}

/// Integer division rounding to nearest, ties to even.
fn div_round_even(sum: u32, area: u32) -> u32 {
    let (q, r) = (sum / area, sum % area);
    match (2 * r).cmp(&area) {
        std::cmp::Ordering::Greater => q + 1,
        std::cmp::Ordering::Equal if q % 2 == 1 => q + 1,
        _ => q,
    }
}

/// Sum of `ksize` horizontal neighbours for every pixel, using a running
/// window per row and channel.
fn sliding_row_sums<T>(data: ArrayView3<T>, ksize: usize, border: BorderMode) -> Array3<u32>
where
    T: Copy + Into<u32> + Sync,
{
    let (h, w, c) = data.dim();
    let lo = -((ksize / 2) as isize);
    let hi = lo + ksize as isize - 1;

    collect_rows(h, w, c, |row| {
        let mut out = vec![0u32; w * c];
        for ch in 0..c {
            let at = |col: isize| -> u32 { data[[row, border.map(col, w), ch]].into() };
            let mut sum: u32 = (lo..=hi).map(at).sum();
            out[ch] = sum;
            for col in 1..w as isize {
                sum += at(col + hi);
                sum -= at(col - 1 + lo);
                out[col as usize * c + ch] = sum;
            }
        }
        out
    })
}
