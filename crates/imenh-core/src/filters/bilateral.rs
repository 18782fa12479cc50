use crate::consts::COLOR_CHANNEL_COUNT;
use crate::frame::ColorFrame;

use super::border::reflect_101;
use super::collect_rows;

/// Precomputed weights for one bilateral filter configuration.
struct BilateralKernel {
    /// (row offset, col offset, spatial weight) for every tap inside the disc.
    taps: Vec<(isize, isize, f32)>,
    /// Color weight indexed by the summed absolute channel difference.
    color_lut: Vec<f32>,
}

impl BilateralKernel {
    fn new(diameter: u32, sigma_color: f32, sigma_space: f32) -> Self {
        let sigma_color = if sigma_color <= 0.0 { 1.0 } else { sigma_color };
        let sigma_space = if sigma_space <= 0.0 { 1.0 } else { sigma_space };

        let radius = if diameter == 0 {
            (sigma_space * 1.5).round() as isize
        } else {
            (diameter / 2) as isize
        }
        .max(1);

        let space_coeff = -0.5 / (sigma_space * sigma_space);
        let color_coeff = -0.5 / (sigma_color * sigma_color);

        let mut taps = Vec::new();
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let dist = ((dy * dy + dx * dx) as f32).sqrt();
                if dist > radius as f32 {
                    continue;
                }
                taps.push((dy, dx, (dist * dist * space_coeff).exp()));
            }
        }

        let color_lut = (0..256 * COLOR_CHANNEL_COUNT)
            .map(|i| {
                let d = i as f32;
                (d * d * color_coeff).exp()
            })
            .collect();

        Self { taps, color_lut }
    }
}

/// Edge-preserving bilateral filter on a color frame.
///
/// Uses a circular neighbourhood of radius `diameter / 2` (at least 1;
/// derived from `sigma_space` when `diameter` is 0). Each neighbour is
/// weighted by a spatial Gaussian and by a color Gaussian over the sum of
/// absolute R, G, B differences to the centre pixel. Borders are reflect-101.
pub fn bilateral_filter(
    frame: &ColorFrame,
    diameter: u32,
    sigma_color: f32,
    sigma_space: f32,
) -> ColorFrame {
    let kernel = BilateralKernel::new(diameter, sigma_color, sigma_space);
    let (h, w, c) = frame.data.dim();
    let data = &frame.data;

    let filtered = collect_rows(h, w, c, |row| {
        let mut out = Vec::with_capacity(w * c);
        for col in 0..w {
            let centre = frame.pixel(row, col);
            let mut sums = [0.0f32; COLOR_CHANNEL_COUNT];
            let mut weight_sum = 0.0f32;

            for &(dy, dx, space_weight) in &kernel.taps {
                let r = reflect_101(row as isize + dy, h);
                let cc = reflect_101(col as isize + dx, w);
                let px = [data[[r, cc, 0]], data[[r, cc, 1]], data[[r, cc, 2]]];
                let diff: usize = px
                    .iter()
                    .zip(centre.iter())
                    .map(|(&a, &b)| a.abs_diff(b) as usize)
                    .sum();
                let weight = space_weight * kernel.color_lut[diff];
                for (s, &v) in sums.iter_mut().zip(px.iter()) {
                    *s += weight * v as f32;
                }
                weight_sum += weight;
            }

            for s in sums {
                out.push((s / weight_sum).round_ties_even().clamp(0.0, 255.0) as u8);
            }
        }
        out
    });

    ColorFrame::new(filtered)
}
