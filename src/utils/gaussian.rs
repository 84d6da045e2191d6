//! Separable Gaussian smoothing for RGB images
//!
//! A horizontal pass followed by a vertical pass with the same 1D kernel.
//! Taps that fall outside the image are dropped and the remaining weights
//! renormalized, so borders are not darkened.

use rayon::prelude::*;

use crate::config::Smoothing;
use crate::error::Result;
use crate::models::{PixelMatrix, Rgb};

/// Normalized 1D Gaussian kernel of length `mask_size`
pub fn gaussian_kernel(mask_size: usize, sigma: f32) -> Result<Vec<f32>> {
    Smoothing::new(mask_size, sigma).validate()?;

    let radius = (mask_size / 2) as isize;
    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (-radius..=radius)
        .map(|d| (-((d * d) as f32) / denom).exp())
        .collect();
    let sum: f32 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= sum;
    }
    Ok(kernel)
}

/// Smooth `image` with a `mask_size` x `mask_size` Gaussian (applied separably)
pub fn gaussian_smooth(image: &PixelMatrix, mask_size: usize, sigma: f32) -> Result<PixelMatrix> {
    let kernel = gaussian_kernel(mask_size, sigma)?;
    if image.is_empty() {
        return Ok(image.clone());
    }

    let width = image.width();
    let height = image.height();
    let radius = (kernel.len() / 2) as isize;
    let src = image.pixels();

    // Horizontal pass into a float buffer, rows in parallel
    let mut horizontal = vec![[0.0f32; 3]; width * height];
    horizontal
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let src_row = &src[y * width..(y + 1) * width];
            for (x, out) in row.iter_mut().enumerate() {
                let mut acc = [0.0f32; 3];
                let mut norm = 0.0f32;
                for (i, &w) in kernel.iter().enumerate() {
                    let sx = x as isize + i as isize - radius;
                    if sx < 0 || sx >= width as isize {
                        continue;
                    }
                    let px = src_row[sx as usize];
                    acc[0] += w * px.r as f32;
                    acc[1] += w * px.g as f32;
                    acc[2] += w * px.b as f32;
                    norm += w;
                }
                *out = [acc[0] / norm, acc[1] / norm, acc[2] / norm];
            }
        });

    // Vertical pass, one output row per task
    let mut output = PixelMatrix::new(width, height);
    output
        .pixels_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, out) in row.iter_mut().enumerate() {
                let mut acc = [0.0f32; 3];
                let mut norm = 0.0f32;
                for (i, &w) in kernel.iter().enumerate() {
                    let sy = y as isize + i as isize - radius;
                    if sy < 0 || sy >= height as isize {
                        continue;
                    }
                    let px = horizontal[sy as usize * width + x];
                    acc[0] += w * px[0];
                    acc[1] += w * px[1];
                    acc[2] += w * px[2];
                    norm += w;
                }
                *out = Rgb::new(
                    to_channel(acc[0] / norm),
                    to_channel(acc[1] / norm),
                    to_channel(acc[2] / norm),
                );
            }
        });

    Ok(output)
}

/// Smooth with the parameters from a [`Smoothing`]
pub fn smooth(image: &PixelMatrix, smoothing: &Smoothing) -> Result<PixelMatrix> {
    gaussian_smooth(image, smoothing.mask_size, smoothing.sigma)
}

fn to_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
