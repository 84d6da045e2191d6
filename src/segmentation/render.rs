//! Label rendering and region statistics

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{PixelMatrix, Rgb};

/// Seed for region colors; every call starts from it
pub const COLOR_SEED: u64 = 123;

/// Lowest channel value used for region colors (keeps them away from black)
const MIN_CHANNEL: u8 = 100;

/// Paint each label with a pseudo-random color.
///
/// Colors are drawn in row-major first-encounter order of the labels from a
/// generator seeded with [`COLOR_SEED`], so the same labels always render the
/// same image.
pub fn colorize(labels: &[u32], width: usize, height: usize) -> PixelMatrix {
    let mut rng = StdRng::seed_from_u64(COLOR_SEED);
    let mut colors: HashMap<u32, Rgb> = HashMap::new();
    let mut output = PixelMatrix::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let Some(&label) = labels.get(y * width + x) else {
                continue;
            };
            let color = *colors.entry(label).or_insert_with(|| {
                Rgb::new(
                    rng.random_range(MIN_CHANNEL..=u8::MAX),
                    rng.random_range(MIN_CHANNEL..=u8::MAX),
                    rng.random_range(MIN_CHANNEL..=u8::MAX),
                )
            });
            output.set(x, y, color);
        }
    }

    output
}

/// Pixel count of every distinct label, largest first
pub fn region_sizes(labels: &[u32]) -> Vec<u32> {
    let mut counts: HashMap<u32, u32> = HashMap::new();
    for &label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }

    let mut sizes: Vec<u32> = counts.into_values().collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes
}
