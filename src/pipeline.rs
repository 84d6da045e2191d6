use crate::config::SegmentConfig;
use crate::error::Result;
use crate::models::PixelMatrix;
use crate::segmentation::combine::{CHANNELS, combine_labels, segment_channels};
use crate::segmentation::{Segmenter, colorize, region_sizes};
use crate::utils::gaussian;

/// Result of segmenting one image
#[derive(Debug, Clone)]
pub struct Segmentation {
    /// Image width
    pub width: usize,
    /// Image height
    pub height: usize,
    /// Final 1-based region label per pixel, row-major
    pub labels: Vec<u32>,
    /// Labels of the red, green and blue channel runs
    pub channel_labels: [Vec<u32>; CHANNELS],
    /// One reproducible color per region
    pub colored: PixelMatrix,
    /// Region pixel counts, largest first
    pub region_sizes: Vec<u32>,
}

impl Segmentation {
    /// Number of final regions
    pub fn region_count(&self) -> usize {
        self.region_sizes.len()
    }
}

/// Smooth (optionally), segment per channel, intersect and render
pub(crate) fn run(image: &PixelMatrix, config: &SegmentConfig) -> Result<Segmentation> {
    config.validate()?;

    let width = image.width();
    let height = image.height();

    let smoothed;
    let input = match &config.smoothing {
        Some(smoothing) => {
            smoothed = gaussian::smooth(image, smoothing)?;
            &smoothed
        }
        None => image,
    };

    let segmenter =
        Segmenter::new(width, height, config.k).with_min_region_size(config.min_region_size);
    let channel_labels = segment_channels(input, &segmenter, config.parallel);

    if log::log_enabled!(log::Level::Debug) {
        for (channel, labels) in channel_labels.iter().enumerate() {
            log::debug!(
                "channel {}: {} regions",
                channel,
                labels.iter().copied().max().unwrap_or(0)
            );
        }
    }

    let [red, green, blue] = &channel_labels;
    let labels = combine_labels(red, green, blue)?;
    let colored = colorize(&labels, width, height);
    let region_sizes = region_sizes(&labels);

    log::info!(
        "segmented {}x{} image with k={}: {} regions",
        width,
        height,
        config.k,
        region_sizes.len()
    );

    Ok(Segmentation {
        width,
        height,
        labels,
        channel_labels,
        colored,
        region_sizes,
    })
}
