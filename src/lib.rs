//! RustSeg - graph-based image segmentation
//!
//! Pixels become nodes of an 8-connected graph weighted by color distance.
//! Components are grown greedily in ascending edge order, joined only while
//! the edge stays below a size-adaptive threshold (`k / size`), small leftover
//! regions are folded into their largest neighbor, and the three color
//! channels are segmented separately and intersected.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Pipeline configuration and environment overrides
pub mod config;
/// Error types
pub mod error;
/// Pixel graph and union-find
pub mod graph;
/// Core data structures (PixelMatrix, Rgb)
pub mod models;
/// Merge algorithm, channel combination, rendering
pub mod segmentation;
/// File helpers (image loading/saving, region summaries)
pub mod tools;
/// Pre-processing (Gaussian smoothing)
pub mod utils;

mod pipeline;

pub use config::{SegmentConfig, Smoothing};
pub use error::{Result, SegmentError};
pub use models::{PixelMatrix, Rgb};
pub use pipeline::Segmentation;
pub use segmentation::Segmenter;

/// Segment an RGB image
///
/// # Arguments
/// * `image` - Input pixels
/// * `config` - Scale parameter `k`, smoothing and Phase 2 settings
///
/// # Returns
/// Final labels, colorized image and region sizes
pub fn segment_image(image: &PixelMatrix, config: &SegmentConfig) -> Result<Segmentation> {
    pipeline::run(image, config)
}

/// Segment raw interleaved RGB bytes
///
/// # Arguments
/// * `rgb` - Raw RGB bytes (3 bytes per pixel)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `config` - Segmentation settings
pub fn segment_rgb(
    rgb: &[u8],
    width: usize,
    height: usize,
    config: &SegmentConfig,
) -> Result<Segmentation> {
    let image =
        PixelMatrix::from_rgb_bytes(rgb, width, height).ok_or(SegmentError::BufferSize {
            expected: width * height * 3,
            actual: rgb.len(),
        })?;
    pipeline::run(&image, config)
}

/// Reusable segmenter holding one configuration
pub struct ImageSegmenter {
    config: SegmentConfig,
}

impl ImageSegmenter {
    /// Create a segmenter with default settings for the given `k`
    pub fn new(k: f32) -> Self {
        Self {
            config: SegmentConfig::new(k),
        }
    }

    /// Create a segmenter from a full configuration
    pub fn with_config(config: SegmentConfig) -> Self {
        Self { config }
    }

    /// Current configuration
    pub fn config(&self) -> &SegmentConfig {
        &self.config
    }

    /// Segment an image
    pub fn segment(&self, image: &PixelMatrix) -> Result<Segmentation> {
        pipeline::run(image, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_empty() {
        let image = PixelMatrix::new(0, 0);
        let result = segment_image(&image, &SegmentConfig::new(100.0)).unwrap();
        assert!(result.labels.is_empty());
        assert_eq!(result.region_count(), 0);
    }

    #[test]
    fn test_segment_uniform() {
        let image = PixelMatrix::filled(2, 2, Rgb::new(200, 10, 60));
        let result = segment_image(&image, &SegmentConfig::new(5.0)).unwrap();
        assert_eq!(result.labels, vec![1; 4]);
        assert_eq!(result.region_sizes, vec![4]);
        assert_eq!(result.colored.width(), 2);
    }

    #[test]
    fn test_segment_rgb_buffer_size() {
        let rgb = vec![0u8; 10];
        let err = segment_rgb(&rgb, 2, 2, &SegmentConfig::new(5.0)).unwrap_err();
        assert!(matches!(
            err,
            SegmentError::BufferSize {
                expected: 12,
                actual: 10
            }
        ));
    }

    #[test]
    fn test_invalid_k() {
        let image = PixelMatrix::filled(3, 3, Rgb::default());
        let segmenter = ImageSegmenter::new(-2.0);
        assert!(matches!(
            segmenter.segment(&image),
            Err(SegmentError::InvalidK(_))
        ));
    }

    #[test]
    fn test_image_segmenter_with_config() {
        let config = SegmentConfig::new(1.0)
            .with_smoothing(None)
            .with_min_region_size(4);
        let segmenter = ImageSegmenter::with_config(config);
        assert_eq!(segmenter.config(), &config);

        let mut image = PixelMatrix::filled(6, 1, Rgb::new(0, 0, 0));
        for x in 3..6 {
            image.set(x, 0, Rgb::new(255, 255, 255));
        }
        // Both runs are under 4 pixels, so they end up as one region.
        let result = segmenter.segment(&image).unwrap();
        assert_eq!(result.region_sizes, vec![6]);
    }
}
