//! Segmentation modules
//!
//! This module contains the merge algorithm and everything built on its labels:
//! - Greedy threshold merge and small-region absorption
//! - Per-channel segmentation and label intersection
//! - Colorized rendering and region-size reports

/// Per-channel segmentation and label intersection
pub mod combine;
/// Label colorization and region sizes
pub mod render;
/// Two-phase greedy merge
pub mod segmenter;

pub use combine::{combine_labels, segment_channels, split_channels};
pub use render::{colorize, region_sizes};
pub use segmenter::{MIN_REGION_SIZE, Segmenter, label_components};
