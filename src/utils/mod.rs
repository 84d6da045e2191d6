//! Image pre-processing helpers
//!
//! - Separable Gaussian smoothing (applied before segmentation)

/// Separable Gaussian filter
pub mod gaussian;
