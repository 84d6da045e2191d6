//! Error types for the segmentation pipeline.

use thiserror::Error;

/// Errors returned by the validated entry points and file helpers.
///
/// The algorithmic core itself never fails; these cover bad parameters,
/// mismatched buffers, and I/O around it.
#[derive(Debug, Error)]
pub enum SegmentError {
    /// `k` is not positive and finite
    #[error("k must be a positive finite number, got {0}")]
    InvalidK(f32),

    /// Raw RGB buffer does not match the image dimensions
    #[error("RGB buffer holds {actual} bytes, expected {expected}")]
    BufferSize {
        /// `width * height * 3`
        expected: usize,
        /// Length of the buffer passed in
        actual: usize,
    },

    /// Channel label arrays cover different pixel counts
    #[error("channel label arrays differ in length: {0} / {1} / {2}")]
    LabelLengthMismatch(usize, usize, usize),

    /// Gaussian mask size is zero or even, or sigma is not positive
    #[error("invalid Gaussian mask: size {mask_size}, sigma {sigma}")]
    InvalidMask {
        /// Requested mask length
        mask_size: usize,
        /// Requested standard deviation
        sigma: f32,
    },

    /// Region summary file could not be parsed
    #[error("malformed region summary at line {line}: {reason}")]
    Summary {
        /// 1-based line number
        line: usize,
        /// What was wrong with it
        reason: String,
    },

    /// Image decoding or encoding failed
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// File system error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SegmentError>;
