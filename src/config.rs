use std::sync::OnceLock;

use crate::error::{Result, SegmentError};
use crate::segmentation::MIN_REGION_SIZE;

fn parse_env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static MIN_REGION_SIZE_OVERRIDE: OnceLock<u32> = OnceLock::new();

/// Minimum region size for Phase 2 (`SEG_MIN_REGION_SIZE`, default 20)
pub(crate) fn min_region_size() -> u32 {
    *MIN_REGION_SIZE_OVERRIDE
        .get_or_init(|| parse_env_u32("SEG_MIN_REGION_SIZE", MIN_REGION_SIZE))
}

static PARALLEL_CHANNELS: OnceLock<bool> = OnceLock::new();

/// Whether channels run on the rayon pool by default (`SEG_PARALLEL`, default on)
pub(crate) fn parallel_channels() -> bool {
    *PARALLEL_CHANNELS.get_or_init(|| parse_env_bool_u8("SEG_PARALLEL", true))
}

/// Default Gaussian mask length
pub const DEFAULT_MASK_SIZE: usize = 5;
/// Default Gaussian standard deviation
pub const DEFAULT_SIGMA: f32 = 0.8;

/// Gaussian pre-smoothing parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothing {
    /// Odd kernel length
    pub mask_size: usize,
    /// Standard deviation in pixels
    pub sigma: f32,
}

impl Smoothing {
    /// Create smoothing parameters
    pub fn new(mask_size: usize, sigma: f32) -> Self {
        Self { mask_size, sigma }
    }

    /// Check that the kernel can be built
    pub fn validate(&self) -> Result<()> {
        if self.mask_size == 0
            || self.mask_size % 2 == 0
            || !self.sigma.is_finite()
            || self.sigma <= 0.0
        {
            return Err(SegmentError::InvalidMask {
                mask_size: self.mask_size,
                sigma: self.sigma,
            });
        }
        Ok(())
    }
}

impl Default for Smoothing {
    fn default() -> Self {
        Self::new(DEFAULT_MASK_SIZE, DEFAULT_SIGMA)
    }
}

/// Pipeline configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentConfig {
    /// Scale parameter; larger values favor larger regions
    pub k: f32,
    /// Regions smaller than this are absorbed into a neighbor
    pub min_region_size: u32,
    /// Pre-smoothing, or `None` when the input is already smoothed
    pub smoothing: Option<Smoothing>,
    /// Segment the three channels on the rayon pool
    pub parallel: bool,
}

impl SegmentConfig {
    /// Configuration with the given `k` and defaults for everything else
    pub fn new(k: f32) -> Self {
        Self {
            k,
            min_region_size: min_region_size(),
            smoothing: Some(Smoothing::default()),
            parallel: parallel_channels(),
        }
    }

    /// Set the minimum region size
    pub fn with_min_region_size(mut self, min_region_size: u32) -> Self {
        self.min_region_size = min_region_size;
        self
    }

    /// Set or disable pre-smoothing
    pub fn with_smoothing(mut self, smoothing: Option<Smoothing>) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Enable or disable parallel channel segmentation
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Reject parameters the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        if !self.k.is_finite() || self.k <= 0.0 {
            return Err(SegmentError::InvalidK(self.k));
        }
        if let Some(smoothing) = &self.smoothing {
            smoothing.validate()?;
        }
        Ok(())
    }
}
