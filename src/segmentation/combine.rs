//! Per-channel segmentation and label intersection
//!
//! Each color channel is segmented on its own (the other two zeroed), then
//! two pixels share a final region only if they share a region in every
//! channel.

use std::collections::HashMap;

use crate::error::{Result, SegmentError};
use crate::graph::PixelGraph;
use crate::models::PixelMatrix;
use crate::segmentation::Segmenter;

/// Number of color channels segmented independently
pub const CHANNELS: usize = 3;

/// Split into red-only, green-only and blue-only images
pub fn split_channels(image: &PixelMatrix) -> [PixelMatrix; CHANNELS] {
    [
        image.isolate_channel(0),
        image.isolate_channel(1),
        image.isolate_channel(2),
    ]
}

/// Build the graph for one channel image and segment it
pub fn segment_channel(channel_image: &PixelMatrix, segmenter: &Segmenter) -> Vec<u32> {
    let graph = PixelGraph::new(channel_image);
    segmenter.segment(&graph)
}

/// Segment each channel of `image` with the same parameters.
///
/// With `parallel` the three runs go through rayon; each run owns its own
/// graph and union-find, so the labels are identical either way.
pub fn segment_channels(
    image: &PixelMatrix,
    segmenter: &Segmenter,
    parallel: bool,
) -> [Vec<u32>; CHANNELS] {
    let [red, green, blue] = split_channels(image);

    if parallel {
        let (r, (g, b)) = rayon::join(
            || segment_channel(&red, segmenter),
            || {
                rayon::join(
                    || segment_channel(&green, segmenter),
                    || segment_channel(&blue, segmenter),
                )
            },
        );
        [r, g, b]
    } else {
        [
            segment_channel(&red, segmenter),
            segment_channel(&green, segmenter),
            segment_channel(&blue, segmenter),
        ]
    }
}

/// Intersect three labelings.
///
/// Every distinct `(a, b, c)` triple gets its own label, 1-based, in order of
/// first appearance.
pub fn combine_labels(a: &[u32], b: &[u32], c: &[u32]) -> Result<Vec<u32>> {
    if a.len() != b.len() || a.len() != c.len() {
        return Err(SegmentError::LabelLengthMismatch(a.len(), b.len(), c.len()));
    }

    let mut label_of: HashMap<(u32, u32, u32), u32> = HashMap::new();
    let mut next_label = 1u32;
    let mut combined = Vec::with_capacity(a.len());

    for i in 0..a.len() {
        let label = *label_of.entry((a[i], b[i], c[i])).or_insert_with(|| {
            let label = next_label;
            next_label += 1;
            label
        });
        combined.push(label);
    }

    Ok(combined)
}
