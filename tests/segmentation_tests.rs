//! Integration tests for the segmentation pipeline
//!
//! These exercise the public API end to end on small synthetic images where
//! the expected partition is known exactly.

use rust_seg::graph::{PixelGraph, UnionFind};
use rust_seg::segmentation::{combine_labels, region_sizes, segment_channels};
use rust_seg::tools::{read_region_summary, write_region_summary};
use rust_seg::{PixelMatrix, Rgb, SegmentConfig, Segmenter, segment_image, segment_rgb};
use std::time::{SystemTime, UNIX_EPOCH};

fn unsmoothed(k: f32) -> SegmentConfig {
    SegmentConfig::new(k)
        .with_smoothing(None)
        .with_min_region_size(20)
}

fn two_halves(width: usize, height: usize) -> PixelMatrix {
    let mut img = PixelMatrix::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let color = if x < width / 2 {
                Rgb::new(10, 200, 30)
            } else {
                Rgb::new(240, 20, 180)
            };
            img.set(x, y, color);
        }
    }
    img
}

fn pseudo_random(width: usize, height: usize, seed: u32) -> PixelMatrix {
    let mut img = PixelMatrix::new(width, height);
    let mut state = seed;
    for y in 0..height {
        for x in 0..width {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let [r, g, b, _] = state.to_le_bytes();
            img.set(x, y, Rgb::new(r, g, b));
        }
    }
    img
}

#[test]
fn test_uniform_2x2_is_one_region() {
    let img = PixelMatrix::filled(2, 2, Rgb::new(77, 77, 77));
    for k in [0.5, 1.0, 1000.0] {
        let result = segment_image(&img, &unsmoothed(k)).unwrap();
        assert_eq!(result.region_count(), 1);
        assert_eq!(result.region_sizes, vec![4]);
    }
}

#[test]
fn test_small_halves_absorbed_into_one() {
    // 8 pixels per half is below the minimum region size of 20.
    let img = two_halves(4, 4);
    let result = segment_image(&img, &unsmoothed(1.0)).unwrap();
    assert_eq!(result.region_sizes, vec![16]);
}

#[test]
fn test_large_halves_stay_separate() {
    let img = two_halves(10, 6);
    let result = segment_image(&img, &unsmoothed(1.0)).unwrap();
    assert_eq!(result.region_sizes, vec![30, 30]);
    for y in 0..6 {
        for x in 0..10 {
            let expected = if x < 5 { 1 } else { 2 };
            assert_eq!(result.labels[y * 10 + x], expected);
        }
    }
}

#[test]
fn test_single_region_sizes() {
    let img = PixelMatrix::filled(9, 7, Rgb::new(1, 2, 3));
    let result = segment_image(&img, &SegmentConfig::new(300.0)).unwrap();
    assert_eq!(result.region_sizes, vec![63]);
}

#[test]
fn test_channel_intersection_property() {
    let img = pseudo_random(12, 10, 17);
    let config = unsmoothed(400.0).with_min_region_size(4);
    let result = segment_image(&img, &config).unwrap();
    let [a, b, c] = &result.channel_labels;

    let n = result.labels.len();
    for p in 0..n {
        for q in 0..n {
            let together = a[p] == a[q] && b[p] == b[q] && c[p] == c[q];
            assert_eq!(result.labels[p] == result.labels[q], together);
        }
    }
}

#[test]
fn test_pipeline_matches_manual_composition() {
    let img = pseudo_random(10, 8, 5);
    let config = unsmoothed(250.0).with_parallel(false);
    let result = segment_image(&img, &config).unwrap();

    let segmenter = Segmenter::new(10, 8, 250.0).with_min_region_size(20);
    let [r, g, b] = segment_channels(&img, &segmenter, false);
    let combined = combine_labels(&r, &g, &b).unwrap();
    assert_eq!(result.labels, combined);
    assert_eq!(result.region_sizes, region_sizes(&combined));
}

#[test]
fn test_parallel_and_sequential_agree() {
    let img = pseudo_random(16, 16, 99);
    let seq = segment_image(&img, &SegmentConfig::new(150.0).with_parallel(false)).unwrap();
    let par = segment_image(&img, &SegmentConfig::new(150.0).with_parallel(true)).unwrap();
    assert_eq!(seq.labels, par.labels);
    assert_eq!(seq.colored, par.colored);
}

#[test]
fn test_labels_partition_every_pixel() {
    let img = pseudo_random(15, 11, 3);
    let result = segment_image(&img, &SegmentConfig::new(100.0)).unwrap();
    assert_eq!(result.labels.len(), 15 * 11);
    let max = *result.labels.iter().max().unwrap() as usize;
    assert_eq!(max, result.region_count());
    assert_eq!(result.region_sizes.iter().sum::<u32>() as usize, 15 * 11);
    for pair in result.region_sizes.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[test]
fn test_size_additivity_after_random_unions() {
    let n = 40u32;
    let mut uf = UnionFind::new(n as usize);
    let mut state = 7u32;
    for _ in 0..30 {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let x = (state >> 8) % n;
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let y = (state >> 8) % n;
        let weight = ((state >> 4) % 50) as f32;
        let before = uf.internal_difference(x).max(uf.internal_difference(y));
        let joined = uf.find(x) == uf.find(y);
        uf.union(x, y, weight);
        if !joined {
            let after = uf.internal_difference(x);
            assert!(after >= before && after >= weight);
        }
    }

    let roots: Vec<u32> = (0..n).map(|i| uf.find(i)).collect();
    for &root in &roots {
        let members = roots.iter().filter(|&&r| r == root).count() as u32;
        assert_eq!(uf.size(root), members);
    }
    let mut distinct = roots.clone();
    distinct.sort_unstable();
    distinct.dedup();
    assert_eq!(distinct.len(), uf.component_count());
}

#[test]
fn test_graph_edges_sorted() {
    let img = pseudo_random(20, 13, 41);
    let graph = PixelGraph::new(&img);
    assert!(graph.edges().windows(2).all(|w| w[0].weight <= w[1].weight));
}

#[test]
fn test_segment_rgb_bytes() {
    let img = two_halves(10, 4);
    let rgb = img.to_rgb_bytes();
    let result = segment_rgb(&rgb, 10, 4, &unsmoothed(1.0)).unwrap();
    assert_eq!(result.region_sizes, vec![20, 20]);
}

#[test]
fn test_summary_written_from_segmentation() {
    let img = two_halves(10, 6);
    let result = segment_image(&img, &unsmoothed(1.0)).unwrap();

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before UNIX epoch")
        .as_nanos();
    let path = std::env::temp_dir().join(format!("rustseg_summary_{nanos}.txt"));
    write_region_summary(&path, &result.region_sizes).expect("failed to write summary");

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "2\n30\n30\n");
    assert_eq!(read_region_summary(&path).unwrap(), result.region_sizes);
    let _ = std::fs::remove_file(path);
}
