use crate::error::{Result, SegmentError};
use crate::models::PixelMatrix;
use image::GenericImageView;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

fn max_dim_from_env() -> Option<u32> {
    match env::var("SEG_MAX_DIM") {
        Ok(value) => match value.trim().parse::<u32>() {
            Ok(0) => None,
            Ok(v) => Some(v),
            Err(_) => None,
        },
        Err(_) => None,
    }
}

/// Load an image as a pixel matrix.
///
/// Images larger than `SEG_MAX_DIM` on their longest side are downscaled first.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<PixelMatrix> {
    let img = image::open(path)?;
    let rgb = if let Some(max_dim) = max_dim_from_env() {
        let (orig_w, orig_h) = img.dimensions();
        let max_side = orig_w.max(orig_h);
        if max_side > max_dim {
            let resized = img.resize(max_dim, max_dim, image::imageops::FilterType::Triangle);
            resized.to_rgb8()
        } else {
            img.to_rgb8()
        }
    } else {
        img.to_rgb8()
    };
    Ok(PixelMatrix::from_image(&rgb))
}

/// Encode a pixel matrix to disk; the format follows the file extension
pub fn save_rgb<P: AsRef<Path>>(image: &PixelMatrix, path: P) -> Result<()> {
    image.to_image().save(path)?;
    Ok(())
}

/// Region summary text: region count, then one size per line
pub fn format_region_summary(sizes: &[u32]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", sizes.len());
    for size in sizes {
        let _ = writeln!(out, "{}", size);
    }
    out
}

/// Write the region summary file
pub fn write_region_summary<P: AsRef<Path>>(path: P, sizes: &[u32]) -> Result<()> {
    fs::write(path, format_region_summary(sizes))?;
    Ok(())
}

/// Parse region summary text.
///
/// Blank lines are skipped. The declared count must match the number of sizes.
pub fn parse_region_summary(content: &str) -> Result<Vec<u32>> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((line_no, header)) = lines.next() else {
        return Err(SegmentError::Summary {
            line: 1,
            reason: "missing region count".to_string(),
        });
    };
    let count = header
        .parse::<usize>()
        .map_err(|e| SegmentError::Summary {
            line: line_no,
            reason: format!("bad region count {:?}: {}", header, e),
        })?;

    let mut sizes = Vec::with_capacity(count);
    for (line_no, line) in lines {
        let size = line.parse::<u32>().map_err(|e| SegmentError::Summary {
            line: line_no,
            reason: format!("bad region size {:?}: {}", line, e),
        })?;
        sizes.push(size);
    }

    if sizes.len() != count {
        return Err(SegmentError::Summary {
            line: line_no,
            reason: format!("declared {} regions, found {}", count, sizes.len()),
        });
    }
    Ok(sizes)
}

/// Read a region summary file
pub fn read_region_summary<P: AsRef<Path>>(path: P) -> Result<Vec<u32>> {
    let content = fs::read_to_string(path)?;
    parse_region_summary(&content)
}
