use clap::{Parser, Subcommand};
use flexi_logger::Logger;
use rust_seg::config::{DEFAULT_MASK_SIZE, DEFAULT_SIGMA};
use rust_seg::tools::{load_rgb, read_region_summary, save_rgb, write_region_summary};
use rust_seg::utils::gaussian::gaussian_smooth;
use rust_seg::{ImageSegmenter, SegmentConfig, Smoothing};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "segtool", version, about = "Graph-based image segmentation tools")]
struct Cli {
    /// Log level spec (e.g. "info", "debug", "rust_seg=debug")
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Segment an image and write the colorized regions plus a size summary
    Segment {
        #[arg(long)]
        image: PathBuf,
        /// Scale parameter; larger values give fewer, larger regions
        #[arg(long)]
        k: f32,
        #[arg(long, default_value_t = DEFAULT_SIGMA)]
        sigma: f32,
        #[arg(long, default_value_t = DEFAULT_MASK_SIZE)]
        mask_size: usize,
        #[arg(long)]
        min_region_size: Option<u32>,
        /// Skip Gaussian smoothing (input is already smoothed)
        #[arg(long)]
        no_smooth: bool,
        /// Segment channels one after another instead of in parallel
        #[arg(long)]
        sequential: bool,
        #[arg(long, default_value = "segmented.png")]
        output: PathBuf,
        #[arg(long, default_value = "output.txt")]
        summary: PathBuf,
    },
    /// Apply only the Gaussian filter
    Smooth {
        #[arg(long)]
        image: PathBuf,
        #[arg(long)]
        output: PathBuf,
        #[arg(long, default_value_t = DEFAULT_SIGMA)]
        sigma: f32,
        #[arg(long, default_value_t = DEFAULT_MASK_SIZE)]
        mask_size: usize,
    },
    /// Print a previously written region summary
    Summary {
        #[arg(long)]
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _logger = match Logger::try_with_str(&cli.log_level).and_then(|logger| logger.start()) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Logger initialization failed: {}", err);
            None
        }
    };

    match cli.command {
        Command::Segment {
            image,
            k,
            sigma,
            mask_size,
            min_region_size,
            no_smooth,
            sequential,
            output,
            summary,
        } => {
            let mut config = SegmentConfig::new(k).with_parallel(!sequential);
            if let Some(min_region_size) = min_region_size {
                config = config.with_min_region_size(min_region_size);
            }
            config = config.with_smoothing(if no_smooth {
                None
            } else {
                Some(Smoothing::new(mask_size, sigma))
            });
            segment_cmd(&image, ImageSegmenter::with_config(config), &output, &summary)
        }
        Command::Smooth {
            image,
            output,
            sigma,
            mask_size,
        } => smooth_cmd(&image, &output, mask_size, sigma),
        Command::Summary { file } => summary_cmd(&file),
    }
}

fn segment_cmd(
    image: &Path,
    segmenter: ImageSegmenter,
    output: &Path,
    summary: &Path,
) -> ExitCode {
    let pixels = match load_rgb(image) {
        Ok(pixels) => pixels,
        Err(err) => {
            log::error!("Failed to load image {}: {}", image.display(), err);
            return ExitCode::FAILURE;
        }
    };
    println!(
        "Image: {} ({}x{})",
        image.display(),
        pixels.width(),
        pixels.height()
    );

    let start = Instant::now();
    let result = match segmenter.segment(&pixels) {
        Ok(result) => result,
        Err(err) => {
            log::error!("Segmentation failed: {}", err);
            return ExitCode::FAILURE;
        }
    };
    let elapsed = start.elapsed();

    println!(
        "Found {} regions in {:.1} ms (k={})",
        result.region_count(),
        elapsed.as_secs_f64() * 1000.0,
        segmenter.config().k
    );
    for (i, size) in result.region_sizes.iter().take(10).enumerate() {
        println!("  Region {}: {} pixels", i + 1, size);
    }

    let mut status = ExitCode::SUCCESS;
    match save_rgb(&result.colored, output) {
        Ok(()) => println!("Segmented image saved to {}", output.display()),
        Err(err) => {
            log::error!("Failed to save {}: {}", output.display(), err);
            status = ExitCode::FAILURE;
        }
    }

    // A failed summary write leaves the finished segmentation in place.
    match write_region_summary(summary, &result.region_sizes) {
        Ok(()) => println!("Region sizes saved to {}", summary.display()),
        Err(err) => {
            log::error!("Error saving results to {}: {}", summary.display(), err);
            status = ExitCode::FAILURE;
        }
    }

    status
}

fn smooth_cmd(image: &Path, output: &Path, mask_size: usize, sigma: f32) -> ExitCode {
    let pixels = match load_rgb(image) {
        Ok(pixels) => pixels,
        Err(err) => {
            log::error!("Failed to load image {}: {}", image.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let smoothed = match gaussian_smooth(&pixels, mask_size, sigma) {
        Ok(smoothed) => smoothed,
        Err(err) => {
            log::error!("Smoothing failed: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match save_rgb(&smoothed, output) {
        Ok(()) => {
            println!("Smoothed image saved to {}", output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("Failed to save {}: {}", output.display(), err);
            ExitCode::FAILURE
        }
    }
}

fn summary_cmd(file: &Path) -> ExitCode {
    match read_region_summary(file) {
        Ok(sizes) => {
            let total: u64 = sizes.iter().map(|&s| s as u64).sum();
            println!("Summary: {}", file.display());
            println!("Regions: {}", sizes.len());
            println!("Pixels: {}", total);
            if let Some(largest) = sizes.first() {
                println!("Largest region: {} pixels", largest);
            }
            if let Some(smallest) = sizes.last() {
                println!("Smallest region: {} pixels", smallest);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("Failed to read summary {}: {}", file.display(), err);
            ExitCode::FAILURE
        }
    }
}
