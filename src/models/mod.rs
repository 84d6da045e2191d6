/// RGB pixel and row-major pixel grid
pub mod pixel_matrix;

pub use pixel_matrix::{PixelMatrix, Rgb};
