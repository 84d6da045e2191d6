/// A single RGB pixel (8 bits per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a new pixel
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Keep only the given channel, zeroing the other two
    pub fn isolate(&self, channel: usize) -> Self {
        match channel {
            0 => Self::new(self.r, 0, 0),
            1 => Self::new(0, self.g, 0),
            2 => Self::new(0, 0, self.b),
            _ => Self::default(),
        }
    }

    /// Euclidean distance between the two color vectors
    pub fn distance(&self, other: &Rgb) -> f32 {
        let dr = self.r as f32 - other.r as f32;
        let dg = self.g as f32 - other.g as f32;
        let db = self.b as f32 - other.b as f32;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

/// Row-major grid of RGB pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMatrix {
    width: usize,
    height: usize,
    data: Vec<Rgb>,
}

impl PixelMatrix {
    /// Create a black matrix with given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![Rgb::default(); width * height],
        }
    }

    /// Create a matrix where every pixel has the same color
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Self {
            width,
            height,
            data: vec![color; width * height],
        }
    }

    /// Build from interleaved RGB bytes (3 bytes per pixel).
    ///
    /// Returns `None` when the buffer length does not match the dimensions.
    pub fn from_rgb_bytes(rgb: &[u8], width: usize, height: usize) -> Option<Self> {
        if rgb.len() != width * height * 3 {
            return None;
        }
        let data = rgb
            .chunks_exact(3)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
            .collect();
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Get matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of pixels
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the matrix has no pixels
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get pixel at (x, y); out-of-bounds reads return black
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        if x >= self.width || y >= self.height {
            return Rgb::default();
        }
        self.data[y * self.width + x]
    }

    /// Set pixel at (x, y); out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, value: Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.data[y * self.width + x] = value;
    }

    /// Row-major pixel slice
    pub fn pixels(&self) -> &[Rgb] {
        &self.data
    }

    /// Mutable row-major pixel slice
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.data
    }

    /// Copy of this matrix with every channel except `channel` zeroed
    pub fn isolate_channel(&self, channel: usize) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|px| px.isolate(channel)).collect(),
        }
    }

    /// Interleaved RGB bytes (3 bytes per pixel)
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 3);
        for px in &self.data {
            out.extend_from_slice(&[px.r, px.g, px.b]);
        }
        out
    }

    /// Convert into an `image` crate buffer for encoding
    pub fn to_image(&self) -> image::RgbImage {
        let mut img = image::RgbImage::new(self.width as u32, self.height as u32);
        for (x, y, px) in img.enumerate_pixels_mut() {
            let src = self.get(x as usize, y as usize);
            *px = image::Rgb([src.r, src.g, src.b]);
        }
        img
    }

    /// Convert from an `image` crate buffer
    pub fn from_image(img: &image::RgbImage) -> Self {
        let (width, height) = (img.width() as usize, img.height() as usize);
        let data = img
            .pixels()
            .map(|px| Rgb::new(px.0[0], px.0[1], px.0[2]))
            .collect();
        Self {
            width,
            height,
            data,
        }
    }
}

impl Default for PixelMatrix {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
