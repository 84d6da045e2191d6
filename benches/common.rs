use rust_seg::{PixelMatrix, Rgb};

/// Deterministic synthetic scene: soft gradient background with a few flat
/// rectangles and mild pixel noise
pub fn synthetic_image(width: usize, height: usize) -> PixelMatrix {
    let mut img = PixelMatrix::new(width, height);
    let mut state = 0x2545_f491u32;
    for y in 0..height {
        for x in 0..width {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let noise = ((state >> 16) % 9) as u8;
            let base = Rgb::new(
                (x * 255 / width.max(1)) as u8,
                (y * 255 / height.max(1)) as u8,
                96,
            );
            let color = if (width / 4..width / 2).contains(&x) && (height / 4..height / 2).contains(&y)
            {
                Rgb::new(220, 40, 40)
            } else if (width * 2 / 3..width * 5 / 6).contains(&x) && y > height / 2 {
                Rgb::new(30, 180, 60)
            } else {
                base
            };
            img.set(
                x,
                y,
                Rgb::new(
                    color.r.saturating_add(noise),
                    color.g.saturating_add(noise),
                    color.b.saturating_add(noise),
                ),
            );
        }
    }
    img
}
