use crate::error::{CollectorError, Result};
use image::{imageops, DynamicImage, RgbImage};

/// Paste `images` left to right, top-aligned, onto one canvas.
///
/// The canvas is as wide as all inputs together and as tall as the tallest one;
/// area below shorter inputs stays black.
pub fn concatenate_horizontal(images: &[DynamicImage]) -> Result<RgbImage> {
    if images.is_empty() {
        return Err(CollectorError::EmptyComposite);
    }

    let total_width: u32 = images.iter().map(|img| img.width()).sum();
    let max_height = images.iter().map(|img| img.height()).max().unwrap_or(0);

    let mut canvas = RgbImage::new(total_width, max_height);
    let mut x_offset: i64 = 0;
    for img in images {
        imageops::replace(&mut canvas, &img.to_rgb8(), x_offset, 0);
        x_offset += i64::from(img.width());
    }

    Ok(canvas)
}

/// Arrange up to four images in a 2x2 grid of equally sized cells
pub fn grid_2x2(images: &[DynamicImage]) -> Result<RgbImage> {
    if images.is_empty() {
        return Err(CollectorError::EmptyComposite);
    }

    let cell_width = images.iter().map(|img| img.width()).max().unwrap_or(0);
    let cell_height = images.iter().map(|img| img.height()).max().unwrap_or(0);

    let mut canvas = RgbImage::new(cell_width * 2, cell_height * 2);
    for (i, img) in images.iter().take(4).enumerate() {
        let x = (i % 2) as u32 * cell_width;
        let y = (i / 2) as u32 * cell_height;
        imageops::replace(&mut canvas, &img.to_rgb8(), i64::from(x), i64::from(y));
    }

    Ok(canvas)
}
