use image::RgbaImage;

use super::Rect;

/// Find the bounding box of pixels with non-zero alpha.
///
/// Returns `None` if the image is empty or fully transparent.
pub fn opaque_bounds(image: &RgbaImage) -> Option<Rect> {
    let (width, height) = image.dimensions();

    let mut min_x = width;
    let mut min_y = height;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut found = false;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] > 0 {
            found = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    found.then(|| Rect::from_corners(min_x, min_y, max_x + 1, max_y + 1))
}

/// Trim transparent borders from an image, keeping `margin` pixels of border
/// where the image has room for them.
///
/// Returns the cropped image and the kept rectangle relative to the input.
pub fn trim_sprite(image: &RgbaImage, margin: u32) -> Option<(RgbaImage, Rect)> {
    let bounds = opaque_bounds(image)?;
    let (width, height) = image.dimensions();
    let kept = bounds.expand_clamped(margin, width, height);

    let trimmed =
        image::imageops::crop_imm(image, kept.x, kept.y, kept.width, kept.height).to_image();

    Some((trimmed, kept))
}
