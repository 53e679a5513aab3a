use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::cli::CompressionLevel;
use crate::error::ExtractError;

/// Save a sprite as RGBA PNG, optionally with compression.
///
/// An existing file at `path` is overwritten.
pub fn save_sprite_image(
    image: &RgbaImage,
    path: &Path,
    compress: Option<CompressionLevel>,
) -> Result<(), ExtractError> {
    // Encode to PNG in memory
    let mut png_data = Cursor::new(Vec::new());
    image
        .write_to(&mut png_data, ImageFormat::Png)
        .map_err(|e| ExtractError::Save {
            path: path.to_path_buf(),
            source: e,
        })?;

    let output_data = if let Some(level) = compress {
        let mut opts = match level {
            CompressionLevel::Level(n) => oxipng::Options::from_preset(n),
            CompressionLevel::Max => oxipng::Options::max_compression(),
        };
        // Output stays RGBA8 regardless of content
        opts.color_type_reduction = false;
        opts.grayscale_reduction = false;
        opts.palette_reduction = false;
        opts.bit_depth_reduction = false;
        oxipng::optimize_from_memory(&png_data.into_inner(), &opts).map_err(|e| {
            ExtractError::Compress {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?
    } else {
        png_data.into_inner()
    };

    fs::write(path, output_data).map_err(|e| ExtractError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
