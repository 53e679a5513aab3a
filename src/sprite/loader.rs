use std::path::Path;

use image::{ImageReader, RgbaImage};

use crate::error::ExtractError;

/// Load a sprite sheet from disk and convert it to RGBA8.
///
/// A missing file is reported as [`ExtractError::SourceNotFound`] before any
/// decoding is attempted.
pub fn load_sheet(path: &Path) -> Result<RgbaImage, ExtractError> {
    if !path.is_file() {
        return Err(ExtractError::SourceNotFound(path.to_path_buf()));
    }

    let image = ImageReader::open(path)
        .map_err(|e| ExtractError::Decode {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .with_guessed_format()
        .map_err(|e| ExtractError::Decode {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| ExtractError::Decode {
            path: path.to_path_buf(),
            source: e,
        })?
        .into_rgba8();

    Ok(image)
}
