//! Image decoding and PNG export

use crate::io::error::{MosaicError, Result};
use image::error::{ImageFormatHint, UnsupportedError, UnsupportedErrorKind};
use image::{DynamicImage, ImageError, ImageFormat, ImageReader, RgbImage};
use std::io::Cursor;
use std::path::Path;

/// Formats accepted as mosaic sources
pub const SUPPORTED_FORMATS: [ImageFormat; 3] =
    [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Gif];

/// Decode raw bytes into an image, guessing the format from its signature
///
/// # Errors
///
/// Returns `Decode` if the format is not PNG, JPEG or GIF, or if the data
/// is corrupt
pub fn decode_image(bytes: &[u8], locator: &str) -> Result<DynamicImage> {
    let decode_error = |source| MosaicError::Decode {
        locator: locator.to_string(),
        source,
    };

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| decode_error(ImageError::IoError(e)))?;

    match reader.format() {
        Some(format) if SUPPORTED_FORMATS.contains(&format) => {}
        format => {
            let hint = format.map_or(ImageFormatHint::Unknown, ImageFormatHint::Exact);
            return Err(decode_error(ImageError::Unsupported(
                UnsupportedError::from_format_and_kind(
                    hint.clone(),
                    UnsupportedErrorKind::Format(hint),
                ),
            )));
        }
    }

    reader.decode().map_err(decode_error)
}

/// Export the finished mosaic as PNG, whatever the extension of `output_path`
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn write_png(canvas: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| MosaicError::EncodeWrite {
            path: output_path.to_path_buf(),
            source: e,
        })
}
