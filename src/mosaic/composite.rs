//! Raster pasting onto the mosaic canvas
//!
//! Two kinds of paste happen per cell: the scaled tile is copied over the
//! region opaquely, then a uniform tint is composited on top with the
//! standard "over" operator using the tint's own alpha as mask.

use crate::io::configuration::TINT_ALPHA;
use crate::io::error::{Result, build_error};
use crate::mosaic::tile::TileSize;
use image::{GenericImageView, Rgb, RgbImage, Rgba, RgbaImage, imageops};

/// Uniform translucent square of one source pixel's colour
pub struct TintOverlay {
    pixels: RgbaImage,
}

impl TintOverlay {
    /// Fill a `tile_size` square with `color` at [`TINT_ALPHA`]
    pub fn new(color: Rgb<u8>, tile_size: TileSize) -> Self {
        let [r, g, b] = color.0;
        let side = tile_size.get();
        Self {
            pixels: RgbaImage::from_pixel(side, side, Rgba([r, g, b, TINT_ALPHA])),
        }
    }

    /// Overlay raster
    pub const fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Composite one channel of `fg` over `bg` with coverage `alpha`, rounding to nearest
pub const fn blend_channel(fg: u8, bg: u8, alpha: u8) -> u8 {
    let alpha = alpha as u32;
    ((fg as u32 * alpha + bg as u32 * (255 - alpha) + 127) / 255) as u8
}

// Rejects regions that would reach past the canvas edge instead of clipping
fn check_region<I: GenericImageView>(
    canvas: &RgbImage,
    layer: &I,
    x: u32,
    y: u32,
    operation: &'static str,
) -> Result<()> {
    let right = x.checked_add(layer.width());
    let bottom = y.checked_add(layer.height());
    match (right, bottom) {
        (Some(right), Some(bottom)) if right <= canvas.width() && bottom <= canvas.height() => {
            Ok(())
        }
        _ => Err(build_error(
            operation,
            &format!(
                "{}x{} region at ({x}, {y}) exceeds {}x{} canvas",
                layer.width(),
                layer.height(),
                canvas.width(),
                canvas.height()
            ),
        )),
    }
}

/// Copy `tile` onto `canvas` with its top-left corner at `(x, y)`, replacing what was there
///
/// # Errors
///
/// Returns `MosaicBuild` if the tile does not fit inside the canvas at that position
pub fn paste_opaque(canvas: &mut RgbImage, tile: &RgbImage, x: u32, y: u32) -> Result<()> {
    check_region(canvas, tile, x, y, "tile paste")?;
    imageops::replace(canvas, tile, i64::from(x), i64::from(y));
    Ok(())
}

/// Composite `overlay` onto `canvas` at `(x, y)` using the overlay alpha as mask
///
/// Per channel: `out = (fg * a + bg * (255 - a)) / 255`, rounded to nearest.
///
/// # Errors
///
/// Returns `MosaicBuild` if the overlay does not fit inside the canvas at that position
pub fn paste_blended(canvas: &mut RgbImage, overlay: &RgbaImage, x: u32, y: u32) -> Result<()> {
    check_region(canvas, overlay, x, y, "tint overlay paste")?;

    for (dx, dy, pixel) in overlay.enumerate_pixels() {
        let [r, g, b, alpha] = pixel.0;
        let under = canvas
            .get_pixel_mut_checked(x + dx, y + dy)
            .ok_or_else(|| build_error("tint overlay paste", &"pixel outside canvas"))?;
        let [under_r, under_g, under_b] = under.0;
        *under = Rgb([
            blend_channel(r, under_r, alpha),
            blend_channel(g, under_g, alpha),
            blend_channel(b, under_b, alpha),
        ]);
    }

    Ok(())
}
