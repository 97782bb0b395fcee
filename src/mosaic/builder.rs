//! Pixel-to-tile mosaic generation
//!
//! For every source pixel `(x, y)` the cell at `(x * T, y * T)` of the canvas
//! receives the scaled tile, then a tint of that pixel's colour at half
//! strength. Cells never overlap, so each canvas region is written exactly
//! once and never revisited.

use crate::io::error::{MosaicError, Result, WithOperation, build_error};
use crate::mosaic::composite::{TintOverlay, paste_blended, paste_opaque};
use crate::mosaic::tile::{ResizeFilter, ScaledTile, TileSize};
use image::{DynamicImage, RgbImage};

/// Builds a tinted-tile mosaic from one source image
#[derive(Debug, Clone, Copy)]
pub struct MosaicBuilder {
    tile_size: TileSize,
    filter: ResizeFilter,
}

impl MosaicBuilder {
    /// Create a builder using the default resampling filter
    pub const fn new(tile_size: TileSize) -> Self {
        Self {
            tile_size,
            filter: ResizeFilter::Nearest,
        }
    }

    /// Choose the filter used to shrink the source into a tile
    #[must_use]
    pub const fn with_filter(mut self, filter: ResizeFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Configured tile size
    pub const fn tile_size(&self) -> TileSize {
        self.tile_size
    }

    /// Configured resampling filter
    pub const fn filter(&self) -> ResizeFilter {
        self.filter
    }

    /// Composite the full mosaic for `source`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source has a zero width or height (`InvalidDimensions`)
    /// - The output canvas would not be addressable (`MosaicBuild`)
    /// - A paste falls outside the canvas (`MosaicBuild`)
    pub fn build(&self, source: &DynamicImage) -> Result<RgbImage> {
        self.build_with_progress(source, |_| {})
    }

    /// Composite the full mosaic, calling `on_column` after each finished source column
    ///
    /// The callback receives the number of columns completed so far.
    ///
    /// # Errors
    ///
    /// Same conditions as [`MosaicBuilder::build`]
    pub fn build_with_progress<F>(&self, source: &DynamicImage, mut on_column: F) -> Result<RgbImage>
    where
        F: FnMut(u32),
    {
        let (width, height) = (source.width(), source.height());
        if width == 0 || height == 0 {
            return Err(MosaicError::InvalidDimensions { width, height });
        }

        let side = self.tile_size.get();
        let mut canvas = allocate_canvas(width, height, side)?;

        // Alpha is dropped here so neither the tile nor the tint sees it
        let pixels = source.to_rgb8();
        let tile = ScaledTile::from_source(&pixels, self.tile_size, self.filter);

        for x in 0..width {
            for y in 0..height {
                let (left, top) = (x * side, y * side);
                paste_opaque(&mut canvas, tile.pixels(), left, top)?;

                let color = *pixels
                    .get_pixel_checked(x, y)
                    .ok_or_else(|| build_error("pixel read", &format!("({x}, {y})")))?;
                let overlay = TintOverlay::new(color, self.tile_size);
                paste_blended(&mut canvas, overlay.pixels(), left, top)?;
            }
            on_column(x + 1);
        }

        Ok(canvas)
    }
}

// Size checks up front so an oversized request fails instead of aborting in the allocator
fn allocate_canvas(width: u32, height: u32, side: u32) -> Result<RgbImage> {
    let too_large = || {
        build_error(
            "canvas allocation",
            &format!("{width}x{height} source scaled by {side} exceeds addressable size"),
        )
    };

    let canvas_width = width.checked_mul(side).ok_or_else(too_large)?;
    let canvas_height = height.checked_mul(side).ok_or_else(too_large)?;
    let columns = usize::try_from(canvas_width).with_operation("canvas allocation")?;
    let rows = usize::try_from(canvas_height).with_operation("canvas allocation")?;
    columns
        .checked_mul(rows)
        .and_then(|area| area.checked_mul(3))
        .filter(|&bytes| isize::try_from(bytes).is_ok())
        .ok_or_else(too_large)?;

    Ok(RgbImage::new(canvas_width, canvas_height))
}

/// Validate `tile_size` and build the mosaic with the default filter
///
/// # Errors
///
/// Returns `InvalidTileSize` for sizes below 2, otherwise the errors of
/// [`MosaicBuilder::build`]
pub fn build_mosaic(source: &DynamicImage, tile_size: i64) -> Result<RgbImage> {
    MosaicBuilder::new(TileSize::new(tile_size)?).build(source)
}
