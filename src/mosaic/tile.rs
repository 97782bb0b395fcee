//! Tile size validation and the shared scaled tile
//!
//! A mosaic cell is always a copy of the whole source shrunk to a square of
//! `TileSize` pixels per side. The copy is made once and borrowed for every
//! cell of the canvas.

use crate::io::configuration::MIN_TILE_SIZE;
use crate::io::error::{MosaicError, Result};
use clap::ValueEnum;
use image::RgbImage;
use image::imageops::{self, FilterType};
use std::fmt;

/// Edge length of one mosaic cell, and the scale factor of the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileSize(u32);

impl TileSize {
    /// Validate a requested tile size
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileSize` if the value is below the minimum of 2 or
    /// does not fit a `u32`
    pub fn new(value: i64) -> Result<Self> {
        if value < MIN_TILE_SIZE {
            return Err(MosaicError::InvalidTileSize { value });
        }
        u32::try_from(value)
            .ok()
            .map(Self)
            .ok_or(MosaicError::InvalidTileSize { value })
    }

    /// Tile edge length in pixels
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for TileSize {
    type Error = MosaicError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resampling kernel used to shrink the source into a tile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ResizeFilter {
    /// Nearest neighbour
    #[default]
    Nearest,
    /// Linear
    Triangle,
    /// Cubic
    CatmullRom,
    /// Gaussian
    Gaussian,
    /// Lanczos with window 3
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => Self::Nearest,
            ResizeFilter::Triangle => Self::Triangle,
            ResizeFilter::CatmullRom => Self::CatmullRom,
            ResizeFilter::Gaussian => Self::Gaussian,
            ResizeFilter::Lanczos3 => Self::Lanczos3,
        }
    }
}

/// The whole source image scaled down to one cell
#[derive(Debug, Clone)]
pub struct ScaledTile {
    pixels: RgbImage,
}

impl ScaledTile {
    /// Resize the entire source (no cropping) to `tile_size` square
    pub fn from_source(source: &RgbImage, tile_size: TileSize, filter: ResizeFilter) -> Self {
        let side = tile_size.get();
        Self {
            pixels: imageops::resize(source, side, side, filter.into()),
        }
    }

    /// Tile raster
    pub const fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    /// Edge length in pixels
    pub fn side(&self) -> u32 {
        self.pixels.width()
    }
}
