//! Mosaic generation
//!
//! This module contains the whole compositing pipeline:
//! - Tile size validation and source scaling
//! - Opaque and alpha-blended pasting
//! - The per-pixel builder driving both

/// Per-pixel mosaic builder
pub mod builder;
/// Opaque and alpha-blended raster pasting
pub mod composite;
/// Tile size and scaled tile
pub mod tile;

pub use builder::{MosaicBuilder, build_mosaic};
pub use tile::{ResizeFilter, ScaledTile, TileSize};
