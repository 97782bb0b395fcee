//! Mosaic generator that tiles an image with tinted copies of itself
//!
//! Every pixel of the source becomes one cell of the output: a copy of the
//! whole source scaled down to the tile size, washed with that pixel's colour
//! at half strength. The output is `tile_size` times larger on each axis.

#![forbid(unsafe_code)]

/// Input/output collaborators, configuration and error handling
pub mod io;
/// Tile scaling, compositing and the mosaic builder
pub mod mosaic;

pub use io::cli::{MosaicConfig, MosaicProcessor};
pub use io::error::{MosaicError, Result};
pub use mosaic::{MosaicBuilder, build_mosaic};

/// Run one mosaic job from validated configuration
///
/// # Errors
///
/// Returns the first failure of loading the source, building the mosaic or
/// writing the output
pub fn run(config: MosaicConfig) -> Result<()> {
    MosaicProcessor::new(config).process()
}
