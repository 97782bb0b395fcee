//! Command-line interface and the load, build, write pipeline

use crate::io::error::{MosaicError, Result};
use crate::io::image::write_png;
use crate::io::progress::ProgressManager;
use crate::io::source::{SourceLocator, load_source};
use crate::mosaic::{MosaicBuilder, ResizeFilter, TileSize};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tilemosaic")]
#[command(
    author,
    version,
    about = "Turn an image into a mosaic of tinted copies of itself"
)]
/// Command-line arguments for the mosaic tool
pub struct Cli {
    /// Edge length of each tile in pixels (minimum 2)
    #[arg(value_name = "TILE_SIZE", allow_negative_numbers = true)]
    pub tile_size: i64,

    /// Input image file path or http(s) URL
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Output file, always written as PNG
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Resampling filter used to shrink the source into a tile
    #[arg(short, long, value_enum, default_value_t = ResizeFilter::Nearest)]
    pub filter: ResizeFilter,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse arguments, reporting parser failures as `Argument` errors
    ///
    /// # Errors
    ///
    /// Returns `Argument` for a wrong argument count, a non-integer tile size,
    /// unknown options, and help or version requests
    pub fn try_parse_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(MosaicError::from)
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Validated settings for one mosaic run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicConfig {
    /// Tile edge length and output scale factor
    pub tile_size: TileSize,
    /// Resolved source image
    pub input: SourceLocator,
    /// Destination PNG path
    pub output: PathBuf,
    /// Resampling filter for the scaled tile
    pub filter: ResizeFilter,
    /// Whether to draw a progress bar
    pub show_progress: bool,
}

impl TryFrom<Cli> for MosaicConfig {
    type Error = MosaicError;

    fn try_from(cli: Cli) -> Result<Self> {
        let tile_size = TileSize::new(cli.tile_size)?;
        let input = SourceLocator::parse(&cli.input)?;
        let show_progress = cli.should_show_progress();

        Ok(Self {
            tile_size,
            input,
            output: cli.output,
            filter: cli.filter,
            show_progress,
        })
    }
}

/// Runs one load, build, write pass with optional progress display
pub struct MosaicProcessor {
    config: MosaicConfig,
    progress_manager: Option<ProgressManager>,
}

impl MosaicProcessor {
    /// Create a processor for the given configuration
    pub fn new(config: MosaicConfig) -> Self {
        let progress_manager = config.show_progress.then(ProgressManager::new);

        Self {
            config,
            progress_manager,
        }
    }

    /// Load the source, composite the mosaic and write it out
    ///
    /// # Errors
    ///
    /// Returns the first failure of loading, building or writing; nothing is
    /// written if any earlier step fails
    // Allow print for user feedback once the file is on disk
    #[allow(clippy::print_stderr)]
    pub fn process(&mut self) -> Result<()> {
        let source = load_source(&self.config.input)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(source.width(), &self.config.input.to_string());
        }

        let builder = MosaicBuilder::new(self.config.tile_size).with_filter(self.config.filter);
        let progress = self.progress_manager.as_ref();
        let mosaic = builder.build_with_progress(&source, |completed| {
            if let Some(pm) = progress {
                pm.update(completed);
            }
        });

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        let mosaic = mosaic?;
        write_png(&mosaic, &self.config.output)?;

        if self.config.show_progress {
            eprintln!(
                "Wrote {}x{} mosaic to {}",
                mosaic.width(),
                mosaic.height(),
                self.config.output.display()
            );
        }

        Ok(())
    }
}
