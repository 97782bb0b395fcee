//! Mosaic constants and runtime configuration defaults

// Tile geometry
/// Smallest accepted tile edge length in pixels
pub const MIN_TILE_SIZE: i64 = 2;

/// Alpha of the per-cell tint layer (127/255, roughly half strength)
pub const TINT_ALPHA: u8 = 127;

// Remote source fetching
/// Upper bound on connect plus read time for a remote source
pub const FETCH_TIMEOUT_SECS: u64 = 30;

// Keeps a misbehaving server from exhausting memory before decode
/// Maximum number of bytes read from a remote source
pub const MAX_FETCH_BYTES: u64 = 64 * 1024 * 1024;

/// User agent sent with remote source requests
pub const USER_AGENT: &str = concat!("tilemosaic/", env!("CARGO_PKG_VERSION"));

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
